//! Biased exponent selection
//!
//! The largest quantized integer is `2^17 - 1`, so the largest magnitude that
//! packs with biased exponent 0 is `(2^17 - 1) * 2^-40`. Anything below
//! `EPSILON = (2^17 - 0.5) * 2^-40` still rounds down to it, and `EPSILON`
//! itself rounds (half to even) up to `2^17`. The threshold for exponent `e`
//! is therefore `EPSILON * 2^e`:
//!
//! | `L / EPSILON` below | biased exponent |
//! |---------------------|-----------------|
//! | 1                   | 0               |
//! | 2                   | 1               |
//! | 4                   | 2               |
//!
//! i.e. the smallest non-negative `e` with `L / EPSILON = m * 2^e`, `m < 1`,
//! which is the exponent half of `frexp`. Every threshold is an exact power of
//! two times `EPSILON`, so the division is exact there and the bit-level
//! exponent read below never misrounds.

use crate::error::{Pack64Error, Result};

/// `(2^17 - 0.5) * 2^-40`
pub const EPSILON: f64 = (131072.0 - 0.5) / 1_099_511_627_776.0;

/// Largest legal biased exponent
pub const MAX_EXPONENT: u8 = 63;

/// Exponent of `x` in the `frexp` sense: `x = m * 2^p` with `0.5 <= m < 1`.
///
/// Only meaningful for finite, non-zero `x`.
fn frexp_exponent(x: f64) -> i32 {
    let bits = x.abs().to_bits();
    let raw = ((bits >> 52) & 0x7ff) as i32;
    if raw == 0 {
        // Subnormal: the leading set bit of the mantissa fixes the scale.
        let mantissa = bits & ((1u64 << 52) - 1);
        -1022 - (mantissa.leading_zeros() as i32 - 12)
    } else {
        raw - 1022
    }
}

/// Select the minimal biased exponent for a vector whose largest entry
/// magnitude is `largest`.
pub fn select_exponent(largest: f64) -> Result<u8> {
    if !largest.is_finite() {
        return Err(Pack64Error::InvalidValue);
    }
    if largest == 0.0 {
        return Ok(0);
    }

    let ratio = largest.abs() / EPSILON;
    if ratio.is_infinite() {
        return Err(Pack64Error::Overflow { magnitude: largest });
    }

    let exponent = frexp_exponent(ratio).max(0);
    if exponent > MAX_EXPONENT as i32 {
        return Err(Pack64Error::Overflow { magnitude: largest });
    }
    Ok(exponent as u8)
}
