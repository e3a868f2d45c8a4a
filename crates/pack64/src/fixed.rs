//! Fixed-point quantization and 18-bit two's-complement packing

use crate::alphabet::{char_to_digit, digit_to_char};
use crate::error::{Pack64Error, Result};

/// 2^17: the sign bit of an 18-bit two's-complement integer
pub const SIGN_BIT: i32 = 1 << 17;

/// Smallest quantized value that fits in 18 bits
pub const MIN_QUANTIZED: i32 = -SIGN_BIT;

/// Largest quantized value that fits in 18 bits
pub const MAX_QUANTIZED: i32 = SIGN_BIT - 1;

/// Bias subtracted from the biased exponent to get the power of two
pub const EXPONENT_BIAS: i32 = 40;

const MASK_18: i32 = (1 << 18) - 1;

/// The increment `2^(exponent - 40)` for a biased exponent in `[0, 63]`.
///
/// Built directly from the IEEE-754 bit pattern, so it is exact.
#[inline]
pub fn increment(biased_exponent: u8) -> f64 {
    let unbiased = (biased_exponent & 63) as i64 - EXPONENT_BIAS as i64;
    f64::from_bits(((unbiased + 1023) as u64) << 52)
}

/// `round(value / increment)`, rounding exact midpoints to even
#[inline]
pub fn quantize(value: f64, increment: f64) -> i64 {
    (value / increment).round_ties_even() as i64
}

/// `n * increment`, narrowed to single precision.
///
/// `n` has at most 18 significant bits and `increment` is a power of two in
/// `[2^-40, 2^23]`, so the product is exact in `f32`.
#[inline]
pub fn dequantize(n: i32, increment: f64) -> f32 {
    n as f32 * increment as f32
}

/// Pack a signed 18-bit integer into three 6-bit digits, high bits first
pub fn pack_twos_complement(n: i64) -> Result<[u8; 3]> {
    if n < MIN_QUANTIZED as i64 || n > MAX_QUANTIZED as i64 {
        return Err(Pack64Error::PackingInvariantViolation { value: n });
    }
    let bits = n as i32 & MASK_18;
    Ok([
        ((bits >> 12) & 63) as u8,
        ((bits >> 6) & 63) as u8,
        (bits & 63) as u8,
    ])
}

/// Reassemble three 6-bit digits into a signed 18-bit integer
#[inline]
pub fn unpack_twos_complement(digits: [u8; 3]) -> i32 {
    let value = ((digits[0] as i32 & 63) << 12) | ((digits[1] as i32 & 63) << 6) | (digits[2] as i32 & 63);
    if value >= SIGN_BIT {
        value - (SIGN_BIT << 1)
    } else {
        value
    }
}

/// Round a number to the nearest integer and return its three-character
/// two's-complement form.
pub fn twos_complement_encode(number: f64) -> Result<String> {
    if !number.is_finite() {
        return Err(Pack64Error::InvalidValue);
    }
    let digits = pack_twos_complement(number.round_ties_even() as i64)?;
    Ok(digits.iter().map(|&d| digit_to_char(d)).collect())
}

/// Decode a three-character two's-complement string back to its integer
pub fn twos_complement_decode(s: &str) -> Result<i32> {
    let bytes = s.as_bytes();
    if bytes.len() != 3 {
        return Err(Pack64Error::format(format!(
            "expected 3 characters, got {}",
            bytes.len()
        )));
    }
    let mut digits = [0u8; 3];
    for (i, &b) in bytes.iter().enumerate() {
        digits[i] = char_to_digit(b).ok_or_else(|| {
            Pack64Error::format(format!("invalid byte 0x{:02X} at position {}", b, i))
        })?;
    }
    Ok(unpack_twos_complement(digits))
}
