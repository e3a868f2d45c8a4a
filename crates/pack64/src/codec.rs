//! Vector encode/decode
//!
//! Wire format: one biased-exponent digit followed by one 3-digit group per
//! entry. The empty vector encodes as `"A"`.

use crate::alphabet::{digit_to_char, is_valid, raw_digit};
use crate::error::{Pack64Error, Result};
use crate::exponent::select_exponent;
use crate::fixed::{dequantize, increment, pack_twos_complement, quantize, unpack_twos_complement};

/// Encoding of the empty vector
pub const EMPTY: &str = "A";

/// Encoded length of an `n`-entry vector
#[inline]
pub const fn encoded_len(n: usize) -> usize {
    3 * n + 1
}

/// Encode a vector as a pack64 string.
///
/// Accepts any element type that converts losslessly to `f64`. Fails with
/// `InvalidValue` on NaN or infinite entries and with `Overflow` when the
/// largest magnitude reaches `(2^17 - 0.5) * 2^23`.
pub fn encode<T: Copy + Into<f64>>(vector: &[T]) -> Result<String> {
    if vector.is_empty() {
        return Ok(EMPTY.to_string());
    }

    let mut largest = 0.0f64;
    for &entry in vector {
        let magnitude = entry.into().abs();
        if !magnitude.is_finite() {
            tracing::debug!(len = vector.len(), "rejecting vector with non-finite entry");
            return Err(Pack64Error::InvalidValue);
        }
        largest = largest.max(magnitude);
    }

    let exponent = select_exponent(largest).inspect_err(|e| {
        tracing::debug!(largest, error = %e, "no biased exponent fits vector");
    })?;
    let inc = increment(exponent);
    tracing::trace!(exponent, len = vector.len(), "selected biased exponent");

    let mut out = String::with_capacity(encoded_len(vector.len()));
    out.push(digit_to_char(exponent));
    for &entry in vector {
        let digits = pack_twos_complement(quantize(entry.into(), inc))?;
        out.extend(digits.iter().map(|&d| digit_to_char(d)));
    }
    Ok(out)
}

/// Decode a pack64 string with full validation.
pub fn decode<S: AsRef<[u8]> + ?Sized>(input: &S) -> Result<Vec<f32>> {
    decode_with(input, true)
}

/// Decode without checking the character set.
///
/// Bytes outside the alphabet decode to garbage values instead of failing.
/// Only use this on strings known to come from [`encode`]; it is not safe on
/// untrusted input. Non-ASCII input and most bad lengths are still rejected,
/// see [`decode_with`].
pub fn decode_unchecked<S: AsRef<[u8]> + ?Sized>(input: &S) -> Result<Vec<f32>> {
    decode_with(input, false)
}

/// Decode a pack64 string, optionally validating it first.
///
/// Non-ASCII input is always rejected. With `validate` the input must be
/// `3n + 1` bytes, all from the alphabet. Without it the character set is
/// not checked and the length rule relaxes:
///
/// | length        | result                                          |
/// |---------------|-------------------------------------------------|
/// | 0             | error, there is no exponent byte                |
/// | 2, 3          | empty vector                                    |
/// | 5, 6          | 2 entries, a short digit column reuses its byte |
/// | `3n + 1`      | `n` entries                                     |
/// | anything else | error                                           |
pub fn decode_with<S: AsRef<[u8]> + ?Sized>(input: &S, validate: bool) -> Result<Vec<f32>> {
    let bytes = input.as_ref();
    check_ascii(bytes)?;
    let count = entry_count(bytes.len(), validate)?;
    if validate {
        check_chars(bytes)?;
    }

    let inc = increment(raw_digit(bytes[0]));
    let body = &bytes[1..];
    Ok((0..count)
        .map(|i| {
            let n = unpack_twos_complement([
                column_digit(body, 0, i),
                column_digit(body, 1, i),
                column_digit(body, 2, i),
            ]);
            dequantize(n, inc)
        })
        .collect())
}

/// Digit `i` of column `k`, where column `k` holds bytes `k, k + 3, ...`.
///
/// A column holding a single byte repeats it for every entry; this only
/// happens for the short unchecked lengths 5 and 6.
#[inline]
fn column_digit(body: &[u8], k: usize, i: usize) -> u8 {
    let column_len = (body.len() + 2 - k) / 3;
    let row = if column_len == 1 { 0 } else { i };
    raw_digit(body[k + 3 * row])
}

fn entry_count(len: usize, validate: bool) -> Result<usize> {
    let count = match len {
        0 => None,
        _ if len % 3 == 1 => Some((len - 1) / 3),
        _ if validate => None,
        2 | 3 => Some(0),
        5 | 6 => Some(2),
        _ => None,
    };
    count.ok_or_else(|| {
        tracing::debug!(len, validate, "rejecting string with bad length");
        Pack64Error::format(format!(
            "length {} is not one more than a multiple of 3",
            len
        ))
    })
}

fn check_ascii(bytes: &[u8]) -> Result<()> {
    match bytes.iter().position(|b| !b.is_ascii()) {
        Some(pos) => {
            tracing::debug!(pos, "rejecting non-ASCII string");
            Err(Pack64Error::format(format!(
                "non-ASCII byte 0x{:02X} at position {}",
                bytes[pos], pos
            )))
        }
        None => Ok(()),
    }
}

fn check_chars(bytes: &[u8]) -> Result<()> {
    match bytes.iter().position(|&b| !is_valid(b)) {
        Some(pos) => {
            tracing::debug!(pos, byte = bytes[pos], "rejecting string with invalid byte");
            Err(Pack64Error::format(format!(
                "invalid byte 0x{:02X} at position {}",
                bytes[pos], pos
            )))
        }
        None => Ok(()),
    }
}
