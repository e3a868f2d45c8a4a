//! The 64-symbol digit alphabet
//!
//! `A-Z` (0-25), `a-z` (26-51), `0-9` (52-61), `-` (62), `_` (63).
//! Same symbols as base64url, but the encoding is not base64.

/// All 64 digit characters, in digit order
pub const CHARS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Sentinel stored in the reverse table for bytes outside the alphabet
pub const INVALID: u8 = 0xFF;

/// Reverse lookup: byte value -> digit, or `INVALID`
const CHAR_TO_DIGIT: [u8; 256] = build_reverse_table();

const fn build_reverse_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut digit = 0;
    while digit < 64 {
        table[CHARS[digit] as usize] = digit as u8;
        digit += 1;
    }
    table
}

/// Map a digit in `[0, 63]` to its character. Higher bits are ignored.
#[inline]
pub fn digit_to_char(digit: u8) -> char {
    CHARS[(digit & 63) as usize] as char
}

/// Map an alphabet byte back to its digit.
///
/// Returns `None` for every byte outside the alphabet, which includes all
/// non-ASCII bytes and so every byte of a multi-byte UTF-8 code point.
#[inline]
pub fn char_to_digit(byte: u8) -> Option<u8> {
    match CHAR_TO_DIGIT[byte as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}

/// Raw table lookup, returning `INVALID` for bytes outside the alphabet
#[inline]
pub(crate) fn raw_digit(byte: u8) -> u8 {
    CHAR_TO_DIGIT[byte as usize]
}

/// Check whether a byte belongs to the alphabet
#[inline]
pub fn is_valid(byte: u8) -> bool {
    raw_digit(byte) != INVALID
}
