//! Pack64 Vector Encoding
//!
//! Packs a numeric vector into a printable ASCII string at 3 characters per
//! entry: one shared power-of-two exponent digit, then each entry as an 18-bit
//! two's-complement integer in three base-64 digits. Lossy (about 17 bits of
//! precision relative to the largest entry) but safe for URLs and text
//! protocols, and canonical: re-encoding a decoded vector gives the same
//! string.
//!
//! ```
//! let encoded = pack64::encode(&[-1.0, 1.0]).unwrap();
//! assert_eq!(encoded, "YwAAQAA");
//! assert_eq!(pack64::decode(&encoded).unwrap(), vec![-1.0f32, 1.0]);
//! ```

pub mod alphabet;
mod codec;
mod config;
mod error;
pub mod exponent;
pub mod fixed;
mod packed;

pub use codec::{decode, decode_unchecked, decode_with, encode, encoded_len, EMPTY};
pub use config::{CodecConfig, VALIDATE_ENV};
pub use error::{Pack64Error, Result};
pub use exponent::{select_exponent, EPSILON};
pub use fixed::{twos_complement_decode, twos_complement_encode};
pub use packed::PackedVector;
