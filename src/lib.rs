//! Base58 codec over big-endian 64-bit limbs.
//! Bitcoin alphabet; leading zero bytes map 1:1 to leading '1's in both directions.

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Character for digit 0, also used to prefix-encode leading zero bytes.
pub(crate) const ZERO_SYMBOL: u8 = ALPHABET[0];

mod bounds;
mod decode;
mod encode;
mod error;
mod table;
mod words;

pub use decode::decode;
pub use encode::encode;
pub use error::Error;
