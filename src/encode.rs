//! Base58 encoding.
//! Leading zero bytes become leading '1's; the rest is packed into u64 limbs
//! and drained by repeated divmod 58, least significant digit first.
use crate::bounds::encoded_len_bound;
use crate::words::WordBuffer;
use crate::{Error, ALPHABET, ZERO_SYMBOL};

/// Encodes `input` as Base58 text. Empty input gives an empty string.
///
/// # Errors
/// - `AllocationFailure`: a working or output buffer could not be reserved.
pub fn encode(input: &[u8]) -> Result<String, Error> {
    if input.is_empty() {
        return Ok(String::new());
    }
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let mut num = WordBuffer::from_be_bytes(&input[zeros..])?;
    num.trim();

    // Digits in least-significant-first order
    let mut digits = Vec::new();
    digits.try_reserve_exact(encoded_len_bound(input.len())?)?;
    while !num.is_empty() {
        digits.push(ALPHABET[usize::from(num.divmod58())]);
        num.trim();
    }
    digits.resize(digits.len() + zeros, ZERO_SYMBOL);

    let mut result = String::new();
    result.try_reserve_exact(digits.len())?;
    result.extend(digits.iter().rev().map(|&b| char::from(b)));
    Ok(result)
}
