//! Base58 decoding.
//! Surrounding ASCII whitespace is ignored, leading '1's become zero bytes, and the
//! remaining digits are folded into u64 limbs by Horner steps (acc = acc * 58 + digit).
use crate::bounds::decoded_words_bound;
use crate::table::digit;
use crate::words::WordBuffer;
use crate::{Error, ZERO_SYMBOL};

#[inline]
fn is_padding(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Decodes Base58 text (as `&str`, `String` or raw bytes) into bytes.
///
/// Empty or whitespace-only input gives an empty vector.
///
/// # Errors
/// - `InvalidCharacter`: a byte outside the alphabet, with its offset in `input`.
/// - `AllocationFailure`: a working or output buffer could not be reserved.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let start = input.iter().take_while(|&&b| is_padding(b)).count();
    let end = input.len() - input[start..].iter().rev().take_while(|&&b| is_padding(b)).count();
    let text = &input[start..end];
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let zeros = text.iter().take_while(|&&b| b == ZERO_SYMBOL).count();
    let digits = &text[zeros..];

    // Sized from the significant digits only, so leading '1's cost nothing
    let mut num = WordBuffer::zeroed(decoded_words_bound(digits.len())?)?;
    for (i, &ch) in digits.iter().enumerate() {
        let value = digit(ch).ok_or(Error::InvalidCharacter {
            character: ch,
            index: start + zeros + i,
        })?;
        let carry = num.muladd58(value);
        debug_assert_eq!(carry, 0, "decode buffer undersized");
    }
    num.trim();

    let len = num.significant_bytes();
    let mut output = Vec::new();
    output.try_reserve_exact(zeros + len)?;
    output.resize(zeros, 0);
    if len > 0 {
        output.extend_from_slice(&num.to_be_bytes(len)?);
    }
    Ok(output)
}
