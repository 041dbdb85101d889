//! Worst-case output sizes for the two conversion directions.
//!
//! Each bound is `floor(n * num / den) + 1` where `num / den` rounds the exact
//! expansion ratio up, so `ceil(n * exact) <= bound(n)` for every `n`.
//! Arithmetic overflow is reported as an allocation failure.
use crate::words::word_count;
use crate::Error;

/// Characters per input byte, rounded up from log(256) / log(58) = 1.36565...
const ENCODE_RATIO: (usize, usize) = (138, 100);

/// Bytes per base58 digit, rounded up from log(58) / log(256) = 0.73224...
const DECODE_RATIO: (usize, usize) = (733, 1000);

fn scale(n: usize, (num, den): (usize, usize)) -> Result<usize, Error> {
    n.checked_mul(num)
        .map(|scaled| scaled / den + 1)
        .ok_or(Error::AllocationFailure)
}

/// Upper bound on the Base58 length of `len` input bytes.
pub(crate) fn encoded_len_bound(len: usize) -> Result<usize, Error> {
    scale(len, ENCODE_RATIO)
}

/// Upper bound on the byte length of a value written with `digits` base58 digits.
pub(crate) fn decoded_len_bound(digits: usize) -> Result<usize, Error> {
    scale(digits, DECODE_RATIO)
}

pub(crate) fn decoded_words_bound(digits: usize) -> Result<usize, Error> {
    decoded_len_bound(digits).map(word_count)
}
