//! Multi-word unsigned integer used by both codec directions.
//! Limbs are u64, most significant first, each limb big-endian.
//! Wide steps go through u128 so no partial product or running remainder is lost.
use crate::Error;

const WORD_BYTES: usize = 8;

const BASE: u128 = 58;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordBuffer {
    words: Vec<u64>,
}

/// Number of words needed to hold `len` bytes.
#[inline]
pub(crate) fn word_count(len: usize) -> usize {
    len.div_ceil(WORD_BYTES)
}

#[inline]
fn pack(chunk: &[u8]) -> u64 {
    chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

impl WordBuffer {
    /// Zero-valued buffer of `len` words.
    pub(crate) fn zeroed(len: usize) -> Result<Self, Error> {
        let mut words = Vec::new();
        words.try_reserve_exact(len)?;
        words.resize(len, 0);
        Ok(Self { words })
    }

    /// Packs `bytes` big-endian. A length that is not a multiple of 8 leaves
    /// the short remainder in the first word, as if left-padded with zeros.
    pub(crate) fn from_be_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut words = Vec::new();
        words.try_reserve_exact(word_count(bytes.len()))?;
        let (head, body) = bytes.split_at(bytes.len() % WORD_BYTES);
        if !head.is_empty() {
            words.push(pack(head));
        }
        words.extend(body.chunks_exact(WORD_BYTES).map(pack));
        Ok(Self { words })
    }

    /// Serializes into exactly `total_len` bytes, most significant first.
    ///
    /// The buffer must hold exactly `word_count(total_len)` words; a short
    /// first chunk takes the low bytes of the first word.
    pub(crate) fn to_be_bytes(&self, total_len: usize) -> Result<Vec<u8>, Error> {
        debug_assert_eq!(self.words.len(), word_count(total_len));
        let mut out = Vec::new();
        out.try_reserve_exact(total_len)?;
        let head = total_len % WORD_BYTES;
        let mut words = self.words.iter();
        if head != 0 {
            if let Some(first) = words.next() {
                out.extend_from_slice(&first.to_be_bytes()[WORD_BYTES - head..]);
            }
        }
        for word in words {
            out.extend_from_slice(&word.to_be_bytes());
        }
        Ok(out)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drops leading zero words; a zero value ends up empty.
    pub(crate) fn trim(&mut self) {
        let leading = self.words.iter().take_while(|&&word| word == 0).count();
        if leading > 0 {
            self.words.drain(..leading);
        }
    }

    /// Minimal big-endian byte length of the value. Call after `trim`.
    pub(crate) fn significant_bytes(&self) -> usize {
        match self.words.first() {
            None => 0,
            Some(&top) => {
                let top_bits = (u64::BITS - top.leading_zeros()) as usize;
                (self.words.len() - 1) * WORD_BYTES + top_bits.div_ceil(8)
            }
        }
    }

    /// Divides in place by 58 and returns the remainder.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn divmod58(&mut self) -> u8 {
        let mut remainder = 0u128;
        for word in &mut self.words {
            let acc = (remainder << 64) | u128::from(*word);
            // remainder < 58, so the quotient fits in one word
            *word = (acc / BASE) as u64;
            remainder = acc % BASE;
        }
        remainder as u8
    }

    /// Computes `value * 58 + digit` in place. Returns the carry out of the
    /// most significant word, zero when the buffer is large enough.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn muladd58(&mut self, digit: u8) -> u64 {
        let mut carry = u128::from(digit);
        for word in self.words.iter_mut().rev() {
            let acc = u128::from(*word) * BASE + carry;
            *word = acc as u64;
            carry = acc >> 64;
        }
        carry as u64
    }
}
