use crate::ALPHABET;

/// Marks bytes that are not part of the alphabet.
pub(crate) const INVALID: u8 = 0xFF;

/// Byte -> digit lookup covering every byte value, evaluated at compile time.
pub(crate) const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

#[inline]
pub(crate) fn digit(ch: u8) -> Option<u8> {
    match DECODE_TABLE[usize::from(ch)] {
        INVALID => None,
        value => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_of_alphabet() {
        for (i, &ch) in ALPHABET.iter().enumerate() {
            assert_eq!(digit(ch), Some(i as u8));
        }
        let valid = DECODE_TABLE.iter().filter(|&&value| value != INVALID).count();
        assert_eq!(valid, 58);
    }

    #[test]
    fn test_confusable_and_non_ascii_rejected() {
        for ch in [b'0', b'O', b'I', b'l', b' ', b'+', b'/', 0x00, 0x80, 0xFF] {
            assert_eq!(digit(ch), None, "byte {:#04x}", ch);
        }
    }
}
