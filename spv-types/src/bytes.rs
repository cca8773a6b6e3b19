//! Byte-level packing of words.
//!
//! A module is a word stream; byte order only exists at the stream boundary.
//! The magic value in the header decides which order applies to everything
//! after it, so the conversion is parameterized rather than fixed.

use crate::Word;

/// Byte order of a word stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

/// Assembles a word from four stream bytes in the given byte order.
pub const fn word_from_bytes(endianness: Endianness, bytes: [u8; 4]) -> Word {
    match endianness {
        Endianness::Little => Word::from_le_bytes(bytes),
        Endianness::Big => Word::from_be_bytes(bytes),
    }
}

/// Splits a word into four stream bytes in the given byte order.
pub const fn word_to_bytes(endianness: Endianness, word: Word) -> [u8; 4] {
    match endianness {
        Endianness::Little => word.to_le_bytes(),
        Endianness::Big => word.to_be_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_packing_is_order_sensitive() {
        assert_eq!(word_from_bytes(Endianness::Little, [0x03, 0x02, 0x23, 0x07]), 0x0723_0203);
        assert_eq!(word_from_bytes(Endianness::Big, [0x07, 0x23, 0x02, 0x03]), 0x0723_0203);

        assert_eq!(word_to_bytes(Endianness::Little, 0x0723_0203), [0x03, 0x02, 0x23, 0x07]);
        assert_eq!(word_to_bytes(Endianness::Big, 0x0723_0203), [0x07, 0x23, 0x02, 0x03]);
    }

    #[test]
    fn round_trips_in_both_orders() {
        for word in [0u32, 1, 0xdead_beef, u32::MAX] {
            for endianness in [Endianness::Little, Endianness::Big] {
                assert_eq!(word, word_from_bytes(endianness, word_to_bytes(endianness, word)));
            }
        }
    }
}
