use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Word, WORD_SIZE};

/// A NUL-terminated string literal embedded in an instruction.
///
/// The UTF-8 octets are packed four per word following the little-endian
/// convention (the first octet occupies the lowest-order byte of the word),
/// independent of the stream's byte order. The final word holds the
/// terminating NUL and is zero-padded to the word boundary, so an `L`-byte
/// string always occupies `max(1, ceil((L + 1) / 4))` words.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LitString(String);

impl LitString {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of words the literal occupies once encoded.
    pub fn encoded_len(&self) -> u32 {
        let with_nul = self.0.len() + 1;
        (with_nul.div_ceil(WORD_SIZE)).max(1) as u32
    }

    /// Reads a literal from the front of `words`.
    ///
    /// Returns the literal and the number of words it consumed, or `None`
    /// when no terminating NUL is found. Octets past the terminator in the
    /// final word are padding and are ignored.
    pub fn decode(words: &[Word]) -> Option<(Self, usize)> {
        let mut bytes = Vec::with_capacity(words.len() * WORD_SIZE);

        for (index, word) in words.iter().enumerate() {
            for byte in word.to_le_bytes() {
                if byte == 0 {
                    return Some((Self(String::from_utf8_lossy(&bytes).into_owned()), index + 1));
                }
                bytes.push(byte);
            }
        }

        None
    }

    /// Appends the encoded literal to `out`.
    pub fn encode_into(&self, out: &mut Vec<Word>) {
        let mut chunks = self.0.as_bytes().chunks_exact(WORD_SIZE);

        for chunk in chunks.by_ref() {
            out.push(Word::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        // Tail block carries the terminator; an empty tail is just the NUL.
        let mut tail = [0u8; WORD_SIZE];
        tail[..chunks.remainder().len()].copy_from_slice(chunks.remainder());
        out.push(Word::from_le_bytes(tail));
    }
}

impl fmt::Display for LitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LitString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LitString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encoded_len_counts_the_terminator() {
        assert_eq!(LitString::new("").encoded_len(), 1);
        assert_eq!(LitString::new("abc").encoded_len(), 1);
        assert_eq!(LitString::new("abcd").encoded_len(), 2);
        assert_eq!(LitString::new("test source extension").encoded_len(), 6);
    }

    #[test]
    fn decodes_a_known_literal() {
        let words = [
            0x7473_6574, 0x756f_7320, 0x2065_6372, 0x6574_7865, 0x6f69_736e, 0x0000_006e,
        ];

        let (s, consumed) = LitString::decode(&words).unwrap();
        assert_eq!(s.as_str(), "test source extension");
        assert_eq!(consumed, 6);

        let mut out = Vec::new();
        s.encode_into(&mut out);
        assert_eq!(out, words);
    }

    #[test]
    fn unterminated_input_is_rejected() {
        assert!(LitString::decode(&[0x6161_6161]).is_none());
        assert!(LitString::decode(&[]).is_none());
    }

    #[test]
    fn empty_string_is_one_zero_word() {
        let mut out = Vec::new();
        LitString::new("").encode_into(&mut out);
        assert_eq!(out, [0]);

        let (s, consumed) = LitString::decode(&out).unwrap();
        assert!(s.is_empty());
        assert_eq!(consumed, 1);
    }

    proptest! {
        #[test]
        fn round_trips_and_obeys_the_length_law(s in "[a-zA-Z0-9 _.:/-]{0,64}") {
            let lit = LitString::new(s.as_str());
            prop_assert_eq!(lit.encoded_len() as usize, (s.len() + 1).div_ceil(4).max(1));

            let mut words = Vec::new();
            lit.encode_into(&mut words);
            prop_assert_eq!(words.len(), lit.encoded_len() as usize);

            let (back, consumed) = LitString::decode(&words).unwrap();
            prop_assert_eq!(consumed, words.len());
            prop_assert_eq!(back.as_str(), s.as_str());
        }
    }
}
