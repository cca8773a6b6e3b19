//! The field-driven operand (de)serializer.
//!
//! Every field type an instruction can declare implements [`Operand`]; record
//! codecs are a fold of this trait over the declared fields, in wire order.
//! That keeps the per-opcode table purely declarative: no record shape owns a
//! hand-written codec path.

use alloc::vec::Vec;

use spv_types::{Id, LitString, Word};

use crate::errors::{CheckError, DecodeError};

/// A single instruction field, as marshalled to and from operand words.
pub trait Operand: Sized {
    /// Reads the field from the front of `words`, advancing the cursor.
    fn read(words: &mut &[Word]) -> Result<Self, DecodeError>;

    /// Appends the field's wire form to `out`.
    fn write(&self, out: &mut Vec<Word>);

    /// Number of words the field occupies once encoded.
    fn word_count(&self) -> u32;

    /// Re-validates the held value against its family, if it has one.
    fn check(&self) -> Result<(), CheckError> {
        Ok(())
    }
}

pub(crate) fn take_word(words: &mut &[Word]) -> Result<Word, DecodeError> {
    let (&first, rest) = words.split_first().ok_or(DecodeError::MissingOperands)?;
    *words = rest;
    Ok(first)
}

impl Operand for Word {
    fn read(words: &mut &[Word]) -> Result<Self, DecodeError> {
        take_word(words)
    }

    fn write(&self, out: &mut Vec<Word>) {
        out.push(*self);
    }

    fn word_count(&self) -> u32 {
        1
    }
}

impl Operand for LitString {
    fn read(words: &mut &[Word]) -> Result<Self, DecodeError> {
        let (literal, consumed) =
            LitString::decode(words).ok_or(DecodeError::MissingOperands)?;
        *words = &words[consumed..];
        Ok(literal)
    }

    fn write(&self, out: &mut Vec<Word>) {
        self.encode_into(out);
    }

    fn word_count(&self) -> u32 {
        self.encoded_len()
    }
}

/// A variable-length tail: consumes every remaining operand word.
impl<T: Operand> Operand for Vec<T> {
    fn read(words: &mut &[Word]) -> Result<Self, DecodeError> {
        let mut out = Vec::with_capacity(words.len());
        while !words.is_empty() {
            out.push(T::read(words)?);
        }
        Ok(out)
    }

    fn write(&self, out: &mut Vec<Word>) {
        for element in self {
            element.write(out);
        }
    }

    fn word_count(&self) -> u32 {
        self.iter().map(Operand::word_count).sum()
    }

    fn check(&self) -> Result<(), CheckError> {
        for element in self {
            element.check()?;
        }
        Ok(())
    }
}

/// An optional trailing id operand.
///
/// Absent and zero are the same state: the field reads as zero when the
/// instruction's word count is exhausted, and a zero value is omitted on
/// encode, shortening the instruction accordingly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionalId(pub Id);

impl OptionalId {
    pub const NONE: Self = Self(0);

    pub fn is_present(self) -> bool {
        self.0 != 0
    }
}

impl From<Id> for OptionalId {
    fn from(id: Id) -> Self {
        Self(id)
    }
}

impl Operand for OptionalId {
    fn read(words: &mut &[Word]) -> Result<Self, DecodeError> {
        if words.is_empty() {
            return Ok(Self::NONE);
        }
        take_word(words).map(Self)
    }

    fn write(&self, out: &mut Vec<Word>) {
        if self.is_present() {
            out.push(self.0);
        }
    }

    fn word_count(&self) -> u32 {
        u32::from(self.is_present())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_read_in_order() {
        let mut words: &[Word] = &[1, 2, 3];
        assert_eq!(Word::read(&mut words).unwrap(), 1);
        assert_eq!(<Vec<Word>>::read(&mut words).unwrap(), [2, 3]);
        assert!(words.is_empty());
        assert_eq!(Word::read(&mut words), Err(DecodeError::MissingOperands));
    }

    #[test]
    fn optional_id_defaults_to_absent() {
        let mut words: &[Word] = &[];
        assert_eq!(OptionalId::read(&mut words).unwrap(), OptionalId::NONE);

        let mut words: &[Word] = &[7];
        let id = OptionalId::read(&mut words).unwrap();
        assert_eq!(id, OptionalId(7));
        assert_eq!(id.word_count(), 1);
        assert_eq!(OptionalId::NONE.word_count(), 0);

        let mut out = Vec::new();
        OptionalId::NONE.write(&mut out);
        assert!(out.is_empty());
    }
}
