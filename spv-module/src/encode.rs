use std::io::Write;
use std::mem;

use spv_asm::{decode_opcode, Instruction};
use spv_types::{bytes, Endianness, Word};

use crate::header::Header;
use crate::{Error, HeaderError};

/// Writes a module's header and instructions to a byte stream.
pub struct Encoder<W> {
    dst: W,
    endianness: Endianness,
    words: Vec<Word>,
}

impl<W: Write> Encoder<W> {
    pub fn new(dst: W) -> Self {
        Self {
            dst,
            endianness: Endianness::default(),
            words: Vec::with_capacity(16),
        }
    }

    /// Writes the module header.
    ///
    /// The header's magic fixes the byte order for this and every subsequent
    /// write: the magic value itself always serializes to the same four
    /// bytes, which is exactly what lets a reader recover the order.
    pub fn write_header(&mut self, header: &Header) -> Result<(), Error> {
        self.endianness = header.endianness().ok_or(HeaderError::InvalidMagic)?;

        self.dst.write_all(&header.magic.to_le_bytes())?;

        self.write_word(header.version)?;
        self.write_word(header.generator)?;
        self.write_word(header.bound)?;
        self.write_word(header.reserved)
    }

    /// Writes an already-encoded instruction.
    ///
    /// The count embedded in the first word must match the slice length.
    pub fn write_instruction_words(&mut self, words: &[Word]) -> Result<(), Error> {
        let Some(&first) = words.first() else {
            return Ok(());
        };

        let (count, _) = decode_opcode(first);
        if count as usize != words.len() {
            return Err(Error::InvalidWordCount);
        }

        for &word in words {
            self.write_word(word)?;
        }

        Ok(())
    }

    /// Encodes and writes one instruction.
    pub fn write_instruction(&mut self, instruction: &Instruction) -> Result<(), Error> {
        // The word count field is 16 bits; an oversized record (a giant
        // string literal, in practice) cannot be represented.
        if instruction.encoded_len() > 0xffff {
            return Err(Error::InvalidWordCount);
        }

        let mut words = mem::take(&mut self.words);
        words.clear();
        instruction.encode_into(&mut words);

        let result = self.write_instruction_words(&words);
        self.words = words;
        result
    }

    fn write_word(&mut self, word: Word) -> Result<(), Error> {
        self.dst
            .write_all(&bytes::word_to_bytes(self.endianness, word))?;
        Ok(())
    }
}
