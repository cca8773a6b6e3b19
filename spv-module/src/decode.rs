use std::io::Read;

use spv_asm::{decode_opcode, Instruction};
use spv_types::{bytes, Endianness, Word};

use crate::header::{Header, MAGIC_BE, MAGIC_LE};
use crate::{Error, HeaderError};

/// Reads a module's header and instructions from a byte stream.
///
/// The scratch word buffer is owned by the decoder and reused between
/// instructions; typed instructions returned to the caller copy out of it.
pub struct Decoder<R> {
    src: R,
    endianness: Endianness,
    words: Vec<Word>,
    quad: [u8; 4],
}

impl<R: Read> Decoder<R> {
    /// Creates a decoder over `src`. The byte order starts little-endian and
    /// is fixed for real once the header's magic has been read.
    pub fn new(src: R) -> Self {
        Self {
            src,
            endianness: Endianness::default(),
            words: Vec::with_capacity(16),
            quad: [0; 4],
        }
    }

    /// Byte order currently applied to word reads.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Reads the module header.
    ///
    /// The magic is read as raw bytes and assembled little-endian; which of
    /// the two known magic values appears decides the byte order for every
    /// subsequent word read from this stream.
    pub fn read_header(&mut self) -> Result<Header, Error> {
        if !self.fill_quad()? {
            return Err(Error::UnexpectedEndOfStream);
        }

        let magic = Word::from_le_bytes(self.quad);
        self.endianness = match magic {
            MAGIC_LE => Endianness::Little,
            MAGIC_BE => Endianness::Big,
            _ => return Err(HeaderError::InvalidMagic.into()),
        };

        let version = self.read_word()?;
        let generator = self.read_word()?;
        let bound = self.read_word()?;
        let reserved = self.read_word()?;

        Ok(Header { magic, version, generator, bound, reserved })
    }

    /// Reads the next instruction as raw words, leading count/opcode word
    /// included.
    ///
    /// Returns `Ok(None)` when the stream ends cleanly on an instruction
    /// boundary. The returned slice aliases the decoder's scratch buffer and
    /// is valid until the next read.
    pub fn read_instruction_words(&mut self) -> Result<Option<&[Word]>, Error> {
        self.words.clear();

        if !self.fill_quad()? {
            return Ok(None);
        }

        let first = bytes::word_from_bytes(self.endianness, self.quad);
        let (count, _) = decode_opcode(first);
        if count < 1 {
            return Err(Error::InvalidWordCount);
        }

        self.words.push(first);
        for _ in 1..count {
            let word = self.read_word()?;
            self.words.push(word);
        }

        Ok(Some(&self.words))
    }

    /// Reads and decodes the next instruction.
    ///
    /// Returns `Ok(None)` when the stream ends cleanly on an instruction
    /// boundary; the returned instruction owns its operand data.
    pub fn read_instruction(&mut self) -> Result<Option<Instruction>, Error> {
        let Some(words) = self.read_instruction_words()? else {
            return Ok(None);
        };

        Ok(Some(Instruction::decode(words)?))
    }

    fn read_word(&mut self) -> Result<Word, Error> {
        if !self.fill_quad()? {
            return Err(Error::UnexpectedEndOfStream);
        }
        Ok(bytes::word_from_bytes(self.endianness, self.quad))
    }

    // Fills the four-byte scratch. Ok(false) on a clean end of stream before
    // the first byte; ending inside the quad is an error.
    fn fill_quad(&mut self) -> Result<bool, Error> {
        let mut have = 0;

        while have < 4 {
            match self.src.read(&mut self.quad[have..]) {
                Ok(0) if have == 0 => return Ok(false),
                Ok(0) => return Err(Error::UnexpectedEndOfStream),
                Ok(n) => have += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(true)
    }
}
