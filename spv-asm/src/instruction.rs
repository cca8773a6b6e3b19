//! Instruction-wide codec and validity entry points.

use alloc::vec::Vec;

use spv_types::Word;

use crate::checks;
use crate::errors::{CheckError, DecodeError};
use crate::opcode::{decode_opcode, encode_opcode};
use crate::{Instruction, Opcode};

impl Instruction {
    /// Decodes one instruction from its full word form, leading count/opcode
    /// word included.
    ///
    /// The embedded word count must be at least one and covered by `words`;
    /// enumerated operands are validated as they are read. The no-op shape
    /// decodes but is never accepted.
    pub fn decode(words: &[Word]) -> Result<Self, DecodeError> {
        let Some(&first) = words.first() else {
            return Err(DecodeError::InvalidWordCount);
        };

        let (count, opcode) = decode_opcode(first);
        if count < 1 || words.len() < count as usize {
            return Err(DecodeError::InvalidWordCount);
        }

        let opcode = Opcode::try_from(opcode)?;
        let instruction = Self::decode_operands(opcode, &words[1..count as usize])?;

        if matches!(instruction, Self::Nop(_)) {
            return Err(DecodeError::Unacceptable);
        }

        Ok(instruction)
    }

    /// Appends the instruction's full word form to `out`, leading word
    /// included.
    pub fn encode_into(&self, out: &mut Vec<Word>) {
        let start = out.len();
        out.push(0);
        self.write_operands(out);

        let count = (out.len() - start) as u32;
        out[start] = encode_opcode(count, self.opcode() as u32);
    }

    /// Number of words the instruction occupies once encoded, leading word
    /// included. Optional trailing operands count only when present.
    pub fn encoded_len(&self) -> u32 {
        1 + self.operand_words()
    }

    /// True for the debug-only shapes whose removal is semantics-preserving:
    /// source annotations, names and line information.
    pub fn is_debug(&self) -> bool {
        matches!(
            self,
            Self::Source(_)
                | Self::SourceExtension(_)
                | Self::Name(_)
                | Self::MemberName(_)
                | Self::DebugString(_)
                | Self::Line(_)
        )
    }

    /// Validates the instruction's operand values: every enumerated or
    /// bitmask field against its family, then the shape's own constraints.
    pub fn verify(&self) -> Result<(), CheckError> {
        self.check_operands()?;
        checks::constrain(self)
    }
}
