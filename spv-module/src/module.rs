use std::io::{Read, Write};

use spv_asm::{Instruction, Opcode};

use crate::header::Header;
use crate::{Decoder, Encoder, Error};

/// A complete module: header plus ordered instruction list.
///
/// The instruction order is semantically meaningful; [`Module::verify`]
/// checks it against the module layout grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    pub header: Header,
    pub instructions: Vec<Instruction>,
}

impl Module {
    /// An empty little-endian module for the implemented specification
    /// version.
    pub fn new() -> Self {
        Self { header: Header::new(), instructions: Vec::new() }
    }

    /// Loads a full module from a byte stream: the header, then instructions
    /// until the stream ends on an instruction boundary.
    pub fn load(src: impl Read) -> Result<Self, Error> {
        let mut decoder = Decoder::new(src);
        let header = decoder.read_header()?;

        let mut instructions = Vec::with_capacity(128);
        while let Some(instruction) = decoder.read_instruction()? {
            instructions.push(instruction);
        }

        tracing::debug!(
            count = instructions.len(),
            endianness = ?decoder.endianness(),
            "loaded module"
        );

        Ok(Self { header, instructions })
    }

    /// Writes the module to a byte stream in the byte order the header's
    /// magic declares.
    pub fn save(&self, dst: impl Write) -> Result<(), Error> {
        let mut encoder = Encoder::new(dst);
        encoder.write_header(&self.header)?;

        for instruction in &self.instructions {
            encoder.write_instruction(instruction)?;
        }

        tracing::debug!(count = self.instructions.len(), "saved module");
        Ok(())
    }

    /// Removes every debug-only instruction in place, preserving order.
    ///
    /// Purely a transformation; no validation runs.
    pub fn strip(&mut self) {
        self.instructions.retain(|instruction| !instruction.is_debug());
    }

    /// Number of instructions carrying the given opcode.
    pub fn count(&self, opcode: Opcode) -> usize {
        self.filter(opcode).count()
    }

    /// Index of the first instruction carrying the given opcode.
    pub fn position(&self, opcode: Opcode) -> Option<usize> {
        self.instructions
            .iter()
            .position(|instruction| instruction.opcode() == opcode)
    }

    /// First instruction carrying the given opcode.
    pub fn first(&self, opcode: Opcode) -> Option<&Instruction> {
        self.position(opcode).map(|index| &self.instructions[index])
    }

    /// All instructions carrying the given opcode, in module order.
    pub fn filter(&self, opcode: Opcode) -> impl Iterator<Item = &Instruction> {
        self.instructions
            .iter()
            .filter(move |instruction| instruction.opcode() == opcode)
    }

    // Pairs up function-open and function-end indices, inclusive on both
    // ends. Unbalanced lists pair nothing; the layout grammar reports those.
    pub(crate) fn function_ranges(&self) -> Vec<(usize, usize)> {
        paired_ranges(&self.instructions, Opcode::Function, Opcode::FunctionEnd, 0)
    }

    // Block ranges (label index, terminator index) within one function.
    pub(crate) fn block_ranges(&self, start: usize, end: usize) -> Vec<(usize, usize)> {
        paired_ranges(&self.instructions[start..end], Opcode::Label, Opcode::Branch, start)
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}

fn indices_of(instructions: &[Instruction], opcode: Opcode, offset: usize) -> Vec<usize> {
    instructions
        .iter()
        .enumerate()
        .filter(|(_, instruction)| instruction.opcode() == opcode)
        .map(|(index, _)| index + offset)
        .collect()
}

fn paired_ranges(
    instructions: &[Instruction],
    open: Opcode,
    close: Opcode,
    offset: usize,
) -> Vec<(usize, usize)> {
    let opens = indices_of(instructions, open, offset);
    let closes = indices_of(instructions, close, offset);

    if opens.len() != closes.len() {
        return Vec::new();
    }

    opens.into_iter().zip(closes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use spv_asm::{
        op, AddressingModel, ExecutionMode, ExecutionModel, FunctionControl, MemoryModel,
        SourceLanguage,
    };

    fn sample() -> Module {
        let mut module = Module::new();
        module.instructions = vec![
            op::source(SourceLanguage::Glsl, 450),
            op::memory_model(AddressingModel::Logical, MemoryModel::Glsl450),
            op::entry_point(ExecutionModel::Fragment, 1),
            op::execution_mode(1, ExecutionMode::OriginUpperLeft, vec![]),
            op::function(0, 1, FunctionControl::INLINE, 0),
            op::label(2),
            op::branch(2),
            op::function_end(),
            op::function(0, 3, FunctionControl::INLINE, 0),
            op::label(4),
            op::branch(4),
            op::function_end(),
        ];
        module
    }

    #[test]
    fn list_queries() {
        let module = sample();

        assert_eq!(module.count(Opcode::Function), 2);
        assert_eq!(module.count(Opcode::Switch), 0);
        assert_eq!(module.position(Opcode::Label), Some(5));
        assert_eq!(module.position(Opcode::Switch), None);
        assert_eq!(module.filter(Opcode::Label).count(), 2);

        let first = module.first(Opcode::MemoryModel).unwrap();
        assert!(matches!(first, Instruction::MemoryModel(_)));
    }

    #[test]
    fn function_and_block_ranges() {
        let module = sample();

        assert_eq!(module.function_ranges(), [(4, 7), (8, 11)]);
        assert_eq!(module.block_ranges(4, 7), [(5, 6)]);
        assert_eq!(module.block_ranges(8, 11), [(9, 10)]);
    }

    #[test]
    fn strip_preserves_order() {
        let mut module = sample();
        module.strip();

        assert_eq!(module.instructions.len(), 11);
        assert_eq!(module.position(Opcode::MemoryModel), Some(0));
        assert_eq!(module.function_ranges(), [(3, 6), (7, 10)]);
    }
}
