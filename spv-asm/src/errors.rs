use core::fmt;

/// Tags the operand family an invalid value belongs to.
///
/// Every enumerated or bitmask operand family maps to exactly one tag, so an
/// out-of-range value can always be attributed to the field that carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    AccessQualifier,
    AddressingModel,
    BuiltIn,
    Decoration,
    Dimensionality,
    ExecutionMode,
    ExecutionModel,
    ExecutionScope,
    FastMathMode,
    FunctionControl,
    FunctionParameterAttribute,
    GroupOperation,
    KernelEnqueueFlags,
    KernelProfilingInfo,
    LinkageType,
    LoopControl,
    MemoryAccess,
    MemoryModel,
    MemorySemantics,
    RoundingMode,
    SamplerAddressingMode,
    SamplerFilterMode,
    SelectionControl,
    SourceLanguage,
    StorageClass,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A raw value outside its operand family's declared set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidOperand(pub OperandKind);

impl fmt::Display for InvalidOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} value", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidOperand {}

/// Failure while turning a word slice into a typed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The word count in the leading word does not cover the instruction.
    InvalidWordCount,
    /// The operand words ran out before every required field was read.
    MissingOperands,
    /// No record shape is registered for the opcode.
    UnknownOpcode(u16),
    /// The instruction is decodable in shape but never permitted.
    Unacceptable,
    /// An enumerated operand carried a value outside its family.
    InvalidOperand(OperandKind),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordCount => write!(f, "instruction has an invalid word count"),
            Self::MissingOperands => write!(f, "insufficient instruction operands"),
            Self::UnknownOpcode(opcode) => write!(f, "unknown opcode: {opcode:04x}"),
            Self::Unacceptable => write!(f, "use of this instruction is not allowed"),
            Self::InvalidOperand(kind) => write!(f, "invalid {kind} value"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

impl From<InvalidOperand> for DecodeError {
    fn from(err: InvalidOperand) -> Self {
        Self::InvalidOperand(err.0)
    }
}

/// A structurally well-formed instruction carrying values its shape forbids.
///
/// Produced by [`Instruction::verify`](crate::Instruction::verify): per-field
/// family checks first, then the instruction-local constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckError {
    /// An operand field carries a value outside its family.
    InvalidOperand(OperandKind),
    /// The instruction is never permitted in a module.
    Unacceptable,
    /// The decoration takes a fixed number of operands it did not get.
    DecorationOperandCount { decoration: crate::Decoration, expected: usize },
    /// The decoration takes no operands but some were supplied.
    StrayDecorationOperands { decoration: crate::Decoration },
    /// The execution mode takes a fixed number of operands it did not get.
    ExecutionModeOperandCount { mode: crate::ExecutionMode, expected: usize },
    /// The execution mode takes no operands but some were supplied.
    StrayExecutionModeOperands { mode: crate::ExecutionMode },
    /// A phi must carry at least one (value, parent-block) pair.
    EmptyPhi,
    /// Phi operands must come in (value, parent-block) pairs.
    UnpairedPhiOperands,
    /// Branch weights are either absent or exactly two.
    BranchWeightCount,
    /// Switch targets must come in (literal, label) pairs.
    UnpairedSwitchTargets,
    /// Two switch arms share the same case literal.
    DuplicateSwitchCase(u32),
    /// Group operations are restricted to subgroup or workgroup scope.
    BadGroupScope,
    /// The sampler constant's parametric flag must be 0 or 1.
    SamplerParamFlag(u32),
    /// Integer type signedness must be 0 or 1.
    IntSignedness(u32),
    /// A sampler type flag is outside its small declared range.
    SamplerTypeFlag { field: &'static str, value: u32, max: u32 },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperand(kind) => write!(f, "invalid {kind} value"),
            Self::Unacceptable => write!(f, "use of this instruction is not allowed"),
            Self::DecorationOperandCount { decoration, expected } => {
                write!(f, "decoration {decoration:?} takes exactly {expected} operand(s)")
            }
            Self::StrayDecorationOperands { decoration } => {
                write!(f, "decoration {decoration:?} takes no operands")
            }
            Self::ExecutionModeOperandCount { mode, expected } => {
                write!(f, "execution mode {mode:?} takes exactly {expected} operand(s)")
            }
            Self::StrayExecutionModeOperands { mode } => {
                write!(f, "execution mode {mode:?} takes no operands")
            }
            Self::EmptyPhi => write!(f, "phi expects at least one (value, parent) pair"),
            Self::UnpairedPhiOperands => write!(f, "phi operands must form (value, parent) pairs"),
            Self::BranchWeightCount => write!(f, "branch weights must be absent or exactly two"),
            Self::UnpairedSwitchTargets => {
                write!(f, "switch targets must form (literal, label) pairs")
            }
            Self::DuplicateSwitchCase(literal) => {
                write!(f, "switch case literal {literal} appears more than once")
            }
            Self::BadGroupScope => write!(f, "scope must be subgroup or workgroup"),
            Self::SamplerParamFlag(value) => {
                write!(f, "sampler parametric flag must be 0 or 1, got {value}")
            }
            Self::IntSignedness(value) => {
                write!(f, "integer signedness must be 0 or 1, got {value}")
            }
            Self::SamplerTypeFlag { field, value, max } => {
                write!(f, "sampler type {field} must be at most {max}, got {value}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CheckError {}

impl From<InvalidOperand> for CheckError {
    fn from(err: InvalidOperand) -> Self {
        Self::InvalidOperand(err.0)
    }
}
