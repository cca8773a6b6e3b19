use spv_asm::{CheckError, Id};

use thiserror::Error;

use crate::header::HeaderError;

/// A module that fails one of the validation steps.
///
/// Variants that point at an instruction carry its address: the index into
/// the module's instruction list, displayed in the `$%08x` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// An instruction failed its operand or shape checks.
    #[error("at ${address:08x}: {source}")]
    Instruction { address: usize, source: CheckError },

    /// A module declares its memory model exactly once.
    #[error("a module must declare exactly one memory model")]
    MemoryModelCount,

    /// The layout requires at least one execution mode.
    #[error("a module must declare at least one execution mode")]
    ExecutionModeCount,

    /// The instruction stream fell out of the module layout grammar; the
    /// address is the first position no grammar rule could accept.
    #[error("at ${0:08x}: the logical layout of the module is invalid")]
    Layout(usize),

    /// A module-level variable claimed function-local storage.
    #[error("at ${0:08x}: module-level variable cannot use function-local storage")]
    GlobalVariableStorage(usize),

    /// An in-function variable must claim function-local storage.
    #[error("at ${0:08x}: function-local variable must use function-local storage")]
    LocalVariableStorage(usize),

    /// Variables may only appear in a function's first block.
    #[error("at ${0:08x}: variable declarations may only appear in a function's first block")]
    VariableOutsideFirstBlock(usize),

    /// Variables must lead their block.
    #[error("at ${0:08x}: variable declarations must precede all other instructions in the block")]
    VariableNotLeading(usize),

    /// A result id was defined twice.
    #[error("at ${address:08x}: duplicate ResultId({id}); previous definition at ${previous:08x}")]
    DuplicateResultId { address: usize, id: Id, previous: usize },

    /// Without linkage declarations the host needs at least one entry point
    /// to call into.
    #[error("a module without linkage declarations must declare at least one entry point")]
    MissingEntryPoint,

    /// An entry point's function is not callable from within the module.
    #[error("at ${address:08x}: call to function declared as entry point at ${entry:08x}")]
    CallToEntryPoint { address: usize, entry: usize },
}
