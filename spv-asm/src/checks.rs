//! Constraints the record shapes cannot express through field types alone.
//!
//! Dispatched from [`Instruction::verify`]; every opcode with a constraint
//! beyond per-field validity has its arm here, the rest pass by default.

use itertools::Itertools;

use spv_types::Word;

use crate::errors::CheckError;
use crate::{ops, Decoration, ExecutionMode, ExecutionScope, Instruction};

pub(crate) fn constrain(instruction: &Instruction) -> Result<(), CheckError> {
    use Instruction::*;

    match instruction {
        Nop(_) => Err(CheckError::Unacceptable),

        TypeInt(record) => match record.signedness {
            0 | 1 => Ok(()),
            other => Err(CheckError::IntSignedness(other)),
        },

        TypeSampler(record) => {
            sampler_type_flag("content", record.content, 2)?;
            sampler_type_flag("arrayed", record.arrayed, 1)?;
            sampler_type_flag("compare", record.compare, 1)?;
            sampler_type_flag("multisampled", record.multisampled, 1)
        }

        ConstantSampler(record) => match record.param {
            0 | 1 => Ok(()),
            other => Err(CheckError::SamplerParamFlag(other)),
        },

        Decorate(record) => decoration_operands(record.decoration, &record.operands),
        MemberDecorate(record) => decoration_operands(record.decoration, &record.operands),

        ExecutionMode(record) => execution_mode_operands(record.mode, &record.operands),

        Phi(record) => {
            if record.operands.is_empty() {
                return Err(CheckError::EmptyPhi);
            }
            if record.operands.len() % 2 != 0 {
                return Err(CheckError::UnpairedPhiOperands);
            }
            Ok(())
        }

        BranchConditional(record) => match record.branch_weights.len() {
            0 | 2 => Ok(()),
            _ => Err(CheckError::BranchWeightCount),
        },

        Switch(record) => switch_targets(&record.targets),

        AsyncGroupCopy(ops::AsyncGroupCopy { scope, .. })
        | WaitGroupEvents(ops::WaitGroupEvents { scope, .. })
        | GroupAll(ops::GroupAll { scope, .. })
        | GroupAny(ops::GroupAny { scope, .. })
        | GroupBroadcast(ops::GroupBroadcast { scope, .. })
        | GroupIAdd(ops::GroupIAdd { scope, .. })
        | GroupFAdd(ops::GroupFAdd { scope, .. })
        | GroupFMin(ops::GroupFMin { scope, .. })
        | GroupUMin(ops::GroupUMin { scope, .. })
        | GroupSMin(ops::GroupSMin { scope, .. })
        | GroupFMax(ops::GroupFMax { scope, .. })
        | GroupUMax(ops::GroupUMax { scope, .. })
        | GroupSMax(ops::GroupSMax { scope, .. })
        | GroupReserveReadPipePackets(ops::GroupReserveReadPipePackets { scope, .. })
        | GroupReserveWritePipePackets(ops::GroupReserveWritePipePackets { scope, .. })
        | GroupCommitReadPipe(ops::GroupCommitReadPipe { scope, .. })
        | GroupCommitWritePipe(ops::GroupCommitWritePipe { scope, .. }) => group_scope(*scope),

        _ => Ok(()),
    }
}

fn sampler_type_flag(field: &'static str, value: Word, max: Word) -> Result<(), CheckError> {
    if value > max {
        return Err(CheckError::SamplerTypeFlag { field, value, max });
    }
    Ok(())
}

// Group operations only make sense within a single work- or subgroup.
fn group_scope(scope: ExecutionScope) -> Result<(), CheckError> {
    match scope {
        ExecutionScope::Workgroup | ExecutionScope::Subgroup => Ok(()),
        ExecutionScope::CrossDevice | ExecutionScope::Device => Err(CheckError::BadGroupScope),
    }
}

fn decoration_operands(decoration: Decoration, operands: &[Word]) -> Result<(), CheckError> {
    use Decoration::*;

    match decoration {
        Stream | Location | Component | Index | Binding | DescriptorSet | Offset | Alignment
        | XfbBuffer | Stride | BuiltIn | FuncParamAttr | FpRoundingMode | FpFastMathMode
        | SpecId => {
            if operands.len() != 1 {
                return Err(CheckError::DecorationOperandCount { decoration, expected: 1 });
            }
            Ok(())
        }
        LinkageType => {
            if operands.len() != 1 {
                return Err(CheckError::DecorationOperandCount { decoration, expected: 1 });
            }
            crate::LinkageType::try_from(operands[0])?;
            Ok(())
        }
        _ => {
            if !operands.is_empty() {
                return Err(CheckError::StrayDecorationOperands { decoration });
            }
            Ok(())
        }
    }
}

fn execution_mode_operands(mode: ExecutionMode, operands: &[Word]) -> Result<(), CheckError> {
    use ExecutionMode::*;

    let expected = match mode {
        Invocations | OutputVertices | VecTypeHint => 1,
        LocalSize | LocalSizeHint => 3,
        _ => {
            if !operands.is_empty() {
                return Err(CheckError::StrayExecutionModeOperands { mode });
            }
            return Ok(());
        }
    };

    if operands.len() != expected {
        return Err(CheckError::ExecutionModeOperandCount { mode, expected });
    }
    Ok(())
}

fn switch_targets(targets: &[Word]) -> Result<(), CheckError> {
    if targets.len() % 2 != 0 {
        return Err(CheckError::UnpairedSwitchTargets);
    }

    let duplicate = targets
        .iter()
        .copied()
        .step_by(2)
        .sorted()
        .tuple_windows()
        .find(|(a, b)| a == b);

    if let Some((literal, _)) = duplicate {
        return Err(CheckError::DuplicateSwitchCase(literal));
    }

    Ok(())
}
