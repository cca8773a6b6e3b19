//! The module validator: a fixed-order, short-circuiting pipeline.
//!
//! Every step is public so callers can run a subset (say, only single
//! assignment) without paying for the rest; [`Module::verify`] runs them all
//! in order and stops at the first failure.

mod error;
mod grammar;

pub use error::ValidationError;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use spv_asm::{AddressingModel, Decoration, Id, Instruction, Opcode, StorageClass};

use crate::module::Module;

impl Module {
    /// Validates the whole module.
    ///
    /// Order: header, per-instruction operand validity, logical layout
    /// (grammar and variable placement), the logical-addressing rules,
    /// single assignment of result ids, entry-point usage.
    pub fn verify(&self) -> Result<(), ValidationError> {
        self.header.verify()?;
        self.verify_instructions()?;
        self.verify_layout()?;
        self.verify_logical_addressing()?;
        self.verify_single_assignment()?;
        self.verify_entry_points()?;

        tracing::trace!(count = self.instructions.len(), "module verified");
        Ok(())
    }

    /// Runs every instruction's own validity checks, from per-field family
    /// ranges up to shape-specific constraints.
    pub fn verify_instructions(&self) -> Result<(), ValidationError> {
        for (address, instruction) in self.instructions.iter().enumerate() {
            instruction
                .verify()
                .map_err(|source| ValidationError::Instruction { address, source })?;
        }
        Ok(())
    }

    /// Checks the instruction ordering: the mandatory counts first (for the
    /// sake of specific error messages), then the layout grammar, then the
    /// variable-placement rules the grammar cannot see.
    ///
    /// Entry points are not counted here; the layout allows any number of
    /// them, and their cardinality rule (with its linkage exemption) belongs
    /// to [`Module::verify_entry_points`].
    pub fn verify_layout(&self) -> Result<(), ValidationError> {
        if self.count(Opcode::MemoryModel) != 1 {
            return Err(ValidationError::MemoryModelCount);
        }
        if self.count(Opcode::ExecutionMode) == 0 {
            return Err(ValidationError::ExecutionModeCount);
        }

        grammar::layout_nfa()
            .matches(self.instructions.iter().map(|i| i.opcode() as u16))
            .map_err(ValidationError::Layout)?;

        self.verify_variable_placement()
    }

    /// Checks storage classes and positions of variable declarations:
    /// module-level variables must not be function-local, in-function
    /// variables must be, and in-function variables lead the first block.
    pub fn verify_variable_placement(&self) -> Result<(), ValidationError> {
        let functions = self.function_ranges();
        let module_level = functions.first().map_or(self.instructions.len(), |&(s, _)| s);

        for (address, instruction) in self.instructions[..module_level].iter().enumerate() {
            if let Instruction::Variable(variable) = instruction {
                if variable.storage_class == StorageClass::Function {
                    return Err(ValidationError::GlobalVariableStorage(address));
                }
            }
        }

        for &(start, end) in &functions {
            for address in start..end {
                if let Instruction::Variable(variable) = &self.instructions[address] {
                    if variable.storage_class != StorageClass::Function {
                        return Err(ValidationError::LocalVariableStorage(address));
                    }
                }
            }

            for (index, &(label, terminator)) in
                self.block_ranges(start, end).iter().enumerate()
            {
                if index > 0 {
                    for address in label..terminator {
                        if matches!(self.instructions[address], Instruction::Variable(_)) {
                            return Err(ValidationError::VariableOutsideFirstBlock(address));
                        }
                    }
                    continue;
                }

                // First block: a run of variables directly after the label,
                // then everything else.
                let mut boundary = None;
                for address in label + 1..terminator {
                    if matches!(self.instructions[address], Instruction::Variable(_)) {
                        if let Some(boundary) = boundary {
                            return Err(ValidationError::VariableNotLeading(boundary));
                        }
                    } else if boundary.is_none() {
                        boundary = Some(address);
                    }
                }
            }
        }

        Ok(())
    }

    /// Hook for the constraints a logically addressed module must obey.
    ///
    /// The concrete pointer-allocation rules are still open; the step runs
    /// whenever the memory model declares logical addressing so they have a
    /// place to land.
    pub fn verify_logical_addressing(&self) -> Result<(), ValidationError> {
        let declares_logical = self.instructions.iter().any(|instruction| {
            matches!(
                instruction,
                Instruction::MemoryModel(mm)
                    if mm.addressing_model == AddressingModel::Logical
            )
        });

        if !declares_logical {
            return Ok(());
        }

        // Pointer-allocation restrictions for logical addressing go here
        // once the rules are pinned down.
        Ok(())
    }

    /// Each result id must be defined by exactly one instruction.
    pub fn verify_single_assignment(&self) -> Result<(), ValidationError> {
        let mut definitions: HashMap<Id, usize> = HashMap::new();

        for (address, instruction) in self.instructions.iter().enumerate() {
            let Some(id) = instruction.result_id() else {
                continue;
            };

            match definitions.entry(id) {
                Entry::Vacant(slot) => {
                    slot.insert(address);
                }
                Entry::Occupied(previous) => {
                    return Err(ValidationError::DuplicateResultId {
                        address,
                        id,
                        previous: *previous.get(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Entry points must exist (unless linkage declarations substitute for
    /// them), and no entry point's function may be called from within the
    /// module.
    pub fn verify_entry_points(&self) -> Result<(), ValidationError> {
        let entries: Vec<(usize, Id)> = self
            .instructions
            .iter()
            .enumerate()
            .filter_map(|(address, instruction)| match instruction {
                Instruction::EntryPoint(entry) => Some((address, entry.entry_point)),
                _ => None,
            })
            .collect();

        if entries.is_empty() {
            if !self.declares_linkage() {
                return Err(ValidationError::MissingEntryPoint);
            }
            return Ok(());
        }

        for (address, instruction) in self.instructions.iter().enumerate() {
            if let Instruction::FunctionCall(call) = instruction {
                if let Some(&(entry, _)) =
                    entries.iter().find(|&&(_, target)| target == call.function)
                {
                    return Err(ValidationError::CallToEntryPoint { address, entry });
                }
            }
        }

        Ok(())
    }

    // True if any decoration declares a linkage type for some id.
    fn declares_linkage(&self) -> bool {
        self.instructions.iter().any(|instruction| {
            matches!(
                instruction,
                Instruction::Decorate(decorate)
                    if decorate.decoration == Decoration::LinkageType
            )
        })
    }
}
