//! # The `impl_instructions!` macro
//!
//! The instruction-related types of this crate are derived from a single
//! table, one row per opcode:
//!
//! ```rust,ignore
//! impl_instructions! {
//!     "Names the source language the module was translated from."
//!     0x0001 Source source [source_language: SourceLanguage, version: Word]
//!     // ...
//! }
//! ```
//!
//! Each row carries a doc string, the numeric opcode, an uppercase identifier
//! (the `Opcode` and `Instruction` variant and the record struct in `ops`), a
//! lowercase identifier (the shorthand constructor in `op`), and the record's
//! field list in wire order.
//!
//! From the field list the macro derives the whole codec: `read` folds
//! [`Operand::read`](crate::Operand::read) over the fields, `write` and
//! `operand_words` fold the encoding direction, and `check_operands` folds the
//! per-family validity predicates. A field literally named `result_id` marks
//! the record as defining a result id; the entry-point record names its target
//! field `entry_point` precisely so it stays out of that set.
//!
//! The generated `match` over `Opcode` is the opcode registry. Because enum
//! discriminants must be unique, registering the same opcode twice is a
//! compile error rather than a runtime fault.

// Resolves to the record's result id field, if the field list declares one.
macro_rules! result_id_field {
    ($record:expr;) => {
        None
    };
    ($record:expr; result_id $($rest:ident)*) => {
        Some($record.result_id)
    };
    ($record:expr; $other:ident $($rest:ident)*) => {
        result_id_field!($record; $($rest)*)
    };
}

/// Declares a sequential operand family: a `u32`-repr enum whose `TryFrom`
/// is the family's validity predicate.
macro_rules! operand_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $Name:ident {
            $($(#[$vmeta:meta])* $Variant:ident = $value:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u32)]
        $vis enum $Name {
            $($(#[$vmeta])* $Variant = $value,)*
        }

        impl core::convert::TryFrom<$crate::Word> for $Name {
            type Error = $crate::InvalidOperand;

            fn try_from(raw: $crate::Word) -> Result<Self, Self::Error> {
                match raw {
                    $(x if x == Self::$Variant as $crate::Word => Ok(Self::$Variant),)*
                    _ => Err($crate::InvalidOperand($crate::OperandKind::$Name)),
                }
            }
        }

        impl From<$Name> for $crate::Word {
            fn from(value: $Name) -> Self {
                value as $crate::Word
            }
        }

        impl $crate::Operand for $Name {
            fn read(words: &mut &[$crate::Word]) -> Result<Self, $crate::DecodeError> {
                let raw = $crate::operand::take_word(words)?;
                Ok(Self::try_from(raw)?)
            }

            fn write(&self, out: &mut ::alloc::vec::Vec<$crate::Word>) {
                out.push(*self as $crate::Word);
            }

            fn word_count(&self) -> u32 {
                1
            }
        }
    };
}

/// Declares a bitmask operand family.
///
/// Raw bits are preserved on construction (`from_bits_retain`); out-of-mask
/// values stay representable and are rejected by `verify`.
macro_rules! operand_mask {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident: allow_empty = $allow_empty:literal {
            $($(#[$finner:ident $($fargs:tt)*])* const $Flag:ident = $value:expr;)*
        }
    ) => {
        bitflags::bitflags! {
            $(#[$meta])*
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            $vis struct $Name: $crate::Word {
                $($(#[$finner $($fargs)*])* const $Flag = $value;)*
            }
        }

        impl $Name {
            /// Checks the raw bits against the declared flag set.
            pub fn verify(self) -> Result<(), $crate::InvalidOperand> {
                let unknown = self.bits() & !Self::all().bits() != 0;
                let empty = !$allow_empty && self.bits() == 0;
                if unknown || empty {
                    return Err($crate::InvalidOperand($crate::OperandKind::$Name));
                }
                Ok(())
            }
        }

        impl From<$Name> for $crate::Word {
            fn from(value: $Name) -> Self {
                value.bits()
            }
        }

        impl $crate::Operand for $Name {
            fn read(words: &mut &[$crate::Word]) -> Result<Self, $crate::DecodeError> {
                let mask = Self::from_bits_retain($crate::operand::take_word(words)?);
                mask.verify()?;
                Ok(mask)
            }

            fn write(&self, out: &mut ::alloc::vec::Vec<$crate::Word>) {
                out.push(self.bits());
            }

            fn word_count(&self) -> u32 {
                1
            }

            fn check(&self) -> Result<(), $crate::CheckError> {
                self.verify()?;
                Ok(())
            }
        }
    };
}

// Generates, from the opcode table: the record structs and their codecs, the
// `Opcode` and `Instruction` enums, the registry dispatch, and the shorthand
// constructors.
macro_rules! impl_instructions {
    (
        $($doc:literal $code:literal $Op:ident $op:ident [$($fname:ident: $fty:ty),* $(,)?])*
    ) => {
        /// Typed record shapes, one per opcode.
        pub mod ops {
            use super::*;

            $(
                #[doc = $doc]
                #[derive(Debug, Clone, PartialEq, Eq, Hash)]
                #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
                pub struct $Op {
                    $(pub $fname: $fty,)*
                }

                impl $Op {
                    /// The opcode shared by every record of this shape.
                    pub const OPCODE: Opcode = Opcode::$Op;

                    #[allow(unused_variables)]
                    pub(crate) fn read(words: &mut &[Word]) -> Result<Self, DecodeError> {
                        Ok(Self {
                            $($fname: Operand::read(words)?,)*
                        })
                    }

                    #[allow(unused_variables)]
                    pub(crate) fn write(&self, out: &mut ::alloc::vec::Vec<Word>) {
                        $(Operand::write(&self.$fname, out);)*
                    }

                    /// Number of operand words this record encodes to.
                    pub fn operand_words(&self) -> u32 {
                        0 $(+ Operand::word_count(&self.$fname))*
                    }

                    pub(crate) fn check_operands(&self) -> Result<(), CheckError> {
                        $(Operand::check(&self.$fname)?;)*
                        Ok(())
                    }
                }

                impl From<$Op> for Instruction {
                    fn from(record: $Op) -> Self {
                        Instruction::$Op(record)
                    }
                }
            )*
        }

        /// Solely the opcode portion of an instruction.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        pub enum Opcode {
            $(
                #[doc = $doc]
                $Op = $code,
            )*
        }

        impl core::convert::TryFrom<u16> for Opcode {
            type Error = DecodeError;

            fn try_from(raw: u16) -> Result<Self, DecodeError> {
                match raw {
                    $($code => Ok(Opcode::$Op),)*
                    _ => Err(DecodeError::UnknownOpcode(raw)),
                }
            }
        }

        /// A single typed instruction, discriminated by its opcode.
        ///
        /// The opcode is the variant tag; the record carrying the operands is
        /// the variant payload.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Instruction {
            $(
                #[doc = $doc]
                $Op(ops::$Op),
            )*
        }

        impl Instruction {
            /// This instruction's opcode.
            pub fn opcode(&self) -> Opcode {
                match self {
                    $(Self::$Op(_) => Opcode::$Op,)*
                }
            }

            /// The result id this instruction defines, if its shape declares
            /// one. The entry-point record yields `None`: its embedded id
            /// references an already-defined function.
            pub fn result_id(&self) -> Option<Id> {
                match self {
                    $(Self::$Op(record) => result_id_field!(record; $($fname)*),)*
                }
            }

            /// Number of operand words, excluding the leading word.
            pub fn operand_words(&self) -> u32 {
                match self {
                    $(Self::$Op(record) => record.operand_words(),)*
                }
            }

            pub(crate) fn decode_operands(
                opcode: Opcode,
                operands: &[Word],
            ) -> Result<Self, DecodeError> {
                let mut words = operands;
                let instruction = match opcode {
                    $(Opcode::$Op => Instruction::$Op(ops::$Op::read(&mut words)?),)*
                };
                if !words.is_empty() {
                    return Err(DecodeError::InvalidWordCount);
                }
                Ok(instruction)
            }

            pub(crate) fn write_operands(&self, out: &mut ::alloc::vec::Vec<Word>) {
                match self {
                    $(Self::$Op(record) => record.write(out),)*
                }
            }

            pub(crate) fn check_operands(&self) -> Result<(), CheckError> {
                match self {
                    $(Self::$Op(record) => record.check_operands(),)*
                }
            }
        }

        /// Shorthand `Instruction` constructors, one per opcode, for
        /// hand-writing modules in tests and tools.
        pub mod op {
            use super::*;

            $(
                #[doc = $doc]
                pub fn $op($($fname: $fty),*) -> Instruction {
                    Instruction::$Op(ops::$Op {
                        $($fname,)*
                    })
                }
            )*
        }
    };
}
