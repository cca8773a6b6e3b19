//! SPIR-V module assembly on top of [`spv_asm`].
//!
//! A [`Module`] is a [`Header`] plus an ordered instruction list. Modules are
//! loaded from and saved to byte streams through [`Decoder`] and [`Encoder`],
//! which fix the stream's byte order from the magic value, and are checked by
//! [`Module::verify`], a fixed-order pipeline over header validity, per
//! instruction operand validity, the module layout grammar, variable
//! placement, single assignment of result ids and entry-point usage.

mod decode;
mod encode;
mod header;
mod module;
mod validation;

pub use decode::Decoder;
pub use encode::Encoder;
pub use header::{Header, HeaderError, MAGIC_BE, MAGIC_LE, SPEC_VERSION};
pub use module::Module;
pub use validation::ValidationError;

use std::io;

use thiserror::Error;

/// Failure while moving a module between its byte and in-memory forms.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The stream ended inside a header or instruction.
    #[error("unexpected end of stream")]
    UnexpectedEndOfStream,
    #[error(transparent)]
    Header(#[from] HeaderError),
    /// An instruction's embedded word count is zero, uncovered, or beyond
    /// the encodable range.
    #[error("instruction has an invalid word count")]
    InvalidWordCount,
    #[error(transparent)]
    Decode(#[from] spv_asm::DecodeError),
}
