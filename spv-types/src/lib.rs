#![cfg_attr(not(feature = "std"), no_std)]

//! Atomic types shared by the SPIR-V module codec crates.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bytes;
#[cfg(feature = "alloc")]
mod lit_string;

pub use bytes::Endianness;
#[cfg(feature = "alloc")]
pub use lit_string::LitString;

/// A single unit of module payload.
pub type Word = u32;

/// Numeric name of an intra-module entity: a type, constant, variable,
/// function, label or entry point. Zero never names anything; a valid id
/// satisfies `0 < id < header.bound`.
pub type Id = u32;

/// Number of bytes a [`Word`] occupies on the wire.
pub const WORD_SIZE: usize = core::mem::size_of::<Word>();
