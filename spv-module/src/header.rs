use spv_types::{Endianness, Word};

use thiserror::Error;

/// The magic value as it reads when the stream is little-endian.
///
/// A module is a stream of words, but when stored as bytes the magic's byte
/// order is the probe that recovers the word stream's endianness.
pub const MAGIC_LE: Word = 0x0723_0203;

/// The magic value as it reads (assembled little-endian) when the stream is
/// big-endian: the same number with its bytes mirrored.
pub const MAGIC_BE: Word = 0x0302_2307;

/// Version of the specification this crate implements. Pre-release versions
/// count down from the first public 100.
pub const SPEC_VERSION: Word = 99;

/// A structurally invalid module header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("invalid magic value")]
    InvalidMagic,
    #[error("invalid version number")]
    InvalidVersion,
}

/// The five leading words of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Magic number; one of [`MAGIC_LE`] or [`MAGIC_BE`].
    pub magic: Word,
    /// Specification version the module was produced against.
    pub version: Word,
    /// Magic number of the generating tool. Zero is allowed; registered
    /// non-zero values are encouraged.
    pub generator: Word,
    /// Exclusive upper bound on every id in the module. Smaller is better;
    /// ids should be densely packed near zero.
    pub bound: Word,
    /// Reserved for an instruction schema.
    pub reserved: Word,
}

impl Header {
    /// A little-endian header for the implemented specification version.
    pub fn new() -> Self {
        Self {
            magic: MAGIC_LE,
            version: SPEC_VERSION,
            generator: 0,
            bound: 0,
            reserved: 0,
        }
    }

    /// Rejects unknown magic values and version drift.
    pub fn verify(&self) -> Result<(), HeaderError> {
        self.endianness().ok_or(HeaderError::InvalidMagic)?;

        if self.version != SPEC_VERSION {
            return Err(HeaderError::InvalidVersion);
        }

        Ok(())
    }

    /// Byte order the magic value declares, if it is a known magic.
    pub fn endianness(&self) -> Option<Endianness> {
        match self.magic {
            MAGIC_LE => Some(Endianness::Little),
            MAGIC_BE => Some(Endianness::Big),
            _ => None,
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_verifies() {
        let header = Header::new();
        assert_eq!(header.verify(), Ok(()));
        assert_eq!(header.endianness(), Some(Endianness::Little));
    }

    #[test]
    fn unknown_magic_and_version_drift_are_rejected() {
        let mut header = Header::new();
        header.magic = 123;
        assert_eq!(header.verify(), Err(HeaderError::InvalidMagic));

        let mut header = Header { magic: MAGIC_BE, ..Header::new() };
        assert_eq!(header.verify(), Ok(()));
        header.version = 100;
        assert_eq!(header.verify(), Err(HeaderError::InvalidVersion));
    }
}
