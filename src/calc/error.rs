use core::fmt::{self, Display, Formatter};

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::ll::Revision;

/// An error that can occur when calculating or accessing register values
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The register doesn't exist on this revision
    UnknownRegister,

    /// The register exists, but the field doesn't
    UnknownField,

    /// Tried to write a read-only register or field
    ReadOnly,

    /// Array index past the last element
    IndexOutOfRange,

    /// A register type of one revision was used with an image of another
    RevisionMismatch {
        /// Revision of the image
        expected: Revision,
        /// Revision of the register type
        found: Revision,
    },

    /// The number of DSSS shifts has no register encoding
    ///
    /// Supported are 0, 1, 2, 4, 8 and 16.
    UnsupportedDsssShifts(u32),

    /// `CTRL0.DSSSSHIFTS` holds a code without meaning
    InvalidDsssShiftCode(u32),

    /// DSSS chip sequences are 1 to 32 chips long
    InvalidDsssLength(u32),

    /// Sync words are 1 to 32 bits long
    InvalidSyncWordLength(u32),

    /// Preamble base patterns are 1 to 4 bits long
    InvalidPreamblePatternLength(u32),

    /// The configuration was not valid. Some combinations of settings are not
    /// allowed.
    InvalidConfiguration,

    /// Buffer too small
    BufferTooSmall {
        /// Indicates how large a buffer would have been required
        required_len: usize,
    },

    /// An encoded write sequence could not be decoded
    MalformedSequence,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::UnknownRegister => defmt::write!(f, "UnknownRegister"),
            Error::UnknownField => defmt::write!(f, "UnknownField"),
            Error::ReadOnly => defmt::write!(f, "ReadOnly"),
            Error::IndexOutOfRange => defmt::write!(f, "IndexOutOfRange"),
            Error::RevisionMismatch { expected, found } => defmt::write!(
                f,
                "RevisionMismatch {{ expected: {}, found: {} }}",
                expected,
                found
            ),
            Error::UnsupportedDsssShifts(shifts) => {
                defmt::write!(f, "UnsupportedDsssShifts({})", shifts)
            }
            Error::InvalidDsssShiftCode(code) => defmt::write!(f, "InvalidDsssShiftCode({})", code),
            Error::InvalidDsssLength(len) => defmt::write!(f, "InvalidDsssLength({})", len),
            Error::InvalidSyncWordLength(len) => defmt::write!(f, "InvalidSyncWordLength({})", len),
            Error::InvalidPreamblePatternLength(len) => {
                defmt::write!(f, "InvalidPreamblePatternLength({})", len)
            }
            Error::InvalidConfiguration => defmt::write!(f, "InvalidConfiguration"),
            Error::BufferTooSmall { required_len } => {
                defmt::write!(f, "BufferTooSmall {{ required_len: {} }}", required_len)
            }
            Error::MalformedSequence => defmt::write!(f, "MalformedSequence"),
        }
    }
}
