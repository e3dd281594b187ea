//! Register tables and PHY calculator for the EFR32 radio MODEM
//!
//! The [register-level interface] describes the MODEM peripheral of each
//! supported chip revision, down to single fields. The [calculator] derives
//! register values from a high-level [`PhyConfig`] and collects them in a
//! [`RegisterImage`], which can be exported as a [`WriteSequence`].
//!
//! ```rust
//! use efr32_modem::{Calculator, PhyConfig, Revision, WriteSequence};
//!
//! let image = Calculator::new(Revision::Efr32xg1)
//!     .calculate(&PhyConfig::default())
//!     .unwrap();
//!
//! let sequence = WriteSequence::new(&image);
//! let mut buf = [0; 256];
//! let len = sequence.encode(&mut buf).unwrap();
//! assert_eq!(len, sequence.encoded_len());
//! ```
//!
//! [register-level interface]: ll/index.html
//! [calculator]: calc/index.html
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod calc;
pub mod configs;
pub mod ll;
pub mod sequence;

pub use crate::{
    calc::{Actuals, Calculator, Error},
    configs::PhyConfig,
    ll::{RegisterImage, RegisterMap, Revision},
    sequence::WriteSequence,
};
