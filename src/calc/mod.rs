//! PHY calculator
//!
//! Turns a [`PhyConfig`] into MODEM register values. The calculation is split
//! by concern, each submodule computing and writing one group of fields:
//!
//! - [`preamble`]: preamble base pattern and length
//! - [`sync`]: sync words
//! - [`dsss`]: spread spectrum chip sequence and shifts
//! - [`timing`]: timing detection window and thresholds
//! - [`demod`]: demodulator settings that follow from the modulation
//!
//! The helpers in these modules are public, so single values can be computed
//! without running the whole calculation.
//!
//! # Example
//!
//! ```rust
//! use efr32_modem::{Calculator, PhyConfig, Revision};
//!
//! let image = Calculator::new(Revision::Efr32xg22)
//!     .calculate(&PhyConfig::default())
//!     .unwrap();
//! assert_eq!(image.read_field("CTRL1", "SYNCBITS"), Ok(15));
//! ```

use crate::{
    configs::PhyConfig,
    fmt::{debug, info},
    ll::{RegisterImage, Revision},
};

mod actual;
pub mod demod;
pub mod dsss;
mod error;
pub mod preamble;
pub mod sync;
pub mod timing;
mod utils;

pub use actual::Actuals;
pub use error::Error;
pub use utils::{clamp_with_warning, flip_bits};

/// Largest `CTRL0.MAPFSK`
pub const MAX_FSK_SYMBOL_MAP: u32 = 7;

/// Calculates register values for one chip revision
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Calculator {
    revision: Revision,
}

impl Calculator {
    /// Creates a calculator for `revision`
    pub fn new(revision: Revision) -> Self {
        Calculator { revision }
    }

    /// The revision registers are calculated for
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Calculates all register values for `config`
    ///
    /// Registers not touched by the calculation keep their reset value and
    /// are not part of [`RegisterImage::writes`].
    pub fn calculate(&self, config: &PhyConfig) -> Result<RegisterImage, Error> {
        let mut image = RegisterImage::new(self.revision);
        self.calculate_into(config, &mut image)?;
        Ok(image)
    }

    /// Calculates all register values for `config` into an existing image
    ///
    /// Values already in the image are kept unless the calculation writes
    /// the same fields. On error the image is left unchanged.
    pub fn calculate_into(&self, config: &PhyConfig, image: &mut RegisterImage) -> Result<(), Error> {
        if image.revision() != self.revision {
            return Err(Error::RevisionMismatch {
                expected: image.revision(),
                found: self.revision,
            });
        }

        info!(
            "calculating {} PHY: {:?}, {} baud",
            self.revision,
            config.modulation_type,
            config.baudrate
        );

        let mut scratch = image.clone();
        write_modulation(config, &mut scratch)?;
        preamble::write(config, &mut scratch)?;
        sync::write(config, &mut scratch)?;
        dsss::write(config, &mut scratch)?;
        timing::write(config, &mut scratch)?;
        demod::write(config, &mut scratch)?;

        debug!("{} registers written", scratch.write_count());
        *image = scratch;
        Ok(())
    }
}

fn write_modulation(config: &PhyConfig, image: &mut RegisterImage) -> Result<(), Error> {
    write_field(
        image,
        "CTRL0",
        "MODFORMAT",
        config.modulation_type.mod_format() as u32,
    )?;
    write_field(image, "CTRL0", "CODING", config.symbol_encoding as u32)?;
    write_field(
        image,
        "CTRL0",
        "MAPFSK",
        clamp_with_warning("MAPFSK", config.fsk_symbol_map as i64, 0, MAX_FSK_SYMBOL_MAP),
    )?;
    Ok(())
}

pub(crate) fn write_field(
    image: &mut RegisterImage,
    register: &str,
    field: &str,
    value: u32,
) -> Result<(), Error> {
    image.write_field(register, field, value)
}

/// Like [`write_field`], but fields missing on this revision are skipped
pub(crate) fn write_optional(
    image: &mut RegisterImage,
    register: &str,
    field: &str,
    value: u32,
) -> Result<(), Error> {
    match image.write_field(register, field, value) {
        Err(Error::UnknownRegister) | Err(Error::UnknownField) => {
            debug!(
                "{}.{} not present on {}, skipped",
                register,
                field,
                image.revision()
            );
            Ok(())
        }
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::{ModulationType, SymbolEncoding};

    #[test]
    fn default_config_on_all_revisions() {
        let _ = env_logger::builder().is_test(true).try_init();

        for revision in Revision::ALL {
            let image = Calculator::new(revision)
                .calculate(&PhyConfig::default())
                .unwrap();

            assert_eq!(image.revision(), revision);
            assert_eq!(image.read_field("CTRL0", "MODFORMAT"), Ok(0));
            assert_eq!(image.read_field("CTRL0", "CODING"), Ok(0));
            assert_eq!(image.read_field("PRE", "BASE"), Ok(0b01));
            assert_eq!(image.read_field("PRE", "TXBASES"), Ok(20));
            assert_eq!(image.read_register("SYNC0"), Ok(0xb16f));
            assert_eq!(image.read_field("TIMING", "TIMINGBASES"), Ok(8));
            assert_eq!(image.read_field("CTRL1", "RESYNCPER"), Ok(2));
            assert!(image.write_count() > 0);
            assert!(!image.is_written("DSSS0"));
        }
    }

    #[test]
    fn oqpsk_dsss() {
        // 2.4 GHz 802.15.4
        let config = PhyConfig {
            modulation_type: ModulationType::Oqpsk,
            symbol_encoding: SymbolEncoding::Dsss,
            baudrate: 2_000_000,
            bandwidth_hz: 2_500_000,
            oversampling_rate: 4.0,
            preamble_pattern: 0,
            preamble_pattern_len: 4,
            preamble_length: 32,
            syncword_0: 0xe5,
            syncword_length: 8,
            dsss_chipping_code: 0x744a_c39b,
            dsss_len: 32,
            dsss_shifts: 8,
            ..Default::default()
        };

        for revision in Revision::ALL {
            let image = Calculator::new(revision).calculate(&config).unwrap();
            assert_eq!(image.read_field("CTRL0", "MODFORMAT"), Ok(4));
            assert_eq!(image.read_field("CTRL0", "CODING"), Ok(2));
            assert_eq!(image.read_field("CTRL0", "DSSSLEN"), Ok(31));
            assert_eq!(image.read_field("CTRL0", "DSSSSHIFTS"), Ok(4));
            assert_eq!(image.read_field("PRE", "DSSSPRE"), Ok(1));
            assert_eq!(image.read_field("TIMING", "TIMINGBASES"), Ok(4));
            assert_eq!(image.read_field("CTRL1", "PHASEDEMOD"), Ok(1));
            assert!(image.is_written("DSSS0"));
        }
    }

    #[test]
    fn errors_propagate() {
        let config = PhyConfig {
            syncword_length: 0,
            ..Default::default()
        };
        assert_eq!(
            Calculator::new(Revision::Efr32xg1).calculate(&config).err(),
            Some(Error::InvalidSyncWordLength(0))
        );

        let config = PhyConfig {
            symbol_encoding: SymbolEncoding::Dsss,
            dsss_len: 15,
            dsss_shifts: 3,
            ..Default::default()
        };
        assert_eq!(
            Calculator::new(Revision::Efr32xg14).calculate(&config).err(),
            Some(Error::UnsupportedDsssShifts(3))
        );
    }

    #[test]
    fn failed_calculation_leaves_image_untouched() {
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        image.write_register("AFC", 0x10).unwrap();

        let config = PhyConfig {
            symbol_encoding: SymbolEncoding::Dsss,
            dsss_len: 15,
            dsss_shifts: 3,
            ..Default::default()
        };
        assert_eq!(
            Calculator::new(Revision::Efr32xg1).calculate_into(&config, &mut image),
            Err(Error::UnsupportedDsssShifts(3))
        );
        assert_eq!(image.write_count(), 1);
        assert!(!image.is_written("PRE"));
        assert!(!image.is_written("SYNC0"));
    }

    #[test]
    fn image_revision_must_match() {
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        assert_eq!(
            Calculator::new(Revision::Efr32xg22).calculate_into(&PhyConfig::default(), &mut image),
            Err(Error::RevisionMismatch {
                expected: Revision::Efr32xg1,
                found: Revision::Efr32xg22,
            })
        );
    }

    #[test]
    fn missing_fields_are_skipped() {
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        assert_eq!(write_optional(&mut image, "CTRL5", "RESYNCBAUDTRANS", 1), Ok(()));
        assert_eq!(write_optional(&mut image, "NOSUCHREG", "X", 1), Ok(()));
        assert_eq!(
            write_field(&mut image, "CTRL5", "RESYNCBAUDTRANS", 1),
            Err(Error::UnknownField)
        );
    }
}
