//! Demodulator settings that follow from the modulation
//!
//! Not every revision implements every field written here. Missing fields
//! are skipped.

#[allow(unused_imports)]
use num_traits::Float;

use crate::{
    calc::{sync::sync_word_length, write_field, write_optional},
    configs::{DemodSelect, ModulationType, PhyConfig, ShapingFilter},
    ll::RegisterImage,
    Error,
};

/// `CTRL1.RESYNCPER` and `CTRL5.BRCALEN`/`BRCALAVG`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Resync {
    /// Timing resynchronization period
    pub period: u32,
    /// Baud rate calibration enable
    pub brcal_enable: bool,
    /// Baud rate calibration averaging
    pub brcal_average: u32,
}

/// Resynchronization period for the required baud rate tolerance
///
/// Resynchronizing every second timing window is enough as long as the
/// accumulated offset over two windows stays below half a sample. Baud rate
/// calibration is left off, it doesn't work well with the legacy
/// demodulator.
pub fn resync(config: &PhyConfig) -> Result<Resync, Error> {
    let window = if config.symbols_in_timing_window > 0 {
        config.symbols_in_timing_window as u32
    } else {
        sync_word_length(config)?
    };
    if config.oversampling_rate.is_nan() || config.oversampling_rate <= 0.0 {
        return Err(Error::InvalidConfiguration);
    }

    // Halved once more to stay conservative
    let tolerance_ppm = (1.0 / (2.0 * window as f32 * config.oversampling_rate) * 1e6 / 2.0) as u32;
    let period = if tolerance_ppm >= config.baudrate_tol_ppm {
        2
    } else {
        1
    };

    Ok(Resync {
        period,
        brcal_enable: false,
        brcal_average: 0,
    })
}

/// `CTRL1.PHASEDEMOD`
pub fn phase_demod(config: &PhyConfig) -> u32 {
    match config.modulation_type {
        ModulationType::Oqpsk if config.demod_select == DemodSelect::Coherent => 2,
        ModulationType::Oqpsk => 1,
        ModulationType::Bpsk | ModulationType::Dbpsk if config.dsss_len > 0 => 2,
        ModulationType::Bpsk | ModulationType::Dbpsk => 1,
        _ => 0,
    }
}

/// `CTRL4.ISICOMP`, for 4-FSK only
pub fn isi_compensation(config: &PhyConfig) -> u32 {
    if config.modulation_type != ModulationType::Fsk4 {
        return 0;
    }

    match config.shaping_filter {
        ShapingFilter::Gaussian if config.shaping_filter_param >= 0.75 => 5,
        ShapingFilter::Gaussian if config.shaping_filter_param >= 0.6 => 8,
        ShapingFilter::Gaussian => 10,
        _ => 8,
    }
}

/// `CTRL4.OFFSETPHASEMASKING`
pub fn offset_phase_masking(config: &PhyConfig) -> u32 {
    config.modulation_type.is_bpsk() as u32
}

/// Additional DEC1 gain in dB for narrow channels
pub fn dec1_gain_db(config: &PhyConfig) -> u32 {
    match config.bandwidth_hz {
        0..=499 => 12,
        500..=1999 => 6,
        _ => 0,
    }
}

/// Encodes a DEC1 gain for `CF.DEC1GAIN`
pub fn encode_dec1_gain(gain_db: u32) -> u32 {
    match gain_db {
        12 => 2,
        6 => 1,
        _ => 0,
    }
}

/// Decodes `CF.DEC1GAIN` into dB
///
/// Code 3 is reserved and yields `None`.
pub fn decode_dec1_gain(code: u32) -> Option<u32> {
    match code {
        0 => Some(0),
        1 => Some(6),
        2 => Some(12),
        _ => None,
    }
}

/// `SRCCHF.INTOSR`, set for integer oversampling rates
pub fn integer_osr(config: &PhyConfig) -> u32 {
    let osr = config.oversampling_rate;
    ((osr.round() - osr).abs() < 0.001) as u32
}

pub(crate) fn write(config: &PhyConfig, image: &mut RegisterImage) -> Result<(), Error> {
    let resync = resync(config)?;
    write_field(image, "CTRL1", "RESYNCPER", resync.period)?;
    write_optional(image, "CTRL5", "BRCALEN", resync.brcal_enable as u32)?;
    write_optional(image, "CTRL5", "BRCALAVG", resync.brcal_average)?;
    write_optional(image, "CTRL5", "BRCALMODE", 0)?;
    write_optional(
        image,
        "CTRL5",
        "RESYNCBAUDTRANS",
        (config.demod_select != DemodSelect::Coherent) as u32,
    )?;

    write_field(image, "CTRL1", "PHASEDEMOD", phase_demod(config))?;
    write_optional(image, "CTRL4", "ISICOMP", isi_compensation(config))?;
    write_optional(
        image,
        "CTRL4",
        "OFFSETPHASEMASKING",
        offset_phase_masking(config),
    )?;
    write_optional(image, "CF", "DEC1GAIN", encode_dec1_gain(dec1_gain_db(config)))?;
    write_optional(image, "SRCCHF", "INTOSR", integer_osr(config))?;

    Ok(())
}

/// Timing resynchronization period read back from `CTRL1.RESYNCPER`
pub(crate) fn resync_period_actual(image: &RegisterImage) -> Result<u32, Error> {
    image.read_field("CTRL1", "RESYNCPER")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ll::Revision;

    #[test]
    fn resync_period() {
        // 16 bit sync word at 5x oversampling allows about 3125 ppm
        let mut config = PhyConfig {
            baudrate_tol_ppm: 3000,
            ..Default::default()
        };
        assert_eq!(resync(&config).unwrap().period, 2);

        config.baudrate_tol_ppm = 3200;
        assert_eq!(resync(&config).unwrap().period, 1);

        config.symbols_in_timing_window = 4;
        assert_eq!(resync(&config).unwrap().period, 2);
        assert!(!resync(&config).unwrap().brcal_enable);
    }

    #[test]
    fn phase_demodulator() {
        let mut config = PhyConfig {
            modulation_type: ModulationType::Oqpsk,
            ..Default::default()
        };
        assert_eq!(phase_demod(&config), 1);
        config.demod_select = DemodSelect::Coherent;
        assert_eq!(phase_demod(&config), 2);

        config.modulation_type = ModulationType::Dbpsk;
        assert_eq!(phase_demod(&config), 1);
        config.dsss_len = 8;
        assert_eq!(phase_demod(&config), 2);

        config.modulation_type = ModulationType::Fsk2;
        assert_eq!(phase_demod(&config), 0);
    }

    #[test]
    fn isi_compensation_for_4fsk() {
        let mut config = PhyConfig {
            modulation_type: ModulationType::Fsk4,
            shaping_filter: ShapingFilter::Gaussian,
            shaping_filter_param: 0.5,
            ..Default::default()
        };
        assert_eq!(isi_compensation(&config), 10);
        config.shaping_filter_param = 0.6;
        assert_eq!(isi_compensation(&config), 8);
        config.shaping_filter_param = 0.75;
        assert_eq!(isi_compensation(&config), 5);
        config.shaping_filter = ShapingFilter::RaisedCosine;
        assert_eq!(isi_compensation(&config), 8);

        config.modulation_type = ModulationType::Fsk2;
        assert_eq!(isi_compensation(&config), 0);
    }

    #[test]
    fn dec1_gain() {
        for (bandwidth_hz, gain, code) in [(100, 12, 2), (499, 12, 2), (500, 6, 1), (1999, 6, 1), (2000, 0, 0)] {
            let config = PhyConfig {
                bandwidth_hz,
                ..Default::default()
            };
            assert_eq!(dec1_gain_db(&config), gain);
            assert_eq!(encode_dec1_gain(gain), code);
            assert_eq!(decode_dec1_gain(code), Some(gain));
        }
        assert_eq!(decode_dec1_gain(3), None);
    }

    #[test]
    fn integer_oversampling() {
        let mut config = PhyConfig::default();
        config.oversampling_rate = 5.0;
        assert_eq!(integer_osr(&config), 1);
        config.oversampling_rate = 5.0005;
        assert_eq!(integer_osr(&config), 1);
        config.oversampling_rate = 4.5;
        assert_eq!(integer_osr(&config), 0);
    }

    #[test]
    fn skips_missing_fields() {
        let config = PhyConfig {
            modulation_type: ModulationType::Bpsk,
            ..Default::default()
        };

        for revision in Revision::ALL {
            let mut image = RegisterImage::new(revision);
            write(&config, &mut image).unwrap();
            assert_eq!(image.read_field("CTRL4", "OFFSETPHASEMASKING"), Ok(1));
            assert_eq!(image.read_field("CTRL1", "PHASEDEMOD"), Ok(1));
            assert_eq!(resync_period_actual(&image), Ok(2));
            assert!(!image.is_written("CTRL0"));
        }
    }
}
