//! Timing detection window and thresholds
//!
//! The demodulator acquires symbol timing by correlating against a window of
//! `TIMING.TIMINGBASES` preamble bases. Longer windows are more robust but
//! need longer preambles; with no window at all, timing is acquired on the
//! sync word instead. The window sizes below are empirical and may change
//! with further characterization.

#[allow(unused_imports)]
use num_traits::Float;

use crate::{
    calc::{
        preamble::pattern_length,
        sync::sync_word_length,
        utils::{clamp_with_warning, div_ceil},
        write_field,
    },
    configs::{ModulationType, PhyConfig, SymbolEncoding},
    ll::RegisterImage,
    Error,
};

/// Most bases `TIMING.TIMINGBASES` can express
pub const MAX_TIMING_BASES: u32 = 15;

/// Largest `TIMING.TIMTHRESH`
pub const MAX_TIMING_THRESHOLD: u32 = 255;

/// Largest `CTRL2.SQITHRESH`
pub const MAX_SAMPLE_THRESHOLD: u32 = 255;

/// Largest `PRE.PREERRORS`
pub const MAX_PREAMBLE_ERRORS: u32 = 15;

/// Correlation threshold per sample in the timing window
const TIMING_THRESHOLD_PER_SAMPLE: f32 = 0.9;

/// Signal quality threshold per sample in the timing window
const SAMPLE_THRESHOLD_PER_SAMPLE: f32 = 0.5;

/// Timing window length in bits, for all but DSSS
fn window_bits(config: &PhyConfig) -> u32 {
    let preamble = config.preamble_length;

    match config.modulation_type {
        ModulationType::Fsk4 => match preamble {
            0..=15 => 0,
            16..=31 => 8,
            _ => 16,
        },
        ModulationType::Ook | ModulationType::Ask => match preamble {
            0..=7 => 0,
            8..=15 => 4,
            _ => 8,
        },
        _ => match preamble {
            0..=7 => 0,
            8..=9 => 4,
            10..=15 => 8,
            // Short sync words need the longer window
            16..=31 if config.syncword_length < 16 => 16,
            16..=31 => 8,
            _ if config.baudrate >= 1_000_000 => 24,
            _ => 16,
        },
    }
}

/// Timing window length in DSSS symbols
fn dsss_window_symbols(config: &PhyConfig) -> u32 {
    match config.preamble_length {
        0..=7 => 0,
        8..=15 => 1,
        16..=31 => 2,
        _ => 4,
    }
}

/// Number of preamble bases in the timing window, 0 to 15
///
/// `0` means timing is acquired on the sync word.
pub fn timing_bases(config: &PhyConfig) -> Result<u32, Error> {
    let pattern_len = pattern_length(config)?;

    let bases = if config.symbols_in_timing_window > 0 {
        div_ceil(config.symbols_in_timing_window as u32, pattern_len)
    } else if config.symbol_encoding == SymbolEncoding::Dsss {
        dsss_window_symbols(config)
    } else {
        div_ceil(window_bits(config), pattern_len)
    };

    Ok(clamp_with_warning(
        "TIMINGBASES",
        bases as i64,
        0,
        MAX_TIMING_BASES,
    ))
}

/// Length of the timing window in symbols for a given number of bases
pub fn timing_window_symbols(config: &PhyConfig, bases: u32) -> Result<u32, Error> {
    if bases > 0 {
        Ok(bases * pattern_length(config)?)
    } else {
        sync_word_length(config)
    }
}

/// Correlation threshold for timing detection, 0 to 255
pub fn timing_threshold(window_symbols: u32, oversampling_rate: f32) -> u32 {
    let threshold = (window_symbols as f32 * oversampling_rate * TIMING_THRESHOLD_PER_SAMPLE).round();
    clamp_with_warning("TIMTHRESH", threshold as i64, 0, MAX_TIMING_THRESHOLD)
}

/// Signal quality threshold, 0 to 255
pub fn sample_threshold(window_symbols: u32, oversampling_rate: f32) -> u32 {
    let threshold = (window_symbols as f32 * oversampling_rate * SAMPLE_THRESHOLD_PER_SAMPLE).round();
    clamp_with_warning("SQITHRESH", threshold as i64, 0, MAX_SAMPLE_THRESHOLD)
}

/// Accepted preamble base errors, 0 to 15
///
/// One error per four bases in the timing window unless configured.
pub fn preamble_errors(config: &PhyConfig, bases: u32) -> u32 {
    let errors = match config.preamble_errors {
        Some(errors) => errors as i64,
        None => (bases / 4) as i64,
    };
    clamp_with_warning("PREERRORS", errors, 0, MAX_PREAMBLE_ERRORS)
}

pub(crate) fn write(config: &PhyConfig, image: &mut RegisterImage) -> Result<(), Error> {
    if config.oversampling_rate.is_nan() || config.oversampling_rate <= 0.0 {
        return Err(Error::InvalidConfiguration);
    }

    let bases = timing_bases(config)?;
    let window = timing_window_symbols(config, bases)?;

    write_field(image, "TIMING", "TIMINGBASES", bases)?;
    write_field(
        image,
        "TIMING",
        "TIMTHRESH",
        timing_threshold(window, config.oversampling_rate),
    )?;
    write_field(
        image,
        "CTRL2",
        "SQITHRESH",
        sample_threshold(window, config.oversampling_rate),
    )?;
    write_field(image, "PRE", "PREERRORS", preamble_errors(config, bases))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ll::Revision;

    fn config(modulation_type: ModulationType, symbol_encoding: SymbolEncoding) -> PhyConfig {
        PhyConfig {
            modulation_type,
            symbol_encoding,
            ..Default::default()
        }
    }

    #[test]
    fn fsk2_table() {
        let mut config = config(ModulationType::Fsk2, SymbolEncoding::Nrz);
        config.preamble_pattern_len = 1;

        let expected = [(0, 0), (7, 0), (8, 4), (9, 4), (10, 8), (15, 8), (16, 8), (31, 8), (32, 15)];
        for (preamble_length, bases) in expected {
            config.preamble_length = preamble_length;
            assert_eq!(timing_bases(&config), Ok(bases), "{}", preamble_length);
        }
    }

    #[test]
    fn fsk2_short_sync_word() {
        let mut config = config(ModulationType::Fsk2, SymbolEncoding::Nrz);
        config.syncword_length = 8;
        config.preamble_length = 16;
        assert_eq!(timing_bases(&config), Ok(8));

        config.syncword_length = 16;
        assert_eq!(timing_bases(&config), Ok(4));
    }

    #[test]
    fn fsk2_high_baudrate() {
        let mut config = config(ModulationType::Fsk2, SymbolEncoding::Nrz);
        config.preamble_length = 64;
        assert_eq!(timing_bases(&config), Ok(8));

        config.baudrate = 2_000_000;
        assert_eq!(timing_bases(&config), Ok(12));
    }

    #[test]
    fn other_branches() {
        let mut fsk4 = config(ModulationType::Fsk4, SymbolEncoding::Nrz);
        fsk4.preamble_length = 24;
        assert_eq!(timing_bases(&fsk4), Ok(4));

        let mut ook = config(ModulationType::Ook, SymbolEncoding::Nrz);
        ook.preamble_length = 12;
        assert_eq!(timing_bases(&ook), Ok(2));

        let mut dsss = config(ModulationType::Oqpsk, SymbolEncoding::Dsss);
        dsss.preamble_length = 32;
        assert_eq!(timing_bases(&dsss), Ok(4));
    }

    #[test]
    fn explicit_window() {
        let mut config = config(ModulationType::Fsk2, SymbolEncoding::Nrz);
        config.symbols_in_timing_window = 13;
        config.preamble_pattern_len = 4;
        assert_eq!(timing_bases(&config), Ok(4));
    }

    #[test]
    fn monotonic_in_preamble_length() {
        let _ = env_logger::builder().is_test(true).try_init();

        let branches = [
            (ModulationType::Fsk2, SymbolEncoding::Nrz),
            (ModulationType::Msk, SymbolEncoding::Manchester),
            (ModulationType::Fsk4, SymbolEncoding::Nrz),
            (ModulationType::Ook, SymbolEncoding::Nrz),
            (ModulationType::Ask, SymbolEncoding::Nrz),
            (ModulationType::Oqpsk, SymbolEncoding::Dsss),
            (ModulationType::Bpsk, SymbolEncoding::Dsss),
        ];

        for (modulation_type, symbol_encoding) in branches {
            for pattern_len in 1..=4 {
                for syncword_length in [8, 16, 32] {
                    for baudrate in [9_600, 1_000_000] {
                        let mut config = config(modulation_type, symbol_encoding);
                        config.preamble_pattern_len = pattern_len;
                        config.syncword_length = syncword_length;
                        config.baudrate = baudrate;

                        let mut last = 0;
                        for preamble_length in 0..256 {
                            config.preamble_length = preamble_length;
                            let bases = timing_bases(&config).unwrap();
                            assert!(bases >= last, "{:?}", config);
                            assert!(bases <= MAX_TIMING_BASES);
                            last = bases;
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn window_fits_in_preamble() {
        for pattern_len in 1..=4 {
            let mut config = config(ModulationType::Fsk2, SymbolEncoding::Nrz);
            config.preamble_pattern_len = pattern_len;
            for preamble_length in 8..64 {
                config.preamble_length = preamble_length;
                let bases = timing_bases(&config).unwrap();
                assert!(bases * pattern_len as u32 <= preamble_length);
            }
        }
    }

    #[test]
    fn thresholds_saturate() {
        let _ = env_logger::builder().is_test(true).try_init();

        assert_eq!(timing_threshold(16, 5.0), 72);
        assert_eq!(sample_threshold(16, 5.0), 40);
        for window in [0, 1, 16, 32, 60, 1000] {
            for osr in [3.0, 5.0, 7.5, 127.0] {
                assert!(timing_threshold(window, osr) <= MAX_TIMING_THRESHOLD);
                assert!(sample_threshold(window, osr) <= MAX_SAMPLE_THRESHOLD);
            }
        }
        assert_eq!(timing_threshold(1000, 10.0), 255);
    }

    #[test]
    fn preamble_errors_saturate() {
        let mut config = PhyConfig::default();
        assert_eq!(preamble_errors(&config, 8), 2);
        config.preamble_errors = Some(40);
        assert_eq!(preamble_errors(&config, 8), MAX_PREAMBLE_ERRORS);
    }

    #[test]
    fn writes_timing_registers() {
        let config = PhyConfig::default();
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        write(&config, &mut image).unwrap();

        // 40 bit preamble of 2 bit bases, 16 bit sync word
        assert_eq!(image.read_field("TIMING", "TIMINGBASES"), Ok(8));
        assert_eq!(image.read_field("TIMING", "TIMTHRESH"), Ok(72));
        assert_eq!(image.read_field("CTRL2", "SQITHRESH"), Ok(40));
        assert_eq!(image.read_field("PRE", "PREERRORS"), Ok(2));
    }

    #[test]
    fn sync_word_timing() {
        let config = PhyConfig {
            preamble_length: 4,
            syncword_length: 32,
            ..Default::default()
        };
        assert_eq!(timing_bases(&config), Ok(0));
        assert_eq!(timing_window_symbols(&config, 0), Ok(32));
    }

    #[test]
    fn oversampling_rate_is_checked() {
        let config = PhyConfig {
            oversampling_rate: 0.0,
            ..Default::default()
        };
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        assert_eq!(write(&config, &mut image), Err(Error::InvalidConfiguration));
    }
}
