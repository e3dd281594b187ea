//! Preamble pattern and length

use crate::{
    calc::{
        utils::{clamp_with_warning, div_ceil, flip_bits},
        write_field,
    },
    configs::{PhyConfig, SymbolEncoding},
    fmt::warn,
    ll::RegisterImage,
    Error,
};

/// Longest preamble base pattern `PRE.BASE` can hold
pub const MAX_PATTERN_LEN: u32 = 4;

/// Validated length of the preamble base pattern
pub fn pattern_length(config: &PhyConfig) -> Result<u32, Error> {
    let len = config.preamble_pattern_len as u32;
    if !(1..=MAX_PATTERN_LEN).contains(&len) {
        return Err(Error::InvalidPreamblePatternLength(len));
    }
    Ok(len)
}

/// The base pattern as written to `PRE.BASE`
pub fn base(config: &PhyConfig) -> Result<u32, Error> {
    let len = pattern_length(config)?;
    Ok(flip_bits(config.preamble_pattern, len as u8))
}

/// Number of base patterns to transmit
///
/// Preamble lengths that are not a multiple of the pattern length are rounded
/// up to the next full pattern.
pub fn tx_bases(config: &PhyConfig) -> Result<u32, Error> {
    let len = pattern_length(config)?;
    if config.preamble_length % len != 0 {
        warn!(
            "preamble length {} is not a multiple of the pattern length {}",
            config.preamble_length,
            len
        );
    }

    Ok(clamp_with_warning(
        "TXBASES",
        div_ceil(config.preamble_length, len) as i64,
        0,
        u16::MAX as u32,
    ))
}

pub(crate) fn write(config: &PhyConfig, image: &mut RegisterImage) -> Result<(), Error> {
    let len = pattern_length(config)?;

    write_field(image, "PRE", "BASE", base(config)?)?;
    write_field(image, "PRE", "BASEBITS", len - 1)?;
    write_field(image, "PRE", "TXBASES", tx_bases(config)?)?;
    write_field(
        image,
        "PRE",
        "DSSSPRE",
        (config.symbol_encoding == SymbolEncoding::Dsss) as u32,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ll::Revision;

    #[test]
    fn alternating_preamble() {
        let config = PhyConfig {
            preamble_pattern: 0b10,
            preamble_pattern_len: 2,
            preamble_length: 40,
            ..Default::default()
        };

        assert_eq!(base(&config), Ok(0b01));
        assert_eq!(tx_bases(&config), Ok(20));

        let mut image = RegisterImage::new(Revision::Efr32xg14);
        write(&config, &mut image).unwrap();
        assert_eq!(image.read_field("PRE", "BASE"), Ok(0b01));
        assert_eq!(image.read_field("PRE", "BASEBITS"), Ok(1));
        assert_eq!(image.read_field("PRE", "TXBASES"), Ok(20));
        assert_eq!(image.read_field("PRE", "DSSSPRE"), Ok(0));
    }

    #[test]
    fn partial_pattern_rounds_up() {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = PhyConfig {
            preamble_pattern: 0b1010,
            preamble_pattern_len: 4,
            preamble_length: 33,
            ..Default::default()
        };
        assert_eq!(base(&config), Ok(0b0101));
        assert_eq!(tx_bases(&config), Ok(9));
    }

    #[test]
    fn tx_bases_saturate() {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = PhyConfig {
            preamble_pattern_len: 1,
            preamble_length: 100_000,
            ..Default::default()
        };
        assert_eq!(tx_bases(&config), Ok(0xffff));
    }

    #[test]
    fn pattern_length_is_checked() {
        for len in [0, 5, 32] {
            let config = PhyConfig {
                preamble_pattern_len: len,
                ..Default::default()
            };
            assert_eq!(
                pattern_length(&config),
                Err(Error::InvalidPreamblePatternLength(len as u32))
            );
        }
    }
}
