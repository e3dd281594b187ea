//! Direct sequence spread spectrum parameters
//!
//! A DSSS symbol is the chip sequence in `DSSS0`, cyclically shifted by a
//! multiple of `len / shifts` chips. The number of shifts, and thus the number
//! of bits per symbol, is programmed through a small code in
//! `CTRL0.DSSSSHIFTS`.

use crate::{
    calc::{utils::flip_bits, write_field},
    configs::{PhyConfig, SymbolEncoding},
    ll::RegisterImage,
    Error,
};

/// Supported shift counts and their `CTRL0.DSSSSHIFTS` codes
pub const DSSS_SHIFT_CODES: [(u32, u32); 6] = [(0, 0), (1, 1), (2, 2), (4, 3), (8, 4), (16, 5)];

/// Longest supported chip sequence
pub const MAX_DSSS_LEN: u32 = 32;

/// Encodes a number of shifts for `CTRL0.DSSSSHIFTS`
///
/// # Example
///
/// ```rust
/// use efr32_modem::calc::dsss::{decode_shifts, encode_shifts};
///
/// assert_eq!(encode_shifts(8), Ok(4));
/// assert_eq!(decode_shifts(4), Ok(8));
/// assert!(encode_shifts(3).is_err());
/// ```
pub fn encode_shifts(shifts: u32) -> Result<u32, Error> {
    DSSS_SHIFT_CODES
        .iter()
        .find(|(value, _)| *value == shifts)
        .map(|(_, code)| *code)
        .ok_or(Error::UnsupportedDsssShifts(shifts))
}

/// Decodes `CTRL0.DSSSSHIFTS` into a number of shifts
pub fn decode_shifts(code: u32) -> Result<u32, Error> {
    DSSS_SHIFT_CODES
        .iter()
        .find(|(_, value)| *value == code)
        .map(|(shifts, _)| *shifts)
        .ok_or(Error::InvalidDsssShiftCode(code))
}

/// Encodes a chip sequence length for `CTRL0.DSSSLEN`
pub fn encode_len(len: u32) -> Result<u32, Error> {
    if !(1..=MAX_DSSS_LEN).contains(&len) {
        return Err(Error::InvalidDsssLength(len));
    }
    Ok(len - 1)
}

/// Decodes `CTRL0.DSSSLEN` into a chip sequence length
pub fn decode_len(code: u32) -> Result<u32, Error> {
    if code >= MAX_DSSS_LEN {
        return Err(Error::InvalidDsssLength(code.saturating_add(1)));
    }
    Ok(code + 1)
}

/// Bits carried by one DSSS symbol
///
/// One bit selects between the sequence and its inverse, the remaining ones
/// the shift.
pub fn bits_per_symbol(shifts: u32) -> Result<u32, Error> {
    encode_shifts(shifts)?;
    Ok(1 + shifts.max(1).trailing_zeros())
}

/// Chips per bit
pub fn spreading_factor(len: u32, shifts: u32) -> Result<u32, Error> {
    encode_len(len)?;
    Ok(len / bits_per_symbol(shifts)?)
}

/// Chip sequence as written to `DSSS0`
pub fn chip_sequence(code: u32, len: u32) -> Result<u32, Error> {
    encode_len(len)?;
    Ok(flip_bits(code, len as u8))
}

pub(crate) fn write(config: &PhyConfig, image: &mut RegisterImage) -> Result<(), Error> {
    if config.symbol_encoding != SymbolEncoding::Dsss {
        write_field(image, "CTRL0", "DSSSLEN", 0)?;
        write_field(image, "CTRL0", "DSSSSHIFTS", 0)?;
        return Ok(());
    }

    let len = config.dsss_len as u32;
    if config.dsss_shifts != 0 && len % config.dsss_shifts != 0 {
        return Err(Error::InvalidConfiguration);
    }

    write_field(image, "CTRL0", "DSSSLEN", encode_len(len)?)?;
    write_field(image, "CTRL0", "DSSSSHIFTS", encode_shifts(config.dsss_shifts)?)?;
    write_field(
        image,
        "DSSS0",
        "DSSS0",
        chip_sequence(config.dsss_chipping_code, len)?,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ll::Revision;

    #[test]
    fn shift_codes_round_trip() {
        for shifts in [0, 1, 2, 4, 8, 16] {
            assert_eq!(decode_shifts(encode_shifts(shifts).unwrap()), Ok(shifts));
        }
        assert_eq!(encode_shifts(8), Ok(4));
        assert_eq!(decode_shifts(4), Ok(8));
    }

    #[test]
    fn unsupported_shifts() {
        for shifts in [3, 5, 6, 7, 9, 15, 17, 32, u32::MAX] {
            assert_eq!(encode_shifts(shifts), Err(Error::UnsupportedDsssShifts(shifts)));
        }
        for code in [6, 7, 100] {
            assert_eq!(decode_shifts(code), Err(Error::InvalidDsssShiftCode(code)));
        }
    }

    #[test]
    fn lengths() {
        assert_eq!(encode_len(32), Ok(31));
        assert_eq!(encode_len(1), Ok(0));
        assert_eq!(decode_len(31), Ok(32));
        assert_eq!(encode_len(0), Err(Error::InvalidDsssLength(0)));
        assert_eq!(encode_len(33), Err(Error::InvalidDsssLength(33)));
        assert_eq!(decode_len(32), Err(Error::InvalidDsssLength(33)));
        assert_eq!(decode_len(u32::MAX), Err(Error::InvalidDsssLength(u32::MAX)));
    }

    #[test]
    fn spreading() {
        assert_eq!(bits_per_symbol(0), Ok(1));
        assert_eq!(bits_per_symbol(1), Ok(1));
        assert_eq!(bits_per_symbol(8), Ok(4));
        assert_eq!(bits_per_symbol(16), Ok(5));
        // 802.15.4 O-QPSK: 32 chips for 4 bits
        assert_eq!(spreading_factor(32, 8), Ok(8));
        assert_eq!(spreading_factor(15, 0), Ok(15));
        assert!(spreading_factor(32, 3).is_err());
    }

    #[test]
    fn writes_dsss_registers() {
        let config = PhyConfig {
            symbol_encoding: SymbolEncoding::Dsss,
            dsss_chipping_code: 0x744a_c39b,
            dsss_len: 32,
            dsss_shifts: 8,
            ..Default::default()
        };
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        write(&config, &mut image).unwrap();

        assert_eq!(image.read_field("CTRL0", "DSSSLEN"), Ok(31));
        assert_eq!(image.read_field("CTRL0", "DSSSSHIFTS"), Ok(4));
        assert_eq!(image.read_register("DSSS0"), Ok(flip_bits(0x744a_c39b, 32)));
    }

    #[test]
    fn shifts_must_divide_length() {
        let config = PhyConfig {
            symbol_encoding: SymbolEncoding::Dsss,
            dsss_len: 15,
            dsss_shifts: 4,
            ..Default::default()
        };
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        assert_eq!(write(&config, &mut image), Err(Error::InvalidConfiguration));
    }

    #[test]
    fn disabled_without_dsss() {
        let mut image = RegisterImage::new(Revision::Efr32xg22);
        write(&PhyConfig::default(), &mut image).unwrap();
        assert_eq!(image.read_field("CTRL0", "DSSSLEN"), Ok(0));
        assert!(!image.is_written("DSSS0"));
    }
}
