use crate::{
    calc::{demod, dsss},
    configs::{ModFormat, SymbolEncoding},
    ll::RegisterImage,
    Error,
};

/// PHY parameters as actually programmed
///
/// Read back from a calculated [`RegisterImage`]. These can differ from the
/// requested [`PhyConfig`](crate::PhyConfig) where values had to be rounded
/// or clamped to fit their fields.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Actuals {
    /// `None` for codes without meaning
    pub mod_format: Option<ModFormat>,
    /// `None` for codes without meaning
    pub symbol_encoding: Option<SymbolEncoding>,
    /// Preamble base pattern length in bits
    pub preamble_pattern_len: u32,
    /// Transmitted preamble in bits
    pub preamble_length: u32,
    /// Sync word length in bits
    pub syncword_length: u32,
    /// Preamble bases in the timing window
    pub timing_window_bases: u32,
    /// Timing window in symbols, the sync word if there are no bases
    pub timing_window_symbols: u32,
    /// Only set for DSSS
    pub dsss_len: Option<u32>,
    /// Only set for DSSS
    pub dsss_shifts: Option<u32>,
    /// Chips per bit, only set for DSSS
    pub spreading_factor: Option<u32>,
    /// Timing resynchronization period
    pub resync_period: u32,
    /// `None` on revisions without `CF.DEC1GAIN`, or for the reserved code
    pub dec1_gain_db: Option<u32>,
}

impl Actuals {
    /// Reads the programmed parameters from `image`
    pub fn read(image: &RegisterImage) -> Result<Self, Error> {
        let mod_format = ModFormat::from_register(image.read_field("CTRL0", "MODFORMAT")?);
        let symbol_encoding = SymbolEncoding::from_register(image.read_field("CTRL0", "CODING")?);

        let preamble_pattern_len = image.read_field("PRE", "BASEBITS")? + 1;
        let preamble_length = image.read_field("PRE", "TXBASES")? * preamble_pattern_len;
        let syncword_length = image.read_field("CTRL1", "SYNCBITS")? + 1;

        let timing_window_bases = image.read_field("TIMING", "TIMINGBASES")?;
        let timing_window_symbols = if timing_window_bases > 0 {
            timing_window_bases * preamble_pattern_len
        } else {
            syncword_length
        };

        let (dsss_len, dsss_shifts, spreading_factor) =
            if symbol_encoding == Some(SymbolEncoding::Dsss) {
                let len = dsss::decode_len(image.read_field("CTRL0", "DSSSLEN")?)?;
                let shifts = dsss::decode_shifts(image.read_field("CTRL0", "DSSSSHIFTS")?)?;
                (
                    Some(len),
                    Some(shifts),
                    Some(dsss::spreading_factor(len, shifts)?),
                )
            } else {
                (None, None, None)
            };

        let dec1_gain_db = match image.read_field("CF", "DEC1GAIN") {
            Ok(code) => demod::decode_dec1_gain(code),
            Err(Error::UnknownRegister) | Err(Error::UnknownField) => None,
            Err(error) => return Err(error),
        };

        Ok(Actuals {
            mod_format,
            symbol_encoding,
            preamble_pattern_len,
            preamble_length,
            syncword_length,
            timing_window_bases,
            timing_window_symbols,
            dsss_len,
            dsss_shifts,
            spreading_factor,
            resync_period: demod::resync_period_actual(image)?,
            dec1_gain_db,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        configs::{ModulationType, PhyConfig},
        ll::Revision,
        Calculator,
    };

    #[test]
    fn default_config() {
        for revision in Revision::ALL {
            let image = Calculator::new(revision)
                .calculate(&PhyConfig::default())
                .unwrap();
            let actuals = Actuals::read(&image).unwrap();

            assert_eq!(actuals.mod_format, Some(ModFormat::Fsk2));
            assert_eq!(actuals.symbol_encoding, Some(SymbolEncoding::Nrz));
            assert_eq!(actuals.preamble_pattern_len, 2);
            assert_eq!(actuals.preamble_length, 40);
            assert_eq!(actuals.syncword_length, 16);
            assert_eq!(actuals.timing_window_bases, 8);
            assert_eq!(actuals.timing_window_symbols, 16);
            assert_eq!(actuals.dsss_len, None);
            assert_eq!(actuals.resync_period, 2);
        }
    }

    #[test]
    fn rounded_preamble() {
        let config = PhyConfig {
            preamble_pattern: 0b1010,
            preamble_pattern_len: 4,
            preamble_length: 30,
            ..Default::default()
        };
        let image = Calculator::new(Revision::Efr32xg14).calculate(&config).unwrap();
        assert_eq!(Actuals::read(&image).unwrap().preamble_length, 32);
    }

    #[test]
    fn dsss() {
        let config = PhyConfig {
            modulation_type: ModulationType::Oqpsk,
            symbol_encoding: SymbolEncoding::Dsss,
            preamble_pattern_len: 4,
            preamble_length: 32,
            dsss_chipping_code: 0x744a_c39b,
            dsss_len: 32,
            dsss_shifts: 8,
            ..Default::default()
        };
        let image = Calculator::new(Revision::Efr32xg22).calculate(&config).unwrap();
        let actuals = Actuals::read(&image).unwrap();

        assert_eq!(actuals.mod_format, Some(ModFormat::Oqpsk));
        assert_eq!(actuals.dsss_len, Some(32));
        assert_eq!(actuals.dsss_shifts, Some(8));
        assert_eq!(actuals.spreading_factor, Some(8));
    }

    #[test]
    fn narrow_channel_gain() {
        let config = PhyConfig {
            bandwidth_hz: 1_000,
            ..Default::default()
        };
        for revision in Revision::ALL {
            let image = Calculator::new(revision).calculate(&config).unwrap();
            let expected = image.map().has_field("CF", "DEC1GAIN").then_some(6);
            assert_eq!(Actuals::read(&image).unwrap().dec1_gain_db, expected);
        }
    }

    #[test]
    fn reserved_dec1_gain_code() {
        let mut image = Calculator::new(Revision::Efr32xg1)
            .calculate(&PhyConfig::default())
            .unwrap();
        image.write_field("CF", "DEC1GAIN", 3).unwrap();
        assert_eq!(Actuals::read(&image).unwrap().dec1_gain_db, None);
    }
}
