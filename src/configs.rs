//! PHY configuration
//!
//! This module houses the datastructures that describe a PHY. A [`PhyConfig`]
//! is passed to the [calculator], which derives the register values from it.
//! With the `serde` feature enabled, configurations can be loaded from any
//! format serde supports. Missing entries take their default value.
//!
//! [calculator]: ../calc/struct.Calculator.html

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
/// High-level description of a PHY
pub struct PhyConfig {
    /// The modulation.
    pub modulation_type: ModulationType,
    /// How bits are mapped onto symbols.
    pub symbol_encoding: SymbolEncoding,
    /// Pulse shaping applied on the transmit side.
    pub shaping_filter: ShapingFilter,
    /// Bandwidth-time product of the shaping filter.
    ///
    /// Only meaningful for Gaussian filters.
    pub shaping_filter_param: f32,
    /// Demodulator to use.
    pub demod_select: DemodSelect,
    /// Symbol rate in baud.
    pub baudrate: u32,
    /// Receive channel bandwidth in Hz.
    pub bandwidth_hz: u32,
    /// Samples per symbol at the demodulator.
    pub oversampling_rate: f32,
    /// Required tolerance to baud rate offsets, in ppm.
    pub baudrate_tol_ppm: u32,
    /// Mapping of 2-FSK and 4-FSK symbols onto frequencies, 0 to 7.
    pub fsk_symbol_map: u8,
    /// The preamble base pattern, transmitted MSB first.
    pub preamble_pattern: u32,
    /// Length of the preamble base pattern, 1 to 4 bits.
    pub preamble_pattern_len: u8,
    /// Preamble length in bits.
    pub preamble_length: u32,
    /// Accepted bit errors in the preamble.
    ///
    /// Derived from the timing window if not set.
    pub preamble_errors: Option<u8>,
    /// Primary sync word, transmitted MSB first.
    pub syncword_0: u32,
    /// Secondary sync word, only used with `dual_syncword`.
    pub syncword_1: u32,
    /// Sync word length, 1 to 32 bits.
    pub syncword_length: u8,
    /// Detect either of the two sync words.
    pub dual_syncword: bool,
    /// Don't transmit the sync word.
    pub syncword_tx_skip: bool,
    /// Accepted bit errors in the sync word.
    pub syncword_errors: u8,
    /// Length of the timing window in symbols.
    ///
    /// `0` selects the length from the preamble length.
    pub symbols_in_timing_window: u8,
    /// DSSS chip sequence, transmitted MSB first.
    pub dsss_chipping_code: u32,
    /// Length of the DSSS chip sequence in chips.
    pub dsss_len: u8,
    /// Number of cyclic shifts of the chip sequence used as symbols.
    pub dsss_shifts: u32,
}

impl Default for PhyConfig {
    fn default() -> Self {
        PhyConfig {
            modulation_type: Default::default(),
            symbol_encoding: Default::default(),
            shaping_filter: Default::default(),
            shaping_filter_param: 0.5,
            demod_select: Default::default(),
            baudrate: 38_400,
            bandwidth_hz: 100_000,
            oversampling_rate: 5.0,
            baudrate_tol_ppm: 0,
            fsk_symbol_map: 0,
            preamble_pattern: 0b10,
            preamble_pattern_len: 2,
            preamble_length: 40,
            preamble_errors: None,
            syncword_0: 0xf68d,
            syncword_1: 0,
            syncword_length: 16,
            dual_syncword: false,
            syncword_tx_skip: false,
            syncword_errors: 0,
            symbols_in_timing_window: 0,
            dsss_chipping_code: 0,
            dsss_len: 0,
            dsss_shifts: 0,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// The modulation of a PHY
pub enum ModulationType {
    /// Binary frequency shift keying
    Fsk2,
    /// 4-level frequency shift keying
    Fsk4,
    /// Binary phase shift keying
    Bpsk,
    /// Differential binary phase shift keying
    Dbpsk,
    /// Offset quadrature phase shift keying
    Oqpsk,
    /// Minimum shift keying, demodulated as 2-FSK
    Msk,
    /// On-off keying
    Ook,
    /// Amplitude shift keying
    Ask,
}

impl Default for ModulationType {
    fn default() -> Self {
        ModulationType::Fsk2
    }
}

impl ModulationType {
    /// The format programmed into `CTRL0.MODFORMAT`
    pub fn mod_format(&self) -> ModFormat {
        match self {
            ModulationType::Fsk2 | ModulationType::Msk => ModFormat::Fsk2,
            ModulationType::Fsk4 => ModFormat::Fsk4,
            ModulationType::Bpsk => ModFormat::Bpsk,
            ModulationType::Dbpsk => ModFormat::Dbpsk,
            ModulationType::Oqpsk => ModFormat::Oqpsk,
            ModulationType::Ook | ModulationType::Ask => ModFormat::OokAsk,
        }
    }

    /// Whether information is carried by the amplitude
    pub fn is_amplitude(&self) -> bool {
        matches!(self, ModulationType::Ook | ModulationType::Ask)
    }

    /// Whether this is BPSK or DBPSK
    pub fn is_bpsk(&self) -> bool {
        matches!(self, ModulationType::Bpsk | ModulationType::Dbpsk)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Demodulator format, as held by `CTRL0.MODFORMAT`
pub enum ModFormat {
    /// 2-FSK
    Fsk2 = 0,
    /// 4-FSK
    Fsk4 = 1,
    /// BPSK
    Bpsk = 2,
    /// DBPSK
    Dbpsk = 3,
    /// OQPSK
    Oqpsk = 4,
    /// MSK
    Msk = 5,
    /// OOK and ASK
    OokAsk = 6,
}

impl ModFormat {
    /// Decodes the register value
    pub fn from_register(value: u32) -> Option<Self> {
        Some(match value {
            0 => ModFormat::Fsk2,
            1 => ModFormat::Fsk4,
            2 => ModFormat::Bpsk,
            3 => ModFormat::Dbpsk,
            4 => ModFormat::Oqpsk,
            5 => ModFormat::Msk,
            6 => ModFormat::OokAsk,
            _ => return None,
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Symbol coding, as held by `CTRL0.CODING`
pub enum SymbolEncoding {
    /// Non-return-to-zero, one symbol per bit
    Nrz = 0,
    /// Manchester coding
    Manchester = 1,
    /// Direct sequence spread spectrum
    Dsss = 2,
    /// Line code
    Linecode = 3,
}

impl Default for SymbolEncoding {
    fn default() -> Self {
        SymbolEncoding::Nrz
    }
}

impl SymbolEncoding {
    /// Decodes the register value
    pub fn from_register(value: u32) -> Option<Self> {
        Some(match value {
            0 => SymbolEncoding::Nrz,
            1 => SymbolEncoding::Manchester,
            2 => SymbolEncoding::Dsss,
            3 => SymbolEncoding::Linecode,
            _ => return None,
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Transmit pulse shaping
pub enum ShapingFilter {
    /// No shaping
    None,
    /// Gaussian filter, see [`PhyConfig::shaping_filter_param`]
    Gaussian,
    /// Raised cosine filter
    RaisedCosine,
    /// Custom filter coefficients
    Custom,
}

impl Default for ShapingFilter {
    fn default() -> Self {
        ShapingFilter::Gaussian
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Demodulator selection
pub enum DemodSelect {
    /// Frequency detection based demodulator
    Legacy,
    /// Coherent demodulator
    Coherent,
}

impl Default for DemodSelect {
    fn default() -> Self {
        DemodSelect::Legacy
    }
}
