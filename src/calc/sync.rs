//! Sync word detection

use crate::{
    calc::{
        utils::{clamp_with_warning, flip_bits},
        write_field,
    },
    configs::PhyConfig,
    ll::RegisterImage,
    Error,
};

/// Longest sync word `SYNC0` can hold
pub const MAX_SYNC_WORD_LEN: u32 = 32;

/// Most sync word bit errors `CTRL1.SYNCERRORS` can express
pub const MAX_SYNC_ERRORS: u32 = 15;

/// Validated sync word length
pub fn sync_word_length(config: &PhyConfig) -> Result<u32, Error> {
    let len = config.syncword_length as u32;
    if !(1..=MAX_SYNC_WORD_LEN).contains(&len) {
        return Err(Error::InvalidSyncWordLength(len));
    }
    Ok(len)
}

/// A sync word as written to `SYNC0` or `SYNC1`
pub fn sync_word(word: u32, config: &PhyConfig) -> Result<u32, Error> {
    Ok(flip_bits(word, sync_word_length(config)? as u8))
}

/// Accepted sync word bit errors, saturated to what the register holds
pub fn sync_errors(config: &PhyConfig) -> u32 {
    clamp_with_warning(
        "SYNCERRORS",
        config.syncword_errors as i64,
        0,
        MAX_SYNC_ERRORS,
    )
}

pub(crate) fn write(config: &PhyConfig, image: &mut RegisterImage) -> Result<(), Error> {
    let len = sync_word_length(config)?;

    write_field(image, "SYNC0", "SYNC0", sync_word(config.syncword_0, config)?)?;
    write_field(image, "SYNC1", "SYNC1", sync_word(config.syncword_1, config)?)?;
    write_field(image, "CTRL1", "SYNCBITS", len - 1)?;
    write_field(image, "CTRL1", "SYNCERRORS", sync_errors(config))?;
    write_field(image, "CTRL1", "DUALSYNC", config.dual_syncword as u32)?;
    write_field(image, "CTRL1", "TXSYNC", !config.syncword_tx_skip as u32)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ll::Revision;

    #[test]
    fn sync_word_is_flipped() {
        let config = PhyConfig {
            syncword_0: 0xf68d,
            syncword_1: 0x904e,
            syncword_length: 16,
            dual_syncword: true,
            ..Default::default()
        };

        let mut image = RegisterImage::new(Revision::Efr32xg22);
        write(&config, &mut image).unwrap();
        assert_eq!(image.read_register("SYNC0"), Ok(0xb16f));
        assert_eq!(image.read_register("SYNC1"), Ok(0x7209));
        assert_eq!(image.read_field("CTRL1", "SYNCBITS"), Ok(15));
        assert_eq!(image.read_field("CTRL1", "DUALSYNC"), Ok(1));
        assert_eq!(image.read_field("CTRL1", "TXSYNC"), Ok(1));
    }

    #[test]
    fn errors_saturate() {
        let _ = env_logger::builder().is_test(true).try_init();

        for errors in [0u8, 3, 15, 16, 200, u8::MAX] {
            let config = PhyConfig {
                syncword_errors: errors,
                ..Default::default()
            };
            assert!(sync_errors(&config) <= MAX_SYNC_ERRORS);
        }
    }

    #[test]
    fn length_is_checked() {
        for len in [0u8, 33, 64] {
            let config = PhyConfig {
                syncword_length: len,
                ..Default::default()
            };
            assert_eq!(
                sync_word_length(&config),
                Err(Error::InvalidSyncWordLength(len as u32))
            );
        }
    }
}
