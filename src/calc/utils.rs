//! Bit and range helpers shared by the calculations

use crate::fmt::warn;

/// Reverses the order of the lowest `width` bits of `value`
///
/// Bits above `width` are dropped. Preambles, sync words and chip sequences
/// are configured MSB first but transmitted from the register LSB first,
/// which is why they are flipped before being written.
///
/// `width` must be between 1 and 32.
///
/// # Example
///
/// ```rust
/// use efr32_modem::calc::flip_bits;
///
/// assert_eq!(flip_bits(0b1011, 4), 0b1101);
/// ```
pub fn flip_bits(value: u32, width: u8) -> u32 {
    debug_assert!((1..=32).contains(&width), "invalid width {}", width);
    if width == 0 {
        return 0;
    }

    value.reverse_bits() >> (32 - width.min(32) as u32)
}

/// Clamps `value` into `min..=max`, warning if it had to
///
/// Used for values derived from the configuration that must fit a register
/// field. Out-of-range results are not an error.
pub fn clamp_with_warning(name: &str, value: i64, min: u32, max: u32) -> u32 {
    if value < min as i64 {
        warn!("{} = {} is below {}, clamping", name, value, min);
        min
    } else if value > max as i64 {
        warn!("{} = {} is above {}, clamping", name, value, max);
        max
    } else {
        value as u32
    }
}

/// Division rounding up
pub(crate) fn div_ceil(numerator: u32, denominator: u32) -> u32 {
    numerator / denominator + (numerator % denominator != 0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_bits_examples() {
        assert_eq!(flip_bits(0b1011, 4), 0b1101);
        assert_eq!(flip_bits(0b10, 2), 0b01);
        assert_eq!(flip_bits(1, 1), 1);
        assert_eq!(flip_bits(1, 32), 0x8000_0000);
        assert_eq!(flip_bits(0xf68d, 16), 0xb16f);
        // Bits above the width are ignored
        assert_eq!(flip_bits(0xf0 | 0b0001, 4), 0b1000);
    }

    #[test]
    fn flip_bits_is_involutive() {
        for width in 1..=32u8 {
            let mask = u32::MAX >> (32 - width as u32);
            for value in [0, 1, 0x5a5a_5a5a, 0xdead_beef, 0x8000_0001, u32::MAX] {
                let value = value & mask;
                assert_eq!(flip_bits(flip_bits(value, width), width), value);
            }
        }
    }

    #[test]
    fn clamp_stays_in_range() {
        let _ = env_logger::builder().is_test(true).try_init();

        assert_eq!(clamp_with_warning("X", 300, 0, 255), 255);
        assert_eq!(clamp_with_warning("X", -5, 0, 255), 0);
        assert_eq!(clamp_with_warning("X", 7, 0, 15), 7);
        assert_eq!(clamp_with_warning("X", i64::MAX, 0, 15), 15);
        assert_eq!(clamp_with_warning("X", 0, 1, 4), 1);
    }

    #[test]
    fn div_ceil_rounds_up() {
        assert_eq!(div_ceil(8, 4), 2);
        assert_eq!(div_ceil(9, 4), 3);
        assert_eq!(div_ceil(0, 3), 0);
    }
}
