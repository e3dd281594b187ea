//! Register write sequences
//!
//! The written registers of a [`RegisterImage`] are exported as a compact
//! sequence of runs. Each run covers registers at consecutive addresses and
//! is encoded, little endian, as
//!
//! ```text
//! address: u32 | count: u16 | count * value: u32
//! ```
//!
//! Runs are ordered by address. Registers that were never written are left
//! out.

use core::iter::Peekable;

use byte::{BytesExt as _, LE};

use crate::{fmt::trace, ll::RegisterImage, Error};

/// Size of a run header in bytes
pub const RUN_HEADER_LEN: usize = 6;

/// A run of consecutive registers
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Run {
    /// Address of the first register
    pub address: u32,
    /// Number of registers
    pub count: u16,
}

impl Run {
    /// Bytes taken by this run, header included
    pub fn encoded_len(&self) -> usize {
        RUN_HEADER_LEN + 4 * self.count as usize
    }
}

/// The written registers of an image, as a sequence of runs
#[derive(Copy, Clone, Debug)]
pub struct WriteSequence<'r> {
    image: &'r RegisterImage,
}

impl<'r> WriteSequence<'r> {
    /// Creates the write sequence of `image`
    pub fn new(image: &'r RegisterImage) -> Self {
        WriteSequence { image }
    }

    /// The runs making up the sequence
    pub fn runs(&self) -> Runs<impl Iterator<Item = (u32, u32)> + 'r> {
        Runs {
            writes: self.image.writes().peekable(),
        }
    }

    /// Number of bytes [`WriteSequence::encode`] needs
    pub fn encoded_len(&self) -> usize {
        self.runs().map(|run| run.encoded_len()).sum()
    }

    /// Encodes the sequence into `buf`, returning the number of bytes written
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let required_len = self.encoded_len();
        if buf.len() < required_len {
            return Err(Error::BufferTooSmall { required_len });
        }

        let too_small = |_| Error::BufferTooSmall { required_len };
        let mut offset = 0;
        let mut values = self.image.writes().map(|(_, value)| value);

        for run in self.runs() {
            trace!("run at 0x{:08x}, {} registers", run.address, run.count);
            buf.write_with::<u32>(&mut offset, run.address, LE)
                .map_err(too_small)?;
            buf.write_with::<u16>(&mut offset, run.count, LE)
                .map_err(too_small)?;
            for value in values.by_ref().take(run.count as usize) {
                buf.write_with::<u32>(&mut offset, value, LE)
                    .map_err(too_small)?;
            }
        }

        Ok(offset)
    }
}

/// Iterator over the [`Run`]s of a [`WriteSequence`]
pub struct Runs<I: Iterator<Item = (u32, u32)>> {
    writes: Peekable<I>,
}

impl<I: Iterator<Item = (u32, u32)>> Iterator for Runs<I> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let (address, _) = self.writes.next()?;
        let mut run = Run { address, count: 1 };

        while run.count < u16::MAX {
            let next = address.wrapping_add(4 * run.count as u32);
            if self.writes.next_if(|&(a, _)| a == next).is_none() {
                break;
            }
            run.count += 1;
        }

        Some(run)
    }
}

/// Decodes an encoded write sequence into `(address, value)` pairs
///
/// Yields an error and stops if the sequence is truncated or contains an
/// empty or misaligned run.
pub fn decode(bytes: &[u8]) -> Decoder<'_> {
    Decoder {
        bytes,
        offset: 0,
        address: 0,
        remaining: 0,
        failed: false,
    }
}

/// Iterator returned by [`decode`]
pub struct Decoder<'b> {
    bytes: &'b [u8],
    offset: usize,
    address: u32,
    remaining: u16,
    failed: bool,
}

impl<'b> Decoder<'b> {
    fn next_write(&mut self) -> Result<Option<(u32, u32)>, Error> {
        let malformed = |_| Error::MalformedSequence;

        if self.remaining == 0 {
            if self.offset == self.bytes.len() {
                return Ok(None);
            }
            self.address = self
                .bytes
                .read_with::<u32>(&mut self.offset, LE)
                .map_err(malformed)?;
            self.remaining = self
                .bytes
                .read_with::<u16>(&mut self.offset, LE)
                .map_err(malformed)?;
            if self.remaining == 0 || self.address % 4 != 0 {
                return Err(Error::MalformedSequence);
            }
        }

        let value = self
            .bytes
            .read_with::<u32>(&mut self.offset, LE)
            .map_err(malformed)?;
        let address = self.address;
        self.address = self.address.wrapping_add(4);
        self.remaining -= 1;

        Ok(Some((address, value)))
    }
}

impl<'b> Iterator for Decoder<'b> {
    type Item = Result<(u32, u32), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.next_write();
        self.failed = result.is_err();
        result.transpose()
    }
}

/// Writes an encoded sequence into `image`, returning the number of registers
pub fn apply(bytes: &[u8], image: &mut RegisterImage) -> Result<usize, Error> {
    let mut count = 0;
    for write in decode(bytes) {
        let (address, value) = write?;
        image.write_address(address, value)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ll::{efr32xg1, Revision},
        Calculator, PhyConfig,
    };

    #[test]
    fn empty_image() {
        let image = RegisterImage::new(Revision::Efr32xg22);
        let sequence = WriteSequence::new(&image);
        assert_eq!(sequence.runs().count(), 0);
        assert_eq!(sequence.encoded_len(), 0);
        assert_eq!(sequence.encode(&mut []), Ok(0));
    }

    #[test]
    fn consecutive_registers_share_a_run() {
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        image.write_register("CTRL0", 0x10).unwrap();
        image.write_register("CTRL1", 0x20).unwrap();
        image.write_register("TIMING", 0x30).unwrap();

        let runs: Vec<Run> = WriteSequence::new(&image).runs().collect();
        assert_eq!(
            runs,
            [
                Run {
                    address: 0x4008_6018,
                    count: 2
                },
                Run {
                    address: 0x4008_6048,
                    count: 1
                },
            ]
        );

        let mut buf = [0; 64];
        let len = WriteSequence::new(&image).encode(&mut buf).unwrap();
        assert_eq!(len, 2 * RUN_HEADER_LEN + 3 * 4);
        assert_eq!(
            &buf[..len],
            &[
                0x18, 0x60, 0x08, 0x40, 2, 0, //
                0x10, 0, 0, 0, //
                0x20, 0, 0, 0, //
                0x48, 0x60, 0x08, 0x40, 1, 0, //
                0x30, 0, 0, 0,
            ]
        );
    }

    #[test]
    fn buffer_too_small() {
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        image.write_register("SYNC0", 0xb16f).unwrap();

        let mut buf = [0; 9];
        assert_eq!(
            WriteSequence::new(&image).encode(&mut buf),
            Err(Error::BufferTooSmall { required_len: 10 })
        );
    }

    #[test]
    fn applies_to_a_fresh_image() {
        let image = Calculator::new(Revision::Efr32xg14)
            .calculate(&PhyConfig::default())
            .unwrap();
        let sequence = WriteSequence::new(&image);
        let mut buf = vec![0; sequence.encoded_len()];
        sequence.encode(&mut buf).unwrap();

        let mut applied = RegisterImage::new(Revision::Efr32xg14);
        assert_eq!(apply(&buf, &mut applied), Ok(image.write_count()));
        assert!(applied.writes().eq(image.writes()));
    }

    #[test]
    fn ram_is_one_run() {
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        for index in 0..4 {
            image
                .reg_element::<efr32xg1::RAM_RAMDATA>(index)
                .write(|w| w.bits(index as u32))
                .unwrap();
        }

        let runs: Vec<Run> = WriteSequence::new(&image).runs().collect();
        assert_eq!(
            runs,
            [Run {
                address: 0x4008_6400,
                count: 4
            }]
        );
    }

    #[test]
    fn malformed_sequences() {
        // truncated header
        assert_eq!(
            decode(&[0x00, 0x60, 0x08]).collect::<Vec<_>>(),
            [Err(Error::MalformedSequence)]
        );
        // empty run
        assert_eq!(
            decode(&[0x00, 0x60, 0x08, 0x40, 0, 0]).collect::<Vec<_>>(),
            [Err(Error::MalformedSequence)]
        );
        // missing second value
        assert_eq!(
            decode(&[0x00, 0x60, 0x08, 0x40, 2, 0, 1, 0, 0, 0]).collect::<Vec<_>>(),
            [Ok((0x4008_6000, 1)), Err(Error::MalformedSequence)]
        );
        // misaligned address
        assert_eq!(
            decode(&[0x02, 0x60, 0x08, 0x40, 1, 0, 1, 0, 0, 0]).collect::<Vec<_>>(),
            [Err(Error::MalformedSequence)]
        );
    }

    #[test]
    fn unknown_addresses_are_rejected() {
        let mut image = RegisterImage::new(Revision::Efr32xg22);
        let bytes = [0x00, 0x60, 0x08, 0x40, 1, 0, 1, 0, 0, 0];
        assert_eq!(apply(&bytes, &mut image), Err(Error::UnknownRegister));
    }

    #[test]
    fn read_only_registers_are_rejected() {
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        // STATUS at offset 0
        let bytes = [0x00, 0x60, 0x08, 0x40, 1, 0, 1, 0, 0, 0];
        assert_eq!(apply(&bytes, &mut image), Err(Error::ReadOnly));
        assert_eq!(image.write_count(), 0);
    }
}
