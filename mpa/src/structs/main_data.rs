//! Layer III main data: scale factors and quantized spectral lines.
//!
//! Each granule and channel occupies `part2_3_length` bits of the main data
//! span. Part 2 holds the scale factors, part 3 the Huffman coded spectrum:
//! a big-value region of pairs split into up to three table regions, then a
//! count1 region of quadruples, then implicit zeros.

use anyhow::{Result, bail};
use log::{debug, trace};

use crate::structs::header::FrameHeader;
use crate::structs::side_info::{ChannelSideInfo, GRANULES, MAX_CHANNELS, SCFSI_BANDS, SideInfo};
use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::{BitstreamError, MainDataError};
use crate::utils::huffman::SymbolSource;

pub const SPECTRAL_LINES: usize = 576;
pub const LONG_BANDS: usize = 22;
pub const SHORT_BANDS: usize = 13;
pub const SHORT_WINDOWS: usize = 3;

/// Long block scale factor bands read ahead of the short ones in mixed blocks.
const MIXED_LONG_BANDS: usize = 8;

/// `(slen1, slen2)` indexed by `scalefac_compress`.
const SLEN: [(u32, u32); 16] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (3, 0),
    (1, 1),
    (1, 2),
    (1, 3),
    (2, 1),
    (2, 2),
    (2, 3),
    (3, 1),
    (3, 2),
    (3, 3),
    (4, 2),
    (4, 3),
];

/// Long band ranges sharing one `scfsi` bit.
const SCFSI_GROUPS: [(usize, usize); SCFSI_BANDS] = [(0, 6), (6, 11), (11, 16), (16, 21)];

#[rustfmt::skip]
const LONG_BANDS_44100: [usize; LONG_BANDS + 1] = [
    0, 4, 8, 12, 16, 20, 24, 30, 36, 44, 52, 62, 74, 90, 110, 134, 162, 196, 238, 288, 342, 418, 576,
];

#[rustfmt::skip]
const LONG_BANDS_48000: [usize; LONG_BANDS + 1] = [
    0, 4, 8, 12, 16, 20, 24, 30, 36, 42, 50, 60, 72, 88, 106, 128, 156, 190, 230, 276, 330, 384, 576,
];

#[rustfmt::skip]
const LONG_BANDS_32000: [usize; LONG_BANDS + 1] = [
    0, 4, 8, 12, 16, 20, 24, 30, 36, 44, 54, 66, 82, 102, 126, 156, 194, 240, 296, 364, 448, 550, 576,
];

/// Spectral line boundaries of the long scale factor bands for an MPEG-1
/// sample rate.
pub fn long_band_boundaries(sample_rate: u32) -> Result<&'static [usize; LONG_BANDS + 1]> {
    match sample_rate {
        44100 => Ok(&LONG_BANDS_44100),
        48000 => Ok(&LONG_BANDS_48000),
        32000 => Ok(&LONG_BANDS_32000),
        _ => bail!(MainDataError::UnsupportedSampleRate(sample_rate)),
    }
}

fn is_exhaustion(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<BitstreamError>(),
        Some(BitstreamError::Exhausted { .. })
    )
}

/// Decoded data of one channel in one granule.
#[derive(Debug, Clone, PartialEq)]
pub struct GranuleChannel {
    pub scalefac_l: [u8; LONG_BANDS],
    pub scalefac_s: [[u8; SHORT_WINDOWS]; SHORT_BANDS],
    pub frequency_lines: [f32; SPECTRAL_LINES],
    /// Lines written from the bitstream. Everything after is zero.
    pub decoded_lines: usize,
}

impl Default for GranuleChannel {
    fn default() -> Self {
        Self {
            scalefac_l: [0; LONG_BANDS],
            scalefac_s: [[0; SHORT_WINDOWS]; SHORT_BANDS],
            frequency_lines: [0.0; SPECTRAL_LINES],
            decoded_lines: 0,
        }
    }
}

impl GranuleChannel {
    fn read_scale_factors(
        &mut self,
        reader: &mut BsIoSliceReader,
        info: &ChannelSideInfo,
        granule: usize,
        scfsi: &[bool; SCFSI_BANDS],
        previous: &[u8; LONG_BANDS],
    ) -> Result<()> {
        let (slen1, slen2) = SLEN[(info.scalefac_compress & 0xF) as usize];

        if info.is_short_granule() {
            if info.mixed_block_flag() {
                for band in 0..MIXED_LONG_BANDS {
                    self.scalefac_l[band] = reader.read(slen1)? as u8;
                }
            }

            for band in 3..SHORT_BANDS - 1 {
                let slen = if band < 6 { slen1 } else { slen2 };
                for window in 0..SHORT_WINDOWS {
                    self.scalefac_s[band][window] = reader.read(slen)? as u8;
                }
            }

            return Ok(());
        }

        for (group, &(first, last)) in SCFSI_GROUPS.iter().enumerate() {
            let slen = if group < 2 { slen1 } else { slen2 };

            for band in first..last {
                self.scalefac_l[band] = if granule == 1 && scfsi[group] {
                    previous[band]
                } else {
                    reader.read(slen)? as u8
                };
            }
        }

        Ok(())
    }

    fn read_spectrum<S: SymbolSource>(
        &mut self,
        reader: &mut BsIoSliceReader,
        info: &ChannelSideInfo,
        bounds: (usize, usize),
        source: &S,
    ) -> Result<()> {
        let big_values_end = (info.big_values as usize * 2).min(SPECTRAL_LINES);
        let mut line = 0;

        while line < big_values_end {
            if reader.available()? == 0 {
                break;
            }

            let table = info.table_for_line(line, bounds);
            let (x, y) = source.decode_pair(reader, table)?;

            self.frequency_lines[line] = x as f32;
            self.frequency_lines[line + 1] = y as f32;
            line += 2;
            self.decoded_lines = line;
        }

        while line + 4 <= SPECTRAL_LINES && reader.available()? > 0 {
            let values = source.decode_quadruple(reader, info.count1table_select)?;

            for (dst, value) in self.frequency_lines[line..line + 4].iter_mut().zip(values) {
                *dst = value as f32;
            }
            line += 4;
            self.decoded_lines = line;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainData {
    pub channels: usize,
    /// Indexed by granule, then channel.
    pub granules: [[GranuleChannel; MAX_CHANNELS]; GRANULES],
}

impl MainData {
    /// Decodes both granules of every channel from a main data span.
    ///
    /// The reader must be positioned at the first bit of this frame's main
    /// data. Each granule is bounded by its `part2_3_length`. Running out of
    /// bits during Huffman decoding ends that granule early and leaves the
    /// remaining lines at zero; running out inside the scale factors is an
    /// error for the whole frame.
    pub fn read<S: SymbolSource>(
        reader: &mut BsIoSliceReader,
        header: &FrameHeader,
        side_info: &SideInfo,
        source: &S,
    ) -> Result<Self> {
        long_band_boundaries(header.frequency)?;

        let mut main_data = Self {
            channels: side_info.channels,
            ..Default::default()
        };

        for gr in 0..GRANULES {
            for ch in 0..side_info.channels {
                let info = side_info.channel(gr, ch);
                let bounds = info.region_bounds(header.frequency)?;

                let start = reader.position()?;
                let end = (start + info.part2_3_length as u64).min(reader.len());

                let previous = main_data.granules[0][ch].scalefac_l;
                let mut granule = GranuleChannel::default();

                reader.set_limit(end);
                let scale_factors =
                    granule.read_scale_factors(reader, info, gr, &side_info.scfsi[ch], &previous);
                if let Err(err) = scale_factors {
                    reader.clear_limit();
                    return Err(err);
                }
                let spectrum = granule.read_spectrum(reader, info, bounds, source);
                reader.clear_limit();

                match spectrum {
                    Ok(()) => {}
                    Err(err) if is_exhaustion(&err) => {
                        debug!("granule {gr} channel {ch}: {err}, remaining lines are zero");
                    }
                    Err(err) => return Err(err),
                }

                trace!(
                    "granule {gr} channel {ch}: {} of {} bits, {} lines",
                    reader.position()? - start,
                    info.part2_3_length,
                    granule.decoded_lines
                );

                reader.seek(end)?;
                main_data.granules[gr][ch] = granule;
            }
        }

        Ok(main_data)
    }

    pub fn from_bytes<S: SymbolSource>(
        header: &FrameHeader,
        side_info: &SideInfo,
        span: &[u8],
        source: &S,
    ) -> Result<Self> {
        Self::read(&mut BsIoSliceReader::from_slice(span), header, side_info, source)
    }

    pub fn granule(&self, granule: usize, channel: usize) -> &GranuleChannel {
        &self.granules[granule][channel]
    }
}
