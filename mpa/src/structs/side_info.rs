//! Layer III side information.
//!
//! Follows the header (and CRC word) of every MPEG-1 Layer III frame: 17 bytes
//! for mono, 32 bytes otherwise. It locates the main data and carries the
//! per granule, per channel parameters needed to decode it.

use anyhow::{Result, anyhow, bail};
use log::Level::Warn;
use log::trace;

use crate::log_or_err;
use crate::process::parse::ParserState;
use crate::structs::header::{FrameHeader, Layer, MpegVersion};
use crate::structs::main_data::long_band_boundaries;
use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::SideInfoError;

pub const GRANULES: usize = 2;
pub const MAX_CHANNELS: usize = 2;

/// Number of scale factor bands per `scfsi` group.
pub const SCFSI_BANDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockType {
    #[default]
    Normal,
    Start,
    Short,
    End,
}

impl BlockType {
    pub fn from_code(code: u8) -> Self {
        match code & 3 {
            0 => BlockType::Normal,
            1 => BlockType::Start,
            2 => BlockType::Short,
            _ => BlockType::End,
        }
    }
}

/// Layout of a granule, selected by `window_switch_flag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockShape {
    LongBlock {
        table_select: [u8; 3],
        region0_count: u8,
        region1_count: u8,
    },
    ShortOrMixedBlock {
        block_type: BlockType,
        mixed_block_flag: bool,
        table_select: [u8; 2],
        sub_block_gain: [u8; 3],
    },
}

impl Default for BlockShape {
    fn default() -> Self {
        BlockShape::LongBlock {
            table_select: [0; 3],
            region0_count: 0,
            region1_count: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSideInfo {
    pub part2_3_length: u16,
    pub big_values: u16,
    pub global_gain: u8,
    pub scalefac_compress: u8,
    pub shape: BlockShape,
    pub preflag: bool,
    pub scalefac_scale: bool,
    pub count1table_select: bool,
}

impl ChannelSideInfo {
    pub fn read(
        state: &ParserState,
        reader: &mut BsIoSliceReader,
        granule: usize,
        channel: usize,
    ) -> Result<Self> {
        let mut info = Self {
            part2_3_length: reader.get_n(12)?,
            big_values: reader.get_n(9)?,
            global_gain: reader.get_n(8)?,
            scalefac_compress: reader.get_n(4)?,
            ..Default::default()
        };

        let window_switch_flag = reader.get()?;

        info.shape = if window_switch_flag {
            let shape = BlockShape::ShortOrMixedBlock {
                block_type: BlockType::from_code(reader.get_n(2)?),
                mixed_block_flag: reader.get()?,
                table_select: [reader.get_n(5)?, reader.get_n(5)?],
                sub_block_gain: [reader.get_n(3)?, reader.get_n(3)?, reader.get_n(3)?],
            };

            if info.block_type_of(&shape) == BlockType::Normal {
                log_or_err!(
                    state,
                    Warn,
                    anyhow!(SideInfoError::ReservedBlockType { granule, channel })
                );
            }

            shape
        } else {
            BlockShape::LongBlock {
                table_select: [reader.get_n(5)?, reader.get_n(5)?, reader.get_n(5)?],
                region0_count: reader.get_n(4)?,
                region1_count: reader.get_n(3)?,
            }
        };

        info.preflag = reader.get()?;
        info.scalefac_scale = reader.get()?;
        info.count1table_select = reader.get()?;

        trace!(
            "granule {granule} channel {channel}: part2_3_length {} big_values {} {:?}",
            info.part2_3_length, info.big_values, info.shape
        );

        Ok(info)
    }

    fn block_type_of(&self, shape: &BlockShape) -> BlockType {
        match shape {
            BlockShape::ShortOrMixedBlock { block_type, .. } => *block_type,
            BlockShape::LongBlock { .. } => BlockType::Normal,
        }
    }

    pub fn window_switch_flag(&self) -> bool {
        matches!(self.shape, BlockShape::ShortOrMixedBlock { .. })
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type_of(&self.shape)
    }

    pub fn mixed_block_flag(&self) -> bool {
        match self.shape {
            BlockShape::ShortOrMixedBlock {
                mixed_block_flag, ..
            } => mixed_block_flag,
            BlockShape::LongBlock { .. } => false,
        }
    }

    /// Window-switched granule made of short blocks, possibly mixed.
    pub fn is_short_granule(&self) -> bool {
        self.window_switch_flag() && self.block_type() == BlockType::Short
    }

    /// Table selectors for regions 0, 1 and 2. Window-switched granules
    /// have no region 2 and report table 0 for it.
    pub fn table_select(&self) -> [u8; 3] {
        match self.shape {
            BlockShape::LongBlock { table_select, .. } => table_select,
            BlockShape::ShortOrMixedBlock {
                table_select: [t0, t1],
                ..
            } => [t0, t1, 0],
        }
    }

    pub fn sub_block_gain(&self) -> [u8; 3] {
        match self.shape {
            BlockShape::ShortOrMixedBlock { sub_block_gain, .. } => sub_block_gain,
            BlockShape::LongBlock { .. } => [0; 3],
        }
    }

    /// `(region0_count, region1_count)`, read for long granules and implied
    /// for window-switched ones.
    pub fn region_counts(&self) -> (u8, u8) {
        match self.shape {
            BlockShape::LongBlock {
                region0_count,
                region1_count,
                ..
            } => (region0_count, region1_count),
            BlockShape::ShortOrMixedBlock {
                block_type,
                mixed_block_flag,
                ..
            } => {
                let region0 = if block_type == BlockType::Short && !mixed_block_flag {
                    8
                } else {
                    7
                };
                (region0, 20 - region0)
            }
        }
    }

    /// First spectral line of regions 1 and 2.
    pub fn region_bounds(&self, sample_rate: u32) -> Result<(usize, usize)> {
        match self.shape {
            BlockShape::ShortOrMixedBlock { .. } => Ok((36, 576)),
            BlockShape::LongBlock {
                region0_count,
                region1_count,
                ..
            } => {
                let bands = long_band_boundaries(sample_rate)?;
                let last = bands.len() - 1;

                let region1 = (region0_count as usize + 1).min(last);
                let region2 = (region0_count as usize + region1_count as usize + 2).min(last);

                Ok((bands[region1], bands[region2]))
            }
        }
    }

    /// Table selector for the pair starting at spectral line `line`.
    pub fn table_for_line(&self, line: usize, bounds: (usize, usize)) -> u8 {
        let table_select = self.table_select();

        if line < bounds.0 {
            table_select[0]
        } else if line < bounds.1 {
            table_select[1]
        } else {
            table_select[2]
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideInfo {
    pub main_data_begin: u16,
    pub private_bits: u8,
    pub channels: usize,
    pub scfsi: [[bool; SCFSI_BANDS]; MAX_CHANNELS],
    /// Indexed by granule, then channel. Unused channels stay default.
    pub granules: [[ChannelSideInfo; MAX_CHANNELS]; GRANULES],
}

impl SideInfo {
    pub fn read(
        state: &ParserState,
        reader: &mut BsIoSliceReader,
        header: &FrameHeader,
    ) -> Result<Self> {
        if header.version != MpegVersion::V1 || header.layer != Layer::III {
            bail!(SideInfoError::UnsupportedFormat {
                version: header.version,
                layer: header.layer,
            });
        }

        let channels = header.channels();

        let mut side_info = Self {
            main_data_begin: reader.get_n(9)?,
            private_bits: reader.get_n(if channels == 1 { 5 } else { 3 })?,
            channels,
            ..Default::default()
        };

        for scfsi in side_info.scfsi.iter_mut().take(channels) {
            for band in scfsi.iter_mut() {
                *band = reader.get()?;
            }
        }

        for (gr, granule) in side_info.granules.iter_mut().enumerate() {
            for (ch, channel) in granule.iter_mut().enumerate().take(channels) {
                *channel = ChannelSideInfo::read(state, reader, gr, ch)?;
            }
        }

        Ok(side_info)
    }

    /// Decodes a side information block that must span exactly
    /// [`FrameHeader::side_info_len`] bytes.
    pub fn from_bytes(state: &ParserState, header: &FrameHeader, bytes: &[u8]) -> Result<Self> {
        let expected = header.side_info_len();

        if header.version == MpegVersion::V1 && header.layer == Layer::III && bytes.len() != expected {
            bail!(SideInfoError::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }

        Self::read(state, &mut BsIoSliceReader::from_slice(bytes), header)
    }

    pub fn channel(&self, granule: usize, channel: usize) -> &ChannelSideInfo {
        &self.granules[granule][channel]
    }

    /// Sum of `part2_3_length` over every granule and channel, in bits.
    pub fn main_data_bits(&self) -> usize {
        self.granules
            .iter()
            .flat_map(|granule| granule.iter().take(self.channels))
            .map(|channel| channel.part2_3_length as usize)
            .sum()
    }
}
