//! Frame header: the fixed 32-bit word that starts every frame.
//!
//! ```text
//! AAAAAAAA AAABBCCD EEEEFFGH IIJJKLMM
//! ```
//!
//! | Bits | Field |
//! |------|-------|
//! | A (11) | frame sync, all ones |
//! | B (2)  | MPEG audio version |
//! | C (2)  | layer |
//! | D (1)  | protection bit, 0 when a CRC follows |
//! | E (4)  | bitrate index |
//! | F (2)  | sampling frequency index |
//! | G (1)  | padding bit |
//! | H (1)  | private bit |
//! | I (2)  | channel mode |
//! | J (2)  | mode extension (joint stereo only) |
//! | K (1)  | copyright |
//! | L (1)  | original |
//! | M (2)  | emphasis |

use std::fmt::Display;

use anyhow::{Result, bail};
use log::trace;

use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::{HeaderError, HeaderField};

/// The 11-bit frame sync pattern.
pub const FRAME_SYNC: u16 = 0x7FF;

/// Length of the header in bytes.
pub const HEADER_LEN: usize = 4;

/// Length of the optional CRC word in bytes.
pub const CRC_LEN: usize = 2;

/// Bitrates in kbit/s for MPEG-1, indexed by layer then `bitrate_index - 1`.
///
/// Index 0 (free format) and 15 (bad) have no entry.
const BITRATES_V1: [[u32; 14]; 3] = [
    [32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448],
    [32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384],
    [32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320],
];

/// Bitrates in kbit/s for MPEG-2 and MPEG-2.5: Layer I, then Layers II and III.
const BITRATES_LSF: [[u32; 14]; 2] = [
    [32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256],
    [8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160],
];

/// Sampling frequencies in Hz, indexed by version then `frequency_index`.
const FREQUENCIES: [[u32; 3]; 3] = [
    [44100, 48000, 32000],
    [22050, 24000, 16000],
    [11025, 12000, 8000],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MpegVersion {
    #[default]
    V1,
    V2,
    V2_5,
    Reserved,
}

impl MpegVersion {
    pub fn from_code(code: u8) -> Self {
        match code & 3 {
            0b11 => MpegVersion::V1,
            0b10 => MpegVersion::V2,
            0b00 => MpegVersion::V2_5,
            _ => MpegVersion::Reserved,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            MpegVersion::V1 => 0b11,
            MpegVersion::V2 => 0b10,
            MpegVersion::V2_5 => 0b00,
            MpegVersion::Reserved => 0b01,
        }
    }

    /// MPEG-2 and MPEG-2.5 use the low sampling frequency tables.
    pub fn is_lsf(self) -> bool {
        matches!(self, MpegVersion::V2 | MpegVersion::V2_5)
    }
}

impl Display for MpegVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MpegVersion::V1 => write!(f, "MPEG-1"),
            MpegVersion::V2 => write!(f, "MPEG-2"),
            MpegVersion::V2_5 => write!(f, "MPEG-2.5"),
            MpegVersion::Reserved => write!(f, "reserved version"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layer {
    I,
    II,
    #[default]
    III,
    Reserved,
}

impl Layer {
    pub fn from_code(code: u8) -> Self {
        match code & 3 {
            0b11 => Layer::I,
            0b10 => Layer::II,
            0b01 => Layer::III,
            _ => Layer::Reserved,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Layer::I => 0b11,
            Layer::II => 0b10,
            Layer::III => 0b01,
            Layer::Reserved => 0b00,
        }
    }
}

impl Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layer::I => write!(f, "Layer I"),
            Layer::II => write!(f, "Layer II"),
            Layer::III => write!(f, "Layer III"),
            Layer::Reserved => write!(f, "reserved layer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMode {
    #[default]
    Stereo,
    JointStereo,
    DualChannel,
    Mono,
}

impl ChannelMode {
    pub fn from_code(code: u8) -> Self {
        match code & 3 {
            0b00 => ChannelMode::Stereo,
            0b01 => ChannelMode::JointStereo,
            0b10 => ChannelMode::DualChannel,
            _ => ChannelMode::Mono,
        }
    }

    pub fn channels(self) -> usize {
        match self {
            ChannelMode::Mono => 1,
            _ => 2,
        }
    }
}

impl Display for ChannelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelMode::Stereo => write!(f, "Stereo"),
            ChannelMode::JointStereo => write!(f, "Joint stereo"),
            ChannelMode::DualChannel => write!(f, "Dual channel"),
            ChannelMode::Mono => write!(f, "Mono"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    None,
    Ms50_15,
    Reserved,
    CcittJ17,
}

impl Emphasis {
    pub fn from_code(code: u8) -> Self {
        match code & 3 {
            0b00 => Emphasis::None,
            0b01 => Emphasis::Ms50_15,
            0b10 => Emphasis::Reserved,
            _ => Emphasis::CcittJ17,
        }
    }
}

/// Decoded frame header with its derived values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameHeader {
    pub sync_word: u16,
    pub version: MpegVersion,
    pub layer: Layer,
    /// Raw protection bit. A cleared bit means a 16-bit CRC follows the header.
    pub error_protection: bool,
    pub bitrate_index: u8,
    pub frequency_index: u8,
    pub pad_bit: bool,
    pub private_bit: bool,
    pub channel_mode: ChannelMode,
    pub mode_extension: u8,
    pub copyright: bool,
    pub original: bool,
    pub emphasis: Emphasis,

    /// Bits per second.
    pub bitrate: u32,
    /// Sampling frequency in Hz.
    pub frequency: u32,
    /// Bytes added by a set pad bit.
    pub padding: u32,
    pub samples_per_frame: u32,
    /// Frame length in bytes, header included.
    pub frame_size: usize,
}

impl FrameHeader {
    pub fn read(reader: &mut BsIoSliceReader) -> Result<Self> {
        let mut header = Self {
            sync_word: reader.get_n(11)?,
            version: MpegVersion::from_code(reader.get_n(2)?),
            layer: Layer::from_code(reader.get_n(2)?),
            error_protection: reader.get()?,
            bitrate_index: reader.get_n(4)?,
            frequency_index: reader.get_n(2)?,
            pad_bit: reader.get()?,
            private_bit: reader.get()?,
            channel_mode: ChannelMode::from_code(reader.get_n(2)?),
            mode_extension: reader.get_n(2)?,
            copyright: reader.get()?,
            original: reader.get()?,
            emphasis: Emphasis::from_code(reader.get_n(2)?),
            ..Default::default()
        };

        if header.sync_word != FRAME_SYNC {
            bail!(HeaderError::InvalidSyncWord(header.sync_word));
        }

        header.bitrate = Self::map_bitrate(header.version, header.layer, header.bitrate_index)?;
        header.frequency = Self::map_frequency(header.version, header.frequency_index)?;
        header.padding = match header.layer {
            Layer::I => 4,
            _ => 1,
        };
        header.samples_per_frame = match (header.layer, header.version) {
            (Layer::I, _) => 384,
            (Layer::III, version) if version.is_lsf() => 576,
            _ => 1152,
        };
        header.frame_size = header.compute_frame_size();

        trace!(
            "{} {} {} bps {} Hz {}, frame_size {}",
            header.version,
            header.layer,
            header.bitrate,
            header.frequency,
            header.channel_mode,
            header.frame_size
        );

        Ok(header)
    }

    /// Decodes a header from the first four bytes of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let Some(bytes) = bytes.get(..HEADER_LEN) else {
            bail!(
                "Frame header needs {HEADER_LEN} bytes, got {}",
                bytes.len()
            );
        };

        Self::read(&mut BsIoSliceReader::from_slice(bytes))
    }

    pub fn channels(&self) -> usize {
        self.channel_mode.channels()
    }

    pub fn has_crc(&self) -> bool {
        !self.error_protection
    }

    /// Header length including the CRC word when present.
    pub fn header_len(&self) -> usize {
        HEADER_LEN + if self.has_crc() { CRC_LEN } else { 0 }
    }

    /// Length of the Layer III side information block in bytes.
    ///
    /// Layers I and II carry no side information.
    pub fn side_info_len(&self) -> usize {
        match (self.layer, self.version.is_lsf(), self.channel_mode) {
            (Layer::III, false, ChannelMode::Mono) => 17,
            (Layer::III, false, _) => 32,
            (Layer::III, true, ChannelMode::Mono) => 9,
            (Layer::III, true, _) => 17,
            _ => 0,
        }
    }

    /// Bytes in front of the main data: header, CRC and side information.
    pub fn non_main_data_len(&self) -> usize {
        self.header_len() + self.side_info_len()
    }

    /// Bytes of main data carried by a frame of this size.
    pub fn main_data_len(&self) -> usize {
        self.frame_size.saturating_sub(self.non_main_data_len())
    }

    /// Playback duration of one frame in seconds.
    pub fn duration(&self) -> f64 {
        self.samples_per_frame as f64 / self.frequency as f64
    }

    fn compute_frame_size(&self) -> usize {
        let bitrate = self.bitrate as u64;
        let frequency = self.frequency as u64;
        let pad = self.pad_bit as u64;

        let size = match self.layer {
            Layer::I => (12 * bitrate / frequency + pad) * 4,
            _ => (self.samples_per_frame as u64 / 8) * bitrate / frequency + pad * self.padding as u64,
        };

        size as usize
    }

    fn map_bitrate(version: MpegVersion, layer: Layer, code: u8) -> Result<u32> {
        let table = match (version, layer) {
            (MpegVersion::Reserved, _) => bail!(HeaderError::InvalidFieldEncoding {
                field: HeaderField::Version,
                code: version.code(),
                context: "bitrate lookup".to_string(),
            }),
            (_, Layer::Reserved) => bail!(HeaderError::InvalidFieldEncoding {
                field: HeaderField::Layer,
                code: layer.code(),
                context: version.to_string(),
            }),
            (MpegVersion::V1, Layer::I) => &BITRATES_V1[0],
            (MpegVersion::V1, Layer::II) => &BITRATES_V1[1],
            (MpegVersion::V1, Layer::III) => &BITRATES_V1[2],
            (_, Layer::I) => &BITRATES_LSF[0],
            (_, Layer::II | Layer::III) => &BITRATES_LSF[1],
        };

        let kbps = match code {
            1..=14 => table[code as usize - 1],
            _ => bail!(HeaderError::InvalidFieldEncoding {
                field: HeaderField::Bitrate,
                code,
                context: format!("{version} {layer}"),
            }),
        };

        Ok(kbps * 1000)
    }

    fn map_frequency(version: MpegVersion, code: u8) -> Result<u32> {
        let row = match version {
            MpegVersion::V1 => 0,
            MpegVersion::V2 => 1,
            MpegVersion::V2_5 => 2,
            MpegVersion::Reserved => bail!(HeaderError::InvalidFieldEncoding {
                field: HeaderField::Version,
                code: version.code(),
                context: "frequency lookup".to_string(),
            }),
        };

        match code {
            0..=2 => Ok(FREQUENCIES[row][code as usize]),
            _ => bail!(HeaderError::InvalidFieldEncoding {
                field: HeaderField::Frequency,
                code,
                context: version.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_error(bytes: &[u8]) -> HeaderError {
        let err = FrameHeader::from_bytes(bytes).expect_err("header should be rejected");
        err.downcast::<HeaderError>().expect("typed header error")
    }

    fn header_bytes(version: MpegVersion, layer: Layer, bitrate_index: u8, frequency_index: u8) -> [u8; 4] {
        [
            0xFF,
            0xE0 | (version.code() << 3) | (layer.code() << 1) | 1,
            (bitrate_index << 4) | (frequency_index << 2),
            0x00,
        ]
    }

    #[test]
    fn worked_example() -> Result<()> {
        let header = FrameHeader::from_bytes(b"\xFF\xFB\xB0\x00")?;

        assert_eq!(header.sync_word, 2047);
        assert_eq!(header.version, MpegVersion::V1);
        assert_eq!(header.layer, Layer::III);
        assert!(header.error_protection);
        assert!(!header.has_crc());
        assert_eq!(header.bitrate, 192000);
        assert_eq!(header.frequency, 44100);
        assert!(!header.pad_bit);
        assert!(!header.private_bit);
        assert_eq!(header.channel_mode, ChannelMode::Stereo);
        assert_eq!(header.mode_extension, 0);
        assert!(!header.copyright);
        assert!(!header.original);
        assert_eq!(header.emphasis, Emphasis::None);
        assert_eq!(header.padding, 1);
        assert_eq!(header.samples_per_frame, 1152);
        assert_eq!(header.frame_size, 626);
        assert_eq!(header.side_info_len(), 32);
        assert_eq!(header.non_main_data_len(), 36);

        Ok(())
    }

    #[test]
    fn frame_sizes() -> Result<()> {
        // MPEG-1 Layer III, 128 kbps, 44.1 kHz, with and without padding
        assert_eq!(FrameHeader::from_bytes(b"\xFF\xFB\x90\x00")?.frame_size, 417);
        assert_eq!(FrameHeader::from_bytes(b"\xFF\xFB\x92\x00")?.frame_size, 418);

        // MPEG-1 Layer I, 128 kbps, 44.1 kHz: slots are 4 bytes
        let layer1 = FrameHeader::from_bytes(b"\xFF\xFF\x40\x00")?;
        assert_eq!(layer1.layer, Layer::I);
        assert_eq!(layer1.padding, 4);
        assert_eq!(layer1.frame_size, 136);
        assert_eq!(FrameHeader::from_bytes(b"\xFF\xFF\x42\x00")?.frame_size, 140);

        // MPEG-2 Layer III, 64 kbps, 22.05 kHz
        let lsf = FrameHeader::from_bytes(b"\xFF\xF3\x80\x00")?;
        assert_eq!(lsf.version, MpegVersion::V2);
        assert_eq!(lsf.bitrate, 64000);
        assert_eq!(lsf.frequency, 22050);
        assert_eq!(lsf.samples_per_frame, 576);
        assert_eq!(lsf.frame_size, 208);

        Ok(())
    }

    #[test]
    fn every_bitrate_code() -> Result<()> {
        for (layer, row) in [(Layer::I, 0), (Layer::II, 1), (Layer::III, 2)] {
            for code in 1..=14u8 {
                let header = FrameHeader::from_bytes(&header_bytes(MpegVersion::V1, layer, code, 0))?;
                assert_eq!(header.bitrate, BITRATES_V1[row][code as usize - 1] * 1000);
            }

            for code in [0u8, 15] {
                match header_error(&header_bytes(MpegVersion::V1, layer, code, 0)) {
                    HeaderError::InvalidFieldEncoding { field, code: read, .. } => {
                        assert_eq!(field, HeaderField::Bitrate);
                        assert_eq!(read, code);
                    }
                    other => panic!("unexpected {other:?}"),
                }
            }
        }

        let header = FrameHeader::from_bytes(&header_bytes(MpegVersion::V2_5, Layer::III, 1, 2))?;
        assert_eq!(header.bitrate, 8000);
        assert_eq!(header.frequency, 8000);

        Ok(())
    }

    #[test]
    fn reserved_codes_are_rejected() {
        assert!(matches!(
            header_error(&header_bytes(MpegVersion::V1, Layer::III, 9, 3)),
            HeaderError::InvalidFieldEncoding {
                field: HeaderField::Frequency,
                code: 3,
                ..
            }
        ));

        assert!(matches!(
            header_error(&header_bytes(MpegVersion::V1, Layer::Reserved, 9, 0)),
            HeaderError::InvalidFieldEncoding {
                field: HeaderField::Layer,
                code: 0,
                ..
            }
        ));

        assert!(matches!(
            header_error(&header_bytes(MpegVersion::Reserved, Layer::III, 9, 0)),
            HeaderError::InvalidFieldEncoding {
                field: HeaderField::Version,
                code: 1,
                ..
            }
        ));

        assert_eq!(
            header_error(b"\xFF\x1B\x90\x00"),
            HeaderError::InvalidSyncWord(0x7F8)
        );
    }

    #[test]
    fn channel_layout() -> Result<()> {
        // Mono, CRC protected
        let header = FrameHeader::from_bytes(b"\xFF\xFA\x90\xC0")?;
        assert_eq!(header.channel_mode, ChannelMode::Mono);
        assert_eq!(header.channels(), 1);
        assert!(header.has_crc());
        assert_eq!(header.header_len(), 6);
        assert_eq!(header.side_info_len(), 17);
        assert_eq!(header.main_data_len(), 417 - 6 - 17);

        let header = FrameHeader::from_bytes(b"\xFF\xFB\x90\x64")?;
        assert_eq!(header.channel_mode, ChannelMode::JointStereo);
        assert_eq!(header.mode_extension, 2);
        assert!(header.original);
        assert_eq!(header.channels(), 2);

        Ok(())
    }

    #[test]
    fn short_input() {
        assert!(FrameHeader::from_bytes(b"\xFF\xFB\x90").is_err());
    }
}
