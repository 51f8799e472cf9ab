use std::fmt::Display;

use crate::structs::header::{Layer, MpegVersion};

#[macro_export]
macro_rules! log_or_err {
    ($state:expr, $level:expr, $err:expr $(,)?) => {{
        if $level <= $state.fail_level {
            return Err($err);
        } else {
            match $level {
                ::log::Level::Error => ::log::error!("{}", $err),
                ::log::Level::Warn => ::log::warn!("{}", $err),
                ::log::Level::Info => ::log::info!("{}", $err),
                ::log::Level::Debug => ::log::debug!("{}", $err),
                ::log::Level::Trace => ::log::trace!("{}", $err),
            }
        }
    }};
}

#[derive(thiserror::Error, Debug)]
pub enum BitstreamError {
    #[error("Bitstream exhausted: requested {requested} bits at {position}, {available} available")]
    Exhausted {
        requested: u32,
        position: u64,
        available: u64,
    },

    #[error("Seek out of bounds: bit {target} of {len}")]
    SeekOutOfBounds { target: u64, len: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Header fields that are resolved through a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Version,
    Layer,
    Bitrate,
    Frequency,
}

impl Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderField::Version => write!(f, "mpeg_version"),
            HeaderField::Layer => write!(f, "layer"),
            HeaderField::Bitrate => write!(f, "bitrate"),
            HeaderField::Frequency => write!(f, "frequency"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Invalid frame sync word. Read {0:#05X}")]
    InvalidSyncWord(u16),

    #[error("Invalid field encoding: {field} code {code:#06b} is not defined for {context}")]
    InvalidFieldEncoding {
        field: HeaderField,
        code: u8,
        context: String,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum SideInfoError {
    #[error("Side information must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Side information of {version} {layer} frames is not supported")]
    UnsupportedFormat { version: MpegVersion, layer: Layer },

    #[error("window_switch_flag is set with reserved block_type 0 (granule {granule}, channel {channel})")]
    ReservedBlockType { granule: usize, channel: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum HuffmanError {
    #[error("No code of Huffman table {table} matches the bits at {position}")]
    UnknownCode { table: u8, position: u64 },

    #[error("Huffman table {0} does not exist")]
    InvalidTable(u8),
}

#[derive(thiserror::Error, Debug)]
pub enum MainDataError {
    #[error("No scale factor band table for sample rate {0} Hz")]
    UnsupportedSampleRate(u32),
}

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("Insufficient buffer data for frame extraction")]
    InsufficientData,

    #[error("Invalid frame header at offset {offset}: {source}")]
    InvalidHeader { offset: u64, source: HeaderError },
}

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Frame too short: {needed} bytes needed, {actual} available")]
    FrameTooShort { needed: usize, actual: usize },

    #[error("CRC check failed. Calculated {calculated:#06X}, Read {read:#06X}")]
    CrcMismatch { calculated: u16, read: u16 },

    #[error("main_data_begin points {requested} bytes back, only {available} bytes are buffered")]
    ReservoirUnderflow { requested: usize, available: usize },
}
