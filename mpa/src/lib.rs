#![doc = include_str!("../README.md")]
//!
//! ## Technical Overview
//!
//! Parser for MPEG-1 Audio Layer III bitstreams according to ISO/IEC 11172-3.
//! Parsing stops at quantized spectral values. Requantization, stereo
//! processing and synthesis are out of scope.
//!
//! ### Bitstream Organization
//!
//! **Frame**: 32-bit header, optional CRC-16, side information, main data.
//! **Granule**: Each frame carries two granules of 576 spectral lines per channel.
//!
//! ### Bit Reservoir
//!
//! Main data is decoupled from frame boundaries. The side information field
//! `main_data_begin` points up to 511 bytes back into the payload of earlier
//! frames. See [`process::reservoir::ReservoirMode`] for the supported readings.
//!
//! ## Quick Start
//!
//! Steps for processing audio streams:
//!
//! 1. Extract frames from a bitstream using [`process::extract::Extractor`]
//! 2. Parse frames into side information and main data using [`process::parse::Parser`]
//!
//! Or let [`process::stream::FrameStream`] do both.
//!
//! ```rust,no_run
//! use mpa::process::{extract::Extractor, parse::Parser, EXAMPLE_DATA};
//!
//! let mut extractor = Extractor::default();
//! let mut parser = Parser::default();
//!
//! extractor.push_bytes(EXAMPLE_DATA);
//! extractor.finish();
//!
//! for frame_result in extractor {
//!     match frame_result {
//!         Ok(frame) => {
//!             let frame = parser.parse(&frame)?;
//!
//!             // Quantized values of the first granule, first channel
//!             let lines = &frame.granule(0, 0).frequency_lines;
//!         }
//!         Err(extract_error) => {
//!             // Handle extraction errors - stream continues automatically
//!             eprintln!("Frame extraction error: {}", extract_error);
//!         }
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Processing functionality for audio bitstreams.
///
/// 1. **Frame Extraction** ([`process::extract`]): Splits input at sync words.
///
/// 2. **Parsing** ([`process::parse`]): Converts frames into structured
///    representations, resolving the bit reservoir ([`process::reservoir`]).
///
/// 3. **Streaming** ([`process::stream`]): Both steps behind one iterator.
pub mod process;

/// Data structures representing Layer III format components.
///
/// - **Headers** ([`structs::header`]): Sync word and frame parameters
/// - **Side Information** ([`structs::side_info`]): Per-granule decoding parameters
/// - **Main Data** ([`structs::main_data`]): Scale factors and spectral lines
/// - **Frames** ([`structs::frame`]): Everything parsed from one frame
pub mod structs;

/// Utility functions and supporting infrastructure.
///
/// - **Bitstream I/O** ([`utils::bitstream_io`]): Bit-level reading
/// - **CRC Validation** ([`utils::crc`]): Error detection
/// - **Huffman Decoding** ([`utils::huffman`]): Spectral value codes
/// - **Error Handling** ([`utils::errors`]): Error types
pub mod utils;
