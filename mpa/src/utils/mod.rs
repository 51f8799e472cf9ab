//! Utility functions and supporting infrastructure.
//!
//! Provides bitstream I/O, CRC validation, Huffman decoding and error handling.

pub mod bitstream_io;
pub mod crc;
pub mod errors;
pub mod huffman;
pub mod huffman_tables;
