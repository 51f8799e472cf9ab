use anyhow::{Result, anyhow};
use log::Level::Warn;
use log::debug;

use crate::log_or_err;
use crate::process::extract::{Extractor, RawFrame};
use crate::process::parse::Parser;
use crate::process::reservoir::ReservoirMode;
use crate::structs::frame::Frame;
use crate::utils::errors::ExtractError;
use crate::utils::huffman::{StandardTables, SymbolSource};

/// Turns pushed bytes into parsed frames.
///
/// Combines an [`Extractor`] and a [`Parser`]. Frames that fail to extract
/// or parse are skipped with a warning, unless the fail level is lowered to
/// [`log::Level::Warn`], in which case the iterator yields the error.
///
/// # Example
///
/// ```rust
/// use mpa::process::EXAMPLE_DATA;
/// use mpa::process::stream::FrameStream;
///
/// let frames = FrameStream::from_bytes(EXAMPLE_DATA)
///     .collect::<anyhow::Result<Vec<_>>>()
///     .unwrap();
///
/// assert_eq!(frames.len(), 2);
/// assert_eq!(frames[0].header.frequency, 32000);
/// ```
pub struct FrameStream<S = StandardTables> {
    extractor: Extractor,
    parser: Parser<S>,
    frames_skipped: usize,
}

impl Default for FrameStream {
    fn default() -> Self {
        Self::with_source(StandardTables)
    }
}

impl FrameStream {
    /// Creates a finished stream over a complete buffer.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut stream = Self::default();
        stream.push_bytes(data);
        stream.finish();
        stream
    }
}

impl<S: SymbolSource> FrameStream<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            extractor: Extractor::default(),
            parser: Parser::with_source(source),
            frames_skipped: 0,
        }
    }

    fn handle(&mut self, frame: Result<RawFrame, ExtractError>) -> Result<Option<Frame>> {
        let error = match frame {
            Ok(frame) => match self.parser.parse(&frame) {
                Ok(frame) => return Ok(Some(frame)),
                Err(err) => {
                    debug!("Frame at offset {} failed to parse", frame.offset);
                    err
                }
            },
            Err(err) => anyhow!(err),
        };

        self.frames_skipped += 1;
        log_or_err!(self.parser.state(), Warn, error);

        Ok(None)
    }
}

impl<S> FrameStream<S> {
    pub fn push_bytes(&mut self, data: &[u8]) {
        self.extractor.push_bytes(data);
    }

    /// Marks the end of input so the last frame can be emitted.
    pub fn finish(&mut self) {
        self.extractor.finish();
    }

    pub fn set_fail_level(&mut self, level: log::Level) {
        self.parser.set_fail_level(level);
    }

    pub fn set_reservoir_mode(&mut self, mode: ReservoirMode) {
        self.parser.set_reservoir_mode(mode);
    }

    pub fn set_verify_crc(&mut self, verify_crc: bool) {
        self.parser.set_verify_crc(verify_crc);
    }

    pub fn frames_skipped(&self) -> usize {
        self.frames_skipped
    }

    pub fn frames_parsed(&self) -> usize {
        self.parser.state().frames_parsed
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn parser(&self) -> &Parser<S> {
        &self.parser
    }
}

impl<S: SymbolSource> Iterator for FrameStream<S> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = match self.extractor.next()? {
                Err(ExtractError::InsufficientData) => return None,
                frame => frame,
            };

            match self.handle(frame) {
                Ok(Some(frame)) => return Some(Ok(frame)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
