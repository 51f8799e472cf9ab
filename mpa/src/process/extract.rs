use std::collections::VecDeque;
use std::sync::Arc;

use log::{debug, trace};

use crate::structs::header::{FrameHeader, HEADER_LEN};
use crate::utils::errors::{ExtractError, HeaderError};

/// Checks the two bytes starting a frame: 11 sync bits, then a version and
/// a layer that are not reserved.
#[inline(always)]
pub fn is_sync(b1: u8, b2: u8) -> bool {
    b1 == 0xFF && (b2 & 0xE0) == 0xE0 && (b2 >> 3) & 3 != 0b01 && (b2 >> 1) & 3 != 0b00
}

/// Splits a byte stream into MPEG audio frames.
///
/// A frame starts at a sync word and ends in front of the next one. Scanning
/// for the next sync starts after the header, CRC and side information, so
/// sync-like bytes in those fields never split a frame.
///
/// # Example
///
/// ```rust
/// use mpa::process::EXAMPLE_DATA;
/// use mpa::process::extract::Extractor;
///
/// let mut extractor = Extractor::default();
/// extractor.push_bytes(EXAMPLE_DATA);
/// extractor.finish();
///
/// let frames = extractor.filter_map(Result::ok).collect::<Vec<_>>();
/// assert_eq!(frames.len(), 2);
/// assert_eq!(frames[1].offset, 144);
/// ```
#[derive(Debug)]
pub struct Extractor {
    buffer: VecDeque<u8>,
    io_counter: usize,
    finished: bool,
    /// Stream offset of `buffer[0]`.
    position: u64,
    error_count: usize,
    frames_extracted: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            buffer: VecDeque::with_capacity(16_384),
            io_counter: 0,
            finished: false,
            position: 0,
            error_count: 0,
            frames_extracted: 0,
        }
    }
}

impl Extractor {
    /// Adds raw bitstream data to the internal buffer.
    ///
    /// Bytes pushed after [`finish`](Self::finish) are ignored.
    pub fn push_bytes(&mut self, data: &[u8]) {
        if self.finished {
            debug!("Ignoring {} bytes pushed after end of input", data.len());
            return;
        }

        self.buffer.extend(data);
        self.io_counter += 1;
    }

    /// Marks the end of input. The bytes left after the last sync word form
    /// the final frame.
    pub fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            self.io_counter += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of bytes consumed from the input so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn frames_extracted(&self) -> usize {
        self.frames_extracted
    }

    fn consume_front(&mut self, cnt: usize) {
        self.buffer.drain(..cnt);
        self.position += cnt as u64;
    }

    fn find_sync(&self, from: usize) -> Option<usize> {
        (from..self.buffer.len().saturating_sub(1))
            .find(|&i| is_sync(self.buffer[i], self.buffer[i + 1]))
    }

    fn iter_insufficient(&mut self) -> Option<Result<RawFrame, ExtractError>> {
        if self.finished {
            if !self.buffer.is_empty() {
                trace!("Dropping {} trailing bytes", self.buffer.len());
                let len = self.buffer.len();
                self.consume_front(len);
            }
            self.io_counter = 0;
            return None;
        }

        self.io_counter -= 1;
        Some(Err(ExtractError::InsufficientData))
    }

    fn emit(&mut self, header: FrameHeader, len: usize) -> RawFrame {
        let offset = self.position;
        let data: Arc<[u8]> = self.buffer.drain(..len).collect::<Vec<_>>().into();
        self.position += len as u64;
        self.frames_extracted += 1;

        if data.len() != header.frame_size {
            debug!(
                "Frame at offset {offset} spans {} bytes, header announces {}",
                data.len(),
                header.frame_size
            );
        }

        RawFrame {
            offset,
            header,
            data,
        }
    }
}

impl Iterator for Extractor {
    type Item = Result<RawFrame, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.io_counter == 0 {
            return None;
        }

        let Some(start) = self.find_sync(0) else {
            // A trailing 0xFF may be the first half of the next sync word.
            let keep = if self.finished { 0 } else { 1 };
            let drop = self.buffer.len().saturating_sub(keep);
            self.consume_front(drop);
            return self.iter_insufficient();
        };

        if start > 0 {
            trace!("Skipping {start} bytes before sync at offset {}", self.position + start as u64);
            self.consume_front(start);
        }

        if self.buffer.len() < HEADER_LEN {
            return self.iter_insufficient();
        }

        let bytes = [self.buffer[0], self.buffer[1], self.buffer[2], self.buffer[3]];
        let header = match FrameHeader::from_bytes(&bytes) {
            Ok(header) => header,
            Err(err) => {
                let offset = self.position;
                let source = err.downcast::<HeaderError>().unwrap_or_else(|_| {
                    HeaderError::InvalidSyncWord(u16::from_be_bytes([bytes[0], bytes[1]]) >> 5)
                });

                self.error_count += 1;
                self.consume_front(1);
                return Some(Err(ExtractError::InvalidHeader { offset, source }));
            }
        };

        let scan_from = header.non_main_data_len().max(HEADER_LEN);

        match self.find_sync(scan_from) {
            Some(end) => Some(Ok(self.emit(header, end))),
            None if self.finished => {
                let len = self.buffer.len();
                Some(Ok(self.emit(header, len)))
            }
            None => self.iter_insufficient(),
        }
    }
}

/// One frame as found in the byte stream, with its decoded header.
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Stream offset of the sync word.
    pub offset: u64,
    pub header: FrameHeader,
    pub data: Arc<[u8]>,
}

impl AsRef<[u8]> for RawFrame {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl RawFrame {
    /// The four header bytes.
    pub fn header_bytes(&self) -> Option<[u8; HEADER_LEN]> {
        self.data.get(..HEADER_LEN)?.try_into().ok()
    }

    /// The CRC word following the header, when the header announces one.
    pub fn crc(&self) -> Option<u16> {
        if !self.header.has_crc() {
            return None;
        }

        let bytes = self.data.get(HEADER_LEN..HEADER_LEN + 2)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::EXAMPLE_DATA;

    fn drain(extractor: &mut Extractor) -> (Vec<RawFrame>, Vec<ExtractError>) {
        let mut frames = Vec::new();
        let mut errors = Vec::new();

        for result in extractor {
            match result {
                Ok(frame) => frames.push(frame),
                Err(err) => errors.push(err),
            }
        }

        (frames, errors)
    }

    #[test]
    fn sync_test() {
        assert!(is_sync(0xFF, 0xFB));
        assert!(is_sync(0xFF, 0xE3));
        assert!(!is_sync(0xFF, 0xEB)); // reserved version
        assert!(!is_sync(0xFF, 0xF9)); // reserved layer
        assert!(!is_sync(0xFF, 0xDB));
        assert!(!is_sync(0xFE, 0xFB));
    }

    #[test]
    fn last_frame_needs_finish() -> anyhow::Result<()> {
        let mut extractor = Extractor::default();
        extractor.push_bytes(EXAMPLE_DATA);

        let (frames, errors) = drain(&mut extractor);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].offset, 0);
        assert_eq!(frames[0].as_ref().len(), 144);
        assert_eq!(frames[0].crc(), Some(0xA5B4));
        assert!(matches!(errors[..], [ExtractError::InsufficientData]));

        extractor.finish();
        let (frames, errors) = drain(&mut extractor);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].offset, 144);
        assert_eq!(frames[0].as_ref().len(), 144);
        assert_eq!(frames[0].header_bytes(), Some([0xFF, 0xFA, 0x18, 0xC0]));
        assert!(errors.is_empty());

        assert_eq!(extractor.position(), EXAMPLE_DATA.len() as u64);
        assert_eq!(extractor.frames_extracted(), 2);
        assert!(extractor.next().is_none());

        Ok(())
    }

    #[test]
    fn split_pushes() -> anyhow::Result<()> {
        let mut extractor = Extractor::default();
        let mut offsets = Vec::new();

        for chunk in EXAMPLE_DATA.chunks(7) {
            extractor.push_bytes(chunk);
            for result in &mut extractor {
                match result {
                    Ok(frame) => offsets.push(frame.offset),
                    Err(ExtractError::InsufficientData) => break,
                    Err(err) => return Err(err.into()),
                }
            }
        }
        extractor.finish();
        offsets.extend(extractor.filter_map(Result::ok).map(|frame| frame.offset));

        assert_eq!(offsets, [0, 144]);

        Ok(())
    }

    #[test]
    fn garbage_and_invalid_headers() -> anyhow::Result<()> {
        let mut data = vec![0x00, 0x12, 0x7F];
        // sync with bitrate code 15
        data.extend_from_slice(&[0xFF, 0xFB, 0xF0, 0x00]);
        data.extend_from_slice(EXAMPLE_DATA);
        data.extend_from_slice(&[0xFF, 0xFB]);

        let mut extractor = Extractor::default();
        extractor.push_bytes(&data);
        extractor.finish();

        let (frames, errors) = drain(&mut extractor);

        assert_eq!(frames.iter().map(|f| f.offset).collect::<Vec<_>>(), [7, 151]);
        assert_eq!(frames[1].as_ref().len(), 144);
        assert_eq!(errors.len(), 1);
        match &errors[0] {
            ExtractError::InvalidHeader { offset, source } => {
                assert_eq!(*offset, 3);
                assert!(matches!(source, HeaderError::InvalidFieldEncoding { code: 15, .. }));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(extractor.error_count(), 1);
        assert_eq!(extractor.position(), data.len() as u64);

        Ok(())
    }

    #[test]
    fn truncated_final_frame() {
        let mut extractor = Extractor::default();
        extractor.push_bytes(&EXAMPLE_DATA[..144 + 10]);
        extractor.finish();

        let (frames, errors) = drain(&mut extractor);
        assert!(errors.is_empty());
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].as_ref().len(), 10);
    }

    #[test]
    fn pushes_after_finish_are_ignored() {
        let mut extractor = Extractor::default();
        extractor.finish();
        extractor.push_bytes(EXAMPLE_DATA);

        assert!(extractor.is_finished());
        assert!(extractor.next().is_none());
    }
}
