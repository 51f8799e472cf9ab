/// Frame extraction from MPEG audio bitstreams.
///
/// Provides the [`Extractor`](extract::Extractor) for finding sync words and
/// splitting continuous input into [`RawFrame`](extract::RawFrame) objects.
pub mod extract;

/// Frame parsing into side information and main data.
///
/// Provides the [`Parser`](parse::Parser), which validates CRCs, resolves the
/// bit reservoir and decodes [`Frame`](crate::structs::frame::Frame) objects.
pub mod parse;

/// Main data carried between frames.
pub mod reservoir;

/// Extraction and parsing combined behind a single iterator.
///
/// Provides the [`FrameStream`](stream::FrameStream).
pub mod stream;

/// Two MPEG-1 Layer III frames, 32 kbps, 32 kHz, mono, CRC protected.
pub const EXAMPLE_DATA: &[u8] = &[
    0xFF, 0xFA, 0x18, 0xC0, 0xA5, 0xB4, 0x00, 0x02, 0x41, 0x90, 0x11, 0x18, 0xE0, 0x94, 0xE2, 0x00,
    0x0F, 0x80, 0xA2, 0x9C, 0x20, 0x00, 0x03, 0xB2, 0xAE, 0xF0, 0xA6, 0x2E, 0xA3, 0x14, 0x0A, 0x80,
    0x14, 0x58, 0x69, 0x05, 0x6B, 0x1A, 0x12, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xFA, 0x18, 0xC0, 0x1B, 0xEB, 0x00, 0x00, 0x02, 0x10, 0x28, 0xF1, 0x38, 0xDC, 0x14, 0xE8,
    0x02, 0x80, 0x1D, 0x80, 0x00, 0x00, 0x00, 0x6F, 0x91, 0x2A, 0x57, 0x30, 0x64, 0x77, 0xC0, 0x0B,
    0x50, 0x39, 0xFF, 0xC8, 0xAA, 0x58, 0x11, 0x14, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::reservoir::ReservoirMode;
    use crate::process::stream::FrameStream;
    use crate::structs::side_info::BlockType;
    use crate::utils::errors::{ExtractError, ParseError};
    use anyhow::Result;

    #[test]
    fn stream_in_chunks() -> Result<()> {
        for mode in [ReservoirMode::Sequential, ReservoirMode::Backward] {
            let mut stream = FrameStream::default();
            stream.set_reservoir_mode(mode);

            let mut frames = Vec::new();
            for chunk in EXAMPLE_DATA.chunks(7) {
                stream.push_bytes(chunk);
                for frame in stream.by_ref() {
                    frames.push(frame?);
                }
            }
            stream.finish();
            for frame in stream.by_ref() {
                frames.push(frame?);
            }

            assert_eq!(frames.len(), 2);
            assert_eq!(stream.frames_parsed(), 2);
            assert_eq!(stream.frames_skipped(), 0);

            assert_eq!(frames[0].crc, Some(0xA5B4));
            assert_eq!(frames[0].granule(0, 0).frequency_lines[12], -5.0);
            assert_eq!(frames[1].crc, Some(0x1BEB));
            assert_eq!(frames[1].channel_side_info(0, 0).block_type(), BlockType::Short);
            assert_eq!(frames[1].granule(0, 0).frequency_lines[36], 20.0);
        }

        Ok(())
    }

    #[test]
    fn damaged_frames_are_skipped() -> Result<()> {
        let mut data = EXAMPLE_DATA.to_vec();
        data[11] ^= 0x01;

        let frames = FrameStream::from_bytes(&data).collect::<Result<Vec<_>>>()?;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].offset, 144);
        assert_eq!(frames[0].granule(1, 0).frequency_lines[2], -1.0);

        let mut stream = FrameStream::from_bytes(&data);
        assert_eq!(stream.by_ref().count(), 1);
        assert_eq!(stream.frames_skipped(), 1);

        Ok(())
    }

    #[test]
    fn strict_mode_reports_errors() -> Result<()> {
        let mut data = vec![0xFF, 0xFB, 0xF0, 0x00];
        data.extend_from_slice(EXAMPLE_DATA);
        data[4 + 11] ^= 0x01;

        let mut stream = FrameStream::default();
        stream.set_fail_level(log::Level::Warn);
        stream.push_bytes(&data);
        stream.finish();

        let err = stream.next().expect("header error").expect_err("bitrate code 15");
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::InvalidHeader { offset: 0, .. })
        ));

        let err = stream.next().expect("crc error").expect_err("damaged side information");
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::CrcMismatch { .. })
        ));

        let frame = stream.next().expect("second frame")?;
        assert_eq!(frame.offset, 148);
        assert!(stream.next().is_none());
        assert_eq!(stream.frames_skipped(), 2);

        Ok(())
    }

    #[test]
    fn crc_check_can_be_disabled() -> Result<()> {
        let mut data = EXAMPLE_DATA.to_vec();
        data[11] ^= 0x01;

        let mut stream = FrameStream::default();
        stream.set_verify_crc(false);
        stream.push_bytes(&data);
        stream.finish();

        let frames = stream.collect::<Result<Vec<_>>>()?;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].channel_side_info(0, 0).global_gain, 141);

        Ok(())
    }
}
