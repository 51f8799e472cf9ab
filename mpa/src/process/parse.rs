use anyhow::{Result, bail};
use log::debug;

use crate::process::extract::RawFrame;
use crate::process::reservoir::{MAX_MAIN_DATA_BEGIN, Reservoir, ReservoirMode};
use crate::structs::frame::Frame;
use crate::structs::header::FrameHeader;
use crate::structs::main_data::MainData;
use crate::structs::side_info::SideInfo;
use crate::utils::crc::Crc16;
use crate::utils::errors::ParseError;
use crate::utils::huffman::{StandardTables, SymbolSource};

/// Parses raw frames into side information, scale factors and spectral lines.
///
/// Keeps the bit reservoir between calls, so frames must be passed in
/// stream order.
pub struct Parser<S = StandardTables> {
    state: ParserState,
    crc: Crc16,
    source: S,
}

impl Default for Parser {
    fn default() -> Self {
        Self::with_source(StandardTables)
    }
}

impl<S: SymbolSource> Parser<S> {
    /// Creates a parser that decodes Huffman symbols through `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            state: ParserState::default(),
            crc: Crc16::default(),
            source,
        }
    }

    pub fn parse(&mut self, frame: &RawFrame) -> Result<Frame> {
        let header = &frame.header;
        let data = frame.as_ref();

        let needed = header.non_main_data_len();
        if data.len() < needed {
            bail!(ParseError::FrameTooShort {
                needed,
                actual: data.len(),
            });
        }

        let side_info_bytes = &data[header.header_len()..needed];
        let payload = &data[needed..];

        let side_info = match self.read_side_info(frame, side_info_bytes) {
            Ok(side_info) => side_info,
            Err(err) => {
                self.discard_payload(header, payload);
                return Err(err);
            }
        };

        let span = self.main_data_span(header, &side_info, payload)?;
        let main_data = MainData::from_bytes(header, &side_info, &span, &self.source)?;

        self.state.frames_parsed += 1;
        debug!(
            "Frame {} at offset {}: main_data_begin {}, {} main data bits, {} span bytes",
            self.state.frames_parsed,
            frame.offset,
            side_info.main_data_begin,
            side_info.main_data_bits(),
            span.len()
        );

        Ok(Frame {
            offset: frame.offset,
            header: header.clone(),
            crc: frame.crc(),
            side_info,
            main_data,
        })
    }

    fn read_side_info(&self, frame: &RawFrame, bytes: &[u8]) -> Result<SideInfo> {
        if self.state.verify_crc {
            if let (Some(read), Some(header_bytes)) = (frame.crc(), frame.header_bytes()) {
                let calculated = self.crc.frame_checksum(&header_bytes, bytes);
                if calculated != read {
                    bail!(ParseError::CrcMismatch { calculated, read });
                }
            }
        }

        SideInfo::from_bytes(&self.state, &frame.header, bytes)
    }

    fn main_data_span(
        &mut self,
        header: &FrameHeader,
        side_info: &SideInfo,
        payload: &[u8],
    ) -> Result<Vec<u8>> {
        let reservoir = &mut self.state.reservoir;

        match self.state.reservoir_mode {
            ReservoirMode::Sequential => {
                reservoir.append(payload);
                Ok(reservoir.take(header.main_data_len()))
            }
            ReservoirMode::Backward => {
                let requested = side_info.main_data_begin as usize;
                let available = reservoir.len();

                if requested > available {
                    reservoir.append(payload);
                    reservoir.retain_last(MAX_MAIN_DATA_BEGIN);
                    bail!(ParseError::ReservoirUnderflow {
                        requested,
                        available,
                    });
                }

                reservoir.retain_last(requested);
                reservoir.append(payload);
                let span = reservoir.contents();
                reservoir.retain_last(MAX_MAIN_DATA_BEGIN);

                Ok(span)
            }
        }
    }

    /// Keeps the reservoir in step when a frame cannot be decoded.
    fn discard_payload(&mut self, header: &FrameHeader, payload: &[u8]) {
        let reservoir = &mut self.state.reservoir;
        reservoir.append(payload);

        match self.state.reservoir_mode {
            ReservoirMode::Sequential => {
                reservoir.take(header.main_data_len());
            }
            ReservoirMode::Backward => reservoir.retain_last(MAX_MAIN_DATA_BEGIN),
        }
    }
}

impl<S> Parser<S> {
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Sets the failure level for validation errors.
    ///
    /// - `log::Level::Error`: Only fail on Error level messages (default)
    /// - `log::Level::Warn`: Fail on Warning level and above (strict mode)
    pub fn set_fail_level(&mut self, level: log::Level) {
        self.state.fail_level = level;
    }

    /// Switches the reservoir mode and empties the reservoir.
    pub fn set_reservoir_mode(&mut self, mode: ReservoirMode) {
        self.state.reservoir_mode = mode;
        self.state.reservoir.clear();
    }

    pub fn set_verify_crc(&mut self, verify_crc: bool) {
        self.state.verify_crc = verify_crc;
    }

    /// Forgets buffered main data, e.g. after seeking in the input.
    pub fn reset(&mut self) {
        self.state.reservoir.clear();
    }
}

#[derive(Debug)]
pub struct ParserState {
    pub fail_level: log::Level,
    pub reservoir_mode: ReservoirMode,
    pub verify_crc: bool,
    pub reservoir: Reservoir,
    pub frames_parsed: usize,
}

impl Default for ParserState {
    fn default() -> Self {
        Self {
            fail_level: log::Level::Error,
            reservoir_mode: ReservoirMode::default(),
            verify_crc: true,
            reservoir: Reservoir::default(),
            frames_parsed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::EXAMPLE_DATA;
    use crate::structs::side_info::{BlockShape, BlockType};
    use crate::utils::errors::SideInfoError;

    fn raw_frame(offset: u64, data: &[u8]) -> Result<RawFrame> {
        Ok(RawFrame {
            offset,
            header: FrameHeader::from_bytes(data)?,
            data: data.into(),
        })
    }

    fn example_frames() -> Result<[RawFrame; 2]> {
        Ok([
            raw_frame(0, &EXAMPLE_DATA[..144])?,
            raw_frame(144, &EXAMPLE_DATA[144..])?,
        ])
    }

    /// Rewrites the CRC word over the current header and side information.
    fn reseal(frame: &mut [u8]) {
        let header = [frame[0], frame[1], frame[2], frame[3]];
        let crc = Crc16::default().frame_checksum(&header, &frame[6..23]);
        frame[4..6].copy_from_slice(&crc.to_be_bytes());
    }

    fn nonzero_lines(lines: &[f32]) -> Vec<(usize, i32)> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0.0)
            .map(|(i, v)| (i, *v as i32))
            .collect()
    }

    #[test]
    fn example_stream() -> Result<()> {
        for mode in [ReservoirMode::Sequential, ReservoirMode::Backward] {
            let mut parser = Parser::default();
            parser.set_reservoir_mode(mode);
            let [first, second] = example_frames()?;

            let frame = parser.parse(&first)?;
            assert_eq!(frame.crc, Some(0xA5B4));
            assert_eq!(frame.channels(), 1);
            assert_eq!(frame.side_info.main_data_begin, 0);
            assert_eq!(frame.side_info.scfsi[0], [true, false, false, true]);
            assert_eq!(frame.channel_side_info(0, 0).part2_3_length, 100);
            assert_eq!(frame.channel_side_info(1, 0).global_gain, 138);

            let granule = frame.granule(0, 0);
            assert_eq!(
                granule.scalefac_l,
                [1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 3, 5, 7, 0, 2, 4, 6, 1, 3, 5, 0]
            );
            assert_eq!(granule.decoded_lines, 24);
            assert_eq!(
                nonzero_lines(&granule.frequency_lines),
                [
                    (0, 1),
                    (3, -1),
                    (4, -1),
                    (5, 1),
                    (8, 3),
                    (9, -2),
                    (11, 1),
                    (12, -5),
                    (13, 4),
                    (14, 2),
                    (16, 1),
                    (19, -1),
                    (21, 1),
                    (22, 1)
                ]
            );

            let granule = frame.granule(1, 0);
            assert_eq!(
                granule.scalefac_l,
                [1, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 6, 5, 4, 3, 2, 4, 6, 1, 3, 5, 0]
            );
            assert_eq!(nonzero_lines(&granule.frequency_lines), [(0, 2), (1, -1), (3, 1)]);

            let frame = parser.parse(&second)?;
            assert_eq!(frame.offset, 144);
            assert_eq!(
                frame.channel_side_info(0, 0).shape,
                BlockShape::ShortOrMixedBlock {
                    block_type: BlockType::Short,
                    mixed_block_flag: false,
                    table_select: [13, 24],
                    sub_block_gain: [1, 2, 3],
                }
            );

            let granule = frame.granule(0, 0);
            assert_eq!(granule.scalefac_s[3], [1, 2, 3]);
            assert_eq!(granule.scalefac_s[8], [3, 0, 3]);
            assert_eq!(granule.scalefac_s[11], [1, 3, 1]);
            assert_eq!(granule.decoded_lines, 44);
            assert_eq!(
                nonzero_lines(&granule.frequency_lines),
                [
                    (8, 15),
                    (9, -7),
                    (10, 1),
                    (11, 1),
                    (13, 2),
                    (36, 20),
                    (37, -3),
                    (39, 16),
                    (40, 1),
                    (41, 1),
                    (43, -1)
                ]
            );
            assert_eq!(nonzero_lines(&frame.granule(1, 0).frequency_lines), [(2, -1)]);

            assert_eq!(parser.state().frames_parsed, 2);
        }

        Ok(())
    }

    #[test]
    fn crc_mismatch() -> Result<()> {
        let mut data = EXAMPLE_DATA[..144].to_vec();
        // last bit of the first global_gain
        data[11] ^= 0x01;
        let frame = raw_frame(0, &data)?;

        let mut parser = Parser::default();
        let err = parser.parse(&frame).expect_err("corrupted side information");
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::CrcMismatch { read: 0xA5B4, .. })
        ));
        assert!(parser.state().reservoir.is_empty());

        parser.set_verify_crc(false);
        let frame = parser.parse(&frame)?;
        assert_eq!(frame.crc, Some(0xA5B4));
        assert_eq!(frame.channel_side_info(0, 0).global_gain, 141);

        Ok(())
    }

    #[test]
    fn backward_reservoir() -> Result<()> {
        // frame 1 carries the main data of frame 2 after its own 17 bytes
        let mut first = EXAMPLE_DATA[..144].to_vec();
        let mut second = EXAMPLE_DATA[144..].to_vec();
        let own = 23 + 17;
        first[own..own + 18].copy_from_slice(&second[23..23 + 18]);
        second[23..].fill(0);

        // main_data_begin = 121 - 17
        second[6] = 104 >> 1;
        second[7] &= 0x7F;
        reseal(&mut second);

        let mut parser = Parser::default();
        parser.set_reservoir_mode(ReservoirMode::Backward);

        parser.parse(&raw_frame(0, &first)?)?;
        let frame = parser.parse(&raw_frame(144, &second)?)?;
        assert_eq!(frame.side_info.main_data_begin, 104);
        assert_eq!(frame.granule(0, 0).scalefac_s[3], [1, 2, 3]);
        assert_eq!(frame.granule(0, 0).frequency_lines[36..40], [20.0, -3.0, 0.0, 16.0]);
        assert_eq!(parser.state().reservoir.len(), MAX_MAIN_DATA_BEGIN.min(104 + 121));

        // the sequential reading decodes the zeroed payload instead
        let mut parser = Parser::default();
        parser.parse(&raw_frame(0, &first)?)?;
        let frame = parser.parse(&raw_frame(144, &second)?)?;
        assert_eq!(frame.granule(0, 0).scalefac_s[3], [0, 0, 0]);
        assert_eq!(frame.granule(0, 0).decoded_lines, 6);
        assert_eq!(
            nonzero_lines(&frame.granule(0, 0).frequency_lines),
            [(0, 15), (1, 14), (2, 15), (3, 14), (4, 15), (5, 14)]
        );
        assert_eq!(frame.granule(1, 0).decoded_lines, 0);

        // without the preceding frame the reservoir is empty
        let mut parser = Parser::default();
        parser.set_reservoir_mode(ReservoirMode::Backward);
        let err = parser
            .parse(&raw_frame(144, &second)?)
            .expect_err("nothing to reach back into");
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::ReservoirUnderflow {
                requested: 104,
                available: 0
            })
        ));

        Ok(())
    }

    #[test]
    fn unsupported_and_short_frames() -> Result<()> {
        let mut parser = Parser::default();

        // MPEG-1 Layer II, 128 kbps, 44.1 kHz
        let mut layer2 = vec![0xFF, 0xFD, 0x80, 0x00];
        layer2.resize(417, 0);
        let err = parser.parse(&raw_frame(0, &layer2)?).expect_err("Layer II");
        assert!(matches!(
            err.downcast_ref::<SideInfoError>(),
            Some(SideInfoError::UnsupportedFormat { .. })
        ));

        let err = parser
            .parse(&raw_frame(0, &EXAMPLE_DATA[..20])?)
            .expect_err("side information is cut");
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::FrameTooShort {
                needed: 23,
                actual: 20
            })
        ));

        Ok(())
    }
}
