use anyhow::Result;
use serde::Serialize;

use super::command::{Cli, DumpArgs};
use crate::input::{CHUNK_SIZE, InputReader};
use mpa::process::stream::FrameStream;
use mpa::structs::frame::Frame;
use mpa::structs::header::FrameHeader;
use mpa::structs::main_data::GranuleChannel;
use mpa::structs::side_info::{ChannelSideInfo, GRANULES};

pub fn cmd_dump(args: &DumpArgs, cli: &Cli) -> Result<()> {
    log::info!("Dumping {} frame(s) of {}", args.frames, args.input.display());

    let mut input_reader = InputReader::new(&args.input)?;

    let mut stream = FrameStream::default();
    stream.set_fail_level(cli.fail_level());
    stream.set_reservoir_mode(args.reservoir.into());
    stream.set_verify_crc(!args.no_crc);

    let mut frames = Vec::with_capacity(args.frames);

    input_reader.process_chunks(CHUNK_SIZE, |chunk| {
        stream.push_bytes(chunk);

        while frames.len() < args.frames {
            match stream.next() {
                Some(frame) => frames.push(FrameReport::new(&frame?, args.spectrum)),
                None => break,
            }
        }

        Ok(frames.len() < args.frames)
    })?;

    if frames.len() < args.frames {
        stream.finish();
        for frame in stream.by_ref().take(args.frames - frames.len()) {
            frames.push(FrameReport::new(&frame?, args.spectrum));
        }
    }

    let report = DumpReport {
        input: args.input.display().to_string(),
        reservoir: format!("{:?}", args.reservoir),
        frames_skipped: stream.frames_skipped(),
        frames,
    };

    print!("{}", serde_yaml_ng::to_string(&report)?);

    Ok(())
}

#[derive(Debug, Serialize)]
struct DumpReport {
    input: String,
    reservoir: String,
    frames_skipped: usize,
    frames: Vec<FrameReport>,
}

#[derive(Debug, Serialize)]
struct FrameReport {
    offset: u64,
    header: HeaderReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    crc: Option<u16>,
    main_data_begin: u16,
    private_bits: u8,
    scfsi: Vec<[bool; 4]>,
    granules: Vec<GranuleReport>,
}

impl FrameReport {
    fn new(frame: &Frame, spectrum: bool) -> Self {
        let channels = frame.channels();
        let mut granules = Vec::with_capacity(GRANULES * channels);

        for gr in 0..GRANULES {
            for ch in 0..channels {
                granules.push(GranuleReport::new(
                    gr,
                    ch,
                    frame.channel_side_info(gr, ch),
                    frame.granule(gr, ch),
                    spectrum,
                ));
            }
        }

        Self {
            offset: frame.offset,
            header: HeaderReport::from(&frame.header),
            crc: frame.crc,
            main_data_begin: frame.side_info.main_data_begin,
            private_bits: frame.side_info.private_bits,
            scfsi: frame.side_info.scfsi[..channels].to_vec(),
            granules,
        }
    }
}

#[derive(Debug, Serialize)]
struct HeaderReport {
    version: String,
    layer: String,
    bitrate: u32,
    frequency: u32,
    channel_mode: String,
    mode_extension: u8,
    padding: bool,
    private: bool,
    copyright: bool,
    original: bool,
    frame_size: usize,
}

impl From<&FrameHeader> for HeaderReport {
    fn from(header: &FrameHeader) -> Self {
        Self {
            version: header.version.to_string(),
            layer: header.layer.to_string(),
            bitrate: header.bitrate,
            frequency: header.frequency,
            channel_mode: header.channel_mode.to_string(),
            mode_extension: header.mode_extension,
            padding: header.pad_bit,
            private: header.private_bit,
            copyright: header.copyright,
            original: header.original,
            frame_size: header.frame_size,
        }
    }
}

#[derive(Debug, Serialize)]
struct GranuleReport {
    granule: usize,
    channel: usize,
    part2_3_length: u16,
    big_values: u16,
    global_gain: u8,
    scalefac_compress: u8,
    block_type: String,
    mixed_block: bool,
    table_select: [u8; 3],
    sub_block_gain: [u8; 3],
    region0_count: u8,
    region1_count: u8,
    preflag: bool,
    scalefac_scale: bool,
    count1table_select: bool,
    scalefac_l: Vec<u8>,
    scalefac_s: Vec<[u8; 3]>,
    decoded_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    spectrum: Option<Vec<i32>>,
}

impl GranuleReport {
    fn new(
        granule: usize,
        channel: usize,
        info: &ChannelSideInfo,
        data: &GranuleChannel,
        spectrum: bool,
    ) -> Self {
        let (region0_count, region1_count) = info.region_counts();

        let scalefac_s = if info.is_short_granule() {
            data.scalefac_s.to_vec()
        } else {
            Vec::new()
        };

        Self {
            granule,
            channel,
            part2_3_length: info.part2_3_length,
            big_values: info.big_values,
            global_gain: info.global_gain,
            scalefac_compress: info.scalefac_compress,
            block_type: format!("{:?}", info.block_type()),
            mixed_block: info.mixed_block_flag(),
            table_select: info.table_select(),
            sub_block_gain: info.sub_block_gain(),
            region0_count,
            region1_count,
            preflag: info.preflag,
            scalefac_scale: info.scalefac_scale,
            count1table_select: info.count1table_select,
            scalefac_l: data.scalefac_l.to_vec(),
            scalefac_s,
            decoded_lines: data.decoded_lines,
            spectrum: spectrum.then(|| data.frequency_lines.iter().map(|&v| v as i32).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpa::process::EXAMPLE_DATA;

    #[test]
    fn yaml_report() -> Result<()> {
        let frames = FrameStream::from_bytes(EXAMPLE_DATA)
            .map(|frame| frame.map(|frame| FrameReport::new(&frame, false)))
            .collect::<Result<Vec<_>>>()?;

        let report = DumpReport {
            input: "example.mp3".to_string(),
            reservoir: "Sequential".to_string(),
            frames_skipped: 0,
            frames,
        };
        let yaml = serde_yaml_ng::to_string(&report)?;

        assert!(yaml.contains("version: MPEG-1"));
        assert!(yaml.contains("layer: Layer III"));
        assert!(yaml.contains("offset: 144"));
        assert!(yaml.contains("block_type: Short"));
        assert!(!yaml.contains("spectrum:"));

        let spectrum = GranuleReport::new(
            0,
            0,
            &ChannelSideInfo::default(),
            &GranuleChannel::default(),
            true,
        );
        assert_eq!(spectrum.spectrum.map(|lines| lines.len()), Some(576));

        Ok(())
    }
}
