use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use super::command::{Cli, InfoArgs};
use crate::duration::time_str;
use crate::input::{CHUNK_SIZE, InputReader};
use mpa::process::stream::FrameStream;
use mpa::structs::frame::Frame;
use mpa::structs::header::FrameHeader;

pub fn cmd_info(args: &InfoArgs, cli: &Cli, multi: Option<&MultiProgress>) -> Result<()> {
    log::info!("Analyzing MPEG audio stream: {}", args.input.display());

    let context = analyze_stream(&args.input, cli, multi)?;

    match &context.first_header {
        Some(header) => {
            display_stream_info(header, context.variable_bitrate);
            display_summary(&context);
        }
        None => {
            println!("No Layer III frame could be parsed.");
            println!("This doesn't appear to be a valid MPEG-1 Layer III stream.");
        }
    }

    Ok(())
}

fn analyze_stream(
    input_path: &std::path::Path,
    cli: &Cli,
    multi: Option<&MultiProgress>,
) -> Result<AnalysisContext> {
    let mut input_reader = InputReader::new(input_path)?;
    if input_reader.is_pipe() {
        log::debug!("Reading from stdin");
    }

    let mut stream = FrameStream::default();
    stream.set_fail_level(cli.fail_level());

    let mut context = AnalysisContext::default();

    if let Some(multi) = multi {
        let pb = multi.add(ProgressBar::new_spinner());
        pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb.set_message("Analyzing frames...");
        context.pb = Some(pb);
    }

    input_reader.process_chunks(CHUNK_SIZE, |chunk| {
        context.total_bytes += chunk.len();
        stream.push_bytes(chunk);

        for frame in stream.by_ref() {
            context.process_frame(&frame?);
        }

        Ok(true)
    })?;

    stream.finish();
    for frame in stream.by_ref() {
        context.process_frame(&frame?);
    }

    context.frames_skipped = stream.frames_skipped();
    context.extract_errors = stream.extractor().error_count();

    if let Some(ref pb) = context.pb {
        pb.finish_and_clear();
    }

    Ok(context)
}

#[derive(Default)]
struct AnalysisContext {
    first_header: Option<FrameHeader>,
    variable_bitrate: bool,
    frame_count: usize,
    frames_skipped: usize,
    extract_errors: usize,
    duration: f64,
    total_bytes: usize,
    pb: Option<ProgressBar>,
}

impl AnalysisContext {
    fn process_frame(&mut self, frame: &Frame) {
        match &self.first_header {
            Some(first) => {
                if first.bitrate != frame.header.bitrate {
                    self.variable_bitrate = true;
                }
            }
            None => self.first_header = Some(frame.header.clone()),
        }

        self.frame_count += 1;
        self.duration += frame.header.duration();

        if self.frame_count.is_multiple_of(100) {
            if let Some(ref pb) = self.pb {
                pb.set_message(format!("Analyzing frames...       {}", self.frame_count));
                pb.tick();
            }
        }
    }
}

fn display_stream_info(header: &FrameHeader, variable_bitrate: bool) {
    println!();
    println!("MPEG Audio Stream Information");
    println!("=============================");
    println!();
    println!("Stream Information");
    println!("  Format                    {} {}", header.version, header.layer);
    println!("  Sampling rate             {} Hz", header.frequency);
    println!("  Channel mode              {}", header.channel_mode);
    println!("  First bitrate             {} kbps", header.bitrate / 1000);
    println!("  Variable bitrate          {variable_bitrate}");
    println!("  CRC protected             {}", header.has_crc());
    println!("  Samples per frame         {}", header.samples_per_frame);
    println!();
}

fn display_summary(context: &AnalysisContext) {
    println!("Analysis Summary");
    println!("  Frames processed          {}", context.frame_count);
    println!("  Frames skipped            {}", context.frames_skipped);
    println!("  Invalid headers           {}", context.extract_errors);

    let total_bytes = context.total_bytes;
    let size_mb = total_bytes as f64 / 1_000_000.0;
    println!("  Size                      {size_mb:.2} MB ({total_bytes} bytes)");
    println!("  Duration                  {}", time_str(context.duration));

    if context.duration > 0.0 {
        let avg_data_rate_kbps = (total_bytes as f64 * 8.0) / (context.duration * 1000.0);
        println!("  Average data rate         {avg_data_rate_kbps:.1} kbps");
    }

    println!();
}
