//! Color conversion CLI tool
//!
//! Parses each input the way the picker does and prints it in the requested
//! notations.

use super::config::CliConfigBuilder;
use crate::{
    picker::{PickerState, TracingColorListener},
    tracing_config::{events, init_cli_tracing, spans},
    ColorModel,
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Convert colors between hex, RGB(A) and HSL(A)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "picker-color")]
pub struct Cli {
    /// Colors to convert: #0cf, #00ccff80, rgb(0,204,255), hsla(190,100%,50%,.5).
    /// Use "-" to read one per line from stdin
    #[arg(value_name = "COLOR", required = true)]
    pub input: Vec<String>,

    /// Output notation
    #[arg(short, long, value_enum, default_value_t = CliOutputFormat::All)]
    pub format: CliOutputFormat,

    /// Emit one JSON object per input
    #[arg(long)]
    pub json: bool,

    /// Disable the alpha channel (colors become opaque, hex has 6 digits)
    #[arg(long)]
    pub no_alpha: bool,

    /// Picker configuration file (JSON)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v: INFO, -vv: DEBUG, -vvv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json needs the tracing-json feature)
    #[arg(long, value_enum, default_value_t = CliLogFormat::Console)]
    pub log_format: CliLogFormat,

    /// Write logs to a file instead of stderr (needs the tracing-files feature)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum CliLogFormat {
    /// Colored, human-readable
    Console,
    /// Plain text without ANSI colors
    Compact,
    /// One JSON object per event
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum CliOutputFormat {
    /// Every notation below
    All,
    /// Picker editor text (8 digit hex, 6 with alpha disabled)
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

/// One converted color in every notation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub hex: String,
    pub rgb: String,
    pub rgba: String,
    pub hsl: String,
    pub hsla: String,
    pub rgba_channels: [f64; 4],
    pub hsla_channels: [f64; 4],
}

impl ConversionReport {
    fn from_picker(input: &str, picker: &PickerState) -> Result<Self> {
        let color: &ColorModel = picker.color().context("No color was parsed")?;
        Ok(Self {
            input: input.to_string(),
            hex: picker.editor_value()?,
            rgb: color.rgb_string()?,
            rgba: color.rgba_string()?,
            hsl: color.hsl_string()?,
            hsla: color.hsla_string()?,
            rgba_channels: color.rgba()?.to_array(),
            hsla_channels: color.hsla()?.to_array(),
        })
    }

    /// The requested notation, or every notation on labelled lines
    #[must_use]
    pub fn render(&self, format: CliOutputFormat) -> String {
        match format {
            CliOutputFormat::Hex => self.hex.clone(),
            CliOutputFormat::Rgb => self.rgb.clone(),
            CliOutputFormat::Rgba => self.rgba.clone(),
            CliOutputFormat::Hsl => self.hsl.clone(),
            CliOutputFormat::Hsla => self.hsla.clone(),
            CliOutputFormat::All => format!(
                "{}\n  hex:  {}\n  rgb:  {}\n  rgba: {}\n  hsl:  {}\n  hsla: {}",
                self.input, self.hex, self.rgb, self.rgba, self.hsl, self.hsla
            ),
        }
    }
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    let tracing_config =
        CliConfigBuilder::tracing_config(&cli).context("Invalid logging options")?;
    init_cli_tracing(tracing_config).context("Failed to initialize tracing")?;

    CliConfigBuilder::validate_cli(&cli).context("Invalid CLI arguments")?;
    let config = CliConfigBuilder::from_cli(&cli).context("Failed to build configuration")?;

    let inputs = collect_inputs(&cli.input).context("Failed to read colors from stdin")?;
    let _batch = spans::batch(inputs.len()).entered();
    info!("Converting {} color(s)", inputs.len());

    let mut picker = PickerState::with_listener(config, Box::new(TracingColorListener))
        .context("Failed to create picker")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for input in &inputs {
        let _span = spans::conversion(input, &format!("{:?}", cli.format)).entered();
        match convert(&mut picker, input) {
            Ok(report) => {
                let line = if cli.json {
                    serde_json::to_string(&report)?
                } else {
                    report.render(cli.format)
                };
                writeln!(out, "{}", line)?;
            },
            Err(e) => {
                failures += 1;
                events::error_with_context(&format!("{:#}", e), input);
                eprintln!("picker-color: {}: {:#}", input, e);
            },
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} color(s) could not be converted", failures, inputs.len());
    }

    debug!("All colors converted");
    Ok(())
}

fn convert(picker: &mut PickerState, input: &str) -> Result<ConversionReport> {
    let applied = picker
        .set_color(input, false)
        .with_context(|| format!("Failed to parse color '{}'", input))?;
    if !applied {
        anyhow::bail!("Empty color input");
    }
    ConversionReport::from_picker(input.trim(), picker)
}

/// Expand "-" into the non-blank lines of stdin
fn collect_inputs(args: &[String]) -> io::Result<Vec<String>> {
    let mut inputs = Vec::with_capacity(args.len());
    for arg in args {
        if arg == "-" {
            for line in io::stdin().lock().lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    inputs.push(line);
                }
            }
        } else {
            inputs.push(arg.clone());
        }
    }
    Ok(inputs)
}
