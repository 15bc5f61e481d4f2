use crate::config::load_config;
use crate::pipeline;
use crate::render::{render_json, render_lines, write_output};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "svg2graph",
    version,
    about = "Extract indoor-map graph nodes from a labelled SVG floor plan"
)]
pub struct Args {
    /// Input SVG file, or '-' for stdin
    pub input: PathBuf,

    /// Floor number stamped on every node (overrides the config file)
    #[arg(allow_negative_numbers = true)]
    pub floor: Option<i32>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "lines")]
    pub format: OutputFormat,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON object per line, grouped by node type
    Lines,
    /// A single pretty-printed JSON array
    Json,
}

pub fn run(args: &Args) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(floor) = args.floor {
        config.floor = floor;
    }

    let svg = read_input(&args.input)?;
    let nodes = pipeline::run(&svg, config.floor, &config)
        .with_context(|| format!("failed to process {}", args.input.display()))?;

    let text = match args.format {
        OutputFormat::Lines => render_lines(&nodes)?,
        OutputFormat::Json => render_json(&nodes)?,
    };
    write_output(&text, args.output.as_deref())?;

    log::info!(nodes = nodes.len(), output:? = args.output; "wrote graph nodes");
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read SVG from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
