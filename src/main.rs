use gravsim::{run, ConfigFormat};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};

/// Simulate a gravitational system and render its trails to a bitmap
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scenario file (JSON, or YAML for .yaml/.yml); `-` reads stdin
    #[arg(default_value = "-")]
    input: String,

    /// Bitmap destination; `-` writes stdout
    #[arg(default_value = "-")]
    output: String,
}

fn open_input(path: &str) -> Result<Box<dyn Read>> {
    if path == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("unable to open input file {path}"))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        let stdout = io::stdout();
        if stdout.is_terminal() {
            bail!("output is a terminal; give an output file or redirect stdout");
        }
        return Ok(Box::new(BufWriter::new(stdout.lock())));
    }
    let file = File::create(path).with_context(|| format!("unable to open output file {path}"))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let format = ConfigFormat::from_path(&args.input);

    let input = open_input(&args.input)?;

    // nothing touches the output until the whole image is encoded
    let mut image = Vec::new();
    run(input, format, &mut image)?;

    let mut output = open_output(&args.output)?;
    output.write_all(&image)?;
    output.flush()?;

    info!("wrote {} bytes to {}", image.len(), args.output);
    Ok(())
}
