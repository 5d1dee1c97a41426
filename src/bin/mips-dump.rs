use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mips_rs::{Listing, MipsDecoder, Section};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Dump a raw code file as one disassembled section"
)]
struct Opts {
    /// Section label printed in the header line
    #[arg(short, long, default_value = "text")]
    label: String,
    /// Prefix for each instruction line
    #[arg(short, long, default_value = "")]
    indent: String,
    /// Skip N bytes at start of file
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Limit bytes decoded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Print decoded records as JSON instead of assembly
    #[arg(long)]
    json: bool,
    #[arg(value_name = "BINFILE")]
    input: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let file = std::fs::read(&opts.input)?;
    anyhow::ensure!(opts.skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[opts.skip..];
    if let Some(lim) = opts.len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }

    let section = Section { name: opts.label, base: 0, bytes: payload.to_vec() };
    let listing = Listing::from_section(&section, &MipsDecoder::new())?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&listing.instrs)?);
    } else {
        print!("{}", listing.dump(&opts.indent)?);
    }
    Ok(())
}
