use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Write as _;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use mips_rs::{fmt_decoded, render_with, Decoder, DumpConfig, Listing, MipsDecoder};

use mips_disasm::{load_raw_bin, read_u8, read_word_at, Image};

#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS subset disassembler CLI", long_about=None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u32, value_parser = parse_u32)]
    base: u32,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments
    Sections,
    /// Disassemble a range [start, end) in bytes; undecodable words become `.word`
    Range {
        /// Start address (hex or dec)
        #[arg(value_parser = parse_u32)]
        start: u32,
        /// End address (hex or dec, exclusive)
        #[arg(value_parser = parse_u32)]
        end: u32,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Decode the whole segment as one section; fails on the first bad word
    Dump {
        /// Section label for the header line
        #[arg(long)]
        label: Option<String>,
        /// Prefix for each instruction line
        #[arg(long, default_value = "")]
        indent: String,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

#[derive(Debug, serde::Serialize)]
struct InsnOut<'a> {
    addr: u32,
    text: String,
    #[serde(flatten)]
    decoded: &'a mips_rs::Decoded,
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn render_range(img: &Image, start: u32, end: u32, show_bytes: bool) -> String {
    let dec = MipsDecoder::new();
    let mut buf = String::new();
    let mut pc = start;
    while pc < end {
        let Some(raw32) = read_word_at(img, pc) else {
            let _ = writeln!(buf, "{pc:#010x}: <oob>");
            break;
        };
        let _ = write!(buf, "{pc:#010x}: ");
        if show_bytes {
            for i in 0..4 {
                let _ = write!(buf, "{:02x} ", read_u8(img, pc + i).unwrap_or(0));
            }
            buf.push_str("  ");
        }
        match dec.decode(raw32).and_then(|d| fmt_decoded(&d)) {
            Ok(text) => { let _ = writeln!(buf, "{text}"); }
            Err(e) => {
                tracing::debug!(pc, error = %e, "undecodable word");
                let _ = writeln!(buf, ".word {raw32:#010x}");
            }
        }
        pc = pc.wrapping_add(4);
    }
    buf
}

fn write_out(out: Option<String>, buf: &str) -> Result<()> {
    if let Some(path) = out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let img = load_raw_bin(Path::new(&cli.input), cli.base, cli.skip, cli.len)?;

    match cli.cmd {
        Command::Sections => {
            println!("{:<10} {:<10} {:<10}", "name", "start", "end");
            for s in &img.segments {
                let start = s.base;
                let end = s.base.wrapping_add(s.bytes.len() as u32);
                println!("{:<10} {start:#010x} {end:#010x}", s.name);
            }
        }
        Command::Range { start, end, show_bytes, out } => {
            anyhow::ensure!(end >= start, "end must be >= start");
            write_out(out, &render_range(&img, start, end, show_bytes))?;
        }
        Command::Dump { label, indent, format, out } => {
            let Some(section) = img.segments.first() else { anyhow::bail!("no segments loaded") };
            let mut listing = Listing::from_section(section, &MipsDecoder::new())?;
            if let Some(label) = label { listing.section_name = label; }
            let buf = match format {
                OutputFormat::Text => {
                    let cfg = DumpConfig { indent, ..DumpConfig::default() };
                    render_with(&listing.instrs, &listing.section_name, &cfg)?
                }
                OutputFormat::Json => {
                    let mut insns = Vec::with_capacity(listing.instrs.len());
                    for (addr, d) in listing.iter_addrs() {
                        insns.push(InsnOut { addr, text: fmt_decoded(d)?, decoded: d });
                    }
                    serde_json::to_string_pretty(&insns)? + "\n"
                }
            };
            write_out(out, &buf)?;
        }
    }

    Ok(())
}
