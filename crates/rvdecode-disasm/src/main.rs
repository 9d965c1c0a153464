use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::fmt::Write as _;
use std::path::Path;

use rvdecode::disasm::fmt_instruction;
use rvdecode::{classify, decode, Summary};
use rvdecode_disasm::{load_raw_bin, sweep_range, RowKind};

#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V disassembler CLI", long_about=None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    base: u32,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path (unused by `words`)
    #[arg(value_name = "BINFILE")]
    input: Option<String>,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (a raw .bin is a single segment)
    Sections,
    /// Disassemble a range [start, end) in bytes
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
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Decode instruction words given on the command line
    Words {
        #[arg(value_parser = parse_u32, num_args = 1.., required = true)]
        words: Vec<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

#[derive(Debug, Clone, serde::Serialize)]
struct WordOut {
    word: u32,
    width: u8,
    text: Option<String>,
    error: Option<String>,
}

fn decode_words(words: &[u32]) -> (Vec<WordOut>, Summary) {
    let mut summary = Summary::new();
    let mut out = Vec::with_capacity(words.len());
    for &word in words {
        let result = decode(word);
        summary.record(&result);
        let (text, error) = match &result {
            Ok(inst) => (Some(fmt_instruction(inst)), None),
            Err(e) => (None, Some(e.to_string())),
        };
        out.push(WordOut { word, width: classify(word).bytes(), text, error });
    }
    (out, summary)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Command::Words { words, format } = &cli.cmd {
        let (out, summary) = decode_words(words);
        match format {
            OutputFormat::Json => {
                let doc = serde_json::json!({ "words": out, "summary": summary });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
            OutputFormat::Text => {
                for w in &out {
                    match (&w.text, &w.error) {
                        (Some(t), _) => println!("{:#010x}: {t}", w.word),
                        (_, Some(e)) => println!("{:#010x}: <{e}>", w.word),
                        _ => {}
                    }
                }
            }
        }
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        anyhow::bail!("BINFILE is required for this subcommand");
    };
    let img = load_raw_bin(Path::new(input), cli.base, cli.skip, cli.len)?;
    tracing::debug!(segments = img.segments.len(), "image loaded");

    match cli.cmd {
        Command::Sections => {
            println!("{:<10} {:<10} {:<10} {:>8}", "name", "start", "end", "size");
            for s in &img.segments {
                println!("{:<10} {:#010x} {:#010x} {:>8}", s.name, s.base, s.end(), s.bytes.len());
            }
        }
        Command::Range { start, end, show_bytes, out, format } => {
            anyhow::ensure!(end >= start, "end must be >= start");
            let sweep = sweep_range(&img, start, end);
            let mut buf = String::new();
            match format {
                OutputFormat::Json => {
                    buf = serde_json::to_string_pretty(&sweep)?;
                    buf.push('\n');
                }
                OutputFormat::Text => {
                    for row in &sweep.rows {
                        let _ = writeln!(buf, "{}", row.render(&img, show_bytes));
                    }
                    if sweep.stop < end {
                        let _ = writeln!(buf, "{:#010x}: <oob>", sweep.stop);
                    }
                }
            }
            let failed = sweep.rows.iter().filter(|r| r.kind == RowKind::Failed).count();
            tracing::info!(rows = sweep.rows.len(), failed, "range decoded");
            if let Some(path) = out {
                std::fs::write(path, buf)?;
            } else {
                print!("{buf}");
            }
        }
        Command::Words { .. } => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_u32_hex_and_dec() {
        assert_eq!(parse_u32("0x10").unwrap(), 0x10);
        assert_eq!(parse_u32("16").unwrap(), 16);
        assert!(parse_u32("zz").is_err());
    }

    #[test]
    fn words_subcommand_parses() {
        let cli = Cli::try_parse_from(["rvdecode-disasm", "words", "0x4505", "19", "--format", "json"]).unwrap();
        match cli.cmd {
            Command::Words { words, format } => {
                assert_eq!(words, vec![0x4505, 19]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn decode_words_reports_failures() {
        let (out, summary) = decode_words(&[0x4505, 0x8000, 0x0000_0013]);
        assert_eq!(out[0].text.as_deref(), Some("c.li a0, 1"));
        assert_eq!(out[0].width, 2);
        assert!(out[1].error.is_some());
        assert_eq!(out[2].width, 4);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.decoded(), 2);
    }
}
