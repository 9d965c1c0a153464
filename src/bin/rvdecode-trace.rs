use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rvdecode::disasm::fmt_instruction;
use rvdecode::trace::decode_trace;
use rvdecode::{TraceConfig, TraceReader};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Decode the instruction words recorded in a RISC-V trace log"
)]
struct Opts {
    /// Stop after N lines
    #[arg(short = 'n', long)]
    limit: Option<usize>,
    /// Abort on the first undecodable line instead of skipping it
    #[arg(long)]
    fail_fast: bool,
    /// Emit decoded records and the summary as JSON
    #[arg(long)]
    json: bool,
    #[arg(value_name = "LOGFILE")]
    input: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let cfg = TraceConfig {
        limit: opts.limit,
        fail_fast: opts.fail_fast,
    };

    let reader = TraceReader::open(&opts.input)?;
    let (entries, summary) = decode_trace(reader, &cfg)?;

    if opts.json {
        let records: Vec<_> = entries.iter().map(|e| &e.inst).collect();
        let out = serde_json::json!({ "instructions": records, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for e in &entries {
        let width = if e.inst.compressed { "compressed" } else { "uncompressed" };
        println!(
            "{:>6}: {:#010x}  {:<6} {:<12} {}",
            e.line_no,
            e.inst.bits(),
            e.inst.format(),
            width,
            fmt_instruction(&e.inst)
        );
    }
    print!("{summary}");

    Ok(())
}
