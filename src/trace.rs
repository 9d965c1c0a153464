//! Recovering instruction words from trace logs.
//!
//! Each log line carries its instruction word as a parenthesised literal,
//! e.g. `core 0: 0x80000104 (0x4505) c.li a0, 1`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::decoder::{DecodeError, Decoder, Instruction, RiscvDecoder};
use crate::report::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Stop after this many lines.
    pub limit: Option<usize>,
    /// Abort on the first line that fails instead of skipping it.
    pub fail_fast: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            limit: None,
            fail_fast: false,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    #[error("line {line_no}: no parenthesised instruction literal")]
    MissingLiteral { line_no: usize },
    #[error("line {line_no}: bad instruction literal {literal:?}: {source}")]
    BadLiteral {
        line_no: usize,
        literal: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line_no}: {source} (in {line:?})")]
    Decode {
        line_no: usize,
        line: String,
        #[source]
        source: DecodeError,
    },
    #[error("trace i/o: {0}")]
    Io(#[from] io::Error),
}

/// Parses the first `(...)` literal of `line`: `0x`/`0X` hex, else decimal.
pub fn extract_word(line: &str) -> Result<u32, LiteralError> {
    let open = line.find('(').ok_or(LiteralError::Missing)?;
    let close = line[open..].find(')').ok_or(LiteralError::Missing)? + open;
    let literal: String = line[open + 1..close].chars().filter(|c| !c.is_whitespace()).collect();
    let parsed = match literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => literal.parse::<u32>(),
    };
    parsed.map_err(|source| LiteralError::Bad { literal, source })
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("no parenthesised instruction literal")]
    Missing,
    #[error("bad instruction literal {literal:?}: {source}")]
    Bad {
        literal: String,
        #[source]
        source: ParseIntError,
    },
}

impl LiteralError {
    fn at(self, line_no: usize) -> TraceError {
        match self {
            LiteralError::Missing => TraceError::MissingLiteral { line_no },
            LiteralError::Bad { literal, source } => TraceError::BadLiteral {
                line_no,
                literal,
                source,
            },
        }
    }
}

/// Lazy line source over a trace file. `reopen` restarts from the top.
pub struct TraceReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl TraceReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref().to_path_buf();
        let lines = BufReader::new(File::open(&path)?).lines();
        Ok(Self { path, lines })
    }

    pub fn reopen(&mut self) -> Result<(), TraceError> {
        self.lines = BufReader::new(File::open(&self.path)?).lines();
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for TraceReader {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub line_no: usize,
    pub line: String,
    pub inst: Instruction,
}

/// Decodes every line of `lines` in source order.
///
/// Failed lines are counted in the summary and skipped, unless
/// `cfg.fail_fast` is set, in which case the first failure is returned.
pub fn decode_trace<I>(lines: I, cfg: &TraceConfig) -> Result<(Vec<TraceEntry>, Summary), TraceError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let dec = RiscvDecoder::new();
    let mut entries = Vec::new();
    let mut summary = Summary::new();
    let limit = cfg.limit.unwrap_or(usize::MAX);

    for (idx, line) in lines.into_iter().take(limit).enumerate() {
        let line_no = idx + 1;
        let line = line?;
        match decode_line(&dec, line_no, &line) {
            Ok(inst) => {
                debug!(line_no, word = inst.word, op = inst.mnemonic(), "decoded");
                summary.record_ok(&inst);
                entries.push(TraceEntry { line_no, line, inst });
            }
            Err(e) if cfg.fail_fast => return Err(e),
            Err(e) => {
                warn!(line_no, "skipping: {e}");
                match &e {
                    TraceError::Decode { source, .. } => summary.record_err(source),
                    _ => summary.record_unparsed(),
                }
            }
        }
    }
    Ok((entries, summary))
}

pub fn decode_line<D: Decoder>(dec: &D, line_no: usize, line: &str) -> Result<Instruction, TraceError> {
    let word = extract_word(line).map_err(|e| e.at(line_no))?;
    dec.decode(word).map_err(|source| TraceError::Decode {
        line_no,
        line: line.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_forms() {
        assert_eq!(extract_word("core 0: 0x80000104 (0x4505) c.li a0, 1"), Ok(0x4505));
        assert_eq!(extract_word("x ( 0X00000013 )"), Ok(0x13));
        assert_eq!(extract_word("x (19)"), Ok(19));
        assert_eq!(extract_word("no literal"), Err(LiteralError::Missing));
        assert_eq!(extract_word("close) before (open"), Err(LiteralError::Missing));
        assert!(matches!(extract_word("(0xzz)"), Err(LiteralError::Bad { .. })));
    }

    #[test]
    fn literal_error_is_a_std_error() {
        use std::error::Error as _;

        assert_eq!(LiteralError::Missing.to_string(), "no parenthesised instruction literal");
        let err = extract_word("x (0x1g)").unwrap_err();
        assert!(err.to_string().starts_with("bad instruction literal \"0x1g\""));
        assert!(err.source().is_some());

        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err.clone());
        assert_eq!(boxed.to_string(), err.to_string());
        assert!(matches!(err.at(4), TraceError::BadLiteral { line_no: 4, .. }));
    }

    #[test]
    fn skip_versus_fail_fast() {
        let lines = ["a (0x0001)", "b (0x8000)", "c (0x13)", "d"];
        let src = || lines.iter().map(|l| Ok(l.to_string()));

        let (entries, summary) = decode_trace(src(), &TraceConfig::default()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].line_no, 3);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.compressed, 1);

        let cfg = TraceConfig { fail_fast: true, ..TraceConfig::default() };
        let err = decode_trace(src(), &cfg).unwrap_err();
        assert!(matches!(err, TraceError::Decode { line_no: 2, .. }));

        let cfg = TraceConfig { limit: Some(1), ..TraceConfig::default() };
        let (entries, _) = decode_trace(src(), &cfg).unwrap();
        assert_eq!(entries.len(), 1);
    }
}
