//! Aggregate counts over a stream of decode results.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::decoder::{DecodeError, ErrorKind, Instruction};
use crate::operands::Format;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub compressed: usize,
    pub standard: usize,
    pub failed: usize,
    pub by_format: BTreeMap<Format, usize>,
    pub by_error: BTreeMap<String, usize>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &Result<Instruction, DecodeError>) {
        match result {
            Ok(inst) => self.record_ok(inst),
            Err(e) => self.record_err(e),
        }
    }

    pub fn record_ok(&mut self, inst: &Instruction) {
        self.total += 1;
        if inst.compressed {
            self.compressed += 1;
        } else {
            self.standard += 1;
        }
        *self.by_format.entry(inst.format()).or_default() += 1;
    }

    pub fn record_err(&mut self, err: &DecodeError) {
        self.total += 1;
        self.failed += 1;
        let key = match err.kind() {
            ErrorKind::ReservedEncoding => "reserved",
            ErrorKind::UndefinedEncoding => "undefined",
            ErrorKind::IllegalOperands => "illegal-operands",
            ErrorKind::UnresolvedFormat => "unresolved-format",
        };
        *self.by_error.entry(key.to_string()).or_default() += 1;
    }

    /// A line that never produced a word.
    pub fn record_unparsed(&mut self) {
        self.total += 1;
        self.failed += 1;
        *self.by_error.entry("no-literal".to_string()).or_default() += 1;
    }

    pub fn decoded(&self) -> usize {
        self.compressed + self.standard
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total      : {}", self.total)?;
        writeln!(f, "compressed : {}", self.compressed)?;
        writeln!(f, "standard   : {}", self.standard)?;
        writeln!(f, "failed     : {}", self.failed)?;
        for (format, n) in &self.by_format {
            writeln!(f, "  {format:<11}: {n}")?;
        }
        for (kind, n) in &self.by_error {
            writeln!(f, "  {kind:<11}: {n}")?;
        }
        Ok(())
    }
}
