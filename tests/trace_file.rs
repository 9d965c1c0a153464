use std::path::PathBuf;

use pretty_assertions::assert_eq;

use rvdecode::disasm::fmt_instruction;
use rvdecode::trace::decode_trace;
use rvdecode::{Op, TraceConfig, TraceError, TraceReader};

struct TempLog(PathBuf);

impl TempLog {
    fn new(name: &str, body: &str) -> Self {
        let path = std::env::temp_dir().join(format!("rvdecode_{}_{name}.log", std::process::id()));
        std::fs::write(&path, body).unwrap();
        Self(path)
    }
}

impl Drop for TempLog {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

const LOG: &str = "\
core   0: 0x0000000080000000 (0x00000297) auipc t0, 0x0
core   0: 0x0000000080000004 (0x4505) c.li a0, 1
core   0: 0x0000000080000006 (0x8000) reserved
core   0: 0x0000000080000008 (0x0000006f) j 0
no literal here
";

#[test]
fn reader_decodes_and_reopens() {
    let log = TempLog::new("reopen", LOG);
    let mut reader = TraceReader::open(&log.0).unwrap();
    assert_eq!(reader.path(), log.0.as_path());

    let (entries, summary) = decode_trace(&mut reader, &TraceConfig::default()).unwrap();
    let ops: Vec<Op> = entries.iter().map(|e| e.inst.op).collect();
    assert_eq!(ops, vec![Op::Auipc, Op::CLi, Op::Jal]);
    assert_eq!(entries[2].line_no, 4);
    assert_eq!(fmt_instruction(&entries[1].inst), "c.li a0, 1");
    assert_eq!(summary.total, 5);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.by_error.get("reserved"), Some(&1));
    assert_eq!(summary.by_error.get("no-literal"), Some(&1));

    // exhausted until reopened
    assert!(reader.next().is_none());
    reader.reopen().unwrap();
    let cfg = TraceConfig { limit: Some(2), ..TraceConfig::default() };
    let (entries, summary) = decode_trace(reader, &cfg).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(summary.total, 2);
}

#[test]
fn fail_fast_stops_at_first_bad_line() {
    let log = TempLog::new("fail_fast", LOG);
    let reader = TraceReader::open(&log.0).unwrap();
    let cfg = TraceConfig { fail_fast: true, ..TraceConfig::default() };
    match decode_trace(reader, &cfg) {
        Err(TraceError::Decode { line_no, source, .. }) => {
            assert_eq!(line_no, 3);
            assert_eq!(source.word(), 0x8000);
        }
        other => panic!("expected decode failure, got {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = TraceReader::open("/nonexistent/rvdecode.log").err().unwrap();
    assert!(matches!(err, TraceError::Io(_)));
}
