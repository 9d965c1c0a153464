//! Linear sweep over an image: one row per instruction slot.

use serde::Serialize;

use rvdecode::disasm::fmt_instruction;
use rvdecode::{Decoder, RiscvDecoder, Summary};

use crate::model::{read_u8, Image};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Decoded,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub addr: u32,
    pub word: u32,
    pub size: u8,
    pub kind: RowKind,
    /// Assembly text, or the decode error for failed rows.
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sweep {
    pub rows: Vec<Row>,
    pub summary: Summary,
    /// Address where the sweep stopped.
    pub stop: u32,
}

/// Decodes `[start, end)`, advancing by each slot's width. Undecodable
/// slots are kept as failed rows; the sweep ends at `end` or at the first
/// address that cannot be fetched.
pub fn sweep_range(img: &Image, start: u32, end: u32) -> Sweep {
    let dec = RiscvDecoder::new();
    let mut rows = Vec::new();
    let mut summary = Summary::new();
    let mut pc = start;
    while pc < end {
        let Some((word, width)) = img.fetch(pc) else { break };
        let result = dec.decode(word);
        summary.record(&result);
        let (kind, text) = match &result {
            Ok(inst) => (RowKind::Decoded, fmt_instruction(inst)),
            Err(e) => {
                tracing::debug!(addr = pc, "{e}");
                (RowKind::Failed, e.to_string())
            }
        };
        rows.push(Row { addr: pc, word, size: width.bytes(), kind, text });
        pc = pc.wrapping_add(width.bytes() as u32);
    }
    Sweep { rows, summary, stop: pc }
}

impl Row {
    pub fn render(&self, img: &Image, show_bytes: bool) -> String {
        let mut s = format!("{:#010x}: ", self.addr);
        if show_bytes {
            for i in 0..self.size as u32 {
                s.push_str(&format!("{:02x} ", read_u8(img, self.addr + i).unwrap_or(0)));
            }
            if self.size == 2 {
                s.push_str("      ");
            }
            s.push_str("  ");
        }
        match self.kind {
            RowKind::Decoded => s.push_str(&self.text),
            RowKind::Failed if self.size == 2 => s.push_str(&format!(".half {:#06x}  # {}", self.word, self.text)),
            RowKind::Failed => s.push_str(&format!(".word {:#010x}  # {}", self.word, self.text)),
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_mixes_widths() {
        // c.nop; addi zero, zero, 0; reserved c0 (0x8000); c.li a0, 1
        let bytes = vec![0x01, 0x00, 0x13, 0x00, 0x00, 0x00, 0x00, 0x80, 0x05, 0x45];
        let img = Image::from_bytes(0x100, bytes);
        let sw = sweep_range(&img, 0x100, 0x10a);
        let addrs: Vec<u32> = sw.rows.iter().map(|r| r.addr).collect();
        assert_eq!(addrs, vec![0x100, 0x102, 0x106, 0x108]);
        assert_eq!(sw.rows[0].text, "c.nop");
        assert_eq!(sw.rows[2].kind, RowKind::Failed);
        assert_eq!(sw.rows[3].text, "c.li a0, 1");
        assert_eq!(sw.summary.compressed, 2);
        assert_eq!(sw.summary.standard, 1);
        assert_eq!(sw.summary.failed, 1);
        assert_eq!(sw.stop, 0x10a);
    }

    #[test]
    fn render_failed_slot() {
        let img = Image::from_bytes(0, vec![0x00, 0x80]);
        let sw = sweep_range(&img, 0, 2);
        assert!(sw.rows[0].render(&img, false).starts_with("0x00000000: .half 0x8000"));
        assert!(sw.rows[0].render(&img, true).contains("00 80 "));
    }
}
