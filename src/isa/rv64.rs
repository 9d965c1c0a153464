//! RV64 standard-width scalar decoder.

use crate::bits::{FUNCT3, OPCODE};
use crate::decoder::{DecodeError, Decoder, Instruction, Op};
use crate::isa::rvv::RvvDecoder;
use crate::operands::{Format, Operands};

pub const LOAD: u32 = 0x03;
pub const LOAD_FP: u32 = 0x07;
pub const MISC_MEM: u32 = 0x0f;
pub const OP_IMM: u32 = 0x13;
pub const AUIPC: u32 = 0x17;
pub const OP_IMM_32: u32 = 0x1b;
pub const STORE: u32 = 0x23;
pub const STORE_FP: u32 = 0x27;
pub const AMO: u32 = 0x2f;
pub const OP: u32 = 0x33;
pub const LUI: u32 = 0x37;
pub const OP_32: u32 = 0x3b;
pub const MADD: u32 = 0x43;
pub const MSUB: u32 = 0x47;
pub const NMSUB: u32 = 0x4b;
pub const NMADD: u32 = 0x4f;
pub const OP_FP: u32 = 0x53;
pub const OP_V: u32 = 0x57;
pub const BRANCH: u32 = 0x63;
pub const JALR: u32 = 0x67;
pub const JAL: u32 = 0x6f;
pub const SYSTEM: u32 = 0x73;

/// Every standard-width word. Vector and load-fp/store-fp opcodes are handed
/// to [`RvvDecoder`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Rv64Decoder;

impl Rv64Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for Rv64Decoder {
    fn decode(&self, word: u32) -> Result<Instruction, DecodeError> {
        match OPCODE.extract(word) {
            LOAD_FP | STORE_FP | OP_V => RvvDecoder.decode(word),
            SYSTEM => decode_system(word),
            _ => decode_common(word),
        }
    }
}

/// Major opcode to identity and format. Only the load opcode needs a
/// second look (funct3 picks the access size and signedness).
pub fn identify(word: u32) -> Result<(Op, Format), DecodeError> {
    let opcode = OPCODE.extract(word);
    let r = match opcode {
        LOAD => (load_width(word)?, Format::I),
        MISC_MEM => (Op::Fence, Format::I),
        OP_IMM => (Op::Addi, Format::I),
        AUIPC => (Op::Auipc, Format::U),
        OP_IMM_32 => (Op::Srliw, Format::I),
        STORE => (Op::Sd, Format::S),
        AMO => (Op::Lr, Format::R),
        OP => (Op::Add, Format::R),
        LUI => (Op::Lui, Format::U),
        OP_32 => (Op::Subw, Format::R),
        MADD => (Op::Fmadd, Format::R4),
        MSUB => (Op::Fmsub, Format::R4),
        NMSUB => (Op::Fnmsub, Format::R4),
        NMADD => (Op::Fnmadd, Format::R4),
        OP_FP => (Op::Fmv, Format::R),
        BRANCH => (Op::Bne, Format::B),
        JALR => (Op::Jalr, Format::I),
        JAL => (Op::Jal, Format::J),
        _ => return Err(DecodeError::undefined(word, "opcode", opcode)),
    };
    Ok(r)
}

fn load_width(word: u32) -> Result<Op, DecodeError> {
    let op = match FUNCT3.extract(word) {
        0 => Op::Lb,
        1 => Op::Lh,
        2 => Op::Lw,
        3 => Op::Ld,
        4 => Op::Lbu,
        5 => Op::Lhu,
        6 => Op::Lwu,
        v => return Err(DecodeError::undefined(word, "funct3", v)),
    };
    Ok(op)
}

pub fn decode_common(word: u32) -> Result<Instruction, DecodeError> {
    let (op, format) = identify(word)?;
    let operands = Operands::standard(format, word);
    debug_assert!(operands.is_some(), "{op:?} mapped to non-standard format {format}");
    let operands = operands.ok_or(DecodeError::UnresolvedFormat { word, op, format })?;
    Ok(Instruction::new(word, op, operands))
}

/// The system opcode carries a single recognised identity, csrrs.
pub fn decode_system(word: u32) -> Result<Instruction, DecodeError> {
    match OPCODE.extract(word) {
        SYSTEM => {
            let operands = Operands::standard(Format::I, word).ok_or(
                DecodeError::UnresolvedFormat {
                    word,
                    op: Op::Csrrs,
                    format: Format::I,
                },
            )?;
            Ok(Instruction::new(word, Op::Csrrs, operands))
        }
        v => Err(DecodeError::undefined(word, "opcode", v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(funct3: u32) -> u32 {
        (funct3 << 12) | LOAD
    }

    #[test]
    fn load_funct3_table() {
        let expect = [Op::Lb, Op::Lh, Op::Lw, Op::Ld, Op::Lbu, Op::Lhu, Op::Lwu];
        for (f3, op) in expect.into_iter().enumerate() {
            assert_eq!(identify(load(f3 as u32)).unwrap(), (op, Format::I));
        }
        assert!(identify(load(7)).is_err());
    }

    #[test]
    fn unknown_opcode_is_undefined() {
        let err = decode_common(0x0000_007b).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UndefinedEncoding { word: 0x7b, field: "opcode", value: 0x7b }
        );
    }

    #[test]
    fn system_is_csrrs() {
        // csrrs a0, cycle, zero => 0xc0002573
        let inst = Rv64Decoder.decode(0xc000_2573).unwrap();
        assert_eq!(inst.op, Op::Csrrs);
        assert_eq!(inst.format(), Format::I);
        assert!(decode_system(0x0000_0013).is_err());
    }

    #[test]
    fn every_identity_has_a_standard_payload() {
        for opcode in (0..0x80u32).filter(|o| o & 0b11 == 0b11) {
            for funct3 in 0..8 {
                let word = (funct3 << 12) | opcode;
                if let Ok((op, format)) = identify(word) {
                    assert!(Operands::standard(format, word).is_some(), "{op:?} {word:#x}");
                }
            }
        }
    }

    #[test]
    fn shared_opcodes_route_to_vector_decoder() {
        assert_eq!(Rv64Decoder.decode(0x0000_0007).unwrap().op, Op::LoadFpUnspecified);
        assert_eq!(Rv64Decoder.decode(0x0000_0027).unwrap().op, Op::StoreFpUnspecified);
        // vadd.vv v1, v2, v3
        let vadd = (1 << 25) | (2 << 20) | (3 << 15) | (1 << 7) | OP_V;
        assert_eq!(Rv64Decoder.decode(vadd).unwrap().op, Op::Vadd);
        assert_eq!(Rv64Decoder.decode(0x0000_0013).unwrap().op, Op::Addi);
    }
}
