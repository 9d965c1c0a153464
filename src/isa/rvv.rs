//! Vector decoder, plus the load-fp/store-fp opcodes it shares with the
//! scalar floating-point extension.
//!
//! OP-V (0x57) is split by funct3 into the configuration family (7) and
//! seven operand formats (0..=6). Within each format family funct6 picks the
//! operation; a few funct6 values are further split on a register field.

use crate::bits::{FUNCT3, FUNCT6, OPCODE, RS2, VM};
use crate::decoder::{DecodeError, Decoder, Instruction, Op};
use crate::isa::rv64::{LOAD_FP, OP_V, STORE_FP};
use crate::operands::{Operands, UnspecifiedFields, VectorConfig, VectorImm, VectorScalar, VectorVector};

const OPIVV: u32 = 0;
const OPFVV: u32 = 1;
const OPMVV: u32 = 2;
const OPIVI: u32 = 3;
const OPIVX: u32 = 4;
const OPFVF: u32 = 5;
const OPMVX: u32 = 6;
const OPCFG: u32 = 7;

#[derive(Debug, Default, Clone, Copy)]
pub struct RvvDecoder;

impl RvvDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for RvvDecoder {
    fn decode(&self, word: u32) -> Result<Instruction, DecodeError> {
        match OPCODE.extract(word) {
            LOAD_FP => Ok(unspecified(word, Op::LoadFpUnspecified)),
            STORE_FP => Ok(unspecified(word, Op::StoreFpUnspecified)),
            OP_V => decode_op_v(word),
            v => Err(DecodeError::undefined(word, "opcode", v)),
        }
    }
}

// Scalar FP and vector loads/stores overlap here; both resolve to a
// placeholder identity until their decoding is specified.
fn unspecified(word: u32, op: Op) -> Instruction {
    Instruction::new(word, op, Operands::Unspecified(UnspecifiedFields::from_word(word)))
}

fn decode_op_v(word: u32) -> Result<Instruction, DecodeError> {
    let funct3 = FUNCT3.extract(word);
    if funct3 == OPCFG {
        return decode_config(word);
    }
    let operands = match funct3 {
        OPIVV => Operands::Opivv(VectorVector::from_word(word)),
        OPFVV => Operands::Opfvv(VectorVector::from_word(word)),
        OPMVV => Operands::Opmvv(VectorVector::from_word(word)),
        OPIVI => Operands::Opivi(VectorImm::from_word(word)),
        OPIVX => Operands::Opivx(VectorScalar::from_word(word)),
        OPFVF => Operands::Opfvf(VectorScalar::from_word(word)),
        OPMVX => Operands::Opmvx(VectorScalar::from_word(word)),
        v => return Err(DecodeError::undefined(word, "funct3", v)),
    };
    let op = match operands {
        Operands::Opivv(_) | Operands::Opivx(_) | Operands::Opivi(_) => integer_op(word)?,
        Operands::Opmvv(_) | Operands::Opmvx(_) => mask_op(word, &operands)?,
        _ => float_op(word, &operands)?,
    };
    Ok(Instruction::new(word, op, operands))
}

fn decode_config(word: u32) -> Result<Instruction, DecodeError> {
    let cfg = VectorConfig::from_word(word);
    let op = match cfg.kind {
        0 | 1 => Op::Vsetvli,
        2 => Op::Vsetvl,
        3 => Op::Vsetivli,
        v => return Err(DecodeError::undefined(word, "cfg", v as u32)),
    };
    Ok(Instruction::new(word, op, Operands::Opcfg(cfg)))
}

// OPIVV / OPIVX / OPIVI
fn integer_op(word: u32) -> Result<Op, DecodeError> {
    let funct6 = FUNCT6.extract(word);
    let op = match funct6 {
        0x00 => Op::Vadd,
        0x02 => Op::Vsub,
        0x03 => Op::Vrsub,
        0x04 => Op::Vminu,
        0x05 => Op::Vmin,
        0x06 => Op::Vmaxu,
        0x07 => Op::Vmax,
        0x09 => Op::Vand,
        0x0a => Op::Vor,
        0x0b => Op::Vxor,
        0x0c => Op::Vrgather,
        0x0e => Op::Vslideup,
        0x0f => Op::Vslidedown,
        // vm=0 merges under v0; vm=1 with vs2=0 is the plain move
        0x17 => match (VM.extract(word), RS2.extract(word)) {
            (0, _) => Op::Vmerge,
            (_, 0) => Op::VmvV,
            (_, v) => return Err(DecodeError::undefined(word, "vs2", v)),
        },
        0x18 => Op::Vmseq,
        0x19 => Op::Vmsne,
        0x25 => Op::Vsll,
        0x27 => Op::Vsmul,
        0x28 => Op::Vsrl,
        0x29 => Op::Vsra,
        v => return Err(DecodeError::undefined(word, "funct6", v)),
    };
    Ok(op)
}

// OPMVV / OPMVX
fn mask_op(word: u32, operands: &Operands) -> Result<Op, DecodeError> {
    let funct6 = FUNCT6.extract(word);
    let op = match funct6 {
        0x00 => Op::Vredsum,
        0x01 => Op::Vredand,
        0x02 => Op::Vredor,
        0x03 => Op::Vredxor,
        0x10 => match operands {
            Operands::Opmvx(v) => match v.vs2 {
                0 => Op::VmvSX,
                r => return Err(DecodeError::undefined(word, "vs2", r as u32)),
            },
            Operands::Opmvv(v) => match v.vs1 {
                0x00 => Op::VmvXS,
                0x10 => Op::Vcpop,
                0x11 => Op::Vfirst,
                r => return Err(DecodeError::undefined(word, "vs1", r as u32)),
            },
            _ => return Err(DecodeError::undefined(word, "funct6", funct6)),
        },
        0x14 => match operands {
            Operands::Opmvv(v) => match v.vs1 {
                0x01 => Op::Vmsbf,
                0x02 => Op::Vmsof,
                0x03 => Op::Vmsif,
                0x10 => Op::Viota,
                0x11 => Op::Vid,
                r => return Err(DecodeError::undefined(word, "vs1", r as u32)),
            },
            _ => return Err(DecodeError::undefined(word, "funct6", funct6)),
        },
        0x20 => Op::Vdivu,
        0x21 => Op::Vdiv,
        0x25 => Op::Vmul,
        0x29 => Op::Vmadd,
        0x2d => Op::Vmacc,
        v => return Err(DecodeError::undefined(word, "funct6", v)),
    };
    Ok(op)
}

// OPFVV / OPFVF
fn float_op(word: u32, operands: &Operands) -> Result<Op, DecodeError> {
    let funct6 = FUNCT6.extract(word);
    let op = match funct6 {
        0x00 => Op::Vfadd,
        0x01 => Op::Vfredusum,
        0x02 => Op::Vfsub,
        0x03 => Op::Vfredosum,
        // VWFUNARY0 (vfmv.f.s, vs1 = 0) / VRFUNARY0 (vfmv.s.f, vs2 = 0)
        0x10 => match operands {
            Operands::Opfvv(v) => match v.vs1 {
                0 => Op::VfmvFS,
                r => return Err(DecodeError::undefined(word, "vs1", r as u32)),
            },
            Operands::Opfvf(v) => match v.vs2 {
                0 => Op::VfmvSF,
                r => return Err(DecodeError::undefined(word, "vs2", r as u32)),
            },
            _ => return Err(DecodeError::undefined(word, "funct6", funct6)),
        },
        0x17 => match operands {
            Operands::Opfvf(v) if v.vm == 0 => Op::Vfmerge,
            Operands::Opfvf(v) if v.vs2 == 0 => Op::VfmvVF,
            Operands::Opfvf(v) => return Err(DecodeError::undefined(word, "vs2", v.vs2 as u32)),
            _ => return Err(DecodeError::undefined(word, "funct6", funct6)),
        },
        0x18 => Op::Vmfeq,
        0x1c => Op::Vmfne,
        0x20 => Op::Vfdiv,
        0x24 => Op::Vfmul,
        0x2b => Op::Vfnmsub,
        0x2c => Op::Vfmacc,
        0x2f => Op::Vfnmsac,
        v => return Err(DecodeError::undefined(word, "funct6", v)),
    };
    Ok(op)
}
