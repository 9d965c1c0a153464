//! RV64C compressed decoder.
//!
//! RV32-only encodings (C.FLW, C.JAL, C.FLWSP, C.FSW, C.FSWSP) share their
//! funct3 slots with the RV64 forms and are not produced.

use crate::bits::{C_BIT12, C_FUNCT2_HI, C_FUNCT2_LO, C_FUNCT3, C_QUADRANT, C_RD_RS1, C_RS2};
use crate::decoder::{DecodeError, Decoder, Instruction, Op};
use crate::operands::{Format, Operands};

#[derive(Debug, Default, Clone, Copy)]
pub struct RvcDecoder;

impl RvcDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for RvcDecoder {
    fn decode(&self, word: u32) -> Result<Instruction, DecodeError> {
        let (op, format) = identify(word)?;
        let operands = Operands::compressed(format, word);
        debug_assert!(operands.is_some(), "{op:?} mapped to non-compressed format {format}");
        let operands = operands.ok_or(DecodeError::UnresolvedFormat { word, op, format })?;
        Ok(Instruction::new(word, op, operands))
    }
}

/// First pass: quadrant and funct3, then whatever sub-field the slot needs.
pub fn identify(word: u32) -> Result<(Op, Format), DecodeError> {
    let quadrant = C_QUADRANT.extract(word);
    let funct3 = C_FUNCT3.extract(word);
    match quadrant {
        0 => quadrant0(word, funct3),
        1 => quadrant1(word, funct3),
        2 => quadrant2(word, funct3),
        q => Err(DecodeError::undefined(word, "quadrant", q)),
    }
}

fn quadrant0(word: u32, funct3: u32) -> Result<(Op, Format), DecodeError> {
    let r = match funct3 {
        0 => (Op::CAddi4spn, Format::Ciw),
        1 => (Op::CFld, Format::Cl),
        2 => (Op::CLw, Format::Cl),
        3 => (Op::CLd, Format::Cl),
        4 => return Err(DecodeError::ReservedEncoding { word }),
        5 => (Op::CFsd, Format::Cs),
        6 => (Op::CSw, Format::Cs),
        7 => (Op::CSd, Format::Cs),
        v => return Err(DecodeError::undefined(word, "funct3", v)),
    };
    Ok(r)
}

fn quadrant1(word: u32, funct3: u32) -> Result<(Op, Format), DecodeError> {
    let rd = C_RD_RS1.extract(word);
    let r = match funct3 {
        0 if rd == 0 => (Op::CNop, Format::Ci),
        0 => (Op::CAddi, Format::Ci),
        1 => (Op::CAddiw, Format::Ci),
        2 => (Op::CLi, Format::Ci),
        3 => match rd {
            0 => return Err(DecodeError::undefined(word, "rd", rd)),
            2 => (Op::CAddi16sp, Format::Ci),
            _ => (Op::CLui, Format::Ci),
        },
        4 => misc_alu(word)?,
        5 => (Op::CJ, Format::Cj),
        6 => (Op::CBeqz, Format::Cb),
        7 => (Op::CBnez, Format::Cb),
        v => return Err(DecodeError::undefined(word, "funct3", v)),
    };
    Ok(r)
}

fn misc_alu(word: u32) -> Result<(Op, Format), DecodeError> {
    let r = match C_FUNCT2_HI.extract(word) {
        0 => (Op::CSrli, Format::Cb),
        1 => (Op::CSrai, Format::Cb),
        2 => (Op::CAndi, Format::Cb),
        3 => match C_FUNCT2_LO.extract(word) {
            0 => (Op::CSub, Format::Ca),
            1 => (Op::CXor, Format::Ca),
            2 => (Op::COr, Format::Ca),
            3 => (Op::CAnd, Format::Ca),
            v => return Err(DecodeError::undefined(word, "funct2", v)),
        },
        v => return Err(DecodeError::undefined(word, "funct2", v)),
    };
    Ok(r)
}

fn quadrant2(word: u32, funct3: u32) -> Result<(Op, Format), DecodeError> {
    let r = match funct3 {
        0 => (Op::CSlli, Format::Ci),
        1 => (Op::CFldsp, Format::Ci),
        2 => (Op::CLwsp, Format::Ci),
        3 => (Op::CLdsp, Format::Ci),
        4 => (jump_move_add(word)?, Format::Cr),
        5 => (Op::CFsdsp, Format::Css),
        6 => (Op::CSwsp, Format::Css),
        7 => (Op::CSdsp, Format::Css),
        v => return Err(DecodeError::undefined(word, "funct3", v)),
    };
    Ok(r)
}

// funct4 1000: jr / mv, funct4 1001: ebreak / jalr / add
fn jump_move_add(word: u32) -> Result<Op, DecodeError> {
    let rd = C_RD_RS1.extract(word);
    let rs2 = C_RS2.extract(word);
    if C_BIT12.extract(word) == 0 {
        return Ok(if rs2 != 0 { Op::CMv } else { Op::CJr });
    }
    match (rd, rs2) {
        (0, 0) => Ok(Op::CEbreak),
        (0, _) => Err(DecodeError::IllegalOperands { word, op: Op::CAdd }),
        (_, 0) => Ok(Op::CJalr),
        _ => Ok(Op::CAdd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::ErrorKind;

    fn op(word: u32) -> Op {
        identify(word).unwrap().0
    }

    #[test]
    fn every_identity_has_a_compressed_payload() {
        for word in (0..=0xffffu32).filter(|w| w & 0b11 != 0b11) {
            if let Ok((op, format)) = identify(word) {
                assert!(Operands::compressed(format, word).is_some(), "{op:?} {word:#06x}");
            }
        }
    }

    #[test]
    fn permissive_zero_register_forms() {
        // The all-zero halfword and c.jr with rs1 = x0 are not rejected.
        assert_eq!(identify(0x0000).unwrap(), (Op::CAddi4spn, Format::Ciw));
        assert_eq!(identify(0x8002).unwrap(), (Op::CJr, Format::Cr));
    }

    #[test]
    fn quadrant1_register_zero_tie_breaks() {
        assert_eq!(op(0x0001), Op::CNop);
        assert_eq!(op(0x0085), Op::CAddi); // c.addi x1, 1
        assert_eq!(op(0x6105), Op::CAddi16sp);
        assert_eq!(op(0x6085), Op::CLui);
        let err = identify(0x6005).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedEncoding);
    }

    #[test]
    fn quadrant2_funct3_4() {
        assert_eq!(op(0x9002), Op::CEbreak);
        assert_eq!(op(0x9082), Op::CJalr); // c.jalr x1
        assert_eq!(op(0x908a), Op::CAdd); // c.add x1, x2
        assert_eq!(op(0x8082), Op::CJr); // c.jr x1 (ret)
        assert_eq!(op(0x808a), Op::CMv); // c.mv x1, x2
        let err = identify(0x900a).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalOperands);
        assert_eq!(err.word(), 0x900a);
    }

    #[test]
    fn standard_quadrant_is_not_compressed() {
        let err = identify(0x0003).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UndefinedEncoding { word: 3, field: "quadrant", value: 3 }
        );
    }
}
