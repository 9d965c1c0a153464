//! Encoding formats and their operand payloads.
//!
//! Payload structs hold raw field values exactly as they sit in the word.
//! Signed immediates are computed on demand, except for the compressed
//! branch and jump formats which also store the reassembled offset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bits::{self, sign_extend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Format {
    R,
    R4,
    I,
    S,
    B,
    U,
    J,
    Cr,
    Ci,
    Css,
    Ciw,
    Cl,
    Cs,
    Ca,
    Cb,
    Cj,
    Opivv,
    Opfvv,
    Opmvv,
    Opivi,
    Opivx,
    Opfvf,
    Opmvx,
    Opcfg,
    Unspecified,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::R => "R",
            Format::R4 => "R4",
            Format::I => "I",
            Format::S => "S",
            Format::B => "B",
            Format::U => "U",
            Format::J => "J",
            Format::Cr => "CR",
            Format::Ci => "CI",
            Format::Css => "CSS",
            Format::Ciw => "CIW",
            Format::Cl => "CL",
            Format::Cs => "CS",
            Format::Ca => "CA",
            Format::Cb => "CB",
            Format::Cj => "CJ",
            Format::Opivv => "OPIVV",
            Format::Opfvv => "OPFVV",
            Format::Opmvv => "OPMVV",
            Format::Opivi => "OPIVI",
            Format::Opivx => "OPIVX",
            Format::Opfvf => "OPFVF",
            Format::Opmvx => "OPMVX",
            Format::Opcfg => "OPCFG",
            Format::Unspecified => "UNSPECIFIED",
        }
    }

    pub fn is_compressed(self) -> bool {
        matches!(
            self,
            Format::Cr
                | Format::Ci
                | Format::Css
                | Format::Ciw
                | Format::Cl
                | Format::Cs
                | Format::Ca
                | Format::Cb
                | Format::Cj
        )
    }

    pub fn is_vector(self) -> bool {
        matches!(
            self,
            Format::Opivv
                | Format::Opfvv
                | Format::Opmvv
                | Format::Opivi
                | Format::Opivx
                | Format::Opfvf
                | Format::Opmvx
                | Format::Opcfg
        )
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

//  31 ... 25 24 ... 20 19 ... 15 14 .. 12 11 ... 7 6 ... 0
// |  funct7  |  rs2   |  rs1    | funct3 |  rd    | opcode |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RType {
    pub rd: u8,
    pub funct3: u8,
    pub rs1: u8,
    pub rs2: u8,
    pub funct7: u8,
}

impl RType {
    pub fn from_word(word: u32) -> Self {
        Self {
            rd: bits::RD.extract(word) as u8,
            funct3: bits::FUNCT3.extract(word) as u8,
            rs1: bits::RS1.extract(word) as u8,
            rs2: bits::RS2.extract(word) as u8,
            funct7: bits::FUNCT7.extract(word) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct R4Type {
    pub rd: u8,
    pub funct3: u8,
    pub rs1: u8,
    pub rs2: u8,
    pub funct2: u8,
    pub rs3: u8,
}

impl R4Type {
    pub fn from_word(word: u32) -> Self {
        Self {
            rd: bits::RD.extract(word) as u8,
            funct3: bits::FUNCT3.extract(word) as u8,
            rs1: bits::RS1.extract(word) as u8,
            rs2: bits::RS2.extract(word) as u8,
            funct2: bits::FUNCT2.extract(word) as u8,
            rs3: bits::RS3.extract(word) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IType {
    pub rd: u8,
    pub funct3: u8,
    pub rs1: u8,
    /// imm[11:0], unshifted from bits 31:20
    pub imm: u32,
}

impl IType {
    pub fn from_word(word: u32) -> Self {
        Self {
            rd: bits::RD.extract(word) as u8,
            funct3: bits::FUNCT3.extract(word) as u8,
            rs1: bits::RS1.extract(word) as u8,
            imm: bits::IMM_I.extract(word),
        }
    }

    pub fn imm(&self) -> i32 {
        sign_extend(self.imm, 12)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SType {
    /// imm[4:0]
    pub imm_lo: u32,
    pub funct3: u8,
    pub rs1: u8,
    pub rs2: u8,
    /// imm[11:5]
    pub imm_hi: u32,
}

impl SType {
    pub fn from_word(word: u32) -> Self {
        Self {
            imm_lo: bits::IMM_S_LO.extract(word),
            funct3: bits::FUNCT3.extract(word) as u8,
            rs1: bits::RS1.extract(word) as u8,
            rs2: bits::RS2.extract(word) as u8,
            imm_hi: bits::IMM_S_HI.extract(word),
        }
    }

    pub fn imm(&self) -> i32 {
        sign_extend((self.imm_hi << 5) | self.imm_lo, 12)
    }
}

//  31 | 30 ... 25 | 24..20 | 19..15 | 14..12 | 11 ... 8 | 7  | 6..0
// [12]| imm[10:5] |  rs2   |  rs1   | funct3 | imm[4:1] |[11]| opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BType {
    /// imm[4:1|11], raw bits 11:7
    pub imm_lo: u32,
    pub funct3: u8,
    pub rs1: u8,
    pub rs2: u8,
    /// imm[12|10:5], raw bits 31:25
    pub imm_hi: u32,
}

impl BType {
    pub fn from_word(word: u32) -> Self {
        Self {
            imm_lo: bits::IMM_S_LO.extract(word),
            funct3: bits::FUNCT3.extract(word) as u8,
            rs1: bits::RS1.extract(word) as u8,
            rs2: bits::RS2.extract(word) as u8,
            imm_hi: bits::IMM_S_HI.extract(word),
        }
    }

    pub fn offset(&self) -> i32 {
        let v = ((self.imm_hi >> 6) << 12)
            | ((self.imm_lo & 1) << 11)
            | ((self.imm_hi & 0x3f) << 5)
            | (self.imm_lo & 0x1e);
        sign_extend(v, 13)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UType {
    pub rd: u8,
    /// imm[31:12]
    pub imm: u32,
}

impl UType {
    pub fn from_word(word: u32) -> Self {
        Self {
            rd: bits::RD.extract(word) as u8,
            imm: bits::IMM_U.extract(word),
        }
    }

    /// The immediate placed in the upper 20 bits.
    pub fn value(&self) -> i32 {
        (self.imm << 12) as i32
    }
}

//   31  | 30 ... 21 |  20  | 19 ... 12 | 11..7 | 6..0
// [20]  | imm[10:1] | [11] | imm[19:12]|  rd   | opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JType {
    pub rd: u8,
    /// raw bits 31:12
    pub imm: u32,
}

impl JType {
    pub fn from_word(word: u32) -> Self {
        Self {
            rd: bits::RD.extract(word) as u8,
            imm: bits::IMM_U.extract(word),
        }
    }

    pub fn offset(&self) -> i32 {
        let raw = self.imm;
        let v = ((raw >> 19) << 20)
            | ((raw & 0xff) << 12)
            | (((raw >> 8) & 1) << 11)
            | (((raw >> 9) & 0x3ff) << 1);
        sign_extend(v, 21)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrType {
    pub funct4: u8,
    pub rd_rs1: u8,
    pub rs2: u8,
}

impl CrType {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct4: bits::C_FUNCT4.extract(word) as u8,
            rd_rs1: bits::C_RD_RS1.extract(word) as u8,
            rs2: bits::C_RS2.extract(word) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiType {
    pub funct3: u8,
    /// bit 12
    pub imm_hi: u32,
    pub rd_rs1: u8,
    /// bits 6:2
    pub imm_lo: u32,
}

impl CiType {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct3: bits::C_FUNCT3.extract(word) as u8,
            imm_hi: bits::C_BIT12.extract(word),
            rd_rs1: bits::C_RD_RS1.extract(word) as u8,
            imm_lo: bits::C_RS2.extract(word),
        }
    }

    /// `imm_hi:imm_lo` as a signed 6-bit value.
    pub fn imm(&self) -> i32 {
        sign_extend(self.uimm(), 6)
    }

    /// `imm_hi:imm_lo` unsigned, the shift amount of c.slli.
    pub fn uimm(&self) -> u32 {
        (self.imm_hi << 5) | self.imm_lo
    }

    /// c.lwsp: offset[5] = bit 12, offset[4:2|7:6] = bits 6:2.
    pub fn lwsp_offset(&self) -> u32 {
        (self.imm_hi << 5) | (((self.imm_lo >> 2) & 0x7) << 2) | ((self.imm_lo & 0x3) << 6)
    }

    /// c.ldsp / c.fldsp: offset[5] = bit 12, offset[4:3|8:6] = bits 6:2.
    pub fn ldsp_offset(&self) -> u32 {
        (self.imm_hi << 5) | (((self.imm_lo >> 3) & 0x3) << 3) | ((self.imm_lo & 0x7) << 6)
    }

    /// c.addi16sp: nzimm[9] = bit 12, nzimm[4|6|8:7|5] = bits 6:2.
    pub fn addi16sp_imm(&self) -> i32 {
        let lo = self.imm_lo;
        let v = (self.imm_hi << 9)
            | (((lo >> 4) & 1) << 4)
            | (((lo >> 3) & 1) << 6)
            | (((lo >> 1) & 0x3) << 7)
            | ((lo & 1) << 5);
        sign_extend(v, 10)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssType {
    pub funct3: u8,
    /// bits 12:7
    pub imm: u32,
    pub rs2: u8,
}

impl CssType {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct3: bits::C_FUNCT3.extract(word) as u8,
            imm: bits::C_IMM_12_7.extract(word),
            rs2: bits::C_RS2.extract(word) as u8,
        }
    }

    /// c.swsp: offset[5:2|7:6] = bits 12:7.
    pub fn swsp_offset(&self) -> u32 {
        (((self.imm >> 2) & 0xf) << 2) | ((self.imm & 0x3) << 6)
    }

    /// c.sdsp / c.fsdsp: offset[5:3|8:6] = bits 12:7.
    pub fn sdsp_offset(&self) -> u32 {
        (((self.imm >> 3) & 0x7) << 3) | ((self.imm & 0x7) << 6)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiwType {
    pub funct3: u8,
    /// bits 12:5
    pub imm: u32,
    /// rd' (x8..x15 encoded as 0..7)
    pub rd_p: u8,
}

impl CiwType {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct3: bits::C_FUNCT3.extract(word) as u8,
            imm: bits::C_IMM_12_5.extract(word),
            rd_p: bits::C_RDP.extract(word) as u8,
        }
    }

    /// nzuimm[5:4|9:6|2|3] = bits 12:5.
    pub fn nzuimm(&self) -> u32 {
        let v = self.imm;
        (((v >> 6) & 0x3) << 4) | (((v >> 2) & 0xf) << 6) | (((v >> 1) & 1) << 2) | ((v & 1) << 3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClType {
    pub funct3: u8,
    /// bits 12:10
    pub imm_hi: u32,
    pub rs1_p: u8,
    /// bits 6:5
    pub imm_lo: u32,
    pub rd_p: u8,
}

impl ClType {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct3: bits::C_FUNCT3.extract(word) as u8,
            imm_hi: bits::C_IMM_12_10.extract(word),
            rs1_p: bits::C_RS1P.extract(word) as u8,
            imm_lo: bits::C_IMM_6_5.extract(word),
            rd_p: bits::C_RDP.extract(word) as u8,
        }
    }

    /// c.lw: offset[5:3] = bits 12:10, offset[2|6] = bits 6:5.
    pub fn word_offset(&self) -> u32 {
        word_offset(self.imm_hi, self.imm_lo)
    }

    /// c.ld / c.fld: offset[5:3] = bits 12:10, offset[7:6] = bits 6:5.
    pub fn dword_offset(&self) -> u32 {
        dword_offset(self.imm_hi, self.imm_lo)
    }
}

fn word_offset(hi: u32, lo: u32) -> u32 {
    (hi << 3) | (((lo >> 1) & 1) << 2) | ((lo & 1) << 6)
}

fn dword_offset(hi: u32, lo: u32) -> u32 {
    (hi << 3) | (lo << 6)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsType {
    pub funct3: u8,
    pub imm_hi: u32,
    pub rs1_p: u8,
    pub imm_lo: u32,
    pub rs2_p: u8,
}

impl CsType {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct3: bits::C_FUNCT3.extract(word) as u8,
            imm_hi: bits::C_IMM_12_10.extract(word),
            rs1_p: bits::C_RS1P.extract(word) as u8,
            imm_lo: bits::C_IMM_6_5.extract(word),
            rs2_p: bits::C_RDP.extract(word) as u8,
        }
    }

    pub fn word_offset(&self) -> u32 {
        word_offset(self.imm_hi, self.imm_lo)
    }

    pub fn dword_offset(&self) -> u32 {
        dword_offset(self.imm_hi, self.imm_lo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaType {
    pub funct6: u8,
    pub rd_rs1_p: u8,
    pub funct2: u8,
    pub rs2_p: u8,
}

impl CaType {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct6: bits::C_FUNCT6.extract(word) as u8,
            rd_rs1_p: bits::C_RS1P.extract(word) as u8,
            funct2: bits::C_FUNCT2_LO.extract(word) as u8,
            rs2_p: bits::C_RDP.extract(word) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CbType {
    pub funct3: u8,
    /// bits 12:10
    pub offset_hi: u32,
    pub rs1_p: u8,
    /// bits 6:2
    pub offset_lo: u32,
    /// Reassembled branch offset, 9-bit signed.
    pub offset: i32,
}

impl CbType {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct3: bits::C_FUNCT3.extract(word) as u8,
            offset_hi: bits::C_IMM_12_10.extract(word),
            rs1_p: bits::C_RS1P.extract(word) as u8,
            offset_lo: bits::C_RS2.extract(word),
            offset: bits::cb_offset(word),
        }
    }

    /// Shift amount / immediate of the CB-format ALU forms: bit 12 over
    /// bits 6:2, signed 6-bit.
    pub fn imm(&self) -> i32 {
        sign_extend(self.shamt(), 6)
    }

    /// The same bits unsigned: the shift amount of c.srli / c.srai.
    pub fn shamt(&self) -> u32 {
        ((self.offset_hi >> 2) << 5) | self.offset_lo
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CjType {
    pub funct3: u8,
    /// bits 12:2
    pub target: u32,
    /// Reassembled jump offset, 12-bit signed.
    pub offset: i32,
}

impl CjType {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct3: bits::C_FUNCT3.extract(word) as u8,
            target: bits::C_IMM_12_2.extract(word),
            offset: bits::cj_offset(word),
        }
    }
}

// Vector formats share the 32-bit positions:
//  31 .. 26 | 25 | 24..20 | 19..15     | 14..12 | 11..7 | 6..0
//  funct6   | vm |  vs2   | vs1/rs1/imm| funct3 | vd/rd | opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorVector {
    pub funct6: u8,
    pub vm: u8,
    pub vs2: u8,
    pub vs1: u8,
    /// vd, or rd for the forms writing a scalar register
    pub vd: u8,
}

impl VectorVector {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct6: bits::FUNCT6.extract(word) as u8,
            vm: bits::VM.extract(word) as u8,
            vs2: bits::RS2.extract(word) as u8,
            vs1: bits::RS1.extract(word) as u8,
            vd: bits::RD.extract(word) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorScalar {
    pub funct6: u8,
    pub vm: u8,
    pub vs2: u8,
    pub rs1: u8,
    pub vd: u8,
}

impl VectorScalar {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct6: bits::FUNCT6.extract(word) as u8,
            vm: bits::VM.extract(word) as u8,
            vs2: bits::RS2.extract(word) as u8,
            rs1: bits::RS1.extract(word) as u8,
            vd: bits::RD.extract(word) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorImm {
    pub funct6: u8,
    pub vm: u8,
    pub vs2: u8,
    /// simm5/uimm5, raw bits 19:15
    pub imm: u8,
    pub vd: u8,
}

impl VectorImm {
    pub fn from_word(word: u32) -> Self {
        Self {
            funct6: bits::FUNCT6.extract(word) as u8,
            vm: bits::VM.extract(word) as u8,
            vs2: bits::RS2.extract(word) as u8,
            imm: bits::RS1.extract(word) as u8,
            vd: bits::RD.extract(word) as u8,
        }
    }

    pub fn simm(&self) -> i32 {
        sign_extend(self.imm as u32, 5)
    }

    pub fn uimm(&self) -> u32 {
        self.imm as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorConfig {
    /// bits 31:30
    pub kind: u8,
    /// bits 30:20; vsetivli uses the low ten
    pub zimm: u32,
    /// bits 24:20, the vtype register of vsetvl
    pub rs2: u8,
    /// rs1, or uimm5 for vsetivli
    pub rs1: u8,
    pub rd: u8,
}

impl VectorConfig {
    pub fn from_word(word: u32) -> Self {
        Self {
            kind: bits::CFG_KIND.extract(word) as u8,
            zimm: bits::CFG_ZIMM.extract(word),
            rs2: bits::RS2.extract(word) as u8,
            rs1: bits::RS1.extract(word) as u8,
            rd: bits::RD.extract(word) as u8,
        }
    }
}

/// Positional fields of a load-fp/store-fp word whose decoding is not
/// specified yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspecifiedFields {
    pub opcode: u8,
    pub width: u8,
    pub rs1: u8,
    pub rs2: u8,
    pub rd: u8,
}

impl UnspecifiedFields {
    pub fn from_word(word: u32) -> Self {
        Self {
            opcode: bits::OPCODE.extract(word) as u8,
            width: bits::FUNCT3.extract(word) as u8,
            rs1: bits::RS1.extract(word) as u8,
            rs2: bits::RS2.extract(word) as u8,
            rd: bits::RD.extract(word) as u8,
        }
    }
}

/// Operand payload, one variant per [`Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operands {
    R(RType),
    R4(R4Type),
    I(IType),
    S(SType),
    B(BType),
    U(UType),
    J(JType),
    Cr(CrType),
    Ci(CiType),
    Css(CssType),
    Ciw(CiwType),
    Cl(ClType),
    Cs(CsType),
    Ca(CaType),
    Cb(CbType),
    Cj(CjType),
    Opivv(VectorVector),
    Opfvv(VectorVector),
    Opmvv(VectorVector),
    Opivi(VectorImm),
    Opivx(VectorScalar),
    Opfvf(VectorScalar),
    Opmvx(VectorScalar),
    Opcfg(VectorConfig),
    Unspecified(UnspecifiedFields),
}

impl Operands {
    pub fn format(&self) -> Format {
        match self {
            Operands::R(_) => Format::R,
            Operands::R4(_) => Format::R4,
            Operands::I(_) => Format::I,
            Operands::S(_) => Format::S,
            Operands::B(_) => Format::B,
            Operands::U(_) => Format::U,
            Operands::J(_) => Format::J,
            Operands::Cr(_) => Format::Cr,
            Operands::Ci(_) => Format::Ci,
            Operands::Css(_) => Format::Css,
            Operands::Ciw(_) => Format::Ciw,
            Operands::Cl(_) => Format::Cl,
            Operands::Cs(_) => Format::Cs,
            Operands::Ca(_) => Format::Ca,
            Operands::Cb(_) => Format::Cb,
            Operands::Cj(_) => Format::Cj,
            Operands::Opivv(_) => Format::Opivv,
            Operands::Opfvv(_) => Format::Opfvv,
            Operands::Opmvv(_) => Format::Opmvv,
            Operands::Opivi(_) => Format::Opivi,
            Operands::Opivx(_) => Format::Opivx,
            Operands::Opfvf(_) => Format::Opfvf,
            Operands::Opmvx(_) => Format::Opmvx,
            Operands::Opcfg(_) => Format::Opcfg,
            Operands::Unspecified(_) => Format::Unspecified,
        }
    }

    /// Extracts the payload of `format` from `word`.
    ///
    /// Returns `None` for the compressed and vector formats: their payloads
    /// are built by the decoders that own those formats.
    pub fn standard(format: Format, word: u32) -> Option<Self> {
        let ops = match format {
            Format::R => Operands::R(RType::from_word(word)),
            Format::R4 => Operands::R4(R4Type::from_word(word)),
            Format::I => Operands::I(IType::from_word(word)),
            Format::S => Operands::S(SType::from_word(word)),
            Format::B => Operands::B(BType::from_word(word)),
            Format::U => Operands::U(UType::from_word(word)),
            Format::J => Operands::J(JType::from_word(word)),
            _ => return None,
        };
        Some(ops)
    }

    /// Extracts the payload of a compressed `format` from `word`.
    pub fn compressed(format: Format, word: u32) -> Option<Self> {
        let ops = match format {
            Format::Cr => Operands::Cr(CrType::from_word(word)),
            Format::Ci => Operands::Ci(CiType::from_word(word)),
            Format::Css => Operands::Css(CssType::from_word(word)),
            Format::Ciw => Operands::Ciw(CiwType::from_word(word)),
            Format::Cl => Operands::Cl(ClType::from_word(word)),
            Format::Cs => Operands::Cs(CsType::from_word(word)),
            Format::Ca => Operands::Ca(CaType::from_word(word)),
            Format::Cb => Operands::Cb(CbType::from_word(word)),
            Format::Cj => Operands::Cj(CjType::from_word(word)),
            _ => return None,
        };
        Some(ops)
    }
}
