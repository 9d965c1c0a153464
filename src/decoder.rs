use serde::{Deserialize, Serialize};

use crate::instructions;
use crate::isa::{rv64::Rv64Decoder, rvc::RvcDecoder};
use crate::operands::{Format, Operands};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Width {
    Compressed = 2,
    Standard = 4,
}

impl Width {
    pub fn bytes(self) -> u8 {
        self as u8
    }

    pub fn is_compressed(self) -> bool {
        matches!(self, Width::Compressed)
    }
}

/// Width of the encoding held in `word`. Must be asked before any other
/// field is read: the two widths share no field layout.
#[inline]
pub fn classify(word: u32) -> Width {
    if (word & 0b11) != 0b11 {
        Width::Compressed
    } else {
        Width::Standard
    }
}

/// Instruction identities. The discriminant indexes
/// [`instructions::TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Op {
    // RV64C
    CAddi4spn,
    CFld,
    CLw,
    CLd,
    CFsd,
    CSw,
    CSd,
    CNop,
    CAddi,
    CAddiw,
    CLi,
    CAddi16sp,
    CLui,
    CSrli,
    CSrai,
    CAndi,
    CSub,
    CXor,
    COr,
    CAnd,
    CJ,
    CBeqz,
    CBnez,
    CSlli,
    CFldsp,
    CLwsp,
    CLdsp,
    CJr,
    CMv,
    CEbreak,
    CJalr,
    CAdd,
    CFsdsp,
    CSwsp,
    CSdsp,

    // RV64 scalar
    Lb,
    Lh,
    Lw,
    Ld,
    Lbu,
    Lhu,
    Lwu,
    Fence,
    Addi,
    Auipc,
    Srliw,
    Sd,
    Lr,
    Add,
    Lui,
    Subw,
    Fmadd,
    Fmsub,
    Fnmsub,
    Fnmadd,
    Fmv,
    Bne,
    Jalr,
    Jal,
    Csrrs,

    // RVV configuration
    Vsetvli,
    Vsetivli,
    Vsetvl,

    // RVV integer
    Vadd,
    Vsub,
    Vrsub,
    Vminu,
    Vmin,
    Vmaxu,
    Vmax,
    Vand,
    Vor,
    Vxor,
    Vrgather,
    Vslideup,
    Vslidedown,
    Vmerge,
    VmvV,
    Vmseq,
    Vmsne,
    Vsll,
    Vsmul,
    Vsrl,
    Vsra,

    // RVV mask / reduction
    Vredsum,
    Vredand,
    Vredor,
    Vredxor,
    VmvSX,
    VmvXS,
    Vcpop,
    Vfirst,
    Vmsbf,
    Vmsof,
    Vmsif,
    Viota,
    Vid,
    Vdivu,
    Vdiv,
    Vmul,
    Vmadd,
    Vmacc,

    // RVV floating point
    Vfadd,
    Vfredusum,
    Vfsub,
    Vfredosum,
    VfmvFS,
    VfmvSF,
    VfmvVF,
    Vfmerge,
    Vmfeq,
    Vmfne,
    Vfdiv,
    Vfmul,
    Vfnmsub,
    Vfmacc,
    Vfnmsac,

    // load-fp / store-fp, decoding not specified yet
    LoadFpUnspecified,
    StoreFpUnspecified,
}

impl Op {
    pub fn mnemonic(self) -> &'static str {
        instructions::describe(self).mnemonic
    }
}

/// A fully decoded instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The 32-bit container as supplied by the caller.
    pub word: u32,
    pub op: Op,
    pub operands: Operands,
    pub compressed: bool,
}

impl Instruction {
    pub(crate) fn new(word: u32, op: Op, operands: Operands) -> Self {
        Self {
            word,
            op,
            operands,
            compressed: classify(word).is_compressed(),
        }
    }

    pub fn format(&self) -> Format {
        self.operands.format()
    }

    pub fn mnemonic(&self) -> &'static str {
        self.op.mnemonic()
    }

    pub fn width(&self) -> Width {
        if self.compressed {
            Width::Compressed
        } else {
            Width::Standard
        }
    }

    /// The meaningful bits of the word: the low half for compressed
    /// encodings, all 32 otherwise.
    pub fn bits(&self) -> u32 {
        if self.compressed {
            self.word & 0xffff
        } else {
            self.word
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    ReservedEncoding,
    UndefinedEncoding,
    IllegalOperands,
    UnresolvedFormat,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("reserved encoding {word:#010x}")]
    ReservedEncoding { word: u32 },
    #[error("undefined encoding {word:#010x}: {field} = {value:#x}")]
    UndefinedEncoding {
        word: u32,
        field: &'static str,
        value: u32,
    },
    #[error("illegal operands for {op:?} in {word:#010x}")]
    IllegalOperands { word: u32, op: Op },
    #[error("no operand format resolved for {op:?} ({format}) in {word:#010x}")]
    UnresolvedFormat { word: u32, op: Op, format: Format },
}

impl DecodeError {
    pub(crate) fn undefined(word: u32, field: &'static str, value: u32) -> Self {
        DecodeError::UndefinedEncoding { word, field, value }
    }

    pub fn word(&self) -> u32 {
        match *self {
            DecodeError::ReservedEncoding { word }
            | DecodeError::UndefinedEncoding { word, .. }
            | DecodeError::IllegalOperands { word, .. }
            | DecodeError::UnresolvedFormat { word, .. } => word,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::ReservedEncoding { .. } => ErrorKind::ReservedEncoding,
            DecodeError::UndefinedEncoding { .. } => ErrorKind::UndefinedEncoding,
            DecodeError::IllegalOperands { .. } => ErrorKind::IllegalOperands,
            DecodeError::UnresolvedFormat { .. } => ErrorKind::UnresolvedFormat,
        }
    }
}

pub trait Decoder {
    fn decode(&self, word: u32) -> Result<Instruction, DecodeError>;
}

/// Full decoder: routes each word to the compressed, scalar or vector
/// decoder by width and major opcode.
#[derive(Debug, Default, Clone, Copy)]
pub struct RiscvDecoder;

impl RiscvDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for RiscvDecoder {
    fn decode(&self, word: u32) -> Result<Instruction, DecodeError> {
        match classify(word) {
            Width::Compressed => RvcDecoder.decode(word),
            Width::Standard => Rv64Decoder.decode(word),
        }
    }
}

pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    RiscvDecoder.decode(word)
}
