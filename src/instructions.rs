//! Static identity table: one row per [`Op`], in discriminant order.

use crate::decoder::Op;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpClass {
    Compressed,
    Base,
    Float,
    VectorConfig,
    /// Vector op whose assembly suffix follows the operand format (`.vv`, `.vx`, ...)
    VectorArith,
    VectorReduction,
    /// Vector op with a fixed, complete mnemonic
    VectorFixed,
    Unspecified,
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub op: Op,
    pub mnemonic: &'static str,
    pub class: OpClass,
}

pub static TABLE: &[InstrDesc] = &[
    InstrDesc {
        op: Op::CAddi4spn,
        mnemonic: "c.addi4spn",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CFld,
        mnemonic: "c.fld",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CLw,
        mnemonic: "c.lw",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CLd,
        mnemonic: "c.ld",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CFsd,
        mnemonic: "c.fsd",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CSw,
        mnemonic: "c.sw",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CSd,
        mnemonic: "c.sd",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CNop,
        mnemonic: "c.nop",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CAddi,
        mnemonic: "c.addi",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CAddiw,
        mnemonic: "c.addiw",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CLi,
        mnemonic: "c.li",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CAddi16sp,
        mnemonic: "c.addi16sp",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CLui,
        mnemonic: "c.lui",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CSrli,
        mnemonic: "c.srli",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CSrai,
        mnemonic: "c.srai",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CAndi,
        mnemonic: "c.andi",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CSub,
        mnemonic: "c.sub",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CXor,
        mnemonic: "c.xor",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::COr,
        mnemonic: "c.or",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CAnd,
        mnemonic: "c.and",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CJ,
        mnemonic: "c.j",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CBeqz,
        mnemonic: "c.beqz",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CBnez,
        mnemonic: "c.bnez",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CSlli,
        mnemonic: "c.slli",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CFldsp,
        mnemonic: "c.fldsp",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CLwsp,
        mnemonic: "c.lwsp",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CLdsp,
        mnemonic: "c.ldsp",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CJr,
        mnemonic: "c.jr",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CMv,
        mnemonic: "c.mv",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CEbreak,
        mnemonic: "c.ebreak",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CJalr,
        mnemonic: "c.jalr",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CAdd,
        mnemonic: "c.add",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CFsdsp,
        mnemonic: "c.fsdsp",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CSwsp,
        mnemonic: "c.swsp",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::CSdsp,
        mnemonic: "c.sdsp",
        class: OpClass::Compressed,
    },
    InstrDesc {
        op: Op::Lb,
        mnemonic: "lb",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Lh,
        mnemonic: "lh",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Lw,
        mnemonic: "lw",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Ld,
        mnemonic: "ld",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Lbu,
        mnemonic: "lbu",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Lhu,
        mnemonic: "lhu",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Lwu,
        mnemonic: "lwu",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Fence,
        mnemonic: "fence",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Addi,
        mnemonic: "addi",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Auipc,
        mnemonic: "auipc",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Srliw,
        mnemonic: "srliw",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Sd,
        mnemonic: "sd",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Lr,
        mnemonic: "lr",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Add,
        mnemonic: "add",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Lui,
        mnemonic: "lui",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Subw,
        mnemonic: "subw",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Fmadd,
        mnemonic: "fmadd",
        class: OpClass::Float,
    },
    InstrDesc {
        op: Op::Fmsub,
        mnemonic: "fmsub",
        class: OpClass::Float,
    },
    InstrDesc {
        op: Op::Fnmsub,
        mnemonic: "fnmsub",
        class: OpClass::Float,
    },
    InstrDesc {
        op: Op::Fnmadd,
        mnemonic: "fnmadd",
        class: OpClass::Float,
    },
    InstrDesc {
        op: Op::Fmv,
        mnemonic: "fmv",
        class: OpClass::Float,
    },
    InstrDesc {
        op: Op::Bne,
        mnemonic: "bne",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Jalr,
        mnemonic: "jalr",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Jal,
        mnemonic: "jal",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Csrrs,
        mnemonic: "csrrs",
        class: OpClass::Base,
    },
    InstrDesc {
        op: Op::Vsetvli,
        mnemonic: "vsetvli",
        class: OpClass::VectorConfig,
    },
    InstrDesc {
        op: Op::Vsetivli,
        mnemonic: "vsetivli",
        class: OpClass::VectorConfig,
    },
    InstrDesc {
        op: Op::Vsetvl,
        mnemonic: "vsetvl",
        class: OpClass::VectorConfig,
    },
    InstrDesc {
        op: Op::Vadd,
        mnemonic: "vadd",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vsub,
        mnemonic: "vsub",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vrsub,
        mnemonic: "vrsub",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vminu,
        mnemonic: "vminu",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vmin,
        mnemonic: "vmin",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vmaxu,
        mnemonic: "vmaxu",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vmax,
        mnemonic: "vmax",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vand,
        mnemonic: "vand",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vor,
        mnemonic: "vor",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vxor,
        mnemonic: "vxor",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vrgather,
        mnemonic: "vrgather",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vslideup,
        mnemonic: "vslideup",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vslidedown,
        mnemonic: "vslidedown",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vmerge,
        mnemonic: "vmerge",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::VmvV,
        mnemonic: "vmv.v",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vmseq,
        mnemonic: "vmseq",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vmsne,
        mnemonic: "vmsne",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vsll,
        mnemonic: "vsll",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vsmul,
        mnemonic: "vsmul",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vsrl,
        mnemonic: "vsrl",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vsra,
        mnemonic: "vsra",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vredsum,
        mnemonic: "vredsum",
        class: OpClass::VectorReduction,
    },
    InstrDesc {
        op: Op::Vredand,
        mnemonic: "vredand",
        class: OpClass::VectorReduction,
    },
    InstrDesc {
        op: Op::Vredor,
        mnemonic: "vredor",
        class: OpClass::VectorReduction,
    },
    InstrDesc {
        op: Op::Vredxor,
        mnemonic: "vredxor",
        class: OpClass::VectorReduction,
    },
    InstrDesc {
        op: Op::VmvSX,
        mnemonic: "vmv.s.x",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::VmvXS,
        mnemonic: "vmv.x.s",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::Vcpop,
        mnemonic: "vcpop.m",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::Vfirst,
        mnemonic: "vfirst.m",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::Vmsbf,
        mnemonic: "vmsbf.m",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::Vmsof,
        mnemonic: "vmsof.m",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::Vmsif,
        mnemonic: "vmsif.m",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::Viota,
        mnemonic: "viota.m",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::Vid,
        mnemonic: "vid.v",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::Vdivu,
        mnemonic: "vdivu",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vdiv,
        mnemonic: "vdiv",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vmul,
        mnemonic: "vmul",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vmadd,
        mnemonic: "vmadd",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vmacc,
        mnemonic: "vmacc",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vfadd,
        mnemonic: "vfadd",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vfredusum,
        mnemonic: "vfredusum",
        class: OpClass::VectorReduction,
    },
    InstrDesc {
        op: Op::Vfsub,
        mnemonic: "vfsub",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vfredosum,
        mnemonic: "vfredosum",
        class: OpClass::VectorReduction,
    },
    InstrDesc {
        op: Op::VfmvFS,
        mnemonic: "vfmv.f.s",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::VfmvSF,
        mnemonic: "vfmv.s.f",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::VfmvVF,
        mnemonic: "vfmv.v.f",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::Vfmerge,
        mnemonic: "vfmerge.vfm",
        class: OpClass::VectorFixed,
    },
    InstrDesc {
        op: Op::Vmfeq,
        mnemonic: "vmfeq",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vmfne,
        mnemonic: "vmfne",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vfdiv,
        mnemonic: "vfdiv",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vfmul,
        mnemonic: "vfmul",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vfnmsub,
        mnemonic: "vfnmsub",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vfmacc,
        mnemonic: "vfmacc",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::Vfnmsac,
        mnemonic: "vfnmsac",
        class: OpClass::VectorArith,
    },
    InstrDesc {
        op: Op::LoadFpUnspecified,
        mnemonic: "load-fp",
        class: OpClass::Unspecified,
    },
    InstrDesc {
        op: Op::StoreFpUnspecified,
        mnemonic: "store-fp",
        class: OpClass::Unspecified,
    },
];

#[inline]
pub fn describe(op: Op) -> &'static InstrDesc {
    &TABLE[op as usize]
}

/// Reverse lookup by display mnemonic.
pub fn lookup(mnemonic: &str) -> Option<Op> {
    TABLE.iter().find(|d| d.mnemonic == mnemonic).map(|d| d.op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rows_follow_discriminants() {
        for (i, d) in TABLE.iter().enumerate() {
            assert_eq!(d.op as usize, i, "row {i} holds {:?}", d.op);
        }
        assert_eq!(TABLE.len(), Op::StoreFpUnspecified as usize + 1);
    }

    #[test]
    fn mnemonics_are_unique() {
        let mut seen = HashSet::new();
        for d in TABLE {
            assert!(seen.insert(d.mnemonic), "duplicate {}", d.mnemonic);
        }
        assert_eq!(lookup("c.nop"), Some(Op::CNop));
        assert_eq!(lookup("vmv.x.s"), Some(Op::VmvXS));
        assert_eq!(lookup("nope"), None);
    }
}
