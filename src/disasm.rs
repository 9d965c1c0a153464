use crate::decoder::{Instruction, Op};
use crate::instructions::{describe, OpClass};
use crate::operands::{Format, Operands};

const ABI: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4", "a5",
    "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4", "t5", "t6",
];

pub fn xreg(r: u8) -> &'static str {
    ABI[(r & 0x1f) as usize]
}

/// Compressed 3-bit register fields name x8..x15.
pub fn creg(r: u8) -> &'static str {
    ABI[8 + (r & 0x7) as usize]
}

fn freg(r: u8) -> String {
    format!("f{}", r & 0x1f)
}

fn fcreg(r: u8) -> String {
    format!("f{}", 8 + (r & 0x7))
}

fn vreg(r: u8) -> String {
    format!("v{}", r & 0x1f)
}

fn mask(vm: u8) -> &'static str {
    if vm == 0 {
        ", v0.t"
    } else {
        ""
    }
}

pub fn fmt_instruction(i: &Instruction) -> String {
    let mn = i.mnemonic();
    match i.operands {
        Operands::R(r) => match i.op {
            Op::Fmv => format!("{mn} {}, {}", freg(r.rd), freg(r.rs1)),
            Op::Lr => format!("{mn} {}, ({})", xreg(r.rd), xreg(r.rs1)),
            _ => format!("{mn} {}, {}, {}", xreg(r.rd), xreg(r.rs1), xreg(r.rs2)),
        },
        Operands::R4(r) => format!(
            "{mn} {}, {}, {}, {}",
            freg(r.rd),
            freg(r.rs1),
            freg(r.rs2),
            freg(r.rs3)
        ),
        Operands::I(f) => match i.op {
            Op::Lb | Op::Lh | Op::Lw | Op::Ld | Op::Lbu | Op::Lhu | Op::Lwu | Op::Jalr => {
                format!("{mn} {}, {}({})", xreg(f.rd), f.imm(), xreg(f.rs1))
            }
            Op::Fence => mn.to_string(),
            Op::Csrrs => format!("{mn} {}, {:#x}, {}", xreg(f.rd), f.imm, xreg(f.rs1)),
            _ => format!("{mn} {}, {}, {}", xreg(f.rd), xreg(f.rs1), f.imm()),
        },
        Operands::S(s) => format!("{mn} {}, {}({})", xreg(s.rs2), s.imm(), xreg(s.rs1)),
        Operands::B(b) => format!("{mn} {}, {}, {:+}", xreg(b.rs1), xreg(b.rs2), b.offset()),
        Operands::U(u) => format!("{mn} {}, {:#x}", xreg(u.rd), u.imm),
        Operands::J(j) => format!("{mn} {}, {:+}", xreg(j.rd), j.offset()),
        Operands::Cr(c) => match i.op {
            Op::CEbreak => mn.to_string(),
            Op::CJr | Op::CJalr => format!("{mn} {}", xreg(c.rd_rs1)),
            _ => format!("{mn} {}, {}", xreg(c.rd_rs1), xreg(c.rs2)),
        },
        Operands::Ci(c) => match i.op {
            Op::CNop => mn.to_string(),
            Op::CFldsp => format!("{mn} {}, {}(sp)", freg(c.rd_rs1), c.ldsp_offset()),
            Op::CLdsp => format!("{mn} {}, {}(sp)", xreg(c.rd_rs1), c.ldsp_offset()),
            Op::CLwsp => format!("{mn} {}, {}(sp)", xreg(c.rd_rs1), c.lwsp_offset()),
            Op::CSlli => format!("{mn} {}, {}", xreg(c.rd_rs1), c.uimm()),
            Op::CAddi16sp => format!("{mn} sp, {}", c.addi16sp_imm()),
            Op::CLui => format!("{mn} {}, {:#x}", xreg(c.rd_rs1), c.imm() as u32 & 0xfffff),
            _ => format!("{mn} {}, {}", xreg(c.rd_rs1), c.imm()),
        },
        Operands::Css(c) => match i.op {
            Op::CFsdsp => format!("{mn} {}, {}(sp)", freg(c.rs2), c.sdsp_offset()),
            Op::CSdsp => format!("{mn} {}, {}(sp)", xreg(c.rs2), c.sdsp_offset()),
            _ => format!("{mn} {}, {}(sp)", xreg(c.rs2), c.swsp_offset()),
        },
        Operands::Ciw(c) => format!("{mn} {}, sp, {}", creg(c.rd_p), c.nzuimm()),
        Operands::Cl(c) => match i.op {
            Op::CFld => format!("{mn} {}, {}({})", fcreg(c.rd_p), c.dword_offset(), creg(c.rs1_p)),
            Op::CLd => format!("{mn} {}, {}({})", creg(c.rd_p), c.dword_offset(), creg(c.rs1_p)),
            _ => format!("{mn} {}, {}({})", creg(c.rd_p), c.word_offset(), creg(c.rs1_p)),
        },
        Operands::Cs(c) => match i.op {
            Op::CFsd => format!("{mn} {}, {}({})", fcreg(c.rs2_p), c.dword_offset(), creg(c.rs1_p)),
            Op::CSd => format!("{mn} {}, {}({})", creg(c.rs2_p), c.dword_offset(), creg(c.rs1_p)),
            _ => format!("{mn} {}, {}({})", creg(c.rs2_p), c.word_offset(), creg(c.rs1_p)),
        },
        Operands::Ca(c) => format!("{mn} {}, {}", creg(c.rd_rs1_p), creg(c.rs2_p)),
        Operands::Cb(c) => match i.op {
            Op::CBeqz | Op::CBnez => format!("{mn} {}, {:+}", creg(c.rs1_p), c.offset),
            Op::CSrli | Op::CSrai => format!("{mn} {}, {}", creg(c.rs1_p), c.shamt()),
            _ => format!("{mn} {}, {}", creg(c.rs1_p), c.imm()),
        },
        Operands::Cj(c) => format!("{mn} {:+}", c.offset),
        Operands::Opivv(v) | Operands::Opfvv(v) | Operands::Opmvv(v) => match i.op {
            Op::VmvXS | Op::Vcpop | Op::Vfirst => format!("{mn} {}, {}{}", xreg(v.vd), vreg(v.vs2), mask(v.vm)),
            Op::VfmvFS => format!("{mn} {}, {}", freg(v.vd), vreg(v.vs2)),
            Op::Vmsbf | Op::Vmsof | Op::Vmsif | Op::Viota => {
                format!("{mn} {}, {}{}", vreg(v.vd), vreg(v.vs2), mask(v.vm))
            }
            Op::Vid => format!("{mn} {}{}", vreg(v.vd), mask(v.vm)),
            Op::VmvV => format!("{}{} {}, {}", mn, suffix(i), vreg(v.vd), vreg(v.vs1)),
            _ => format!(
                "{}{} {}, {}, {}{}",
                mn,
                suffix(i),
                vreg(v.vd),
                vreg(v.vs2),
                vreg(v.vs1),
                mask(v.vm)
            ),
        },
        Operands::Opivx(v) | Operands::Opmvx(v) => match i.op {
            Op::VmvSX => format!("{mn} {}, {}", vreg(v.vd), xreg(v.rs1)),
            Op::VmvV => format!("{}{} {}, {}", mn, suffix(i), vreg(v.vd), xreg(v.rs1)),
            _ => format!(
                "{}{} {}, {}, {}{}",
                mn,
                suffix(i),
                vreg(v.vd),
                vreg(v.vs2),
                xreg(v.rs1),
                mask(v.vm)
            ),
        },
        Operands::Opfvf(v) => match i.op {
            Op::VfmvSF | Op::VfmvVF => format!("{mn} {}, {}", vreg(v.vd), freg(v.rs1)),
            Op::Vfmerge => format!("{mn} {}, {}, {}, v0", vreg(v.vd), vreg(v.vs2), freg(v.rs1)),
            _ => format!(
                "{}{} {}, {}, {}{}",
                mn,
                suffix(i),
                vreg(v.vd),
                vreg(v.vs2),
                freg(v.rs1),
                mask(v.vm)
            ),
        },
        Operands::Opivi(v) => match i.op {
            Op::VmvV => format!("{}{} {}, {}", mn, suffix(i), vreg(v.vd), v.simm()),
            // uimm5 forms
            Op::Vsll | Op::Vsrl | Op::Vsra | Op::Vslideup | Op::Vslidedown | Op::Vrgather => format!(
                "{}{} {}, {}, {}{}",
                mn,
                suffix(i),
                vreg(v.vd),
                vreg(v.vs2),
                v.uimm(),
                mask(v.vm)
            ),
            _ => format!(
                "{}{} {}, {}, {}{}",
                mn,
                suffix(i),
                vreg(v.vd),
                vreg(v.vs2),
                v.simm(),
                mask(v.vm)
            ),
        },
        Operands::Opcfg(c) => match i.op {
            Op::Vsetvl => format!("{mn} {}, {}, {}", xreg(c.rd), xreg(c.rs1), xreg(c.rs2)),
            Op::Vsetivli => format!("{mn} {}, {}, {:#x}", xreg(c.rd), c.rs1, c.zimm & 0x3ff),
            _ => format!("{mn} {}, {}, {:#x}", xreg(c.rd), xreg(c.rs1), c.zimm),
        },
        Operands::Unspecified(u) => format!("{mn} <width {}> {:#010x}", u.width, i.word),
    }
}

/// Assembly suffix for vector ops whose mnemonic depends on the operand
/// format.
fn suffix(i: &Instruction) -> &'static str {
    let class = describe(i.op).class;
    match (class, i.op, i.format()) {
        (OpClass::VectorReduction, _, _) => ".vs",
        (_, Op::Vmerge, Format::Opivv) => ".vvm",
        (_, Op::Vmerge, Format::Opivx) => ".vxm",
        (_, Op::Vmerge, Format::Opivi) => ".vim",
        (_, Op::VmvV, Format::Opivv) => ".v",
        (_, Op::VmvV, Format::Opivx) => ".x",
        (_, Op::VmvV, Format::Opivi) => ".i",
        (OpClass::VectorArith, _, Format::Opivv | Format::Opmvv | Format::Opfvv) => ".vv",
        (OpClass::VectorArith, _, Format::Opivx | Format::Opmvx) => ".vx",
        (OpClass::VectorArith, _, Format::Opivi) => ".vi",
        (OpClass::VectorArith, _, Format::Opfvf) => ".vf",
        _ => "",
    }
}
