use pretty_assertions::assert_eq;

use rvdecode::{decode, ErrorKind, Format, Op, Operands};

const OPIVV: u32 = 0;
const OPFVV: u32 = 1;
const OPMVV: u32 = 2;
const OPIVI: u32 = 3;
const OPIVX: u32 = 4;
const OPFVF: u32 = 5;
const OPMVX: u32 = 6;
const OPCFG: u32 = 7;

fn opv(funct6: u32, vm: u32, vs2: u32, vs1: u32, funct3: u32, vd: u32) -> u32 {
    (funct6 << 26) | (vm << 25) | (vs2 << 20) | (vs1 << 15) | (funct3 << 12) | (vd << 7) | 0x57
}

fn op_of(word: u32) -> Op {
    decode(word).unwrap().op
}

fn undefined(word: u32) -> bool {
    matches!(decode(word), Err(e) if e.kind() == ErrorKind::UndefinedEncoding)
}

#[test]
fn move_vector_to_scalar() {
    let i = decode(opv(0x10, 1, 8, 0, OPMVV, 10)).unwrap();
    assert_eq!(i.op, Op::VmvXS);
    assert_eq!(i.format(), Format::Opmvv);
    assert_eq!(i.mnemonic(), "vmv.x.s");
    match i.operands {
        Operands::Opmvv(v) => {
            assert_eq!(v.vs2, 8);
            assert_eq!(v.vd, 10);
        }
        other => panic!("expected OPMVV payload, got {other:?}"),
    }
}

#[test]
fn funct3_selects_format() {
    let formats = [
        (OPIVV, Format::Opivv),
        (OPFVV, Format::Opfvv),
        (OPMVV, Format::Opmvv),
        (OPIVI, Format::Opivi),
        (OPIVX, Format::Opivx),
        (OPFVF, Format::Opfvf),
        (OPMVX, Format::Opmvx),
    ];
    for (funct3, format) in formats {
        // funct6 0 is defined in every family
        let i = decode(opv(0, 1, 1, 2, funct3, 3)).unwrap();
        assert_eq!(i.format(), format);
        assert!(i.format().is_vector());
    }
}

#[test]
fn integer_family() {
    let table = [
        (0x00, Op::Vadd),
        (0x02, Op::Vsub),
        (0x03, Op::Vrsub),
        (0x04, Op::Vminu),
        (0x05, Op::Vmin),
        (0x06, Op::Vmaxu),
        (0x07, Op::Vmax),
        (0x09, Op::Vand),
        (0x0a, Op::Vor),
        (0x0b, Op::Vxor),
        (0x0c, Op::Vrgather),
        (0x0e, Op::Vslideup),
        (0x0f, Op::Vslidedown),
        (0x18, Op::Vmseq),
        (0x19, Op::Vmsne),
        (0x25, Op::Vsll),
        (0x27, Op::Vsmul),
        (0x28, Op::Vsrl),
        (0x29, Op::Vsra),
    ];
    for (funct6, op) in table {
        for funct3 in [OPIVV, OPIVX, OPIVI] {
            assert_eq!(op_of(opv(funct6, 1, 4, 5, funct3, 6)), op, "funct6 {funct6:#x}");
        }
    }
    assert!(undefined(opv(0x01, 1, 4, 5, OPIVV, 6)));
    assert!(undefined(opv(0x3f, 1, 4, 5, OPIVX, 6)));
}

#[test]
fn merge_and_move() {
    assert_eq!(op_of(opv(0x17, 0, 4, 5, OPIVV, 6)), Op::Vmerge);
    assert_eq!(op_of(opv(0x17, 1, 0, 5, OPIVV, 6)), Op::VmvV);
    assert_eq!(op_of(opv(0x17, 1, 0, 5, OPIVI, 6)), Op::VmvV);
    assert!(undefined(opv(0x17, 1, 4, 5, OPIVX, 6)));
}

#[test]
fn mask_family() {
    let table = [
        (0x00, Op::Vredsum),
        (0x01, Op::Vredand),
        (0x02, Op::Vredor),
        (0x03, Op::Vredxor),
        (0x20, Op::Vdivu),
        (0x21, Op::Vdiv),
        (0x25, Op::Vmul),
        (0x29, Op::Vmadd),
        (0x2d, Op::Vmacc),
    ];
    for (funct6, op) in table {
        assert_eq!(op_of(opv(funct6, 1, 4, 5, OPMVV, 6)), op);
        assert_eq!(op_of(opv(funct6, 1, 4, 5, OPMVX, 6)), op);
    }

    assert_eq!(op_of(opv(0x10, 1, 4, 0x10, OPMVV, 6)), Op::Vcpop);
    assert_eq!(op_of(opv(0x10, 1, 4, 0x11, OPMVV, 6)), Op::Vfirst);
    assert_eq!(op_of(opv(0x10, 1, 0, 5, OPMVX, 6)), Op::VmvSX);
    assert!(undefined(opv(0x10, 1, 4, 5, OPMVX, 6)));
    assert!(undefined(opv(0x10, 1, 4, 0x12, OPMVV, 6)));

    assert_eq!(op_of(opv(0x14, 1, 4, 0x01, OPMVV, 6)), Op::Vmsbf);
    assert_eq!(op_of(opv(0x14, 1, 4, 0x02, OPMVV, 6)), Op::Vmsof);
    assert_eq!(op_of(opv(0x14, 1, 4, 0x03, OPMVV, 6)), Op::Vmsif);
    assert_eq!(op_of(opv(0x14, 1, 4, 0x10, OPMVV, 6)), Op::Viota);
    assert_eq!(op_of(opv(0x14, 1, 0, 0x11, OPMVV, 6)), Op::Vid);
    assert!(undefined(opv(0x14, 1, 4, 0x00, OPMVV, 6)));
    assert!(undefined(opv(0x14, 1, 4, 0x01, OPMVX, 6)));
}

#[test]
fn float_family() {
    let table = [
        (0x00, Op::Vfadd),
        (0x01, Op::Vfredusum),
        (0x02, Op::Vfsub),
        (0x03, Op::Vfredosum),
        (0x18, Op::Vmfeq),
        (0x1c, Op::Vmfne),
        (0x20, Op::Vfdiv),
        (0x24, Op::Vfmul),
        (0x2b, Op::Vfnmsub),
        (0x2c, Op::Vfmacc),
        (0x2f, Op::Vfnmsac),
    ];
    for (funct6, op) in table {
        assert_eq!(op_of(opv(funct6, 1, 4, 5, OPFVV, 6)), op);
        assert_eq!(op_of(opv(funct6, 1, 4, 5, OPFVF, 6)), op);
    }
    assert!(undefined(opv(0x3e, 1, 4, 5, OPFVV, 6)));
}

#[test]
fn float_moves_test_the_zero_register_field() {
    // vfmv.f.s: vector-vector form, vs1 must be zero
    assert_eq!(op_of(opv(0x10, 1, 4, 0, OPFVV, 6)), Op::VfmvFS);
    assert!(undefined(opv(0x10, 1, 4, 1, OPFVV, 6)));
    // vfmv.s.f: vector-scalar form, vs2 must be zero
    assert_eq!(op_of(opv(0x10, 1, 0, 5, OPFVF, 6)), Op::VfmvSF);
    assert!(undefined(opv(0x10, 1, 4, 5, OPFVF, 6)));

    assert_eq!(op_of(opv(0x17, 0, 4, 5, OPFVF, 6)), Op::Vfmerge);
    assert_eq!(op_of(opv(0x17, 1, 0, 5, OPFVF, 6)), Op::VfmvVF);
    assert!(undefined(opv(0x17, 1, 4, 5, OPFVF, 6)));
    assert!(undefined(opv(0x17, 0, 4, 5, OPFVV, 6)));
}

#[test]
fn configuration() {
    // vsetvli a0, a1, e32,m1
    let w = (0x010 << 20) | (11 << 15) | (OPCFG << 12) | (10 << 7) | 0x57;
    let i = decode(w).unwrap();
    assert_eq!((i.op, i.format()), (Op::Vsetvli, Format::Opcfg));
    match i.operands {
        Operands::Opcfg(c) => {
            assert_eq!(c.kind, 0);
            assert_eq!(c.zimm, 0x010);
            assert_eq!(c.rs1, 11);
            assert_eq!(c.rd, 10);
        }
        other => panic!("expected OPCFG payload, got {other:?}"),
    }
    assert_eq!(op_of((0b11 << 30) | (OPCFG << 12) | 0x57), Op::Vsetivli);
    assert_eq!(op_of((0b10 << 30) | (OPCFG << 12) | 0x57), Op::Vsetvl);
}

#[test]
fn fp_load_store_are_placeholders() {
    for word in [0x0000_0007, 0x0205_7087, 0xffff_ffa7, 0x0000_0027] {
        let i = decode(word).unwrap();
        assert_eq!(i.format(), Format::Unspecified);
        let expected = if word & 0x7f == 0x07 { Op::LoadFpUnspecified } else { Op::StoreFpUnspecified };
        assert_eq!(i.op, expected);
    }
}
