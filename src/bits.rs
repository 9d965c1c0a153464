//! Bitfield extraction and immediate reassembly.
//!
//! Every field is described by a `(mask, shift)` pair over the 32-bit
//! container. Masks are unshifted, so `extract` is `(word & mask) >> shift`.

use bitvec::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub mask: u32,
    pub shift: u32,
}

impl Field {
    pub const fn new(mask: u32, shift: u32) -> Self {
        Self { mask, shift }
    }

    #[inline]
    pub const fn extract(self, word: u32) -> u32 {
        extract(word, self.mask, self.shift)
    }
}

#[inline]
pub const fn extract(word: u32, mask: u32, shift: u32) -> u32 {
    (word & mask) >> shift
}

// Standard 32-bit layout
pub const OPCODE: Field = Field::new(0x0000_007f, 0);
pub const RD: Field = Field::new(0x0000_0f80, 7);
pub const FUNCT3: Field = Field::new(0x0000_7000, 12);
pub const RS1: Field = Field::new(0x000f_8000, 15);
pub const RS2: Field = Field::new(0x01f0_0000, 20);
pub const FUNCT7: Field = Field::new(0xfe00_0000, 25);
pub const FUNCT2: Field = Field::new(0x0600_0000, 25);
pub const RS3: Field = Field::new(0xf800_0000, 27);
pub const IMM_I: Field = Field::new(0xfff0_0000, 20);
pub const IMM_S_LO: Field = Field::new(0x0000_0f80, 7);
pub const IMM_S_HI: Field = Field::new(0xfe00_0000, 25);
pub const IMM_U: Field = Field::new(0xffff_f000, 12);

// Vector layout (vd = rd, vs1 = rs1, vs2 = rs2 positions)
pub const FUNCT6: Field = Field::new(0xfc00_0000, 26);
pub const VM: Field = Field::new(0x0200_0000, 25);
pub const CFG_KIND: Field = Field::new(0xc000_0000, 30);
pub const CFG_ZIMM: Field = Field::new(0x7ff0_0000, 20);

// Compressed 16-bit layout
pub const C_QUADRANT: Field = Field::new(0x0003, 0);
pub const C_FUNCT3: Field = Field::new(0xe000, 13);
pub const C_FUNCT4: Field = Field::new(0xf000, 12);
pub const C_FUNCT6: Field = Field::new(0xfc00, 10);
pub const C_BIT12: Field = Field::new(0x1000, 12);
pub const C_RD_RS1: Field = Field::new(0x0f80, 7);
pub const C_RS2: Field = Field::new(0x007c, 2);
pub const C_FUNCT2_HI: Field = Field::new(0x0c00, 10);
pub const C_FUNCT2_LO: Field = Field::new(0x0060, 5);
pub const C_RS1P: Field = Field::new(0x0380, 7);
pub const C_RDP: Field = Field::new(0x001c, 2);
pub const C_IMM_12_10: Field = Field::new(0x1c00, 10);
pub const C_IMM_6_5: Field = Field::new(0x0060, 5);
pub const C_IMM_12_7: Field = Field::new(0x1f80, 7);
pub const C_IMM_12_5: Field = Field::new(0x1fe0, 5);
pub const C_IMM_12_2: Field = Field::new(0x1ffc, 2);

/// Unshifted source field of the CJ jump offset (bits 12:2).
pub const CJ_FIELD: u32 = 0x1ffc;
/// Unshifted source field of the CB branch offset (bits 12:10 and 6:2).
pub const CB_FIELD: u32 = 0x1c7c;

/// `(destination, source)` bit pairs for `offset[11|4|9:8|10|6|7|3:1|5]`
/// held in instruction bits 12:2.
pub const CJ_OFFSET_MAP: [(u32, u32); 11] = [
    (11, 12),
    (4, 11),
    (9, 10),
    (8, 9),
    (10, 8),
    (6, 7),
    (7, 6),
    (3, 5),
    (2, 4),
    (1, 3),
    (5, 2),
];

/// `(destination, source)` bit pairs for `offset[8|4:3]` in bits 12:10 and
/// `offset[7:6|2:1|5]` in bits 6:2.
pub const CB_OFFSET_MAP: [(u32, u32); 8] = [
    (8, 12),
    (4, 11),
    (3, 10),
    (7, 6),
    (6, 5),
    (2, 4),
    (1, 3),
    (5, 2),
];

/// Reassembles a scrambled immediate.
///
/// Each destination bit is overwritten with the named source bit of `raw`.
/// Bits that are never a destination keep their value from `raw`; callers
/// follow up with [`sign_extend`] over the reassembled width, which discards
/// them.
pub fn remap(raw: u32, pairs: &[(u32, u32)]) -> u32 {
    let src = raw.view_bits::<Lsb0>();
    let mut out = raw;
    let dst = out.view_bits_mut::<Lsb0>();
    for &(to, from) in pairs {
        dst.set(to as usize, src[from as usize]);
    }
    out
}

/// Interprets the low `bits` bits of `value` as a two's-complement number.
/// `bits` must be in `1..=32`.
#[inline]
pub const fn sign_extend(value: u32, bits: u32) -> i32 {
    let s = 32 - bits;
    ((value << s) as i32) >> s
}

/// Signed CJ jump offset of a compressed word.
pub fn cj_offset(word: u32) -> i32 {
    sign_extend(remap(word & CJ_FIELD, &CJ_OFFSET_MAP), 12)
}

/// Signed CB branch offset of a compressed word.
pub fn cb_offset(word: u32) -> i32 {
    sign_extend(remap(word & CB_FIELD, &CB_OFFSET_MAP), 9)
}
