//! The decode table: an immutable mapping from opcode byte to
//! `(mnemonic, mode, base_cycles, page_cross_penalty)`. Only the 151
//! official 6502 opcodes are mapped; every other byte decodes to `None`
//! and is reported by `Cpu::step` as `CpuError::UnknownOpcode`.

/// One of the 13 6502 addressing modes. `get_operand_address` in `cpu.rs`
/// resolves a mode plus the bytes following the opcode into an
/// `OperandRef`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageIndexedX,
    ZeroPageIndexedY,
    Absolute,
    IndexedX,
    IndexedY,
    PreIndexedIndirect,
    PostIndexedIndirect,
    Indirect,
    Relative,
}

/// The ~56 official mnemonics. Unofficial/illegal opcodes (SLO, LAX, DCP,
/// KIL, ...) are out of scope and have no variant here - see DESIGN.md.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl,
    Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy,
    Dec, Dex, Dey,
    Eor,
    Inc, Inx, Iny,
    Jmp, Jsr,
    Lda, Ldx, Ldy, Lsr,
    Nop,
    Ora,
    Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts,
    Sbc, Sec, Sed, Sei, Sta, Stx, Sty,
    Tax, Tay, Tsx, Txa, Txs, Tya,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeEntry {
    pub mnemonic: Mnemonic,
    pub mode: Mode,
    pub base_cycles: u8,
    pub page_cross_penalty: bool,
}

/// Builds the 256-entry decode table at compile time. Unlisted bytes stay
/// `None`. This mirrors the teacher's `match_opcode!` table (same opcode
/// bytes, same base cycle counts for every official instruction) but
/// drops the illegal-opcode rows and tracks `page_cross_penalty`
/// explicitly instead of leaving it always zero.
macro_rules! decode_table {
    ( $( { $byte:expr, $mnemonic:ident, $mode:ident, $cycles:expr, $page_cross:expr } ),* $(,)? ) => {{
        let mut table: [Option<DecodeEntry>; 256] = [None; 256];
        $(
            table[$byte as usize] = Some(DecodeEntry {
                mnemonic: Mnemonic::$mnemonic,
                mode: Mode::$mode,
                base_cycles: $cycles,
                page_cross_penalty: $page_cross,
            });
        )*
        table
    }};
}

#[rustfmt::skip]
pub static DECODE_TABLE: [Option<DecodeEntry>; 256] = decode_table!(
    { 0x00, Brk, Implied,              7, false },
    { 0x01, Ora, PreIndexedIndirect,   6, false },
    { 0x05, Ora, ZeroPage,             3, false },
    { 0x06, Asl, ZeroPage,             5, false },
    { 0x08, Php, Implied,              3, false },
    { 0x09, Ora, Immediate,            2, false },
    { 0x0A, Asl, Accumulator,          2, false },
    { 0x0D, Ora, Absolute,             4, false },
    { 0x0E, Asl, Absolute,             6, false },
    { 0x10, Bpl, Relative,             2, false },
    { 0x11, Ora, PostIndexedIndirect,  5, true  },
    { 0x15, Ora, ZeroPageIndexedX,     4, false },
    { 0x16, Asl, ZeroPageIndexedX,     6, false },
    { 0x18, Clc, Implied,              2, false },
    { 0x19, Ora, IndexedY,             4, true  },
    { 0x1D, Ora, IndexedX,             4, true  },
    { 0x1E, Asl, IndexedX,             7, false },
    { 0x20, Jsr, Absolute,             6, false },
    { 0x21, And, PreIndexedIndirect,   6, false },
    { 0x24, Bit, ZeroPage,             3, false },
    { 0x25, And, ZeroPage,             3, false },
    { 0x26, Rol, ZeroPage,             5, false },
    { 0x28, Plp, Implied,              4, false },
    { 0x29, And, Immediate,            2, false },
    { 0x2A, Rol, Accumulator,          2, false },
    { 0x2C, Bit, Absolute,             4, false },
    { 0x2D, And, Absolute,             4, false },
    { 0x2E, Rol, Absolute,             6, false },
    { 0x30, Bmi, Relative,             2, false },
    { 0x31, And, PostIndexedIndirect,  5, true  },
    { 0x35, And, ZeroPageIndexedX,     4, false },
    { 0x36, Rol, ZeroPageIndexedX,     6, false },
    { 0x38, Sec, Implied,              2, false },
    { 0x39, And, IndexedY,             4, true  },
    { 0x3D, And, IndexedX,             4, true  },
    { 0x3E, Rol, IndexedX,             7, false },
    { 0x40, Rti, Implied,              6, false },
    { 0x41, Eor, PreIndexedIndirect,   6, false },
    { 0x45, Eor, ZeroPage,             3, false },
    { 0x46, Lsr, ZeroPage,             5, false },
    { 0x48, Pha, Implied,              3, false },
    { 0x49, Eor, Immediate,            2, false },
    { 0x4A, Lsr, Accumulator,          2, false },
    { 0x4C, Jmp, Absolute,             3, false },
    { 0x4D, Eor, Absolute,             4, false },
    { 0x4E, Lsr, Absolute,             6, false },
    { 0x50, Bvc, Relative,             2, false },
    { 0x51, Eor, PostIndexedIndirect,  5, true  },
    { 0x55, Eor, ZeroPageIndexedX,     4, false },
    { 0x56, Lsr, ZeroPageIndexedX,     6, false },
    { 0x58, Cli, Implied,              2, false },
    { 0x59, Eor, IndexedY,             4, true  },
    { 0x5D, Eor, IndexedX,             4, true  },
    { 0x5E, Lsr, IndexedX,             7, false },
    { 0x60, Rts, Implied,              6, false },
    { 0x61, Adc, PreIndexedIndirect,   6, false },
    { 0x65, Adc, ZeroPage,             3, false },
    { 0x66, Ror, ZeroPage,             5, false },
    { 0x68, Pla, Implied,              4, false },
    { 0x69, Adc, Immediate,            2, false },
    { 0x6A, Ror, Accumulator,          2, false },
    { 0x6C, Jmp, Indirect,             5, false },
    { 0x6D, Adc, Absolute,             4, false },
    { 0x6E, Ror, Absolute,             6, false },
    { 0x70, Bvs, Relative,             2, false },
    { 0x71, Adc, PostIndexedIndirect,  5, true  },
    { 0x75, Adc, ZeroPageIndexedX,     4, false },
    { 0x76, Ror, ZeroPageIndexedX,     6, false },
    { 0x78, Sei, Implied,              2, false },
    { 0x79, Adc, IndexedY,             4, true  },
    { 0x7D, Adc, IndexedX,             4, true  },
    { 0x7E, Ror, IndexedX,             7, false },
    { 0x81, Sta, PreIndexedIndirect,   6, false },
    { 0x84, Sty, ZeroPage,             3, false },
    { 0x85, Sta, ZeroPage,             3, false },
    { 0x86, Stx, ZeroPage,             3, false },
    { 0x88, Dey, Implied,              2, false },
    { 0x8A, Txa, Implied,              2, false },
    { 0x8C, Sty, Absolute,             4, false },
    { 0x8D, Sta, Absolute,             4, false },
    { 0x8E, Stx, Absolute,             4, false },
    { 0x90, Bcc, Relative,             2, false },
    { 0x91, Sta, PostIndexedIndirect,  6, false },
    { 0x94, Sty, ZeroPageIndexedX,     4, false },
    { 0x95, Sta, ZeroPageIndexedX,     4, false },
    { 0x96, Stx, ZeroPageIndexedY,     4, false },
    { 0x98, Tya, Implied,              2, false },
    { 0x99, Sta, IndexedY,             5, false },
    { 0x9A, Txs, Implied,              2, false },
    { 0x9D, Sta, IndexedX,             5, false },
    { 0xA0, Ldy, Immediate,            2, false },
    { 0xA1, Lda, PreIndexedIndirect,   6, false },
    { 0xA2, Ldx, Immediate,            2, false },
    { 0xA4, Ldy, ZeroPage,             3, false },
    { 0xA5, Lda, ZeroPage,             3, false },
    { 0xA6, Ldx, ZeroPage,             3, false },
    { 0xA8, Tay, Implied,              2, false },
    { 0xA9, Lda, Immediate,            2, false },
    { 0xAA, Tax, Implied,              2, false },
    { 0xAC, Ldy, Absolute,             4, false },
    { 0xAD, Lda, Absolute,             4, false },
    { 0xAE, Ldx, Absolute,             4, false },
    { 0xB0, Bcs, Relative,             2, false },
    { 0xB1, Lda, PostIndexedIndirect,  5, true  },
    { 0xB4, Ldy, ZeroPageIndexedX,     4, false },
    { 0xB5, Lda, ZeroPageIndexedX,     4, false },
    { 0xB6, Ldx, ZeroPageIndexedY,     4, false },
    { 0xB8, Clv, Implied,              2, false },
    { 0xB9, Lda, IndexedY,             4, true  },
    { 0xBA, Tsx, Implied,              2, false },
    { 0xBC, Ldy, IndexedX,             4, true  },
    { 0xBD, Lda, IndexedX,             4, true  },
    { 0xBE, Ldx, IndexedY,             4, true  },
    { 0xC0, Cpy, Immediate,            2, false },
    { 0xC1, Cmp, PreIndexedIndirect,   6, false },
    { 0xC4, Cpy, ZeroPage,             3, false },
    { 0xC5, Cmp, ZeroPage,             3, false },
    { 0xC6, Dec, ZeroPage,             5, false },
    { 0xC8, Iny, Implied,              2, false },
    { 0xC9, Cmp, Immediate,            2, false },
    { 0xCA, Dex, Implied,              2, false },
    { 0xCC, Cpy, Absolute,             4, false },
    { 0xCD, Cmp, Absolute,             4, false },
    { 0xCE, Dec, Absolute,             6, false },
    { 0xD0, Bne, Relative,             2, false },
    { 0xD1, Cmp, PostIndexedIndirect,  5, true  },
    { 0xD5, Cmp, ZeroPageIndexedX,     4, false },
    { 0xD6, Dec, ZeroPageIndexedX,     6, false },
    { 0xD8, Cld, Implied,              2, false },
    { 0xD9, Cmp, IndexedY,             4, true  },
    { 0xDD, Cmp, IndexedX,             4, true  },
    { 0xDE, Dec, IndexedX,             7, false },
    { 0xE0, Cpx, Immediate,            2, false },
    { 0xE1, Sbc, PreIndexedIndirect,   6, false },
    { 0xE4, Cpx, ZeroPage,             3, false },
    { 0xE5, Sbc, ZeroPage,             3, false },
    { 0xE6, Inc, ZeroPage,             5, false },
    { 0xE8, Inx, Implied,              2, false },
    { 0xE9, Sbc, Immediate,            2, false },
    { 0xEA, Nop, Implied,              2, false },
    { 0xEC, Cpx, Absolute,             4, false },
    { 0xED, Sbc, Absolute,             4, false },
    { 0xEE, Inc, Absolute,             6, false },
    { 0xF0, Beq, Relative,             2, false },
    { 0xF1, Sbc, PostIndexedIndirect,  5, true  },
    { 0xF5, Sbc, ZeroPageIndexedX,     4, false },
    { 0xF6, Inc, ZeroPageIndexedX,     6, false },
    { 0xF8, Sed, Implied,              2, false },
    { 0xF9, Sbc, IndexedY,             4, true  },
    { 0xFD, Sbc, IndexedX,             4, true  },
    { 0xFE, Inc, IndexedX,             7, false },
);
