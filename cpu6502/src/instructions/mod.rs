//! One routine per mnemonic, operating on an already-resolved `OperandRef`
//! plus CPU state, with the documented 6502 flag side-effects. Split across
//! submodules the way the teacher splits `opcodes_move.rs`/`opcodes_jump.rs`/
//! `opcodes_logical.rs`, grouped here by instruction family instead.

mod arithmetic;
mod branch;
mod compare;
mod flags_ops;
mod incdec;
mod jump;
mod load_store;
mod logical;
mod shift;
mod stack;
mod transfer;

use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;
use crate::operand::OperandRef;

/// Exhaustive match over every official mnemonic - the compiler verifies
/// all 56 are handled, per spec.md 9's preferred re-architecture over the
/// teacher's per-opcode function-pointer table. Returns any cycles beyond
/// the decode table's `base_cycles` the instruction itself incurs (only
/// taken/page-crossing branches ever do).
pub fn dispatch(cpu: &mut Cpu, mnemonic: Mnemonic, operand: OperandRef, page_crossed: bool) -> u8 {
    match mnemonic {
        Mnemonic::Lda => load_store::lda(cpu, operand),
        Mnemonic::Ldx => load_store::ldx(cpu, operand),
        Mnemonic::Ldy => load_store::ldy(cpu, operand),
        Mnemonic::Sta => load_store::sta(cpu, operand),
        Mnemonic::Stx => load_store::stx(cpu, operand),
        Mnemonic::Sty => load_store::sty(cpu, operand),

        Mnemonic::Tax => transfer::tax(cpu),
        Mnemonic::Tay => transfer::tay(cpu),
        Mnemonic::Txa => transfer::txa(cpu),
        Mnemonic::Tya => transfer::tya(cpu),
        Mnemonic::Tsx => transfer::tsx(cpu),
        Mnemonic::Txs => transfer::txs(cpu),

        Mnemonic::Pha => stack::pha(cpu),
        Mnemonic::Php => stack::php(cpu),
        Mnemonic::Pla => stack::pla(cpu),
        Mnemonic::Plp => stack::plp(cpu),

        Mnemonic::And => logical::and(cpu, operand),
        Mnemonic::Ora => logical::ora(cpu, operand),
        Mnemonic::Eor => logical::eor(cpu, operand),
        Mnemonic::Bit => logical::bit(cpu, operand),

        Mnemonic::Asl => shift::asl(cpu, operand),
        Mnemonic::Lsr => shift::lsr(cpu, operand),
        Mnemonic::Rol => shift::rol(cpu, operand),
        Mnemonic::Ror => shift::ror(cpu, operand),

        Mnemonic::Adc => arithmetic::adc(cpu, operand),
        Mnemonic::Sbc => arithmetic::sbc(cpu, operand),

        Mnemonic::Cmp => compare::cmp(cpu, operand),
        Mnemonic::Cpx => compare::cpx(cpu, operand),
        Mnemonic::Cpy => compare::cpy(cpu, operand),

        Mnemonic::Inc => incdec::inc(cpu, operand),
        Mnemonic::Dec => incdec::dec(cpu, operand),
        Mnemonic::Inx => incdec::inx(cpu),
        Mnemonic::Dex => incdec::dex(cpu),
        Mnemonic::Iny => incdec::iny(cpu),
        Mnemonic::Dey => incdec::dey(cpu),

        Mnemonic::Bpl => branch::bpl(cpu, operand, page_crossed),
        Mnemonic::Bmi => branch::bmi(cpu, operand, page_crossed),
        Mnemonic::Bvc => branch::bvc(cpu, operand, page_crossed),
        Mnemonic::Bvs => branch::bvs(cpu, operand, page_crossed),
        Mnemonic::Bcc => branch::bcc(cpu, operand, page_crossed),
        Mnemonic::Bcs => branch::bcs(cpu, operand, page_crossed),
        Mnemonic::Bne => branch::bne(cpu, operand, page_crossed),
        Mnemonic::Beq => branch::beq(cpu, operand, page_crossed),

        Mnemonic::Jmp => jump::jmp(cpu, operand),
        Mnemonic::Jsr => jump::jsr(cpu, operand),
        Mnemonic::Rts => jump::rts(cpu),
        Mnemonic::Brk => jump::brk(cpu),
        Mnemonic::Rti => jump::rti(cpu),

        Mnemonic::Clc => flags_ops::clc(cpu),
        Mnemonic::Sec => flags_ops::sec(cpu),
        Mnemonic::Cli => flags_ops::cli(cpu),
        Mnemonic::Sei => flags_ops::sei(cpu),
        Mnemonic::Cld => flags_ops::cld(cpu),
        Mnemonic::Sed => flags_ops::sed(cpu),
        Mnemonic::Clv => flags_ops::clv(cpu),
        Mnemonic::Nop => flags_ops::nop(cpu),
    }
}
