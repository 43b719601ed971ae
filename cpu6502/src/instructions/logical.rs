use crate::cpu::Cpu;
use crate::flags::StatusFlags;
use crate::operand::OperandRef;

/// Function: A:=A&{adr} / Flags: N Z
pub fn and(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    cpu.a &= operand.load(cpu.a, &cpu.bus);
    cpu.flags.update_zero_and_negative(cpu.a);
    0
}

/// Function: A:=A|{adr} / Flags: N Z
pub fn ora(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    cpu.a |= operand.load(cpu.a, &cpu.bus);
    cpu.flags.update_zero_and_negative(cpu.a);
    0
}

/// Function: A:=A^{adr} / Flags: N Z
pub fn eor(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    cpu.a ^= operand.load(cpu.a, &cpu.bus);
    cpu.flags.update_zero_and_negative(cpu.a);
    0
}

/// Tests bits without storing a result: Z from `A & {adr}`, N and V copied
/// straight from bits 7 and 6 of the operand rather than of the result.
/// Function: A&{adr} / Flags: N V Z
pub fn bit(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    let value = operand.load(cpu.a, &cpu.bus);
    cpu.flags.set_flag(StatusFlags::ZERO, (cpu.a & value) == 0);
    cpu.flags.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    cpu.flags.set_flag(StatusFlags::OVERFLOW, value & 0x40 != 0);
    0
}
