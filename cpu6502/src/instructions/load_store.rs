use crate::cpu::Cpu;
use crate::operand::OperandRef;

/// Function: A:={adr}
/// Flags: N Z
pub fn lda(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    cpu.a = operand.load(cpu.a, &cpu.bus);
    cpu.flags.update_zero_and_negative(cpu.a);
    0
}

/// Function: X:={adr}
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    cpu.x = operand.load(cpu.a, &cpu.bus);
    cpu.flags.update_zero_and_negative(cpu.x);
    0
}

/// Function: Y:={adr}
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    cpu.y = operand.load(cpu.a, &cpu.bus);
    cpu.flags.update_zero_and_negative(cpu.y);
    0
}

/// Function: {adr}:=A
/// Flags: (none)
pub fn sta(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    cpu.bus.write_u8(operand.address(), cpu.a);
    0
}

/// Function: {adr}:=X
/// Flags: (none)
pub fn stx(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    cpu.bus.write_u8(operand.address(), cpu.x);
    0
}

/// Function: {adr}:=Y
/// Flags: (none)
pub fn sty(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    cpu.bus.write_u8(operand.address(), cpu.y);
    0
}
