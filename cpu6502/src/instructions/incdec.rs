use crate::cpu::Cpu;
use crate::operand::OperandRef;

/// Function: {adr}:={adr}+1 / Flags: N Z
pub fn inc(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    let addr = operand.address();
    let result = cpu.bus.read_u8(addr).wrapping_add(1);
    cpu.bus.write_u8(addr, result);
    cpu.flags.update_zero_and_negative(result);
    0
}

/// Function: {adr}:={adr}-1 / Flags: N Z
pub fn dec(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    let addr = operand.address();
    let result = cpu.bus.read_u8(addr).wrapping_sub(1);
    cpu.bus.write_u8(addr, result);
    cpu.flags.update_zero_and_negative(result);
    0
}

/// Function: X:=X+1 / Flags: N Z
pub fn inx(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.flags.update_zero_and_negative(cpu.x);
    0
}

/// Function: X:=X-1 / Flags: N Z
pub fn dex(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.flags.update_zero_and_negative(cpu.x);
    0
}

/// Function: Y:=Y+1 / Flags: N Z
pub fn iny(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.flags.update_zero_and_negative(cpu.y);
    0
}

/// Function: Y:=Y-1 / Flags: N Z
pub fn dey(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.flags.update_zero_and_negative(cpu.y);
    0
}
