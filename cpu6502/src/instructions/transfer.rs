use crate::cpu::Cpu;

/// Function: X:=A / Flags: N Z
pub fn tax(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.a;
    cpu.flags.update_zero_and_negative(cpu.x);
    0
}

/// Function: Y:=A / Flags: N Z
pub fn tay(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.a;
    cpu.flags.update_zero_and_negative(cpu.y);
    0
}

/// Function: A:=X / Flags: N Z
pub fn txa(cpu: &mut Cpu) -> u8 {
    cpu.a = cpu.x;
    cpu.flags.update_zero_and_negative(cpu.a);
    0
}

/// Function: A:=Y / Flags: N Z
pub fn tya(cpu: &mut Cpu) -> u8 {
    cpu.a = cpu.y;
    cpu.flags.update_zero_and_negative(cpu.a);
    0
}

/// Function: X:=SP / Flags: N Z
pub fn tsx(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.sp;
    cpu.flags.update_zero_and_negative(cpu.x);
    0
}

/// Function: SP:=X / Flags: (none)
pub fn txs(cpu: &mut Cpu) -> u8 {
    cpu.sp = cpu.x;
    0
}
