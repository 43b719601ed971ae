use crate::cpu::Cpu;
use crate::flags::StatusFlags;

/// Function: (S)-:=A / Flags: (none)
pub fn pha(cpu: &mut Cpu) -> u8 {
    cpu.push_u8(cpu.a);
    0
}

/// Pushes `P` with B and U forced to 1, independent of their live values.
/// Function: (S)-:=P / Flags: (none)
pub fn php(cpu: &mut Cpu) -> u8 {
    cpu.push_u8(cpu.flags.to_pushed_byte());
    0
}

/// Function: A:=+(S) / Flags: N Z
pub fn pla(cpu: &mut Cpu) -> u8 {
    cpu.a = cpu.pull_u8();
    cpu.flags.update_zero_and_negative(cpu.a);
    0
}

/// Pulls `P`, discarding the pushed B/U bits per the PLP convention: B is
/// cleared and U is set in the live register regardless of the stack byte.
/// Function: P:=+(S) / Flags: N V D I Z C
pub fn plp(cpu: &mut Cpu) -> u8 {
    let byte = cpu.pull_u8();
    cpu.flags = StatusFlags::from_pulled_byte(byte);
    0
}
