use crate::constants::InterruptVectors;
use crate::cpu::Cpu;
use crate::flags::StatusFlags;
use crate::operand::OperandRef;

/// Function: PC:={adr} / Flags: (none)
pub fn jmp(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    cpu.pc = operand.address();
    0
}

/// Pushes the return address (the last byte of the JSR instruction, i.e.
/// `PC - 1` after the 3-byte instruction has been fully fetched) and jumps
/// to the target. Function: (S)-:=PC, PC:={adr}
pub fn jsr(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    let return_to = cpu.pc.wrapping_sub(1);
    cpu.push_u16(return_to);
    cpu.pc = operand.address();
    0
}

/// Pulls the return address pushed by `JSR` and resumes just past it.
/// Function: PC:=+(S)+1
pub fn rts(cpu: &mut Cpu) -> u8 {
    let addr = cpu.pull_u16();
    cpu.pc = addr.wrapping_add(1);
    0
}

/// Software interrupt: pushes `PC + 2` (one byte past BRK's conventional
/// signature byte, even though this core's decode table does not fetch
/// it as an operand), pushes `P` with B and U forced to 1, sets I, and
/// loads `PC` from the IRQ/BRK vector.
/// Function: (S)-:=PC+2,(S)-:=P,I:=1,PC:=($FFFE)
pub fn brk(cpu: &mut Cpu) -> u8 {
    let return_to = cpu.pc.wrapping_add(1);
    cpu.push_u16(return_to);
    cpu.push_u8(cpu.flags.to_pushed_byte());
    cpu.flags.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
    cpu.pc = cpu.bus.read_u16(InterruptVectors::IrqBrkVector as u16);
    0
}

/// Return from interrupt: pulls `P` (B/U normalized as on any PLP), then
/// pulls `PC` low then high with no "+1" correction, unlike `RTS`.
/// Function: P:=+(S),PC:=+(S)
pub fn rti(cpu: &mut Cpu) -> u8 {
    let byte = cpu.pull_u8();
    cpu.flags = StatusFlags::from_pulled_byte(byte);
    cpu.pc = cpu.pull_u16();
    0
}
