use crate::cpu::Cpu;
use crate::flags::StatusFlags;

pub fn clc(cpu: &mut Cpu) -> u8 {
    cpu.flags.set_flag(StatusFlags::CARRY, false);
    0
}

pub fn sec(cpu: &mut Cpu) -> u8 {
    cpu.flags.set_flag(StatusFlags::CARRY, true);
    0
}

pub fn cli(cpu: &mut Cpu) -> u8 {
    cpu.flags.set_flag(StatusFlags::INTERRUPT_DISABLE, false);
    0
}

pub fn sei(cpu: &mut Cpu) -> u8 {
    cpu.flags.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
    0
}

pub fn cld(cpu: &mut Cpu) -> u8 {
    cpu.flags.set_flag(StatusFlags::DECIMAL, false);
    0
}

pub fn sed(cpu: &mut Cpu) -> u8 {
    cpu.flags.set_flag(StatusFlags::DECIMAL, true);
    0
}

pub fn clv(cpu: &mut Cpu) -> u8 {
    cpu.flags.set_flag(StatusFlags::OVERFLOW, false);
    0
}

/// Does nothing, as advertised.
pub fn nop(_cpu: &mut Cpu) -> u8 {
    0
}
