use crate::cpu::Cpu;
use crate::flags::StatusFlags;
use crate::operand::OperandRef;

fn store(cpu: &mut Cpu, operand: OperandRef, value: u8) {
    match operand {
        OperandRef::Address(addr) => cpu.bus.write_u8(addr, value),
        OperandRef::Accumulator => cpu.a = value,
        other => unreachable!("{:?} is not a read-modify-write operand", other),
    }
}

/// Function: {adr}:={adr}*2 / Flags: N Z C
pub fn asl(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    let value = operand.load(cpu.a, &cpu.bus);
    cpu.flags.set_flag(StatusFlags::CARRY, value & 0x80 != 0);
    let result = value << 1;
    store(cpu, operand, result);
    cpu.flags.update_zero_and_negative(result);
    0
}

/// Function: {adr}:={adr}/2 / Flags: N Z C
pub fn lsr(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    let value = operand.load(cpu.a, &cpu.bus);
    cpu.flags.set_flag(StatusFlags::CARRY, value & 0x01 != 0);
    let result = value >> 1;
    store(cpu, operand, result);
    cpu.flags.update_zero_and_negative(result);
    0
}

/// Rotate left through carry. Function: {adr}:={adr}*2+C / Flags: N Z C
pub fn rol(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    let value = operand.load(cpu.a, &cpu.bus);
    let carry_in = cpu.flags.carry();
    cpu.flags.set_flag(StatusFlags::CARRY, value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    store(cpu, operand, result);
    cpu.flags.update_zero_and_negative(result);
    0
}

/// Rotate right through carry. Function: {adr}:={adr}/2+C*80 / Flags: N Z C
pub fn ror(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    let value = operand.load(cpu.a, &cpu.bus);
    let carry_in = cpu.flags.carry();
    cpu.flags.set_flag(StatusFlags::CARRY, value & 0x01 != 0);
    let result = (value >> 1) | (carry_in << 7);
    store(cpu, operand, result);
    cpu.flags.update_zero_and_negative(result);
    0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::Cpu;

    fn test_cpu() -> Cpu {
        Cpu::with_pc(Bus::new(), 0x8000)
    }

    #[test]
    fn test_asl_then_lsr_clears_bit_7() {
        let mut cpu = test_cpu();
        cpu.a = 0xFF;
        asl(&mut cpu, OperandRef::Accumulator);
        assert!(cpu.flags.contains(StatusFlags::CARRY));
        lsr(&mut cpu, OperandRef::Accumulator);
        assert_eq!(cpu.a & 0x80, 0);
    }

    #[test]
    fn test_rol_brings_in_old_carry() {
        let mut cpu = test_cpu();
        cpu.a = 0x00;
        cpu.flags.set_flag(StatusFlags::CARRY, true);
        rol(&mut cpu, OperandRef::Accumulator);
        assert_eq!(cpu.a, 0x01);
        assert!(!cpu.flags.contains(StatusFlags::CARRY));
    }

    #[test]
    fn test_ror_brings_in_old_carry_as_bit_7() {
        let mut cpu = test_cpu();
        cpu.a = 0x00;
        cpu.flags.set_flag(StatusFlags::CARRY, true);
        ror(&mut cpu, OperandRef::Accumulator);
        assert_eq!(cpu.a, 0x80);
    }
}
