use crate::cpu::Cpu;
use crate::flags::StatusFlags;
use crate::operand::OperandRef;

/// Shared CMP/CPX/CPY core: compares `reg` against the operand as if by
/// subtraction, without storing a result or touching V.
fn compare(cpu: &mut Cpu, reg: u8, operand: OperandRef) {
    let value = operand.load(cpu.a, &cpu.bus);
    let result = reg.wrapping_sub(value);
    cpu.flags.set_flag(StatusFlags::CARRY, reg >= value);
    cpu.flags.set_flag(StatusFlags::ZERO, reg == value);
    cpu.flags.set_flag(StatusFlags::NEGATIVE, result & 0x80 != 0);
}

/// Function: A-{adr} / Flags: N Z C
pub fn cmp(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    compare(cpu, cpu.a, operand);
    0
}

/// Function: X-{adr} / Flags: N Z C
pub fn cpx(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    compare(cpu, cpu.x, operand);
    0
}

/// Function: Y-{adr} / Flags: N Z C
pub fn cpy(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    compare(cpu, cpu.y, operand);
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
    fn test_cmp_equal_sets_zero_and_carry() {
        let mut cpu = test_cpu();
        cpu.a = 0x42;
        cmp(&mut cpu, OperandRef::Immediate(0x42));
        assert!(cpu.flags.contains(StatusFlags::ZERO));
        assert!(cpu.flags.contains(StatusFlags::CARRY));
        assert_eq!(cpu.a, 0x42); // unchanged
    }

    #[test]
    fn test_cmp_register_less_than_operand_clears_carry() {
        let mut cpu = test_cpu();
        cpu.a = 0x01;
        cmp(&mut cpu, OperandRef::Immediate(0x02));
        assert!(!cpu.flags.contains(StatusFlags::CARRY));
        assert!(!cpu.flags.contains(StatusFlags::ZERO));
    }
}
