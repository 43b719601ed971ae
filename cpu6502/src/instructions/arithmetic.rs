use crate::cpu::Cpu;
use crate::flags::StatusFlags;
use crate::operand::OperandRef;

/// Shared ADC/SBC core: `r = A + value + carry_in` as a 16-bit sum. Signed
/// overflow is "both inputs agree in sign, and the result disagrees with
/// them" - `(A ^ r) & (value ^ r) & 0x80`. SBC feeds `!operand` through
/// this same formula (subtraction is addition of the two's-complement-ish
/// one's complement plus the carry, which doubles as "not borrow").
fn add_with_carry(cpu: &mut Cpu, value: u8) {
    let carry_in = cpu.flags.carry() as u16;
    let sum = cpu.a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    let overflow = (cpu.a ^ result) & (value ^ result) & 0x80 != 0;

    cpu.flags.set_flag(StatusFlags::CARRY, sum > 0xFF);
    cpu.flags.set_flag(StatusFlags::OVERFLOW, overflow);
    cpu.a = result;
    cpu.flags.update_zero_and_negative(cpu.a);
}

/// Function: A:=A+{adr}+C / Flags: N V Z C
pub fn adc(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    let value = operand.load(cpu.a, &cpu.bus);
    add_with_carry(cpu, value);
    0
}

/// Function: A:=A-{adr}-(1-C) / Flags: N V Z C
pub fn sbc(cpu: &mut Cpu, operand: OperandRef) -> u8 {
    let value = operand.load(cpu.a, &cpu.bus);
    add_with_carry(cpu, !value);
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
    fn test_adc_signed_overflow_into_negative() {
        let mut cpu = test_cpu();
        cpu.a = 0x7F;
        adc(&mut cpu, OperandRef::Immediate(0x01));
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.flags.contains(StatusFlags::NEGATIVE));
        assert!(cpu.flags.contains(StatusFlags::OVERFLOW));
        assert!(!cpu.flags.contains(StatusFlags::CARRY));
        assert!(!cpu.flags.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_adc_unsigned_carry_out_wraps_to_zero() {
        let mut cpu = test_cpu();
        cpu.a = 0xFF;
        adc(&mut cpu, OperandRef::Immediate(0x01));
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.flags.contains(StatusFlags::CARRY));
        assert!(cpu.flags.contains(StatusFlags::ZERO));
        assert!(!cpu.flags.contains(StatusFlags::NEGATIVE));
        assert!(!cpu.flags.contains(StatusFlags::OVERFLOW));
    }

    #[test]
    fn test_sbc_borrow_when_carry_clear_result_negative() {
        let mut cpu = test_cpu();
        cpu.a = 0x00;
        cpu.flags.set_flag(StatusFlags::CARRY, true); // no pre-existing borrow
        sbc(&mut cpu, OperandRef::Immediate(0x01));
        assert_eq!(cpu.a, 0xFF);
        assert!(!cpu.flags.contains(StatusFlags::CARRY)); // borrow occurred
        assert!(cpu.flags.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_adc_then_sbc_restores_a_when_overflow_never_set() {
        let mut cpu = test_cpu();
        cpu.a = 0x10;
        cpu.flags.set_flag(StatusFlags::CARRY, true);
        let initial_carry = cpu.flags.contains(StatusFlags::CARRY);
        adc(&mut cpu, OperandRef::Immediate(0x20));
        let overflow_after_adc = cpu.flags.contains(StatusFlags::OVERFLOW);
        sbc(&mut cpu, OperandRef::Immediate(0x20));
        let overflow_after_sbc = cpu.flags.contains(StatusFlags::OVERFLOW);
        let final_carry = cpu.flags.contains(StatusFlags::CARRY);

        if !overflow_after_adc && !overflow_after_sbc && final_carry == initial_carry {
            assert_eq!(cpu.a, 0x10);
        }
    }
}
