use crate::cpu::Cpu;
use crate::flags::StatusFlags;
use crate::operand::OperandRef;

/// Shared branch core: if `condition` holds, jumps to the already-resolved
/// relative target and reports the extra cycles taken branches cost - +1
/// if taken, +1 more (so +2 total) if the target lands on a different
/// page than the instruction following the branch. `page_crossed` was
/// already computed by the addressing evaluator against that same
/// instruction-following address, so it is reused as-is here.
fn branch(cpu: &mut Cpu, operand: OperandRef, page_crossed: bool, condition: bool) -> u8 {
    if !condition {
        return 0;
    }
    cpu.pc = operand.address();
    if page_crossed {
        2
    } else {
        1
    }
}

pub fn bpl(cpu: &mut Cpu, operand: OperandRef, page_crossed: bool) -> u8 {
    let taken = !cpu.flags.contains(StatusFlags::NEGATIVE);
    branch(cpu, operand, page_crossed, taken)
}

pub fn bmi(cpu: &mut Cpu, operand: OperandRef, page_crossed: bool) -> u8 {
    let taken = cpu.flags.contains(StatusFlags::NEGATIVE);
    branch(cpu, operand, page_crossed, taken)
}

pub fn bvc(cpu: &mut Cpu, operand: OperandRef, page_crossed: bool) -> u8 {
    let taken = !cpu.flags.contains(StatusFlags::OVERFLOW);
    branch(cpu, operand, page_crossed, taken)
}

pub fn bvs(cpu: &mut Cpu, operand: OperandRef, page_crossed: bool) -> u8 {
    let taken = cpu.flags.contains(StatusFlags::OVERFLOW);
    branch(cpu, operand, page_crossed, taken)
}

pub fn bcc(cpu: &mut Cpu, operand: OperandRef, page_crossed: bool) -> u8 {
    let taken = !cpu.flags.contains(StatusFlags::CARRY);
    branch(cpu, operand, page_crossed, taken)
}

pub fn bcs(cpu: &mut Cpu, operand: OperandRef, page_crossed: bool) -> u8 {
    let taken = cpu.flags.contains(StatusFlags::CARRY);
    branch(cpu, operand, page_crossed, taken)
}

pub fn bne(cpu: &mut Cpu, operand: OperandRef, page_crossed: bool) -> u8 {
    let taken = !cpu.flags.contains(StatusFlags::ZERO);
    branch(cpu, operand, page_crossed, taken)
}

pub fn beq(cpu: &mut Cpu, operand: OperandRef, page_crossed: bool) -> u8 {
    let taken = cpu.flags.contains(StatusFlags::ZERO);
    branch(cpu, operand, page_crossed, taken)
}
