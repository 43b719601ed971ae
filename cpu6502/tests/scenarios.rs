//! End-to-end programs straight out of the spec's test scenarios: a ROM
//! image, a run to completion, and an assertion on the resulting CPU
//! state. Complements the unit tests colocated with each instruction
//! family - these exercise the full fetch/decode/resolve/execute/pace
//! loop instead of a single mnemonic in isolation.

use std::time::Duration;

use cpu6502::{Bus, ClockConfig, Cpu, Executor, StatusFlags};

fn run_program(bytes: &[u8]) -> Executor {
    let mut bus = Bus::new();
    bus.load_rom(bytes);
    let cpu = Cpu::with_pc(bus, 0x8000);
    // Nanosecond cycle period: these tests assert on CPU state, not
    // wall-clock pacing, so there's no reason to actually wait at 2 MHz.
    let mut executor = Executor::new(cpu, ClockConfig::from_period(Duration::from_nanos(1)));
    executor.max_ticks = Some(10_000);
    executor.run();
    executor
}

#[test]
fn scenario_1_lda_immediate() {
    let executor = run_program(&[0xA9, 0x42, 0x00]);
    assert_eq!(executor.cpu.a, 0x42);
    assert!(!executor.cpu.flags.contains(StatusFlags::ZERO));
    assert!(!executor.cpu.flags.contains(StatusFlags::NEGATIVE));
}

#[test]
fn scenario_2_branch_skips_following_load() {
    // LDA #0; BEQ +2; LDA #FF; BRK
    let executor = run_program(&[0xA9, 0x00, 0xF0, 0x02, 0xA9, 0xFF, 0x00]);
    assert_eq!(executor.cpu.a, 0x00);
}

#[test]
fn scenario_3_clc_lda_adc_signed_overflow() {
    // CLC; LDA #$50; ADC #$50
    let executor = run_program(&[0x18, 0xA9, 0x50, 0x69, 0x50, 0x00]);
    assert_eq!(executor.cpu.a, 0xA0);
    assert!(!executor.cpu.flags.contains(StatusFlags::CARRY));
    assert!(executor.cpu.flags.contains(StatusFlags::OVERFLOW));
    assert!(executor.cpu.flags.contains(StatusFlags::NEGATIVE));
    assert!(!executor.cpu.flags.contains(StatusFlags::ZERO));
}

#[test]
fn scenario_4_dex_bne_loop_runs_three_times() {
    // LDX #3; loop: DEX; BNE loop
    let executor = run_program(&[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0x00]);
    assert_eq!(executor.cpu.x, 0);
    assert!(executor.cpu.flags.contains(StatusFlags::ZERO));
    assert!(!executor.cpu.flags.contains(StatusFlags::NEGATIVE));
}

#[test]
fn scenario_5_pha_pla_roundtrip() {
    // LDA #5; PHA; LDA #0; PLA
    let executor = run_program(&[0xA9, 0x05, 0x48, 0xA9, 0x00, 0x68, 0x00]);
    assert_eq!(executor.cpu.a, 0x05);
    assert!(!executor.cpu.flags.contains(StatusFlags::ZERO));
    assert!(!executor.cpu.flags.contains(StatusFlags::NEGATIVE));
    assert_eq!(executor.cpu.sp, cpu6502::cpu::STACK_RESET);
}

#[test]
fn scenario_6_jsr_nop_rts_returns_to_brk() {
    // At $8000: JSR $8005; BRK at $8003; NOP at $8005; RTS at $8006.
    let mut bus = Bus::new();
    bus.load_rom(&[0x20, 0x05, 0x80, 0x00, 0x00, 0xEA, 0x60]);
    let cpu = Cpu::with_pc(bus, 0x8000);
    let mut executor = Executor::new(cpu, ClockConfig::from_period(Duration::from_nanos(1)));
    executor.max_ticks = Some(10_000);
    // run() executes JSR, then NOP, then RTS, stopping only once the next
    // opcode is BRK - which by then is the instruction right after JSR.
    executor.run();
    assert_eq!(executor.cpu.pc, 0x8003);
}

#[test]
fn boundary_zero_page_indexed_x_wraps_within_zero_page() {
    // LDA $01,X with X=$FF should read zero page $00, not $0100.
    let mut bus = Bus::new();
    bus.write_u8(0x00, 0x7A);
    bus.load_rom(&[0xB5, 0x01, 0x00]);
    let cpu = Cpu::with_pc(bus, 0x8000);
    let mut executor = Executor::new(cpu, ClockConfig::from_period(Duration::from_nanos(1)));
    executor.cpu.x = 0xFF;
    executor.max_ticks = Some(10);
    executor.run();
    assert_eq!(executor.cpu.a, 0x7A);
}

#[test]
fn boundary_adc_0xff_plus_1_wraps_to_zero() {
    let executor = run_program(&[0xA9, 0xFF, 0x69, 0x01, 0x00]);
    assert_eq!(executor.cpu.a, 0x00);
    assert!(executor.cpu.flags.contains(StatusFlags::CARRY));
    assert!(executor.cpu.flags.contains(StatusFlags::ZERO));
    assert!(!executor.cpu.flags.contains(StatusFlags::NEGATIVE));
    assert!(!executor.cpu.flags.contains(StatusFlags::OVERFLOW));
}

#[test]
fn boundary_sbc_borrow_sets_negative_and_clears_carry() {
    // LDA #0; SEC; SBC #1 -> 0x00 - 0x01 with no incoming borrow.
    let executor = run_program(&[0xA9, 0x00, 0x38, 0xE9, 0x01, 0x00]);
    assert_eq!(executor.cpu.a, 0xFF);
    assert!(!executor.cpu.flags.contains(StatusFlags::CARRY));
    assert!(executor.cpu.flags.contains(StatusFlags::NEGATIVE));
}
