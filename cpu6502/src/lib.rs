//! A MOS 6502 instruction-set interpreter: decode table, addressing-mode
//! evaluator, instruction semantics, and a cycle-paced execution loop
//! against a flat 64 KiB address space. ROM file parsing, any PPU/APU,
//! and CLI argument handling are external collaborators - see the
//! `emulator` binary crate for those.

pub mod bus;
pub mod constants;
pub mod cpu;
pub mod error;
pub mod executor;
pub mod flags;
mod instructions;
pub mod opcodes;
pub mod operand;
pub mod pacer;

pub use bus::Bus;
pub use cpu::Cpu;
pub use error::CpuError;
pub use executor::Executor;
pub use flags::StatusFlags;
pub use opcodes::{Mnemonic, Mode};
pub use operand::OperandRef;
pub use pacer::{ClockConfig, Pacer};
