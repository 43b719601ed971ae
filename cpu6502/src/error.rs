use thiserror::Error;

/// Errors the core itself can raise. Memory accesses cannot go out of
/// range (16-bit address, 64 KiB array) and arithmetic cannot trap (all
/// of it is modular), so this is deliberately a small enum.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// An opcode byte has no entry in the decode table. Carries the
    /// offending byte so the caller can log it.
    #[error("Unexpected opcode {opcode:#04X}")]
    UnknownOpcode { opcode: u8 },
}
