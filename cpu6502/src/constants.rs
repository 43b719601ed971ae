/// Fixed addresses in the 64 KiB flat address space. There is no
/// memory-mapped I/O in this core: no PPU/APU registers, no mirroring.
/// A surrounding system that wires those up would overlay them on top of
/// this flat map; this crate just guarantees the handful of addresses the
/// 6502 ISA itself gives meaning to.
pub mod memory_range {
    /// First 256 bytes, addressable with single-byte operands.
    pub const ZERO_PAGE_START: u16 = 0x0000;
    pub const ZERO_PAGE_END: u16 = 0x00FF;

    /// Stack page. The high byte of every stack address; "S" is the low byte.
    pub const STACK_PAGE: u8 = 0x01;

    /// Where the teacher places ROM bytes when a cartridge is loaded.
    pub const ROM_START: u16 = 0x8000;
}

/// 16-bit little-endian pointers at fixed high-memory addresses, populated
/// by the ROM, from which `PC` (or `PC`/`P`, for BRK/IRQ) is loaded on the
/// corresponding event.
#[rustfmt::skip]
pub enum InterruptVectors {
    /// The Non-Maskable Interrupt, NMI ($FFFA). Not raised by anything in
    /// this core; kept for ROMs that read/patch the vector themselves.
    NonMaskableInterrupt = 0xFFFA,
    ResetVector          = 0xFFFC,
    IrqBrkVector         = 0xFFFE,
}
