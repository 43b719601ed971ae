use crate::bus::Bus;

/// What an addressing-mode resolution yielded: either a location in memory,
/// the accumulator, or a read-only immediate byte. Read-modify-write
/// instructions (`ASL`, `INC`, ...) accept `Address`/`Accumulator`;
/// `Immediate` is read-only and only `IMMEDIATE` mode produces it.
///
/// This replaces the teacher's `(Option<u16>, u8)` pair return - a tagged
/// variant makes "no address, because this is immediate/accumulator" a
/// type-level fact instead of a convention callers have to remember.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandRef {
    Address(u16),
    Accumulator,
    Immediate(u8),
    /// `IMPLIED` mode: the instruction has no operand at all (`CLC`, `NOP`, ...).
    Implied,
}

impl OperandRef {
    /// Reads the operand's current value. Panics on `Implied`, which no
    /// instruction that calls this ever resolves to.
    pub fn load(self, cpu_a: u8, bus: &Bus) -> u8 {
        match self {
            OperandRef::Address(addr) => bus.read_u8(addr),
            OperandRef::Accumulator => cpu_a,
            OperandRef::Immediate(value) => value,
            OperandRef::Implied => unreachable!("implied mode has no operand to load"),
        }
    }

    pub fn address(self) -> u16 {
        match self {
            OperandRef::Address(addr) => addr,
            other => unreachable!("{:?} has no effective address", other),
        }
    }
}
