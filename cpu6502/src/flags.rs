use bitflags::bitflags;

bitflags! {
    /// "P" - Status register.
    ///
    ///   7  bit  0
    /// ---- ----
    /// NVUB DIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt Disable
    /// |||| +---- Decimal
    /// |||+------ Break
    /// ||+------- Unused, conventionally 1 when pushed
    /// |+-------- Overflow
    /// +--------- Negative
    ///
    /// Bit positions are part of the external contract: PHP/PLP push and
    /// pull `P` as a raw byte that guest code inspects.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO               = 0b0000_0010;
        const INTERRUPT_DISABLE  = 0b0000_0100;
        const DECIMAL            = 0b0000_1000;
        const BREAK              = 0b0001_0000;
        const UNUSED             = 0b0010_0000;
        const OVERFLOW           = 0b0100_0000;
        const NEGATIVE           = 0b1000_0000;
    }
}

impl StatusFlags {
    pub fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.set(flag, value);
    }

    #[inline]
    pub fn carry(self) -> u8 {
        self.contains(StatusFlags::CARRY) as u8
    }

    /// Updates N and Z from `value`, the way nearly every instruction that
    /// defines a result does.
    pub fn update_zero_and_negative(&mut self, value: u8) {
        self.set_flag(StatusFlags::ZERO, value == 0);
        self.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    /// The byte PHP pushes: B and U forced to 1, independent of their live
    /// values in the register.
    pub fn to_pushed_byte(self) -> u8 {
        (self | StatusFlags::BREAK | StatusFlags::UNUSED).bits()
    }

    /// PLP/RTI convention: the pulled byte's B and U bits are discarded; B
    /// is cleared and U is set in the live register regardless of what was
    /// on the stack.
    pub fn from_pulled_byte(byte: u8) -> StatusFlags {
        let mut flags = StatusFlags::from_bits_truncate(byte);
        flags.set_flag(StatusFlags::BREAK, false);
        flags.set_flag(StatusFlags::UNUSED, true);
        flags
    }
}
