//! Register access interface
//!
//! The RCG block sits behind a memory-mapped register window owned by the
//! platform; the driver never touches memory directly. Implementations
//! typically wrap a volatile MMIO region or a bus-attached register map.
//! Access is synchronous and may fail (bus error); callers propagate such
//! failures immediately.

/// 32-bit register file, addressed by byte offset.
pub trait RegisterAccess {
    /// Transport error type
    type Error;

    /// Reads the register at `offset`.
    fn read(&mut self, offset: u32) -> Result<u32, Self::Error>;

    /// Writes the register at `offset`.
    fn write(&mut self, offset: u32, value: u32) -> Result<(), Self::Error>;

    /// Read-modify-write of the bits selected by `mask`; all other bits
    /// are preserved. The write is skipped when the register already
    /// holds the target value.
    fn update_bits(&mut self, offset: u32, mask: u32, value: u32) -> Result<(), Self::Error> {
        let old = self.read(offset)?;
        let new = (old & !mask) | (value & mask);
        if new != old {
            self.write(offset, new)?;
        }
        Ok(())
    }
}
