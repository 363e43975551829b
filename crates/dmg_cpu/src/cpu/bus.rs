/// Memory port seen by the CPU.
///
/// Banking, IO register mapping and echo regions live behind this trait;
/// the instruction core only issues byte reads and writes. Reads take
/// `&mut self` because IO registers may have read side effects.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        (**self).read8(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        (**self).write8(addr, value)
    }
}
