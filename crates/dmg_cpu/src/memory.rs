use crate::cpu::Bus;

/// Total addressable memory for the Game Boy (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// Flat 64 KiB address space with no banking or IO side effects.
///
/// Useful for hosts that only need a scratch memory behind the CPU, and for
/// unit tests. Real machines route addresses through cartridge mappers and
/// IO registers; that belongs to a different layer.
#[derive(Clone)]
pub struct FlatMemory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Copy `data` into memory starting at `addr`, wrapping at the end of
    /// the address space.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            let target = addr.wrapping_add(offset as u16);
            self.bytes[target as usize] = byte;
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &MEMORY_SIZE)
            .finish()
    }
}

impl Bus for FlatMemory {
    fn read8(&mut self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_wraps_at_end_of_address_space() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFF, &[0xAA, 0xBB]);
        assert_eq!(mem.read8(0xFFFF), 0xAA);
        assert_eq!(mem.read8(0x0000), 0xBB);
    }

    #[test]
    fn writes_are_visible_to_reads() {
        let mut mem = FlatMemory::default();
        mem.write8(0xC123, 0x5A);
        assert_eq!(mem.read8(0xC123), 0x5A);
        assert_eq!(mem.as_slice()[0xC123], 0x5A);
    }
}
