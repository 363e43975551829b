/// Immediate bytes handed to [`Cpu::execute`](super::Cpu::execute) by a
/// caller that has already fetched them. Handlers drain this before falling
/// back to reading at PC.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct Operands {
    bytes: [u8; 2],
    len: u8,
    next: u8,
}

impl Operands {
    /// Instructions carry at most two immediate bytes; anything beyond that
    /// is ignored.
    pub(super) fn load(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(self.bytes.len());
        self.bytes[..len].copy_from_slice(&bytes[..len]);
        self.len = len as u8;
        self.next = 0;
    }

    #[inline]
    pub(super) fn take(&mut self) -> Option<u8> {
        if self.next < self.len {
            let value = self.bytes[self.next as usize];
            self.next += 1;
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    pub(super) fn clear(&mut self) {
        self.len = 0;
        self.next = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_drains_in_order_then_stops() {
        let mut ops = Operands::default();
        ops.load(&[0x34, 0x12, 0xFF]);
        assert_eq!(ops.take(), Some(0x34));
        assert_eq!(ops.take(), Some(0x12));
        assert_eq!(ops.take(), None);
    }

    #[test]
    fn clear_discards_leftovers() {
        let mut ops = Operands::default();
        ops.load(&[0x01]);
        ops.clear();
        assert_eq!(ops.take(), None);
    }
}
