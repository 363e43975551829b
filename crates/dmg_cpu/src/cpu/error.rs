use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The byte has no meaning on SM83 hardware (e.g. 0xD3, 0xFD).
    #[error("illegal opcode 0x{opcode:02X} at pc=0x{pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },
}

pub type Result<T> = std::result::Result<T, CpuError>;
