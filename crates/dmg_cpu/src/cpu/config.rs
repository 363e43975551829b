use typed_builder::TypedBuilder;

/// Register contents the CPU starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootState {
    /// State left behind by the DMG boot ROM when it jumps to 0x0100.
    #[default]
    Dmg,
    /// Every register zero, PC=0x0000. Used when running a boot ROM.
    Zeroed,
}

/// Behavioural switches for the CPU core.
///
/// The defaults reproduce the simplified model: EI enables interrupts
/// immediately and the HALT bug is not emulated.
///
/// ```
/// use dmg_cpu::{BootState, CpuConfig};
///
/// let config = CpuConfig::builder()
///     .ei_delay(true)
///     .boot_state(BootState::Zeroed)
///     .build();
/// assert!(config.ei_delay);
/// assert!(!config.halt_bug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    /// Delay IME by one instruction after EI, as real hardware does.
    #[builder(default = false)]
    pub ei_delay: bool,
    /// HALT with IME=0 and an interrupt already pending does not halt and
    /// the following opcode byte is read twice.
    #[builder(default = false)]
    pub halt_bug: bool,
    #[builder(default)]
    pub boot_state: BootState,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
