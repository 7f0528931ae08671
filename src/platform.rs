use core::fmt::Debug;

use crate::pin::{Level, PinId, Pull, Trigger};

/// Pin access needed by the monitor task.
pub trait PinMonitor {
    /// Current level of `pin`, `None` if it is not an input the board knows.
    fn level(&self, pin: PinId) -> Option<Level>;

    /// Unmasks the interrupt that the handler masked before enqueueing.
    fn rearm(&mut self, pin: PinId);
}

pub trait FactoryReset {
    type Error: Debug;

    /// Wipes all non-volatile key/value storage.
    fn erase_storage(&mut self) -> Result<(), Self::Error>;

    fn restart(&mut self) -> !;
}

/// Platform calls made once at startup, in the order `setup::install` drives them.
pub trait SetupPlatform {
    type Error: Debug;

    fn spawn_monitor(&mut self) -> Result<(), Self::Error>;
    fn configure_input(&mut self, pin: PinId, pull: Pull) -> Result<(), Self::Error>;
    /// Idempotent.
    fn install_isr_service(&mut self) -> Result<(), Self::Error>;
    fn register_handler(&mut self, pin: PinId) -> Result<(), Self::Error>;
    fn enable_wakeup(&mut self, pin: PinId, trigger: Trigger) -> Result<(), Self::Error>;
    fn enable_interrupt(&mut self, pin: PinId, trigger: Trigger) -> Result<(), Self::Error>;
}
