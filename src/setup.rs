//! Startup sequence for the reset button.
//!
//! The event queue is a `static`, so it exists before anything here runs. The
//! monitor task is started before the interrupt is enabled, so the first press
//! always has a consumer.

use log::{debug, error, info};

use crate::config::{RESET_PULL, RESET_TRIGGER};
use crate::pin::PinId;
use crate::platform::SetupPlatform;

pub fn install<P: SetupPlatform>(platform: &mut P, pin: PinId) -> Result<(), P::Error> {
    let result = run_steps(platform, pin);
    match &result {
        Ok(()) => info!("Factory reset armed on {pin}"),
        Err(e) => error!("Failed to arm factory reset on {pin}: {e:?}"),
    }
    result
}

fn run_steps<P: SetupPlatform>(platform: &mut P, pin: PinId) -> Result<(), P::Error> {
    platform.spawn_monitor()?;
    debug!("Reset monitor started");

    platform.configure_input(pin, RESET_PULL)?;
    platform.install_isr_service()?;
    platform.register_handler(pin)?;
    debug!("Interrupt handler registered for {pin}");

    platform.enable_wakeup(pin, RESET_TRIGGER)?;
    platform.enable_interrupt(pin, RESET_TRIGGER)
}
