use embassy_executor::Spawner;
use esp_hal::gpio::{AnyPin, Io};
use log::{error, info};
use reset_button::{
    Level, PinId, Pull, ResetMonitor, SetupError, Trigger,
    config::{MONITOR_TASK_NAME, RESET_PIN},
    platform::{FactoryReset, PinMonitor, SetupPlatform},
};

use crate::button::{self, EVENT_QUEUE};
use crate::storage::{NvsStorage, StorageError};

/// Hardware side of the monitor task.
pub struct EspBoard {
    storage: NvsStorage,
}

impl EspBoard {
    pub fn new(storage: NvsStorage) -> Self {
        EspBoard { storage }
    }
}

impl PinMonitor for EspBoard {
    fn level(&self, pin: PinId) -> Option<Level> {
        button::level(pin)
    }

    fn rearm(&mut self, pin: PinId) {
        button::rearm(pin)
    }
}

impl FactoryReset for EspBoard {
    type Error = StorageError;

    fn erase_storage(&mut self) -> Result<(), StorageError> {
        self.storage.erase_all()
    }

    fn restart(&mut self) -> ! {
        esp_hal::system::software_reset()
    }
}

#[embassy_executor::task]
async fn reset_monitor_task(board: EspBoard) {
    ResetMonitor::new(&EVENT_QUEUE, RESET_PIN, board).run().await
}

pub struct EspSetup {
    spawner: Spawner,
    io: Io<'static>,
    pin: Option<AnyPin<'static>>,
    board: Option<EspBoard>,
    isr_installed: bool,
}

impl EspSetup {
    pub fn new(spawner: Spawner, io: Io<'static>, pin: AnyPin<'static>, board: EspBoard) -> Self {
        EspSetup {
            spawner,
            io,
            pin: Some(pin),
            board: Some(board),
            isr_installed: false,
        }
    }
}

impl SetupPlatform for EspSetup {
    type Error = SetupError;

    fn spawn_monitor(&mut self) -> Result<(), SetupError> {
        let board = self.board.take().ok_or(SetupError::TaskSpawn)?;
        self.spawner
            .spawn(reset_monitor_task(board))
            .map_err(|e| {
                error!("Failed to spawn {MONITOR_TASK_NAME} task: {:?}", e);
                SetupError::TaskSpawn
            })?;
        info!("Started {MONITOR_TASK_NAME} task");
        Ok(())
    }

    fn configure_input(&mut self, pin: PinId, pull: Pull) -> Result<(), SetupError> {
        let gpio = self.pin.take().ok_or(SetupError::InputUnavailable)?;
        button::configure(pin, gpio, pull)
    }

    fn install_isr_service(&mut self) -> Result<(), SetupError> {
        if !self.isr_installed {
            self.io.set_interrupt_handler(button::button_interrupt_handler);
            self.isr_installed = true;
        }
        Ok(())
    }

    fn register_handler(&mut self, pin: PinId) -> Result<(), SetupError> {
        button::register(pin)
    }

    fn enable_wakeup(&mut self, _pin: PinId, trigger: Trigger) -> Result<(), SetupError> {
        button::enable_wakeup(trigger)
    }

    fn enable_interrupt(&mut self, _pin: PinId, trigger: Trigger) -> Result<(), SetupError> {
        button::listen(trigger)
    }
}
