use log::{error, info, warn};

use crate::config::EVENT_QUEUE_CAPACITY;
use crate::event_queue::EventQueue;
use crate::pin::PinId;
use crate::platform::{FactoryReset, PinMonitor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Waiting,
    /// Terminal, ends in a restart.
    Resetting,
}

/// Consumer side of the reset button handoff.
///
/// Waits on the event queue, logs every pin that fired, and turns a press of
/// the reset pin into a storage erase followed by a restart.
pub struct ResetMonitor<'q, B, const N: usize = EVENT_QUEUE_CAPACITY> {
    events: &'q EventQueue<N>,
    reset_pin: PinId,
    board: B,
    state: MonitorState,
}

impl<'q, B, const N: usize> ResetMonitor<'q, B, N>
where
    B: PinMonitor + FactoryReset,
{
    pub fn new(events: &'q EventQueue<N>, reset_pin: PinId, board: B) -> Self {
        ResetMonitor {
            events,
            reset_pin,
            board,
            state: MonitorState::Waiting,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    /// Never returns: the only way out is the restart issued by [`Self::handle`].
    pub async fn run(&mut self) {
        info!("Watching {} for factory reset", self.reset_pin);
        loop {
            self.step().await;
        }
    }

    /// Waits for one event and handles it. Returns the pin when it was not the reset pin.
    pub async fn step(&mut self) -> PinId {
        let pin = self.events.receive().await;
        self.handle(pin);
        pin
    }

    pub fn handle(&mut self, pin: PinId) {
        match self.board.level(pin) {
            Some(level) => info!("{pin} interrupt, level: {}", u8::from(level)),
            None => info!("{pin} interrupt, level: unknown"),
        }

        if pin == self.reset_pin {
            self.factory_reset();
        }

        self.board.rearm(pin);
    }

    fn factory_reset(&mut self) -> ! {
        self.state = MonitorState::Resetting;
        warn!("Factory reset requested, erasing persistent storage");
        // A partial erase followed by a restart beats hanging here.
        if let Err(e) = self.board.erase_storage() {
            error!("Failed to erase persistent storage: {e:?}, restarting anyway");
        }
        info!("Restarting");
        self.board.restart()
    }
}
