use crate::pin::{PinId, Pull, Trigger};

/// BOOT button on ESP32-C3 devkits. The firmware hands over `GPIO9` to match.
pub const RESET_PIN: PinId = PinId(9);

/// The button pulls the line to ground.
pub const RESET_PULL: Pull = Pull::Up;
pub const RESET_TRIGGER: Trigger = Trigger::LowLevel;

pub const EVENT_QUEUE_CAPACITY: usize = 10;

pub const MONITOR_TASK_NAME: &str = "reset_monitor";
