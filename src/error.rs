use core::fmt;

/// Returned to the interrupt producer when the event queue has no free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull;

impl fmt::Display for QueueFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event queue full")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    TaskSpawn,
    InputUnavailable,
    WakeupConfig,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TaskSpawn => write!(f, "failed to spawn reset monitor task"),
            Self::InputUnavailable => write!(f, "reset input not configured"),
            Self::WakeupConfig => write!(f, "failed to enable wake-up on reset input"),
        }
    }
}
