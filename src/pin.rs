use core::fmt;

/// Identifier of a hardware input line, i.e. its GPIO number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId(pub u8);

impl PinId {
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(value: u8) -> Self {
        PinId(value)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for u8 {
    fn from(value: Level) -> Self {
        match value {
            Level::Low => 0,
            Level::High => 1,
        }
    }
}

/// Bias applied to an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Level-triggered interrupt condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    LowLevel,
    HighLevel,
}

impl Trigger {
    /// Level at which this trigger fires.
    pub const fn active_level(self) -> Level {
        match self {
            Trigger::LowLevel => Level::Low,
            Trigger::HighLevel => Level::High,
        }
    }
}
