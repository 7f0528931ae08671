#![cfg_attr(not(test), no_std)]

//! Factory reset on a button press.
//!
//! A GPIO interrupt pushes the pin id into a bounded queue; a monitor task
//! drains it and erases persistent storage then restarts when the reset pin
//! fired. The hardware side lives behind the traits in [`platform`].

pub mod config;
pub mod error;
pub mod event_queue;
pub mod monitor;
pub mod pin;
pub mod platform;
pub mod setup;

pub use error::{QueueFull, SetupError};
pub use event_queue::{EventQueue, PinInterrupt};
pub use monitor::{MonitorState, ResetMonitor};
pub use pin::{Level, PinId, Pull, Trigger};
