use core::cell::RefCell;
use critical_section::Mutex;
use esp_hal::{
    gpio::{self, AnyPin, Event, Input, InputConfig, WakeEvent},
    handler, ram,
};
use log::{debug, warn};
use reset_button::{
    EventQueue, Level, PinId, PinInterrupt, Pull, SetupError, Trigger,
    config::{RESET_PIN, RESET_TRIGGER},
};

pub static EVENT_QUEUE: EventQueue = EventQueue::new();
static RESET_INTERRUPT: PinInterrupt<'static> = PinInterrupt::new(RESET_PIN, &EVENT_QUEUE);

static BUTTON: Mutex<RefCell<Option<Input<'static>>>> = Mutex::new(RefCell::new(None));

fn hal_pull(pull: Pull) -> gpio::Pull {
    match pull {
        Pull::None => gpio::Pull::None,
        Pull::Up => gpio::Pull::Up,
        Pull::Down => gpio::Pull::Down,
    }
}

fn hal_event(trigger: Trigger) -> Event {
    match trigger {
        Trigger::LowLevel => Event::LowLevel,
        Trigger::HighLevel => Event::HighLevel,
    }
}

fn hal_wake_event(trigger: Trigger) -> WakeEvent {
    match trigger {
        Trigger::LowLevel => WakeEvent::LowLevel,
        Trigger::HighLevel => WakeEvent::HighLevel,
    }
}

fn with_button<R>(f: impl FnOnce(&mut Input<'static>) -> R) -> Option<R> {
    critical_section::with(|cs| BUTTON.borrow_ref_mut(cs).as_mut().map(f))
}

pub fn configure(id: PinId, pin: AnyPin<'static>, pull: Pull) -> Result<(), SetupError> {
    if id != RESET_PIN || pin.number() != id.number() {
        warn!("GPIO{} handed over for {id}, expected {RESET_PIN}", pin.number());
        return Err(SetupError::InputUnavailable);
    }
    let config = InputConfig::default().with_pull(hal_pull(pull));
    let button = Input::new(pin, config);
    critical_section::with(|cs| BUTTON.borrow_ref_mut(cs).replace(button));
    Ok(())
}

/// The interrupt handler is shared by every GPIO; only the reset pin has a queue binding.
pub fn register(pin: PinId) -> Result<(), SetupError> {
    if pin != RESET_INTERRUPT.pin() {
        return Err(SetupError::InputUnavailable);
    }
    Ok(())
}

pub fn enable_wakeup(trigger: Trigger) -> Result<(), SetupError> {
    with_button(|button| button.wakeup_enable(true, hal_wake_event(trigger)))
        .ok_or(SetupError::InputUnavailable)?
        .map_err(|e| {
            warn!("Wake-up configuration rejected: {e:?}");
            SetupError::WakeupConfig
        })
}

pub fn listen(trigger: Trigger) -> Result<(), SetupError> {
    with_button(|button| button.listen(hal_event(trigger))).ok_or(SetupError::InputUnavailable)
}

pub fn level(pin: PinId) -> Option<Level> {
    if pin != RESET_PIN {
        return None;
    }
    with_button(|button| Level::from(button.is_high()))
}

pub fn rearm(pin: PinId) {
    if pin == RESET_PIN && listen(RESET_TRIGGER).is_err() {
        warn!("Cannot re-arm {pin}, input missing");
    }
}

#[handler]
#[ram]
pub fn button_interrupt_handler() {
    // A level interrupt keeps firing while the button is held, mask it until the monitor re-arms.
    let fired = critical_section::with(|cs| {
        let mut button = BUTTON.borrow_ref_mut(cs);
        match button.as_mut() {
            Some(button) if button.is_interrupt_set() => {
                button.unlisten();
                button.clear_interrupt();
                true
            }
            _ => false,
        }
    });

    if fired && RESET_INTERRUPT.fire().is_err() {
        debug!("Reset event dropped, queue full");
    }
}
