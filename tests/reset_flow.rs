use std::panic::{AssertUnwindSafe, catch_unwind};

use embassy_futures::block_on;
use reset_button::{
    EventQueue, Level, MonitorState, PinId, PinInterrupt, QueueFull, ResetMonitor,
    config::{EVENT_QUEUE_CAPACITY, RESET_PIN},
    platform::{FactoryReset, PinMonitor},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Rearm(PinId),
    Erase,
    Restart,
}

struct Restarted;

#[derive(Default)]
struct FakeBoard {
    calls: Vec<Call>,
}

impl PinMonitor for FakeBoard {
    fn level(&self, _pin: PinId) -> Option<Level> {
        Some(Level::Low)
    }

    fn rearm(&mut self, pin: PinId) {
        self.calls.push(Call::Rearm(pin));
    }
}

impl FactoryReset for FakeBoard {
    type Error = ();

    fn erase_storage(&mut self) -> Result<(), ()> {
        self.calls.push(Call::Erase);
        Ok(())
    }

    fn restart(&mut self) -> ! {
        self.calls.push(Call::Restart);
        std::panic::panic_any(Restarted)
    }
}

#[test]
fn reset_press_erases_and_restarts() {
    let queue: EventQueue = EventQueue::new();
    let interrupt = PinInterrupt::new(RESET_PIN, &queue);
    let mut monitor = ResetMonitor::new(&queue, RESET_PIN, FakeBoard::default());

    interrupt.fire().unwrap();
    let outcome = catch_unwind(AssertUnwindSafe(|| block_on(monitor.step())));

    let payload = outcome.expect_err("reset press must not return");
    assert!(payload.is::<Restarted>());
    assert_eq!(monitor.board().calls, [Call::Erase, Call::Restart]);
    assert_eq!(monitor.state(), MonitorState::Resetting);
}

#[test]
fn restart_follows_erase_without_another_receive() {
    let queue: EventQueue = EventQueue::new();
    let mut monitor = ResetMonitor::new(&queue, RESET_PIN, FakeBoard::default());

    queue.send_from_isr(RESET_PIN).unwrap();
    queue.send_from_isr(PinId(4)).unwrap();
    let _ = catch_unwind(AssertUnwindSafe(|| block_on(monitor.step())));

    assert_eq!(queue.len(), 1);
    assert_eq!(queue.try_receive(), Some(PinId(4)));
}

#[test]
fn other_pin_is_ignored_and_monitor_keeps_waiting() {
    let queue: EventQueue = EventQueue::new();
    let interrupt = PinInterrupt::new(PinId(4), &queue);
    let mut monitor = ResetMonitor::new(&queue, RESET_PIN, FakeBoard::default());

    interrupt.fire().unwrap();
    let handled = block_on(monitor.step());

    assert_eq!(handled, PinId(4));
    assert_eq!(monitor.board().calls, [Call::Rearm(PinId(4))]);
    assert_eq!(monitor.state(), MonitorState::Waiting);
    assert!(queue.is_empty());
}

#[test]
fn ignored_pins_are_drained_in_order() {
    let queue: EventQueue = EventQueue::new();
    let mut monitor = ResetMonitor::new(&queue, RESET_PIN, FakeBoard::default());

    for n in [1, 2, 3] {
        queue.send_from_isr(PinId(n)).unwrap();
    }
    let handled: Vec<PinId> = (0..3).map(|_| block_on(monitor.step())).collect();

    assert_eq!(handled, [PinId(1), PinId(2), PinId(3)]);
    assert!(!monitor.board().calls.contains(&Call::Erase));
}

#[test]
fn overflow_is_reported_to_producer_and_keeps_capacity() {
    let queue: EventQueue = EventQueue::new();

    for n in 0..EVENT_QUEUE_CAPACITY as u8 {
        assert_eq!(queue.send_from_isr(PinId(n)), Ok(()));
    }
    let overflow = PinId(EVENT_QUEUE_CAPACITY as u8);
    assert_eq!(queue.send_from_isr(overflow), Err(QueueFull));

    assert_eq!(queue.len(), EVENT_QUEUE_CAPACITY);
    let survivors: Vec<PinId> = std::iter::from_fn(|| queue.try_receive()).collect();
    assert_eq!(survivors.len(), EVENT_QUEUE_CAPACITY);
    assert!(!survivors.contains(&overflow));
}
