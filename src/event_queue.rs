//! Bounded mailbox between the GPIO interrupt and the reset monitor.
//!
//! The producer side never blocks: a send into a full queue is rejected and the
//! entries already queued are kept. The consumer side suspends until an entry
//! arrives.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::config::EVENT_QUEUE_CAPACITY;
use crate::error::QueueFull;
use crate::pin::PinId;

pub struct EventQueue<const N: usize = EVENT_QUEUE_CAPACITY> {
    channel: Channel<CriticalSectionRawMutex, PinId, N>,
}

impl<const N: usize> EventQueue<N> {
    pub const fn new() -> Self {
        EventQueue {
            channel: Channel::new(),
        }
    }

    /// Interrupt-safe, non-blocking enqueue.
    pub fn send_from_isr(&self, pin: PinId) -> Result<(), QueueFull> {
        self.channel.try_send(pin).map_err(|_| QueueFull)
    }

    /// Waits without timeout for the next pin id.
    pub async fn receive(&self) -> PinId {
        self.channel.receive().await
    }

    pub fn try_receive(&self) -> Option<PinId> {
        self.channel.try_receive().ok()
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.channel.is_full()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Interrupt handler bound to one pin at registration time.
pub struct PinInterrupt<'q, const N: usize = EVENT_QUEUE_CAPACITY> {
    pin: PinId,
    queue: &'q EventQueue<N>,
}

impl<'q, const N: usize> PinInterrupt<'q, N> {
    pub const fn new(pin: PinId, queue: &'q EventQueue<N>) -> Self {
        PinInterrupt { pin, queue }
    }

    pub const fn pin(&self) -> PinId {
        self.pin
    }

    /// Forwards the bound pin id to the queue. A full queue drops the event.
    pub fn fire(&self) -> Result<(), QueueFull> {
        self.queue.send_from_isr(self.pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn preserves_fifo_order() {
        let queue: EventQueue<4> = EventQueue::new();
        queue.send_from_isr(PinId(3)).unwrap();
        queue.send_from_isr(PinId(7)).unwrap();

        assert_eq!(block_on(queue.receive()), PinId(3));
        assert_eq!(block_on(queue.receive()), PinId(7));
        assert!(queue.is_empty());
    }

    #[test]
    fn full_queue_rejects_without_blocking() {
        let queue: EventQueue<2> = EventQueue::new();
        assert_eq!(queue.send_from_isr(PinId(1)), Ok(()));
        assert_eq!(queue.send_from_isr(PinId(2)), Ok(()));
        assert!(queue.is_full());

        assert_eq!(queue.send_from_isr(PinId(3)), Err(QueueFull));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn overflow_keeps_oldest_entries() {
        let queue: EventQueue = EventQueue::new();
        for n in 0..(EVENT_QUEUE_CAPACITY as u8 + 5) {
            let _ = queue.send_from_isr(PinId(n));
        }

        assert_eq!(queue.len(), queue.capacity());
        for n in 0..EVENT_QUEUE_CAPACITY as u8 {
            assert_eq!(queue.try_receive(), Some(PinId(n)));
        }
        assert_eq!(queue.try_receive(), None);
    }

    #[test]
    fn pin_interrupt_sends_bound_pin() {
        let queue: EventQueue<1> = EventQueue::new();
        let interrupt = PinInterrupt::new(PinId(9), &queue);

        assert_eq!(interrupt.fire(), Ok(()));
        assert_eq!(interrupt.fire(), Err(QueueFull));
        assert_eq!(queue.try_receive(), Some(PinId(9)));
    }
}
