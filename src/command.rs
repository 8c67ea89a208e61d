//! Control commands from outside the poll cycle
//!
//! A button handler or fault routine may need to drive the lights without
//! waiting for a gesture. Commands go through a bounded queue built on
//! `critical-section` and `heapless::Deque`, so producers may run in
//! interrupt context; the scheduler drains the queue once per cycle.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// A request for the control loop to act on next cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start (or restart) the activation sequence
    Activate,
    /// Abort any running animation and clear the lights
    TurnOff,
    /// Change the base brightness (0-255)
    SetBrightness(u8),
}

/// Bounded, interrupt-safe command queue
///
/// `SIZE` commands are buffered; producers get rejected ones back rather
/// than blocking. Statically allocatable (`new` is const).
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a producer handle for this queue
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Enqueue a command; hands it back if the queue is full
    pub fn try_send(&self, command: Command) -> Result<(), Command> {
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().push_back(command)
        })
    }

    /// Dequeue the oldest pending command, if any
    pub fn try_receive(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight `Copy` producer handle for a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Enqueue a command; hands it back if the queue is full
    pub fn try_send(&self, command: Command) -> Result<(), Command> {
        self.queue.try_send(command)
    }
}
