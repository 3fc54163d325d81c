use crate::error::EngineError;
use std::collections::VecDeque;

/// Bounded FIFO between a grammar that emits values and the caller that
/// pulls them.
///
/// A grammar step may emit several values before returning; the driver hands
/// them out one pull at a time, oldest first. The capacity bounds how many
/// values a single step may leave behind.
#[derive(Debug, Clone)]
pub struct Mailbox<T> {
    queue: VecDeque<T>,
    capacity: usize,
}

impl<T> Mailbox<T> {
    pub fn with_capacity(capacity: usize) -> Result<Self, EngineError> {
        if capacity == 0 {
            return Err(EngineError::ZeroCapacity);
        }
        Ok(Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Queues `value` behind everything emitted before it.
    pub fn emit(&mut self, value: T) -> Result<(), EngineError> {
        if self.queue.len() >= self.capacity {
            return Err(EngineError::MailboxOverflow {
                capacity: self.capacity,
            });
        }
        self.queue.push_back(value);
        Ok(())
    }

    /// Takes the oldest pending value, if any.
    pub fn try_take(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
