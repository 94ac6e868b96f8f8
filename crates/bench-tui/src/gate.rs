//! Startup input gate.
//!
//! Keys that arrive before the component lists are loaded are held in
//! arrival order and handed back, all at once, when the gate opens.

use std::collections::VecDeque;

#[derive(Debug)]
pub struct InitGate<T> {
    open: bool,
    queue: VecDeque<T>,
}

impl<T> Default for InitGate<T> {
    fn default() -> Self {
        Self {
            open: false,
            queue: VecDeque::new(),
        }
    }
}

impl<T> InitGate<T> {
    /// A closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Returns the item for immediate dispatch when open; otherwise queues it.
    pub fn submit(&mut self, item: T) -> Option<T> {
        if self.open {
            return Some(item);
        }
        self.queue.push_back(item);
        log::debug!("Input queued until loading completes ({} pending)", self.queue.len());
        None
    }

    /// Open the gate and take every queued item, oldest first. Opening an
    /// already open gate yields nothing.
    pub fn open(&mut self) -> Vec<T> {
        self.open = true;
        let replay: Vec<T> = self.queue.drain(..).collect();
        if !replay.is_empty() {
            log::debug!("Replaying {} queued input(s)", replay.len());
        }
        replay
    }
}
