//! Deferred tracking updates.
//!
//! Drag samples arrive inside the host's gesture callback, where mutating
//! layout is unsafe for many toolkits. Each sample's surface update is queued
//! here instead and run by the host on the next turn of its UI event loop.
//! The queue is strictly FIFO: every entry carries an absolute progress, so
//! order is what keeps the last applied frame current.

use std::collections::VecDeque;

use crate::state::Progress;

/// A tracking update waiting to be applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingUpdate {
    /// Monotonic sequence number, for diagnostics.
    pub seq: u64,
    pub progress: Progress,
}

/// FIFO of tracking updates owned by the UI context.
#[derive(Debug, Default)]
pub struct MainQueue {
    pending: VecDeque<PendingUpdate>,
    next_seq: u64,
}

impl MainQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, progress: Progress) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push_back(PendingUpdate { seq, progress });
        seq
    }

    pub fn pop(&mut self) -> Option<PendingUpdate> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop everything queued without running it.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
