//! Per-resource request sequencing
//!
//! Loads draw a sequence number when issued; the view applies a snapshot only
//! if it is newer than the last one applied for the same resource. A slow
//! status poll can therefore never overwrite the result of a reload that was
//! issued after it.

use crate::events::Resource;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out increasing sequence numbers, one counter per resource.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    status: AtomicU64,
    accounts: AtomicU64,
    urls: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number for a request being issued now. Starts at 1.
    pub fn next(&self, resource: Resource) -> u64 {
        let counter = match resource {
            Resource::Status => &self.status,
            Resource::Accounts => &self.accounts,
            Resource::Urls => &self.urls,
        };
        counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Newest sequence number applied per resource.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppliedSequence {
    status: u64,
    accounts: u64,
    urls: u64,
}

impl AppliedSequence {
    /// Records `seq` and returns true if it is newer than anything applied so far.
    pub fn accept(&mut self, resource: Resource, seq: u64) -> bool {
        let applied = match resource {
            Resource::Status => &mut self.status,
            Resource::Accounts => &mut self.accounts,
            Resource::Urls => &mut self.urls,
        };
        if seq > *applied {
            *applied = seq;
            true
        } else {
            false
        }
    }
}
