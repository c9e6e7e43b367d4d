//! Test utilities for address derivation.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use crate::{AccountId, NonceLookup};

/// A [`NonceLookup`] that answers with a fixed value and records every query, so tests can tell
/// whether the `CREATE` path was taken.
#[derive(Debug, Default)]
pub struct CountingNonceLookup {
    nonce: Option<u64>,
    calls: AtomicUsize,
    queried: Mutex<Vec<AccountId>>,
}

impl CountingNonceLookup {
    /// Creates a lookup answering every query with `nonce`.
    pub fn new(nonce: Option<u64>) -> Self {
        Self { nonce, ..Default::default() }
    }

    /// Returns how many times the lookup was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns the accounts the lookup was invoked with, in order.
    pub fn queried(&self) -> Vec<AccountId> {
        self.queried.lock().map(|queried| queried.clone()).unwrap_or_default()
    }
}

impl NonceLookup for CountingNonceLookup {
    async fn account_nonce(&self, account: &AccountId) -> Option<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queried) = self.queried.lock() {
            queried.push(*account);
        }
        self.nonce
    }
}
