//! The nonce lookup capability required by `CREATE` derivation.

use core::future::Future;
use std::sync::Arc;

use crate::AccountId;

/// Looks up the current transaction counter of an account.
///
/// Implementations typically query live chain state. The lookup is invoked at most once per
/// derivation and is never retried: a lookup that fails or finds nothing should resolve to
/// `None`, which leaves the derived address undetermined. Callers that need a timeout wrap the
/// future themselves.
pub trait NonceLookup {
    /// Returns the nonce of `account`, or `None` if it is not available.
    fn account_nonce(&self, account: &AccountId) -> impl Future<Output = Option<u64>> + Send;
}

impl<T: NonceLookup + ?Sized> NonceLookup for &T {
    fn account_nonce(&self, account: &AccountId) -> impl Future<Output = Option<u64>> + Send {
        (**self).account_nonce(account)
    }
}

impl<T: NonceLookup + ?Sized> NonceLookup for Arc<T> {
    fn account_nonce(&self, account: &AccountId) -> impl Future<Output = Option<u64>> + Send {
        (**self).account_nonce(account)
    }
}

/// A [`NonceLookup`] that answers every query with the same, caller-supplied value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedNonce(pub Option<u64>);

impl FixedNonce {
    /// A lookup that always returns `nonce`.
    pub const fn new(nonce: u64) -> Self {
        Self(Some(nonce))
    }

    /// A lookup that never finds a nonce.
    pub const fn unavailable() -> Self {
        Self(None)
    }
}

impl NonceLookup for FixedNonce {
    async fn account_nonce(&self, _account: &AccountId) -> Option<u64> {
        self.0
    }
}
