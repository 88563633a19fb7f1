//! A trust store that can be rotated while verifiers are reading it.

use std::sync::Arc;

use arc_swap::ArcSwap;

use super::TrustCrts;

/// A [`TrustCrts`] shared between concurrent verifiers.
///
/// Readers take a [`snapshot`](Self::snapshot) and verify against it; a
/// rotation swaps in a whole new store. Neither side takes a lock, so a
/// rotation never stalls a verifier. A verification that started before the
/// swap finishes against the store it started with, and never sees a
/// partially updated one.
#[derive(Debug, Default)]
pub struct SharedTrustCrts {
    current: ArcSwap<TrustCrts>,
}

impl SharedTrustCrts {
    /// Share an initial trust store.
    #[must_use]
    pub fn new(trust: TrustCrts) -> Self {
        Self {
            current: ArcSwap::from_pointee(trust),
        }
    }

    /// The store currently in effect.
    #[must_use]
    pub fn snapshot(&self) -> Arc<TrustCrts> {
        self.current.load_full()
    }

    /// Replace the store, returning the one it replaced.
    pub fn rotate(&self, next: TrustCrts) -> Arc<TrustCrts> {
        let installed = next.len();
        let previous = self.current.swap(Arc::new(next));

        tracing::info!(
            previous = previous.len(),
            current = installed,
            "rotated trust store"
        );
        previous
    }
}

impl From<TrustCrts> for SharedTrustCrts {
    fn from(trust: TrustCrts) -> Self {
        Self::new(trust)
    }
}
