//! Shared in-memory store.
//!
//! The whole adjacency sits behind ONE `RwLock`. A friendship touches two
//! users, so per-collection locks would let a reader see half an edge.
//!
//! - Mutations (`register`, `connect`) hold the write lock for the full update.
//! - Queries take a [`Snapshot`] (a read guard) and run entirely against it.
//!   Any number of snapshots may be alive at once; a writer waits for them.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::model::Identity;
use super::{Adjacency, ConnectOutcome, NetworkConfig, RegisterOutcome};

/// A consistent, read-only view of the graph. Derefs to [`Adjacency`].
pub type Snapshot<'a> = RwLockReadGuard<'a, Adjacency>;

/// Cloneable handle to a shared friendship graph.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Adjacency>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &NetworkConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Adjacency::with_capacity(config.capacity))),
        }
    }

    /// Lock the graph for reading.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.inner.read()
    }

    pub fn register(&self, id: Identity) -> RegisterOutcome {
        self.inner.write().register(id)
    }

    pub fn connect(&self, a: Identity, b: Identity, weight: i64) -> ConnectOutcome {
        self.inner.write().connect(a, b, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::GraphView;

    fn id(s: &str) -> Identity {
        Identity::parse(s).unwrap()
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::with_config(&NetworkConfig::with_capacity(4));
        let other = store.clone();

        store.register(id("alice"));
        other.register(id("bob"));
        assert!(store.connect(id("alice"), id("bob"), 2).is_connected());

        let snap = other.snapshot();
        assert_eq!(snap.user_count(), 2);
        assert_eq!(snap.friendship_count(), 1);
    }

    #[test]
    fn test_concurrent_writers_keep_edges_symmetric() {
        let store = MemoryStore::new();
        for i in 0..16 {
            store.register(id(&format!("u{i}")));
        }

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..16 {
                        let j = (i + t + 1) % 16;
                        store.connect(id(&format!("u{i}")), id(&format!("u{j}")), (t + 1) as i64);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let snap = store.snapshot();
        for a in snap.identities() {
            for (b, w) in snap.neighborhood(a).unwrap().iter() {
                assert_eq!(snap.weight_of(b, a), Some(w), "{a} -> {b} is one-sided");
            }
        }
    }
}
