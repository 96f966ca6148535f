//! # social-graph: In-Memory Social Network Queries
//!
//! Users, symmetric weighted friendships, and the structural questions you
//! ask of them: are two people connected, how many degrees apart are they,
//! what is the cheapest chain of introductions, who do they both know, and
//! who should they meet next.
//!
//! ## Design Principles
//!
//! 1. **One adjacency structure**: each user maps neighbor → weight, so the
//!    friend set and the weighted edges can never disagree
//! 2. **Trait-first queries**: `GraphView` is the contract between the query
//!    engine and storage; queries never mutate
//! 3. **Outcomes, not exceptions**: bad names, unknown users and duplicate
//!    edges are ordinary results
//! 4. **Explicit network object**: no globals; every `Network` is independent
//!
//! ## Quick Start
//!
//! ```rust
//! use social_graph::Network;
//!
//! let network = Network::new();
//! for name in ["alice", "bob", "charlie"] {
//!     network.register(name);
//! }
//! network.connect("alice", "bob", 2);
//! network.connect("bob", "charlie", 3);
//!
//! let path = network.lightest_path("alice", "charlie").unwrap();
//! assert_eq!(path.to_string(), "alice -> bob -> charlie");
//! assert_eq!(path.total_weight, Some(5));
//! assert_eq!(network.degrees_of_separation("Alice", "CHARLIE"), Some(2));
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod query;
pub mod stats;
pub mod sample;
pub mod shell;

use std::collections::BTreeSet;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Identity, Path, Weight};
pub use storage::{
    ConnectOutcome, GraphView, MemoryStore, NetworkConfig, RegisterOutcome, Rejection, Snapshot,
};
pub use stats::{NetworkStats, Popularity};

// ============================================================================
// Top-level Network handle
// ============================================================================

/// The primary entry point. A `Network` owns one friendship graph and
/// answers queries against consistent snapshots of it.
///
/// Cloning a `Network` yields another handle to the same graph.
#[derive(Debug, Clone, Default)]
pub struct Network {
    store: MemoryStore,
}

impl Network {
    /// An empty network.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &NetworkConfig) -> Self {
        Self { store: MemoryStore::with_config(config) }
    }

    /// A network pre-loaded with the demo users in [`sample`].
    pub fn with_sample_data() -> Self {
        let network = Self::with_config(&NetworkConfig::with_capacity(sample::USERS.len()));
        network.load_sample_data();
        network
    }

    /// Add the demo users and friendships. Entries that already exist are skipped.
    pub fn load_sample_data(&self) {
        for user in sample::USERS {
            self.register(user);
        }
        for (a, b, w) in sample::FRIENDSHIPS {
            self.connect(a, b, w);
        }
        tracing::debug!(users = sample::USERS.len(), "loaded sample data");
    }

    /// Lock the graph for a multi-step read.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.store.snapshot()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Register a user under the normalized form of `raw`.
    pub fn register(&self, raw: &str) -> RegisterOutcome {
        match Identity::parse(raw) {
            Some(id) => self.store.register(id),
            None => RegisterOutcome::Invalid,
        }
    }

    /// Create a friendship between `a` and `b` carrying `weight`.
    ///
    /// The friendship and its weight are created together; neither can
    /// exist without the other.
    pub fn connect(&self, a: &str, b: &str, weight: i64) -> ConnectOutcome {
        match Identity::parse_all([a, b]) {
            Some([a, b]) => self.store.connect(a, b, weight),
            None => ConnectOutcome::Invalid,
        }
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    pub fn exists(&self, raw: &str) -> bool {
        Identity::parse(raw).is_some_and(|id| self.snapshot().contains(&id))
    }

    /// True if `a` and `b` are direct friends.
    pub fn are_friends(&self, a: &str, b: &str) -> bool {
        self.weight_of(a, b).is_some()
    }

    /// Friends of `raw`, detached from the graph. Empty if unknown.
    pub fn friends_of(&self, raw: &str) -> BTreeSet<Identity> {
        let Some(id) = Identity::parse(raw) else {
            return BTreeSet::new();
        };
        self.snapshot()
            .neighborhood(&id)
            .map(|n| n.friends().cloned().collect())
            .unwrap_or_default()
    }

    pub fn weight_of(&self, a: &str, b: &str) -> Option<Weight> {
        let [a, b] = Identity::parse_all([a, b])?;
        self.snapshot().weight_of(&a, &b)
    }

    /// `(friend, weight)` pairs for `raw`, sorted by friend.
    pub fn neighbors_with_weights(&self, raw: &str) -> Vec<(Identity, Weight)> {
        let Some(id) = Identity::parse(raw) else {
            return Vec::new();
        };
        self.snapshot()
            .neighborhood(&id)
            .map(|n| n.iter().map(|(f, w)| (f.clone(), w)).collect())
            .unwrap_or_default()
    }

    /// Every registered identity, sorted.
    pub fn users(&self) -> Vec<Identity> {
        let mut users: Vec<Identity> = self.snapshot().identities().cloned().collect();
        users.sort();
        users
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        query::are_connected(&*self.snapshot(), a, b)
    }

    pub fn shortest_path(&self, a: &str, b: &str) -> Option<Path> {
        query::shortest_path(&*self.snapshot(), a, b)
    }

    pub fn degrees_of_separation(&self, a: &str, b: &str) -> Option<usize> {
        query::degrees_of_separation(&*self.snapshot(), a, b)
    }

    pub fn lightest_path(&self, a: &str, b: &str) -> Option<Path> {
        query::lightest_path(&*self.snapshot(), a, b)
    }

    pub fn mutual_friends(&self, a: &str, b: &str) -> BTreeSet<Identity> {
        query::mutual_friends(&*self.snapshot(), a, b)
    }

    pub fn suggest_friends(&self, raw: &str) -> BTreeSet<Identity> {
        query::suggest_friends(&*self.snapshot(), raw)
    }

    pub fn stats(&self) -> NetworkStats {
        NetworkStats::collect(&*self.snapshot())
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid username: {0:?}")]
    InvalidIdentity(String),

    #[error("User already exists: {0}")]
    AlreadyExists(Identity),

    #[error("Friendship rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Invalid weight: {0:?}")]
    InvalidWeight(String),

    #[error("Invalid menu choice: {0:?}")]
    InvalidChoice(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
