//! # Graph View Contract
//!
//! This is THE contract between the query engine and the friendship store.
//! Queries and statistics only ever see a `&impl GraphView`; they cannot
//! mutate anything through it.
//!
//! ## Implementations
//!
//! | Type | Module | Description |
//! |------|--------|-------------|
//! | `Adjacency` | `adjacency` | Plain neighbor → weight maps, one per user |
//! | `MemoryStore` | `memory` | `Adjacency` behind a single writer lock |

pub mod adjacency;
pub mod memory;

use crate::model::{Identity, Weight};
use crate::{Error, Result};

pub use adjacency::{Adjacency, Neighborhood};
pub use memory::{MemoryStore, Snapshot};

// ============================================================================
// Configuration
// ============================================================================

/// Sizing hints for a new network.
#[derive(Debug, Clone, Default)]
pub struct NetworkConfig {
    /// Expected number of users (pre-allocates the user index).
    pub capacity: usize,
}

impl NetworkConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

// ============================================================================
// Mutation outcomes
// ============================================================================

/// Result of registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered(Identity),
    AlreadyExists(Identity),
    /// The raw name was blank.
    Invalid,
}

impl RegisterOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }

    /// Convert to a `Result` for callers that prefer `?`.
    pub fn into_result(self) -> Result<Identity> {
        match self {
            Self::Registered(id) => Ok(id),
            Self::AlreadyExists(id) => Err(Error::AlreadyExists(id)),
            Self::Invalid => Err(Error::InvalidIdentity(String::new())),
        }
    }
}

/// Why a friendship was not created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("a user cannot be friends with themselves ({0})")]
    SelfLoop(Identity),

    #[error("user does not exist: {0}")]
    UnknownUser(Identity),

    #[error("{0} and {1} are already friends")]
    AlreadyFriends(Identity, Identity),

    #[error("weight must be a positive integer, got {0}")]
    NonPositiveWeight(i64),
}

/// Result of creating a weighted friendship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected { a: Identity, b: Identity, weight: Weight },
    Rejected(Rejection),
    /// One of the raw names was blank.
    Invalid,
}

impl ConnectOutcome {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Convert to a `Result` for callers that prefer `?`.
    pub fn into_result(self) -> Result<Weight> {
        match self {
            Self::Connected { weight, .. } => Ok(weight),
            Self::Rejected(why) => Err(why.into()),
            Self::Invalid => Err(Error::InvalidIdentity(String::new())),
        }
    }
}

// ============================================================================
// GraphView Trait
// ============================================================================

/// Read-only access to a friendship graph.
///
/// Every friendship appears in both endpoints' neighborhoods with the same
/// weight. Implementors guarantee that symmetry; consumers rely on it.
pub trait GraphView {
    /// The user's neighbor → weight map, or `None` if the user is unknown.
    fn neighborhood(&self, id: &Identity) -> Option<&Neighborhood>;

    /// All registered identities, in no particular order.
    fn identities(&self) -> impl Iterator<Item = &Identity>;

    /// Number of registered users.
    fn user_count(&self) -> usize;

    fn contains(&self, id: &Identity) -> bool {
        self.neighborhood(id).is_some()
    }

    fn weight_of(&self, a: &Identity, b: &Identity) -> Option<Weight> {
        self.neighborhood(a)?.weight_to(b)
    }

    fn degree(&self, id: &Identity) -> usize {
        self.neighborhood(id).map_or(0, Neighborhood::len)
    }

    /// Number of undirected friendships (each is stored twice).
    fn friendship_count(&self) -> usize {
        self.identities().map(|id| self.degree(id)).sum::<usize>() / 2
    }
}
