//! In-memory adjacency: one neighbor → weight map per user.
//!
//! The friend set of a user is the key set of its map, and the weight of a
//! friendship is the value. There is no second structure to keep in sync:
//! "is friend" and "has weight" are the same fact.

use std::collections::BTreeMap;

use hashbrown::HashMap;

use crate::model::{Identity, Weight};
use super::{ConnectOutcome, GraphView, RegisterOutcome, Rejection};

// ============================================================================
// Neighborhood
// ============================================================================

/// One user's friends and the weight of each friendship.
///
/// Iterates in identity order, which is what makes traversal tie-breaking
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighborhood {
    edges: BTreeMap<Identity, Weight>,
}

impl Neighborhood {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, id: &Identity) -> bool {
        self.edges.contains_key(id)
    }

    pub fn weight_to(&self, id: &Identity) -> Option<Weight> {
        self.edges.get(id).copied()
    }

    /// Friends in identity order.
    pub fn friends(&self) -> impl Iterator<Item = &Identity> {
        self.edges.keys()
    }

    /// `(friend, weight)` pairs in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (&Identity, Weight)> {
        self.edges.iter().map(|(id, w)| (id, *w))
    }

    fn insert(&mut self, id: Identity, weight: Weight) {
        self.edges.insert(id, weight);
    }
}

// ============================================================================
// Adjacency
// ============================================================================

/// The whole friendship graph.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    users: HashMap<Identity, Neighborhood>,
}

impl Adjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known number of users.
    pub fn with_capacity(users: usize) -> Self {
        Self { users: HashMap::with_capacity(users) }
    }

    /// Add a user with no friends.
    pub fn register(&mut self, id: Identity) -> RegisterOutcome {
        if self.users.contains_key(&id) {
            tracing::debug!(user = %id, "registration rejected: already exists");
            return RegisterOutcome::AlreadyExists(id);
        }
        self.users.insert(id.clone(), Neighborhood::default());
        tracing::debug!(user = %id, "registered user");
        RegisterOutcome::Registered(id)
    }

    /// Create the friendship `a`-`b` carrying `weight`.
    ///
    /// Both directions are written or neither is. Checks run in order:
    /// self-loop, unknown endpoints, existing friendship, weight.
    pub fn connect(&mut self, a: Identity, b: Identity, weight: i64) -> ConnectOutcome {
        match self.check_connect(&a, &b, weight) {
            Ok(weight) => {
                if let Some(n) = self.users.get_mut(&a) {
                    n.insert(b.clone(), weight);
                }
                if let Some(n) = self.users.get_mut(&b) {
                    n.insert(a.clone(), weight);
                }
                debug_assert_eq!(self.weight_of(&b, &a), Some(weight));
                tracing::debug!(%a, %b, weight = weight.get(), "created friendship");
                ConnectOutcome::Connected { a, b, weight }
            }
            Err(why) => {
                tracing::debug!(%a, %b, reason = %why, "friendship rejected");
                ConnectOutcome::Rejected(why)
            }
        }
    }

    fn check_connect(&self, a: &Identity, b: &Identity, weight: i64) -> Result<Weight, Rejection> {
        if a == b {
            return Err(Rejection::SelfLoop(a.clone()));
        }
        let from = self
            .users
            .get(a)
            .ok_or_else(|| Rejection::UnknownUser(a.clone()))?;
        if !self.users.contains_key(b) {
            return Err(Rejection::UnknownUser(b.clone()));
        }
        if from.contains(b) {
            return Err(Rejection::AlreadyFriends(a.clone(), b.clone()));
        }
        Weight::new(weight).ok_or(Rejection::NonPositiveWeight(weight))
    }
}

impl GraphView for Adjacency {
    fn neighborhood(&self, id: &Identity) -> Option<&Neighborhood> {
        self.users.get(id)
    }

    fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.users.keys()
    }

    fn user_count(&self) -> usize {
        self.users.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Identity {
        Identity::parse(s).unwrap()
    }

    fn people(names: &[&str]) -> Adjacency {
        let mut adj = Adjacency::new();
        for n in names {
            adj.register(id(n));
        }
        adj
    }

    #[test]
    fn test_register_twice() {
        let mut adj = Adjacency::new();
        assert!(adj.register(id("alice")).is_registered());
        assert_eq!(adj.register(id("alice")), RegisterOutcome::AlreadyExists(id("alice")));
        assert_eq!(adj.user_count(), 1);
        assert!(adj.neighborhood(&id("alice")).unwrap().is_empty());
    }

    #[test]
    fn test_connect_is_symmetric() {
        let mut adj = people(&["alice", "bob"]);
        let out = adj.connect(id("alice"), id("bob"), 4);
        assert!(out.is_connected());

        assert_eq!(adj.weight_of(&id("alice"), &id("bob")).map(Weight::get), Some(4));
        assert_eq!(adj.weight_of(&id("bob"), &id("alice")).map(Weight::get), Some(4));
        assert_eq!(adj.friendship_count(), 1);
        assert_eq!(adj.degree(&id("bob")), 1);
    }

    #[test]
    fn test_rejections_leave_graph_untouched() {
        let mut adj = people(&["alice", "bob"]);
        adj.connect(id("alice"), id("bob"), 1);

        let cases = [
            (id("alice"), id("alice"), 1, Rejection::SelfLoop(id("alice"))),
            (id("alice"), id("zoe"), 1, Rejection::UnknownUser(id("zoe"))),
            (id("zoe"), id("alice"), 1, Rejection::UnknownUser(id("zoe"))),
            (id("bob"), id("alice"), 9, Rejection::AlreadyFriends(id("bob"), id("alice"))),
        ];
        for (a, b, w, why) in cases {
            assert_eq!(adj.connect(a, b, w), ConnectOutcome::Rejected(why));
        }

        // No overwrite: the original weight survives.
        assert_eq!(adj.weight_of(&id("alice"), &id("bob")), Some(Weight::UNIT));
        assert_eq!(adj.friendship_count(), 1);
        assert_eq!(adj.user_count(), 2);
    }

    #[test]
    fn test_non_positive_weight_creates_no_edge() {
        let mut adj = people(&["alice", "bob"]);
        for w in [0, -1] {
            assert_eq!(
                adj.connect(id("alice"), id("bob"), w),
                ConnectOutcome::Rejected(Rejection::NonPositiveWeight(w)),
            );
        }
        assert!(adj.weight_of(&id("alice"), &id("bob")).is_none());
        assert_eq!(adj.friendship_count(), 0);
    }

    #[test]
    fn test_neighborhood_iterates_in_identity_order() {
        let mut adj = people(&["hub", "zed", "amy", "max"]);
        for (n, w) in [("zed", 3), ("amy", 1), ("max", 2)] {
            adj.connect(id("hub"), id(n), w);
        }
        let order: Vec<(String, u32)> = adj
            .neighborhood(&id("hub"))
            .unwrap()
            .iter()
            .map(|(f, w)| (f.to_string(), w.get()))
            .collect();
        assert_eq!(order, vec![("amy".into(), 1), ("max".into(), 2), ("zed".into(), 3)]);
    }
}
