//! Set-based relationship queries.

use std::collections::BTreeSet;

use crate::model::Identity;
use crate::storage::GraphView;
use super::resolve;

/// Friends that `a` and `b` have in common. Empty if either is unknown.
pub fn mutual_friends<G: GraphView>(view: &G, a: &str, b: &str) -> BTreeSet<Identity> {
    let (Some(a), Some(b)) = (resolve(view, a), resolve(view, b)) else {
        return BTreeSet::new();
    };
    let (Some(left), Some(right)) = (view.neighborhood(&a), view.neighborhood(&b)) else {
        return BTreeSet::new();
    };

    // Probe the larger side with the smaller one.
    let (small, large) = if left.len() <= right.len() { (left, right) } else { (right, left) };
    small
        .friends()
        .filter(|f| large.contains(f))
        .cloned()
        .collect()
}

/// Friends of friends of `a` who are neither `a` nor already friends with `a`.
pub fn suggest_friends<G: GraphView>(view: &G, a: &str) -> BTreeSet<Identity> {
    let Some(user) = resolve(view, a) else {
        return BTreeSet::new();
    };
    let Some(direct) = view.neighborhood(&user) else {
        return BTreeSet::new();
    };

    direct
        .friends()
        .filter_map(|friend| view.neighborhood(friend))
        .flat_map(|n| n.friends())
        .filter(|candidate| **candidate != user && !direct.contains(candidate))
        .cloned()
        .collect()
}
