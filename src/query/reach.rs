//! Unweighted reachability and shortest path (breadth-first search).

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};

use crate::model::{Identity, Path};
use crate::storage::GraphView;
use super::resolve;

/// True if a chain of friendships links `a` and `b`.
///
/// A user is connected to themselves. Stops as soon as `b` shows up among
/// the neighbors of an expanded node; each user is enqueued at most once.
pub fn are_connected<G: GraphView>(view: &G, a: &str, b: &str) -> bool {
    let (Some(start), Some(target)) = (resolve(view, a), resolve(view, b)) else {
        return false;
    };
    if start == target {
        return true;
    }

    let mut visited: HashSet<&Identity> = HashSet::new();
    let mut queue: VecDeque<&Identity> = VecDeque::new();
    visited.insert(&start);
    queue.push_back(&start);

    while let Some(current) = queue.pop_front() {
        let Some(neighbors) = view.neighborhood(current) else {
            continue;
        };
        for friend in neighbors.friends() {
            if *friend == target {
                tracing::trace!(%start, %target, visited = visited.len(), "connected");
                return true;
            }
            if visited.insert(friend) {
                queue.push_back(friend);
            }
        }
    }

    tracing::trace!(%start, %target, visited = visited.len(), "not connected");
    false
}

/// Shortest path by hop count from `a` to `b`, or `None` if unreachable.
///
/// Records the predecessor of every newly discovered user and halts the
/// moment `b` is discovered, not when it is dequeued. Among equally short
/// paths the one through lexicographically smaller names wins.
pub fn shortest_path<G: GraphView>(view: &G, a: &str, b: &str) -> Option<Path> {
    let start = resolve(view, a)?;
    let target = resolve(view, b)?;
    if start == target {
        return Some(Path::single(start));
    }

    // node → the node that discovered it; the start has no entry.
    let mut parent: HashMap<&Identity, &Identity> = HashMap::new();
    let mut queue: VecDeque<&Identity> = VecDeque::new();
    queue.push_back(&start);

    while let Some(current) = queue.pop_front() {
        let Some(neighbors) = view.neighborhood(current) else {
            continue;
        };
        for friend in neighbors.friends() {
            if *friend == start || parent.contains_key(friend) {
                continue;
            }
            parent.insert(friend, current);

            if *friend == target {
                tracing::trace!(%start, %target, discovered = parent.len(), "path found");
                return Some(reconstruct(&parent, &start, friend));
            }
            queue.push_back(friend);
        }
    }

    tracing::trace!(%start, %target, discovered = parent.len(), "no path");
    None
}

/// Hop count of the shortest path between `a` and `b`.
pub fn degrees_of_separation<G: GraphView>(view: &G, a: &str, b: &str) -> Option<usize> {
    shortest_path(view, a, b).map(|p| p.hops())
}

/// Walk predecessor links from `end` back to `start`, then reverse.
fn reconstruct(parent: &HashMap<&Identity, &Identity>, start: &Identity, end: &Identity) -> Path {
    let mut nodes = vec![end.clone()];
    let mut current = end;
    while current != start {
        match parent.get(current) {
            Some(&prev) => {
                nodes.push(prev.clone());
                current = prev;
            }
            None => break,
        }
    }
    nodes.reverse();
    Path { nodes, total_weight: None }
}
