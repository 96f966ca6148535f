//! Weighted shortest path (Dijkstra).
//!
//! The frontier is a `BinaryHeap` without decrease-key: an improved distance
//! pushes a fresh entry and the superseded one stays in the heap. Stale
//! entries are dropped on extraction by the settled-set check.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};

use crate::model::{Identity, Path};
use crate::storage::GraphView;
use super::resolve;

/// Frontier entry, ordered so that `BinaryHeap` pops the cheapest first.
///
/// Equal costs pop in identity order.
#[derive(Debug, PartialEq, Eq)]
struct Frontier<'a> {
    cost: u64,
    node: &'a Identity,
}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cheapest path from `a` to `b` by summed friendship weight.
///
/// Returns `None` when either user is unknown or `b` is unreachable. The
/// returned path carries its `total_weight`. Edges whose weight is not
/// positive are never relaxed.
pub fn lightest_path<G: GraphView>(view: &G, a: &str, b: &str) -> Option<Path> {
    let start = resolve(view, a)?;
    let target = resolve(view, b)?;
    if start == target {
        return Some(Path::single(start).with_total_weight(0));
    }

    // Absent from `dist` means infinity.
    let mut dist: HashMap<&Identity, u64> = HashMap::new();
    let mut parent: HashMap<&Identity, &Identity> = HashMap::new();
    let mut settled: HashSet<&Identity> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    dist.insert(&start, 0);
    frontier.push(Frontier { cost: 0, node: &start });

    while let Some(Frontier { cost, node }) = frontier.pop() {
        if !settled.insert(node) {
            continue;
        }
        if *node == target {
            tracing::trace!(%start, %target, cost, settled = settled.len(), "lightest path found");
            return Some(reconstruct(&parent, &start, node).with_total_weight(cost));
        }

        let Some(neighbors) = view.neighborhood(node) else {
            continue;
        };
        for (friend, weight) in neighbors.iter() {
            let weight = u64::from(weight.get());
            if weight == 0 || settled.contains(friend) {
                continue;
            }
            let candidate = cost.saturating_add(weight);
            if dist.get(friend).is_none_or(|&best| candidate < best) {
                dist.insert(friend, candidate);
                parent.insert(friend, node);
                frontier.push(Frontier { cost: candidate, node: friend });
            }
        }
    }

    tracing::trace!(%start, %target, settled = settled.len(), "no weighted path");
    None
}

fn reconstruct(parent: &HashMap<&Identity, &Identity>, start: &Identity, end: &Identity) -> Path {
    let mut nodes = vec![end.clone()];
    let mut current = end;
    while current != start {
        let Some(&prev) = parent.get(current) else {
            break;
        };
        nodes.push(prev.clone());
        current = prev;
    }
    nodes.reverse();
    Path { nodes, total_weight: None }
}
