//! Network statistics.
//!
//! # Statistics Provided
//!
//! - **user_count**: registered users.
//! - **friendship_count**: undirected friendships (each counted once).
//! - **average_friends**: `2 * friendship_count / user_count`, 0.0 when empty.
//! - **total_weight**: sum of friendship weights (each counted once).
//! - **average_weight**: `total_weight / friendship_count`, 0.0 when there
//!   are no friendships.
//! - **most_popular**: every user tied for the highest friend count, sorted
//!   by name. `None` for an empty network.
//! - **ranking**: all users by friend count, descending, ties by name.

use std::fmt;

use serde::Serialize;

use crate::model::Identity;
use crate::storage::GraphView;

// ---------------------------------------------------------------------------
// Popularity
// ---------------------------------------------------------------------------

/// The users sharing the highest friend count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popularity {
    pub friends: usize,
    pub users: Vec<Identity>,
}

// ---------------------------------------------------------------------------
// NetworkStats
// ---------------------------------------------------------------------------

/// Aggregate figures for one snapshot of the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub user_count: usize,
    pub friendship_count: usize,
    pub average_friends: f64,
    pub total_weight: u64,
    pub average_weight: f64,
    pub most_popular: Option<Popularity>,
    pub ranking: Vec<(Identity, usize)>,
}

impl NetworkStats {
    /// Compute every statistic from one consistent view.
    pub fn collect<G: GraphView>(view: &G) -> Self {
        let user_count = view.user_count();
        let friendship_count = view.friendship_count();

        // Each friendship is stored under both endpoints.
        let doubled_weight: u64 = view
            .identities()
            .filter_map(|id| view.neighborhood(id))
            .flat_map(|n| n.iter().map(|(_, w)| u64::from(w.get())))
            .sum();
        let total_weight = doubled_weight / 2;

        let mut ranking: Vec<(Identity, usize)> = view
            .identities()
            .map(|id| (id.clone(), view.degree(id)))
            .collect();
        ranking.sort_by(|(a, da), (b, db)| db.cmp(da).then_with(|| a.cmp(b)));

        let most_popular = ranking.first().map(|&(_, top)| Popularity {
            friends: top,
            users: ranking
                .iter()
                .take_while(|(_, d)| *d == top)
                .map(|(id, _)| id.clone())
                .collect(),
        });

        Self {
            user_count,
            friendship_count,
            average_friends: ratio((friendship_count * 2) as u64, user_count),
            total_weight,
            average_weight: ratio(total_weight, friendship_count),
            most_popular,
            ranking,
        }
    }
}

fn ratio(num: u64, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}

impl fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Network Statistics ===")?;
        writeln!(f, "Total users: {}", self.user_count)?;
        writeln!(f, "Total friendships: {}", self.friendship_count)?;
        writeln!(f, "Average friends per user: {:.2}", self.average_friends)?;
        writeln!(f, "Total edge weight: {}", self.total_weight)?;
        writeln!(f, "Average edge weight: {:.2}", self.average_weight)?;
        if let Some(top) = &self.most_popular {
            let names: Vec<&str> = top.users.iter().map(Identity::as_str).collect();
            writeln!(f, "Most popular user(s): {} ({} friends)", names.join(", "), top.friends)?;
        }
        Ok(())
    }
}
