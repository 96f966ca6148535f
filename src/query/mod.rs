//! Graph query engine.
//!
//! Stateless algorithms over a read-only [`GraphView`]. Every entry point
//! takes raw user names and normalizes them itself; an invalid or unknown
//! name is an ordinary outcome and yields the operation's "no result" value
//! (`false`, `None`, or an empty set), never an error.
//!
//! | Query | Algorithm | No result |
//! |-------|-----------|-----------|
//! | [`are_connected`] | BFS, early exit on discovery | `false` |
//! | [`shortest_path`] | BFS with predecessor links | `None` |
//! | [`lightest_path`] | Dijkstra, lazy deletion | `None` |
//! | [`mutual_friends`] | set intersection | `{}` |
//! | [`suggest_friends`] | friends-of-friends minus friends | `{}` |
//!
//! [`GraphView`]: crate::storage::GraphView

mod reach;
mod weighted;
mod social;

pub use reach::{are_connected, degrees_of_separation, shortest_path};
pub use weighted::lightest_path;
pub use social::{mutual_friends, suggest_friends};

use crate::model::Identity;
use crate::storage::GraphView;

/// Normalize `raw` and confirm the user exists in `view`.
fn resolve<G: GraphView>(view: &G, raw: &str) -> Option<Identity> {
    Identity::parse(raw).filter(|id| view.contains(id))
}
