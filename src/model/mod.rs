//! # Social Graph Model
//!
//! Plain data types that cross every boundary: storage ↔ query engine ↔ shell.
//!
//! Design rule: no locks, no I/O here. This module is pure data.

pub mod identity;
pub mod weight;
pub mod path;

pub use identity::Identity;
pub use weight::Weight;
pub use path::Path;
