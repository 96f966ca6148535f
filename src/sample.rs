//! Built-in demo network.
//!
//! Two clusters of five users joined by two bridges (bob–grace, alice–heidi).

/// Users in the demo network.
pub const USERS: [&str; 10] = [
    "alice", "bob", "charlie", "diana", "eve", "frank", "grace", "heidi", "ivan", "judy",
];

/// Friendships in the demo network as `(a, b, weight)`.
pub const FRIENDSHIPS: [(&str, &str, i64); 12] = [
    ("alice", "bob", 1),
    ("alice", "charlie", 2),
    ("bob", "diana", 4),
    ("charlie", "eve", 1),
    ("diana", "frank", 1),
    ("eve", "frank", 1),
    ("grace", "heidi", 2),
    ("heidi", "ivan", 1),
    ("ivan", "judy", 3),
    ("judy", "grace", 1),
    ("bob", "grace", 5),
    ("alice", "heidi", 9),
];
