//! Path: a sequence of identities joined by friendships.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Identity;

/// A path through the friendship graph: `a -> b -> c ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Identities along the path, source first. Never empty.
    pub nodes: Vec<Identity>,
    /// Sum of edge weights, when the path came from a weighted search.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub total_weight: Option<u64>,
}

impl Path {
    pub fn single(node: Identity) -> Self {
        Self { nodes: vec![node], total_weight: None }
    }

    /// Attach the summed weight of the path.
    pub fn with_total_weight(mut self, total: u64) -> Self {
        self.total_weight = Some(total);
        self
    }

    /// Hop count, i.e. degrees of separation between the endpoints.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// True when source and destination are the same user.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn start(&self) -> Option<&Identity> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&Identity> {
        self.nodes.last()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Identity {
        Identity::parse(s).unwrap()
    }

    #[test]
    fn test_display_and_hops() {
        let path = Path { nodes: vec![id("alice"), id("bob"), id("charlie")], total_weight: None };
        assert_eq!(path.to_string(), "alice -> bob -> charlie");
        assert_eq!(path.hops(), 2);
        assert!(!path.is_trivial());
        assert_eq!(path.end(), Some(&id("charlie")));
    }

    #[test]
    fn test_single_node_path() {
        let path = Path::single(id("alice")).with_total_weight(0);
        assert!(path.is_trivial());
        assert_eq!(path.hops(), 0);
        assert_eq!(path.total_weight, Some(0));
    }
}
