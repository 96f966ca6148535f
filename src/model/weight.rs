//! Weight: the positive cost carried by every friendship.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Positive integer edge weight (`1..=u32::MAX`).
///
/// Zero and negative values are unrepresentable; they are rejected by
/// [`Weight::new`] before anything reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(NonZeroU32);

impl Weight {
    /// The weight of a plain friendship when no cost is given.
    pub const UNIT: Weight = Weight(NonZeroU32::MIN);

    /// Validate a raw weight. `None` for anything `<= 0` or above `u32::MAX`.
    pub fn new(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().and_then(NonZeroU32::new).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU32> for Weight {
    fn from(w: NonZeroU32) -> Self {
        Self(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_weights_are_rejected() {
        assert!(Weight::new(0).is_none());
        assert!(Weight::new(-3).is_none());
        assert!(Weight::new(i64::from(u32::MAX) + 1).is_none());
    }

    #[test]
    fn test_positive_weights_round_trip() {
        assert_eq!(Weight::new(7).map(Weight::get), Some(7));
        assert_eq!(Weight::default(), Weight::UNIT);
        assert_eq!(Weight::UNIT.get(), 1);
    }

    #[test]
    fn test_zero_cannot_be_deserialized() {
        assert!(serde_json::from_str::<Weight>("0").is_err());
        assert_eq!(serde_json::from_str::<Weight>("4").unwrap().get(), 4);
    }
}
