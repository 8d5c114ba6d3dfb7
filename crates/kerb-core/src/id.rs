//! Strongly-typed identifiers for lanes and dataset instances.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a lane within a map dataset.
///
/// Lane IDs come from the upstream map decoder and are opaque to this
/// crate: they are compared, hashed, and displayed, never interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneId(pub u64);

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LaneId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Counter for unique [`MapInstanceId`] allocation.
static MAP_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a loaded map dataset.
///
/// Allocated from a monotonic atomic counter via [`MapInstanceId::next`].
/// Two distinct dataset instances always have different IDs, even when
/// loaded from identical source data. Consumers holding lane IDs across
/// episode boundaries can use it to detect that a different map is now
/// resident and their IDs must be re-resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapInstanceId(u64);

impl MapInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(MAP_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for MapInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_instance_ids_are_unique() {
        let a = MapInstanceId::next();
        let b = MapInstanceId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn lane_id_display_matches_inner() {
        assert_eq!(LaneId(108).to_string(), "108");
    }
}
