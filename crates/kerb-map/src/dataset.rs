//! The in-memory map dataset and its [`MapView`] implementation.

use indexmap::IndexMap;
use kerb_core::{LaneBuildError, LaneId, MapInstanceId, MapLaneRecord, MapView};

/// The full, read-only collection of raw lane records for one map.
///
/// Records are inserted once at load time and never mutated afterwards;
/// every lane entity built from this dataset reads the same shared
/// records. Insertion order is preserved so that iteration over
/// [`lane_ids`](MapDataset::lane_ids) is deterministic across runs.
///
/// # Examples
///
/// ```
/// use kerb_core::{LaneId, MapLaneRecord, MapView};
/// use kerb_map::MapDataset;
///
/// let mut dataset = MapDataset::new();
/// dataset.insert(LaneId(108), MapLaneRecord::default());
/// assert!(dataset.record(LaneId(108)).is_ok());
/// assert!(dataset.record(LaneId(109)).is_err());
/// ```
#[derive(Debug)]
pub struct MapDataset {
    records: IndexMap<LaneId, MapLaneRecord>,
    instance_id: MapInstanceId,
}

impl Default for MapDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl MapDataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
            instance_id: MapInstanceId::next(),
        }
    }

    /// Insert a record at load time.
    ///
    /// Replaces any existing record with the same ID and returns it.
    pub fn insert(&mut self, lane_id: LaneId, record: MapLaneRecord) -> Option<MapLaneRecord> {
        self.records.insert(lane_id, record)
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if a record exists for the given ID.
    pub fn contains(&self, lane_id: LaneId) -> bool {
        self.records.contains_key(&lane_id)
    }

    /// Iterate over lane IDs in insertion order.
    pub fn lane_ids(&self) -> impl Iterator<Item = LaneId> + '_ {
        self.records.keys().copied()
    }

    /// Unique identifier for this dataset instance.
    ///
    /// Distinguishes two loads of the same map so that consumers can
    /// detect that their lane IDs refer to a stale dataset.
    pub fn instance_id(&self) -> MapInstanceId {
        self.instance_id
    }
}

impl FromIterator<(LaneId, MapLaneRecord)> for MapDataset {
    fn from_iter<I: IntoIterator<Item = (LaneId, MapLaneRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
            instance_id: MapInstanceId::next(),
        }
    }
}

impl MapView for MapDataset {
    fn record(&self, lane_id: LaneId) -> Result<&MapLaneRecord, LaneBuildError> {
        self.records
            .get(&lane_id)
            .ok_or(LaneBuildError::MissingRecord { lane_id })
    }
}
