//! Test utilities and fixture builders for Kerb development.
//!
//! Provides a mock implementation of [`MapView`] backed by a `HashMap`,
//! a builder for [`MapLaneRecord`] fixtures, and an identity
//! [`GeometryConverter`] for tests that want converted space to equal
//! raw space.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use kerb_core::{
    GeometryConverter, LaneBuildError, LaneId, MapLaneRecord, MapView, NeighborRef, RawPoint,
    SimPoint, WidthSample,
};

/// Mock implementation of [`MapView`].
///
/// Backed by a `HashMap<LaneId, MapLaneRecord>` for flexible test setup.
/// Populate with [`with`](FixtureMap::with) before passing to code under
/// test.
#[derive(Debug, Default)]
pub struct FixtureMap {
    records: HashMap<LaneId, MapLaneRecord>,
}

impl FixtureMap {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Add a record, consuming and returning the map for chaining.
    pub fn with(mut self, lane_id: LaneId, record: MapLaneRecord) -> Self {
        self.records.insert(lane_id, record);
        self
    }

    /// Number of records in the fixture.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MapView for FixtureMap {
    fn record(&self, lane_id: LaneId) -> Result<&MapLaneRecord, LaneBuildError> {
        self.records
            .get(&lane_id)
            .ok_or(LaneBuildError::MissingRecord { lane_id })
    }
}

/// Identity [`GeometryConverter`]: drops z, keeps x and y as-is.
///
/// Makes converted-space assertions read the same as the raw fixture
/// coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityConverter;

impl GeometryConverter for IdentityConverter {
    fn convert(&self, raw: &[RawPoint]) -> Vec<SimPoint> {
        raw.iter().map(|p| [p[0], p[1]]).collect()
    }
}

/// Shorthand for a [`NeighborRef`] with explicit overlap indices.
pub fn neighbor(
    lane_id: LaneId,
    self_start: usize,
    self_end: usize,
    neighbor_start: usize,
    neighbor_end: usize,
) -> NeighborRef {
    NeighborRef {
        lane_id,
        self_start,
        self_end,
        neighbor_start,
        neighbor_end,
    }
}

/// Builder for [`MapLaneRecord`] fixtures.
///
/// Starts from a planar polyline (z fixed at 0) and layers on neighbors,
/// width samples, topology links, and a semantic tag.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    record: MapLaneRecord,
}

impl RecordBuilder {
    /// Start a record from planar polyline points.
    pub fn line(points: &[[f64; 2]]) -> Self {
        Self {
            record: MapLaneRecord {
                polyline: points.iter().map(|p| [p[0], p[1], 0.0]).collect(),
                ..Default::default()
            },
        }
    }

    /// Set per-point two-sided width samples.
    pub fn width_samples(mut self, samples: &[WidthSample]) -> Self {
        self.record.width_samples = samples.to_vec();
        self
    }

    /// Append a left neighbor reference.
    pub fn left_neighbor(mut self, neighbor: NeighborRef) -> Self {
        self.record.left_neighbors.push(neighbor);
        self
    }

    /// Append a right neighbor reference.
    pub fn right_neighbor(mut self, neighbor: NeighborRef) -> Self {
        self.record.right_neighbors.push(neighbor);
        self
    }

    /// Append an entry lane ID.
    pub fn entry(mut self, lane_id: LaneId) -> Self {
        self.record.entry_lanes.push(lane_id);
        self
    }

    /// Append an exit lane ID.
    pub fn exit(mut self, lane_id: LaneId) -> Self {
        self.record.exit_lanes.push(lane_id);
        self
    }

    /// Set the raw semantic tag.
    pub fn tag(mut self, tag: &str) -> Self {
        self.record.semantic_tag = Some(tag.to_string());
        self
    }

    /// Finish the record.
    pub fn build(self) -> MapLaneRecord {
        self.record
    }
}
