//! The immutable lane entity and its assembler.

use crate::boundary::classify_boundaries;
use crate::geometry::Centerline;
use crate::width::estimate_width;
use kerb_core::{GeometryConverter, LaneBuildError, LaneId, LineColor, LineType, MapView};

/// One drivable lane, assembled from a raw map record.
///
/// Immutable once built. Topology links (entry/exit/left/right) are
/// stored as bare lane IDs — weak references that consumers resolve
/// against the shared dataset view; an entity never owns another entity
/// or a dataset record, so the lane graph carries no reference cycles.
///
/// Entities are built lazily and independently per lane ID; a failed
/// build for one ID has no effect on the dataset or on entities already
/// built from it.
#[derive(Clone, Debug)]
pub struct LaneEntity {
    index: LaneId,
    centerline: Centerline,
    width: f64,
    entry_lanes: Vec<LaneId>,
    exit_lanes: Vec<LaneId>,
    left_lanes: Vec<LaneId>,
    right_lanes: Vec<LaneId>,
    line_types: [LineType; 2],
    line_colors: [LineColor; 2],
}

impl LaneEntity {
    /// Build the lane entity for one lane ID.
    ///
    /// Converts the raw polyline through the supplied converter, infers
    /// the width, classifies the boundaries, and copies the topology id
    /// lists verbatim from the record. Referenced entry/exit IDs are not
    /// checked against the dataset.
    ///
    /// Fails with whatever error the dataset view or the boundary
    /// classifier raised; on failure no partially built entity exists.
    pub fn build(
        lane_id: LaneId,
        view: &dyn MapView,
        converter: &dyn GeometryConverter,
    ) -> Result<Self, LaneBuildError> {
        let record = view.record(lane_id)?;
        let centerline = Centerline::new(converter.convert(&record.polyline));
        let width = estimate_width(lane_id, view)?;
        let boundary = classify_boundaries(lane_id, view)?;
        Ok(Self {
            index: lane_id,
            centerline,
            width,
            entry_lanes: record.entry_lanes.clone(),
            exit_lanes: record.exit_lanes.clone(),
            left_lanes: record.left_neighbors.iter().map(|n| n.lane_id).collect(),
            right_lanes: record.right_neighbors.iter().map(|n| n.lane_id).collect(),
            line_types: boundary.line_types,
            line_colors: boundary.line_colors,
        })
    }

    /// The lane's ID in the source dataset.
    pub fn index(&self) -> LaneId {
        self.index
    }

    /// Converted centerline geometry.
    pub fn centerline(&self) -> &Centerline {
        &self.centerline
    }

    /// Inferred effective width, always at least
    /// [`MIN_LANE_WIDTH`](crate::MIN_LANE_WIDTH).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// IDs of lanes flowing into this one.
    pub fn entry_lanes(&self) -> &[LaneId] {
        &self.entry_lanes
    }

    /// IDs of lanes this one flows into.
    pub fn exit_lanes(&self) -> &[LaneId] {
        &self.exit_lanes
    }

    /// IDs of the left-adjacent lanes, in record order.
    pub fn left_lanes(&self) -> &[LaneId] {
        &self.left_lanes
    }

    /// IDs of the right-adjacent lanes, in record order.
    pub fn right_lanes(&self) -> &[LaneId] {
        &self.right_lanes
    }

    /// Boundary line types, left then right.
    pub fn line_types(&self) -> [LineType; 2] {
        self.line_types
    }

    /// Boundary line colors, left then right.
    pub fn line_colors(&self) -> [LineColor; 2] {
        self.line_colors
    }

    /// Explicit teardown diagnostic, called by the owning map or episode
    /// when the entity is dropped from play.
    ///
    /// Logs at a deterministic point instead of relying on destructor
    /// timing. No resource cleanup happens here and no ordering against
    /// other entities is required.
    pub fn release(&self) {
        log::debug!("lane {} released", self.index);
    }
}
