//! Effective lane-width inference from neighbor offset geometry.

use crate::geometry::planar_distance;
use kerb_core::{LaneBuildError, LaneId, MapLaneRecord, MapView, NeighborRef};

/// Floor applied to every inferred lane width, in simulation length units.
pub const MIN_LANE_WIDTH: f64 = 6.0;

/// Infer the effective width of a lane from the raw record.
///
/// A lane with no neighbors on either side falls back to the two-sided
/// width sample at polyline index 0 (an absent sample contributes
/// `0.0`). Otherwise the width is the larger of the two center-to-center
/// gaps to the adjacent lanes, where a side with no neighbors
/// contributes `0.0`. The result never drops below [`MIN_LANE_WIDTH`].
///
/// Neighbor selection is asymmetric: the **first** entry of the right
/// list and the **last** entry of the left list. That is the ordering
/// convention of the upstream map producer, taken as a precondition
/// rather than re-derived from geometry.
///
/// Gap distances are measured between raw polyline points on both ends;
/// the stock conversion convention is an isometry, so the value is the
/// same in converted space.
pub fn estimate_width(lane_id: LaneId, view: &dyn MapView) -> Result<f64, LaneBuildError> {
    let record = view.record(lane_id)?;
    if record.is_isolated() {
        let sampled = record
            .width_samples
            .first()
            .map(|s| s[0] + s[1])
            .unwrap_or(0.0);
        return Ok(sampled.max(MIN_LANE_WIDTH));
    }

    let mut dist_to_left = 0.0;
    let mut dist_to_right = 0.0;
    if let Some(neighbor) = record.right_neighbors.first() {
        dist_to_right = neighbor_gap(record, neighbor, view)?;
    }
    if let Some(neighbor) = record.left_neighbors.last() {
        dist_to_left = neighbor_gap(record, neighbor, view)?;
    }
    Ok(dist_to_left.max(dist_to_right).max(MIN_LANE_WIDTH))
}

/// Planar distance between this lane's polyline point at the overlap
/// start and the neighbor's polyline point at its overlap start.
///
/// Overlap index validity is a map-loader precondition.
fn neighbor_gap(
    record: &MapLaneRecord,
    neighbor: &NeighborRef,
    view: &dyn MapView,
) -> Result<f64, LaneBuildError> {
    let neighbor_record = view.record(neighbor.lane_id)?;
    let self_point = record.polyline[neighbor.self_start];
    let neighbor_point = neighbor_record.polyline[neighbor.neighbor_start];
    Ok(planar_distance(
        [self_point[0], self_point[1]],
        [neighbor_point[0], neighbor_point[1]],
    ))
}
