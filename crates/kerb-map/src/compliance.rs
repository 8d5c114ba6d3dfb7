//! Lane-entity invariant check helpers.
//!
//! These functions verify the invariants every successfully built
//! [`LaneEntity`] must satisfy. Reused across the unit test modules and
//! the integration suite; callers can also run them against entities
//! built from untrusted datasets while debugging data-quality issues.

use crate::lane::LaneEntity;
use crate::width::MIN_LANE_WIDTH;
use kerb_core::{LineColor, LineType};

/// Assert that the inferred width respects the floor.
pub fn assert_width_floor(lane: &LaneEntity) {
    assert!(
        lane.width() >= MIN_LANE_WIDTH,
        "lane {} width {} below floor {MIN_LANE_WIDTH}",
        lane.index(),
        lane.width()
    );
}

/// Assert that each side's color pairs with its line type:
/// yellow iff continuous, grey iff broken.
pub fn assert_color_pairing(lane: &LaneEntity) {
    for side in 0..2 {
        let expected = LineColor::for_line_type(lane.line_types()[side]);
        assert_eq!(
            lane.line_colors()[side],
            expected,
            "lane {} side {side}: color does not pair with {:?}",
            lane.index(),
            lane.line_types()[side]
        );
    }
}

/// Assert that a side is broken exactly when it has adjacent lanes.
pub fn assert_topology_pairing(lane: &LaneEntity) {
    let sides = [
        ("left", lane.left_lanes().len(), lane.line_types()[0]),
        ("right", lane.right_lanes().len(), lane.line_types()[1]),
    ];
    for (name, count, line_type) in sides {
        let expected = if count > 0 {
            LineType::Broken
        } else {
            LineType::Continuous
        };
        assert_eq!(
            line_type,
            expected,
            "lane {} {name} side: {count} neighbors but {line_type:?}",
            lane.index()
        );
    }
}

/// Assert that the centerline's reported length matches its points.
pub fn assert_centerline_consistent(lane: &LaneEntity) {
    let points = lane.centerline().points();
    let summed: f64 = points
        .windows(2)
        .map(|w| (w[0][0] - w[1][0]).hypot(w[0][1] - w[1][1]))
        .sum();
    assert!(
        (lane.centerline().length() - summed).abs() < 1e-9,
        "lane {} centerline length {} != summed segments {summed}",
        lane.index(),
        lane.centerline().length()
    );
}

/// Run every entity invariant check.
pub fn run_full_compliance(lane: &LaneEntity) {
    assert_width_floor(lane);
    assert_color_pairing(lane);
    assert_topology_pairing(lane);
    assert_centerline_consistent(lane);
}
