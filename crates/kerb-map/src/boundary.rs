//! Left/right boundary line-type and color classification.

use kerb_core::{
    LaneBuildError, LaneId, LineColor, LinePattern, LineType, MapView, SemanticTag,
};

/// Classified boundary attributes for one lane, left side then right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryAttribution {
    /// Line type per side.
    pub line_types: [LineType; 2],
    /// Line color per side.
    pub line_colors: [LineColor; 2],
}

/// Classify the boundary line types and colors of a lane.
///
/// A side with at least one neighbor gets a broken (crossable) line; a
/// side with none gets a continuous line. The record's semantic tag is
/// validated against the closed vocabulary and an unrecognized tag fails
/// construction, but for every recognized tag the topology-derived pair
/// is what ends up on the entity: the reference classifier computes a
/// tag-implied pair in the road-line and road-edge branches and then
/// overwrites it with the topology pair. That precedence is preserved
/// here exactly and pinned by tests; see
/// [`tag_implied_line_types`] for the pair the tag alone would give.
///
/// A road-line record whose polyline has one point or fewer is tolerated
/// with a warning, never an error.
pub fn classify_boundaries(
    lane_id: LaneId,
    view: &dyn MapView,
) -> Result<BoundaryAttribution, LaneBuildError> {
    let record = view.record(lane_id)?;

    let left = if record.left_neighbors.is_empty() {
        LineType::Continuous
    } else {
        LineType::Broken
    };
    let right = if record.right_neighbors.is_empty() {
        LineType::Continuous
    } else {
        LineType::Broken
    };

    if let Some(tag) = record.semantic_tag.as_deref() {
        let parsed = SemanticTag::parse(tag, lane_id)?;
        if matches!(parsed, SemanticTag::RoadLine(_)) && record.polyline.len() <= 1 {
            log::warn!(
                "lane {lane_id}: road-line record has a degenerate polyline \
                 ({} points)",
                record.polyline.len()
            );
        }
        // Computed for parity with the reference classifier, which
        // derives this pair and then assigns the topology pair below.
        let _tag_pair = tag_implied_line_types(parsed);
    }

    Ok(BoundaryAttribution {
        line_types: [left, right],
        line_colors: [LineColor::for_line_type(left), LineColor::for_line_type(right)],
    })
}

/// The line-type pair a semantic tag alone would imply.
///
/// Road lines follow their broken/solid indicator on both sides; road
/// edges are continuous on both sides; a center lane implies broken on
/// both sides. The classifier computes but does not assign this pair —
/// exposed for diagnostics.
pub fn tag_implied_line_types(tag: SemanticTag) -> [LineType; 2] {
    match tag {
        SemanticTag::RoadLine(LinePattern::Broken) => [LineType::Broken, LineType::Broken],
        SemanticTag::RoadLine(LinePattern::Solid) => {
            [LineType::Continuous, LineType::Continuous]
        }
        SemanticTag::RoadEdge { .. } => [LineType::Continuous, LineType::Continuous],
        SemanticTag::CenterLane => [LineType::Broken, LineType::Broken],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerb_test_utils::{neighbor, FixtureMap, RecordBuilder};
    use proptest::prelude::*;

    fn classify(record: kerb_core::MapLaneRecord) -> Result<BoundaryAttribution, LaneBuildError> {
        let map = FixtureMap::new().with(LaneId(1), record);
        classify_boundaries(LaneId(1), &map)
    }

    #[test]
    fn untagged_isolated_lane_is_continuous_both_sides() {
        let attr = classify(RecordBuilder::line(&[[0.0, 0.0], [1.0, 0.0]]).build()).unwrap();
        assert_eq!(attr.line_types, [LineType::Continuous, LineType::Continuous]);
        assert_eq!(attr.line_colors, [LineColor::Yellow, LineColor::Yellow]);
    }

    #[test]
    fn neighbored_sides_are_broken() {
        let attr = classify(
            RecordBuilder::line(&[[0.0, 0.0], [1.0, 0.0]])
                .left_neighbor(neighbor(LaneId(2), 0, 1, 0, 1))
                .build(),
        )
        .unwrap();
        assert_eq!(attr.line_types, [LineType::Broken, LineType::Continuous]);
        assert_eq!(attr.line_colors, [LineColor::Grey, LineColor::Yellow]);
    }

    #[test]
    fn topology_wins_over_sidewalk_edge_tag() {
        // Sidewalk edges alone would imply continuous/continuous; the
        // two right neighbors force the right side broken anyway.
        let attr = classify(
            RecordBuilder::line(&[[0.0, 0.0], [1.0, 0.0]])
                .tag("ROAD_EDGE_BOUNDARY")
                .right_neighbor(neighbor(LaneId(2), 0, 1, 0, 1))
                .right_neighbor(neighbor(LaneId(3), 0, 1, 0, 1))
                .build(),
        )
        .unwrap();
        assert_eq!(attr.line_types, [LineType::Continuous, LineType::Broken]);
    }

    #[test]
    fn topology_wins_over_solid_road_line_tag() {
        let attr = classify(
            RecordBuilder::line(&[[0.0, 0.0], [1.0, 0.0]])
                .tag("ROAD_LINE_SOLID_SINGLE_WHITE")
                .left_neighbor(neighbor(LaneId(2), 0, 1, 0, 1))
                .right_neighbor(neighbor(LaneId(3), 0, 1, 0, 1))
                .build(),
        )
        .unwrap();
        assert_eq!(attr.line_types, [LineType::Broken, LineType::Broken]);
    }

    #[test]
    fn center_lane_tag_keeps_topology_defaults() {
        let attr = classify(
            RecordBuilder::line(&[[0.0, 0.0], [1.0, 0.0]])
                .tag("center_lane")
                .build(),
        )
        .unwrap();
        assert_eq!(attr.line_types, [LineType::Continuous, LineType::Continuous]);
    }

    #[test]
    fn unknown_tag_fails_with_the_tag_value() {
        let err = classify(
            RecordBuilder::line(&[[0.0, 0.0], [1.0, 0.0]])
                .tag("speed_bump")
                .build(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LaneBuildError::UnsupportedSemanticTag {
                lane_id: LaneId(1),
                tag: "speed_bump".into(),
            }
        );
    }

    #[test]
    fn degenerate_road_line_polyline_is_tolerated() {
        let attr = classify(RecordBuilder::line(&[[0.0, 0.0]]).tag("ROAD_LINE_UNKNOWN").build());
        assert!(attr.is_ok());
    }

    #[test]
    fn tag_implied_pairs() {
        assert_eq!(
            tag_implied_line_types(SemanticTag::RoadLine(LinePattern::Broken)),
            [LineType::Broken, LineType::Broken]
        );
        assert_eq!(
            tag_implied_line_types(SemanticTag::RoadEdge { sidewalk: false }),
            [LineType::Continuous, LineType::Continuous]
        );
    }

    fn arb_tag() -> impl Strategy<Value = Option<&'static str>> {
        prop_oneof![
            Just(None),
            Just(Some("ROAD_LINE_BROKEN_SINGLE_WHITE")),
            Just(Some("ROAD_LINE_SOLID_DOUBLE_YELLOW")),
            Just(Some("ROAD_EDGE_BOUNDARY")),
            Just(Some("ROAD_EDGE_MEDIAN")),
            Just(Some("center_lane")),
        ]
    }

    proptest! {
        #[test]
        fn colors_pair_with_types_independently(
            left_count in 0usize..3,
            right_count in 0usize..3,
            tag in arb_tag(),
        ) {
            let mut builder = RecordBuilder::line(&[[0.0, 0.0], [1.0, 0.0]]);
            for i in 0..left_count {
                builder = builder.left_neighbor(neighbor(LaneId(10 + i as u64), 0, 1, 0, 1));
            }
            for i in 0..right_count {
                builder = builder.right_neighbor(neighbor(LaneId(20 + i as u64), 0, 1, 0, 1));
            }
            if let Some(tag) = tag {
                builder = builder.tag(tag);
            }
            let attr = classify(builder.build()).unwrap();
            for side in 0..2 {
                prop_assert_eq!(
                    attr.line_colors[side] == LineColor::Yellow,
                    attr.line_types[side] == LineType::Continuous
                );
            }
            // Topology decides the pair regardless of the tag branch.
            let expect = |n: usize| if n > 0 { LineType::Broken } else { LineType::Continuous };
            prop_assert_eq!(attr.line_types, [expect(left_count), expect(right_count)]);
        }
    }
}
