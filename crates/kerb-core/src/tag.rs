//! The closed semantic-tag vocabulary and its parser.
//!
//! Source datasets label lane records with free-form strings. Everything
//! downstream of the parser works with the closed [`SemanticTag`] enum
//! and an exhaustive match; any string outside the recognized vocabulary
//! routes to the single unsupported-tag error path.

use crate::error::LaneBuildError;
use crate::id::LaneId;

/// Broken/solid indicator carried by road-line tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinePattern {
    /// Dashed paint.
    Broken,
    /// Solid paint.
    Solid,
}

/// Recognized semantic categories for a raw lane record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SemanticTag {
    /// A painted lane-line record.
    RoadLine(LinePattern),
    /// A physical road-edge record.
    RoadEdge {
        /// `true` for boundary edges that carry a sidewalk.
        sidewalk: bool,
    },
    /// An ordinary drivable center lane.
    CenterLane,
}

impl SemanticTag {
    /// Parse a raw tag string into the closed vocabulary.
    ///
    /// The string values are the ones emitted by the upstream dataset
    /// decoder. Anything else fails with
    /// [`LaneBuildError::UnsupportedSemanticTag`] carrying the offending
    /// value and the lane it was found on.
    pub fn parse(tag: &str, lane_id: LaneId) -> Result<Self, LaneBuildError> {
        match tag {
            "ROAD_LINE_BROKEN_SINGLE_WHITE"
            | "ROAD_LINE_BROKEN_SINGLE_YELLOW"
            | "ROAD_LINE_BROKEN_DOUBLE_YELLOW"
            | "ROAD_LINE_PASSING_DOUBLE_YELLOW" => Ok(Self::RoadLine(LinePattern::Broken)),
            "ROAD_LINE_UNKNOWN"
            | "ROAD_LINE_SOLID_SINGLE_WHITE"
            | "ROAD_LINE_SOLID_DOUBLE_WHITE"
            | "ROAD_LINE_SOLID_SINGLE_YELLOW"
            | "ROAD_LINE_SOLID_DOUBLE_YELLOW" => Ok(Self::RoadLine(LinePattern::Solid)),
            "ROAD_EDGE_BOUNDARY" => Ok(Self::RoadEdge { sidewalk: true }),
            "ROAD_EDGE_UNKNOWN" | "ROAD_EDGE_MEDIAN" => Ok(Self::RoadEdge { sidewalk: false }),
            "center_lane" => Ok(Self::CenterLane),
            other => Err(LaneBuildError::UnsupportedSemanticTag {
                lane_id,
                tag: other.to_string(),
            }),
        }
    }
}
