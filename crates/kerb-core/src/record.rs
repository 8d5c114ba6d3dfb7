//! Raw map record types and boundary enums.
//!
//! A [`MapLaneRecord`] is the already-decoded form of one lane in the
//! source dataset. Records are created once at map load, never mutated
//! afterwards, and shared read-only by every entity built from them.

use crate::id::LaneId;
use smallvec::SmallVec;

/// A raw map point: (x, y, z) in source-dataset coordinates.
pub type RawPoint = [f64; 3];

/// A simulation-space point: (x, y) after geometry conversion.
pub type SimPoint = [f64; 2];

/// A per-polyline-point two-sided width sample: (left extent, right extent).
pub type WidthSample = [f64; 2];

/// Descriptor linking overlapping index ranges between a lane's polyline
/// and an adjacent lane's polyline.
///
/// Index validity is a precondition supplied by the map loader and is not
/// re-verified here. The back-reference to the neighbor is by ID only
/// (weak), resolved through the shared dataset view at read time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborRef {
    /// The adjacent lane.
    pub lane_id: LaneId,
    /// First index of the overlap on this lane's polyline.
    pub self_start: usize,
    /// Last index of the overlap on this lane's polyline.
    pub self_end: usize,
    /// First index of the overlap on the neighbor's polyline.
    pub neighbor_start: usize,
    /// Last index of the overlap on the neighbor's polyline.
    pub neighbor_end: usize,
}

/// One decoded lane record from the source map dataset.
///
/// Lifetime equals the dataset lifetime; the dataset owns the record and
/// entities hold no owning link back to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapLaneRecord {
    /// Ordered raw center polyline, length >= 0.
    pub polyline: Vec<RawPoint>,
    /// IDs of lanes that flow into this one.
    pub entry_lanes: Vec<LaneId>,
    /// IDs of lanes this one flows into.
    pub exit_lanes: Vec<LaneId>,
    /// Neighbors on the left, in upstream-producer order.
    ///
    /// Inline capacity of 2 covers almost every real lane without a
    /// heap allocation.
    pub left_neighbors: SmallVec<[NeighborRef; 2]>,
    /// Neighbors on the right, in upstream-producer order.
    pub right_neighbors: SmallVec<[NeighborRef; 2]>,
    /// Raw semantic tag, verbatim from the decoder; `None` when unset.
    pub semantic_tag: Option<String>,
    /// Per-point two-sided width samples, indexed like `polyline`.
    pub width_samples: Vec<WidthSample>,
}

impl MapLaneRecord {
    /// Returns `true` if the record has no neighbor on either side.
    pub fn is_isolated(&self) -> bool {
        self.left_neighbors.is_empty() && self.right_neighbors.is_empty()
    }
}

/// Whether a lane edge is crossable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineType {
    /// Dashed marking; crossing is permitted.
    Broken,
    /// Solid marking; crossing is not permitted.
    Continuous,
}

/// Rendered color of a boundary line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineColor {
    /// Yellow marking, paired with continuous lines.
    Yellow,
    /// Grey marking, paired with broken lines.
    Grey,
}

impl LineColor {
    /// Derive the color for a boundary line type.
    ///
    /// Yellow iff the line is continuous; each side of a lane derives
    /// its color independently.
    pub fn for_line_type(line_type: LineType) -> Self {
        match line_type {
            LineType::Continuous => Self::Yellow,
            LineType::Broken => Self::Grey,
        }
    }
}
