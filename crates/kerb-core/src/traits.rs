//! Core abstraction traits for dataset access and geometry conversion.

use crate::error::LaneBuildError;
use crate::id::LaneId;
use crate::record::{MapLaneRecord, RawPoint, SimPoint};

/// Read-only access to the decoded map dataset.
///
/// Implemented by the concrete dataset type in `kerb-map` and by test
/// fixtures. Lookups are pure reads with no side effects; construction
/// code calls this once per field access.
///
/// # Thread Safety
///
/// `Send + Sync` is required so that entity construction for many lane
/// IDs can proceed in parallel threads over one shared view.
pub trait MapView: Send + Sync {
    /// Resolve a lane ID to its raw record.
    ///
    /// Fails with [`LaneBuildError::MissingRecord`] if the ID is absent.
    fn record(&self, lane_id: LaneId) -> Result<&MapLaneRecord, LaneBuildError>;
}

/// Maps a raw point sequence into simulation space.
///
/// The conversion is owned by the simulation engine and consumed here
/// only through this contract: deterministic, order- and
/// count-preserving, no side effects. Implementations must return
/// exactly one output point per input point, in input order.
pub trait GeometryConverter: Send + Sync {
    /// Convert a raw polyline into simulation-space points.
    fn convert(&self, raw: &[RawPoint]) -> Vec<SimPoint>;
}
