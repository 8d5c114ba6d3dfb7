//! Core types and traits for the Kerb lane-construction framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Kerb workspace:
//! typed IDs, raw map record types, boundary enums, error types, and
//! the dataset/converter traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod id;
mod record;
mod tag;
mod traits;

pub use error::LaneBuildError;
pub use id::{LaneId, MapInstanceId};
pub use record::{
    LineColor, LineType, MapLaneRecord, NeighborRef, RawPoint, SimPoint, WidthSample,
};
pub use tag::{LinePattern, SemanticTag};
pub use traits::{GeometryConverter, MapView};
