//! Kerb: lane-entity construction from raw driving-dataset maps.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Kerb sub-crates. For most users, adding `kerb` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use kerb::prelude::*;
//!
//! // Load one decoded record into a dataset.
//! let mut dataset = MapDataset::new();
//! dataset.insert(
//!     LaneId(108),
//!     MapLaneRecord {
//!         polyline: vec![[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]],
//!         width_samples: vec![[4.0, 4.0], [4.0, 4.0]],
//!         ..Default::default()
//!     },
//! );
//!
//! // Build the lane entity through the engine's coordinate convention.
//! let lane = LaneEntity::build(LaneId(108), &dataset, &FlipYConvention).unwrap();
//! assert_eq!(lane.width(), 8.0);
//! assert_eq!(lane.line_types(), [LineType::Continuous, LineType::Continuous]);
//! assert_eq!(lane.line_colors(), [LineColor::Yellow, LineColor::Yellow]);
//!
//! // Explicit teardown when the owning episode ends.
//! lane.release();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `kerb-core` | IDs, raw records, tags, errors, core traits |
//! | [`map`] | `kerb-map` | Dataset view, geometry, width, boundaries, entities |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`kerb-core`).
///
/// Contains the raw record model, the closed semantic-tag vocabulary,
/// error types, and the fundamental traits ([`types::MapView`],
/// [`types::GeometryConverter`]).
pub use kerb_core as types;

/// Dataset view and lane construction (`kerb-map`).
///
/// Provides [`map::MapDataset`], [`map::Centerline`],
/// [`map::LaneEntity`], the width estimator, the boundary classifier,
/// and the [`map::compliance`] invariant helpers.
pub use kerb_map as map;

/// Common imports for typical Kerb usage.
///
/// ```rust
/// use kerb::prelude::*;
/// ```
///
/// This imports the most frequently used types: the dataset, the entity
/// builder, record and boundary types, errors, and the core traits.
pub mod prelude {
    // Core types and traits
    pub use kerb_core::{
        GeometryConverter, LaneId, LineColor, LinePattern, LineType, MapInstanceId,
        MapLaneRecord, MapView, NeighborRef, RawPoint, SemanticTag, SimPoint, WidthSample,
    };

    // Errors
    pub use kerb_core::LaneBuildError;

    // Dataset and entity construction
    pub use kerb_map::{
        classify_boundaries, estimate_width, BoundaryAttribution, Centerline, FlipYConvention,
        LaneEntity, MapDataset, MIN_LANE_WIDTH,
    };
}
