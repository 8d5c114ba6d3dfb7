//! Map dataset view and lane-entity construction for Kerb.
//!
//! This crate turns one raw, already-decoded map record into an
//! immutable [`LaneEntity`]: the raw polyline is converted into
//! simulation space, an effective lane width is inferred from
//! neighboring-lane offsets, and left/right boundary line type and
//! color are classified from topology combined with the record's
//! semantic tag.
//!
//! Construction is a pure, synchronous computation over resident,
//! read-only data. Building entities for many lane IDs in parallel over
//! one shared [`MapDataset`] requires no synchronization.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod boundary;
pub mod compliance;
mod convert;
mod dataset;
mod geometry;
mod lane;
mod width;

pub use boundary::{classify_boundaries, tag_implied_line_types, BoundaryAttribution};
pub use convert::FlipYConvention;
pub use dataset::MapDataset;
pub use geometry::Centerline;
pub use lane::LaneEntity;
pub use width::{estimate_width, MIN_LANE_WIDTH};
