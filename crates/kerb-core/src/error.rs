//! Error types for lane-entity construction.
//!
//! All failures are local to the single lane being built: the dataset
//! view and any already-built entities are unaffected. Construction is
//! deterministic over resident data, so a failure recurs identically on
//! retry — callers should treat these as terminal for that lane ID.

use crate::id::LaneId;
use std::error::Error;
use std::fmt;

/// Errors raised while constructing a single lane entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaneBuildError {
    /// The requested lane ID is absent from the dataset.
    MissingRecord {
        /// The ID that failed to resolve.
        lane_id: LaneId,
    },
    /// The record's semantic tag matches none of the recognized
    /// categories.
    UnsupportedSemanticTag {
        /// The lane whose record carries the tag.
        lane_id: LaneId,
        /// The offending tag value, verbatim from the record.
        tag: String,
    },
}

impl fmt::Display for LaneBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRecord { lane_id } => {
                write!(f, "lane {lane_id} not present in map dataset")
            }
            Self::UnsupportedSemanticTag { lane_id, tag } => {
                write!(f, "lane {lane_id} has unsupported semantic tag '{tag}'")
            }
        }
    }
}

impl Error for LaneBuildError {}
