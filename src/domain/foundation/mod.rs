//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the Ocean Insights domain.

mod errors;
mod level;
mod ordered_map;
mod trait_domain;

pub use errors::{AnalysisError, EngineError, IngestError};
pub use level::{ScoreLevel, HIGH_THRESHOLD, LOW_THRESHOLD};
pub use ordered_map::OrderedMap;
pub use trait_domain::TraitDomain;
