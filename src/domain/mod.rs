//! Domain layer containing the personality analysis logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `ingestion` - CSV parsing and normalization into personality profiles
//! - `analysis` - Pure domain services (classifier, compatibility, research)
//! - `pipeline` - Batch orchestration: ingest, classify, compare

pub mod analysis;
pub mod foundation;
pub mod ingestion;
pub mod pipeline;
