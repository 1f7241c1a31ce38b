//! Ocean Insights - Big Five personality analysis engine.
//!
//! This crate ingests per-domain CSV score tables, classifies each person's
//! Big Five domains against fixed thresholds, and derives pairwise
//! compatibility analyses. It owns no UI, persistence, or network surface;
//! callers consume the typed output records.

pub mod domain;
