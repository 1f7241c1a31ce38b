//! Ingestion module - CSV parsing and normalization.
//!
//! Each uploaded CSV file carries one personality category (domain): a
//! `category` header column followed by one column per person, and one row
//! per facet. Parsing is strict and fail-fast; a structural violation in
//! any file aborts the whole batch.

mod profile;
mod score_table;

pub use profile::{combine, FacetScores, PersonalityProfile, TraitScores};
pub use score_table::ScoreTable;
