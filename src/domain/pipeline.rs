//! Batch orchestration: parse every table, combine into profiles, then run
//! individual and pairwise analyses.
//!
//! # Edge Cases
//!
//! - Any malformed table aborts the whole batch; no partial report is
//!   produced.
//! - A single profile yields individual analyses and an empty relationship
//!   list.

use serde::Serialize;

use crate::domain::analysis::{IndividualAnalysis, RelationshipDynamics};
use crate::domain::foundation::EngineError;
use crate::domain::ingestion::{combine, PersonalityProfile, ScoreTable};

/// One uploaded CSV document, carrying its name for error context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub name: String,
    pub contents: String,
}

impl CsvFile {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Complete output of one batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub profiles: Vec<PersonalityProfile>,
    pub individuals: Vec<IndividualAnalysis>,
    pub relationships: Vec<RelationshipDynamics>,
}

/// Parses every file, combines the tables into per-person profiles, and
/// produces individual analyses plus compatibility for every unordered pair.
pub fn run_batch(files: &[CsvFile]) -> Result<AnalysisReport, EngineError> {
    let mut tables = Vec::with_capacity(files.len());
    for file in files {
        let table = ScoreTable::parse(&file.contents, &file.name)?;
        tracing::debug!(
            file = %file.name,
            category = %table.category,
            persons = table.persons().count(),
            "parsed score table"
        );
        tables.push(table);
    }

    let profiles = combine(&tables);

    let mut individuals = Vec::with_capacity(profiles.len());
    for profile in &profiles {
        individuals.push(IndividualAnalysis::from_profile(profile)?);
    }

    let mut relationships = Vec::new();
    for i in 0..profiles.len() {
        for j in (i + 1)..profiles.len() {
            relationships.push(RelationshipDynamics::analyze(&profiles[i], &profiles[j])?);
        }
    }

    tracing::info!(
        tables = tables.len(),
        persons = profiles.len(),
        pairs = relationships.len(),
        "batch analysis complete"
    );

    Ok(AnalysisReport {
        profiles,
        individuals,
        relationships,
    })
}
