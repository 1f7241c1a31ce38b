//! PersonalityProfile - one person's facet scores across every domain.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OrderedMap;
use crate::domain::ingestion::ScoreTable;

/// Facet name to numeric score, in file row order.
pub type FacetScores = OrderedMap<f64>;

/// Domain name to facet scores, in table upload order.
pub type TraitScores = OrderedMap<FacetScores>;

/// One person's scores across every domain table they appear in.
///
/// A person missing from some domain table simply has no entry for that
/// domain. Profiles are value objects recomputed on each ingestion; nothing
/// is cached or merged across uploads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub name: String,
    pub scores: TraitScores,
}

impl PersonalityProfile {
    /// Creates a profile with no scores.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: TraitScores::new(),
        }
    }
}

/// Pivots parsed score tables into per-person profiles.
///
/// Person order is first-seen across tables (header column order within a
/// table), with duplicates collapsed. Each profile collects the person's
/// facet row from every table where they appear.
pub fn combine(tables: &[ScoreTable]) -> Vec<PersonalityProfile> {
    let mut names: Vec<String> = Vec::new();
    for table in tables {
        for person in table.persons() {
            if !names.contains(person) {
                names.push(person.clone());
            }
        }
    }

    names
        .into_iter()
        .map(|name| {
            let mut profile = PersonalityProfile::new(&name);
            for table in tables {
                if let Some(row) = table.row(&name) {
                    profile.scores.insert(&table.category, row.clone());
                }
            }
            profile
        })
        .collect()
}
