//! Domain classifier - maps facet score averages to qualitative analyses.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::narratives::narrative;
use crate::domain::foundation::{AnalysisError, ScoreLevel, TraitDomain};
use crate::domain::ingestion::FacetScores;

/// The classification of one domain for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAnalysis {
    pub level: ScoreLevel,
    /// The facet average the level was derived from.
    pub score: f64,
    pub description: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub career_suggestions: Vec<String>,
    pub development_areas: Vec<String>,
}

/// Computes the arithmetic mean of a domain's facet scores.
///
/// # Edge Cases
/// - Zero facets: Returns `AnalysisError::EmptyDomain` rather than a NaN
///   average. The ingestion contract cannot produce this (every table needs
///   at least one data row), so it only arises from hand-built profiles.
pub fn facet_average(domain: &str, facets: &FacetScores) -> Result<f64, AnalysisError> {
    if facets.is_empty() {
        return Err(AnalysisError::EmptyDomain {
            domain: domain.to_string(),
        });
    }
    let sum: f64 = facets.values().sum();
    Ok(sum / facets.len() as f64)
}

/// Classifies a domain from its facet scores.
pub fn classify(domain: &str, facets: &FacetScores) -> Result<DomainAnalysis, AnalysisError> {
    let average = facet_average(domain, facets)?;
    classify_average(domain, average)
}

/// Classifies a domain from an already-computed facet average.
///
/// Fails with `UnknownDomain` for names outside the fixed Big Five set;
/// there is no narrative entry to fall back to.
pub fn classify_average(domain: &str, average: f64) -> Result<DomainAnalysis, AnalysisError> {
    let parsed = TraitDomain::parse(domain)
        .ok_or_else(|| AnalysisError::UnknownDomain(domain.to_string()))?;

    let level = ScoreLevel::from_average(average);
    let entry = narrative(parsed, level);

    Ok(DomainAnalysis {
        level,
        score: average,
        description: entry.description.to_string(),
        strengths: to_owned_list(entry.strengths),
        challenges: to_owned_list(entry.challenges),
        career_suggestions: to_owned_list(entry.careers),
        development_areas: to_owned_list(entry.development),
    })
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facets(pairs: &[(&str, f64)]) -> FacetScores {
        let mut scores = FacetScores::new();
        for (name, value) in pairs {
            scores.insert(*name, *value);
        }
        scores
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let scores = facets(&[("a", 10.0), ("b", 14.0), ("c", 18.0)]);
        assert_eq!(facet_average("Extraversion", &scores).unwrap(), 14.0);
    }

    #[test]
    fn zero_facets_is_an_explicit_error() {
        let err = facet_average("Extraversion", &FacetScores::new()).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::EmptyDomain {
                domain: "Extraversion".to_string()
            }
        );
    }

    #[test]
    fn classify_uses_threshold_boundaries() {
        let low = classify_average("Extraversion", 8.0).unwrap();
        assert_eq!(low.level, ScoreLevel::Low);

        let moderate = classify_average("Extraversion", 8.01).unwrap();
        assert_eq!(moderate.level, ScoreLevel::Moderate);

        let still_moderate = classify_average("Extraversion", 13.99).unwrap();
        assert_eq!(still_moderate.level, ScoreLevel::Moderate);

        let high = classify_average("Extraversion", 14.0).unwrap();
        assert_eq!(high.level, ScoreLevel::High);
    }

    #[test]
    fn classify_carries_the_average_through() {
        let analysis = classify("Extraversion", &facets(&[("Talkative", 18.0)])).unwrap();
        assert_eq!(analysis.score, 18.0);
        assert_eq!(analysis.level, ScoreLevel::High);
    }

    #[test]
    fn classify_fills_narrative_fields() {
        let analysis = classify_average("Neuroticism", 18.0).unwrap();
        assert_eq!(
            analysis.description,
            "Emotionally sensitive and reactive. Experiences stress and emotions intensely."
        );
        assert_eq!(analysis.strengths.len(), 4);
        assert_eq!(analysis.challenges.len(), 3);
        assert_eq!(analysis.career_suggestions.len(), 5);
        assert_eq!(analysis.development_areas.len(), 3);
    }

    #[test]
    fn unknown_domain_fails_loudly() {
        let err = classify_average("Charisma", 10.0).unwrap_err();
        assert_eq!(err, AnalysisError::UnknownDomain("Charisma".to_string()));
    }

    #[test]
    fn out_of_range_scores_still_classify() {
        assert_eq!(
            classify_average("Agreeableness", 100.0).unwrap().level,
            ScoreLevel::High
        );
        assert_eq!(
            classify_average("Agreeableness", -3.0).unwrap().level,
            ScoreLevel::Low
        );
    }
}
