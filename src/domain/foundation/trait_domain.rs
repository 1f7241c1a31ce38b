//! TraitDomain enum representing the five Big Five (OCEAN) domains.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five Big Five personality domains.
///
/// This is a closed set: the static narrative tables cover exactly these
/// names, and classification of any other domain name fails loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitDomain {
    Agreeableness,
    Conscientiousness,
    Extraversion,
    Neuroticism,
    OpennessToExperience,
}

impl TraitDomain {
    /// Returns all domains in canonical order.
    pub fn all() -> &'static [TraitDomain] {
        &[
            TraitDomain::Agreeableness,
            TraitDomain::Conscientiousness,
            TraitDomain::Extraversion,
            TraitDomain::Neuroticism,
            TraitDomain::OpennessToExperience,
        ]
    }

    /// Parses the exact domain name as it appears in CSV table categories.
    ///
    /// Matching is exact (including case); anything else is not a Big Five
    /// domain and has no narrative entry.
    pub fn parse(name: &str) -> Option<TraitDomain> {
        match name {
            "Agreeableness" => Some(TraitDomain::Agreeableness),
            "Conscientiousness" => Some(TraitDomain::Conscientiousness),
            "Extraversion" => Some(TraitDomain::Extraversion),
            "Neuroticism" => Some(TraitDomain::Neuroticism),
            "Openness To Experience" => Some(TraitDomain::OpennessToExperience),
            _ => None,
        }
    }

    /// Returns the display name, matching the CSV table category spelling.
    pub fn name(&self) -> &'static str {
        match self {
            TraitDomain::Agreeableness => "Agreeableness",
            TraitDomain::Conscientiousness => "Conscientiousness",
            TraitDomain::Extraversion => "Extraversion",
            TraitDomain::Neuroticism => "Neuroticism",
            TraitDomain::OpennessToExperience => "Openness To Experience",
        }
    }
}

impl fmt::Display for TraitDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_5_domains() {
        assert_eq!(TraitDomain::all().len(), 5);
    }

    #[test]
    fn parse_accepts_canonical_names() {
        assert_eq!(
            TraitDomain::parse("Agreeableness"),
            Some(TraitDomain::Agreeableness)
        );
        assert_eq!(
            TraitDomain::parse("Openness To Experience"),
            Some(TraitDomain::OpennessToExperience)
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(TraitDomain::parse("agreeableness"), None);
        assert_eq!(TraitDomain::parse("EXTRAVERSION"), None);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(TraitDomain::parse("Charisma"), None);
        assert_eq!(TraitDomain::parse(""), None);
        assert_eq!(TraitDomain::parse("Openness"), None);
    }

    #[test]
    fn name_round_trips_through_parse() {
        for domain in TraitDomain::all() {
            assert_eq!(TraitDomain::parse(domain.name()), Some(*domain));
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(
            format!("{}", TraitDomain::OpennessToExperience),
            "Openness To Experience"
        );
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&TraitDomain::OpennessToExperience).unwrap();
        assert_eq!(json, "\"openness_to_experience\"");
    }
}
