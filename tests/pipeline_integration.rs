//! End-to-end batch scenarios through the public pipeline entry point.

use proptest::prelude::*;

use ocean_insights::domain::analysis::{classify_average, RelationshipDynamics};
use ocean_insights::domain::foundation::{EngineError, IngestError, ScoreLevel};
use ocean_insights::domain::ingestion::PersonalityProfile;
use ocean_insights::domain::pipeline::{run_batch, CsvFile};

#[test]
fn two_person_extraversion_batch_end_to_end() {
    let files = [CsvFile::new(
        "Extraversion.csv",
        "category,Alice,Bob\nTalkative,18,4",
    )];

    let report = run_batch(&files).unwrap();

    assert_eq!(report.profiles.len(), 2);
    let alice = &report.individuals[0];
    let bob = &report.individuals[1];
    assert_eq!(alice.name, "Alice");
    assert_eq!(
        alice.domains.get("Extraversion").unwrap().level,
        ScoreLevel::High
    );
    assert_eq!(
        bob.domains.get("Extraversion").unwrap().level,
        ScoreLevel::Low
    );

    assert_eq!(report.relationships.len(), 1);
    let pair = &report.relationships[0];
    // 50 - 3 for a 14-point gap.
    assert_eq!(pair.compatibility_score.score, 47);
    assert_eq!(pair.compatibility_score.level, ScoreLevel::Low);
    assert!(pair
        .challenges
        .contains(&"Different social energy needs".to_string()));
}

#[test]
fn identical_input_serializes_identically() {
    let files = [
        CsvFile::new(
            "Extraversion.csv",
            "category,Alice,Bob,Cleo\nTalkative,18,4,11\nAssertive,12,6,13",
        ),
        CsvFile::new(
            "Neuroticism.csv",
            "category,Alice,Bob,Cleo\nAnxious,3,16,9\nMoody,5,15,10",
        ),
    ];

    let first = serde_json::to_string(&run_batch(&files).unwrap()).unwrap();
    let second = serde_json::to_string(&run_batch(&files).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_row_aborts_the_whole_batch() {
    let files = [
        CsvFile::new("Extraversion.csv", "category,Alice\nTalkative,12"),
        CsvFile::new("Open.csv", "category,Alice\nOpen,1,2"),
    ];

    let err = run_batch(&files).unwrap_err();
    assert_eq!(
        err,
        EngineError::Ingest(IngestError::ColumnMismatch {
            file: "Open.csv".into(),
            row: 2,
            expected: 2,
            actual: 3,
        })
    );
}

#[test]
fn non_numeric_score_names_the_cell() {
    let files = [CsvFile::new(
        "Extraversion.csv",
        "category,Alice\nTalkative,abc",
    )];

    let err = run_batch(&files).unwrap_err();
    assert_eq!(
        err,
        EngineError::Ingest(IngestError::InvalidScore {
            file: "Extraversion.csv".into(),
            value: "abc".into(),
            person: "Alice".into(),
            facet: "Talkative".into(),
        })
    );
}

fn profile_with_domains(name: &str, scores: &[(&str, f64)]) -> PersonalityProfile {
    let mut profile = PersonalityProfile::new(name);
    for (domain, value) in scores {
        let mut facets = ocean_insights::domain::foundation::OrderedMap::new();
        facets.insert("facet", *value);
        profile.scores.insert(*domain, facets);
    }
    profile
}

proptest! {
    #[test]
    fn compatibility_score_stays_in_bounds(
        a in proptest::collection::vec(0.0f64..20.0, 5),
        b in proptest::collection::vec(0.0f64..20.0, 5),
    ) {
        let domains = [
            "Extraversion",
            "Agreeableness",
            "Conscientiousness",
            "Neuroticism",
            "Openness To Experience",
        ];
        let p1 = profile_with_domains(
            "A",
            &domains.iter().copied().zip(a.iter().copied()).collect::<Vec<_>>(),
        );
        let p2 = profile_with_domains(
            "B",
            &domains.iter().copied().zip(b.iter().copied()).collect::<Vec<_>>(),
        );

        let dynamics = RelationshipDynamics::analyze(&p1, &p2).unwrap();
        prop_assert!(dynamics.compatibility_score.score <= 100);

        let expected = match dynamics.compatibility_score.score {
            s if s >= 75 => ScoreLevel::High,
            s if s >= 50 => ScoreLevel::Moderate,
            _ => ScoreLevel::Low,
        };
        prop_assert_eq!(dynamics.compatibility_score.level, expected);
    }

    #[test]
    fn classifier_level_follows_thresholds(avg in 0.0f64..20.0) {
        let analysis = classify_average("Extraversion", avg).unwrap();
        let expected = if avg <= 8.0 {
            ScoreLevel::Low
        } else if avg >= 14.0 {
            ScoreLevel::High
        } else {
            ScoreLevel::Moderate
        };
        prop_assert_eq!(analysis.level, expected);
    }
}
