//! Error types for the domain layer.

use thiserror::Error;

/// CSV structural violations detected during ingestion.
///
/// Every variant carries enough context (file, row, offending value) for a
/// user to fix the input and re-upload. An error on any one file aborts the
/// whole ingestion batch; there is no partial ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("{file}: CSV must have at least a header and one data row")]
    MissingRows { file: String },

    #[error("{file}: first column must be \"category\", got \"{found}\"")]
    BadHeader { file: String, found: String },

    #[error("{file}: row {row} has {actual} columns, expected {expected}")]
    ColumnMismatch {
        file: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{file}: invalid score \"{value}\" for {person} in {facet}")]
    InvalidScore {
        file: String,
        value: String,
        person: String,
        facet: String,
    },
}

/// Errors that occur while classifying a profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The domain name is outside the fixed Big Five set, so the static
    /// narrative table has no entry to fall back to.
    #[error("unknown personality domain \"{0}\"")]
    UnknownDomain(String),

    /// A domain with zero facet scores has no defined average.
    #[error("domain \"{domain}\" has no facet scores to average")]
    EmptyDomain { domain: String },
}

/// Union of all failures the batch pipeline can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rows_displays_correctly() {
        let err = IngestError::MissingRows {
            file: "Extraversion.csv".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Extraversion.csv: CSV must have at least a header and one data row"
        );
    }

    #[test]
    fn bad_header_displays_correctly() {
        let err = IngestError::BadHeader {
            file: "scores.csv".to_string(),
            found: "name".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "scores.csv: first column must be \"category\", got \"name\""
        );
    }

    #[test]
    fn column_mismatch_displays_correctly() {
        let err = IngestError::ColumnMismatch {
            file: "scores.csv".to_string(),
            row: 2,
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            format!("{}", err),
            "scores.csv: row 2 has 3 columns, expected 2"
        );
    }

    #[test]
    fn invalid_score_displays_correctly() {
        let err = IngestError::InvalidScore {
            file: "scores.csv".to_string(),
            value: "abc".to_string(),
            person: "Alice".to_string(),
            facet: "Talkative".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "scores.csv: invalid score \"abc\" for Alice in Talkative"
        );
    }

    #[test]
    fn unknown_domain_displays_correctly() {
        let err = AnalysisError::UnknownDomain("Charisma".to_string());
        assert_eq!(
            format!("{}", err),
            "unknown personality domain \"Charisma\""
        );
    }

    #[test]
    fn engine_error_wraps_ingest_transparently() {
        let inner = IngestError::MissingRows {
            file: "a.csv".to_string(),
        };
        let err = EngineError::from(inner.clone());
        assert_eq!(format!("{}", err), format!("{}", inner));
    }
}
