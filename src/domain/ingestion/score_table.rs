//! ScoreTable - one parsed CSV file of facet scores for a single domain.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IngestError, OrderedMap};
use crate::domain::ingestion::FacetScores;

/// One parsed CSV table: a personality category with per-person facet rows.
///
/// Within a table every person carries the same facet set, because each data
/// row assigns a score to every person column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    /// The file name the table was parsed from.
    pub source: String,
    /// The domain/category name, derived from the source name.
    pub category: String,
    /// Facet scores per person, in header column order.
    pub rows: OrderedMap<FacetScores>,
}

impl ScoreTable {
    /// Parses a CSV text into a score table.
    ///
    /// # Format
    /// ```text
    /// category,<Person1>,...,<PersonN>
    /// <facet>,<score>,...,<score>
    /// ```
    ///
    /// The header's first cell must be `category` (case-insensitive). The
    /// table's category name is `source_name` with a trailing `.csv`
    /// (case-insensitive) stripped. Fields are split on commas and trimmed;
    /// every row must match the header's column count, and every score cell
    /// must parse as a number. No range validation is performed on scores.
    pub fn parse(text: &str, source_name: &str) -> Result<ScoreTable, IngestError> {
        let lines: Vec<&str> = text.trim().split('\n').collect();
        if lines.len() < 2 {
            return Err(IngestError::MissingRows {
                file: source_name.to_string(),
            });
        }

        let headers: Vec<&str> = lines[0].split(',').map(str::trim).collect();
        if !headers[0].eq_ignore_ascii_case("category") {
            return Err(IngestError::BadHeader {
                file: source_name.to_string(),
                found: headers[0].to_string(),
            });
        }

        let category = strip_csv_suffix(source_name).to_string();
        let persons: Vec<&str> = headers[1..].to_vec();

        let mut rows: OrderedMap<FacetScores> = OrderedMap::new();
        for person in &persons {
            rows.insert(*person, FacetScores::new());
        }

        for (index, line) in lines.iter().enumerate().skip(1) {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            if values.len() != headers.len() {
                return Err(IngestError::ColumnMismatch {
                    file: source_name.to_string(),
                    row: index + 1,
                    expected: headers.len(),
                    actual: values.len(),
                });
            }

            let facet = values[0];
            for (column, value) in values.iter().enumerate().skip(1) {
                let person = persons[column - 1];
                let score: f64 =
                    value
                        .parse()
                        .map_err(|_| IngestError::InvalidScore {
                            file: source_name.to_string(),
                            value: value.to_string(),
                            person: person.to_string(),
                            facet: facet.to_string(),
                        })?;

                // rows was seeded with every header person
                if let Some(scores) = rows.get_mut(person) {
                    scores.insert(facet, score);
                }
            }
        }

        Ok(ScoreTable {
            source: source_name.to_string(),
            category,
            rows,
        })
    }

    /// Returns the person names in header column order.
    pub fn persons(&self) -> impl Iterator<Item = &String> {
        self.rows.keys()
    }

    /// Returns one person's facet scores, if they appear in this table.
    pub fn row(&self, person: &str) -> Option<&FacetScores> {
        self.rows.get(person)
    }
}

/// Strips a single trailing `.csv` extension, case-insensitively.
fn strip_csv_suffix(name: &str) -> &str {
    if name.len() >= 4 && name[name.len() - 4..].eq_ignore_ascii_case(".csv") {
        &name[..name.len() - 4]
    } else {
        name
    }
}
