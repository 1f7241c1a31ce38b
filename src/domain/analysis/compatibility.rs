//! Compatibility engine - pairwise relationship analysis.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::classifier::facet_average;
use crate::domain::foundation::{AnalysisError, OrderedMap, ScoreLevel, TraitDomain};
use crate::domain::ingestion::PersonalityProfile;

/// Base score before per-domain adjustments.
const BASE_SCORE: i32 = 50;
/// Domain averages closer than this add to the score.
const SIMILARITY_BONUS_CUTOFF: f64 = 3.0;
/// Domain averages further apart than this subtract from the score.
const DIFFERENCE_PENALTY_CUTOFF: f64 = 8.0;

/// Compatibility scores at or above this are high.
const HIGH_COMPATIBILITY: u8 = 75;
/// Compatibility scores at or above this (but below high) are moderate.
const MODERATE_COMPATIBILITY: u8 = 50;

const MAX_STRENGTHS: usize = 4;
const MAX_CHALLENGES: usize = 3;
const MAX_WORKING_TOGETHER: usize = 4;
const MAX_COMMUNICATION_TIPS: usize = 3;
const MAX_CONFLICT_AREAS: usize = 3;

/// A 0-100 compatibility score with its qualitative level.
///
/// The 50/75 thresholds here are a different scheme from the domain
/// classifier's 8/14 raw-average thresholds; they are not interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub score: u8,
    pub level: ScoreLevel,
    pub description: String,
}

/// The relationship analysis for one unordered pair of people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDynamics {
    pub person1: String,
    pub person2: String,
    pub compatibility_score: CompatibilityScore,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub working_together: Vec<String>,
    pub communication_tips: Vec<String>,
    pub conflict_areas: Vec<String>,
}

impl RelationshipDynamics {
    /// Computes the compatibility analysis for two profiles.
    ///
    /// The score loop iterates person1's domains only, and a domain absent
    /// from person2 compares against NaN: neither score branch fires, and
    /// the narrative rules see person2 at the moderate level. This mirrors
    /// the original tool's behavior and is pinned by tests; swapping the
    /// arguments can change the result when the two domain sets differ.
    pub fn analyze(
        person1: &PersonalityProfile,
        person2: &PersonalityProfile,
    ) -> Result<RelationshipDynamics, AnalysisError> {
        let averages1 = domain_averages(person1)?;
        let averages2 = domain_averages(person2)?;

        let mut score = BASE_SCORE;
        let mut lists = NarrativeLists::default();

        for (domain, avg1) in averages1.iter() {
            let avg2 = averages2.get(domain).copied().unwrap_or(f64::NAN);
            let diff = (avg1 - avg2).abs();

            if diff < SIMILARITY_BONUS_CUTOFF {
                score += 5;
            } else if diff > DIFFERENCE_PENALTY_CUTOFF {
                score -= 3;
            }

            apply_domain_rules(domain, *avg1, avg2, &mut lists);
        }

        let score = score.clamp(0, 100) as u8;
        let level = if score >= HIGH_COMPATIBILITY {
            ScoreLevel::High
        } else if score >= MODERATE_COMPATIBILITY {
            ScoreLevel::Moderate
        } else {
            ScoreLevel::Low
        };

        lists.strengths.truncate(MAX_STRENGTHS);
        lists.challenges.truncate(MAX_CHALLENGES);
        lists.working_together.truncate(MAX_WORKING_TOGETHER);
        lists.communication_tips.truncate(MAX_COMMUNICATION_TIPS);
        lists.conflict_areas.truncate(MAX_CONFLICT_AREAS);

        Ok(RelationshipDynamics {
            person1: person1.name.clone(),
            person2: person2.name.clone(),
            compatibility_score: CompatibilityScore {
                score,
                level,
                description: describe(level, score),
            },
            strengths: lists.strengths,
            challenges: lists.challenges,
            working_together: lists.working_together,
            communication_tips: lists.communication_tips,
            conflict_areas: lists.conflict_areas,
        })
    }
}

/// Per-domain facet averages in the profile's domain order.
fn domain_averages(profile: &PersonalityProfile) -> Result<OrderedMap<f64>, AnalysisError> {
    let mut averages = OrderedMap::new();
    for (domain, facets) in profile.scores.iter() {
        averages.insert(domain.clone(), facet_average(domain, facets)?);
    }
    Ok(averages)
}

#[derive(Debug, Default)]
struct NarrativeLists {
    strengths: Vec<String>,
    challenges: Vec<String>,
    working_together: Vec<String>,
    communication_tips: Vec<String>,
    conflict_areas: Vec<String>,
}

impl NarrativeLists {
    fn strength(&mut self, text: &str) {
        self.strengths.push(text.to_string());
    }
    fn challenge(&mut self, text: &str) {
        self.challenges.push(text.to_string());
    }
    fn working(&mut self, text: &str) {
        self.working_together.push(text.to_string());
    }
    fn tip(&mut self, text: &str) {
        self.communication_tips.push(text.to_string());
    }
    fn conflict(&mut self, text: &str) {
        self.conflict_areas.push(text.to_string());
    }
}

/// Appends the narrative strings for one domain's level combination.
///
/// Domain names outside the fixed five contribute nothing here (they still
/// take part in the similarity score adjustment above).
fn apply_domain_rules(domain: &str, avg1: f64, avg2: f64, lists: &mut NarrativeLists) {
    use ScoreLevel::{High, Low};

    let Some(domain) = TraitDomain::parse(domain) else {
        return;
    };
    let level1 = ScoreLevel::from_average(avg1);
    let level2 = ScoreLevel::from_average(avg2);
    let opposed = (level1 == High && level2 == Low) || (level1 == Low && level2 == High);

    match domain {
        TraitDomain::Extraversion => {
            if level1 == level2 {
                if level1 == High {
                    lists.strength("Both energetic and socially motivated");
                    lists.working("Excel in collaborative, high-energy environments");
                } else if level1 == Low {
                    lists.strength("Both value depth and thoughtful communication");
                    lists.working("Work well in quiet, focused environments");
                }
            } else {
                lists.challenge("Different social energy needs");
                lists.tip("Respect each other's social preferences");
                if opposed {
                    lists.working("Complement each other in social and analytical tasks");
                }
            }
        }

        TraitDomain::Agreeableness => {
            if level1 == High && level2 == High {
                lists.strength("Both value harmony and cooperation");
                lists.working("Create supportive, collaborative environments");
                lists.challenge("May avoid necessary confrontation");
            } else if level1 == Low && level2 == Low {
                lists.strength("Both comfortable with direct communication");
                lists.working("Excel in competitive or challenging environments");
                lists.conflict("May escalate disagreements quickly");
            } else {
                lists.working("Balance between harmony and necessary challenge");
                lists.tip("Find middle ground between directness and diplomacy");
            }
        }

        TraitDomain::Conscientiousness => {
            if level1 == level2 {
                if level1 == High {
                    lists.strength("Both organized and goal-oriented");
                    lists.working("Excel in structured, deadline-driven projects");
                } else if level1 == Low {
                    lists.strength("Both flexible and adaptable");
                    lists.working("Thrive in creative, flexible environments");
                    lists.challenge("May struggle with organization and deadlines");
                }
            } else {
                lists.working("Balance structure with flexibility");
                if opposed {
                    lists.tip("Respect different approaches to organization");
                    lists.conflict("Different standards for structure and planning");
                }
            }
        }

        TraitDomain::Neuroticism => {
            if level1 == Low && level2 == High {
                lists.strength("Emotional stability complements sensitivity");
                lists.working("One provides calm support, other brings emotional awareness");
                lists.tip("Be patient with different stress responses");
            } else if level1 == High && level2 == Low {
                lists.strength("Sensitivity complements emotional stability");
                lists.working("Emotional awareness balanced with calm perspective");
            } else if level1 == High && level2 == High {
                lists.challenge("Both may be sensitive to stress");
                lists.tip("Practice stress management together");
            }
        }

        TraitDomain::OpennessToExperience => {
            if level1 == level2 {
                if level1 == High {
                    lists.strength("Both creative and open to new ideas");
                    lists.working("Excel in innovative, creative projects");
                } else if level1 == Low {
                    lists.strength("Both value practical, proven approaches");
                    lists.working("Focus on reliable, established methods");
                }
            } else {
                lists.working("Balance innovation with practical implementation");
                lists.tip("Appreciate different approaches to change and creativity");
            }
        }
    }
}

fn describe(level: ScoreLevel, score: u8) -> String {
    match level {
        ScoreLevel::High => format!(
            "Excellent compatibility ({score}%). Your personalities complement each other very well, with natural understanding and shared approaches to many situations."
        ),
        ScoreLevel::Moderate => format!(
            "Good compatibility ({score}%). You have a solid foundation for working together, with some differences that can be managed through understanding and communication."
        ),
        ScoreLevel::Low => format!(
            "Challenging compatibility ({score}%). Significant personality differences require extra effort, understanding, and communication to work together effectively."
        ),
    }
}
