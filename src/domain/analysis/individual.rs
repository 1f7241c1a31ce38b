//! IndividualAnalysis - the full per-person report derived from a profile.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::classifier::{classify, DomainAnalysis};
use crate::domain::foundation::{AnalysisError, OrderedMap, ScoreLevel, TraitDomain};
use crate::domain::ingestion::PersonalityProfile;

const MAX_KEY_STRENGTHS: usize = 6;
const MAX_AREAS_TO_WATCH: usize = 4;
const MAX_IDEAL_CAREERS: usize = 8;

/// The complete analysis for one person.
///
/// Constructed fresh from one profile, immutable afterwards. Never persisted
/// by this crate; callers decide what to do with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualAnalysis {
    pub name: String,
    pub domains: OrderedMap<DomainAnalysis>,
    pub overall_profile: String,
    pub key_strengths: Vec<String>,
    pub areas_to_watch: Vec<String>,
    pub ideal_careers: Vec<String>,
    pub working_style: String,
    pub communication_style: String,
    pub stress_management: Vec<String>,
}

impl IndividualAnalysis {
    /// Classifies every domain present in the profile and derives the
    /// aggregate narrative fields.
    ///
    /// Fails if the profile carries a domain outside the fixed five, or a
    /// domain with no facet scores.
    pub fn from_profile(profile: &PersonalityProfile) -> Result<IndividualAnalysis, AnalysisError> {
        let mut domains: OrderedMap<DomainAnalysis> = OrderedMap::new();
        let mut all_strengths: Vec<String> = Vec::new();
        let mut all_challenges: Vec<String> = Vec::new();
        let mut all_careers: Vec<String> = Vec::new();

        for (domain, facets) in profile.scores.iter() {
            let analysis = classify(domain, facets)?;
            all_strengths.extend(analysis.strengths.iter().cloned());
            all_challenges.extend(analysis.challenges.iter().cloned());
            all_careers.extend(analysis.career_suggestions.iter().cloned());
            domains.insert(domain.clone(), analysis);
        }

        Ok(IndividualAnalysis {
            name: profile.name.clone(),
            overall_profile: overall_profile(&domains),
            key_strengths: dedup_truncate(all_strengths, MAX_KEY_STRENGTHS),
            areas_to_watch: dedup_truncate(all_challenges, MAX_AREAS_TO_WATCH),
            ideal_careers: dedup_truncate(all_careers, MAX_IDEAL_CAREERS),
            working_style: working_style(&domains),
            communication_style: communication_style(&domains),
            stress_management: stress_management(&domains),
            domains,
        })
    }
}

fn level_of(domains: &OrderedMap<DomainAnalysis>, domain: TraitDomain) -> Option<ScoreLevel> {
    domains.get(domain.name()).map(|a| a.level)
}

/// First-seen dedup, then truncation to `max`.
fn dedup_truncate(items: Vec<String>, max: usize) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique.truncate(max);
    unique
}

/// One sentence of high/low adjective pairs in the fixed domain order
/// Extraversion, Agreeableness, Conscientiousness, Neuroticism, Openness.
/// Moderate domains contribute nothing.
fn overall_profile(domains: &OrderedMap<DomainAnalysis>) -> String {
    let mut traits: Vec<&str> = Vec::new();

    match level_of(domains, TraitDomain::Extraversion) {
        Some(ScoreLevel::High) => traits.push("outgoing and energetic"),
        Some(ScoreLevel::Low) => traits.push("reserved and thoughtful"),
        _ => {}
    }
    match level_of(domains, TraitDomain::Agreeableness) {
        Some(ScoreLevel::High) => traits.push("cooperative and trusting"),
        Some(ScoreLevel::Low) => traits.push("competitive and skeptical"),
        _ => {}
    }
    match level_of(domains, TraitDomain::Conscientiousness) {
        Some(ScoreLevel::High) => traits.push("organized and disciplined"),
        Some(ScoreLevel::Low) => traits.push("flexible and spontaneous"),
        _ => {}
    }
    match level_of(domains, TraitDomain::Neuroticism) {
        Some(ScoreLevel::High) => traits.push("emotionally sensitive"),
        Some(ScoreLevel::Low) => traits.push("emotionally stable"),
        _ => {}
    }
    match level_of(domains, TraitDomain::OpennessToExperience) {
        Some(ScoreLevel::High) => traits.push("creative and curious"),
        Some(ScoreLevel::Low) => traits.push("practical and conventional"),
        _ => {}
    }

    format!(
        "A {} individual who brings unique strengths to any team or role.",
        traits.join(", ")
    )
}

fn working_style(domains: &OrderedMap<DomainAnalysis>) -> String {
    let mut style = String::new();

    if level_of(domains, TraitDomain::Conscientiousness) == Some(ScoreLevel::High) {
        style.push_str("Structured and organized. ");
    }
    match level_of(domains, TraitDomain::Extraversion) {
        Some(ScoreLevel::High) => style.push_str("Collaborative and energetic. "),
        Some(ScoreLevel::Low) => style.push_str("Independent and focused. "),
        _ => {}
    }
    if level_of(domains, TraitDomain::OpennessToExperience) == Some(ScoreLevel::High) {
        style.push_str("Creative and innovative. ");
    }

    style.trim().to_string()
}

fn communication_style(domains: &OrderedMap<DomainAnalysis>) -> String {
    let mut style = match level_of(domains, TraitDomain::Extraversion) {
        Some(ScoreLevel::High) => {
            "Direct, enthusiastic, and engaging. Prefers face-to-face interaction.".to_string()
        }
        Some(ScoreLevel::Low) => {
            "Thoughtful, careful, and prefers written communication or small groups.".to_string()
        }
        _ => "Adaptable communication style, comfortable in various settings.".to_string(),
    };

    match level_of(domains, TraitDomain::Agreeableness) {
        Some(ScoreLevel::High) => style.push_str(" Diplomatic and harmony-focused."),
        Some(ScoreLevel::Low) => style.push_str(" Direct and challenging when necessary."),
        _ => {}
    }

    style
}

fn stress_management(domains: &OrderedMap<DomainAnalysis>) -> Vec<String> {
    let mut tips: Vec<&str> = Vec::new();

    if level_of(domains, TraitDomain::Neuroticism) == Some(ScoreLevel::High) {
        tips.push("Practice mindfulness and relaxation techniques");
        tips.push("Develop emotional regulation strategies");
        tips.push("Create predictable routines when possible");
    }

    if level_of(domains, TraitDomain::Conscientiousness) == Some(ScoreLevel::Low) {
        tips.push("Use external organization tools and reminders");
        tips.push("Break large tasks into smaller, manageable steps");
    }

    match level_of(domains, TraitDomain::Extraversion) {
        Some(ScoreLevel::High) => {
            tips.push("Ensure regular social interaction for energy");
            tips.push("Process stress through discussion with others");
        }
        Some(ScoreLevel::Low) => {
            tips.push("Schedule regular quiet time for reflection");
            tips.push("Avoid over-scheduling social activities");
        }
        _ => {}
    }

    if tips.is_empty() {
        tips.push("Maintain work-life balance");
        tips.push("Regular exercise and healthy habits");
    }

    tips.into_iter().map(String::from).collect()
}
