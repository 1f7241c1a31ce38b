//! Research-backed insights and development planning for the Big Five.
//!
//! Static documentation tables (findings, citations, applications,
//! strategies) plus a per-person development plan assembled from them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::analysis::classifier::DomainAnalysis;
use crate::domain::foundation::{OrderedMap, ScoreLevel, TraitDomain};

/// Research documentation for one domain.
#[derive(Debug, Clone, Copy)]
pub struct ResearchInsight {
    pub research_findings: &'static [&'static str],
    pub citations: &'static [&'static str],
    pub practical_applications: &'static [&'static str],
    pub development_strategies: &'static [&'static str],
}

/// Looks up the research insight for a domain. Total over the closed set.
pub fn research_insight(domain: TraitDomain) -> &'static ResearchInsight {
    RESEARCH
        .get(&domain)
        .expect("research table covers all domains")
}

/// Looks up research by the domain's display name, as table categories use.
pub fn research_insight_for(name: &str) -> Option<&'static ResearchInsight> {
    TraitDomain::parse(name).map(research_insight)
}

/// Cross-domain research summary shown alongside individual insights.
#[derive(Debug, Clone, Copy)]
pub struct GeneralResearch {
    pub overview: &'static [&'static str],
    pub key_findings: &'static [&'static str],
    pub applications: &'static [&'static str],
    pub limitations: &'static [&'static str],
}

pub static GENERAL_RESEARCH: GeneralResearch = GeneralResearch {
    overview: &[
        "The Big Five model is the most widely accepted and researched personality framework in psychology",
        "Meta-analyses consistently show the Big Five dimensions predict important life outcomes including job performance, relationship satisfaction, and health behaviors",
        "The model demonstrates cross-cultural validity and has been replicated across different languages and cultures",
        "Personality traits show moderate heritability (approximately 40-60%) and remain relatively stable across the lifespan while allowing for some change",
        "The Big Five dimensions are independent factors, meaning individuals can score high or low on any combination of traits",
    ],
    key_findings: &[
        "Conscientiousness is the strongest predictor of job performance across all occupations and career levels",
        "The combination of high emotional stability (low neuroticism) and high extraversion predicts leadership effectiveness",
        "Agreeableness and conscientiousness together predict better team performance and relationship satisfaction",
        "Openness to experience is crucial for performance in jobs requiring creativity, learning, and adaptation to change",
        "Personality-job fit (matching personality traits to job requirements) significantly improves job satisfaction and performance",
    ],
    applications: &[
        "Personnel selection and recruitment - matching candidates to role requirements",
        "Career counseling and development - identifying suitable career paths and development areas",
        "Team composition - creating balanced teams with complementary personality strengths",
        "Leadership development - identifying leadership potential and development needs",
        "Relationship counseling - understanding compatibility and communication patterns",
        "Personal development - self-awareness and targeted skill building",
    ],
    limitations: &[
        "Personality is just one factor among many that influence behavior and performance",
        "Cultural context and situational factors can modify how personality traits are expressed",
        "Individual differences within trait levels can be significant - not all high extraverts are identical",
        "Personality can change over time, especially in response to major life events or deliberate development efforts",
        "The Big Five may not capture all important aspects of personality and individual differences",
    ],
};

static RESEARCH: Lazy<HashMap<TraitDomain, ResearchInsight>> = Lazy::new(|| {
    let mut table = HashMap::new();

    table.insert(
        TraitDomain::Extraversion,
        ResearchInsight {
            research_findings: &[
                "Extraverts show greater activation in the anterior cingulate cortex and temporal lobes when processing social information (Canli et al., 2001)",
                "High extraversion is associated with higher levels of positive affect and life satisfaction (Lucas & Fujita, 2000)",
                "Extraverts perform better in jobs requiring social interaction and leadership roles (Barrick & Mount, 1991)",
                "Extraversion correlates with larger social networks and more frequent social interactions (Asendorpf & Wilpers, 1998)",
                "Extraverts show better recovery from negative emotional events (Larsen & Ketelaar, 1991)",
            ],
            citations: &[
                "Canli, T., et al. (2001). An fMRI study of personality influences on brain reactivity to emotional stimuli. Behavioral Neuroscience, 115(1), 33-42.",
                "Lucas, R. E., & Fujita, F. (2000). Factors influencing the relation between extraversion and pleasant affect. Journal of Personality and Social Psychology, 79(6), 1039-1056.",
                "Barrick, M. R., & Mount, M. K. (1991). The big five personality dimensions and job performance: A meta-analysis. Personnel Psychology, 44(1), 1-26.",
                "Asendorpf, J. B., & Wilpers, S. (1998). Personality effects on social relationships. Journal of Personality and Social Psychology, 74(6), 1531-1544.",
            ],
            practical_applications: &[
                "Team leadership roles and public speaking opportunities",
                "Customer-facing positions and sales roles",
                "Networking and relationship building activities",
                "Group brainstorming and collaborative projects",
                "Training and mentoring positions",
            ],
            development_strategies: &[
                "For introverts: Practice small group interactions before large gatherings",
                "For introverts: Develop written communication skills as an alternative to verbal presentation",
                "For extraverts: Learn to listen actively and allow others to contribute",
                "For extraverts: Practice independent work and reflection time",
                "Both: Understand and respect different energy sources and communication styles",
            ],
        },
    );

    table.insert(
        TraitDomain::Agreeableness,
        ResearchInsight {
            research_findings: &[
                "High agreeableness is associated with better relationship satisfaction and longevity (Donnellan et al., 2004)",
                "Agreeable individuals show greater empathy and prosocial behavior (Graziano & Eisenberg, 1997)",
                "Lower agreeableness may be advantageous in competitive environments and negotiation (Barry & Friedman, 1998)",
                "Agreeableness correlates with better team performance and cooperation (Mount et al., 1998)",
                "High agreeableness individuals are more likely to forgive and maintain social harmony (McCullough & Hoyt, 2002)",
            ],
            citations: &[
                "Donnellan, M. B., et al. (2004). The mini-IPIP scales: Tiny-yet-effective measures of the Big Five factors of personality. Psychological Assessment, 16(2), 192-203.",
                "Graziano, W. G., & Eisenberg, N. (1997). Agreeableness: A dimension of personality. In Handbook of personality psychology (pp. 795-824).",
                "Barry, B., & Friedman, R. A. (1998). Bargainer characteristics in distributive and integrative negotiation. Journal of Personality and Social Psychology, 74(2), 345-359.",
                "Mount, M. K., et al. (1998). Five-factor model of personality and performance in jobs involving interpersonal interactions. Human Performance, 11(2-3), 145-165.",
            ],
            practical_applications: &[
                "Conflict resolution and mediation roles",
                "Customer service and support positions",
                "Healthcare and counseling professions",
                "Team collaboration and group projects",
                "Community outreach and social work",
            ],
            development_strategies: &[
                "For low agreeableness: Practice perspective-taking and empathy exercises",
                "For low agreeableness: Learn collaborative negotiation techniques",
                "For high agreeableness: Develop assertiveness and boundary-setting skills",
                "For high agreeableness: Practice constructive confrontation when necessary",
                "Both: Balance cooperation with healthy self-advocacy",
            ],
        },
    );

    table.insert(
        TraitDomain::Conscientiousness,
        ResearchInsight {
            research_findings: &[
                "Conscientiousness is the strongest predictor of job performance across all occupations (Barrick & Mount, 1991)",
                "High conscientiousness is associated with better health outcomes and longevity (Bogg & Roberts, 2004)",
                "Conscientious individuals show better academic performance and goal achievement (Noftle & Robins, 2007)",
                "Conscientiousness correlates with better financial management and decision-making (Donnelly et al., 2012)",
                "High conscientiousness individuals are more likely to engage in health-promoting behaviors (Bogg & Roberts, 2004)",
            ],
            citations: &[
                "Barrick, M. R., & Mount, M. K. (1991). The big five personality dimensions and job performance: A meta-analysis. Personnel Psychology, 44(1), 1-26.",
                "Bogg, T., & Roberts, B. W. (2004). Conscientiousness and health-related behaviors: A meta-analysis of the leading behavioral contributors to mortality. Psychological Bulletin, 130(6), 887-919.",
                "Noftle, E. E., & Robins, R. W. (2007). Personality predictors of academic outcomes: Big five correlates of GPA and SAT scores. Journal of Personality and Social Psychology, 93(1), 116-130.",
                "Donnelly, G., et al. (2012). The big five and spending behavior. Psychological Science, 23(12), 1519-1528.",
            ],
            practical_applications: &[
                "Project management and planning roles",
                "Quality assurance and detail-oriented positions",
                "Financial management and accounting roles",
                "Research and analytical positions",
                "Administrative and organizational roles",
            ],
            development_strategies: &[
                "For low conscientiousness: Use external organization systems and reminders",
                "For low conscientiousness: Break large goals into smaller, manageable tasks",
                "For high conscientiousness: Practice flexibility and adaptability",
                "For high conscientiousness: Learn to delegate and trust others",
                "Both: Balance structure with spontaneity and creativity",
            ],
        },
    );

    table.insert(
        TraitDomain::Neuroticism,
        ResearchInsight {
            research_findings: &[
                "High neuroticism is associated with increased risk of anxiety and depression (Lahey, 2009)",
                "Neurotic individuals show greater stress reactivity and slower recovery (Bolger & Zuckerman, 1995)",
                "Low neuroticism (emotional stability) correlates with better leadership performance and stress management (Judge et al., 2002)",
                "Neuroticism affects interpersonal relationships and social support seeking (Suls et al., 1998)",
                "High neuroticism individuals may be more sensitive to environmental threats and changes (Ormel et al., 2013)",
            ],
            citations: &[
                "Lahey, B. B. (2009). Public health significance of neuroticism. American Psychologist, 64(4), 241-256.",
                "Bolger, N., & Zuckerman, A. (1995). A framework for studying personality in the stress process. Journal of Personality and Social Psychology, 69(5), 890-902.",
                "Judge, T. A., et al. (2002). Five-factor model of personality and transformational leadership. Journal of Applied Psychology, 87(4), 751-765.",
                "Ormel, J., et al. (2013). Neuroticism and common mental disorders: Meaning and utility of a complex relationship. Clinical Psychology Review, 33(5), 686-697.",
            ],
            practical_applications: &[
                "Creative and artistic pursuits (high neuroticism)",
                "Crisis management and emergency response (low neuroticism)",
                "Therapeutic and counseling roles (moderate neuroticism)",
                "High-pressure decision making (low neuroticism)",
                "Detailed analysis and quality control (high neuroticism for attention to problems)",
            ],
            development_strategies: &[
                "For high neuroticism: Develop stress management and mindfulness techniques",
                "For high neuroticism: Build emotional regulation skills and coping strategies",
                "For low neuroticism: Develop empathy for others emotional experiences",
                "For low neuroticism: Learn to recognize and respond to emotional cues in others",
                "Both: Practice emotional intelligence and self-awareness",
            ],
        },
    );

    table.insert(
        TraitDomain::OpennessToExperience,
        ResearchInsight {
            research_findings: &[
                "High openness is associated with creativity, artistic interests, and intellectual curiosity (McCrae, 1987)",
                "Open individuals show greater cognitive flexibility and problem-solving ability (LePine et al., 2000)",
                "Openness correlates with better performance in training and learning new skills (Barrick & Mount, 1991)",
                "High openness individuals are more likely to engage in cultural and educational activities (McCrae & Sutin, 2009)",
                "Openness is linked to political liberalism and tolerance for diversity (Jost et al., 2003)",
            ],
            citations: &[
                "McCrae, R. R. (1987). Creativity, divergent thinking, and openness to experience. Journal of Personality and Social Psychology, 52(6), 1258-1265.",
                "LePine, J. A., et al. (2000). Adaptability to changing task contexts: Effects of general cognitive ability, conscientiousness, and openness to experience. Personnel Psychology, 53(3), 563-593.",
                "McCrae, R. R., & Sutin, A. R. (2009). Openness to experience. In Handbook of individual differences in social behavior (pp. 257-273).",
                "Jost, J. T., et al. (2003). Political conservatism as motivated social cognition. Psychological Bulletin, 129(3), 339-375.",
            ],
            practical_applications: &[
                "Research and development roles",
                "Creative and artistic professions",
                "Innovation and strategic planning",
                "Training and educational positions",
                "Cross-cultural and international work",
            ],
            development_strategies: &[
                "For low openness: Gradually expose yourself to new experiences and perspectives",
                "For low openness: Practice considering alternative viewpoints and solutions",
                "For high openness: Develop practical implementation skills to execute creative ideas",
                "For high openness: Learn to focus and follow through on projects to completion",
                "Both: Balance innovation with practical considerations and implementation",
            ],
        },
    );

    table
});

const MAX_PLAN_STRENGTHS: usize = 4;
const MAX_PLAN_DEVELOPMENT_AREAS: usize = 3;
const MAX_PLAN_ACTIONS: usize = 6;
const MAX_PLAN_BASIS: usize = 5;

/// A research-based development plan assembled from classified domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentPlan {
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub action_plan: Vec<String>,
    pub research_basis: Vec<String>,
}

impl DevelopmentPlan {
    /// Builds the plan from a person's classified domains, in their
    /// iteration order. Domains outside the fixed five are skipped.
    pub fn for_domains(domains: &OrderedMap<DomainAnalysis>) -> DevelopmentPlan {
        let mut strengths: Vec<String> = Vec::new();
        let mut development_areas: Vec<String> = Vec::new();
        let mut action_plan: Vec<String> = Vec::new();
        let mut research_basis: Vec<String> = Vec::new();

        for (name, analysis) in domains.iter() {
            let Some(domain) = TraitDomain::parse(name) else {
                continue;
            };
            let research = research_insight(domain);

            research_basis.push(format!("{}: {}", name, research.research_findings[0]));

            let relevant = research
                .development_strategies
                .iter()
                .filter(|s| strategy_matches(s, analysis.level))
                .take(2);
            action_plan.extend(relevant.map(|s| s.to_string()));

            match analysis.level {
                ScoreLevel::High => {
                    if matches!(
                        domain,
                        TraitDomain::Conscientiousness | TraitDomain::Agreeableness
                    ) {
                        strengths.push(format!(
                            "Strong {} supports excellent {}",
                            name.to_lowercase(),
                            research.practical_applications[0].to_lowercase()
                        ));
                    }
                }
                ScoreLevel::Low => {
                    development_areas.push(format!(
                        "Developing {} could improve {}",
                        name.to_lowercase(),
                        research.practical_applications[0].to_lowercase()
                    ));
                }
                ScoreLevel::Moderate => {}
            }
        }

        strengths.truncate(MAX_PLAN_STRENGTHS);
        development_areas.truncate(MAX_PLAN_DEVELOPMENT_AREAS);
        action_plan.truncate(MAX_PLAN_ACTIONS);
        research_basis.truncate(MAX_PLAN_BASIS);

        DevelopmentPlan {
            strengths,
            development_areas,
            action_plan,
            research_basis,
        }
    }
}

/// Substring gates on the strategy text, kept literal: a strategy applies to
/// a level when it mentions that level or addresses "Both"; moderate also
/// admits strategies that name no audience at all.
fn strategy_matches(strategy: &str, level: ScoreLevel) -> bool {
    match level {
        ScoreLevel::High => strategy.contains("high") || strategy.contains("Both"),
        ScoreLevel::Low => strategy.contains("low") || strategy.contains("Both"),
        ScoreLevel::Moderate => strategy.contains("Both") || !strategy.contains("For"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::classifier::classify_average;

    fn domains_with(entries: &[(&str, f64)]) -> OrderedMap<DomainAnalysis> {
        let mut map = OrderedMap::new();
        for (name, avg) in entries {
            map.insert(*name, classify_average(name, *avg).unwrap());
        }
        map
    }

    #[test]
    fn research_table_covers_all_domains() {
        for domain in TraitDomain::all() {
            let insight = research_insight(*domain);
            assert_eq!(insight.research_findings.len(), 5);
            assert_eq!(insight.citations.len(), 4);
            assert_eq!(insight.practical_applications.len(), 5);
            assert_eq!(insight.development_strategies.len(), 5);
        }
    }

    #[test]
    fn lookup_by_name_mirrors_domain_parse() {
        assert!(research_insight_for("Openness To Experience").is_some());
        assert!(research_insight_for("Charisma").is_none());
    }

    #[test]
    fn general_research_sections_are_present() {
        assert_eq!(GENERAL_RESEARCH.overview.len(), 5);
        assert_eq!(GENERAL_RESEARCH.key_findings.len(), 5);
        assert_eq!(GENERAL_RESEARCH.applications.len(), 6);
        assert_eq!(GENERAL_RESEARCH.limitations.len(), 5);
    }

    #[test]
    fn plan_flags_high_conscientiousness_as_strength() {
        let plan = DevelopmentPlan::for_domains(&domains_with(&[("Conscientiousness", 18.0)]));
        assert_eq!(
            plan.strengths,
            ["Strong conscientiousness supports excellent project management and planning roles"]
        );
        assert!(plan.development_areas.is_empty());
    }

    #[test]
    fn plan_flags_low_domains_as_development_areas() {
        let plan = DevelopmentPlan::for_domains(&domains_with(&[("Extraversion", 4.0)]));
        assert_eq!(
            plan.development_areas,
            ["Developing extraversion could improve team leadership roles and public speaking opportunities"]
        );
    }

    #[test]
    fn high_extraversion_only_matches_the_both_strategy() {
        // None of the Extraversion strategies mention "high"; only the
        // "Both:" line survives the substring gate.
        let plan = DevelopmentPlan::for_domains(&domains_with(&[("Extraversion", 18.0)]));
        assert_eq!(
            plan.action_plan,
            ["Both: Understand and respect different energy sources and communication styles"]
        );
    }

    #[test]
    fn low_extraversion_matches_allow_by_substring() {
        // "allow" contains "low", so the extravert listening strategy leaks
        // into the low plan exactly as the substring gate dictates.
        let plan = DevelopmentPlan::for_domains(&domains_with(&[("Extraversion", 4.0)]));
        assert_eq!(
            plan.action_plan,
            ["For extraverts: Learn to listen actively and allow others to contribute",
             "Both: Understand and respect different energy sources and communication styles"]
        );
    }

    #[test]
    fn moderate_domains_admit_only_unaddressed_strategies() {
        let plan = DevelopmentPlan::for_domains(&domains_with(&[("Agreeableness", 10.0)]));
        assert_eq!(
            plan.action_plan,
            ["Both: Balance cooperation with healthy self-advocacy"]
        );
    }

    #[test]
    fn plan_caps_each_list() {
        let plan = DevelopmentPlan::for_domains(&domains_with(&[
            ("Extraversion", 4.0),
            ("Agreeableness", 4.0),
            ("Conscientiousness", 4.0),
            ("Neuroticism", 4.0),
            ("Openness To Experience", 4.0),
        ]));

        assert!(plan.strengths.len() <= 4);
        assert!(plan.development_areas.len() <= 3);
        assert!(plan.action_plan.len() <= 6);
        assert!(plan.research_basis.len() <= 5);
    }

    #[test]
    fn research_basis_cites_first_finding_per_domain() {
        let plan = DevelopmentPlan::for_domains(&domains_with(&[("Neuroticism", 10.0)]));
        assert_eq!(plan.research_basis.len(), 1);
        assert!(plan.research_basis[0].starts_with(
            "Neuroticism: High neuroticism is associated with increased risk of anxiety"
        ));
    }

    #[test]
    fn unknown_domains_are_skipped() {
        let mut map = OrderedMap::new();
        map.insert(
            "Charisma",
            classify_average("Extraversion", 10.0).unwrap(),
        );
        let plan = DevelopmentPlan::for_domains(&map);
        assert!(plan.research_basis.is_empty());
        assert!(plan.action_plan.is_empty());
    }
}
