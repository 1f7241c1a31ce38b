//! Analysis layer: turns facet scores into classified domains, individual
//! reports, pairwise compatibility, and research-backed development plans.

pub mod classifier;
pub mod compatibility;
pub mod individual;
pub mod narratives;
pub mod research;

pub use classifier::{classify, classify_average, facet_average, DomainAnalysis};
pub use compatibility::{CompatibilityScore, RelationshipDynamics};
pub use individual::IndividualAnalysis;
pub use narratives::{narrative, DomainNarrative};
pub use research::{
    research_insight, research_insight_for, DevelopmentPlan, GeneralResearch, ResearchInsight,
    GENERAL_RESEARCH,
};
