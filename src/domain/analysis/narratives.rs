//! Static narrative table for the five Big Five domains at three levels.
//!
//! Kept as data rather than scattered conditionals: one immutable keyed
//! lookup built on first use, each entry independently testable.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{ScoreLevel, TraitDomain};

/// The narrative profile for one (domain, level) combination.
#[derive(Debug, Clone, Copy)]
pub struct DomainNarrative {
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub careers: &'static [&'static str],
    pub development: &'static [&'static str],
}

/// Looks up the narrative for a domain at a level. Total over the closed
/// domain and level sets.
pub fn narrative(domain: TraitDomain, level: ScoreLevel) -> &'static DomainNarrative {
    NARRATIVES
        .get(&(domain, level))
        .expect("narrative table covers all domain/level combinations")
}

static NARRATIVES: Lazy<HashMap<(TraitDomain, ScoreLevel), DomainNarrative>> = Lazy::new(|| {
    let mut table = HashMap::new();

    table.insert(
        (TraitDomain::Agreeableness, ScoreLevel::Low),
        DomainNarrative {
            description: "Competitive, skeptical, and challenging. Values honesty over harmony.",
            strengths: &[
                "Critical thinking",
                "Negotiation skills",
                "Objective decision-making",
                "Leadership potential",
            ],
            challenges: &[
                "May seem unsympathetic",
                "Can be overly critical",
                "Difficulty in team harmony",
            ],
            careers: &[
                "Lawyer",
                "Critic",
                "Scientist",
                "Military Officer",
                "Judge",
                "Researcher",
                "Analyst",
            ],
            development: &[
                "Practice empathy",
                "Listen to others' perspectives",
                "Consider team morale",
            ],
        },
    );
    table.insert(
        (TraitDomain::Agreeableness, ScoreLevel::Moderate),
        DomainNarrative {
            description: "Balanced between cooperation and competition. Adaptable in social situations.",
            strengths: &[
                "Diplomatic",
                "Balanced perspective",
                "Adaptable leadership",
                "Fair-minded",
            ],
            challenges: &[
                "May be indecisive",
                "Could avoid necessary confrontation",
            ],
            careers: &[
                "Manager",
                "Consultant",
                "Teacher",
                "Mediator",
                "Project Manager",
                "Sales Professional",
            ],
            development: &[
                "Develop assertiveness when needed",
                "Clear boundary setting",
            ],
        },
    );
    table.insert(
        (TraitDomain::Agreeableness, ScoreLevel::High),
        DomainNarrative {
            description: "Cooperative, trusting, and helpful. Natural team player and peacemaker.",
            strengths: &[
                "Team collaboration",
                "Conflict resolution",
                "Empathy",
                "Customer service",
            ],
            challenges: &[
                "May be taken advantage of",
                "Difficulty saying no",
                "Avoids necessary conflict",
            ],
            careers: &[
                "Counselor",
                "Social Worker",
                "Teacher",
                "Nurse",
                "HR Professional",
                "Therapist",
            ],
            development: &[
                "Practice assertiveness",
                "Set healthy boundaries",
                "Develop negotiation skills",
            ],
        },
    );

    table.insert(
        (TraitDomain::Conscientiousness, ScoreLevel::Low),
        DomainNarrative {
            description: "Flexible, spontaneous, and adaptable. Prefers freedom over structure.",
            strengths: &["Adaptability", "Creativity", "Spontaneity", "Innovation"],
            challenges: &["Time management", "Following through", "Organization"],
            careers: &[
                "Artist",
                "Entrepreneur",
                "Freelancer",
                "Creative Director",
                "Journalist",
                "Actor",
            ],
            development: &[
                "Develop planning skills",
                "Use organizational tools",
                "Set achievable goals",
            ],
        },
    );
    table.insert(
        (TraitDomain::Conscientiousness, ScoreLevel::Moderate),
        DomainNarrative {
            description: "Balanced between structure and flexibility. Goal-oriented but adaptable.",
            strengths: &[
                "Balanced approach",
                "Goal achievement",
                "Flexible planning",
                "Practical decisions",
            ],
            challenges: &[
                "May procrastinate on uninteresting tasks",
                "Inconsistent organization",
            ],
            careers: &[
                "Project Manager",
                "Marketing Professional",
                "Designer",
                "Consultant",
                "Coordinator",
            ],
            development: &[
                "Strengthen follow-through",
                "Improve time management systems",
            ],
        },
    );
    table.insert(
        (TraitDomain::Conscientiousness, ScoreLevel::High),
        DomainNarrative {
            description: "Organized, reliable, and goal-oriented. Excellent follow-through and self-discipline.",
            strengths: &[
                "Organization",
                "Reliability",
                "Goal achievement",
                "Time management",
                "Quality work",
            ],
            challenges: &[
                "May be inflexible",
                "Perfectionist tendencies",
                "Difficulty with change",
            ],
            careers: &[
                "Accountant",
                "Engineer",
                "Project Manager",
                "Surgeon",
                "Administrator",
                "Quality Assurance",
            ],
            development: &[
                "Practice flexibility",
                "Delegate when appropriate",
                "Accept \"good enough\"",
            ],
        },
    );

    table.insert(
        (TraitDomain::Extraversion, ScoreLevel::Low),
        DomainNarrative {
            description: "Reserved, independent, and thoughtful. Prefers depth over breadth in relationships.",
            strengths: &[
                "Deep thinking",
                "Independent work",
                "Careful decision-making",
                "One-on-one relationships",
            ],
            challenges: &["Networking", "Public speaking", "Team leadership"],
            careers: &[
                "Researcher",
                "Writer",
                "Programmer",
                "Librarian",
                "Analyst",
                "Accountant",
                "Technician",
            ],
            development: &[
                "Practice public speaking",
                "Develop networking skills",
                "Share ideas more openly",
            ],
        },
    );
    table.insert(
        (TraitDomain::Extraversion, ScoreLevel::Moderate),
        DomainNarrative {
            description: "Ambivert - comfortable in both social and solitary situations. Adaptable energy levels.",
            strengths: &[
                "Social flexibility",
                "Balanced communication",
                "Versatile leadership",
                "Adaptability",
            ],
            challenges: &[
                "May be seen as inconsistent",
                "Energy management",
            ],
            careers: &[
                "Manager",
                "Teacher",
                "Consultant",
                "Customer Service",
                "Coordinator",
                "Trainer",
            ],
            development: &[
                "Recognize energy patterns",
                "Communicate preferences clearly",
            ],
        },
    );
    table.insert(
        (TraitDomain::Extraversion, ScoreLevel::High),
        DomainNarrative {
            description: "Outgoing, energetic, and sociable. Natural networker and team energizer.",
            strengths: &[
                "Leadership",
                "Networking",
                "Team motivation",
                "Public speaking",
                "Energy",
            ],
            challenges: &[
                "May dominate conversations",
                "Needs social stimulation",
                "Impulsive decisions",
            ],
            careers: &[
                "Sales",
                "Marketing",
                "Public Relations",
                "Teacher",
                "Politician",
                "Event Coordinator",
            ],
            development: &[
                "Practice listening",
                "Allow others to contribute",
                "Develop patience",
            ],
        },
    );

    table.insert(
        (TraitDomain::Neuroticism, ScoreLevel::Low),
        DomainNarrative {
            description: "Emotionally stable, calm, and resilient. Handles stress well and stays composed.",
            strengths: &[
                "Stress tolerance",
                "Emotional stability",
                "Crisis management",
                "Optimism",
            ],
            challenges: &[
                "May underestimate emotional needs",
                "Could seem insensitive to others' stress",
            ],
            careers: &[
                "Emergency Responder",
                "Surgeon",
                "Air Traffic Controller",
                "Crisis Manager",
                "Military",
            ],
            development: &[
                "Recognize others' emotional needs",
                "Develop emotional intelligence",
            ],
        },
    );
    table.insert(
        (TraitDomain::Neuroticism, ScoreLevel::Moderate),
        DomainNarrative {
            description: "Generally stable but responsive to stress. Normal emotional reactions to challenges.",
            strengths: &[
                "Balanced emotional responses",
                "Empathy",
                "Realistic assessment",
                "Motivation",
            ],
            challenges: &[
                "Stress in high-pressure situations",
                "Occasional anxiety",
            ],
            careers: &[
                "Manager",
                "Teacher",
                "Healthcare Professional",
                "Counselor",
                "Administrator",
            ],
            development: &[
                "Stress management techniques",
                "Build resilience strategies",
            ],
        },
    );
    table.insert(
        (TraitDomain::Neuroticism, ScoreLevel::High),
        DomainNarrative {
            description: "Emotionally sensitive and reactive. Experiences stress and emotions intensely.",
            strengths: &[
                "Emotional intelligence",
                "Empathy",
                "Motivation",
                "Attention to problems",
            ],
            challenges: &[
                "Stress management",
                "Emotional overwhelm",
                "Decision-making under pressure",
            ],
            careers: &[
                "Artist",
                "Writer",
                "Therapist",
                "Creative Professional",
                "Social Worker",
            ],
            development: &[
                "Stress management",
                "Mindfulness practices",
                "Emotional regulation techniques",
            ],
        },
    );

    table.insert(
        (TraitDomain::OpennessToExperience, ScoreLevel::Low),
        DomainNarrative {
            description: "Practical, conventional, and focused on proven methods. Values tradition and stability.",
            strengths: &[
                "Practical skills",
                "Attention to detail",
                "Reliability",
                "Implementation",
            ],
            challenges: &[
                "Adapting to change",
                "Creative problem-solving",
                "Innovation",
            ],
            careers: &[
                "Accountant",
                "Banker",
                "Administrator",
                "Technician",
                "Inspector",
                "Traditional roles",
            ],
            development: &[
                "Embrace small changes",
                "Explore new perspectives",
                "Value diverse viewpoints",
            ],
        },
    );
    table.insert(
        (TraitDomain::OpennessToExperience, ScoreLevel::Moderate),
        DomainNarrative {
            description: "Balanced between tradition and innovation. Open to new ideas when practical.",
            strengths: &[
                "Balanced perspective",
                "Practical innovation",
                "Selective openness",
                "Implementation",
            ],
            challenges: &[
                "May resist radical change",
                "Selective creativity",
            ],
            careers: &[
                "Manager",
                "Engineer",
                "Teacher",
                "Business Analyst",
                "Coordinator",
            ],
            development: &[
                "Explore creative outlets",
                "Challenge assumptions regularly",
            ],
        },
    );
    table.insert(
        (TraitDomain::OpennessToExperience, ScoreLevel::High),
        DomainNarrative {
            description: "Creative, curious, and open to new experiences. Natural innovator and explorer.",
            strengths: &[
                "Creativity",
                "Innovation",
                "Learning",
                "Adaptability",
                "Vision",
            ],
            challenges: &[
                "May lack focus",
                "Practical implementation",
                "Following conventions",
            ],
            careers: &[
                "Artist",
                "Researcher",
                "Designer",
                "Consultant",
                "Entrepreneur",
                "Academic",
            ],
            development: &[
                "Focus on implementation",
                "Develop practical skills",
                "Complete projects",
            ],
        },
    );

    table
});
