//! Descriptive catalog for the four behavioral styles.
//!
//! Static content consumed by whatever renders a scored profile: names,
//! adjectives, keyword badges, and the strengths/challenges/communication
//! lists shown on a results view. Scoring never reads this module.

use serde::Serialize;

use crate::constants::DIMENSION_COUNT;
use crate::types::Dimension;

/// Display content for one behavioral style.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StyleInfo {
    pub dimension: Dimension,
    pub name: &'static str,
    pub adjective: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
    pub focuses_on: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub communication_tips: &'static [&'static str],
}

/// The four styles, indexed by [`Dimension::index`].
pub const STYLE_CATALOG: [StyleInfo; DIMENSION_COUNT] = [
    StyleInfo {
        dimension: Dimension::D,
        name: "Dominance",
        adjective: "Direct & Driven",
        keywords: &[
            "Assertive",
            "Results-Oriented",
            "Decisive",
            "Problem-Solver",
            "Competitive",
            "Risk-Taker",
        ],
        description: "Individuals with a Dominant (D) style are driven, ambitious, and \
                      results-focused. They push toward goals, take charge of problems, \
                      and are energized by challenge and competition.",
        focuses_on: "Accomplishing tasks, achieving goals, exercising authority, and \
                     overcoming opposition.",
        strengths: &[
            "Takes initiative",
            "Decisive under pressure",
            "Results-focused",
            "Strong problem-solver",
        ],
        challenges: &[
            "Can be impatient",
            "May overlook feelings",
            "Can appear blunt",
            "Resists micromanagement",
        ],
        communication_tips: &[
            "Be direct and brief",
            "Focus on results/solutions",
            "Provide options/control",
        ],
    },
    StyleInfo {
        dimension: Dimension::I,
        name: "Influence",
        adjective: "Inspiring & Sociable",
        keywords: &[
            "Optimistic",
            "Enthusiastic",
            "Persuasive",
            "Talkative",
            "Collaborative",
            "Trusting",
        ],
        description: "Those with an Influence (I) style are typically outgoing, \
                      enthusiastic, and optimistic. They persuade through energy and \
                      rapport and thrive on recognition and collaboration.",
        focuses_on: "Persuading others, building connections, and expressing enthusiasm.",
        strengths: &[
            "Charismatic & persuasive",
            "Builds networks easily",
            "Optimistic & motivating",
            "Creative brainstormer",
        ],
        challenges: &[
            "May lack follow-through",
            "Can be impulsive",
            "Fears social rejection",
            "Easily distracted",
        ],
        communication_tips: &[
            "Be friendly, allow social time",
            "Show enthusiasm",
            "Provide recognition",
            "Focus on the big picture",
        ],
    },
    StyleInfo {
        dimension: Dimension::S,
        name: "Steadiness",
        adjective: "Supportive & Stable",
        keywords: &[
            "Patient",
            "Cooperative",
            "Reliable",
            "Calm",
            "Good Listener",
            "Team Player",
        ],
        description: "The Steadiness (S) style is marked by a calm, patient, and \
                      supportive demeanor. They value stability and cooperation and \
                      are the dependable core of a team.",
        focuses_on: "Providing support, maintaining stability, and ensuring collaboration.",
        strengths: &[
            "Reliable & dependable",
            "Patient listener",
            "Calm under pressure",
            "Supportive team player",
        ],
        challenges: &[
            "Resistant to sudden change",
            "May avoid conflict",
            "Can be overly accommodating",
            "Slow to decide",
        ],
        communication_tips: &[
            "Be patient & sincere",
            "Explain changes clearly",
            "Show appreciation",
            "Ask for their opinions",
        ],
    },
    StyleInfo {
        dimension: Dimension::C,
        name: "Conscientiousness",
        adjective: "Cautious & Correct",
        keywords: &[
            "Analytical",
            "Precise",
            "Systematic",
            "Quality-Focused",
            "Detail-Oriented",
            "Orderly",
        ],
        description: "Individuals with a Conscientious (C) style prioritize accuracy, \
                      quality, and details. They work systematically, weigh evidence, \
                      and hold themselves to high standards.",
        focuses_on: "Ensuring accuracy, maintaining quality standards, and challenging \
                     assumptions.",
        strengths: &[
            "Analytical & detail-oriented",
            "Maintains high standards for quality",
            "Systematic & organized",
            "Diplomatic & factual",
        ],
        challenges: &[
            "Can be overly critical",
            "Prone to analysis paralysis",
            "May appear reserved",
            "Risk-averse",
        ],
        communication_tips: &[
            "Be prepared with data",
            "Provide clear expectations",
            "Allow time for analysis",
            "Focus on logic",
        ],
    },
];

/// Catalog entry for a dimension.
#[inline(always)]
pub fn style_info(dim: Dimension) -> &'static StyleInfo {
    &STYLE_CATALOG[dim.index()]
}
