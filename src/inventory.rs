//! The standard 28-group forced-choice inventory.
//!
//! Each group presents four workplace descriptors, one per dimension, in
//! D/I/S/C order. Group ids are 1-based and stable: results only reference
//! dimensions, never group ids, so reordering groups for presentation does
//! not affect scoring.

use crate::constants::{GROUP_COUNT, OPTIONS_PER_GROUP};
use crate::types::Dimension::{C, D, I, S};
use crate::types::{Dimension, QuestionGroup, QuestionOption};

/// Descriptor labels and dimension tags, one row per group.
const INVENTORY_ROWS: [[(&str, Dimension); OPTIONS_PER_GROUP]; GROUP_COUNT] = [
    [("Adventurous", D), ("Enthusiastic", I), ("Patient", S), ("Accurate", C)],
    [("Forceful", D), ("Sociable", I), ("Loyal", S), ("Systematic", C)],
    [("Bold", D), ("Talkative", I), ("Gentle", S), ("Precise", C)],
    [("Competitive", D), ("Optimistic", I), ("Supportive", S), ("Perfectionistic", C)],
    [("Direct", D), ("Inspiring", I), ("Calm", S), ("Analytical", C)],
    [("Demanding", D), ("Charming", I), ("Agreeable", S), ("Careful", C)],
    [("Decisive", D), ("Persuasive", I), ("Good Listener", S), ("Organized", C)],
    [("Takes Charge", D), ("Outgoing", I), ("Steady", S), ("Fact-finder", C)],
    [("Results-driven", D), ("Spontaneous", I), ("Kind", S), ("Logical", C)],
    [("Assertive", D), ("Convincing", I), ("Relaxed", S), ("Reserved", C)],
    [("Daring", D), ("Playful", I), ("Predictable", S), ("Cautious", C)],
    [("Dominant", D), ("Lively", I), ("Considerate", S), ("Formal", C)],
    [("Problem Solver", D), ("Trusting", I), ("Stable", S), ("Orderly", C)],
    [("Risk-Taker", D), ("Magnetic", I), ("Deliberate", S), ("Compliant", C)],
    [("Independent", D), ("Influential", I), ("Team Player", S), ("Detail-Oriented", C)],
    [("Strong-willed", D), ("Popular", I), ("Amiable", S), ("High Standards", C)],
    [("Determined", D), ("Expressive", I), ("Cooperative", S), ("Analytical", C)],
    [("Goal-oriented", D), ("Fun-loving", I), ("Consistent", S), ("Disciplined", C)],
    [("Authoritative", D), ("Generous", I), ("Possessive", S), ("Private", C)],
    [("Takes Control", D), ("Animated", I), ("Harmonious", S), ("Fact-based", C)],
    [("Firm", D), ("Upbeat", I), ("Modest", S), ("Procedural", C)],
    [("Action-oriented", D), ("Verbal", I), ("Dependable", S), ("Logical", C)],
    [("Outspoken", D), ("Impulsive", I), ("Neighborly", S), ("Reserved", C)],
    [("Persistent", D), ("Emotional", I), ("Even-tempered", S), ("Critical Thinker", C)],
    [("Self-reliant", D), ("Positive", I), ("Methodical", S), ("Structured", C)],
    [("Tough", D), ("Spirited", I), ("Sincere", S), ("Industrious", C)],
    [("Task-oriented", D), ("People-oriented", I), ("Process-oriented", S), ("Rule-oriented", C)],
    [("Ambitious", D), ("Gregarious", I), ("Peaceful", S), ("Prudent", C)],
];

/// Build the standard inventory in presentation order, ids 1..=28.
pub fn standard_inventory() -> Vec<QuestionGroup> {
    INVENTORY_ROWS
        .iter()
        .enumerate()
        .map(|(idx, row)| QuestionGroup {
            id: (idx + 1) as u8,
            options: row.map(|(label, dimension)| QuestionOption::new(label, dimension)),
        })
        .collect()
}
