//! Assessment constants and dimension-indexing helpers.
//!
//! The inventory geometry is fixed by the instrument: 28 forced-choice
//! groups of 4 descriptors, one descriptor per dimension, scored over the
//! four-symbol dimension alphabet D/I/S/C.

/// Number of behavioral dimensions in the DISC model.
pub const DIMENSION_COUNT: usize = 4;

/// Number of question groups in the standard inventory.
pub const GROUP_COUNT: usize = 28;

/// Number of descriptor options presented per question group.
pub const OPTIONS_PER_GROUP: usize = 4;

/// Largest primary-minus-secondary tally gap that still qualifies the
/// runner-up dimension as a secondary style.
pub const SECONDARY_GAP_MAX: u32 = 2;

/// One-letter dimension symbols, indexed by dimension priority order
/// (D > I > S > C, the order used to break tally ties).
pub const DIMENSION_SYMBOLS: [&str; DIMENSION_COUNT] = ["D", "I", "S", "C"];

/// Full dimension names, in priority order.
pub const DIMENSION_NAMES: [&str; DIMENSION_COUNT] = [
    "Dominance",
    "Influence",
    "Steadiness",
    "Conscientiousness",
];
