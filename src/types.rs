//! Core data structures: dimensions, question groups, marks, tallies, and
//! profile results.
//!
//! The respondent-facing lifecycle is: a [`QuestionGroup`] presents four
//! descriptor options; the respondent places a [`Mark::Most`] and a
//! [`Mark::Least`] on two distinct options ([`GroupAnswer`]); the scorer
//! folds all "most" marks into a [`DimensionTally`] and derives a
//! [`ProfileResult`]. The [`ScoreReport`] is the payload handed to the
//! display collaborator.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// One of the four DISC behavioral dimensions.
///
/// Variant order is the fixed priority order (D > I > S > C) used to break
/// tally ties deterministically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Dimension {
    D,
    I,
    S,
    C,
}

impl Dimension {
    /// All dimensions in priority order.
    pub const ALL: [Dimension; DIMENSION_COUNT] =
        [Dimension::D, Dimension::I, Dimension::S, Dimension::C];

    /// Position in tally arrays and in the priority order.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-letter symbol ("D", "I", "S", "C").
    pub fn symbol(self) -> &'static str {
        DIMENSION_SYMBOLS[self.index()]
    }

    /// Full dimension name ("Dominance", ...).
    pub fn name(self) -> &'static str {
        DIMENSION_NAMES[self.index()]
    }
}

/// The two forced-choice marks a respondent places within each group.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Mark {
    Most,
    Least,
}

impl Mark {
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Most => "most",
            Mark::Least => "least",
        }
    }
}

/// A single descriptor option: display label plus the dimension its
/// "most" selection loads onto.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub dimension: Dimension,
}

impl QuestionOption {
    pub fn new(label: &str, dimension: Dimension) -> Self {
        Self {
            label: label.to_string(),
            dimension,
        }
    }
}

/// A forced-choice group: fixed identifier plus exactly four options.
///
/// In the standard inventory ids run 1..=28 and every group carries one
/// option per dimension, but sessions accept any caller-supplied groups
/// with four options each.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct QuestionGroup {
    pub id: u8,
    pub options: [QuestionOption; OPTIONS_PER_GROUP],
}

/// Per-group answer state: at most one option index marked "most" and at
/// most one marked "least".
///
/// The invariant `most != least` (when both are set) is maintained by
/// [`crate::session::AssessmentSession::select`]; this struct only stores
/// the marks.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct GroupAnswer {
    pub most: Option<u8>,
    pub least: Option<u8>,
}

impl GroupAnswer {
    /// Complete means both marks are set (to distinct options, by the
    /// session invariant).
    #[inline(always)]
    pub fn is_complete(&self) -> bool {
        self.most.is_some() && self.least.is_some()
    }

    /// The mark currently held by `option_index`, if any.
    pub fn mark_on(&self, option_index: u8) -> Option<Mark> {
        if self.most == Some(option_index) {
            Some(Mark::Most)
        } else if self.least == Some(option_index) {
            Some(Mark::Least)
        } else {
            None
        }
    }
}

/// Per-dimension count of "most" selections.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct DimensionTally {
    #[serde(rename = "D")]
    pub d: u32,
    #[serde(rename = "I")]
    pub i: u32,
    #[serde(rename = "S")]
    pub s: u32,
    #[serde(rename = "C")]
    pub c: u32,
}

impl DimensionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally from counts in priority order [D, I, S, C].
    pub fn from_counts(counts: [u32; DIMENSION_COUNT]) -> Self {
        Self {
            d: counts[0],
            i: counts[1],
            s: counts[2],
            c: counts[3],
        }
    }

    pub fn get(&self, dim: Dimension) -> u32 {
        match dim {
            Dimension::D => self.d,
            Dimension::I => self.i,
            Dimension::S => self.s,
            Dimension::C => self.c,
        }
    }

    pub fn increment(&mut self, dim: Dimension) {
        match dim {
            Dimension::D => self.d += 1,
            Dimension::I => self.i += 1,
            Dimension::S => self.s += 1,
            Dimension::C => self.c += 1,
        }
    }

    /// Sum of all four counts. Equals the number of groups tallied for any
    /// complete answer set.
    pub fn total(&self) -> u32 {
        self.d + self.i + self.s + self.c
    }

    /// The four (dimension, count) pairs ordered by count descending.
    ///
    /// The sort is stable over [`Dimension::ALL`], so equal counts come out
    /// in priority order (D > I > S > C), the documented tie-break.
    pub fn ordered_pairs(&self) -> [(Dimension, u32); DIMENSION_COUNT] {
        let mut pairs = [
            (Dimension::D, self.d),
            (Dimension::I, self.i),
            (Dimension::S, self.s),
            (Dimension::C, self.c),
        ];
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}

/// Scored profile: primary dimension plus optional secondary.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ProfileResult {
    pub primary: Dimension,
    pub secondary: Option<Dimension>,
}

impl ProfileResult {
    /// Display label: `"D"`, or `"D-I"` when a secondary qualifies.
    pub fn label(&self) -> String {
        match self.secondary {
            Some(sec) => format!("{}-{}", self.primary.symbol(), sec.symbol()),
            None => self.primary.symbol().to_string(),
        }
    }
}

/// Everything the results view needs: the tally, the per-dimension maximum
/// (number of groups scored; each group contributes exactly one "most"
/// mark), and the derived profile.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ScoreReport {
    pub tally: DimensionTally,
    pub groups_scored: usize,
    pub profile: ProfileResult,
}
