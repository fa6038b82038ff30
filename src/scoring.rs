//! Profile scoring: fold "most" marks into a tally and derive the
//! primary/secondary behavioral style.
//!
//! Pure functions of the answer set. The input contract is completeness
//! (every group has both marks set to distinct options), enforced up front
//! so a partially answered session can never produce a profile. "Least"
//! marks are required for completeness but never affect the tally.

use thiserror::Error;

use crate::constants::SECONDARY_GAP_MAX;
use crate::session::AssessmentSession;
use crate::types::{DimensionTally, Mark, ProfileResult, ScoreReport};

/// Scoring precondition failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("group {group} is missing its \"{}\" mark", .missing.as_str())]
    IncompleteGroup { group: u8, missing: Mark },
}

/// Count "most" selections per dimension across all groups.
///
/// Errors with the first incomplete group if any mark is missing.
pub fn tally_most_marks(session: &AssessmentSession) -> Result<DimensionTally, ScoreError> {
    if let Some((group, missing)) = session.first_incomplete() {
        return Err(ScoreError::IncompleteGroup { group, missing });
    }

    let mut tally = DimensionTally::new();
    for (group, answer) in session.entries() {
        // first_incomplete() returned None, so both marks are set; the
        // session validated the index at placement time.
        let most = answer.most.expect("complete answer") as usize;
        tally.increment(group.options[most].dimension);
    }
    Ok(tally)
}

/// Derive the profile from a tally.
///
/// The four (dimension, count) pairs are ordered by count descending with
/// ties broken by the fixed priority D > I > S > C (stable sort over the
/// priority-ordered dimensions). The runner-up qualifies as a secondary
/// style only when both of the top two counts are nonzero and their gap is
/// at most [`SECONDARY_GAP_MAX`].
pub fn derive_profile(tally: &DimensionTally) -> ProfileResult {
    let pairs = tally.ordered_pairs();
    let (primary, top) = pairs[0];
    let (runner_up, second) = pairs[1];

    let secondary = if top > 0 && second > 0 && top - second <= SECONDARY_GAP_MAX {
        Some(runner_up)
    } else {
        None
    };

    ProfileResult { primary, secondary }
}

/// Score a complete session: tally, profile, and the per-dimension maximum
/// the results view scales its bars by.
pub fn score_session(session: &AssessmentSession) -> Result<ScoreReport, ScoreError> {
    let tally = tally_most_marks(session)?;
    Ok(ScoreReport {
        tally,
        groups_scored: session.group_count(),
        profile: derive_profile(&tally),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimension;

    fn profile(counts: [u32; 4]) -> ProfileResult {
        derive_profile(&DimensionTally::from_counts(counts))
    }

    #[test]
    fn test_single_dominant_dimension() {
        let result = profile([28, 0, 0, 0]);
        assert_eq!(result.primary, Dimension::D);
        assert_eq!(result.secondary, None);
        assert_eq!(result.label(), "D");
    }

    #[test]
    fn test_secondary_within_gap() {
        let result = profile([15, 14, 0, 0]);
        assert_eq!(result.primary, Dimension::D);
        assert_eq!(result.secondary, Some(Dimension::I));
        assert_eq!(result.label(), "D-I");
    }

    #[test]
    fn test_no_secondary_beyond_gap() {
        let result = profile([15, 10, 3, 0]);
        assert_eq!(result.primary, Dimension::D);
        assert_eq!(result.secondary, None);
        assert_eq!(result.label(), "D");
    }

    #[test]
    fn test_gap_boundary_is_inclusive() {
        assert_eq!(profile([10, 8, 5, 5]).secondary, Some(Dimension::I));
        assert_eq!(profile([11, 8, 5, 4]).secondary, None);
    }

    #[test]
    fn test_zero_runner_up_never_secondary() {
        // Gap of 1 but the runner-up count is zero.
        assert_eq!(profile([1, 0, 0, 0]).secondary, None);
    }

    #[test]
    fn test_tie_break_follows_priority_order() {
        let result = profile([7, 7, 7, 7]);
        assert_eq!(result.primary, Dimension::D);
        assert_eq!(result.secondary, Some(Dimension::I));

        let result = profile([0, 9, 9, 10]);
        assert_eq!(result.primary, Dimension::C);
        assert_eq!(result.secondary, Some(Dimension::I));
    }

    #[test]
    fn test_incomplete_session_rejected() {
        let mut session = AssessmentSession::standard();
        for group_id in 1..=28u8 {
            session.select(group_id, 0, crate::types::Mark::Most).unwrap();
            if group_id != 17 {
                session.select(group_id, 1, crate::types::Mark::Least).unwrap();
            }
        }
        assert_eq!(
            tally_most_marks(&session),
            Err(ScoreError::IncompleteGroup {
                group: 17,
                missing: Mark::Least,
            })
        );
    }
}
