//! Transient state for one assessment attempt.
//!
//! An [`AssessmentSession`] owns the ordered question groups, one
//! [`GroupAnswer`] slot per group, and the cursor of the group currently
//! presented. Nothing here is global: the caller owns the session and
//! passes it by reference, and abandoning it needs no cleanup.
//!
//! Mark placement follows the original forced-choice rules:
//! - selecting the mark an option already holds clears that mark;
//! - placing a mark on the option holding the opposite mark clears the
//!   opposite mark first, so one option can never hold both.

use thiserror::Error;

use crate::inventory::standard_inventory;
use crate::types::{GroupAnswer, Mark, QuestionGroup};

/// Errors for malformed mark placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown question group id {0}")]
    UnknownGroup(u8),
    #[error("option index {option} out of range for group {group}")]
    InvalidOption { group: u8, option: u8 },
}

/// In-memory answer state for a single respondent.
pub struct AssessmentSession {
    groups: Vec<QuestionGroup>,
    answers: Vec<GroupAnswer>,
    cursor: usize,
}

impl AssessmentSession {
    /// Start a session over caller-supplied groups, all marks unset.
    pub fn new(groups: Vec<QuestionGroup>) -> Self {
        let answers = vec![GroupAnswer::default(); groups.len()];
        Self {
            groups,
            answers,
            cursor: 0,
        }
    }

    /// Start a session over the standard 28-group inventory.
    pub fn standard() -> Self {
        Self::new(standard_inventory())
    }

    pub fn groups(&self) -> &[QuestionGroup] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// (group, answer) pairs in presentation order.
    pub fn entries(&self) -> impl Iterator<Item = (&QuestionGroup, &GroupAnswer)> {
        self.groups.iter().zip(self.answers.iter())
    }

    fn position(&self, group_id: u8) -> Result<usize, SessionError> {
        self.groups
            .iter()
            .position(|g| g.id == group_id)
            .ok_or(SessionError::UnknownGroup(group_id))
    }

    /// Answer state for a group.
    pub fn answer(&self, group_id: u8) -> Result<&GroupAnswer, SessionError> {
        Ok(&self.answers[self.position(group_id)?])
    }

    /// Place or toggle a mark on an option of a group.
    ///
    /// Toggle semantics: re-selecting the held mark clears it; marking the
    /// option that holds the opposite mark moves that mark off.
    pub fn select(&mut self, group_id: u8, option_index: u8, mark: Mark) -> Result<(), SessionError> {
        let pos = self.position(group_id)?;
        if option_index as usize >= self.groups[pos].options.len() {
            return Err(SessionError::InvalidOption {
                group: group_id,
                option: option_index,
            });
        }

        let answer = &mut self.answers[pos];
        match mark {
            Mark::Most => {
                if answer.most == Some(option_index) {
                    answer.most = None;
                } else {
                    answer.most = Some(option_index);
                    if answer.least == Some(option_index) {
                        answer.least = None;
                    }
                }
            }
            Mark::Least => {
                if answer.least == Some(option_index) {
                    answer.least = None;
                } else {
                    answer.least = Some(option_index);
                    if answer.most == Some(option_index) {
                        answer.most = None;
                    }
                }
            }
        }
        Ok(())
    }

    /// Clear both marks of a group.
    pub fn clear_group(&mut self, group_id: u8) -> Result<(), SessionError> {
        let pos = self.position(group_id)?;
        self.answers[pos] = GroupAnswer::default();
        Ok(())
    }

    /// Clear every mark and rewind the cursor.
    pub fn reset(&mut self) {
        for answer in &mut self.answers {
            *answer = GroupAnswer::default();
        }
        self.cursor = 0;
    }

    // ── Navigation ──────────────────────────────────────────────────

    pub fn current_index(&self) -> usize {
        self.cursor
    }

    pub fn current_group(&self) -> Option<&QuestionGroup> {
        self.groups.get(self.cursor)
    }

    /// Advance to the next group. Refused while the current group is
    /// incomplete or the cursor is already on the last group; advancing
    /// past the last group is the caller's cue to score.
    pub fn advance(&mut self) -> bool {
        let complete = self
            .answers
            .get(self.cursor)
            .is_some_and(|a| a.is_complete());
        if complete && self.cursor + 1 < self.groups.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Step back to the previous group. Refused at the first group.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Progress through the inventory as the fraction of groups the cursor
    /// has reached, matching the original progress bar.
    pub fn progress(&self) -> f32 {
        if self.groups.is_empty() {
            0.0
        } else {
            (self.cursor + 1) as f32 / self.groups.len() as f32
        }
    }

    // ── Completeness ────────────────────────────────────────────────

    /// Number of groups with both marks set.
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_complete()).count()
    }

    /// True once every group has both marks set.
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| a.is_complete())
    }

    /// First group still missing a mark, with the mark it is missing
    /// ("most" reported first when both are absent).
    pub fn first_incomplete(&self) -> Option<(u8, Mark)> {
        for (group, answer) in self.entries() {
            if answer.most.is_none() {
                return Some((group.id, Mark::Most));
            }
            if answer.least.is_none() {
                return Some((group.id, Mark::Least));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_select_and_toggle() {
        let mut session = AssessmentSession::standard();
        session.select(1, 0, Mark::Most).unwrap();
        assert_eq!(session.answer(1).unwrap().most, Some(0));

        // Re-selecting the held mark clears it.
        session.select(1, 0, Mark::Most).unwrap();
        assert_eq!(session.answer(1).unwrap().most, None);
    }

    #[test]
    fn test_opposite_mark_moves_off() {
        let mut session = AssessmentSession::standard();
        session.select(1, 2, Mark::Most).unwrap();
        session.select(1, 2, Mark::Least).unwrap();
        let answer = *session.answer(1).unwrap();
        assert_eq!(answer.least, Some(2));
        assert_eq!(answer.most, None);
    }

    #[test]
    fn test_marks_never_collide() {
        let mut session = AssessmentSession::standard();
        session.select(5, 1, Mark::Most).unwrap();
        session.select(5, 3, Mark::Least).unwrap();
        let answer = *session.answer(5).unwrap();
        assert!(answer.is_complete());
        assert_ne!(answer.most, answer.least);
    }

    #[test]
    fn test_unknown_group_and_bad_option() {
        let mut session = AssessmentSession::standard();
        assert_eq!(
            session.select(99, 0, Mark::Most),
            Err(SessionError::UnknownGroup(99))
        );
        assert_eq!(
            session.select(1, 4, Mark::Least),
            Err(SessionError::InvalidOption { group: 1, option: 4 })
        );
    }

    #[test]
    fn test_advance_gated_on_completeness() {
        let mut session = AssessmentSession::standard();
        assert!(!session.advance());

        session.select(1, 0, Mark::Most).unwrap();
        assert!(!session.advance());

        session.select(1, 1, Mark::Least).unwrap();
        assert!(session.advance());
        assert_eq!(session.current_index(), 1);

        assert!(session.retreat());
        assert_eq!(session.current_index(), 0);
        assert!(!session.retreat());
    }

    #[test]
    fn test_completeness_tracking() {
        let mut session = AssessmentSession::standard();
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.first_incomplete(), Some((1, Mark::Most)));

        for group_id in 1..=28u8 {
            session.select(group_id, 0, Mark::Most).unwrap();
            session.select(group_id, 1, Mark::Least).unwrap();
        }
        assert!(session.is_complete());
        assert_eq!(session.answered_count(), 28);
        assert_eq!(session.first_incomplete(), None);
    }

    #[test]
    fn test_reset() {
        let mut session = AssessmentSession::standard();
        session.select(1, 0, Mark::Most).unwrap();
        session.select(1, 1, Mark::Least).unwrap();
        session.advance();
        session.reset();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 0);
    }
}
