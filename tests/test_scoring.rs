//! End-to-end tests: fill a session the way the UI does, score it, and
//! check the report the results view would receive.

use disc::constants::GROUP_COUNT;
use disc::scoring::{score_session, ScoreError};
use disc::session::AssessmentSession;
use disc::types::{Dimension, Mark};

/// Mark `dim` as "most" for the first `n` unanswered-by-this-helper groups
/// encountered in `order`, choosing any other option as "least".
fn fill_most(session: &mut AssessmentSession, plan: &[(Dimension, usize)]) {
    let groups: Vec<(u8, Vec<Dimension>)> = session
        .groups()
        .iter()
        .map(|g| (g.id, g.options.iter().map(|o| o.dimension).collect()))
        .collect();

    let mut next = 0usize;
    for &(dim, n) in plan {
        for _ in 0..n {
            let (group_id, dims) = &groups[next];
            let most = dims.iter().position(|&d| d == dim).unwrap() as u8;
            let least = dims.iter().position(|&d| d != dim).unwrap() as u8;
            session.select(*group_id, most, Mark::Most).unwrap();
            session.select(*group_id, least, Mark::Least).unwrap();
            next += 1;
        }
    }
    assert_eq!(next, GROUP_COUNT, "plan must cover every group");
}

// ── Profile derivation through full sessions ─────────────────────────

#[test]
fn all_most_marks_on_d_gives_pure_d_profile() {
    let mut session = AssessmentSession::standard();
    fill_most(&mut session, &[(Dimension::D, GROUP_COUNT)]);

    let report = score_session(&session).unwrap();
    assert_eq!(report.tally.d, 28);
    assert_eq!(report.tally.i, 0);
    assert_eq!(report.tally.s, 0);
    assert_eq!(report.tally.c, 0);
    assert_eq!(report.groups_scored, GROUP_COUNT);
    assert_eq!(report.profile.primary, Dimension::D);
    assert_eq!(report.profile.secondary, None);
    assert_eq!(report.profile.label(), "D");
}

#[test]
fn close_runner_up_becomes_secondary() {
    let mut session = AssessmentSession::standard();
    fill_most(&mut session, &[(Dimension::D, 15), (Dimension::I, 13)]);

    let report = score_session(&session).unwrap();
    assert_eq!(report.tally.d, 15);
    assert_eq!(report.tally.i, 13);
    assert_eq!(report.profile.label(), "D-I");
}

#[test]
fn distant_runner_up_is_dropped() {
    let mut session = AssessmentSession::standard();
    fill_most(
        &mut session,
        &[(Dimension::D, 20), (Dimension::I, 5), (Dimension::S, 3)],
    );

    let report = score_session(&session).unwrap();
    assert_eq!(report.tally.d, 20);
    assert_eq!(report.profile.label(), "D");
}

#[test]
fn balanced_tally_breaks_ties_by_priority() {
    let mut session = AssessmentSession::standard();
    fill_most(
        &mut session,
        &[
            (Dimension::D, 7),
            (Dimension::I, 7),
            (Dimension::S, 7),
            (Dimension::C, 7),
        ],
    );

    let report = score_session(&session).unwrap();
    assert_eq!(report.profile.primary, Dimension::D);
    assert_eq!(report.profile.secondary, Some(Dimension::I));
    assert_eq!(report.profile.label(), "D-I");
}

// ── Completeness gating ──────────────────────────────────────────────

#[test]
fn scoring_blocked_until_every_group_answered() {
    let mut session = AssessmentSession::standard();
    assert_eq!(
        score_session(&session),
        Err(ScoreError::IncompleteGroup {
            group: 1,
            missing: Mark::Most,
        })
    );

    for group_id in 1..=GROUP_COUNT as u8 {
        session.select(group_id, 0, Mark::Most).unwrap();
        if group_id != 9 {
            session.select(group_id, 3, Mark::Least).unwrap();
        }
    }
    assert_eq!(
        score_session(&session),
        Err(ScoreError::IncompleteGroup {
            group: 9,
            missing: Mark::Least,
        })
    );

    session.select(9, 3, Mark::Least).unwrap();
    assert!(score_session(&session).is_ok());
}

// ── The full test-taking walk ────────────────────────────────────────

#[test]
fn walkthrough_advances_and_scores() {
    let mut session = AssessmentSession::standard();

    for step in 0..GROUP_COUNT {
        let group = session.current_group().unwrap();
        let group_id = group.id;
        session.select(group_id, 1, Mark::Most).unwrap();
        session.select(group_id, 2, Mark::Least).unwrap();

        if step + 1 < GROUP_COUNT {
            assert!(session.advance());
        } else {
            // Last group: nothing left to advance to; the caller scores.
            assert!(!session.advance());
        }
    }

    assert!(session.is_complete());
    assert!((session.progress() - 1.0).abs() < f32::EPSILON);

    // Option index 1 is the I descriptor in every standard group.
    let report = score_session(&session).unwrap();
    assert_eq!(report.tally.i, 28);
    assert_eq!(report.profile.label(), "I");
}

// ── Report payload shape ─────────────────────────────────────────────

#[test]
fn report_serializes_with_dimension_symbol_keys() {
    let mut session = AssessmentSession::standard();
    fill_most(&mut session, &[(Dimension::D, 15), (Dimension::I, 13)]);
    let report = score_session(&session).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["tally"]["D"], 15);
    assert_eq!(json["tally"]["I"], 13);
    assert_eq!(json["tally"]["S"], 0);
    assert_eq!(json["tally"]["C"], 0);
    assert_eq!(json["groups_scored"], 28);
    assert_eq!(json["profile"]["primary"], "D");
    assert_eq!(json["profile"]["secondary"], "I");
}
