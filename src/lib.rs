//! # disc: forced-choice DISC assessment engine
//!
//! Implements the scoring core of a DISC behavioral assessment: a fixed
//! 28-group inventory of four workplace descriptors each, transient session
//! state collecting one "most" and one "least" mark per group, and a pure
//! scorer that tallies "most" marks into a primary/secondary style profile.
//!
//! ## Flow
//!
//! | Step | Module | Description |
//! |------|--------|-------------|
//! | 1 | [`inventory`] | Load the standard 28-group question inventory |
//! | 2 | [`session`] | Collect most/least marks with forced-choice toggle rules |
//! | 3 | [`scoring`] | Tally "most" marks, derive primary/secondary, build the report |
//! | 4 | [`styles`] | Descriptive catalog the display layer pairs with the result |
//!
//! [`simulation`] adds seeded Monte Carlo respondents and aggregate
//! statistics over the same scoring path (see the `disc-simulate` binary).
//!
//! ## Scoring contract
//!
//! Scoring is a pure function of a complete answer set: every group must
//! hold both marks on distinct options, or the scorer signals
//! [`scoring::ScoreError::IncompleteGroup`]. Only "most" marks feed the
//! tally. The four counts are ordered descending with ties broken by the
//! fixed priority D > I > S > C, and the runner-up is reported as a
//! secondary style only when both top counts are nonzero and differ by at
//! most [`constants::SECONDARY_GAP_MAX`].

pub mod constants;
pub mod env_config;
pub mod inventory;
pub mod scoring;
pub mod session;
pub mod simulation;
pub mod styles;
pub mod types;
