//! # lfa_core - Match Impact Analysis Core
//!
//! Reconstructs every participant's in-game state at fixed checkpoint
//! minutes from a match's per-minute timeline, then apportions kill
//! credit/blame between the tracked player and their team as a pair of
//! running impact scores.
//!
//! ## Features
//! - Deterministic replay: identical inputs always yield identical counters
//! - Pure, synchronous core — no I/O, no shared state between analyses
//! - Skips unreached checkpoints instead of failing (partial reports)
//!
//! Fetching match data, resolving the local player's identity, caching it,
//! and rendering the report are the embedding application's collaborators;
//! this crate only consumes their already-parsed structures.

pub mod analysis;
pub mod error;
pub mod models;

pub use analysis::{
    analyze_match, build_snapshot, render_report, render_scoreboard, Affiliation, CheckpointSpec,
    CheckpointStatus, ImpactScoreState, MatchImpactReport, PlayerStatsAtTime, ScoringRule,
    BASELINE_SCORE, CHECKPOINTS, PLAYER_NOT_FOUND, SCORE_SLOTS,
};
pub use error::{AnalysisError, Result};
pub use models::{
    MatchSummary, MatchTimeline, Participant, ParticipantFrame, TeamResult, TimelineEvent,
    TimelineFrame,
};
