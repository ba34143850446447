//! Checkpoint analysis: snapshot reconstruction, impact scoring, reporting.
//!
//! Evaluated in sequence per match: the Snapshot Builder replays the
//! timeline up to each checkpoint minute, the Impact Scorer apportions kill
//! credit/blame between the tracked player and their team, and the Report
//! Generator renders the result. The builder has no dependency on the
//! scorer; the scorer consumes the builder's output rows.

pub mod impact;
pub mod report;
pub mod snapshot;

pub use impact::{
    analyze_match, CheckpointSpec, CheckpointStatus, ImpactScoreState, MatchImpactReport,
    ScoringRule, BASELINE_SCORE, CHECKPOINTS, SCORE_SLOTS,
};
pub use report::{render_report, render_scoreboard, PLAYER_NOT_FOUND};
pub use snapshot::{build_snapshot, Affiliation, PlayerStatsAtTime};
