//! Impact Scorer - Kill Exchange Apportionment
//!
//! Consumes the static match summary plus Snapshot Builder outputs and
//! produces a bounded-baseline (but unclamped) pair of running scores per
//! checkpoint: a *solo* score for the tracked player personally and a *team*
//! score for their side collectively, both starting from a 50.0 baseline.
//!
//! Only the minute-1 checkpoint carries a scoring rule today. The later
//! checkpoints (5/10/14/20) are declared with an explicit
//! [`ScoringRule::Undefined`] so callers and tests can tell "rule evaluated"
//! from "rule not yet defined" without guessing; their analyst notes record
//! what a future rule is expected to weigh.

use log::debug;

use crate::analysis::report::PLAYER_NOT_FOUND;
use crate::analysis::snapshot::{build_snapshot, Affiliation, PlayerStatsAtTime};
use crate::error::Result;
use crate::models::{MatchSummary, MatchTimeline};

/// Neutral starting value for every score slot.
pub const BASELINE_SCORE: f32 = 50.0;

/// Score delta for a kill credited to (or a death charged against) a single
/// source.
const KILL_DELTA: f32 = 25.0;
/// Score delta when kill credit is split between the player and the team
/// through an assist.
const ASSIST_DELTA: f32 = 12.5;

/// Score slots: the five declared checkpoints plus one reserved slot.
pub const SCORE_SLOTS: usize = 6;

/// Scoring rule attached to a declared checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringRule {
    /// Minute-1 rule: greedy apportionment of aggregate ally/enemy kill
    /// counts against the tracked player's own kill/assist/death pools.
    KillExchange,
    /// Checkpoint is declared but no scoring rule has been defined for it.
    Undefined,
}

/// A declared checkpoint minute.
#[derive(Debug, Clone, Copy)]
pub struct CheckpointSpec {
    pub minute: usize,
    pub label: &'static str,
    pub rule: ScoringRule,
    /// Analyst intent for this checkpoint, carried from the original
    /// performance plan; informational only until a rule exists.
    pub note: &'static str,
}

/// The declared checkpoint table, in evaluation order. Slot indices into
/// [`ImpactScoreState`] follow this order; the sixth slot is reserved.
pub const CHECKPOINTS: [CheckpointSpec; 5] = [
    CheckpointSpec {
        minute: 1,
        label: "1 MIN",
        rule: ScoringRule::KillExchange,
        note: "kills, deaths, gold; before minions spawn, lanes irrelevant",
    },
    CheckpointSpec {
        minute: 5,
        label: "5 MIN",
        rule: ScoringRule::Undefined,
        note: "kills, deaths, gold; lanes very important",
    },
    CheckpointSpec {
        minute: 10,
        label: "10 MIN",
        rule: ScoringRule::Undefined,
        note: "kills, deaths, gold; lanes important, compare objectives",
    },
    CheckpointSpec {
        minute: 14,
        label: "14 MIN",
        rule: ScoringRule::Undefined,
        note: "gold and turrets; plating falls after, objectives, cs swings",
    },
    CheckpointSpec {
        minute: 20,
        label: "20 MIN",
        rule: ScoringRule::Undefined,
        note: "gold, kills, deaths; objectives, cs swings",
    },
];

/// Outcome of one score slot after an analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckpointStatus {
    /// Slot never evaluated (reserved slot, or analysis ended early).
    #[default]
    Pending,
    /// Checkpoint skipped: the match ended before this minute, or the
    /// tracked player had no snapshot row at it.
    NotReached,
    /// Checkpoint declared but its scoring rule is not defined yet.
    RuleUndefined,
    /// The checkpoint's rule ran; the score slots hold its result.
    Scored,
}

/// Per-analysis score accumulator: parallel solo/team slot arrays at the
/// 50.0 baseline plus a per-slot status. Created once per
/// [`analyze_match`] call; never shared across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactScoreState {
    pub solo: [f32; SCORE_SLOTS],
    pub team: [f32; SCORE_SLOTS],
    pub status: [CheckpointStatus; SCORE_SLOTS],
}

impl Default for ImpactScoreState {
    fn default() -> Self {
        Self {
            solo: [BASELINE_SCORE; SCORE_SLOTS],
            team: [BASELINE_SCORE; SCORE_SLOTS],
            status: [CheckpointStatus::default(); SCORE_SLOTS],
        }
    }
}

/// Result of a whole-match analysis: the rendered report plus the underlying
/// score state for callers that want the raw numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchImpactReport {
    pub report: String,
    pub state: ImpactScoreState,
}

/// Analyze one match for the tracked player.
///
/// Fails fast on a structurally malformed summary. A tracked player absent
/// from the roster yields the fixed "player not found" sentinel report with
/// untouched scores, not an error. Checkpoints whose snapshot is unavailable
/// are skipped, leaving a partial report over the checkpoints that ran.
pub fn analyze_match(
    summary: &MatchSummary,
    timeline: &MatchTimeline,
    tracked_puuid: &str,
) -> Result<MatchImpactReport> {
    summary.validate()?;

    let mut state = ImpactScoreState::default();

    let tracked = match summary.participant_by_puuid(tracked_puuid) {
        Some(tracked) => tracked,
        None => {
            return Ok(MatchImpactReport { report: PLAYER_NOT_FOUND.to_string(), state });
        }
    };
    let tracked_name = tracked.summoner_name.clone();

    for (slot, checkpoint) in CHECKPOINTS.iter().enumerate() {
        let snapshots = build_snapshot(checkpoint.minute, summary, timeline, tracked_puuid);
        if snapshots.is_empty() {
            debug!("skipping checkpoint {}: snapshot unavailable", checkpoint.label);
            state.status[slot] = CheckpointStatus::NotReached;
            continue;
        }

        // The tracked player's own row is located by display name.
        let own = match snapshots.iter().find(|s| s.summoner_name == tracked_name) {
            Some(own) => own,
            None => {
                debug!("skipping checkpoint {}: tracked player has no row", checkpoint.label);
                state.status[slot] = CheckpointStatus::NotReached;
                continue;
            }
        };

        match checkpoint.rule {
            ScoringRule::KillExchange => {
                let (solo, team) =
                    score_kill_exchange(own, &snapshots, state.solo[slot], state.team[slot]);
                state.solo[slot] = solo;
                state.team[slot] = team;
                state.status[slot] = CheckpointStatus::Scored;
            }
            ScoringRule::Undefined => {
                state.status[slot] = CheckpointStatus::RuleUndefined;
            }
        }
    }

    let report = super::report::render_report(&state);
    Ok(MatchImpactReport { report, state })
}

/// The minute-1 kill-exchange rule.
///
/// Apportions aggregate kill *counts*, not individual kill events: the
/// tracked player's own kill/assist/death totals act as pools consumed
/// greedily against the team-wide counts. Each ally kill is worth 25.0 to
/// the solo score while the kill pool lasts, then 12.5 to both scores while
/// the assist pool lasts, then 25.0 to the team score. Each enemy kill
/// charges 25.0 against the solo score while the death pool lasts, then
/// against the team score. No clamping at either end.
fn score_kill_exchange(
    own: &PlayerStatsAtTime,
    snapshots: &[PlayerStatsAtTime],
    mut solo: f32,
    mut team: f32,
) -> (f32, f32) {
    let ally_kill_count: u32 = snapshots
        .iter()
        .filter(|s| s.affiliation == Affiliation::Mine && s.kills > 0)
        .map(|s| s.kills)
        .sum();
    let enemy_kill_count: u32 = snapshots
        .iter()
        .filter(|s| s.affiliation == Affiliation::Other && s.kills > 0)
        .map(|s| s.kills)
        .sum();

    let mut kill_pool = own.kills;
    let mut assist_pool = own.assists;
    let mut death_pool = own.deaths;

    for _ in 0..ally_kill_count {
        if kill_pool > 0 {
            kill_pool -= 1;
            solo += KILL_DELTA;
        } else if assist_pool > 0 {
            assist_pool -= 1;
            solo += ASSIST_DELTA;
            team += ASSIST_DELTA;
        } else {
            team += KILL_DELTA;
        }
    }

    for _ in 0..enemy_kill_count {
        if death_pool > 0 {
            death_pool -= 1;
            solo -= KILL_DELTA;
        } else {
            team -= KILL_DELTA;
        }
    }

    (solo, team)
}
