//! Report Generator
//!
//! Pure formatting over [`ImpactScoreState`] and snapshot rows. No state, no
//! failure modes: malformed numbers cannot reach this module given the
//! scorer's contract.

use crate::analysis::impact::{CheckpointStatus, ImpactScoreState, CHECKPOINTS};
use crate::analysis::snapshot::PlayerStatsAtTime;
use crate::models::{MatchSummary, TEAM_BLUE, TEAM_RED};

/// Fixed sentinel emitted when the tracked player is not in the roster.
pub const PLAYER_NOT_FOUND: &str = "Tracked player was not found in the match roster.";

/// One report line for a scored checkpoint.
pub fn format_checkpoint_line(label: &str, solo: f32, team: f32) -> String {
    format!("{label} (50 baseline): Your Score: {solo:.1}/100  Team Score: {team:.1}/100")
}

/// Render one line per scored checkpoint; skipped and rule-undefined slots
/// emit nothing.
pub fn render_report(state: &ImpactScoreState) -> String {
    let mut out = String::new();
    for (slot, checkpoint) in CHECKPOINTS.iter().enumerate() {
        if state.status[slot] == CheckpointStatus::Scored {
            out.push_str(&format_checkpoint_line(
                checkpoint.label,
                state.solo[slot],
                state.team[slot],
            ));
            out.push('\n');
        }
    }
    out
}

/// Render the 5v5 scoreboard at a checkpoint: both teams side by side with
/// name (champion), K/D/A and damage columns, `(YOU)` marking the tracked
/// player and `(Won)`/`(Lost)` per team from the match outcome.
pub fn render_scoreboard(
    summary: &MatchSummary,
    snapshots: &[PlayerStatsAtTime],
    tracked_puuid: &str,
) -> String {
    let rows_for = |team_id: u16| -> Vec<(String, String, String)> {
        let mut members: Vec<_> =
            summary.participants.iter().filter(|p| p.team_id == team_id).collect();
        members.sort_by_key(|p| p.participant_id);
        members
            .into_iter()
            .map(|p| {
                let mut name = format!("{} ({})", p.summoner_name, p.champion_name);
                if p.puuid == tracked_puuid {
                    name.push_str(" (YOU)");
                }
                let stats = snapshots.iter().find(|s| s.participant_id == p.participant_id);
                let kda = stats.map(|s| s.kda()).unwrap_or_else(|| "0/0/0".to_string());
                let damage = format_thousands(stats.map(|s| s.damage_dealt).unwrap_or(0));
                (name, kda, damage)
            })
            .collect()
    };

    let team1 = rows_for(TEAM_BLUE);
    let team2 = rows_for(TEAM_RED);

    let width_of = |pick: fn(&(String, String, String)) -> usize, floor: usize| -> usize {
        team1.iter().chain(team2.iter()).map(pick).max().unwrap_or(0).max(floor) + 2
    };
    let name_width = width_of(|row| row.0.len(), "Summoner (Champion)".len());
    let kda_width = width_of(|row| row.1.len(), "KDA".len());
    let damage_width = width_of(|row| row.2.len(), "Damage Dealt".len());
    let team_width = name_width + kda_width + damage_width;

    let outcome = |team_id: u16| {
        if summary.team_won(team_id) == Some(true) {
            "(Won)"
        } else {
            "(Lost)"
        }
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{:<team_width$}    Team 2 {}\n",
        format!("Team 1 {}", outcome(TEAM_BLUE)),
        outcome(TEAM_RED),
    ));
    out.push_str(&"-".repeat(team_width * 2 + 4));
    out.push('\n');

    for (left, right) in team1.iter().zip(team2.iter()) {
        out.push_str(&format!(
            "{:<name_width$}{:<kda_width$}{:<damage_width$}    {:<name_width$}{:<kda_width$}{}\n",
            left.0, left.1, left.2, right.0, right.1, right.2,
        ));
    }
    out
}

/// Group digits with thousands separators ("12345" -> "12,345").
fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
