//! Snapshot Builder - Checkpoint State Reconstruction
//!
//! Replays per-minute timeline frames up to a requested checkpoint minute,
//! producing one consistent [`PlayerStatsAtTime`] per participant at that
//! instant.
//!
//! ## Algorithm
//! 1. Seed one row per participant from the static roster; label each row
//!    "mine"/"other" relative to the tracked player's absolute team.
//! 2. Replay frames 1..=checkpoint (frame 0 precedes minute 1 and carries
//!    no replayable events):
//!    - instantaneous fields (gold/cs/damage/level) are overwritten with the
//!      frame's values, last write wins;
//!    - every champion-kill event increments the victim's death counter, the
//!      killer's kill counter, and each assistant's assist counter. Ids not
//!      present in the roster (including killer id 0, the environmental
//!      kill) fall through silently.
//! 3. Return all rows, unordered.
//!
//! The result depends only on (timeline, checkpoint minute, tracked player
//! id); replaying identical inputs yields identical counters.

use std::collections::HashMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{MatchSummary, MatchTimeline, TimelineEvent};

/// Team label relative to the tracked player, derived per analysis.
///
/// Never a raw absolute team id: two participants are `Mine` if and only if
/// they share the tracked player's absolute team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affiliation {
    Mine,
    Other,
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Affiliation::Mine => write!(f, "mine"),
            Affiliation::Other => write!(f, "other"),
        }
    }
}

/// One participant's reconstructed state at a checkpoint minute.
///
/// Kills/deaths/assists are cumulative from game start and monotonically
/// non-decreasing in the checkpoint minute. Gold, creep score, damage, and
/// level are the checkpoint frame's own values (already cumulative in the
/// source frames, so they are overwritten rather than accumulated).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsAtTime {
    pub participant_id: u8,
    pub summoner_name: String,
    pub champion_name: String,
    pub lane: String,
    pub affiliation: Affiliation,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub gold: u32,
    pub creep_score: u32,
    pub damage_dealt: u32,
    pub level: u32,
}

impl PlayerStatsAtTime {
    /// "K/D/A" display string.
    pub fn kda(&self) -> String {
        format!("{}/{}/{}", self.kills, self.deaths, self.assists)
    }
}

/// Reconstruct every participant's state at `checkpoint_minute`.
///
/// Returns an empty vec when the checkpoint was never reached (the timeline
/// holds fewer than `checkpoint_minute + 1` frames) or when `tracked_puuid`
/// matches no roster entry (relative labeling is impossible without a
/// reference player). Both are normal outcomes, not faults.
pub fn build_snapshot(
    checkpoint_minute: usize,
    summary: &MatchSummary,
    timeline: &MatchTimeline,
    tracked_puuid: &str,
) -> Vec<PlayerStatsAtTime> {
    if !timeline.reaches_minute(checkpoint_minute) {
        debug!(
            "checkpoint minute {} not reached: timeline has {} frames",
            checkpoint_minute,
            timeline.frames.len()
        );
        return Vec::new();
    }

    let my_team = match summary.participant_by_puuid(tracked_puuid) {
        Some(tracked) => tracked.team_id,
        None => {
            debug!("tracked puuid not in roster, cannot derive relative teams");
            return Vec::new();
        }
    };

    // Arena keyed by participant id; all replay writes go through it.
    let mut by_id: HashMap<u8, PlayerStatsAtTime> = summary
        .participants
        .iter()
        .map(|p| {
            (
                p.participant_id,
                PlayerStatsAtTime {
                    participant_id: p.participant_id,
                    summoner_name: p.summoner_name.clone(),
                    champion_name: p.champion_name.clone(),
                    lane: p.lane.clone(),
                    affiliation: if p.team_id == my_team {
                        Affiliation::Mine
                    } else {
                        Affiliation::Other
                    },
                    kills: 0,
                    deaths: 0,
                    assists: 0,
                    gold: 0,
                    creep_score: 0,
                    damage_dealt: 0,
                    level: 0,
                },
            )
        })
        .collect();

    // Frame 0 is the start-of-game frame and precedes minute 1.
    for frame in &timeline.frames[1..=checkpoint_minute] {
        for (id, pf) in &frame.participant_frames {
            if let Some(stats) = by_id.get_mut(id) {
                stats.gold = pf.total_gold;
                stats.creep_score = pf.creep_score();
                stats.damage_dealt = pf.damage_dealt_to_champions;
                stats.level = pf.level;
            }
        }

        for event in &frame.events {
            if let TimelineEvent::ChampionKill { killer_id, victim_id, assisting_participant_ids } =
                event
            {
                if let Some(victim) = by_id.get_mut(victim_id) {
                    victim.deaths += 1;
                }
                // Killer id 0 (environmental) has no roster entry and falls
                // through here, as does any id outside the roster.
                if let Some(killer) = by_id.get_mut(killer_id) {
                    killer.kills += 1;
                }
                for assist_id in assisting_participant_ids {
                    if let Some(assistant) = by_id.get_mut(assist_id) {
                        assistant.assists += 1;
                    }
                }
            }
        }
    }

    by_id.into_values().collect()
}
