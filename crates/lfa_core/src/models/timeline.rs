//! Per-minute match timeline data.
//!
//! A timeline is an ordered sequence of frames, one per elapsed minute.
//! Frame index 0 is the start of the game; frame N records the absolute
//! per-player counters at minute N plus the discrete events that occurred
//! during that minute.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ordered frame sequence for one match. Index-addressable, index 0 = start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTimeline {
    pub frames: Vec<TimelineFrame>,
}

impl MatchTimeline {
    /// True when the match lasted long enough to record the given minute.
    pub fn reaches_minute(&self, minute: usize) -> bool {
        self.frames.len() > minute
    }
}

/// State of all participants at one elapsed minute, plus that minute's events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFrame {
    /// Absolute counters per participant id at this minute.
    #[serde(default)]
    pub participant_frames: HashMap<u8, ParticipantFrame>,
    /// Events that occurred during this minute, in recorded order.
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

/// Absolute (cumulative-from-game-start) counters for one participant at
/// one recorded minute.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantFrame {
    pub total_gold: u32,
    pub minions_killed: u32,
    pub jungle_minions_killed: u32,
    pub level: u32,
    pub damage_dealt_to_champions: u32,
}

impl ParticipantFrame {
    /// Creep score: lane minions plus jungle minions.
    pub fn creep_score(&self) -> u32 {
        self.minions_killed + self.jungle_minions_killed
    }
}

/// Timeline event, discriminated by the source API's `type` tag.
///
/// Only champion kills are consumed by the analysis; every other kind
/// deserializes into `Other` and is skipped during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum TimelineEvent {
    ChampionKill {
        /// 0 when the kill had no player source (environmental kill).
        killer_id: u8,
        victim_id: u8,
        #[serde(default)]
        assisting_participant_ids: Vec<u8>,
    },
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_champion_kill_wire_format() {
        let json = r#"{
            "type": "CHAMPION_KILL",
            "killerId": 3,
            "victimId": 7,
            "assistingParticipantIds": [1, 2]
        }"#;
        let event: TimelineEvent = serde_json::from_str(json).expect("kill event parses");
        assert_eq!(
            event,
            TimelineEvent::ChampionKill {
                killer_id: 3,
                victim_id: 7,
                assisting_participant_ids: vec![1, 2],
            }
        );
    }

    #[test]
    fn test_unknown_event_kind_collapses_to_other() {
        let json = r#"{"type": "BUILDING_KILL"}"#;
        let event: TimelineEvent = serde_json::from_str(json).expect("unknown kind still parses");
        assert_eq!(event, TimelineEvent::Other);
    }

    #[test]
    fn test_assist_list_defaults_to_empty() {
        let json = r#"{"type": "CHAMPION_KILL", "killerId": 0, "victimId": 4}"#;
        let event: TimelineEvent = serde_json::from_str(json).expect("kill without assists parses");
        assert_eq!(
            event,
            TimelineEvent::ChampionKill {
                killer_id: 0,
                victim_id: 4,
                assisting_participant_ids: Vec::new(),
            }
        );
    }

    #[test]
    fn test_frame_map_keys_are_participant_ids() {
        let json = r#"{
            "participantFrames": {
                "1": {"totalGold": 500, "minionsKilled": 3, "jungleMinionsKilled": 1,
                      "level": 2, "damageDealtToChampions": 120}
            },
            "events": []
        }"#;
        let frame: TimelineFrame = serde_json::from_str(json).expect("frame parses");
        let pf = frame.participant_frames.get(&1).expect("participant 1 present");
        assert_eq!(pf.total_gold, 500);
        assert_eq!(pf.creep_score(), 4, "creep score = minions + jungle minions");
    }

    #[test]
    fn test_reaches_minute() {
        let timeline =
            MatchTimeline { frames: vec![TimelineFrame::default(), TimelineFrame::default()] };
        assert!(timeline.reaches_minute(0));
        assert!(timeline.reaches_minute(1));
        assert!(!timeline.reaches_minute(2), "two frames record minutes 0 and 1 only");
    }
}
