//! Static per-match roster and outcome data.
//!
//! A `MatchSummary` is produced by the remote match API collaborator and is
//! immutable for the duration of an analysis. `validate` is the fail-fast
//! boundary for malformed input; past it, the core never fabricates roster
//! entries (unknown event ids are simply ignored during replay).

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Participants per match.
pub const ROSTER_SIZE: usize = 10;
/// Participants per absolute team.
pub const TEAM_SIZE: usize = 5;
/// Absolute team ids as reported by the match API.
pub const TEAM_BLUE: u16 = 100;
pub const TEAM_RED: u16 = 200;

/// One roster entry. Static for the whole match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Match-local identifier, 1..=10.
    pub participant_id: u8,
    pub summoner_name: String,
    pub champion_name: String,
    /// Lane/role label as reported by the API (e.g. "MIDDLE", "JUNGLE").
    pub lane: String,
    /// Absolute team id, [`TEAM_BLUE`] or [`TEAM_RED`].
    pub team_id: u16,
    /// Globally unique player identifier.
    pub puuid: String,
}

/// Win/loss outcome for one absolute team.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub team_id: u16,
    pub win: bool,
}

/// Roster plus per-team outcome for one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub participants: Vec<Participant>,
    pub teams: Vec<TeamResult>,
}

impl MatchSummary {
    /// Fail-fast structural validation of collaborator-supplied data.
    ///
    /// Checks: exactly 10 participants split 5/5 across the two absolute
    /// teams, unique participant ids, non-empty identity fields, and one
    /// recorded outcome per team.
    pub fn validate(&self) -> Result<()> {
        if self.participants.len() != ROSTER_SIZE {
            return Err(AnalysisError::InvalidRosterSize {
                expected: ROSTER_SIZE,
                found: self.participants.len(),
            });
        }

        let mut seen_ids = Vec::with_capacity(ROSTER_SIZE);
        for participant in &self.participants {
            if participant.team_id != TEAM_BLUE && participant.team_id != TEAM_RED {
                return Err(AnalysisError::InvalidTeamId {
                    participant_id: participant.participant_id,
                    team_id: participant.team_id,
                });
            }
            if seen_ids.contains(&participant.participant_id) {
                return Err(AnalysisError::DuplicateParticipantId {
                    participant_id: participant.participant_id,
                });
            }
            seen_ids.push(participant.participant_id);

            if participant.puuid.is_empty() {
                return Err(AnalysisError::MissingParticipantField {
                    participant_id: participant.participant_id,
                    field: "puuid",
                });
            }
            if participant.summoner_name.is_empty() {
                return Err(AnalysisError::MissingParticipantField {
                    participant_id: participant.participant_id,
                    field: "summonerName",
                });
            }
        }

        for team_id in [TEAM_BLUE, TEAM_RED] {
            let found = self.participants.iter().filter(|p| p.team_id == team_id).count();
            if found != TEAM_SIZE {
                return Err(AnalysisError::InvalidTeamSplit {
                    team_id,
                    expected: TEAM_SIZE,
                    found,
                });
            }
            if !self.teams.iter().any(|t| t.team_id == team_id) {
                return Err(AnalysisError::MissingTeamOutcome { team_id });
            }
        }

        Ok(())
    }

    /// Look up a roster entry by globally unique player id.
    pub fn participant_by_puuid(&self, puuid: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.puuid == puuid)
    }

    /// Win/loss outcome for an absolute team, if recorded.
    pub fn team_won(&self, team_id: u16) -> Option<bool> {
        self.teams.iter().find(|t| t.team_id == team_id).map(|t| t.win)
    }
}
