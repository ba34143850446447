use thiserror::Error;

/// Errors raised at the boundary where a collaborator hands match data to
/// the analysis core.
///
/// Only structurally malformed input is an error. A tracked player missing
/// from the roster, or a timeline shorter than a requested checkpoint, are
/// normal outcomes handled inside the analysis and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid roster size: expected {expected} participants, found {found}")]
    InvalidRosterSize { expected: usize, found: usize },

    #[error("invalid team split: team {team_id} has {found} participants, expected {expected}")]
    InvalidTeamSplit { team_id: u16, expected: usize, found: usize },

    #[error("participant {participant_id} has invalid team id {team_id}")]
    InvalidTeamId { participant_id: u8, team_id: u16 },

    #[error("duplicate participant id {participant_id} in roster")]
    DuplicateParticipantId { participant_id: u8 },

    #[error("participant {participant_id} is missing required field `{field}`")]
    MissingParticipantField { participant_id: u8, field: &'static str },

    #[error("no win/loss outcome recorded for team {team_id}")]
    MissingTeamOutcome { team_id: u16 },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
