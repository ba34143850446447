//! Data model for one match, as handed over by the match-history
//! collaborator: the static roster/outcome summary and the per-minute
//! timeline. All structures are read-only for the duration of an analysis.

pub mod summary;
pub mod timeline;

pub use summary::{MatchSummary, Participant, TeamResult, ROSTER_SIZE, TEAM_BLUE, TEAM_RED, TEAM_SIZE};
pub use timeline::{MatchTimeline, ParticipantFrame, TimelineEvent, TimelineFrame};
