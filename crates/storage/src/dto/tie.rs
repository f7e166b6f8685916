use serde::Deserialize;
use units::EventKind;

/// Payload for recording a dead heat. Both teams must compete in the
/// same division and any winner must be one of the pair; the repository
/// enforces both.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTieRequest {
    pub team_1_id: i64,
    pub team_2_id: i64,
    pub event: EventKind,
    pub winner: Option<i64>,
}
