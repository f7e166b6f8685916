use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use units::EventKind;

/// An event-level dead heat between two teams of the same division,
/// recorded and resolved by explicit operator action. The scoring pass
/// never creates or consumes these rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Tie {
    pub id: i64,
    pub team_1_id: i64,
    pub team_2_id: i64,
    #[sqlx(try_from = "String")]
    pub event: EventKind,
    /// `None` until the tie-breaker has been run.
    pub winner: Option<i64>,
}
