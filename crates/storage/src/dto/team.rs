use serde::Deserialize;
use units::Division;
use validator::Validate;

/// Payload for registering a team. Bounds match the store schema
/// (School varchar(120), Name varchar(80)).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(max = 120))]
    pub school: Option<String>,
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    pub division: Division,
}

/// Payload for editing a team's identity columns. Event results travel
/// through the per-event update path instead.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(max = 120))]
    pub school: Option<String>,
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    pub division: Division,
}
