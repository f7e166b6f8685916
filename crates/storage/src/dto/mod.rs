pub mod team;
pub mod tie;

pub use team::{CreateTeamRequest, UpdateTeamRequest};
pub use tie::CreateTieRequest;
