pub mod rank;
pub mod team;
pub mod tie;

pub use rank::RankEntry;
pub use team::Team;
pub use tie::Tie;
