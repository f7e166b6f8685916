pub mod rank;
pub mod team;
pub mod tie;

pub use rank::RankRepository;
pub use team::TeamRepository;
pub use tie::TieRepository;
