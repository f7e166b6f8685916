pub mod scoring;

pub use scoring::{run_scoring_pass, score_teams};
