use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use units::{Division, EventKind};

use crate::models::Team;

/// One row of the ranks projection: the same identity columns as a team,
/// with each event holding an integer placing (1 = best) instead of a
/// raw measurement.
///
/// The projection is rebuilt wholesale by every scoring pass and is never
/// edited directly. `ties_won` is persisted but not yet folded into
/// `sum`; tie-breaker results live in their own table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RankEntry {
    pub id: i64,
    #[sqlx(rename = "School")]
    pub school: Option<String>,
    #[sqlx(rename = "Name")]
    pub name: String,
    #[sqlx(rename = "Division", try_from = "String")]
    pub division: Division,
    #[sqlx(rename = "Mucking")]
    pub mucking: i64,
    #[sqlx(rename = "Swede Saw")]
    pub swede_saw: i64,
    #[sqlx(rename = "Track Stand")]
    pub track_stand: i64,
    #[sqlx(rename = "Gold Pan")]
    pub gold_pan: i64,
    #[sqlx(rename = "Hand Steel")]
    pub hand_steel: i64,
    #[sqlx(rename = "Jackleg")]
    pub jackleg: i64,
    #[sqlx(rename = "Survey")]
    pub survey: i64,
    #[sqlx(rename = "Sum")]
    pub sum: i64,
    #[sqlx(rename = "Ties Won")]
    pub ties_won: Option<i64>,
}

impl RankEntry {
    /// A fresh, unplaced entry carrying a team's identity columns.
    pub fn from_team(team: &Team) -> Self {
        Self {
            id: team.id,
            school: team.school.clone(),
            name: team.name.clone(),
            division: team.division,
            mucking: 0,
            swede_saw: 0,
            track_stand: 0,
            gold_pan: 0,
            hand_steel: 0,
            jackleg: 0,
            survey: 0,
            sum: 0,
            ties_won: None,
        }
    }

    pub fn placing(&self, event: EventKind) -> i64 {
        match event {
            EventKind::Mucking => self.mucking,
            EventKind::SwedeSaw => self.swede_saw,
            EventKind::TrackStand => self.track_stand,
            EventKind::GoldPan => self.gold_pan,
            EventKind::HandSteel => self.hand_steel,
            EventKind::Jackleg => self.jackleg,
            EventKind::Survey => self.survey,
        }
    }

    pub fn set_placing(&mut self, event: EventKind, placing: i64) {
        match event {
            EventKind::Mucking => self.mucking = placing,
            EventKind::SwedeSaw => self.swede_saw = placing,
            EventKind::TrackStand => self.track_stand = placing,
            EventKind::GoldPan => self.gold_pan = placing,
            EventKind::HandSteel => self.hand_steel = placing,
            EventKind::Jackleg => self.jackleg = placing,
            EventKind::Survey => self.survey = placing,
        }
    }
}
