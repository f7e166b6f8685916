use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use units::{Division, EventKind, Measurement};

/// A competing team and its raw event results.
///
/// Event columns hold canonical values (seconds or centimeters) exactly
/// as the store keeps them, sentinel encoding included; `result` and
/// `set_result` translate through the tagged [`Measurement`] so nothing
/// above this type handles sentinels directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: i64,
    #[sqlx(rename = "School")]
    pub school: Option<String>,
    #[sqlx(rename = "Name")]
    pub name: String,
    #[sqlx(rename = "Division", try_from = "String")]
    pub division: Division,
    #[sqlx(rename = "Mucking")]
    pub mucking: Option<f64>,
    #[sqlx(rename = "Swede Saw")]
    pub swede_saw: Option<f64>,
    #[sqlx(rename = "Track Stand")]
    pub track_stand: Option<f64>,
    #[sqlx(rename = "Gold Pan")]
    pub gold_pan: Option<f64>,
    #[sqlx(rename = "Hand Steel")]
    pub hand_steel: Option<f64>,
    #[sqlx(rename = "Jackleg")]
    pub jackleg: Option<f64>,
    #[sqlx(rename = "Survey")]
    pub survey: Option<f64>,
}

impl Team {
    /// Raw stored value for an event, sentinel encoding and all.
    pub fn raw(&self, event: EventKind) -> Option<f64> {
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

    pub fn result(&self, event: EventKind) -> Measurement {
        Measurement::from_raw(self.raw(event), event)
    }

    pub fn set_result(&mut self, event: EventKind, value: Measurement) {
        let raw = value.to_raw(event);
        match event {
            EventKind::Mucking => self.mucking = raw,
            EventKind::SwedeSaw => self.swede_saw = raw,
            EventKind::TrackStand => self.track_stand = raw,
            EventKind::GoldPan => self.gold_pan = raw,
            EventKind::HandSteel => self.hand_steel = raw,
            EventKind::Jackleg => self.jackleg = raw,
            EventKind::Survey => self.survey = raw,
        }
    }
}
