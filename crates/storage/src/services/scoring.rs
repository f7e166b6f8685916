use std::cmp::Ordering;
use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{debug, info};

use units::{Division, EventKind, Measurement, SortOrder};

use crate::error::Result;
use crate::models::{RankEntry, Team};
use crate::repository::{RankRepository, TeamRepository};

/// Order two raw stored values the way the store's `ORDER BY` does:
/// NULL sorts before any real value, so an unrecorded result places
/// first in ascending events and last in descending ones.
fn compare_raw(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

/// Compute the ranks projection for the whole field.
///
/// For every division and event, teams are ordered by raw value in the
/// event's direction and given sequential placings starting at 1.
/// Disqualified teams are held out with a provisional placing of 0,
/// then collectively assigned `total - dq + 1`, one slot past the last
/// real placing. A team's total is the plain sum of its seven placings.
///
/// Teams with identical raw values still receive distinct sequential
/// placings in row order, and recorded tie-breaker wins never reach the
/// total.
// TODO: fold ties into scoring: equal raw values should share a placing,
// cascading the following placings down, and Ties Won should break equal
// totals.
pub fn score_teams(teams: &[Team]) -> Vec<RankEntry> {
    info!("scoring competition ({} teams)", teams.len());

    let mut entries: Vec<RankEntry> = teams.iter().map(RankEntry::from_team).collect();
    let index_of: HashMap<i64, usize> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.id, i))
        .collect();

    debug!("computing initial placings");
    for division in Division::ALL {
        for event in EventKind::ALL {
            let mut field: Vec<&Team> =
                teams.iter().filter(|t| t.division == division).collect();
            field.sort_by(|a, b| {
                let ordering = compare_raw(a.raw(event), b.raw(event));
                match event.sort_order() {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });

            for (i, team) in field.iter().enumerate() {
                let placing = if team.result(event) == Measurement::Disqualified {
                    0
                } else {
                    i as i64 + 1
                };
                entries[index_of[&team.id]].set_placing(event, placing);
            }
        }
    }

    debug!("computing disqualification scores");
    for division in Division::ALL {
        for event in EventKind::ALL {
            let total = entries.iter().filter(|e| e.division == division).count() as i64;
            let dq = entries
                .iter()
                .filter(|e| e.division == division && e.placing(event) == 0)
                .count() as i64;

            // Nothing to rescore without both participants and DQ's.
            if total > 0 && dq > 0 {
                let dq_score = total - dq + 1;
                for entry in entries
                    .iter_mut()
                    .filter(|e| e.division == division && e.placing(event) == 0)
                {
                    entry.set_placing(event, dq_score);
                }
            }
        }
    }

    debug!("computing total scores");
    for entry in &mut entries {
        entry.sum = EventKind::ALL.iter().map(|&e| entry.placing(e)).sum();
    }

    entries
}

/// Read every team, score the field, and replace the ranks projection.
///
/// The whole projection write happens in one transaction, so an
/// interrupted pass leaves the previous projection readable and a rerun
/// over unchanged raw data produces the identical projection.
pub async fn run_scoring_pass(pool: &SqlitePool) -> Result<usize> {
    let teams = TeamRepository::new(pool).list().await?;
    let entries = score_teams(&teams);
    RankRepository::new(pool).replace_all(&entries).await?;

    info!("scoring pass wrote {} rank rows", entries.len());
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: i64, division: Division) -> Team {
        Team {
            id,
            school: None,
            name: format!("Team {id}"),
            division,
            mucking: None,
            swede_saw: None,
            track_stand: None,
            gold_pan: None,
            hand_steel: None,
            jackleg: None,
            survey: None,
        }
    }

    fn team_with(id: i64, division: Division, event: EventKind, value: Measurement) -> Team {
        let mut t = team(id, division);
        t.set_result(event, value);
        t
    }

    fn placing_of(entries: &[RankEntry], id: i64, event: EventKind) -> i64 {
        entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.placing(event))
            .unwrap()
    }

    #[test]
    fn test_ascending_event_places_fastest_first() {
        let event = EventKind::Mucking;
        let teams = vec![
            team_with(1, Division::Mens, event, Measurement::Recorded(15.0)),
            team_with(2, Division::Mens, event, Measurement::Recorded(10.0)),
            team_with(3, Division::Mens, event, Measurement::Recorded(12.0)),
        ];

        let entries = score_teams(&teams);
        assert_eq!(placing_of(&entries, 2, event), 1);
        assert_eq!(placing_of(&entries, 3, event), 2);
        assert_eq!(placing_of(&entries, 1, event), 3);
    }

    #[test]
    fn test_descending_event_places_longest_first() {
        let event = EventKind::HandSteel;
        let teams = vec![
            team_with(1, Division::Womens, event, Measurement::Recorded(30.0)),
            team_with(2, Division::Womens, event, Measurement::Recorded(50.0)),
            team_with(3, Division::Womens, event, Measurement::Recorded(40.0)),
        ];

        let entries = score_teams(&teams);
        assert_eq!(placing_of(&entries, 2, event), 1);
        assert_eq!(placing_of(&entries, 3, event), 2);
        assert_eq!(placing_of(&entries, 1, event), 3);
    }

    #[test]
    fn test_disqualified_teams_share_the_slot_past_last_place() {
        let event = EventKind::Mucking;
        let teams = vec![
            team_with(1, Division::CoEd, event, Measurement::Recorded(10.0)),
            team_with(2, Division::CoEd, event, Measurement::Disqualified),
            team_with(3, Division::CoEd, event, Measurement::Recorded(15.0)),
            team_with(4, Division::CoEd, event, Measurement::Disqualified),
            team_with(5, Division::CoEd, event, Measurement::Recorded(12.0)),
        ];

        let entries = score_teams(&teams);
        assert_eq!(placing_of(&entries, 1, event), 1);
        assert_eq!(placing_of(&entries, 5, event), 2);
        assert_eq!(placing_of(&entries, 3, event), 3);
        // total - dq + 1 = 5 - 2 + 1
        assert_eq!(placing_of(&entries, 2, event), 4);
        assert_eq!(placing_of(&entries, 4, event), 4);
    }

    #[test]
    fn test_disqualification_on_descending_event() {
        let event = EventKind::Jackleg;
        let teams = vec![
            team_with(1, Division::Mens, event, Measurement::Recorded(80.0)),
            team_with(2, Division::Mens, event, Measurement::Disqualified),
            team_with(3, Division::Mens, event, Measurement::Recorded(95.0)),
        ];

        let entries = score_teams(&teams);
        assert_eq!(placing_of(&entries, 3, event), 1);
        assert_eq!(placing_of(&entries, 1, event), 2);
        assert_eq!(placing_of(&entries, 2, event), 3);
    }

    #[test]
    fn test_divisions_are_scored_independently() {
        let event = EventKind::GoldPan;
        let teams = vec![
            team_with(1, Division::Mens, event, Measurement::Recorded(20.0)),
            team_with(2, Division::Womens, event, Measurement::Recorded(10.0)),
            team_with(3, Division::Mens, event, Measurement::Recorded(10.0)),
        ];

        let entries = score_teams(&teams);
        assert_eq!(placing_of(&entries, 3, event), 1);
        assert_eq!(placing_of(&entries, 1, event), 2);
        // Alone in her division, regardless of the men's field.
        assert_eq!(placing_of(&entries, 2, event), 1);
    }

    #[test]
    fn test_sum_aggregates_all_seven_placings() {
        // A single team places 1st in every event by default.
        let mut solo = team(1, Division::Alumni);
        for event in EventKind::ALL {
            solo.set_result(event, Measurement::Recorded(42.0));
        }
        let entries = score_teams(&[solo]);
        assert_eq!(entries[0].sum, 7);

        let placings = [1, 2, 1, 3, 2, 1, 4];
        let mut entry = RankEntry::from_team(&team(2, Division::Alumni));
        for (event, placing) in EventKind::ALL.into_iter().zip(placings) {
            entry.set_placing(event, placing);
        }
        let sum: i64 = EventKind::ALL.iter().map(|&e| entry.placing(e)).sum();
        assert_eq!(sum, 14);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let teams = vec![
            team_with(1, Division::Mens, EventKind::Mucking, Measurement::Recorded(10.0)),
            team_with(2, Division::Mens, EventKind::Mucking, Measurement::Disqualified),
            team_with(3, Division::Womens, EventKind::Survey, Measurement::Recorded(55.5)),
        ];

        assert_eq!(score_teams(&teams), score_teams(&teams));
    }

    #[test]
    fn test_unrecorded_results_sort_like_the_store() {
        let event = EventKind::SwedeSaw;
        let teams = vec![
            team_with(1, Division::Mens, event, Measurement::Recorded(30.0)),
            team(2, Division::Mens),
        ];

        let entries = score_teams(&teams);
        // NULL sorts first in an ascending order; preserved store quirk.
        assert_eq!(placing_of(&entries, 2, event), 1);
        assert_eq!(placing_of(&entries, 1, event), 2);

        let event = EventKind::HandSteel;
        let teams = vec![
            team_with(1, Division::Mens, event, Measurement::Recorded(30.0)),
            team(2, Division::Mens),
        ];
        let entries = score_teams(&teams);
        assert_eq!(placing_of(&entries, 1, event), 1);
        assert_eq!(placing_of(&entries, 2, event), 2);
    }

    // Known gap: equal raw values should tie for a placing, but the
    // current algorithm hands out distinct sequential placings in row
    // order.
    #[test]
    fn test_duplicate_raw_values_get_distinct_sequential_placings() {
        let event = EventKind::TrackStand;
        let teams = vec![
            team_with(1, Division::CoEd, event, Measurement::Recorded(20.0)),
            team_with(2, Division::CoEd, event, Measurement::Recorded(20.0)),
        ];

        let entries = score_teams(&teams);
        let mut placings = [
            placing_of(&entries, 1, event),
            placing_of(&entries, 2, event),
        ];
        placings.sort();
        assert_eq!(placings, [1, 2]);
    }

    // Known gap: tie-breaker wins are recorded but never reach the total.
    #[test]
    fn test_ties_won_is_not_part_of_the_total() {
        let teams = vec![team_with(
            1,
            Division::Mens,
            EventKind::Mucking,
            Measurement::Recorded(10.0),
        )];

        let entries = score_teams(&teams);
        assert_eq!(entries[0].ties_won, None);
        let placings: i64 = EventKind::ALL.iter().map(|&e| entries[0].placing(e)).sum();
        assert_eq!(entries[0].sum, placings);
    }

    #[test]
    fn test_empty_field_produces_empty_projection() {
        assert!(score_teams(&[]).is_empty());
    }
}
