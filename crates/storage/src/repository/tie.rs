use sqlx::SqlitePool;

use crate::dto::tie::CreateTieRequest;
use crate::error::{Result, StorageError};
use crate::models::Tie;
use crate::repository::TeamRepository;
use units::EventKind;

/// Repository for recorded dead heats. Rows are created and resolved by
/// explicit operator action only; the scoring pass neither reads nor
/// writes them.
pub struct TieRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TieRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Tie>> {
        let ties = sqlx::query_as::<_, Tie>(
            "SELECT id, team_1_id, team_2_id, event, winner FROM ties ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(ties)
    }

    pub async fn list_for_event(&self, event: EventKind) -> Result<Vec<Tie>> {
        let ties = sqlx::query_as::<_, Tie>(
            "SELECT id, team_1_id, team_2_id, event, winner FROM ties WHERE event = ? ORDER BY id",
        )
        .bind(event.column())
        .fetch_all(self.pool)
        .await?;

        Ok(ties)
    }

    pub async fn create(&self, req: &CreateTieRequest) -> Result<Tie> {
        let teams = TeamRepository::new(self.pool);
        let first = teams.find_by_id(req.team_1_id).await?;
        let second = teams.find_by_id(req.team_2_id).await?;

        if first.id == second.id {
            return Err(StorageError::ConstraintViolation(
                "A team cannot tie with itself".to_string(),
            ));
        }
        if first.division != second.division {
            return Err(StorageError::ConstraintViolation(format!(
                "Tied teams must share a division ({} vs {})",
                first.division, second.division
            )));
        }
        if let Some(winner) = req.winner {
            if winner != req.team_1_id && winner != req.team_2_id {
                return Err(StorageError::ConstraintViolation(
                    "Winner must be one of the tied teams".to_string(),
                ));
            }
        }

        let tie = sqlx::query_as::<_, Tie>(
            r#"
            INSERT INTO ties (team_1_id, team_2_id, event, winner)
            VALUES (?, ?, ?, ?)
            RETURNING id, team_1_id, team_2_id, event, winner
            "#,
        )
        .bind(req.team_1_id)
        .bind(req.team_2_id)
        .bind(req.event.column())
        .bind(req.winner)
        .fetch_one(self.pool)
        .await?;

        Ok(tie)
    }

    /// Record the outcome of a tie-breaker run.
    pub async fn set_winner(&self, id: i64, winner: i64) -> Result<Tie> {
        let tie = sqlx::query_as::<_, Tie>(
            "SELECT id, team_1_id, team_2_id, event, winner FROM ties WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        if winner != tie.team_1_id && winner != tie.team_2_id {
            return Err(StorageError::ConstraintViolation(
                "Winner must be one of the tied teams".to_string(),
            ));
        }

        let tie = sqlx::query_as::<_, Tie>(
            r#"
            UPDATE ties SET winner = ? WHERE id = ?
            RETURNING id, team_1_id, team_2_id, event, winner
            "#,
        )
        .bind(winner)
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(tie)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM ties WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
