use sqlx::{QueryBuilder, SqlitePool};
use validator::Validate;

use crate::dto::team::{CreateTeamRequest, UpdateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::Team;
use units::{Division, EventKind, Measurement};

/// Repository for the teams table.
pub struct TeamRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every team, grouped by division.
    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT id, School, Name, Division, Mucking, "Swede Saw", "Track Stand",
                   "Gold Pan", "Hand Steel", Jackleg, Survey
            FROM teams
            ORDER BY Division, id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn list_by_division(&self, division: Division) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT id, School, Name, Division, Mucking, "Swede Saw", "Track Stand",
                   "Gold Pan", "Hand Steel", Jackleg, Survey
            FROM teams
            WHERE Division = ?
            ORDER BY id
            "#,
        )
        .bind(division.code())
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT id, School, Name, Division, Mucking, "Swede Saw", "Track Stand",
                   "Gold Pan", "Hand Steel", Jackleg, Survey
            FROM teams
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Register a new team. Event results start out unrecorded.
    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        req.validate()
            .map_err(|e| StorageError::ConstraintViolation(e.to_string()))?;

        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (School, Name, Division)
            VALUES (?, ?, ?)
            RETURNING id, School, Name, Division, Mucking, "Swede Saw", "Track Stand",
                      "Gold Pan", "Hand Steel", Jackleg, Survey
            "#,
        )
        .bind(&req.school)
        .bind(&req.name)
        .bind(req.division.code())
        .fetch_one(self.pool)
        .await?;

        Ok(team)
    }

    /// Update a team's identity columns.
    pub async fn update(&self, id: i64, req: &UpdateTeamRequest) -> Result<Team> {
        req.validate()
            .map_err(|e| StorageError::ConstraintViolation(e.to_string()))?;

        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET School = ?, Name = ?, Division = ?
            WHERE id = ?
            RETURNING id, School, Name, Division, Mucking, "Swede Saw", "Track Stand",
                      "Gold Pan", "Hand Steel", Jackleg, Survey
            "#,
        )
        .bind(&req.school)
        .bind(&req.name)
        .bind(req.division.code())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Write one event result, already parsed and validated upstream.
    /// This is the only path raw result columns are mutated through.
    pub async fn update_result(
        &self,
        id: i64,
        event: EventKind,
        value: Measurement,
    ) -> Result<()> {
        let mut query = QueryBuilder::new("UPDATE teams SET \"");
        query.push(event.column());
        query.push("\" = ");
        query.push_bind(value.to_raw(event));
        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tracing::debug!(team = id, event = event.column(), "event result updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
