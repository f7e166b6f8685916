use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::RankEntry;
use units::Division;

/// Repository for the ranks projection.
///
/// The projection is read-only for everything except the scoring pass,
/// which replaces it wholesale; there is deliberately no row-level
/// update here.
pub struct RankRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RankRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<RankEntry>> {
        let entries = sqlx::query_as::<_, RankEntry>(
            r#"
            SELECT id, School, Name, Division, Mucking, "Swede Saw", "Track Stand",
                   "Gold Pan", "Hand Steel", Jackleg, Survey, Sum, "Ties Won"
            FROM ranks
            ORDER BY Division, Sum, id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn list_by_division(&self, division: Division) -> Result<Vec<RankEntry>> {
        let entries = sqlx::query_as::<_, RankEntry>(
            r#"
            SELECT id, School, Name, Division, Mucking, "Swede Saw", "Track Stand",
                   "Gold Pan", "Hand Steel", Jackleg, Survey, Sum, "Ties Won"
            FROM ranks
            WHERE Division = ?
            ORDER BY Sum, id
            "#,
        )
        .bind(division.code())
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Overwrite the whole projection in one transaction. A scoring pass
    /// interrupted before the commit leaves the previous projection
    /// intact; rerunning the pass is always safe.
    pub async fn replace_all(&self, entries: &[RankEntry]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM ranks").execute(&mut *tx).await?;

        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO ranks (id, School, Name, Division, Mucking, "Swede Saw",
                                   "Track Stand", "Gold Pan", "Hand Steel", Jackleg,
                                   Survey, Sum, "Ties Won")
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(entry.id)
            .bind(&entry.school)
            .bind(&entry.name)
            .bind(entry.division.code())
            .bind(entry.mucking)
            .bind(entry.swede_saw)
            .bind(entry.track_stand)
            .bind(entry.gold_pan)
            .bind(entry.hand_steel)
            .bind(entry.jackleg)
            .bind(entry.survey)
            .bind(entry.sum)
            .bind(entry.ties_won)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM ranks").execute(self.pool).await?;
        Ok(())
    }
}
