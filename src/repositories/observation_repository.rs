use crate::models::{NewObservation, PriceObservation};
use chrono::NaiveDateTime;
use sqlx::{FromRow, Result as SqlxResult, SqlitePool};

/// Per-product aggregate row produced by the frequency ranking query.
#[derive(Debug, Clone, FromRow)]
pub struct ProductAggregate {
    pub name: String,
    /// Place of the group's most recent observation.
    pub place: String,
    pub avg_total_price: f64,
    pub avg_units: f64,
    pub observation_count: i64,
}

/// Repository for price observation data access
pub struct ObservationRepository {
    pool: SqlitePool,
}

impl ObservationRepository {
    /// Create a new ObservationRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new observation (append-only; rows are never updated)
    pub async fn create(
        &self,
        new: &NewObservation,
        recorded_at: NaiveDateTime,
    ) -> SqlxResult<PriceObservation> {
        let result = sqlx::query(
            r#"
            INSERT INTO observations (name, total_price, units, place, recorded_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&new.name)
        .bind(new.total_price)
        .bind(new.units)
        .bind(&new.place)
        .bind(recorded_at)
        .execute(&self.pool)
        .await?;

        Ok(PriceObservation {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            total_price: new.total_price,
            units: new.units,
            place: new.place.clone(),
            recorded_at,
        })
    }

    /// Find all observations for a product, newest first
    pub async fn find_by_name(&self, name: &str) -> SqlxResult<Vec<PriceObservation>> {
        sqlx::query_as::<_, PriceObservation>(
            r#"
            SELECT id, name, total_price, units, place, recorded_at
            FROM observations
            WHERE name = ?1
            ORDER BY recorded_at DESC, id DESC
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
    }

    /// Find a product's observations within an inclusive date range,
    /// oldest first
    pub async fn find_by_name_in_range(
        &self,
        name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> SqlxResult<Vec<PriceObservation>> {
        sqlx::query_as::<_, PriceObservation>(
            r#"
            SELECT id, name, total_price, units, place, recorded_at
            FROM observations
            WHERE name = ?1 AND recorded_at >= ?2 AND recorded_at <= ?3
            ORDER BY recorded_at ASC, id ASC
            "#,
        )
        .bind(name)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }

    /// Find all observations across products, oldest first
    pub async fn find_all(&self) -> SqlxResult<Vec<PriceObservation>> {
        sqlx::query_as::<_, PriceObservation>(
            r#"
            SELECT id, name, total_price, units, place, recorded_at
            FROM observations
            ORDER BY recorded_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Aggregate observations by product name, most-recorded first.
    ///
    /// Count ties are broken lexicographically by name. The reported
    /// place is taken from the group's most recent observation so the
    /// result is deterministic.
    pub async fn aggregate_by_name(&self, limit: i64) -> SqlxResult<Vec<ProductAggregate>> {
        sqlx::query_as::<_, ProductAggregate>(
            r#"
            SELECT
                o.name AS name,
                (
                    SELECT p.place FROM observations p
                    WHERE p.name = o.name
                    ORDER BY p.recorded_at DESC, p.id DESC
                    LIMIT 1
                ) AS place,
                AVG(o.total_price) AS avg_total_price,
                AVG(o.units) AS avg_units,
                COUNT(*) AS observation_count
            FROM observations o
            GROUP BY o.name
            ORDER BY observation_count DESC, o.name ASC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }
}
