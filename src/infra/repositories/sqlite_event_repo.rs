use crate::domain::{
    models::event::{Event, EventFields, EventQuery},
    ports::EventRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn list(&self, query: &EventQuery) -> Result<Vec<Event>, AppError> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM events WHERE 1 = 1");

        if let Some(domestic) = query.is_domestic {
            qb.push(" AND is_domestic = ").push_bind(domestic);
        }
        if let Some(from) = &query.from_date {
            qb.push(" AND event_date >= ").push_bind(from.clone());
        }
        if let Some(to) = &query.to_date {
            qb.push(" AND event_date <= ").push_bind(to.clone());
        }
        if query.order_by_date {
            qb.push(" ORDER BY event_date ASC");
        }

        qb.build_query_as::<Event>()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from_store)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from_store)
    }

    async fn create(&self, fields: &EventFields) -> Result<Event, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (
                id, name, event_date, location, is_domestic,
                registration_url, registration_deadline, name_color, location_color,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(Uuid::new_v4().to_string())
            .bind(&fields.name)
            .bind(&fields.event_date)
            .bind(&fields.location)
            .bind(fields.is_domestic)
            .bind(&fields.registration_url)
            .bind(&fields.registration_deadline)
            .bind(&fields.name_color)
            .bind(&fields.location_color)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from_store)
    }

    async fn update(&self, id: &str, fields: &EventFields) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"UPDATE events SET
                name=?, event_date=?, location=?, is_domestic=?,
                registration_url=?, registration_deadline=?, name_color=?, location_color=?,
                updated_at=?
               WHERE id=? RETURNING *"#
        )
            .bind(&fields.name)
            .bind(&fields.event_date)
            .bind(&fields.location)
            .bind(fields.is_domestic)
            .bind(&fields.registration_url)
            .bind(&fields.registration_deadline)
            .bind(&fields.name_color)
            .bind(&fields.location_color)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from_store)?
            .ok_or_else(|| AppError::NotFound("Event not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from_store)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }
        Ok(())
    }
}
