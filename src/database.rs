use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Review, ReviewFields, ReviewRow};

/// Persistence seam for review records. Handlers only ever see this trait.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Create the `reviews` table if it does not exist yet.
    async fn initialize(&self) -> AppResult<()>;

    /// Every stored review, in ascending id order.
    async fn list_all(&self) -> AppResult<Vec<Review>>;

    async fn create(&self, fields: ReviewFields) -> AppResult<Review>;

    /// Replace the mutable fields of review `id`. `id` and `date_added` are kept.
    async fn update(&self, id: i64, fields: ReviewFields) -> AppResult<Review>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SQLite-backed review storage over an SQLx connection pool.
pub struct ReviewDatabase {
    pool: SqlitePool,
}

impl ReviewDatabase {
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// A private in-memory database, initialized and ready to use.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool is
    /// pinned to one connection that is never recycled.
    pub async fn new_in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.initialize().await?;
        Ok(db)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ReviewStore for ReviewDatabase {
    async fn initialize(&self) -> AppResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title VARCHAR(100) NOT NULL,
                author VARCHAR(100) NOT NULL,
                rating INTEGER NOT NULL,
                review_text VARCHAR(500) NOT NULL,
                date_added DATETIME NOT NULL
            )"
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            "SELECT id, title, author, rating, review_text, date_added FROM reviews ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn create(&self, fields: ReviewFields) -> AppResult<Review> {
        let now = Utc::now().naive_utc();

        let result = sqlx::query(
            "INSERT INTO reviews (title, author, rating, review_text, date_added) VALUES (?, ?, ?, ?, ?)"
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(fields.rating)
        .bind(&fields.review_text)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let row = ReviewRow {
            id: result.last_insert_rowid(),
            title: fields.title,
            author: fields.author,
            rating: fields.rating,
            review_text: fields.review_text,
            date_added: now,
        };

        Ok(row.into())
    }

    async fn update(&self, id: i64, fields: ReviewFields) -> AppResult<Review> {
        let row = sqlx::query_as::<_, ReviewRow>(
            "UPDATE reviews SET title = ?, author = ?, rating = ?, review_text = ? WHERE id = ?
             RETURNING id, title, author, rating, review_text, date_added"
        )
        .bind(fields.title)
        .bind(fields.author)
        .bind(fields.rating)
        .bind(fields.review_text)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Review::from)
            .ok_or_else(|| AppError::NotFound(format!("Review with id {} not found", id)))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Review with id {} not found", id)));
        }

        Ok(())
    }
}
