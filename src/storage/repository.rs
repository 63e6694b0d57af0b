use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};

use crate::domain::{Account, PhoneNumber, Points};

use super::MIGRATION_001_INITIAL;

/// Repository for persisting and querying loyalty balances.
///
/// The pool is capped at a single connection: one store handle is held for the
/// lifetime of the repository and every statement runs on it in order.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Create the rewards table if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let repo = Self::connect(database_url).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    /// Close the underlying connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // ========================
    // Balance operations
    // ========================

    /// Insert a row for `phone` with `points`, or add `points` to the existing balance.
    /// Returns the number of rows changed; zero means the new balance would not fit
    /// in an `INTEGER` column and nothing was modified.
    pub async fn add_points(&self, phone: &PhoneNumber, points: Points) -> Result<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO rewards (phone, points)
            VALUES (?, ?)
            ON CONFLICT(phone) DO UPDATE SET points = points + excluded.points
            WHERE points <= 9223372036854775807 - excluded.points
            "#,
        )
        .bind(phone.as_str())
        .bind(points)
        .execute(&self.pool)
        .await
        .context("Failed to add points")?;
        Ok(result.rows_affected())
    }

    /// Get the stored balance for `phone`, if a row exists.
    pub async fn get_points(&self, phone: &PhoneNumber) -> Result<Option<Points>> {
        let points = sqlx::query_scalar::<_, Points>("SELECT points FROM rewards WHERE phone = ?")
            .bind(phone.as_str())
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch points")?;
        Ok(points)
    }

    /// Subtract `points` from the balance of `phone` only if the balance covers it.
    /// Returns the number of rows changed; zero means the row is absent or the
    /// balance is insufficient, and nothing was modified.
    pub async fn subtract_points(&self, phone: &PhoneNumber, points: Points) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE rewards
            SET points = points - ?
            WHERE phone = ? AND points >= ?
            "#,
        )
        .bind(points)
        .bind(phone.as_str())
        .bind(points)
        .execute(&self.pool)
        .await
        .context("Failed to subtract points")?;
        Ok(result.rows_affected())
    }

    /// List every stored account ordered by phone number.
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        let rows = sqlx::query("SELECT phone, points FROM rewards ORDER BY phone")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list accounts")?;

        rows.iter().map(Self::row_to_account).collect()
    }

    /// Count stored accounts.
    pub async fn count_accounts(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rewards")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count accounts")?;
        Ok(count)
    }

    fn row_to_account(row: &sqlx::sqlite::SqliteRow) -> Result<Account> {
        let phone_str: String = row.get("phone");
        let phone = PhoneNumber::parse(&phone_str)
            .with_context(|| format!("Invalid phone number in database: {}", phone_str))?;

        Ok(Account::new(phone).with_points(row.get("points")))
    }
}
