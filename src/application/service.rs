use tracing::{debug, info, warn};

use crate::domain::{points_for_amount, Account, PhoneNumber, Points};
use crate::storage::Repository;

use super::AppError;

/// Application service for crediting, querying and redeeming loyalty points.
/// This is the primary interface for any client (CLI, tests, etc.).
pub struct RewardsService {
    repo: Repository,
}

impl RewardsService {
    /// Create a new rewards service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Open the database at the given path, creating the file and table if missing.
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = Repository::init(&db_url).await?;
        info!(path = database_path, "rewards database ready");
        Ok(Self::new(repo))
    }

    /// Release the database handle.
    pub async fn close(self) {
        self.repo.close().await;
    }

    /// Credit points for a purchase. The amount is rounded half away from zero,
    /// so 13.95 earns 14 points. Returns the number of points credited.
    pub async fn credit(&self, phone: &str, amount: f64) -> Result<Points, AppError> {
        let phone = PhoneNumber::parse(phone)?;
        let points = points_for_amount(amount)?;

        let changed = self.repo.add_points(&phone, points).await?;
        if changed == 0 {
            let balance = self.balance(&phone).await?;
            warn!(phone = %phone, balance, points, "credit rejected");
            return Err(AppError::BalanceOverflow {
                phone,
                balance,
                points,
            });
        }

        debug!(phone = %phone, amount, points, "credited points");
        Ok(points)
    }

    /// Current balance for `phone`. Customers never seen before have zero points.
    pub async fn query(&self, phone: &str) -> Result<Points, AppError> {
        let phone = PhoneNumber::parse(phone)?;
        self.balance(&phone).await
    }

    /// Redeem points. Fails without touching the balance if it does not cover `points`.
    pub async fn debit(&self, phone: &str, points: Points) -> Result<(), AppError> {
        let phone = PhoneNumber::parse(phone)?;
        if points <= 0 {
            return Err(AppError::InvalidPoints(points));
        }

        let changed = self.repo.subtract_points(&phone, points).await?;
        if changed == 0 {
            let balance = self.balance(&phone).await?;
            warn!(phone = %phone, balance, requested = points, "redeem rejected");
            return Err(AppError::InsufficientPoints {
                phone,
                balance,
                requested: points,
            });
        }

        debug!(phone = %phone, points, "debited points");
        Ok(())
    }

    /// All accounts with a stored balance, ordered by phone number.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.repo.list_accounts().await?)
    }

    /// Number of accounts with a stored balance.
    pub async fn count_accounts(&self) -> Result<i64, AppError> {
        Ok(self.repo.count_accounts().await?)
    }

    async fn balance(&self, phone: &PhoneNumber) -> Result<Points, AppError> {
        let points = self.repo.get_points(phone).await?.unwrap_or(0);
        debug!(phone = %phone, points, "queried points");
        Ok(points)
    }
}
