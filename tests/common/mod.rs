// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use rewards_tracker::application::RewardsService;
use tempfile::TempDir;

pub const PHONE: &str = "7051234567";
pub const OTHER_PHONE: &str = "4165550199";

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(RewardsService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = RewardsService::init(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Path of the test database inside `temp_dir`
pub fn db_path(temp_dir: &TempDir) -> String {
    temp_dir.path().join("test.db").to_str().unwrap().to_string()
}
