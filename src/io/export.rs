use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::RewardsService;
use crate::domain::Account;

/// Database snapshot for full export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub accounts: Vec<Account>,
}

/// Exporter for writing the rewards table to various formats
pub struct Exporter<'a> {
    service: &'a RewardsService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a RewardsService) -> Self {
        Self { service }
    }

    /// Export balances to CSV format
    pub async fn export_balances_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let accounts = self.service.list_accounts().await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["phone", "points"])?;

        for account in &accounts {
            csv_writer.write_record([account.phone.as_str(), account.points.to_string().as_str()])?;
        }

        csv_writer.flush()?;
        Ok(accounts.len())
    }

    /// Export full database as JSON snapshot
    pub async fn export_full_json<W: Write>(&self, mut writer: W) -> Result<DatabaseSnapshot> {
        let accounts = self.service.list_accounts().await?;

        let snapshot = DatabaseSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            accounts,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
