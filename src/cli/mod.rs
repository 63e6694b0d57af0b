use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

use crate::application::RewardsService;
use crate::domain::{parse_amount, Points};

/// Rewards Tracker - Customer Loyalty Points
#[derive(Parser)]
#[command(name = "rewards-tracker")]
#[command(about = "Track customer loyalty points by phone number")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "rewards.db")]
    pub database: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Add points for a purchase (one point per currency unit, rounded)
    Add {
        /// Customer phone number (10 digits, no formatting)
        phone: String,

        /// Purchase amount (e.g., "13.95")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the points balance for a customer
    Check {
        /// Customer phone number (10 digits, no formatting)
        phone: String,
    },

    /// Redeem points from a customer's balance
    Redeem {
        /// Customer phone number (10 digits, no formatting)
        phone: String,

        /// Number of points to redeem
        #[arg(allow_hyphen_values = true)]
        points: String,
    },

    /// List all customers with a stored balance
    Accounts,

    /// Export balances to CSV or JSON
    Export {
        /// What to export: balances (CSV), full (JSON snapshot)
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let service = RewardsService::init(&self.database).await?;
        let mut stdout = std::io::stdout();
        let result = run_command(&service, &self.database, self.command, &mut stdout).await;
        service.close().await;
        result
    }
}

/// Dispatch one command against an open service, writing its output to `out`.
pub async fn run_command<W: Write>(
    service: &RewardsService,
    database: &str,
    command: Commands,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Init => {
            writeln!(out, "Database initialized: {}", database)?;
        }

        Commands::Add { phone, amount } => {
            let amount = parse_amount(&amount).context("Please enter a valid number")?;
            let points = service.credit(&phone, amount).await?;
            writeln!(out, "Points added successfully! (+{})", points)?;
        }

        Commands::Check { phone } => {
            let points = service.query(&phone).await?;
            if points == 0 {
                writeln!(out, "New customer - No points yet")?;
            } else {
                writeln!(out, "Current points: {}", points)?;
            }
        }

        Commands::Redeem { phone, points } => {
            let points = parse_points(&points)?;
            service.debit(&phone, points).await?;
            writeln!(out, "Points redeemed successfully!")?;
        }

        Commands::Accounts => {
            run_accounts_command(service, out).await?;
        }

        Commands::Export {
            export_type,
            output,
        } => {
            run_export_command(service, &export_type, output.as_deref(), out).await?;
        }
    }

    Ok(())
}

async fn run_accounts_command<W: Write>(service: &RewardsService, out: &mut W) -> Result<()> {
    let accounts = service.list_accounts().await?;
    if accounts.is_empty() {
        writeln!(out, "No accounts found.")?;
        return Ok(());
    }

    writeln!(out, "{:<12} {:>10}", "PHONE", "POINTS")?;
    writeln!(out, "{}", "-".repeat(23))?;
    for account in &accounts {
        writeln!(out, "{:<12} {:>10}", account.phone, account.points)?;
    }
    writeln!(out, "{}", "-".repeat(23))?;
    writeln!(out, "{} account(s)", accounts.len())?;
    Ok(())
}

async fn run_export_command<W: Write>(
    service: &RewardsService,
    export_type: &str,
    output: Option<&str>,
    out: &mut W,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write + '_> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(out),
    };

    match export_type {
        "balances" => {
            let count = exporter.export_balances_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} accounts", count);
            }
        }
        "full" => {
            let snapshot = exporter.export_full_json(writer).await?;
            if output.is_some() {
                eprintln!(
                    "Exported full database: {} accounts",
                    snapshot.accounts.len()
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: balances, full",
                export_type
            );
        }
    }

    Ok(())
}

/// Parse a points quantity typed by a user.
fn parse_points(input: &str) -> Result<Points> {
    input
        .trim()
        .parse::<Points>()
        .context("Please enter a valid number")
}
