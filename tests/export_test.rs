mod common;

use anyhow::Result;
use common::{OTHER_PHONE, PHONE, test_service};
use rewards_tracker::io::{DatabaseSnapshot, Exporter};

#[tokio::test]
async fn test_export_balances_csv() -> Result<()> {
    let (service, _temp) = test_service().await?;
    service.credit(PHONE, 13.95).await?;
    service.credit(OTHER_PHONE, 2.20).await?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service)
        .export_balances_csv(&mut buffer)
        .await?;
    assert_eq!(count, 2);

    let output = String::from_utf8(buffer)?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["phone,points", "4165550199,2", "7051234567,14"]);

    Ok(())
}

#[tokio::test]
async fn test_export_balances_csv_empty() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service)
        .export_balances_csv(&mut buffer)
        .await?;
    assert_eq!(count, 0);
    assert_eq!(String::from_utf8(buffer)?.trim(), "phone,points");

    Ok(())
}

#[tokio::test]
async fn test_export_full_json() -> Result<()> {
    let (service, _temp) = test_service().await?;
    service.credit(PHONE, 20.0).await?;
    service.debit(PHONE, 5).await?;

    let mut buffer = Vec::new();
    let snapshot = Exporter::new(&service).export_full_json(&mut buffer).await?;
    assert_eq!(snapshot.accounts.len(), 1);

    let parsed: DatabaseSnapshot = serde_json::from_slice(&buffer)?;
    assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(parsed.accounts.len(), 1);
    assert_eq!(parsed.accounts[0].phone.as_str(), PHONE);
    assert_eq!(parsed.accounts[0].points, 15);

    Ok(())
}
