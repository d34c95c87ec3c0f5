//! Region enumeration

use super::client::AwsClients;
use anyhow::{Context, Result};

/// List every region enabled for the account, in API order. Each fetcher
/// calls this once per fetch; failures abort the whole run.
pub async fn list_regions(clients: &AwsClients) -> Result<Vec<String>> {
    let output = clients
        .ec2_default()
        .describe_regions()
        .send()
        .await
        .context("Failed to list AWS regions")?;

    let regions: Vec<String> = output
        .regions()
        .iter()
        .filter_map(|region| region.region_name().map(str::to_string))
        .collect();

    tracing::debug!("enumerated {} regions", regions.len());
    Ok(regions)
}
