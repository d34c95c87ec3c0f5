//! RDS instance fetcher
//!
//! Walks every enabled region, exhausts the DescribeDBInstances paginator,
//! and projects each database into a flat record of identifier, endpoint
//! address, and engine version. Unlike EC2 there is no state filter.

use super::client::AwsClients;
use super::regions;
use crate::query::ResourceRecord;
use anyhow::{anyhow, Context, Result};
use aws_sdk_rds::types::DbInstance;
use futures::future;

/// Fetch all database instances across all regions, concurrently per
/// region with region-enumeration order preserved.
pub async fn fetch_db_instances(clients: &AwsClients) -> Result<Vec<ResourceRecord>> {
    let regions = regions::list_regions(clients).await?;
    tracing::info!("querying {} regions for RDS instances", regions.len());

    let per_region =
        future::try_join_all(regions.iter().map(|region| fetch_region(clients, region))).await?;

    Ok(per_region.into_iter().flatten().collect())
}

async fn fetch_region(clients: &AwsClients, region: &str) -> Result<Vec<ResourceRecord>> {
    let client = clients.rds(region);
    let mut records = Vec::new();
    let mut pages = client.describe_db_instances().into_paginator().send();

    while let Some(page) = pages.next().await {
        let page = page
            .with_context(|| format!("Failed to describe RDS instances in {region}"))?;
        for db in page.db_instances() {
            records.push(db_record(db, region)?);
        }
    }

    tracing::debug!("{}: {} database instances", region, records.len());
    Ok(records)
}

fn db_record(db: &DbInstance, region: &str) -> Result<ResourceRecord> {
    let id = db
        .db_instance_identifier()
        .ok_or_else(|| anyhow!("DB instance in {region} has no identifier"))?;

    // Instances still provisioning have no endpoint yet
    let address = db
        .endpoint()
        .and_then(|endpoint| endpoint.address())
        .ok_or_else(|| anyhow!("DB instance {id} in {region} has no endpoint address"))?;

    let version = db
        .engine_version()
        .ok_or_else(|| anyhow!("DB instance {id} in {region} has no engine version"))?;

    Ok(ResourceRecord::new(id, address, version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_rds::types::Endpoint;

    #[test]
    fn db_instance_maps_to_record() {
        let db = DbInstance::builder()
            .db_instance_identifier("db-1")
            .endpoint(Endpoint::builder().address("db.example.com").build())
            .engine_version("8.0.32")
            .build();

        let record = db_record(&db, "us-east-1").unwrap();
        assert_eq!(
            record,
            ResourceRecord::new("db-1", "db.example.com", "8.0.32")
        );
    }

    #[test]
    fn missing_endpoint_is_a_named_error() {
        let db = DbInstance::builder()
            .db_instance_identifier("db-1")
            .engine_version("8.0.32")
            .build();

        let err = db_record(&db, "eu-west-1").unwrap_err();
        assert!(err.to_string().contains("db-1"));
        assert!(err.to_string().contains("has no endpoint address"));
    }
}
