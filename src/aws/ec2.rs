//! EC2 instance fetcher
//!
//! Walks every enabled region, exhausts the DescribeInstances paginator,
//! and projects each running instance into a flat record of Name tag,
//! private IP, and instance type.

use super::client::AwsClients;
use super::regions;
use crate::query::ResourceRecord;
use anyhow::{anyhow, Context, Result};
use aws_sdk_ec2::types::{Instance, InstanceStateName};
use futures::future;

/// Fetch all running instances across all regions. Regions are queried
/// concurrently; results keep region-enumeration order so the output is
/// deterministic.
pub async fn fetch_instances(clients: &AwsClients) -> Result<Vec<ResourceRecord>> {
    let regions = regions::list_regions(clients).await?;
    tracing::info!("querying {} regions for running EC2 instances", regions.len());

    let per_region =
        future::try_join_all(regions.iter().map(|region| fetch_region(clients, region))).await?;

    Ok(per_region.into_iter().flatten().collect())
}

async fn fetch_region(clients: &AwsClients, region: &str) -> Result<Vec<ResourceRecord>> {
    let client = clients.ec2(region);
    let mut records = Vec::new();
    let mut pages = client.describe_instances().into_paginator().send();

    while let Some(page) = pages.next().await {
        let page = page
            .with_context(|| format!("Failed to describe EC2 instances in {region}"))?;
        for reservation in page.reservations() {
            for instance in reservation.instances() {
                if let Some(record) = instance_record(instance, region)? {
                    records.push(record);
                }
            }
        }
    }

    tracing::debug!("{}: {} running instances", region, records.len());
    Ok(records)
}

/// Project one instance, or `None` when it is not running. A running
/// instance without a Name tag is an error; duplicate Name tags resolve
/// to the first by original order.
fn instance_record(instance: &Instance, region: &str) -> Result<Option<ResourceRecord>> {
    if instance.state().and_then(|state| state.name()) != Some(&InstanceStateName::Running) {
        return Ok(None);
    }

    let id = instance.instance_id().unwrap_or("<unknown>");

    let name = instance
        .tags()
        .iter()
        .find(|tag| tag.key() == Some("Name"))
        .and_then(|tag| tag.value())
        .ok_or_else(|| anyhow!("Instance {id} in {region} has no Name tag"))?;

    let address = instance
        .private_ip_address()
        .ok_or_else(|| anyhow!("Instance {id} in {region} has no private IP address"))?;

    let detail = instance
        .instance_type()
        .map(|instance_type| instance_type.as_str())
        .ok_or_else(|| anyhow!("Instance {id} in {region} has no instance type"))?;

    Ok(Some(ResourceRecord::new(name, address, detail)))
}
