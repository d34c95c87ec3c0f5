//! awsquery - query EC2 and RDS inventories across all regions
//!
//! The pipeline is: enumerate regions, fetch both inventories through the
//! per-fetcher disk cache, merge and filter, render a sorted table.

pub mod aws;
pub mod cache;
pub mod query;
pub mod table;
