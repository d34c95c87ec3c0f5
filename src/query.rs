//! Aggregation and filtering
//!
//! Merges the fetcher outputs into a single record list and applies the
//! optional name filter from the command line.

use serde::{Deserialize, Serialize};

/// Flat record shape shared by both resource kinds.
///
/// For EC2 instances: Name tag value, private IP, instance type.
/// For RDS instances: DB identifier, endpoint address, engine version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,
    pub address: String,
    pub detail: String,
}

impl ResourceRecord {
    pub fn new(name: &str, address: &str, detail: &str) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Merge compute and database records (compute first, order preserved,
/// no dedup) and keep only records matching the filter term, if any.
pub fn aggregate(
    compute: Vec<ResourceRecord>,
    db: Vec<ResourceRecord>,
    term: Option<&str>,
) -> Vec<ResourceRecord> {
    let merged = compute.into_iter().chain(db);

    match term {
        Some(term) => {
            // Both sides lowercased, so an upper-case search term still matches
            let term = term.to_lowercase();
            merged
                .filter(|record| record.name.to_lowercase().contains(&term))
                .collect()
        }
        None => merged.collect(),
    }
}
