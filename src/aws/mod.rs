//! AWS API interaction module
//!
//! Everything that talks to AWS lives here: shared SDK configuration,
//! region enumeration, and the two inventory fetchers.
//!
//! # Module Structure
//!
//! - [`client`] - Shared SDK config and region-scoped service clients
//! - [`regions`] - Enumerates all enabled regions for the account
//! - [`ec2`] - Fetches running EC2 instances across every region
//! - [`rds`] - Fetches RDS database instances across every region
//!
//! Credentials are resolved by the SDK's standard provider chain
//! (environment, shared config files, instance metadata); this tool owns
//! no authentication logic of its own.

pub mod client;
pub mod ec2;
pub mod rds;
pub mod regions;
