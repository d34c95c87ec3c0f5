//! AWS client construction
//!
//! Loads the SDK configuration once and hands out region-scoped service
//! clients derived from it, so every fetcher shares one credential chain.

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Shared AWS configuration, source of all service clients.
pub struct AwsClients {
    config: SdkConfig,
}

impl AwsClients {
    /// Load configuration from the standard provider chain.
    pub async fn new() -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self { config }
    }

    /// EC2 client pinned to a specific region.
    pub fn ec2(&self, region: &str) -> aws_sdk_ec2::Client {
        let conf = aws_sdk_ec2::config::Builder::from(&self.config)
            .region(Region::new(region.to_string()))
            .build();
        aws_sdk_ec2::Client::from_conf(conf)
    }

    /// RDS client pinned to a specific region.
    pub fn rds(&self, region: &str) -> aws_sdk_rds::Client {
        let conf = aws_sdk_rds::config::Builder::from(&self.config)
            .region(Region::new(region.to_string()))
            .build();
        aws_sdk_rds::Client::from_conf(conf)
    }

    /// EC2 client in the chain's default region, used for region
    /// enumeration. Falls back to us-east-1 when the chain resolved none,
    /// since DescribeRegions answers the same from any region.
    pub fn ec2_default(&self) -> aws_sdk_ec2::Client {
        match self.config.region() {
            Some(_) => aws_sdk_ec2::Client::new(&self.config),
            None => self.ec2("us-east-1"),
        }
    }
}
