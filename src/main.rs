use anyhow::Result;
use awsquery::aws::client::AwsClients;
use awsquery::cache::Cache;
use awsquery::{aws, query, table};
use clap::{Parser, ValueEnum};
use tracing::Level;

/// Lookup AWS resources
#[derive(Parser, Debug)]
#[command(name = "awsquery", version, about, long_about = None)]
struct Args {
    /// Bypass the cache and query AWS again
    #[arg(long)]
    force: bool,

    /// Keep only resources whose name contains this term
    name: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) {
    let Some(tracing_level) = level.to_tracing_level() else {
        return;
    };

    // Logs go to stderr; stdout carries only the table
    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    tracing::info!("awsquery started with log level: {:?}", level);
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level);

    let clients = AwsClients::new().await;
    let cache = Cache::new();

    let ec2_list = cache
        .get_or_fetch("ec2-instances", args.force, || {
            aws::ec2::fetch_instances(&clients)
        })
        .await?;
    let rds_list = cache
        .get_or_fetch("rds-instances", args.force, || {
            aws::rds::fetch_db_instances(&clients)
        })
        .await?;

    let records = query::aggregate(ec2_list, rds_list, args.name.as_deref());
    println!("{}", table::render(&records));

    Ok(())
}
