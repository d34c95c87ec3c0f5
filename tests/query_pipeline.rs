//! Integration tests for the cache -> aggregate -> render pipeline
//!
//! These run the pipeline end to end against in-memory fetchers backed by
//! a private cache directory, without touching AWS.

use awsquery::cache::Cache;
use awsquery::query::{aggregate, ResourceRecord};
use awsquery::table::render;

fn compute_fixture() -> Vec<ResourceRecord> {
    vec![ResourceRecord::new("web-1", "10.0.0.1", "t3.micro")]
}

fn db_fixture() -> Vec<ResourceRecord> {
    vec![ResourceRecord::new("db-1", "db.example.com", "8.0.32")]
}

#[tokio::test]
async fn filtered_pipeline_renders_exactly_one_row() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Cache::with_dir(dir.path());

    let ec2_list = cache
        .get_or_fetch("ec2-instances", false, || async { Ok(compute_fixture()) })
        .await
        .unwrap();
    let rds_list = cache
        .get_or_fetch("rds-instances", false, || async { Ok(db_fixture()) })
        .await
        .unwrap();

    let records = aggregate(ec2_list, rds_list, Some("web"));
    assert_eq!(records, compute_fixture());

    let rendered = render(&records).to_string();
    assert!(rendered.contains("web-1"));
    assert!(rendered.contains("10.0.0.1"));
    assert!(rendered.contains("t3.micro"));
    assert!(!rendered.contains("db-1"));

    // Exactly one data row: header + one record
    let data_rows = rendered
        .lines()
        .filter(|line| line.starts_with('|') && !line.contains("Name"))
        .count();
    assert_eq!(data_rows, 1);
}

#[tokio::test]
async fn unfiltered_pipeline_keeps_both_kinds_sorted_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Cache::with_dir(dir.path());

    let ec2_list = cache
        .get_or_fetch("ec2-instances", false, || async { Ok(compute_fixture()) })
        .await
        .unwrap();
    let rds_list = cache
        .get_or_fetch("rds-instances", false, || async { Ok(db_fixture()) })
        .await
        .unwrap();

    let records = aggregate(ec2_list, rds_list, None);
    let rendered = render(&records).to_string();

    // db-1 sorts before web-1 even though compute records aggregate first
    let db_pos = rendered.find("db-1").expect("db row present");
    let web_pos = rendered.find("web-1").expect("web row present");
    assert!(db_pos < web_pos);
}

#[tokio::test]
async fn second_run_reuses_cached_fetch_results() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Cache::with_dir(dir.path());

    cache
        .get_or_fetch("ec2-instances", false, || async { Ok(compute_fixture()) })
        .await
        .unwrap();

    // A second process run with --force absent must not refetch
    let cached: Vec<ResourceRecord> = Cache::with_dir(dir.path())
        .get_or_fetch("ec2-instances", false, || async {
            panic!("cache entry should have been used")
        })
        .await
        .unwrap();

    assert_eq!(cached, compute_fixture());
}
