//! Integration tests for the blocking client.
//!
//! These run on plain test threads; the fixture server lives on its own
//! runtime so nothing here is inside an async context.

mod common;

use std::io::{BufRead, BufReader, Read};

use rust_decimal_macros::dec;

use common::*;
use welldatalabs::api::PerSecDataRequest;
use welldatalabs::{Error, StageRange};

#[test]
fn test_blocking_job_headers() {
    let (addr, fixture) = spawn_fixture();
    let client = blocking_client_for(addr);

    let headers = client.job_headers().get(API_A, None).unwrap();

    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].api.as_deref(), Some(API_A));
    assert_eq!(fixture.last().api_version.as_deref(), Some("1"));
}

#[test]
fn test_blocking_stage_query() {
    let (addr, fixture) = spawn_fixture();
    let client = blocking_client_for(addr);

    let features = client
        .depth_features()
        .by_stage_number(StageRange::up_to(dec!(20.1)))
        .unwrap();

    assert!(!features.is_empty());
    assert_eq!(fixture.last().query.as_deref(), Some("toStageNumber=20.1"));
}

#[test]
fn test_blocking_errors_are_not_wrapped() {
    let (addr, _fixture) = spawn_fixture();
    let client = blocking_client_for(addr);

    let err = client.plugs().get("no-such-job", None).unwrap_err();
    assert!(err.is_not_found());

    let err = client.stage_comments().get(" ", None).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_blocking_clone_shares_runtime() {
    let (addr, fixture) = spawn_fixture();
    let client = blocking_client_for(addr);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            std::thread::spawn(move || client.job_summaries().get(JOB_B, None))
        })
        .collect();

    for handle in handles {
        let summaries = handle.join().unwrap().unwrap();
        assert_eq!(summaries[0].job_id.as_str(), JOB_B);
    }
    assert_eq!(fixture.count(), 4);
}

#[test]
fn test_blocking_per_sec_to_writer() {
    let (addr, _fixture) = spawn_fixture();
    let client = blocking_client_for(addr);

    let mut out: Vec<u8> = Vec::new();
    let written = client
        .per_sec_data()
        .download_to_writer(&mut out, &PerSecDataRequest::new(JOB_A))
        .unwrap();

    assert_eq!(written, out.len() as u64);
    let lines: Vec<String> = out.as_slice().lines().map(|l| l.unwrap()).collect();
    assert_eq!(lines[1], "s,psi,bpm,ppa");
    assert_eq!(lines.len(), PER_SEC_ROWS + 2);
}

#[test]
fn test_blocking_per_sec_to_file() {
    let (addr, _fixture) = spawn_fixture();
    let client = blocking_client_for(addr);

    let path = client
        .per_sec_data()
        .download_to_file(&PerSecDataRequest::new(API_A))
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, per_sec_csv());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_blocking_per_sec_open_reads_body() {
    let (addr, fixture) = spawn_fixture();
    let client = blocking_client_for(addr);
    let request = PerSecDataRequest::new(JOB_A).include_all_channels(false);

    let mut body = client.per_sec_data().open(&request).unwrap();
    let mut text = String::new();
    body.read_to_string(&mut text).unwrap();

    assert_eq!(text, per_sec_csv());
    assert_eq!(body.bytes_read(), text.len() as u64);
    assert_eq!(
        fixture.last().query,
        Some(format!("id={}&includeAllChannels=false", JOB_A))
    );
}

#[test]
fn test_blocking_per_sec_open_line_by_line() {
    let (addr, _fixture) = spawn_fixture();
    let client = blocking_client_for(addr);

    let body = client
        .per_sec_data()
        .open(&PerSecDataRequest::new(API_A))
        .unwrap();
    let mut lines = BufReader::new(body).lines();

    assert!(lines.next().unwrap().unwrap().starts_with("Job Time,"));
    assert_eq!(lines.next().unwrap().unwrap(), "s,psi,bpm,ppa");
    assert_eq!(lines.next().unwrap().unwrap(), "0,8000.5,60.2,0");
}

#[test]
fn test_blocking_per_sec_open_unknown_job() {
    let (addr, _fixture) = spawn_fixture();
    let client = blocking_client_for(addr);

    let err = client
        .per_sec_data()
        .open(&PerSecDataRequest::new("no-such-job"))
        .unwrap_err();

    assert!(err.is_not_found());
}
