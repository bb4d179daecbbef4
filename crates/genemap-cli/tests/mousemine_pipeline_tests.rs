//! Pipeline tests for the MouseMine query client
//!
//! A wiremock server stands in for the MouseMine web service; the pipeline
//! runs end to end against it, from identifier list to output CSV.

use genemap_cli::client::{MappingClient, MouseMineClient};
use genemap_cli::config::ServiceConfig;
use genemap_cli::mapper::BatchMapper;
use genemap_common::GenemapError;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ServiceConfig {
    ServiceConfig {
        mousemine_url: server.uri(),
        ..ServiceConfig::new()
    }
}

#[tokio::test]
async fn test_single_match_yields_one_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query/results"))
        .and(body_string_contains("MGI%3A1918911"))
        .respond_with(ResponseTemplate::new(200).set_body_string("MGI:1918911\tPax6\t18508\n"))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("MGI_ID_NCBI.csv");

    let client = MouseMineClient::new(&config_for(&mock_server)).unwrap();
    let ids = vec!["MGI:1918911".to_string()];
    let table = BatchMapper::new(0, false)
        .run(&ids, &client, &output)
        .await
        .unwrap();

    assert_eq!(table.len(), 1);

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["MGIID,symbol,NCBIGeneNumber", "MGI:1918911,Pax6,18508"]);
}

#[tokio::test]
async fn test_no_match_yields_header_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query/results"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    let client = MouseMineClient::new(&config_for(&mock_server)).unwrap();
    let ids = vec!["MGI:9999999".to_string()];
    let table = BatchMapper::new(0, false)
        .run(&ids, &client, &output)
        .await
        .unwrap();

    assert!(table.is_empty());

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "MGIID,symbol,NCBIGeneNumber\n");
}

#[tokio::test]
async fn test_one_identifier_may_yield_several_rows() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query/results"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("MGI:88052\tApoe\t11816\nMGI:88052\tApoe-ps\t11817\n"),
        )
        .mount(&mock_server)
        .await;

    let client = MouseMineClient::new(&config_for(&mock_server)).unwrap();
    let records = client.map("MGI:88052").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].symbol.as_deref(), Some("Apoe"));
    assert_eq!(records[1].target_id, "11817");
}

#[tokio::test]
async fn test_fetch_all_returns_whole_table_in_one_call() {
    let mock_server = MockServer::start().await;

    // Enumeration query carries the organism constraint and sort order
    Mock::given(method("POST"))
        .and(path("/query/results"))
        .and(body_string_contains("M.+musculus"))
        .and(body_string_contains("sortOrder"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("MGI:87853\ta\t11287\nMGI:87854\tPzp\t11288\n"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = MouseMineClient::new(&config_for(&mock_server)).unwrap();
    let records = client.fetch_all().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].source_id, "MGI:87853");
    assert_eq!(records[1].source_id, "MGI:87854");
}

#[tokio::test]
async fn test_service_failure_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query/results"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = MouseMineClient::new(&config_for(&mock_server)).unwrap();
    let result = client.map("MGI:1918911").await;

    match result {
        Err(GenemapError::Service { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected service error, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn test_malformed_row_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query/results"))
        .respond_with(ResponseTemplate::new(200).set_body_string("MGI:1918911\tPax6\n"))
        .mount(&mock_server)
        .await;

    let client = MouseMineClient::new(&config_for(&mock_server)).unwrap();
    let result = client.map("MGI:1918911").await;

    assert!(matches!(result, Err(GenemapError::Parse(_))));
}
