//! Beacon client tests against a mock drand endpoint.

use std::net::SocketAddr;

use beacon_runner::beacon::types::BeaconError;
use beacon_runner::config::BeaconConfig;
use beacon_runner::DrandBeacon;

mod common;

fn beacon_for(addr: SocketAddr) -> DrandBeacon {
    DrandBeacon::new(BeaconConfig {
        url: format!("http://{}/", addr),
        chain_hash: "testhash".to_string(),
        request_timeout_secs: 2,
        ..BeaconConfig::default()
    })
}

fn round_body(round: u64) -> String {
    format!(
        r#"{{"round":{},"randomness":"ab12","signature":"cd34","previous_signature":"ef56"}}"#,
        round
    )
}

#[tokio::test]
async fn test_get_by_round_returns_requested_round() {
    let addr: SocketAddr = "127.0.0.1:28391".parse().unwrap();
    common::start_mock_endpoint(addr, |target, _| async move {
        let round = target
            .rsplit('/')
            .next()
            .and_then(|r| r.parse::<u64>().ok())
            .unwrap_or(0);
        (200, round_body(round))
    })
    .await;

    let beacon = beacon_for(addr);
    let randomness = beacon.get_by_round(101).await.unwrap();
    assert_eq!(randomness.round, 101);
    assert_eq!(randomness.signature, "cd34");
    assert_eq!(randomness.previous_signature, "ef56");
}

#[tokio::test]
async fn test_get_latest_hits_latest_endpoint() {
    let addr: SocketAddr = "127.0.0.1:28392".parse().unwrap();
    common::start_mock_endpoint(addr, |target, _| async move {
        if target == "/testhash/public/latest" {
            (200, round_body(424242))
        } else {
            (404, "{}".to_string())
        }
    })
    .await;

    let beacon = beacon_for(addr);
    let randomness = beacon.get_latest().await.unwrap();
    assert_eq!(randomness.round, 424242);
}

#[tokio::test]
async fn test_unpublished_round_is_not_found() {
    let addr: SocketAddr = "127.0.0.1:28393".parse().unwrap();
    common::start_mock_endpoint(addr, |_, _| async move { (404, String::new()) }).await;

    let beacon = beacon_for(addr);
    let err = beacon.get_by_round(999_999_999).await.unwrap_err();
    assert!(matches!(
        err,
        BeaconError::RoundNotFound { round } if round == 999_999_999
    ));
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let addr: SocketAddr = "127.0.0.1:28394".parse().unwrap();
    common::start_mock_endpoint(addr, |_, _| async move { (500, String::new()) }).await;

    let beacon = beacon_for(addr);
    let err = beacon.get_by_round(101).await.unwrap_err();
    assert!(matches!(err, BeaconError::Network(_)));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let addr: SocketAddr = "127.0.0.1:28395".parse().unwrap();
    common::start_mock_endpoint(addr, |_, _| async move {
        (200, r#"{"round":"not a number"}"#.to_string())
    })
    .await;

    let beacon = beacon_for(addr);
    let err = beacon.get_by_round(101).await.unwrap_err();
    assert!(matches!(err, BeaconError::Decode(_)));
}

#[tokio::test]
async fn test_hung_endpoint_times_out() {
    let addr: SocketAddr = "127.0.0.1:28396".parse().unwrap();
    common::start_silent_endpoint(addr).await;

    let beacon = DrandBeacon::new(BeaconConfig {
        url: format!("http://{}/", addr),
        chain_hash: "testhash".to_string(),
        request_timeout_secs: 1,
        ..BeaconConfig::default()
    });

    let err = beacon.get_latest().await.unwrap_err();
    assert!(matches!(err, BeaconError::Timeout(1)));
}

#[tokio::test]
async fn test_repeated_fetches_are_identical() {
    let addr: SocketAddr = "127.0.0.1:28397".parse().unwrap();
    common::start_mock_endpoint(addr, |target, _| async move {
        let round = target
            .rsplit('/')
            .next()
            .and_then(|r| r.parse::<u64>().ok())
            .unwrap_or(0);
        (200, round_body(round))
    })
    .await;

    let beacon = beacon_for(addr);
    let first = beacon.get_by_round(77).await.unwrap();
    let second = beacon.get_by_round(77).await.unwrap();
    assert_eq!(first, second);
}
