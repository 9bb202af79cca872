//! Anchor Test: repeated runs against an unchanged fixture agree, and one failing
//! check never hides the other.

use crate::anchor_utils::{deployed_snapshot, mainnet_fixture, STRATEGY, VAULT};
use alloy::primitives::{Address, U256};
use strategy_verify::config::deployment::DeploymentConfig;
use strategy_verify::verify::report::{DEPLOY_SETTINGS_CHECK, SETUP_ADDRESS_CHECK};
use strategy_verify::verify::run_all;

#[tokio::test]
async fn test_run_all_is_idempotent() {
    let snapshot = deployed_snapshot();
    let config = DeploymentConfig::mainnet();
    let fixture = mainnet_fixture();

    let first = run_all(&snapshot, &snapshot, &config, &fixture).await;
    let second = run_all(&snapshot, &snapshot, &config, &fixture).await;
    assert!(first.passed());
    assert_eq!(first, second);
    assert_eq!(first.strategy, STRATEGY);
    assert_eq!(first.vault, Some(VAULT));
}

#[tokio::test]
async fn test_checks_are_independent() {
    let mut snapshot = deployed_snapshot();
    snapshot.withdrawal_fee = U256::from(51u64);
    let report = run_all(
        &snapshot,
        &snapshot,
        &DeploymentConfig::mainnet(),
        &mainnet_fixture(),
    )
    .await;

    assert!(!report.passed());
    let deploy = report.outcome(DEPLOY_SETTINGS_CHECK).expect("deploy outcome");
    assert!(!deploy.passed);
    assert_eq!(
        deploy.mismatch.as_ref().expect("mismatch").field,
        "withdrawalFee"
    );
    assert!(deploy.error.is_none());
    let setup = report.outcome(SETUP_ADDRESS_CHECK).expect("setup outcome");
    assert!(setup.passed);

    let text = report.render_text();
    assert!(text.contains("[FAIL] deploy_settings: `withdrawalFee` expected 50, got 51"));
    assert!(text.contains("[PASS] setup_address"));
}

#[tokio::test]
async fn test_fixture_errors_are_reported_separately_from_mismatches() {
    let snapshot = deployed_snapshot();
    let mut fixture = mainnet_fixture();
    fixture.tokens = vec![Address::repeat_byte(0x33)];
    let report = run_all(&snapshot, &snapshot, &DeploymentConfig::mainnet(), &fixture).await;

    let setup = report.outcome(SETUP_ADDRESS_CHECK).expect("setup outcome");
    assert!(!setup.passed);
    assert!(setup.mismatch.is_none());
    assert!(setup
        .error
        .as_deref()
        .is_some_and(|e| e.contains("no decimals")));

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["checks"][1]["name"], SETUP_ADDRESS_CHECK);
    assert_eq!(json["checks"][0]["passed"], true);
}
