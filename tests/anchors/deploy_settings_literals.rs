//! Anchor Test: deploy-settings check against the literal mainnet recipe.

use crate::anchor_utils::deployed_snapshot;
use alloy::primitives::{address, Address, U256};
use strategy_verify::config::deployment::{DeploymentConfig, BADGER_DEV_MULTISIG};
use strategy_verify::fixture::AAVE_TOKEN;
use strategy_verify::verify::verify_deploy_settings;

#[tokio::test]
async fn test_literal_protected_tokens_pass() {
    let want = address!("2260fac5e5542a773aa44fbcfedf7c193bc2c599");
    let reward = address!("4da27a545c0c5b758a6ba100e3a049001de870f5");
    let mut snapshot = deployed_snapshot();
    snapshot.protected_tokens = vec![want, reward, AAVE_TOKEN];

    verify_deploy_settings(&snapshot, &DeploymentConfig::mainnet(), AAVE_TOKEN)
        .await
        .expect("recipe-conformant strategy must pass");
}

#[tokio::test]
async fn test_fee_triple_passes_and_governance_fee_mismatch_is_named() {
    let config = DeploymentConfig::mainnet();
    let snapshot = deployed_snapshot();
    assert_eq!(
        (
            snapshot.performance_fee_governance,
            snapshot.performance_fee_strategist,
            snapshot.withdrawal_fee
        ),
        (U256::from(1_000u64), U256::from(1_000u64), U256::from(50u64))
    );
    verify_deploy_settings(&snapshot, &config, AAVE_TOKEN)
        .await
        .expect("(1000, 1000, 50) must pass");

    let mut off = deployed_snapshot();
    off.performance_fee_governance = U256::from(900u64);
    let err = verify_deploy_settings(&off, &config, AAVE_TOKEN)
        .await
        .expect_err("900 bps governance fee must fail");
    let mismatch = err.mismatch().expect("comparison failure");
    assert_eq!(mismatch.field, "performanceFeeGovernance");
    assert_eq!(mismatch.expected, "1000");
    assert_eq!(mismatch.actual, "900");
}

#[tokio::test]
async fn test_later_fee_fields_are_checked_in_order() {
    let config = DeploymentConfig::mainnet();

    let mut strategist = deployed_snapshot();
    strategist.performance_fee_strategist = U256::from(2_000u64);
    strategist.withdrawal_fee = U256::from(75u64);
    let err = verify_deploy_settings(&strategist, &config, AAVE_TOKEN)
        .await
        .expect_err("strategist fee differs");
    assert_eq!(
        err.mismatch().expect("mismatch").field,
        "performanceFeeStrategist"
    );

    let mut withdrawal = deployed_snapshot();
    withdrawal.withdrawal_fee = U256::from(75u64);
    let err = verify_deploy_settings(&withdrawal, &config, AAVE_TOKEN)
        .await
        .expect_err("withdrawal fee differs");
    assert_eq!(err.mismatch().expect("mismatch").field, "withdrawalFee");
}

#[tokio::test]
async fn test_wrong_governance_fails() {
    let mut snapshot = deployed_snapshot();
    snapshot.governance = Address::repeat_byte(0x11);
    let err = verify_deploy_settings(&snapshot, &DeploymentConfig::mainnet(), AAVE_TOKEN)
        .await
        .expect_err("governance differs");
    let mismatch = err.mismatch().expect("mismatch");
    assert_eq!(mismatch.field, "governance");
    assert_eq!(mismatch.expected, BADGER_DEV_MULTISIG.to_string());
}
