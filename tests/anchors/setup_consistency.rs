//! Anchor Test: setup check wires vToken, precision and lending pool.

use crate::anchor_utils::{deployed_snapshot, ADDRESS_PROVIDER};
use alloy::primitives::{Address, U256};
use strategy_verify::chain::snapshot::{ProviderLendingPool, TokenDecimals};
use strategy_verify::config::deployment::{LP_COMPONENT, WANT};
use strategy_verify::error::AuditError;
use strategy_verify::verify::verify_setup_address;

#[tokio::test]
async fn test_conformant_setup_passes() {
    let snapshot = deployed_snapshot();
    verify_setup_address(&snapshot, &snapshot, LP_COMPONENT, &[WANT])
        .await
        .expect("setup matches");
}

#[tokio::test]
async fn test_wrong_borrowed_token_fails_on_vtoken() {
    let snapshot = deployed_snapshot();
    let err = verify_setup_address(&snapshot, &snapshot, WANT, &[WANT])
        .await
        .expect_err("vToken differs");
    assert_eq!(err.mismatch().expect("mismatch").field, "vToken");
}

#[tokio::test]
async fn test_decimals_follow_first_token_only() {
    let mut snapshot = deployed_snapshot();
    let eighteen = Address::repeat_byte(0x18);
    snapshot.tokens.push(TokenDecimals {
        token: eighteen,
        decimals: 18,
    });

    verify_setup_address(&snapshot, &snapshot, LP_COMPONENT, &[WANT, eighteen])
        .await
        .expect("first token has 8 decimals");

    let err = verify_setup_address(&snapshot, &snapshot, LP_COMPONENT, &[eighteen, WANT])
        .await
        .expect_err("first token has 18 decimals");
    let mismatch = err.mismatch().expect("mismatch");
    assert_eq!(mismatch.field, "DECIMALS");
    assert_eq!(mismatch.expected, "18");
    assert_eq!(mismatch.actual, U256::from(8u64).to_string());
}

#[tokio::test]
async fn test_empty_token_list_is_a_fixture_error() {
    let snapshot = deployed_snapshot();
    let err = verify_setup_address(&snapshot, &snapshot, LP_COMPONENT, &[])
        .await
        .expect_err("no tokens supplied");
    assert!(matches!(err, AuditError::Fixture(_)));
}

#[tokio::test]
async fn test_lending_pool_must_match_address_provider() {
    let mut snapshot = deployed_snapshot();
    snapshot.address_providers = vec![ProviderLendingPool {
        address_provider: ADDRESS_PROVIDER,
        lending_pool: Address::repeat_byte(0x77),
    }];
    let err = verify_setup_address(&snapshot, &snapshot, LP_COMPONENT, &[WANT])
        .await
        .expect_err("strategy pool differs from provider pool");
    let mismatch = err.mismatch().expect("mismatch");
    assert_eq!(mismatch.field, "LENDING_POOL");
    assert_eq!(mismatch.expected, Address::repeat_byte(0x77).to_string());
}

#[tokio::test]
async fn test_provider_is_resolved_from_the_strategy() {
    let mut snapshot = deployed_snapshot();
    // Strategy points at a provider the directory has never seen.
    snapshot.address_provider = Address::repeat_byte(0x99);
    let err = verify_setup_address(&snapshot, &snapshot, LP_COMPONENT, &[WANT])
        .await
        .expect_err("unknown address provider");
    assert!(matches!(err, AuditError::Fixture(_)));
}
