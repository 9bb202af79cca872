use alloy::primitives::{Address, U256};
use proptest::prelude::*;
use strategy_verify::chain::StrategySnapshot;
use strategy_verify::config::deployment::{
    DeploymentConfig, BADGER_DEV_MULTISIG, LP_COMPONENT, REWARD_TOKEN, WANT,
};
use strategy_verify::fixture::AAVE_TOKEN;
use strategy_verify::verify::verify_deploy_settings;

fn snapshot_with(protected_tokens: Vec<Address>) -> StrategySnapshot {
    StrategySnapshot {
        strategy: Address::repeat_byte(0x5e),
        protected_tokens,
        governance: BADGER_DEV_MULTISIG,
        performance_fee_governance: U256::from(1_000u64),
        performance_fee_strategist: U256::from(1_000u64),
        withdrawal_fee: U256::from(50u64),
        v_token: LP_COMPONENT,
        decimals: U256::from(8u64),
        address_provider: Address::ZERO,
        lending_pool: Address::ZERO,
        tokens: Vec::new(),
        address_providers: Vec::new(),
    }
}

fn check(protected_tokens: Vec<Address>) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("current-thread runtime");
    runtime.block_on(async {
        verify_deploy_settings(
            &snapshot_with(protected_tokens),
            &DeploymentConfig::mainnet(),
            AAVE_TOKEN,
        )
        .await
        .map_err(|err| {
            err.mismatch()
                .map(|m| m.field.clone())
                .unwrap_or_else(|| err.to_string())
        })
    })
}

fn pool_token() -> impl Strategy<Value = Address> {
    prop_oneof![
        Just(WANT),
        Just(REWARD_TOKEN),
        Just(AAVE_TOKEN),
        Just(LP_COMPONENT),
        any::<[u8; 20]>().prop_map(Address::from),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn protected_tokens_fail_at_first_differing_index(
        actual in prop::collection::vec(pool_token(), 0..6)
    ) {
        let expected = [WANT, REWARD_TOKEN, AAVE_TOKEN];
        let first_diff = (0..expected.len().max(actual.len()))
            .find(|&idx| expected.get(idx) != actual.get(idx));

        match (first_diff, check(actual.clone())) {
            (None, Ok(())) => {}
            (Some(idx), Err(field)) => {
                prop_assert_eq!(field, format!("getProtectedTokens[{idx}]"));
            }
            (expected_diff, outcome) => {
                prop_assert!(
                    false,
                    "list {:?}: expected diff {:?}, got {:?}",
                    actual,
                    expected_diff,
                    outcome
                );
            }
        }
    }

    #[test]
    fn repeated_checks_agree(actual in prop::collection::vec(pool_token(), 0..5)) {
        prop_assert_eq!(check(actual.clone()), check(actual));
    }
}
