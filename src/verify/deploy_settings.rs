use super::{expect_eq, expect_sequence};
use crate::chain::StrategyReader;
use crate::config::deployment::DeploymentConfig;
use crate::error::Result;
use alloy::primitives::{Address, U256};

/// Confirms the strategy was deployed with the configured protected tokens,
/// governance and fees.
///
/// The last protected token comes from the fixture (`aave`), not the config.
pub async fn verify_deploy_settings<S>(
    strategy: &S,
    config: &DeploymentConfig,
    aave: Address,
) -> Result<()>
where
    S: StrategyReader + ?Sized,
{
    let protected_tokens = strategy.protected_tokens().await?;
    let expected = [config.want, config.reward_token, aave];
    expect_sequence("getProtectedTokens", &expected, &protected_tokens)?;

    expect_eq("governance", config.governance, strategy.governance().await?)?;

    expect_eq(
        "performanceFeeGovernance",
        U256::from(config.fees.governance_performance_fee),
        strategy.performance_fee_governance().await?,
    )?;
    expect_eq(
        "performanceFeeStrategist",
        U256::from(config.fees.strategist_performance_fee),
        strategy.performance_fee_strategist().await?,
    )?;
    expect_eq(
        "withdrawalFee",
        U256::from(config.fees.withdrawal_fee),
        strategy.withdrawal_fee().await?,
    )?;

    tracing::info!(
        "[VERIFY] deploy settings ok for strategy={:#x}",
        strategy.address()
    );
    Ok(())
}
