use super::expect_eq;
use crate::chain::{ContractDirectory, StrategyReader};
use crate::error::{AuditError, Result};
use alloy::primitives::{Address, U256};

/// Confirms the strategy is wired to the expected vault token, precision and
/// lending pool.
pub async fn verify_setup_address<S, D>(
    strategy: &S,
    directory: &D,
    borrowed: Address,
    tokens: &[Address],
) -> Result<()>
where
    S: StrategyReader + ?Sized,
    D: ContractDirectory + ?Sized,
{
    expect_eq("vToken", borrowed, strategy.v_token().await?)?;

    let first = tokens.first().copied().ok_or_else(|| {
        AuditError::Fixture("token list is empty; need at least one token".to_string())
    })?;
    let token_decimals = directory.token_decimals(first).await?;
    expect_eq(
        "DECIMALS",
        U256::from(token_decimals),
        strategy.decimals().await?,
    )?;

    let address_provider = strategy.address_provider().await?;
    let resolved = directory.lending_pool_of(address_provider).await?;
    expect_eq("LENDING_POOL", resolved, strategy.lending_pool().await?)?;

    tracing::info!(
        "[VERIFY] setup ok for strategy={:#x} address_provider={:#x}",
        strategy.address(),
        address_provider
    );
    Ok(())
}
