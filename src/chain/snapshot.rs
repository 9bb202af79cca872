use super::{ContractDirectory, StrategyReader};
use crate::error::{AuditError, Result};
use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDecimals {
    pub token: Address,
    pub decimals: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderLendingPool {
    pub address_provider: Address,
    pub lending_pool: Address,
}

/// Every value the checks read, frozen at one point in time.
///
/// Serves as both the strategy and the directory, so a capture can be replayed
/// offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySnapshot {
    pub strategy: Address,
    pub protected_tokens: Vec<Address>,
    pub governance: Address,
    pub performance_fee_governance: U256,
    pub performance_fee_strategist: U256,
    pub withdrawal_fee: U256,
    pub v_token: Address,
    pub decimals: U256,
    pub address_provider: Address,
    pub lending_pool: Address,
    #[serde(default)]
    pub tokens: Vec<TokenDecimals>,
    #[serde(default)]
    pub address_providers: Vec<ProviderLendingPool>,
}

impl StrategySnapshot {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AuditError::Fixture(format!("failed to read snapshot {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| AuditError::Fixture(format!("malformed snapshot json: {e}")))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AuditError::Fixture(format!("failed to encode snapshot: {e}")))
    }
}

#[async_trait]
impl StrategyReader for StrategySnapshot {
    fn address(&self) -> Address {
        self.strategy
    }

    async fn protected_tokens(&self) -> Result<Vec<Address>> {
        Ok(self.protected_tokens.clone())
    }

    async fn governance(&self) -> Result<Address> {
        Ok(self.governance)
    }

    async fn performance_fee_governance(&self) -> Result<U256> {
        Ok(self.performance_fee_governance)
    }

    async fn performance_fee_strategist(&self) -> Result<U256> {
        Ok(self.performance_fee_strategist)
    }

    async fn withdrawal_fee(&self) -> Result<U256> {
        Ok(self.withdrawal_fee)
    }

    async fn v_token(&self) -> Result<Address> {
        Ok(self.v_token)
    }

    async fn decimals(&self) -> Result<U256> {
        Ok(self.decimals)
    }

    async fn address_provider(&self) -> Result<Address> {
        Ok(self.address_provider)
    }

    async fn lending_pool(&self) -> Result<Address> {
        Ok(self.lending_pool)
    }
}

#[async_trait]
impl ContractDirectory for StrategySnapshot {
    async fn token_decimals(&self, token: Address) -> Result<u8> {
        self.tokens
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.decimals)
            .ok_or_else(|| {
                AuditError::Fixture(format!("snapshot has no decimals for token {token:#x}"))
            })
    }

    async fn lending_pool_of(&self, address_provider: Address) -> Result<Address> {
        self.address_providers
            .iter()
            .find(|entry| entry.address_provider == address_provider)
            .map(|entry| entry.lending_pool)
            .ok_or_else(|| {
                AuditError::Fixture(format!(
                    "snapshot has no lending pool for address provider {address_provider:#x}"
                ))
            })
    }
}

/// Reads every value the checks need, one call at a time.
///
/// `tokens` lists the auxiliary tokens whose `decimals()` should be recorded.
pub async fn capture_snapshot<S, D>(
    strategy: &S,
    directory: &D,
    tokens: &[Address],
) -> Result<StrategySnapshot>
where
    S: StrategyReader + ?Sized,
    D: ContractDirectory + ?Sized,
{
    let address_provider = strategy.address_provider().await?;
    let mut snapshot = StrategySnapshot {
        strategy: strategy.address(),
        protected_tokens: strategy.protected_tokens().await?,
        governance: strategy.governance().await?,
        performance_fee_governance: strategy.performance_fee_governance().await?,
        performance_fee_strategist: strategy.performance_fee_strategist().await?,
        withdrawal_fee: strategy.withdrawal_fee().await?,
        v_token: strategy.v_token().await?,
        decimals: strategy.decimals().await?,
        address_provider,
        lending_pool: strategy.lending_pool().await?,
        tokens: Vec::with_capacity(tokens.len()),
        address_providers: Vec::new(),
    };

    for token in tokens {
        if snapshot.tokens.iter().any(|entry| entry.token == *token) {
            continue;
        }
        let decimals = directory.token_decimals(*token).await?;
        snapshot.tokens.push(TokenDecimals {
            token: *token,
            decimals,
        });
    }

    let lending_pool = directory.lending_pool_of(address_provider).await?;
    snapshot.address_providers.push(ProviderLendingPool {
        address_provider,
        lending_pool,
    });

    tracing::info!(
        "[SNAPSHOT] captured strategy={:#x} protected_tokens={} tokens={}",
        snapshot.strategy,
        snapshot.protected_tokens.len(),
        snapshot.tokens.len()
    );
    Ok(snapshot)
}
