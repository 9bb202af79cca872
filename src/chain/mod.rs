//! Read-only view of the deployed strategy and the contracts it points at.
//!
//! The checks only ever talk to these traits, so they run unchanged against a live
//! RPC endpoint (`rpc`) or a captured `StrategySnapshot`.

use crate::error::Result;
use alloy::primitives::{Address, U256};
use async_trait::async_trait;

pub mod bindings;
pub mod rpc;
pub mod snapshot;

pub use self::rpc::{RpcDirectory, RpcStrategy};
pub use self::snapshot::{capture_snapshot, StrategySnapshot};

/// View functions exposed by the deployed strategy.
#[async_trait]
pub trait StrategyReader: Send + Sync {
    fn address(&self) -> Address;
    async fn protected_tokens(&self) -> Result<Vec<Address>>;
    async fn governance(&self) -> Result<Address>;
    async fn performance_fee_governance(&self) -> Result<U256>;
    async fn performance_fee_strategist(&self) -> Result<U256>;
    async fn withdrawal_fee(&self) -> Result<U256>;
    /// Lending-vault token the strategy deposits into (`vToken()`).
    async fn v_token(&self) -> Result<Address>;
    async fn decimals(&self) -> Result<U256>;
    async fn address_provider(&self) -> Result<Address>;
    async fn lending_pool(&self) -> Result<Address>;
}

/// Resolves auxiliary contracts by address.
#[async_trait]
pub trait ContractDirectory: Send + Sync {
    async fn token_decimals(&self, token: Address) -> Result<u8>;
    /// `getLendingPool()` as reported by the address provider at `address_provider`.
    async fn lending_pool_of(&self, address_provider: Address) -> Result<Address>;
}
