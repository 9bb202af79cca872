use super::bindings::{IERC20Metadata, ILendingPoolAddressesProvider, IStrategy};
use super::{ContractDirectory, StrategyReader};
use crate::error::Result;
use crate::utils::rpc::CallClient;
use alloy::primitives::{Address, U256};
use async_trait::async_trait;

/// Strategy reader backed by `eth_call` against a live endpoint.
#[derive(Clone)]
pub struct RpcStrategy {
    client: CallClient,
    address: Address,
}

impl RpcStrategy {
    pub fn new(client: CallClient, address: Address) -> Self {
        Self { client, address }
    }
}

#[async_trait]
impl StrategyReader for RpcStrategy {
    fn address(&self) -> Address {
        self.address
    }

    async fn protected_tokens(&self) -> Result<Vec<Address>> {
        let ret = self
            .client
            .eth_call(self.address, &IStrategy::getProtectedTokensCall {})
            .await?;
        Ok(ret._0)
    }

    async fn governance(&self) -> Result<Address> {
        let ret = self
            .client
            .eth_call(self.address, &IStrategy::governanceCall {})
            .await?;
        Ok(ret._0)
    }

    async fn performance_fee_governance(&self) -> Result<U256> {
        let ret = self
            .client
            .eth_call(self.address, &IStrategy::performanceFeeGovernanceCall {})
            .await?;
        Ok(ret._0)
    }

    async fn performance_fee_strategist(&self) -> Result<U256> {
        let ret = self
            .client
            .eth_call(self.address, &IStrategy::performanceFeeStrategistCall {})
            .await?;
        Ok(ret._0)
    }

    async fn withdrawal_fee(&self) -> Result<U256> {
        let ret = self
            .client
            .eth_call(self.address, &IStrategy::withdrawalFeeCall {})
            .await?;
        Ok(ret._0)
    }

    async fn v_token(&self) -> Result<Address> {
        let ret = self
            .client
            .eth_call(self.address, &IStrategy::vTokenCall {})
            .await?;
        Ok(ret._0)
    }

    async fn decimals(&self) -> Result<U256> {
        let ret = self
            .client
            .eth_call(self.address, &IStrategy::DECIMALSCall {})
            .await?;
        Ok(ret._0)
    }

    async fn address_provider(&self) -> Result<Address> {
        let ret = self
            .client
            .eth_call(self.address, &IStrategy::ADDRESS_PROVIDERCall {})
            .await?;
        Ok(ret._0)
    }

    async fn lending_pool(&self) -> Result<Address> {
        let ret = self
            .client
            .eth_call(self.address, &IStrategy::LENDING_POOLCall {})
            .await?;
        Ok(ret._0)
    }
}

#[derive(Clone)]
pub struct RpcDirectory {
    client: CallClient,
}

impl RpcDirectory {
    pub fn new(client: CallClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContractDirectory for RpcDirectory {
    async fn token_decimals(&self, token: Address) -> Result<u8> {
        let ret = self
            .client
            .eth_call(token, &IERC20Metadata::decimalsCall {})
            .await?;
        Ok(ret._0)
    }

    async fn lending_pool_of(&self, address_provider: Address) -> Result<Address> {
        let ret = self
            .client
            .eth_call(
                address_provider,
                &ILendingPoolAddressesProvider::getLendingPoolCall {},
            )
            .await?;
        Ok(ret._0)
    }
}
