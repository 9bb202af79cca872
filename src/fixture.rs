//! Handles to the deployed contracts the checks run against.

use crate::config::deployment::{LP_COMPONENT, WANT};
use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// AAVE governance token; the third protected token on mainnet deployments.
pub const AAVE_TOKEN: Address = address!("7Fc66500c84A76Ad7e9c93437bFc5Ac33E2DDaE9");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedFixture {
    pub strategy: Address,
    pub vault: Option<Address>,
    /// Environment-specific reward token expected in the last protected slot.
    pub aave: Address,
    /// Lending-vault token the strategy should be wired to.
    pub borrowed: Address,
    /// Tokens the vault handles; the first one sets the expected precision.
    pub tokens: Vec<Address>,
}

impl DeployedFixture {
    pub fn mainnet(strategy: Address) -> Self {
        Self {
            strategy,
            vault: None,
            aave: AAVE_TOKEN,
            borrowed: LP_COMPONENT,
            tokens: vec![WANT],
        }
    }
}
