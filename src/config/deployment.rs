//! Deployment settings for the wBTC lending strategy.
//!
//! Deployment tooling and the verification suite both read these by name; the
//! `DeploymentConfig` record bundles them for code that wants a single handle.

use crate::error::ConfigError;
use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};

pub const BADGER_DEV_MULTISIG: Address = address!("b65cef03b9b89f99517643226d76e286ee999e77");

/// wBTC
pub const WANT: Address = address!("2260fac5e5542a773aa44fbcfedf7c193bc2c599");
/// awBTC
pub const LP_COMPONENT: Address = address!("9ff58f4ffb29fa2266ab25e75e2a8b3503311656");
/// stkAAVE
pub const REWARD_TOKEN: Address = address!("4da27a545c0c5b758a6ba100e3a049001de870f5");

pub const PROTECTED_TOKENS: [Address; 3] = [WANT, LP_COMPONENT, REWARD_TOKEN];

/// Upper bound for any fee expressed in basis points.
pub const MAX_BPS: u64 = 10_000;

pub const DEFAULT_GOV_PERFORMANCE_FEE: u64 = 1_000;
pub const DEFAULT_PERFORMANCE_FEE: u64 = 1_000;
pub const DEFAULT_WITHDRAWAL_FEE: u64 = 50;

pub const FEES: [u64; 3] = [
    DEFAULT_GOV_PERFORMANCE_FEE,
    DEFAULT_PERFORMANCE_FEE,
    DEFAULT_WITHDRAWAL_FEE,
];

/// Multichain BadgerRegistry
pub const REGISTRY: Address = address!("Fda7eB6f8b7a9e9fCFd348042ae675d1d652454f");

/// Fee triple in basis points, in the order the strategy reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub governance_performance_fee: u64,
    pub strategist_performance_fee: u64,
    pub withdrawal_fee: u64,
}

impl FeeSchedule {
    pub const fn defaults() -> Self {
        Self {
            governance_performance_fee: DEFAULT_GOV_PERFORMANCE_FEE,
            strategist_performance_fee: DEFAULT_PERFORMANCE_FEE,
            withdrawal_fee: DEFAULT_WITHDRAWAL_FEE,
        }
    }

    pub const fn from_array(fees: [u64; 3]) -> Self {
        Self {
            governance_performance_fee: fees[0],
            strategist_performance_fee: fees[1],
            withdrawal_fee: fees[2],
        }
    }

    pub const fn as_array(&self) -> [u64; 3] {
        [
            self.governance_performance_fee,
            self.strategist_performance_fee,
            self.withdrawal_fee,
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("governance_performance_fee", self.governance_performance_fee),
            ("strategist_performance_fee", self.strategist_performance_fee),
            ("withdrawal_fee", self.withdrawal_fee),
        ];
        for (name, bps) in named {
            if bps > MAX_BPS {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within 0..={MAX_BPS} bps, got {bps}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::defaults()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub governance: Address,
    pub want: Address,
    pub lp_component: Address,
    pub reward_token: Address,
    pub protected_tokens: Vec<Address>,
    pub fees: FeeSchedule,
    pub registry: Address,
}

impl DeploymentConfig {
    pub fn mainnet() -> Self {
        Self {
            governance: BADGER_DEV_MULTISIG,
            want: WANT,
            lp_component: LP_COMPONENT,
            reward_token: REWARD_TOKEN,
            protected_tokens: PROTECTED_TOKENS.to_vec(),
            fees: FeeSchedule::from_array(FEES),
            registry: REGISTRY,
        }
    }

    /// Swaps in a different fee triple after checking it is within bps bounds.
    pub fn with_fees(mut self, fees: FeeSchedule) -> Result<Self, ConfigError> {
        fees.validate()?;
        self.fees = fees;
        Ok(self)
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}
