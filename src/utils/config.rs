use crate::config::deployment::{DeploymentConfig, FeeSchedule};
use crate::error::ConfigError;
use crate::fixture::DeployedFixture;
use alloy::primitives::Address;
use std::env;
use std::str::FromStr;

/// Runtime settings for the verifier binary, read from the environment.
///
/// CLI flags are layered on top by `runtime::args`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerConfig {
    pub rpc_url: Option<String>,
    pub strategy: Option<Address>,
    pub vault: Option<Address>,
    pub aave: Option<Address>,
    pub borrowed: Option<Address>,
    pub tokens: Vec<Address>,
    /// Fee triple to expect instead of the recipe defaults.
    pub fees: Option<FeeSchedule>,
}

pub fn validate_http_url(name: &str, raw: &str) -> Result<(), ConfigError> {
    let parsed = raw.trim().parse::<reqwest::Url>().map_err(|e| {
        ConfigError::Invalid(format!("{name} must be a valid URL, got `{raw}`: {e}"))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Invalid(format!(
            "{name} must use http(s) scheme, got `{other}`"
        ))),
    }
}

pub fn parse_address(name: &str, raw: &str) -> Result<Address, ConfigError> {
    let trimmed = raw.trim();
    Address::from_str(trimmed)
        .map_err(|e| ConfigError::Invalid(format!("invalid {name} '{trimmed}': {e}")))
}

/// Comma-separated address list; blank entries are skipped.
pub fn parse_address_list(name: &str, raw: &str) -> Result<Vec<Address>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_address(name, s))
        .collect()
}

/// `governance,strategist,withdrawal` in bps. Range checks happen in
/// `RunnerConfig::deployment`.
pub fn parse_fee_schedule(name: &str, raw: &str) -> Result<FeeSchedule, ConfigError> {
    let parts = raw
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u64>()
                .map_err(|e| ConfigError::Invalid(format!("invalid {name} entry '{part}': {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let fees: [u64; 3] = parts.try_into().map_err(|got: Vec<u64>| {
        ConfigError::Invalid(format!(
            "{name} needs exactly 3 comma-separated bps values, got {}",
            got.len()
        ))
    })?;
    Ok(FeeSchedule::from_array(fees))
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_address(key: &str) -> Result<Option<Address>, ConfigError> {
    non_empty_var(key)
        .map(|raw| parse_address(key, &raw))
        .transpose()
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let rpc_url = non_empty_var("ETH_RPC_URL").or_else(|| non_empty_var("RPC_URL"));
        if let Some(url) = rpc_url.as_deref() {
            validate_http_url("ETH_RPC_URL", url)?;
        }
        let tokens = match non_empty_var("FIXTURE_TOKENS") {
            Some(raw) => parse_address_list("FIXTURE_TOKENS", &raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            rpc_url,
            strategy: optional_address("STRATEGY_ADDRESS")?,
            vault: optional_address("VAULT_ADDRESS")?,
            aave: optional_address("AAVE_TOKEN_ADDRESS")?,
            borrowed: optional_address("BORROWED_TOKEN_ADDRESS")?,
            tokens,
            fees: non_empty_var("FEES")
                .map(|raw| parse_fee_schedule("FEES", &raw))
                .transpose()?,
        })
    }

    /// Mainnet recipe, with the fee override applied if one was configured.
    pub fn deployment(&self) -> Result<DeploymentConfig, ConfigError> {
        match self.fees {
            Some(fees) => DeploymentConfig::mainnet().with_fees(fees),
            None => Ok(DeploymentConfig::mainnet()),
        }
    }

    pub fn require_rpc_url(&self) -> Result<&str, ConfigError> {
        self.rpc_url.as_deref().ok_or_else(|| {
            ConfigError::Missing("--rpc-url (or ETH_RPC_URL/RPC_URL env) is required".to_string())
        })
    }

    /// Mainnet fixture with any configured handles swapped in.
    ///
    /// `strategy_fallback` is used when no strategy address was configured (e.g.
    /// the address recorded in a snapshot).
    pub fn fixture(&self, strategy_fallback: Option<Address>) -> Result<DeployedFixture, ConfigError> {
        let strategy = self.strategy.or(strategy_fallback).ok_or_else(|| {
            ConfigError::Missing("--strategy (or STRATEGY_ADDRESS env) is required".to_string())
        })?;
        let mut fixture = DeployedFixture::mainnet(strategy);
        fixture.vault = self.vault;
        if let Some(aave) = self.aave {
            fixture.aave = aave;
        }
        if let Some(borrowed) = self.borrowed {
            fixture.borrowed = borrowed;
        }
        if !self.tokens.is_empty() {
            fixture.tokens = self.tokens.clone();
        }
        Ok(fixture)
    }

    /// Fixture for replaying a snapshot recorded from `recorded`.
    ///
    /// A configured strategy must be the one the snapshot was captured from.
    pub fn replay_fixture(&self, recorded: Address) -> Result<DeployedFixture, ConfigError> {
        if let Some(requested) = self.strategy {
            if requested != recorded {
                return Err(ConfigError::Invalid(format!(
                    "--strategy {requested:#x} does not match the snapshot's strategy {recorded:#x}"
                )));
            }
        }
        self.fixture(Some(recorded))
    }
}
