use super::{verify_deploy_settings, verify_setup_address};
use crate::chain::{ContractDirectory, StrategyReader};
use crate::config::deployment::DeploymentConfig;
use crate::error::{ExpectationMismatch, Result};
use crate::fixture::DeployedFixture;
use alloy::primitives::Address;
use serde::Serialize;
use std::fmt::Write as _;

pub const DEPLOY_SETTINGS_CHECK: &str = "deploy_settings";
pub const SETUP_ADDRESS_CHECK: &str = "setup_address";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    /// Set when a comparison failed.
    pub mismatch: Option<ExpectationMismatch>,
    /// Set when the check could not finish (query or fixture failure).
    pub error: Option<String>,
}

impl CheckOutcome {
    fn from_result(name: &'static str, result: Result<()>) -> Self {
        match result {
            Ok(()) => Self {
                name,
                passed: true,
                mismatch: None,
                error: None,
            },
            Err(err) => {
                let mismatch = err.mismatch().cloned();
                let error = if mismatch.is_some() {
                    None
                } else {
                    Some(err.to_string())
                };
                tracing::error!("[VERIFY] check {} failed: {}", name, err);
                Self {
                    name,
                    passed: false,
                    mismatch,
                    error,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub strategy: Address,
    pub vault: Option<Address>,
    pub checks: Vec<CheckOutcome>,
}

impl VerificationReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
        self.checks.iter().find(|check| check.name == name)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "strategy {:#x}", self.strategy);
        if let Some(vault) = self.vault {
            let _ = writeln!(out, "vault    {vault:#x}");
        }
        for check in &self.checks {
            let status = if check.passed { "PASS" } else { "FAIL" };
            let _ = write!(out, "[{status}] {}", check.name);
            if let Some(mismatch) = &check.mismatch {
                let _ = write!(out, ": {mismatch}");
            } else if let Some(error) = &check.error {
                let _ = write!(out, ": {error}");
            }
            out.push('\n');
        }
        out
    }
}

/// Runs both checks; a failure in one does not skip the other.
pub async fn run_all<S, D>(
    strategy: &S,
    directory: &D,
    config: &DeploymentConfig,
    fixture: &DeployedFixture,
) -> VerificationReport
where
    S: StrategyReader + ?Sized,
    D: ContractDirectory + ?Sized,
{
    let deploy = verify_deploy_settings(strategy, config, fixture.aave).await;
    let setup = verify_setup_address(strategy, directory, fixture.borrowed, &fixture.tokens).await;

    VerificationReport {
        strategy: strategy.address(),
        vault: fixture.vault,
        checks: vec![
            CheckOutcome::from_result(DEPLOY_SETTINGS_CHECK, deploy),
            CheckOutcome::from_result(SETUP_ADDRESS_CHECK, setup),
        ],
    }
}
