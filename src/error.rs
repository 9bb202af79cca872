use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("expectation mismatch: {0}")]
    Mismatch(#[from] ExpectationMismatch),
    #[error("network error: {0}")]
    Net(#[from] RpcError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("fixture error: {0}")]
    Fixture(String),
}

impl AuditError {
    /// The comparison that failed, if this error came from a check.
    pub fn mismatch(&self) -> Option<&ExpectationMismatch> {
        match self {
            Self::Mismatch(m) => Some(m),
            _ => None,
        }
    }
}

/// A deployed value that differs from what the deployment recipe expects.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("`{field}` expected {expected}, got {actual}")]
pub struct ExpectationMismatch {
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl ExpectationMismatch {
    pub fn new(
        field: impl Into<String>,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("eth_call `{call}` timed out after {waited_ms}ms")]
    Timeout { call: &'static str, waited_ms: u64 },
    #[error("eth_call `{call}` reverted: {reason}")]
    Reverted { call: &'static str, reason: String },
    #[error("failed to decode `{call}` return data: {reason}")]
    Decode { call: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {0}")]
    Missing(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
