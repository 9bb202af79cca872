//! Deployment constants and on-chain consistency checks for the wBTC/Aave Badger
//! strategy.
//!
//! `config::deployment` holds the recipe, `verify` compares a deployed strategy
//! against it through the read-only views in `chain`.

pub mod chain;
pub mod error;
pub mod fixture;
pub mod runtime;
pub mod utils;
pub mod verify;

pub mod config {
    pub mod deployment;
}

pub use error::{AuditError, ExpectationMismatch, Result};
