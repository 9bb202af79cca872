//! Checks that compare a deployed strategy against the deployment recipe.
//!
//! Each check is a straight sequence of read-then-compare steps and stops at the
//! first comparison that fails.

use crate::error::ExpectationMismatch;
use std::fmt::Display;

pub mod deploy_settings;
pub mod report;
pub mod setup_address;

pub use self::deploy_settings::verify_deploy_settings;
pub use self::report::{run_all, CheckOutcome, VerificationReport};
pub use self::setup_address::verify_setup_address;

pub(crate) fn expect_eq<T>(
    field: &str,
    expected: T,
    actual: T,
) -> std::result::Result<(), ExpectationMismatch>
where
    T: PartialEq + Display,
{
    if expected == actual {
        tracing::debug!("[VERIFY] {} == {}", field, actual);
        return Ok(());
    }
    tracing::warn!(
        "[VERIFY] {} mismatch: expected {} got {}",
        field,
        expected,
        actual
    );
    Err(ExpectationMismatch::new(field, expected, actual))
}

/// Position-by-position comparison; a length difference fails at the first
/// index past the shorter list.
pub(crate) fn expect_sequence<T>(
    field: &str,
    expected: &[T],
    actual: &[T],
) -> std::result::Result<(), ExpectationMismatch>
where
    T: PartialEq + Display,
{
    let len = expected.len().max(actual.len());
    for idx in 0..len {
        let slot = format!("{field}[{idx}]");
        match (expected.get(idx), actual.get(idx)) {
            (Some(want), Some(got)) => expect_eq(&slot, want, got)?,
            (Some(want), None) => {
                tracing::warn!("[VERIFY] {} missing: expected {}", slot, want);
                return Err(ExpectationMismatch::new(slot, want, "<missing>"));
            }
            (None, Some(got)) => {
                tracing::warn!("[VERIFY] {} unexpected extra entry {}", slot, got);
                return Err(ExpectationMismatch::new(slot, "<end of list>", got));
            }
            (None, None) => break,
        }
    }
    Ok(())
}
