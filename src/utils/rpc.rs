use crate::error::RpcError;
use alloy::primitives::{Address, Bytes};
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use alloy::rpc::types::{TransactionInput, TransactionRequest};
use alloy::sol_types::SolCall;
use alloy::transports::http::Http;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::{sleep, timeout, Duration};

pub type HttpProvider = RootProvider<Http<Client>>;

const RPC_CALL_TIMEOUT_MS: u64 = 1_500;
const RPC_CALL_RETRIES: usize = 2;
const RPC_ERR_MAX_LEN: usize = 260;

pub fn rpc_call_timeout_ms() -> u64 {
    std::env::var("RPC_CALL_TIMEOUT_MS")
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|v| (250..=20_000).contains(v))
        .unwrap_or(RPC_CALL_TIMEOUT_MS)
}

pub fn rpc_call_retries() -> usize {
    std::env::var("RPC_CALL_RETRIES")
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|v| *v <= 5)
        .unwrap_or(RPC_CALL_RETRIES)
}

pub fn bounded_exponential_backoff_ms(base_ms: u64, streak: u32, cap_ms: u64) -> u64 {
    if base_ms == 0 {
        return 0;
    }
    let clamped = streak.min(8);
    base_ms
        .saturating_mul(1u64 << clamped)
        .min(cap_ms.max(base_ms))
}

fn retry_backoff_ms(attempt: usize) -> u64 {
    bounded_exponential_backoff_ms(100, attempt as u32, 1_800)
}

pub fn is_revert_rpc_error(message: &str) -> bool {
    let msg = message.to_ascii_lowercase();
    msg.contains("execution reverted") || msg.contains("revert")
}

pub fn is_retryable_rpc_error(message: &str) -> bool {
    let msg = message.to_ascii_lowercase();
    let non_retryable = [
        "method not found",
        "-32601",
        "invalid params",
        "-32602",
        "execution reverted",
        "revert",
        "unknown variant",
        "did not match any variant",
        "parse error",
        "-32700",
    ];
    !non_retryable.iter().any(|needle| msg.contains(needle))
}

fn compact_rpc_error_message(message: &str) -> String {
    crate::utils::error::compact_error_message(message, RPC_ERR_MAX_LEN)
}

/// Parses `raw` as an http(s) endpoint and builds a plain HTTP provider on it.
pub fn build_http_provider(raw: &str) -> Result<HttpProvider, RpcError> {
    let trimmed = raw.trim();
    let parsed = trimmed
        .parse::<reqwest::Url>()
        .map_err(|e| RpcError::InvalidUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;
    match parsed.scheme() {
        "http" | "https" => Ok(ProviderBuilder::new().on_http(parsed)),
        other => Err(RpcError::InvalidUrl {
            url: trimmed.to_string(),
            reason: format!("expected http(s) scheme, got `{other}`"),
        }),
    }
}

/// Read-only `eth_call` client with a per-attempt timeout and bounded retries.
#[derive(Clone)]
pub struct CallClient {
    provider: Arc<HttpProvider>,
    timeout_ms: u64,
    retries: usize,
}

impl CallClient {
    pub fn new(provider: HttpProvider) -> Self {
        Self::with_limits(provider, rpc_call_timeout_ms(), rpc_call_retries())
    }

    pub fn with_limits(provider: HttpProvider, timeout_ms: u64, retries: usize) -> Self {
        Self {
            provider: Arc::new(provider),
            timeout_ms: timeout_ms.max(1),
            retries,
        }
    }

    pub fn connect(rpc_url: &str) -> Result<Self, RpcError> {
        Ok(Self::new(build_http_provider(rpc_url)?))
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn retries(&self) -> usize {
        self.retries
    }

    /// Encodes `call`, sends it to `to` and decodes the return tuple.
    ///
    /// Reverts and decode failures are returned immediately; transport errors and
    /// timeouts are retried up to `retries` times with exponential backoff.
    pub async fn eth_call<C>(&self, to: Address, call: &C) -> Result<C::Return, RpcError>
    where
        C: SolCall + Send + Sync,
    {
        let request = TransactionRequest::default()
            .to(to)
            .input(TransactionInput::new(Bytes::from(call.abi_encode())));

        let mut attempt = 0usize;
        loop {
            let started = Instant::now();
            let outcome = timeout(
                Duration::from_millis(self.timeout_ms),
                self.provider.call(&request),
            )
            .await;
            let failure = match outcome {
                Ok(Ok(raw)) => {
                    tracing::debug!(
                        "[RPC] {} to={:#x} bytes={} elapsed_ms={}",
                        C::SIGNATURE,
                        to,
                        raw.len(),
                        started.elapsed().as_millis()
                    );
                    return C::abi_decode_returns(raw.as_ref(), true).map_err(|e| {
                        RpcError::Decode {
                            call: C::SIGNATURE,
                            reason: e.to_string(),
                        }
                    });
                }
                Ok(Err(err)) => {
                    let message = compact_rpc_error_message(&err.to_string());
                    if is_revert_rpc_error(&message) {
                        return Err(RpcError::Reverted {
                            call: C::SIGNATURE,
                            reason: message,
                        });
                    }
                    if !is_retryable_rpc_error(&message) || attempt >= self.retries {
                        return Err(RpcError::Transport(format!(
                            "{} to={:#x} failed on attempt {}/{}: {}",
                            C::SIGNATURE,
                            to,
                            attempt + 1,
                            self.retries + 1,
                            message
                        )));
                    }
                    message
                }
                Err(_) => {
                    if attempt >= self.retries {
                        return Err(RpcError::Timeout {
                            call: C::SIGNATURE,
                            waited_ms: self.timeout_ms,
                        });
                    }
                    format!("timed out after {}ms", self.timeout_ms)
                }
            };

            let backoff_ms = retry_backoff_ms(attempt);
            tracing::warn!(
                "[RPC] {} to={:#x} attempt {}/{} failed ({}); retrying in {}ms",
                C::SIGNATURE,
                to,
                attempt + 1,
                self.retries + 1,
                failure,
                backoff_ms
            );
            sleep(Duration::from_millis(backoff_ms)).await;
            attempt += 1;
        }
    }
}
