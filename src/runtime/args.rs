use crate::utils::config::{parse_address, parse_fee_schedule, validate_http_url, RunnerConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeArgs {
    pub config: RunnerConfig,
    /// Replay the checks against a captured snapshot instead of a live endpoint.
    pub snapshot: Option<PathBuf>,
    pub dump_snapshot: bool,
    pub format: OutputFormat,
    pub help: bool,
}

pub const USAGE: &str = "usage: strategy_verify --strategy <0x...> [--vault <0x...>] [--rpc-url <url>] \
     [--aave <0x...>] [--borrowed <0x...>] [--token <0x...>]... \
     [--fees <gov,strategist,withdrawal>] [--json] [--dump-snapshot | --snapshot <path>]\n\
     env fallback: ETH_RPC_URL or RPC_URL, STRATEGY_ADDRESS, VAULT_ADDRESS,\n\
     AAVE_TOKEN_ADDRESS, BORROWED_TOKEN_ADDRESS, FIXTURE_TOKENS (comma-separated), FEES";

/// Applies CLI flags on top of `base` (usually `RunnerConfig::from_env()`).
pub fn parse_runtime_args_from_iter<I, S>(base: RunnerConfig, args: I) -> anyhow::Result<RuntimeArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = RuntimeArgs {
        config: base,
        snapshot: None,
        dump_snapshot: false,
        format: OutputFormat::Text,
        help: false,
    };
    // --token replaces the env list rather than appending to it.
    let mut cli_tokens = Vec::new();

    let mut iter = args.into_iter().map(|arg| arg.as_ref().to_string());
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--help" | "-h" => parsed.help = true,
            "--json" => parsed.format = OutputFormat::Json,
            "--dump-snapshot" => parsed.dump_snapshot = true,
            "--snapshot" => parsed.snapshot = Some(PathBuf::from(value(arg.as_str())?)),
            "--rpc-url" | "-r" => {
                let url = value(arg.as_str())?;
                validate_http_url("--rpc-url", &url)?;
                parsed.config.rpc_url = Some(url.trim().to_string());
            }
            "--strategy" | "-s" => {
                parsed.config.strategy = Some(parse_address("--strategy", &value(arg.as_str())?)?);
            }
            "--vault" => parsed.config.vault = Some(parse_address("--vault", &value(arg.as_str())?)?),
            "--aave" => parsed.config.aave = Some(parse_address("--aave", &value(arg.as_str())?)?),
            "--borrowed" => {
                parsed.config.borrowed = Some(parse_address("--borrowed", &value(arg.as_str())?)?);
            }
            "--token" | "-t" => cli_tokens.push(parse_address("--token", &value(arg.as_str())?)?),
            "--fees" => parsed.config.fees = Some(parse_fee_schedule("--fees", &value(arg.as_str())?)?),
            other => return Err(anyhow::anyhow!("unknown argument '{other}'")),
        }
    }

    if !cli_tokens.is_empty() {
        parsed.config.tokens = cli_tokens;
    }
    // Range-check an override here so a bad value fails before any read.
    parsed.config.deployment()?;
    if parsed.dump_snapshot && parsed.snapshot.is_some() {
        return Err(anyhow::anyhow!(
            "--dump-snapshot captures from a live endpoint and cannot be combined with --snapshot"
        ));
    }
    Ok(parsed)
}

pub fn parse_runtime_args() -> anyhow::Result<RuntimeArgs> {
    parse_runtime_args_from_iter(RunnerConfig::from_env()?, std::env::args().skip(1))
}
