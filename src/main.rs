//! Verifies a deployed wBTC/Aave strategy against the deployment recipe.
//!
//! Reads run against a live endpoint, or against a snapshot captured earlier with
//! `--dump-snapshot`.

use anyhow::{anyhow, Context, Result};
use strategy_verify::chain::{capture_snapshot, RpcDirectory, RpcStrategy, StrategySnapshot};
use strategy_verify::runtime::{emit_fixture_status, parse_runtime_args, OutputFormat, USAGE};
use strategy_verify::utils::env_guard::load_dot_env;
use strategy_verify::utils::rpc::CallClient;
use strategy_verify::verify::{run_all, VerificationReport};

fn init_tracing() {
    // Default to `info` when `RUST_LOG` is unset or invalid.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &VerificationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(report).context("failed to encode report")?
        ),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    load_dot_env();
    init_tracing();

    let args = parse_runtime_args().inspect_err(|_| eprintln!("{USAGE}"))?;
    if args.help {
        eprintln!("{USAGE}");
        return Ok(());
    }

    let config = args.config.deployment()?;

    let report = if let Some(path) = args.snapshot.as_ref() {
        let snapshot = StrategySnapshot::load(path)?;
        let fixture = args.config.replay_fixture(snapshot.strategy)?;
        emit_fixture_status(&args, &config, &fixture);
        run_all(&snapshot, &snapshot, &config, &fixture).await
    } else {
        let fixture = args.config.fixture(None)?;
        emit_fixture_status(&args, &config, &fixture);
        let client = CallClient::connect(args.config.require_rpc_url()?)?;
        tracing::info!(
            "[RPC] eth_call timeout_ms={} retries={}",
            client.timeout_ms(),
            client.retries()
        );
        let strategy = RpcStrategy::new(client.clone(), fixture.strategy);
        let directory = RpcDirectory::new(client);

        if args.dump_snapshot {
            let snapshot = capture_snapshot(&strategy, &directory, &fixture.tokens)
                .await
                .context("failed to capture strategy snapshot")?;
            println!("{}", snapshot.to_json_pretty()?);
            return Ok(());
        }
        run_all(&strategy, &directory, &config, &fixture).await
    };

    print_report(&report, args.format)?;
    if !report.passed() {
        let failed = report
            .checks
            .iter()
            .filter(|check| !check.passed)
            .map(|check| check.name)
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "verification failed for {:#x}: {}",
            report.strategy,
            failed.join(", ")
        ));
    }
    Ok(())
}
