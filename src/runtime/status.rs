use crate::config::deployment::DeploymentConfig;
use crate::fixture::DeployedFixture;
use crate::runtime::RuntimeArgs;

/// Logs what the run is about to compare, so a failing report can be traced back
/// to the exact fixture it ran against.
pub fn emit_fixture_status(args: &RuntimeArgs, config: &DeploymentConfig, fixture: &DeployedFixture) {
    let source = match (&args.snapshot, args.config.rpc_url.as_deref()) {
        (Some(path), _) => format!("snapshot:{}", path.display()),
        (None, Some(_)) => "rpc".to_string(),
        (None, None) => "unset".to_string(),
    };
    let tokens = fixture
        .tokens
        .iter()
        .map(|t| format!("{t:#x}"))
        .collect::<Vec<_>>()
        .join(",");
    tracing::info!(
        "[OPS] Fixture resolved: source={} strategy={:#x} vault={} aave={:#x} borrowed={:#x} tokens=[{}]",
        source,
        fixture.strategy,
        fixture
            .vault
            .map(|v| format!("{v:#x}"))
            .unwrap_or_else(|| "-".to_string()),
        fixture.aave,
        fixture.borrowed,
        tokens
    );
    tracing::info!(
        "[OPS] Expected settings: governance={:#x} want={:#x} reward={:#x} fees={:?} registry={:#x}",
        config.governance,
        config.want,
        config.reward_token,
        config.fees.as_array(),
        config.registry
    );
}
