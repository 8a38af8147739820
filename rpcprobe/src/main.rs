use rpcprobe::{config::ProbeConfig, smoke, ProbeError};
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init().map_err(|err| eyre::eyre!(err))?;

    // construction failures are reported, not propagated: the exit status stays 0
    let outcome = ProbeConfig::from_env()
        .map_err(ProbeError::from)
        .and_then(|config| smoke::probe(&config));
    smoke::report(outcome);

    Ok(())
}
