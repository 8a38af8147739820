//! The probe itself: bind a provider to the configured endpoint and report the outcome.

use crate::{config::ProbeConfig, ProbeError};
use rpcprobe_providers::{Http, Provider};
use std::{convert::TryFrom, fmt::Debug};
use tracing::{debug, error, info};

/// Builds an HTTP provider for `url`. Only the URL is parsed; the node is not contacted.
pub fn build_provider(url: &str) -> Result<Provider<Http>, ProbeError> {
    Provider::<Http>::try_from(url)
        .map_err(|source| ProbeError::InvalidUrl { url: url.to_string(), source })
}

/// Builds the provider `config` points at.
pub fn probe(config: &ProbeConfig) -> Result<Provider<Http>, ProbeError> {
    debug!(
        target: "rpcprobe",
        network = %config.network,
        url_override = config.url_override.is_some(),
        "building provider"
    );
    build_provider(&config.endpoint())
}

/// Logs the outcome of a probe and swallows the error.
///
/// This is the probe's only error boundary: failures end up in the log and nowhere else.
pub fn report<T: Debug>(outcome: Result<T, ProbeError>) -> Option<T> {
    match outcome {
        Ok(provider) => {
            info!(target: "rpcprobe", "Provider created successfully: {provider:?}");
            Some(provider)
        }
        Err(err) => {
            error!(target: "rpcprobe", "Error creating provider: {err}");
            None
        }
    }
}

/// Probes the endpoint `config` points at and logs the outcome.
pub fn run(config: &ProbeConfig) -> Option<Provider<Http>> {
    report(probe(config))
}
