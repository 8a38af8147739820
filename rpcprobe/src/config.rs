//! Environment-driven probe configuration.

use crate::ConfigError;
use rpcprobe_core::{types::Network, utils::INFURA_PLACEHOLDER_PROJECT_ID};

/// Overrides the endpoint entirely; used verbatim.
pub const RPC_URL_VAR: &str = "RPCPROBE_RPC_URL";

/// Selects the Infura network when no endpoint override is given.
pub const NETWORK_VAR: &str = "RPCPROBE_NETWORK";

/// Infura project id to put in the endpoint.
pub const INFURA_PROJECT_ID_VAR: &str = "INFURA_PROJECT_ID";

/// Where the probe points its provider.
///
/// The defaults reproduce the hard-coded endpoint
/// `https://sepolia.infura.io/v3/YOUR_INFURA_PROJECT_ID`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Network whose Infura endpoint is used
    pub network: Network,
    /// Infura project id
    pub project_id: String,
    /// Endpoint taking precedence over `network` and `project_id`
    pub url_override: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            network: Network::Sepolia,
            project_id: INFURA_PLACEHOLDER_PROJECT_ID.to_string(),
            url_override: None,
        }
    }
}

impl ProbeConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Variables that are unset or empty keep their default.
    ///
    /// ```
    /// use rpcprobe::config::{ProbeConfig, NETWORK_VAR};
    ///
    /// let config = ProbeConfig::from_lookup(|name| {
    ///     (name == NETWORK_VAR).then(|| "mainnet".to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(config.endpoint(), "https://mainnet.infura.io/v3/YOUR_INFURA_PROJECT_ID");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let mut config = Self::default();

        if let Some(name) = lookup(NETWORK_VAR) {
            config.network = name
                .parse()
                .map_err(|_| ConfigError::UnknownNetwork { var: NETWORK_VAR, name })?;
        }
        if let Some(project_id) = lookup(INFURA_PROJECT_ID_VAR) {
            config.project_id = project_id;
        }
        config.url_override = lookup(RPC_URL_VAR);

        Ok(config)
    }

    /// The endpoint the provider is bound to.
    pub fn endpoint(&self) -> String {
        match &self.url_override {
            Some(url) => url.clone(),
            None => self.network.infura_url(&self.project_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_to_sepolia_placeholder() {
        let config = ProbeConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, ProbeConfig::default());
        assert_eq!(config.endpoint(), "https://sepolia.infura.io/v3/YOUR_INFURA_PROJECT_ID");
    }

    #[test]
    fn project_id_and_network() {
        let config = ProbeConfig::from_lookup(lookup_in(&[
            (NETWORK_VAR, "holesky"),
            (INFURA_PROJECT_ID_VAR, "0123abcd"),
        ]))
        .unwrap();
        assert_eq!(config.network, Network::Holesky);
        assert_eq!(config.endpoint(), "https://holesky.infura.io/v3/0123abcd");
    }

    #[test]
    fn override_wins() {
        let config = ProbeConfig::from_lookup(lookup_in(&[
            (NETWORK_VAR, "mainnet"),
            (RPC_URL_VAR, "http://localhost:8545"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint(), "http://localhost:8545");
    }

    #[test]
    fn empty_values_are_unset() {
        let config = ProbeConfig::from_lookup(lookup_in(&[
            (NETWORK_VAR, ""),
            (INFURA_PROJECT_ID_VAR, ""),
            (RPC_URL_VAR, ""),
        ]))
        .unwrap();
        assert_eq!(config, ProbeConfig::default());
    }

    #[test]
    fn unknown_network() {
        let err = ProbeConfig::from_lookup(lookup_in(&[(NETWORK_VAR, "ropsten")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownNetwork { var: NETWORK_VAR, name: "ropsten".to_string() }
        );
        assert_eq!(err.to_string(), "unknown network `ropsten` in RPCPROBE_NETWORK");
    }
}
