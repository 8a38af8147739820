use thiserror::Error;

/// Errors raised while reading the probe's configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested network is not one the probe knows an endpoint for
    #[error("unknown network `{name}` in {var}")]
    UnknownNetwork {
        /// The environment variable the name was read from
        var: &'static str,
        /// The unrecognized network name
        name: String,
    },
}

/// Anything that can stop the probe from producing a provider
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The configuration could not be read
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The endpoint is not a URL a provider can be bound to
    #[error("invalid endpoint `{url}`: {source}")]
    InvalidUrl {
        /// The endpoint as configured
        url: String,
        /// Why it failed to parse
        #[source]
        source: url::ParseError,
    },
}
