#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod rpc;
pub use rpc::*;

/// Errors
mod errors;
pub use errors::{ProviderError, RpcError};

pub use test_provider::{MAINNET, SEPOLIA};

#[allow(missing_docs)]
/// Pre-instantiated Infura HTTP clients. The project id is read from `INFURA_PROJECT_ID`,
/// falling back to Infura's documentation placeholder.
pub mod test_provider {
    use super::*;
    use crate::Http;
    use once_cell::sync::Lazy;
    use rpcprobe_core::{types::Network, utils::INFURA_PLACEHOLDER_PROJECT_ID};
    use std::convert::TryFrom;

    pub static MAINNET: Lazy<TestProvider> = Lazy::new(|| TestProvider::new(Network::Mainnet));
    pub static SEPOLIA: Lazy<TestProvider> = Lazy::new(|| TestProvider::new(Network::Sepolia));

    #[derive(Debug)]
    pub struct TestProvider {
        network: Network,
    }

    impl TestProvider {
        pub fn new(network: Network) -> Self {
            Self { network }
        }

        pub fn network(&self) -> Network {
            self.network
        }

        /// Whether a real project id was configured, i.e. requests can succeed
        pub fn has_project_id() -> bool {
            project_id().is_some()
        }

        pub fn url(&self) -> String {
            self.url_for(project_id())
        }

        fn url_for(&self, project_id: Option<String>) -> String {
            let project_id =
                project_id.unwrap_or_else(|| INFURA_PLACEHOLDER_PROJECT_ID.to_string());
            self.network.infura_url(project_id)
        }

        pub fn provider(&self) -> Provider<Http> {
            Provider::try_from(self.url().as_str()).expect("Infura endpoints are valid URLs")
        }
    }

    /// An empty `INFURA_PROJECT_ID` counts as unset
    fn project_id() -> Option<String> {
        non_empty(std::env::var("INFURA_PROJECT_ID").ok())
    }

    fn non_empty(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.is_empty())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn empty_project_id_is_unset() {
            assert_eq!(non_empty(Some(String::new())), None);
            assert_eq!(non_empty(None), None);
            assert_eq!(non_empty(Some("abc".to_string())), Some("abc".to_string()));
        }

        #[test]
        fn falls_back_to_placeholder() {
            let url = SEPOLIA.url_for(non_empty(Some(String::new())));
            assert_eq!(url, "https://sepolia.infura.io/v3/YOUR_INFURA_PROJECT_ID");

            let url = MAINNET.url_for(non_empty(Some("abc".to_string())));
            assert_eq!(url, "https://mainnet.infura.io/v3/abc");
        }
    }
}
