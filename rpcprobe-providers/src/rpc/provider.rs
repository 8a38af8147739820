use crate::{errors::ProviderError, Http as HttpProvider, JsonRpcClient, MockProvider};

use async_trait::async_trait;
use futures_util::lock::Mutex;
use rpcprobe_core::types::{Network, U256, U64};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    convert::TryFrom,
    fmt::{self, Debug},
    str::FromStr,
    sync::Arc,
    time::Duration,
};
use tracing::trace;
use tracing_futures::Instrument;
use url::{ParseError, Url};

/// The default polling interval for filters and pending transactions
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(7000);

/// The polling interval to use for local endpoints, See [`crate::is_local_endpoint()`]
pub const DEFAULT_LOCAL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Node Clients
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeClient {
    /// Geth
    Geth,
    /// Erigon
    Erigon,
    /// Nethermind
    Nethermind,
    /// Besu
    Besu,
    /// Reth
    Reth,
}

impl FromStr for NodeClient {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split('/').next().unwrap_or(s).to_lowercase().as_str() {
            "geth" => Ok(NodeClient::Geth),
            "erigon" => Ok(NodeClient::Erigon),
            "nethermind" => Ok(NodeClient::Nethermind),
            "besu" => Ok(NodeClient::Besu),
            "reth" => Ok(NodeClient::Reth),
            _ => Err(ProviderError::UnsupportedNodeClient),
        }
    }
}

/// An abstract provider for interacting with the [Ethereum JSON RPC
/// API](https://ethereum.org/en/developers/docs/apis/json-rpc/). Must be instantiated
/// with a data transport which implements the [`JsonRpcClient`](trait@crate::JsonRpcClient) trait
/// (e.g. [HTTP](crate::Http)).
///
/// Instantiating a provider does not contact the node; the first request does.
///
/// # Example
///
/// ```no_run
/// # async fn foo() -> Result<(), Box<dyn std::error::Error>> {
/// use rpcprobe_providers::{Provider, Http};
/// use std::convert::TryFrom;
///
/// let provider = Provider::<Http>::try_from(
///     "https://sepolia.infura.io/v3/YOUR_INFURA_PROJECT_ID"
/// ).expect("could not instantiate HTTP Provider");
///
/// let chain_id = provider.get_chainid().await?;
/// println!("Got chain id: {chain_id}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Provider<P> {
    inner: P,
    interval: Option<Duration>,
    /// Node client hasn't been checked yet = `None`
    /// Supported node client = `Some(NodeClient)`
    node_client: Arc<Mutex<Option<NodeClient>>>,
}

impl<P> AsRef<P> for Provider<P> {
    fn as_ref(&self) -> &P {
        &self.inner
    }
}

impl<P: Debug> Debug for Provider<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("inner", &self.inner)
            .field("interval", &self.get_interval())
            .finish_non_exhaustive()
    }
}

// JSON RPC bindings
impl<P: JsonRpcClient> Provider<P> {
    /// Instantiate a new provider with a backend.
    pub fn new(provider: P) -> Self {
        Self { inner: provider, interval: None, node_client: Arc::new(Mutex::new(None)) }
    }

    /// Returns the type of node we're connected to, while also caching the value for use
    /// in other node-specific API calls.
    pub async fn node_client(&self) -> Result<NodeClient, ProviderError> {
        let mut node_client = self.node_client.lock().await;

        if let Some(node_client) = *node_client {
            Ok(node_client)
        } else {
            let client_version = self.client_version().await?;
            let client_version = client_version.parse::<NodeClient>()?;
            *node_client = Some(client_version);
            Ok(client_version)
        }
    }

    /// Make an RPC request via the internal connection, and return the result.
    pub async fn request<T, R>(&self, method: &str, params: T) -> Result<R, ProviderError>
    where
        T: Debug + Serialize + Send + Sync,
        R: Serialize + DeserializeOwned + Debug + Send,
    {
        let span =
            tracing::trace_span!("rpc", method = method, params = ?serde_json::to_string(&params)?);
        // https://docs.rs/tracing/0.1.22/tracing/span/struct.Span.html#in-asynchronous-code
        let res = async move {
            trace!("tx");
            let res: R = self.inner.request(method, params).await.map_err(Into::into)?;
            trace!(rx = ?serde_json::to_string(&res)?);
            Ok::<_, ProviderError>(res)
        }
        .instrument(span)
        .await?;
        Ok(res)
    }

    /// Returns the node's client version string, e.g. `Geth/v1.13.5-stable/linux-amd64/go1.21.4`
    pub async fn client_version(&self) -> Result<String, ProviderError> {
        self.request("web3_clientVersion", ()).await
    }

    /// Returns the EIP-155 chain id the node is serving
    pub async fn get_chainid(&self) -> Result<U256, ProviderError> {
        self.request("eth_chainId", ()).await
    }

    /// Returns the network id, as reported by `net_version`
    pub async fn get_net_version(&self) -> Result<String, ProviderError> {
        self.request("net_version", ()).await
    }

    /// Gets the latest block number via the `eth_BlockNumber` API
    pub async fn get_block_number(&self) -> Result<U64, ProviderError> {
        self.request("eth_blockNumber", ()).await
    }
}

impl<P> Provider<P> {
    /// Sets the default polling interval for event filters and pending transactions
    /// (default: 7 seconds)
    pub fn set_interval<T: Into<Duration>>(&mut self, interval: T) -> &mut Self {
        self.interval = Some(interval.into());
        self
    }

    /// Sets the default polling interval for event filters and pending transactions
    /// (default: 7 seconds)
    #[must_use]
    pub fn interval<T: Into<Duration>>(mut self, interval: T) -> Self {
        self.set_interval(interval);
        self
    }

    /// Gets the polling interval which the provider currently uses for event filters
    /// and pending transactions (default: 7 seconds)
    pub fn get_interval(&self) -> Duration {
        self.interval.unwrap_or(DEFAULT_POLL_INTERVAL)
    }
}

impl Provider<HttpProvider> {
    /// The Url to which requests are made
    pub fn url(&self) -> &Url {
        self.inner.url()
    }

    /// Mutable access to the Url to which requests are made
    pub fn url_mut(&mut self) -> &mut Url {
        self.inner.url_mut()
    }
}

impl Provider<MockProvider> {
    /// Returns a `Provider` instantiated with an internal "mock" transport.
    ///
    /// # Example
    ///
    /// ```
    /// # async fn foo() -> Result<(), Box<dyn std::error::Error>> {
    /// use rpcprobe_core::types::U64;
    /// use rpcprobe_providers::Provider;
    /// // Instantiate the provider
    /// let (provider, mock) = Provider::mocked();
    /// // Push the mock response
    /// mock.push(U64::from(12))?;
    /// // Make the call
    /// let blk = provider.get_block_number().await.unwrap();
    /// // The response matches
    /// assert_eq!(blk.as_u64(), 12);
    /// // and the request as well!
    /// mock.assert_request("eth_blockNumber", ()).unwrap();
    /// # Ok(())
    /// # }
    /// ```
    pub fn mocked() -> (Self, MockProvider) {
        let mock = MockProvider::new();
        let mock_clone = mock.clone();
        (Self::new(mock), mock_clone)
    }
}

impl TryFrom<&str> for Provider<HttpProvider> {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Ok(Provider::new(HttpProvider::new(Url::parse(src)?)))
    }
}

impl TryFrom<String> for Provider<HttpProvider> {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Provider::try_from(src.as_str())
    }
}

impl<'a> TryFrom<&'a String> for Provider<HttpProvider> {
    type Error = ParseError;

    fn try_from(src: &'a String) -> Result<Self, Self::Error> {
        Provider::try_from(src.as_str())
    }
}

mod sealed {
    use crate::{Http, Provider};
    /// private trait to ensure extension trait is not implement outside of this crate
    pub trait Sealed {}
    impl Sealed for Provider<Http> {}
}

/// Extension trait for `Provider`
///
/// # Example
///
/// Automatically configure poll interval via `eth_chainId`
///
/// Note that this will send an RPC to retrieve the chain id.
///
/// ```no_run
///  # use rpcprobe_providers::{Http, Provider, ProviderExt};
///  # async fn t() -> Result<(), url::ParseError> {
/// let http_provider = Provider::<Http>::try_connect("https://rpc.sepolia.org").await?;
/// # Ok(())
/// # }
/// ```
///
/// The network can also be set without asking the node
///
/// ```no_run
/// use std::convert::TryFrom;
/// use rpcprobe_core::types::Network;
/// use rpcprobe_providers::{Http, Provider, ProviderExt};
/// let http_provider = Provider::<Http>::try_from("https://rpc.sepolia.org").unwrap().for_network(Network::Sepolia);
/// ```
#[async_trait]
pub trait ProviderExt: sealed::Sealed {
    /// The error type that can occur when creating a provider
    type Error: Debug;

    /// Try to create a new `Provider`
    async fn try_connect(url: &str) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Customize `Provider` settings for network.
    ///
    /// E.g. [`Network::average_blocktime_hint()`] returns the average block time which can be used
    /// to tune the polling interval.
    ///
    /// Returns the customized `Provider`
    fn for_network(mut self, network: impl Into<Network>) -> Self
    where
        Self: Sized,
    {
        self.set_network(network);
        self
    }

    /// Customized `Provider` settings for network
    fn set_network(&mut self, network: impl Into<Network>) -> &mut Self;
}

#[async_trait]
impl ProviderExt for Provider<HttpProvider> {
    type Error = ParseError;

    async fn try_connect(url: &str) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        let mut provider = Provider::try_from(url)?;
        if is_local_endpoint(url) {
            provider.set_interval(DEFAULT_LOCAL_POLL_INTERVAL);
        } else if let Some(network) =
            provider.get_chainid().await.ok().and_then(|id| Network::try_from(id).ok())
        {
            provider.set_network(network);
        }

        Ok(provider)
    }

    fn set_network(&mut self, network: impl Into<Network>) -> &mut Self {
        let network = network.into();
        if let Some(blocktime) = network.average_blocktime_hint() {
            // use half of the block time
            self.set_interval(blocktime / 2);
        }
        self
    }
}

/// Returns true if the endpoint is local
///
/// # Example
///
/// ```
/// use rpcprobe_providers::is_local_endpoint;
/// assert!(is_local_endpoint("http://localhost:8545"));
/// assert!(is_local_endpoint("http://127.0.0.1:8545"));
/// ```
#[inline]
pub fn is_local_endpoint(url: &str) -> bool {
    url.contains("127.0.0.1") || url.contains("localhost")
}
