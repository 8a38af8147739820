use super::{U256, U64};
use serde::{Deserialize, Serialize, Serializer};
use std::{
    convert::{TryFrom, TryInto},
    fmt,
    time::Duration,
};
use strum::{AsRefStr, EnumCount, EnumIter, EnumString, EnumVariantNames};

// compatibility re-export
#[doc(hidden)]
pub use num_enum::{TryFromPrimitive, TryFromPrimitiveError};
#[doc(hidden)]
pub type ParseNetworkError = TryFromPrimitiveError<Network>;

// When adding a new network:
//   1. add new variant to the Network enum;
//   2. add extra information in the last `impl` block (block time, Infura subdomain);
//   3. (optional) add aliases:
//     - Strum (in kebab-case): `#[strum(to_string = "<main>", serialize = "<aliasX>", ...)]`
//      `to_string = "<main>"` must be present and will be used in `Display`, `Serialize`
//      and `FromStr`, while `serialize = "<aliasX>"` will be appended to `FromStr`.
//     - Serde (in snake_case): `#[serde(alias = "<aliasX>", ...)]`
//      Aliases are appended to the `Deserialize` implementation.
//     - Add a test at the bottom of the file

// We don't derive Serialize because it is manually implemented using AsRef<str>, so that
// serialization matches `Display` (kebab-case) while `Deserialize` stays snake_case.

/// An Ethereum EIP-155 Network.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,         // AsRef<str>, fmt::Display and serde::Serialize
    EnumVariantNames, // Network::VARIANTS
    EnumString,       // FromStr, TryFrom<&str>
    EnumIter,         // Network::iter
    EnumCount,        // Network::COUNT
    TryFromPrimitive, // TryFrom<u64>
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
#[repr(u64)]
pub enum Network {
    #[strum(to_string = "mainnet", serialize = "ethlive", serialize = "homestead")]
    #[serde(alias = "ethlive", alias = "homestead")]
    Mainnet = 1,
    Goerli = 5,
    Holesky = 17000,
    Sepolia = 11155111,
}

// === impl Network ===

// This must be implemented manually so we avoid a conflict with `TryFromPrimitive` where it treats
// the `#[default]` attribute as its own `#[num_enum(default)]`
impl Default for Network {
    fn default() -> Self {
        Self::Sepolia
    }
}

impl From<Network> for u64 {
    fn from(network: Network) -> Self {
        network as u64
    }
}

impl From<Network> for U64 {
    fn from(network: Network) -> Self {
        u64::from(network).into()
    }
}

impl From<Network> for U256 {
    fn from(network: Network) -> Self {
        u64::from(network).into()
    }
}

impl TryFrom<U64> for Network {
    type Error = ParseNetworkError;

    fn try_from(value: U64) -> Result<Self, Self::Error> {
        value.low_u64().try_into()
    }
}

impl TryFrom<U256> for Network {
    type Error = ParseNetworkError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.bits() > 64 {
            // `TryFromPrimitiveError` only has a `number` field which has the same type
            // as the `#[repr(_)]` attribute on the enum.
            return Err(ParseNetworkError { number: value.low_u64() })
        }
        value.low_u64().try_into()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_ref())
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.as_ref())
    }
}

// NB: all utility functions *should* be explicitly exhaustive (not use `_` matcher) so we don't
//     forget to update them when adding a new `Network` variant.
impl Network {
    /// Returns the network's average blocktime, if applicable.
    ///
    /// It can be beneficial to know the average blocktime to adjust the polling of an HTTP provider
    /// for example.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpcprobe_core::types::Network;
    /// use std::time::Duration;
    ///
    /// assert_eq!(
    ///     Network::Sepolia.average_blocktime_hint(),
    ///     Some(Duration::from_millis(12_000)),
    /// );
    /// ```
    pub const fn average_blocktime_hint(&self) -> Option<Duration> {
        use Network::*;

        let ms = match self {
            Mainnet | Goerli | Holesky | Sepolia => 12_000,
        };

        Some(Duration::from_millis(ms))
    }

    /// Returns the subdomain Infura serves this network's JSON-RPC endpoint under.
    pub const fn infura_subdomain(&self) -> &'static str {
        use Network::*;

        match self {
            Mainnet => "mainnet",
            Goerli => "goerli",
            Holesky => "holesky",
            Sepolia => "sepolia",
        }
    }

    /// Returns the Infura HTTPS endpoint for this network and the given project id.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpcprobe_core::types::Network;
    ///
    /// assert_eq!(
    ///     Network::Sepolia.infura_url("YOUR_INFURA_PROJECT_ID"),
    ///     "https://sepolia.infura.io/v3/YOUR_INFURA_PROJECT_ID",
    /// );
    /// ```
    pub fn infura_url(&self, project_id: impl AsRef<str>) -> String {
        format!("https://{}.infura.io/v3/{}", self.infura_subdomain(), project_id.as_ref())
    }
}
