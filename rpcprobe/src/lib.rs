#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[doc(inline)]
pub use rpcprobe_core as core;

#[doc(inline)]
pub use rpcprobe_providers as providers;

pub mod config;

pub mod smoke;

mod errors;
pub use errors::{ConfigError, ProbeError};

/// Easy imports of frequently used type definitions and traits.
#[doc(hidden)]
pub mod prelude {
    pub use super::{config::ProbeConfig, ConfigError, ProbeError};

    pub use super::core::types::*;

    pub use super::providers::*;
}
