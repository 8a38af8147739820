//! Ethereum data types.

// Re-export the numeric types used for JSON-RPC quantities
pub use ethereum_types::{U256, U64};

mod network;
pub use network::*;
