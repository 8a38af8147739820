//! Endpoint helpers.

/// The project id Infura's documentation uses in example endpoints. Requests made with it are
/// rejected by Infura, but it still forms a syntactically valid URL.
pub const INFURA_PLACEHOLDER_PROJECT_ID: &str = "YOUR_INFURA_PROJECT_ID";
