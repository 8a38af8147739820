mod common;
pub use common::{Authorization, JsonRpcError, Request, Response};

mod http;
pub use self::http::{ClientError as HttpClientError, HttpBuildError, Provider as Http};

mod mock;
pub use mock::{MockError, MockProvider, MockResponse};
