use crate::{local_provider, serve_once};
use rpcprobe_core::types::Network;
use rpcprobe_providers::{Authorization, Http, Provider, ProviderError, RpcError};
use serde_json::Value;
use std::convert::TryFrom;
use tokio::net::TcpListener;
use url::Url;

#[tokio::test]
async fn sends_json_rpc_request() {
    let (url, server) = serve_once(r#"{"jsonrpc":"2.0","id":1,"result":"0xaa36a7"}"#).await;
    let provider = local_provider(url);

    let chain_id = provider.get_chainid().await.unwrap();
    assert_eq!(Network::try_from(chain_id).unwrap(), Network::Sepolia);

    let request: Value = serde_json::from_str(&server.await.unwrap().body).unwrap();
    assert_eq!(request["jsonrpc"], "2.0");
    assert_eq!(request["id"], 1);
    assert_eq!(request["method"], "eth_chainId");
    // unit params are left out entirely
    assert!(request.get("params").is_none());
}

#[tokio::test]
async fn sends_authorization_header() {
    let (url, server) = serve_once(r#"{"jsonrpc":"2.0","id":1,"result":"11155111"}"#).await;
    let http = Http::new_with_auth_and_builder(
        url,
        Authorization::basic("user", "pass"),
        reqwest::Client::builder().no_proxy(),
    )
    .unwrap();
    let provider = Provider::new(http);

    assert_eq!(provider.get_net_version().await.unwrap(), "11155111");

    let received = server.await.unwrap();
    let auth = received
        .head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("authorization").then(|| value.trim().to_string())
        })
        .unwrap();
    assert_eq!(auth, "Basic dXNlcjpwYXNz");
}

#[tokio::test]
async fn surfaces_error_responses() {
    let (url, server) = serve_once(
        r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"the method web3_clientVersion does not exist/is not available"}}"#,
    )
    .await;
    let provider = local_provider(url);

    let err = provider.client_version().await.unwrap_err();
    let rpc_err = err.as_error_response().unwrap();
    assert_eq!(rpc_err.code, -32601);
    assert!(rpc_err.message.contains("web3_clientVersion"));
    server.await.unwrap();
}

#[tokio::test]
async fn keeps_undecodable_bodies() {
    let (url, server) = serve_once("invalid project id\n").await;
    let provider = local_provider(url);

    let err = provider.get_block_number().await.unwrap_err();
    assert!(err.is_serde_error());
    assert!(err.to_string().contains("invalid project id"));
    server.await.unwrap();
}

#[tokio::test]
async fn connection_failures_are_http_errors() {
    // grab a free port, then close it again
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = local_provider(Url::parse(&format!("http://{addr}")).unwrap());
    let err = provider.get_net_version().await.unwrap_err();
    assert!(matches!(err, ProviderError::HTTPError(_)));
}
