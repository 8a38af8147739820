use rpcprobe_core::types::Network;
use rpcprobe_providers::{test_provider::TestProvider, Http, Provider, ProviderExt, MAINNET, SEPOLIA};
use std::{convert::TryFrom, time::Duration};

#[test]
fn construction_does_not_connect() {
    // the placeholder project id is rejected by Infura, but only once a request is sent
    let provider = SEPOLIA.provider();
    assert_eq!(provider.url().host_str(), Some("sepolia.infura.io"));
    assert!(provider.url().path().starts_with("/v3/"));

    let provider = MAINNET.provider();
    assert_eq!(provider.url().host_str(), Some("mainnet.infura.io"));
}

#[test]
fn malformed_endpoints_fail_to_construct() {
    for src in ["", "sepolia.infura.io/v3/abc", "https://", "http://exa mple.com"] {
        assert!(Provider::<Http>::try_from(src).is_err(), "{src:?} should not parse");
    }
}

#[test]
fn for_network_tunes_interval() {
    let provider = SEPOLIA.provider().for_network(SEPOLIA.network());
    assert_eq!(provider.get_interval(), Duration::from_secs(6));
}

#[tokio::test]
async fn sepolia_chain_id() {
    if !TestProvider::has_project_id() {
        return
    }

    let provider = SEPOLIA.provider();
    let chain_id = provider.get_chainid().await.unwrap();
    assert_eq!(Network::try_from(chain_id).unwrap(), Network::Sepolia);
    assert!(!provider.client_version().await.unwrap().is_empty());
}

#[tokio::test]
async fn try_connect_picks_up_network() {
    if !TestProvider::has_project_id() {
        return
    }

    let provider = Provider::<Http>::try_connect(&SEPOLIA.url()).await.unwrap();
    assert_eq!(provider.get_interval(), Duration::from_secs(6));
}

#[tokio::test]
async fn mainnet_chain_id() {
    if !TestProvider::has_project_id() {
        return
    }

    let chain_id = MAINNET.provider().get_chainid().await.unwrap();
    assert_eq!(Network::try_from(chain_id).unwrap(), MAINNET.network());
}
