#![cfg(not(target_arch = "wasm32"))]

use rpcprobe_providers::{Http, Provider};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};
use url::Url;

mod http;

mod provider;

/// Instantiates a Provider against `url` that never goes through a system proxy.
pub fn local_provider(url: Url) -> Provider<Http> {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    Provider::new(Http::new_with_client(url, client))
}

/// The request a [`serve_once`] server received.
#[derive(Debug)]
pub struct Received {
    /// Request line and headers
    pub head: String,
    pub body: String,
}

/// Spawns a one-shot HTTP server answering with `response` and yielding the request it saw.
pub async fn serve_once(response: &'static str) -> (Url, JoinHandle<Received>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let received = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert_ne!(n, 0, "connection closed before the request was complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(received) = parse_request(&buf) {
                break received
            }
        };

        let reply = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            response.len(),
            response
        );
        stream.write_all(reply.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
        received
    });

    (Url::parse(&format!("http://{addr}")).unwrap(), handle)
}

/// Returns the request once the headers and `content-length` bytes have arrived.
fn parse_request(buf: &[u8]) -> Option<Received> {
    let text = std::str::from_utf8(buf).ok()?;
    let (head, body) = text.split_once("\r\n\r\n")?;
    let len = head.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.eq_ignore_ascii_case("content-length") {
            value.trim().parse::<usize>().ok()
        } else {
            None
        }
    })?;
    (body.len() >= len)
        .then(|| Received { head: head.to_string(), body: body[..len].to_string() })
}
