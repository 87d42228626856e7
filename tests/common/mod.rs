//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use api_relay::config::RelayConfig;
use api_relay::http::HttpServer;
use api_relay::lifecycle::Shutdown;

/// Start a mock downstream that returns a fixed 200 body. Binds an ephemeral
/// port and returns its address.
pub async fn start_mock_downstream(body: &'static str) -> SocketAddr {
    start_programmable_downstream(move || async move { (200, body.to_string()) }).await
}

/// Start a programmable mock downstream. Binds an ephemeral port and returns
/// its address.
pub async fn start_programmable_downstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a relay pointed at `downstream_base`, on an ephemeral port. Returns
/// the relay's base URL and the shutdown handle keeping it alive.
pub async fn start_relay(downstream_base: String) -> (String, Shutdown) {
    let mut config = RelayConfig::default();
    config.downstream.base_url = downstream_base;
    // Keep unreachable-downstream tests fast.
    config.timeouts.downstream_secs = 2;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the serve loop a beat to start accepting.
    tokio::time::sleep(Duration::from_millis(100)).await;

    (format!("http://{}", addr), shutdown)
}

/// Non-pooled client, so each test observes fresh connections.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
