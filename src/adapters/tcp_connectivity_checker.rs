use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::net::TcpStream;

use crate::core::interfaces::adapters::ConnectivityChecker;

/// Treats the network as available when a TCP connection to the search
/// endpoint's host can be opened within the timeout.
pub struct TcpConnectivityChecker {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpConnectivityChecker {
    pub fn for_endpoint(endpoint: &str, timeout: Duration) -> Result<Self> {
        let url = reqwest::Url::parse(endpoint)?;
        let host = url
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("Endpoint has no host: {}", endpoint))?
            .to_string();
        let port = url
            .port_or_known_default()
            .ok_or_else(|| anyhow::anyhow!("Endpoint has no known port: {}", endpoint))?;

        log::debug!("[CONNECTIVITY] Probing {}:{} with timeout {:?}", host, port, timeout);

        Ok(Self {
            host,
            port,
            timeout,
        })
    }
}

#[async_trait]
impl ConnectivityChecker for TcpConnectivityChecker {
    async fn is_connected(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));

        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(_stream)) => {
                log::debug!("[CONNECTIVITY] {}:{} is reachable", self.host, self.port);
                true
            }
            Ok(Err(e)) => {
                log::warn!("[CONNECTIVITY] {}:{} is unreachable: {}", self.host, self.port, e);
                false
            }
            Err(_) => {
                log::warn!(
                    "[CONNECTIVITY] Connecting to {}:{} timed out after {:?}",
                    self.host,
                    self.port,
                    self.timeout
                );
                false
            }
        }
    }
}

/// Used when the endpoint cannot be probed; the search itself will then
/// surface any network failure as an empty list.
pub struct AssumeConnected;

#[async_trait]
impl ConnectivityChecker for AssumeConnected {
    async fn is_connected(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_endpoint_uses_https_default_port() {
        let checker = TcpConnectivityChecker::for_endpoint(
            "https://www.googleapis.com/books/v1/volumes?q=",
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(checker.host, "www.googleapis.com");
        assert_eq!(checker.port, 443);
    }

    #[test]
    fn test_for_endpoint_keeps_explicit_port() {
        let checker =
            TcpConnectivityChecker::for_endpoint("http://localhost:8080/volumes?q=", Duration::from_secs(1))
                .unwrap();

        assert_eq!(checker.host, "localhost");
        assert_eq!(checker.port, 8080);
    }

    #[test]
    fn test_for_endpoint_rejects_malformed_endpoint() {
        assert!(TcpConnectivityChecker::for_endpoint("no scheme here", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_is_connected_detects_listening_socket() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let checker = TcpConnectivityChecker::for_endpoint(
            &format!("http://127.0.0.1:{}/volumes?q=", port),
            Duration::from_secs(2),
        )
        .unwrap();

        assert!(checker.is_connected().await);
    }

    #[tokio::test]
    async fn test_is_connected_reports_closed_port() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let checker = TcpConnectivityChecker::for_endpoint(
            &format!("http://127.0.0.1:{}/volumes?q=", port),
            Duration::from_secs(2),
        )
        .unwrap();

        assert!(!checker.is_connected().await);
    }

    #[tokio::test]
    async fn test_assume_connected_is_always_connected() {
        assert!(AssumeConnected.is_connected().await);
    }
}
