// ── Reachability gate ──
//
// Pre-flight connectivity check consulted before every repository call.
// The answer is advisory: the network can drop between the check and the
// request, so transport failures are still handled downstream.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::trace;
use url::Url;

/// Injected connectivity capability.
#[async_trait]
pub trait Reachability: Send + Sync {
    async fn is_connected(&self) -> bool;
}

// ── TCP probe ───────────────────────────────────────────────────────

/// Connectivity check that opens (and drops) a TCP connection to the API host.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// Probe the host and port (explicit or scheme default) of `url`.
    ///
    /// Returns `None` for URLs without a host, such as `file:` URLs.
    pub fn for_url(url: &Url, timeout: Duration) -> Option<Self> {
        let host = url.host_str()?;
        let port = url.port_or_known_default()?;
        Some(Self::new(host, port, timeout))
    }
}

#[async_trait]
impl Reachability for TcpProbe {
    async fn is_connected(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        let reachable = matches!(tokio::time::timeout(self.timeout, connect).await, Ok(Ok(_)));
        trace!(host = %self.host, port = self.port, reachable, "reachability probe");
        reachable
    }
}

// ── Static gate ─────────────────────────────────────────────────────

/// Gate with a fixed, switchable answer.
///
/// Used for the CLI's `--offline` flag and as a test double.
#[derive(Debug)]
pub struct StaticReachability {
    connected: AtomicBool,
}

impl StaticReachability {
    pub const fn online() -> Self {
        Self {
            connected: AtomicBool::new(true),
        }
    }

    pub const fn offline() -> Self {
        Self {
            connected: AtomicBool::new(false),
        }
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }
}

#[async_trait]
impl Reachability for StaticReachability {
    async fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn static_gate_can_be_toggled() {
        let gate = StaticReachability::online();
        assert!(gate.is_connected().await);
        gate.set_connected(false);
        assert!(!gate.is_connected().await);
        assert!(!StaticReachability::offline().is_connected().await);
    }

    #[tokio::test]
    async fn probe_reaches_a_listening_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let probe = TcpProbe::new("127.0.0.1", port, Duration::from_secs(1));
        assert!(probe.is_connected().await);
    }

    #[tokio::test]
    async fn probe_fails_on_a_closed_port() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };
        let probe = TcpProbe::new("127.0.0.1", port, Duration::from_secs(1));
        assert!(!probe.is_connected().await);
    }

    #[test]
    fn probe_uses_scheme_default_port() {
        let url = Url::parse("https://api.lunance.id/api/v1").unwrap();
        let probe = TcpProbe::for_url(&url, TcpProbe::DEFAULT_TIMEOUT).unwrap();
        assert_eq!(probe.host, "api.lunance.id");
        assert_eq!(probe.port, 443);

        let local = Url::parse("http://localhost:8000/api/v1").unwrap();
        assert_eq!(TcpProbe::for_url(&local, TcpProbe::DEFAULT_TIMEOUT).unwrap().port, 8000);
    }
}
