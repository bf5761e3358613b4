//! TCP connect probe.

use std::net::IpAddr;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;

/// Measure the round-trip time of one TCP connect to `ip:port`.
///
/// Returns the elapsed time in milliseconds rounded to 2 decimals, or
/// `None` if the connect fails or times out. An unreachable address is a
/// measurement result, not an error.
pub async fn tcp_ping(ip: IpAddr, port: u16, timeout: Duration) -> Option<f64> {
    let start = Instant::now();
    match tokio::time::timeout(timeout, TcpStream::connect((ip, port))).await {
        Ok(Ok(_stream)) => {
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            Some((elapsed_ms * 100.0).round() / 100.0)
        }
        Ok(Err(e)) => {
            log::debug!("TCP connect to {ip}:{port} failed: {e}");
            None
        }
        Err(_) => {
            log::debug!("TCP connect to {ip}:{port} timed out after {timeout:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_tcp_ping_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let rtt = tcp_ping("127.0.0.1".parse().unwrap(), port, Duration::from_secs(2)).await;
        let rtt = rtt.expect("Connect to local listener should succeed");
        assert!(rtt >= 0.0);
        assert!(rtt < 2000.0);
    }

    #[tokio::test]
    async fn test_tcp_ping_refused() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let rtt = tcp_ping("127.0.0.1".parse().unwrap(), port, Duration::from_secs(2)).await;
        assert_eq!(rtt, None, "Refused connect should report None, not error");
    }
}
