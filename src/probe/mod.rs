//! Single-probe TCP handshake measurement
//!
//! One probe = one fresh non-blocking connect, timed from the moment the
//! connection request is issued until the local stack reports handshake
//! completion. The readiness wait is bounded by the caller's timeout rather
//! than the OS connect timeout, which is typically minutes.

use crate::error::{AppError, Result};
use crate::models::ProbeOutcome;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpSocket;
use tokio::time::{self, Instant};

/// Perform one timed connection attempt against `addr`
///
/// Exactly one attempt per call; no connection reuse, so every probe
/// measures a cold handshake. Timeout and connect failures are ordinary
/// outcomes; only socket creation failure (local resource exhaustion)
/// is an error, since the run cannot continue without sockets.
///
/// The socket is closed on every path: the stream drops on success, and the
/// pending connect future (owning the socket) drops on timeout. Signal
/// interruptions during the wait are resumed inside the runtime's reactor
/// and never surface here.
pub async fn probe(addr: SocketAddr, timeout: Duration) -> Result<ProbeOutcome> {
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }
    .map_err(|e| AppError::socket(format!("socket creation failed: {}", e)))?;

    let started = Instant::now();
    match time::timeout(timeout, socket.connect(addr)).await {
        Ok(Ok(stream)) => {
            // Clock stops at handshake readiness, before any data exchange.
            let rtt = started.elapsed();
            drop(stream);
            Ok(ProbeOutcome::Success {
                rtt_ms: rtt.as_secs_f64() * 1000.0,
            })
        }
        Ok(Err(e)) => Ok(ProbeOutcome::ConnectError {
            message: e.to_string(),
        }),
        Err(_elapsed) => Ok(ProbeOutcome::Timeout),
    }
}
