//! Hostname to address resolution
//!
//! The probe core only ever sees a resolved `IpAddr`; this module is the
//! boundary that produces it. IPv4 addresses are preferred when a name has
//! both families, matching the first-A-record behavior of classic
//! resolver-based ping tools.

use crate::error::{AppError, Result};
use std::net::IpAddr;

/// Resolve a hostname or IP literal to a single address
pub async fn resolve_target(host: &str) -> Result<IpAddr> {
    // Literal addresses skip the resolver entirely
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }

    let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
        .await
        .map_err(|e| AppError::resolve(format!("lookup for '{}' failed: {}", host, e)))?
        .map(|sa| sa.ip())
        .collect();

    addrs
        .iter()
        .copied()
        .find(IpAddr::is_ipv4)
        .or_else(|| addrs.first().copied())
        .ok_or_else(|| AppError::resolve(format!("lookup for '{}' returned no addresses", host)))
}
