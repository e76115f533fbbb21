//! Random electrum server selection.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};
use crate::random::random_int_inclusive;

/// A parsed electrum server descriptor.
///
/// Descriptors travel through config files as `host:port:protocol` strings,
/// e.g. `electrum1.cipig.net:10001:tcp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectrumServer {
    pub host: String,
    pub port: u16,
    pub protocol: String,
}

/// Pick a random server from `servers`, skipping `exclude`.
///
/// The excluded entry is typically the server a request just failed
/// against. Fails with [`UtilError::EmptyServerList`] when nothing remains
/// to pick from, and with [`UtilError::InvalidServer`] when the chosen
/// descriptor is not a valid `host:port:protocol` triplet.
pub fn random_electrum_server(servers: &[String], exclude: Option<&str>) -> Result<ElectrumServer> {
    let candidates: Vec<&String> = servers
        .iter()
        .filter(|s| Some(s.as_str()) != exclude)
        .collect();

    if candidates.is_empty() {
        return Err(UtilError::EmptyServerList);
    }

    let pick = random_int_inclusive(0.0, (candidates.len() - 1) as f64) as usize;
    let server = parse_server_descriptor(candidates[pick])?;
    debug!(
        "selected electrum server {}:{} over {}",
        server.host, server.port, server.protocol
    );
    Ok(server)
}

fn parse_server_descriptor(descriptor: &str) -> Result<ElectrumServer> {
    let parts: Vec<&str> = descriptor.split(':').collect();
    if parts.len() != 3 || parts[0].is_empty() {
        return Err(UtilError::InvalidServer(descriptor.to_string()));
    }

    let port = parts[1]
        .parse::<u16>()
        .map_err(|_| UtilError::InvalidServer(descriptor.to_string()))?;

    Ok(ElectrumServer {
        host: parts[0].to_string(),
        port,
        protocol: parts[2].to_string(),
    })
}
