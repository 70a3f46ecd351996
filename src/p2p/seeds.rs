//! Seed node configuration
//!
//! Bootstrap endpoints for initial peer discovery: DNS seeds that resolve to
//! live nodes, and a compact table of fixed addresses used when DNS seeding
//! is unavailable.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddrV4};
use std::time::{SystemTime, UNIX_EPOCH};

/// One week in seconds
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

/// A DNS seed: a friendly operator name and the hostname to query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// A fixed seed address with a synthetic "last seen" time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub addr: SocketAddrV4,
    /// Unix seconds
    pub last_seen: u64,
}

/// Decode one entry of a compact IPv4 seed table
///
/// Entries hold the address bytes in network order packed into a
/// little-endian `u32`, so `0x42b91f24` is `36.31.185.66`.
pub fn decode_seed_ip(entry: u32) -> Ipv4Addr {
    Ipv4Addr::from(entry.to_le_bytes())
}

/// Convert a compact seed table into usable addresses
///
/// Each entry is given a random last-seen time between one and two weeks
/// before `now`. A node only dials one or two of these before it learns
/// fresher addresses from its peers.
pub fn fixed_seeds_from_table<R: Rng + ?Sized>(
    table: &[u32],
    port: u16,
    now: u64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    table
        .iter()
        .map(|&entry| SeedAddress {
            addr: SocketAddrV4::new(decode_seed_ip(entry), port),
            last_seen: now.saturating_sub(ONE_WEEK + rng.gen_range(1..ONE_WEEK)),
        })
        .collect()
}

/// Current unix time in seconds, or `None` if the clock reads before 1970
pub fn unix_now() -> Option<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs())
}
