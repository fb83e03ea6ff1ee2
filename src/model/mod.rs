pub mod filter;
pub mod stats;

use serde::Serialize;

/// One successfully decoded Ethernet II frame.
///
/// Field names follow the shape consumed at the UI boundary: `source` and
/// `target` are the frame's MAC addresses as lowercase colon-hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EthernetRecord {
    /// Resolved ethertype label ("IPv4", "ARP", ..., or "unknown(0x....)").
    pub eth_type: String,
    /// Source MAC address.
    pub source: String,
    /// Destination MAC address.
    pub target: String,
    pub ts_sec: u32,
    pub ts_usec: u32,
}

/// One successfully decoded IPv4 header. Exists only for frames whose
/// ethertype is IPv4; timestamps are copied unchanged from the raw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv4Record {
    /// Source IP, dotted decimal.
    pub source: String,
    /// Destination IP, dotted decimal.
    pub target: String,
    /// IP protocol number, kept numeric so it is never lost.
    pub protocol: u8,
    /// Resolved protocol label ("TCP", "UDP", ..., or "unknown(n)").
    pub protocol_label: String,
    pub ttl: u8,
    /// Total length as declared in the IPv4 header, not the capture lengths.
    pub total_length: u16,
    pub ts_sec: u32,
    pub ts_usec: u32,
}

impl Ipv4Record {
    /// Record time in milliseconds since epoch, truncating the
    /// sub-millisecond remainder. This is the granularity filters work at.
    pub fn time_ms(&self) -> u64 {
        self.ts_sec as u64 * 1000 + (self.ts_usec / 1000) as u64
    }
}

/// Which address of a record an IP filter matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Any,
    Source,
    Dest,
}

impl Direction {
    /// Parse a direction string. Unrecognized values fall back to `Any`,
    /// a permissive default rather than a silently restrictive one.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "source" | "src" => Direction::Source,
            "dest" | "dst" => Direction::Dest,
            _ => Direction::Any,
        }
    }
}

/// Predicates applied to an IPv4 record sequence. A record must satisfy both
/// the time bounds and the IP predicate to pass.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Inclusive lower time bound, milliseconds since epoch.
    pub start_ms: Option<u64>,
    /// Inclusive upper time bound, milliseconds since epoch.
    pub end_ms: Option<u64>,
    /// IP address to match; empty string disables the IP predicate.
    pub ip: String,
    pub direction: Direction,
}

/// One row of an IP frequency distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpDistributionEntry {
    pub ip: String,
    pub count: u64,
    /// Share of the record set, percent, rounded to two decimals.
    pub percentage: f64,
}
