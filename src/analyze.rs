// The two operations exposed at the UI boundary, plus the filtered variant
// the CLI uses. Each call is one independent open-and-parse pass over the
// file; every structure produced is immutable, so concurrent calls need no
// coordination.

use std::path::Path;

use crate::capture::Capture;
use crate::error::PcapLensError;
use crate::model::{EthernetRecord, FilterCriteria, Ipv4Record};
use crate::{model, packet};

/// Parse the file fully and return every successfully decoded Ethernet-level
/// record, in file order.
///
/// Fails only on unreadable files or fatal header corruption; truncated
/// trailing records and undecodable frames degrade to a shorter result.
pub fn analyze_pcap<P: AsRef<Path>>(path: P) -> Result<Vec<EthernetRecord>, PcapLensError> {
    let capture = Capture::open(path)?;
    let mut raw_count: u64 = 0;
    let records: Vec<EthernetRecord> = capture
        .records()
        .inspect(|_| raw_count += 1)
        .filter_map(|raw| packet::decode_ethernet(&raw))
        .collect();
    log::info!(
        "analyze_pcap: {} raw records, {} Ethernet frames decoded",
        raw_count,
        records.len()
    );
    Ok(records)
}

/// Parse the file fully and return every successfully decoded IPv4-level
/// record, in file order. Frames whose ethertype is not IPv4, or whose IPv4
/// header is malformed, have no entry here.
pub fn analyze_ipv4_packets<P: AsRef<Path>>(path: P) -> Result<Vec<Ipv4Record>, PcapLensError> {
    let capture = Capture::open(path)?;
    let mut raw_count: u64 = 0;
    let records: Vec<Ipv4Record> = capture
        .records()
        .inspect(|_| raw_count += 1)
        .filter_map(|raw| packet::decode_ipv4(&raw))
        .collect();
    log::info!(
        "analyze_ipv4_packets: {} raw records, {} IPv4 packets decoded",
        raw_count,
        records.len()
    );
    Ok(records)
}

/// [`analyze_ipv4_packets`] followed by the filter engine.
pub fn analyze_ipv4_filtered<P: AsRef<Path>>(
    path: P,
    criteria: &FilterCriteria,
) -> Result<Vec<Ipv4Record>, PcapLensError> {
    let records = analyze_ipv4_packets(path)?;
    Ok(model::filter::apply(&records, criteria))
}
