// Ethernet II and IPv4 header decoders.
//
// Decoders take a raw capture record and return `None` when the record is
// undecodable at that layer; a single malformed packet never fails the whole
// capture. Link-layer fields are big-endian per the wire format, independent
// of the capture file's byte order.

use std::net::Ipv4Addr;

use crate::capture::RawRecord;
use crate::model::{EthernetRecord, Ipv4Record};
use crate::proto;

// Ethernet
const ETH_HLEN: usize = 14;
const ETH_DST_OFFSET: usize = 0;
const ETH_SRC_OFFSET: usize = 6;
const ETH_TYPE_OFFSET: usize = 12;

// IPv4
const IPV4_MIN_HLEN: usize = 20;
const IPV4_TOTAL_LEN_OFFSET: usize = 2;
const IPV4_TTL_OFFSET: usize = 8;
const IPV4_PROTO_OFFSET: usize = 9;
const IPV4_SRC_OFFSET: usize = 12;
const IPV4_DST_OFFSET: usize = 16;

/// Decode a raw record as an Ethernet II frame.
///
/// Returns `None` if the payload is shorter than the 14-byte header.
pub fn decode_ethernet(record: &RawRecord) -> Option<EthernetRecord> {
    let data = &record.data;
    if data.len() < ETH_HLEN {
        return None;
    }

    let ethertype = u16::from_be_bytes([data[ETH_TYPE_OFFSET], data[ETH_TYPE_OFFSET + 1]]);

    Some(EthernetRecord {
        eth_type: proto::ethertype_label(ethertype),
        source: format_mac(&data[ETH_SRC_OFFSET..ETH_SRC_OFFSET + 6]),
        target: format_mac(&data[ETH_DST_OFFSET..ETH_DST_OFFSET + 6]),
        ts_sec: record.ts_sec,
        ts_usec: record.ts_usec,
    })
}

/// Decode a raw record as an IPv4 packet carried in an Ethernet II frame.
///
/// Returns `None` if the frame's ethertype is not IPv4, or if the IPv4
/// header is malformed (version != 4, IHL < 5, or fewer than 20 bytes
/// captured). Options declared by the IHL are skipped, not interpreted.
pub fn decode_ipv4(record: &RawRecord) -> Option<Ipv4Record> {
    let data = &record.data;
    if data.len() < ETH_HLEN {
        return None;
    }
    let ethertype = u16::from_be_bytes([data[ETH_TYPE_OFFSET], data[ETH_TYPE_OFFSET + 1]]);
    if ethertype != proto::ETHERTYPE_IPV4 {
        return None;
    }

    let ip = &data[ETH_HLEN..];
    if ip.len() < IPV4_MIN_HLEN {
        return None;
    }

    let version = ip[0] >> 4;
    let ihl = ip[0] & 0x0F;
    if version != 4 || ihl < 5 {
        return None;
    }

    let total_length =
        u16::from_be_bytes([ip[IPV4_TOTAL_LEN_OFFSET], ip[IPV4_TOTAL_LEN_OFFSET + 1]]);
    let protocol = ip[IPV4_PROTO_OFFSET];

    let source = Ipv4Addr::new(
        ip[IPV4_SRC_OFFSET],
        ip[IPV4_SRC_OFFSET + 1],
        ip[IPV4_SRC_OFFSET + 2],
        ip[IPV4_SRC_OFFSET + 3],
    );
    let target = Ipv4Addr::new(
        ip[IPV4_DST_OFFSET],
        ip[IPV4_DST_OFFSET + 1],
        ip[IPV4_DST_OFFSET + 2],
        ip[IPV4_DST_OFFSET + 3],
    );

    Some(Ipv4Record {
        source: source.to_string(),
        target: target.to_string(),
        protocol,
        protocol_label: proto::protocol_label(protocol),
        ttl: ip[IPV4_TTL_OFFSET],
        total_length,
        ts_sec: record.ts_sec,
        ts_usec: record.ts_usec,
    })
}

/// Format a 6-byte MAC address as lowercase colon-hex.
fn format_mac(bytes: &[u8]) -> String {
    format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
    )
}
