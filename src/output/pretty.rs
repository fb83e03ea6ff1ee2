use std::io::Write;

use crate::error::PcapLensError;
use crate::model::stats::IpDistributions;
use crate::model::{EthernetRecord, Ipv4Record};

/// Write Ethernet frames as a human-readable table.
pub fn write_frames(
    frames: &[EthernetRecord],
    writer: &mut impl Write,
) -> Result<(), PcapLensError> {
    write_frames_inner(frames, writer).map_err(PcapLensError::Serialization)
}

fn write_frames_inner(frames: &[EthernetRecord], w: &mut impl Write) -> std::io::Result<()> {
    writeln!(w, "Ethernet Frames")?;
    writeln!(w, "{}", "=".repeat(72))?;
    writeln!(
        w,
        "{:<12} {:>7} {:<16} {:<18} {:<18}",
        "TS_SEC", "TS_USEC", "ETH_TYPE", "SOURCE", "TARGET"
    )?;
    writeln!(w, "{}", "-".repeat(72))?;
    for f in frames {
        writeln!(
            w,
            "{:<12} {:>7} {:<16} {:<18} {:<18}",
            f.ts_sec, f.ts_usec, f.eth_type, f.source, f.target
        )?;
    }
    if frames.is_empty() {
        writeln!(w, "(no frames decoded)")?;
    }
    writeln!(w, "{}", "-".repeat(72))?;
    writeln!(w, "total: {} frame(s)", frames.len())
}

/// Write IPv4 packets as a human-readable table.
pub fn write_packets(packets: &[Ipv4Record], writer: &mut impl Write) -> Result<(), PcapLensError> {
    write_packets_inner(packets, writer).map_err(PcapLensError::Serialization)
}

fn write_packets_inner(packets: &[Ipv4Record], w: &mut impl Write) -> std::io::Result<()> {
    writeln!(w, "IPv4 Packets")?;
    writeln!(w, "{}", "=".repeat(78))?;
    writeln!(
        w,
        "{:<12} {:>7} {:<16} {:<16} {:<14} {:>4} {:>7}",
        "TS_SEC", "TS_USEC", "SOURCE", "TARGET", "PROTOCOL", "TTL", "LENGTH"
    )?;
    writeln!(w, "{}", "-".repeat(78))?;
    for p in packets {
        writeln!(
            w,
            "{:<12} {:>7} {:<16} {:<16} {:<14} {:>4} {:>7}",
            p.ts_sec, p.ts_usec, p.source, p.target, p.protocol_label, p.ttl, p.total_length
        )?;
    }
    if packets.is_empty() {
        writeln!(w, "(no packets decoded)")?;
    }
    writeln!(w, "{}", "-".repeat(78))?;
    writeln!(w, "total: {} packet(s)", packets.len())
}

/// Write both IP distributions as human-readable tables.
pub fn write_distributions(
    distributions: &IpDistributions,
    writer: &mut impl Write,
) -> Result<(), PcapLensError> {
    write_distributions_inner(distributions, writer).map_err(PcapLensError::Serialization)
}

fn write_distributions_inner(dist: &IpDistributions, w: &mut impl Write) -> std::io::Result<()> {
    write_side(w, "Source IP Distribution", &dist.by_source)?;
    writeln!(w)?;
    write_side(w, "Destination IP Distribution", &dist.by_dest)
}

fn write_side(
    w: &mut impl Write,
    title: &str,
    entries: &[crate::model::IpDistributionEntry],
) -> std::io::Result<()> {
    writeln!(w, "{title}")?;
    writeln!(w, "{}", "=".repeat(44))?;
    writeln!(w, "{:<18} {:>8} {:>10}", "IP", "COUNT", "PERCENT")?;
    writeln!(w, "{}", "-".repeat(44))?;
    for entry in entries {
        writeln!(
            w,
            "{:<18} {:>8} {:>9.2}%",
            entry.ip, entry.count, entry.percentage
        )?;
    }
    if entries.is_empty() {
        writeln!(w, "(no records)")?;
    }
    Ok(())
}
