use std::io::Write;

use crate::error::PcapLensError;
use crate::model::stats::IpDistributions;
use crate::model::{EthernetRecord, Ipv4Record};

/// Write Ethernet frames as TSV: header row + one row per frame, file order.
pub fn write_frames(
    frames: &[EthernetRecord],
    writer: &mut impl Write,
) -> Result<(), PcapLensError> {
    writeln!(writer, "ts_sec\tts_usec\teth_type\tsource\ttarget")
        .map_err(PcapLensError::Serialization)?;
    for f in frames {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            f.ts_sec, f.ts_usec, f.eth_type, f.source, f.target
        )
        .map_err(PcapLensError::Serialization)?;
    }
    Ok(())
}

/// Write IPv4 packets as TSV, file order.
pub fn write_packets(packets: &[Ipv4Record], writer: &mut impl Write) -> Result<(), PcapLensError> {
    writeln!(
        writer,
        "ts_sec\tts_usec\tsource\ttarget\tprotocol\tprotocol_label\tttl\ttotal_length"
    )
    .map_err(PcapLensError::Serialization)?;
    for p in packets {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            p.ts_sec,
            p.ts_usec,
            p.source,
            p.target,
            p.protocol,
            p.protocol_label,
            p.ttl,
            p.total_length
        )
        .map_err(PcapLensError::Serialization)?;
    }
    Ok(())
}

/// Write both IP distributions as TSV, one row per IP with a side column.
pub fn write_distributions(
    distributions: &IpDistributions,
    writer: &mut impl Write,
) -> Result<(), PcapLensError> {
    writeln!(writer, "side\tip\tcount\tpercentage").map_err(PcapLensError::Serialization)?;
    for entry in &distributions.by_source {
        writeln!(
            writer,
            "source\t{}\t{}\t{:.2}",
            entry.ip, entry.count, entry.percentage
        )
        .map_err(PcapLensError::Serialization)?;
    }
    for entry in &distributions.by_dest {
        writeln!(
            writer,
            "dest\t{}\t{}\t{:.2}",
            entry.ip, entry.count, entry.percentage
        )
        .map_err(PcapLensError::Serialization)?;
    }
    Ok(())
}
