use std::io::Write;

use serde::Serialize;

use crate::error::PcapLensError;
use crate::model::stats::IpDistributions;
use crate::model::{EthernetRecord, Ipv4Record};

fn write_value(value: &impl Serialize, writer: &mut impl Write) -> Result<(), PcapLensError> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| PcapLensError::Serialization(std::io::Error::other(e.to_string())))?;
    writeln!(writer).map_err(PcapLensError::Serialization)
}

/// Write Ethernet frames as a JSON array.
pub fn write_frames(
    frames: &[EthernetRecord],
    writer: &mut impl Write,
) -> Result<(), PcapLensError> {
    write_value(&frames, writer)
}

/// Write IPv4 packets as a JSON array.
pub fn write_packets(packets: &[Ipv4Record], writer: &mut impl Write) -> Result<(), PcapLensError> {
    write_value(&packets, writer)
}

/// Write both IP distributions as a JSON object.
pub fn write_distributions(
    distributions: &IpDistributions,
    writer: &mut impl Write,
) -> Result<(), PcapLensError> {
    write_value(distributions, writer)
}
