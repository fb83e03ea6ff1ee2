pub mod json;
pub mod pretty;
pub mod tsv;

use std::io::Write;

use crate::cli::OutputFormat;
use crate::error::PcapLensError;
use crate::model::stats::IpDistributions;
use crate::model::{EthernetRecord, Ipv4Record};

/// Write Ethernet-level frames in the specified format.
pub fn write_frames(
    frames: &[EthernetRecord],
    format: OutputFormat,
    writer: &mut impl Write,
) -> Result<(), PcapLensError> {
    match format {
        OutputFormat::Tsv => tsv::write_frames(frames, writer),
        OutputFormat::Json => json::write_frames(frames, writer),
        OutputFormat::Pretty => pretty::write_frames(frames, writer),
    }
}

/// Write IPv4-level packets in the specified format.
pub fn write_packets(
    packets: &[Ipv4Record],
    format: OutputFormat,
    writer: &mut impl Write,
) -> Result<(), PcapLensError> {
    match format {
        OutputFormat::Tsv => tsv::write_packets(packets, writer),
        OutputFormat::Json => json::write_packets(packets, writer),
        OutputFormat::Pretty => pretty::write_packets(packets, writer),
    }
}

/// Write source/destination IP distributions in the specified format.
pub fn write_distributions(
    distributions: &IpDistributions,
    format: OutputFormat,
    writer: &mut impl Write,
) -> Result<(), PcapLensError> {
    match format {
        OutputFormat::Tsv => tsv::write_distributions(distributions, writer),
        OutputFormat::Json => json::write_distributions(distributions, writer),
        OutputFormat::Pretty => pretty::write_distributions(distributions, writer),
    }
}
