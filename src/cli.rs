use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::{Direction, FilterCriteria};

#[derive(Parser, Debug)]
#[command(
    name = "pcaplens",
    version,
    about = "Offline PCAP analyzer: Ethernet frames, IPv4 packets, IP distributions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List Ethernet-level frames from a capture file
    Frames(FramesArgs),
    /// List IPv4-level packets, optionally filtered or aggregated
    Packets(PacketsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FramesArgs {
    /// Capture file to analyze
    pub file: PathBuf,

    /// Output format [default: tsv]
    #[arg(long, default_value = "tsv")]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct PacketsArgs {
    /// Capture file to analyze
    pub file: PathBuf,

    /// Output format [default: tsv]
    #[arg(long, default_value = "tsv")]
    pub format: OutputFormat,

    /// Inclusive lower time bound, milliseconds since epoch
    #[arg(long)]
    pub start_ms: Option<u64>,

    /// Inclusive upper time bound, milliseconds since epoch
    #[arg(long)]
    pub end_ms: Option<u64>,

    /// Keep only packets matching this IP address (see --direction)
    #[arg(long)]
    pub ip: Option<String>,

    /// Which address --ip matches against
    #[arg(long, default_value = "any")]
    pub direction: DirectionArg,

    /// Print source/destination IP distributions instead of packet rows
    #[arg(long)]
    pub stats: bool,
}

impl PacketsArgs {
    /// Build the filter criteria from the flags.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            start_ms: self.start_ms,
            end_ms: self.end_ms,
            ip: self.ip.clone().unwrap_or_default(),
            direction: self.direction.into(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Json,
    Pretty,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionArg {
    Any,
    Source,
    Dest,
}

impl From<DirectionArg> for Direction {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::Any => Direction::Any,
            DirectionArg::Source => Direction::Source,
            DirectionArg::Dest => Direction::Dest,
        }
    }
}
