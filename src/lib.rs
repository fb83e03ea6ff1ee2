//! pcaplens — offline analysis of classic libpcap capture files.
//!
//! The core is a container parser plus Ethernet II / IPv4 header decoders,
//! with pure filter and aggregation engines over the decoded records. The
//! two entry points a front end calls are [`analyze_pcap`] and
//! [`analyze_ipv4_packets`].

pub mod analyze;
pub mod capture;
pub mod cli;
pub mod cursor;
pub mod error;
pub mod model;
pub mod output;
pub mod packet;
pub mod proto;

pub use analyze::{analyze_ipv4_filtered, analyze_ipv4_packets, analyze_pcap};
pub use error::PcapLensError;
