#[derive(Debug, thiserror::Error)]
pub enum PcapLensError {
    #[error("cannot read capture file: {0}")]
    Io(#[source] std::io::Error),
    #[error("not a pcap file: bad magic number 0x{0:08x}")]
    BadMagic(u32),
    #[error("malformed capture file: {0}")]
    InvalidFormat(String),
    #[error("serialization error: {0}")]
    Serialization(#[source] std::io::Error),
}
