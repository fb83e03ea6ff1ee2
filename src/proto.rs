// Numeric code -> display label tables for ethertypes and IP protocols.
//
// Unknown codes keep the numeric value in the label so nothing is lost
// when a capture carries a protocol this tool does not name.

// Well-known ethertypes.
pub const ETHERTYPE_IPV4: u16 = 0x0800;
pub const ETHERTYPE_ARP: u16 = 0x0806;
pub const ETHERTYPE_VLAN: u16 = 0x8100;
pub const ETHERTYPE_IPV6: u16 = 0x86DD;

// Well-known IP protocol numbers.
pub const PROTO_ICMP: u8 = 1;
pub const PROTO_IGMP: u8 = 2;
pub const PROTO_TCP: u8 = 6;
pub const PROTO_UDP: u8 = 17;
pub const PROTO_OSPF: u8 = 89;

/// Display label for an Ethernet ethertype code.
pub fn ethertype_label(code: u16) -> String {
    match code {
        ETHERTYPE_IPV4 => "IPv4".to_string(),
        ETHERTYPE_ARP => "ARP".to_string(),
        ETHERTYPE_VLAN => "VLAN".to_string(),
        ETHERTYPE_IPV6 => "IPv6".to_string(),
        other => format!("unknown(0x{other:04x})"),
    }
}

/// Display label for an IPv4 protocol number.
pub fn protocol_label(code: u8) -> String {
    match code {
        PROTO_ICMP => "ICMP".to_string(),
        PROTO_IGMP => "IGMP".to_string(),
        PROTO_TCP => "TCP".to_string(),
        PROTO_UDP => "UDP".to_string(),
        PROTO_OSPF => "OSPF".to_string(),
        other => format!("unknown({other})"),
    }
}
