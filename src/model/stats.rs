// IP frequency distributions over decoded IPv4 records.
//
// Stateless: each call builds a local count map keyed by IP and discards it.
// Ties in the count ordering keep first-seen input order, which makes the
// output deterministic for a given input sequence.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::model::{IpDistributionEntry, Ipv4Record};

/// Source- and destination-keyed IP distributions for one record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpDistributions {
    pub by_source: Vec<IpDistributionEntry>,
    pub by_dest: Vec<IpDistributionEntry>,
}

/// Compute both distributions for `records`. Empty input yields empty
/// distributions; counts always sum to the input length.
pub fn distributions(records: &[Ipv4Record]) -> IpDistributions {
    IpDistributions {
        by_source: distribution_over(records.iter().map(|r| r.source.as_str())),
        by_dest: distribution_over(records.iter().map(|r| r.target.as_str())),
    }
}

fn distribution_over<'a>(ips: impl Iterator<Item = &'a str>) -> Vec<IpDistributionEntry> {
    let mut counts: FxHashMap<&str, u64> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();
    let mut total: u64 = 0;

    for ip in ips {
        let entry = counts.entry(ip).or_insert(0);
        if *entry == 0 {
            order.push(ip);
        }
        *entry += 1;
        total += 1;
    }

    if total == 0 {
        return Vec::new();
    }

    let mut entries: Vec<IpDistributionEntry> = order
        .into_iter()
        .map(|ip| {
            let count = counts[ip];
            IpDistributionEntry {
                ip: ip.to_string(),
                count,
                percentage: round2(count as f64 / total as f64 * 100.0),
            }
        })
        .collect();

    // sort_by is stable, so equal counts keep first-seen order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
