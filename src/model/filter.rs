// Time-range + IP-direction filtering over decoded IPv4 records.
//
// Pure function: the input sequence is never mutated and relative order is
// preserved. Both bounds are inclusive; record time is compared at
// millisecond granularity (see `Ipv4Record::time_ms`).

use crate::model::{Direction, FilterCriteria, Ipv4Record};

/// Return the records satisfying every active predicate of `criteria`.
pub fn apply(records: &[Ipv4Record], criteria: &FilterCriteria) -> Vec<Ipv4Record> {
    records
        .iter()
        .filter(|r| passes_time(r, criteria) && passes_ip(r, criteria))
        .cloned()
        .collect()
}

fn passes_time(record: &Ipv4Record, criteria: &FilterCriteria) -> bool {
    let t = record.time_ms();
    if let Some(start) = criteria.start_ms {
        if t < start {
            return false;
        }
    }
    if let Some(end) = criteria.end_ms {
        if t > end {
            return false;
        }
    }
    true
}

fn passes_ip(record: &Ipv4Record, criteria: &FilterCriteria) -> bool {
    if criteria.ip.is_empty() {
        return true;
    }
    match criteria.direction {
        Direction::Source => record.source == criteria.ip,
        Direction::Dest => record.target == criteria.ip,
        Direction::Any => record.source == criteria.ip || record.target == criteria.ip,
    }
}
