//! Entropy Engine
//!
//! Shannon entropy over categorical distributions, specialized to the two
//! traffic channels the detector watches: source addresses and size buckets.
//! Everything here is a pure function of the packets passed in; no state is
//! retained between calls.

pub mod layout;

use std::collections::HashMap;

use crate::logic::traffic::Packet;

/// Category key -> occurrence count, built fresh per computation
pub type Distribution = HashMap<String, u64>;

/// Shannon entropy of a categorical distribution, in bits.
///
/// An empty distribution has entropy 0 (degenerate-window policy, not an
/// error). The result lies in `[0, log2(k)]` for `k` distinct categories.
pub fn shannon_entropy(distribution: &Distribution) -> f64 {
    let total: u64 = distribution.values().sum();
    if total == 0 {
        return 0.0;
    }

    let n = total as f64;
    distribution
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of the source address distribution of `packets`.
pub fn source_address_entropy<'a, I>(packets: I) -> f64
where
    I: IntoIterator<Item = &'a Packet>,
{
    let mut distribution = Distribution::new();
    for packet in packets {
        *distribution.entry(packet.source_address.clone()).or_insert(0) += 1;
    }
    shannon_entropy(&distribution)
}

/// Entropy of the packet size distribution, grouped into 100-byte buckets.
pub fn size_entropy<'a, I>(packets: I) -> f64
where
    I: IntoIterator<Item = &'a Packet>,
{
    let mut distribution = Distribution::new();
    for packet in packets {
        *distribution.entry(packet.size_bucket().to_string()).or_insert(0) += 1;
    }
    shannon_entropy(&distribution)
}
