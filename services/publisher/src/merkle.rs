//! Snapshot commitments
//!
//! `merkle_root` commits to the order set independent of its input order.
//! It is a flat hash over sorted leaves rather than a tree; consumers only
//! compare roots for equality.

use chrono::SecondsFormat;
use sha2::{Digest, Sha256};
use types::order::Order;
use types::snapshot::{OrderbookSnapshot, ZERO_HASH};

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Commitment over a set of orders, `ZERO_HASH` when empty
///
/// Orders are sorted by id, each leaf is the SHA-256 of the order's JSON,
/// and the root is the SHA-256 of the concatenated hex leaves.
pub fn merkle_root(orders: &[Order]) -> Result<String, serde_json::Error> {
    if orders.is_empty() {
        return Ok(ZERO_HASH.to_string());
    }

    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    let mut leaves = String::with_capacity(sorted.len() * 64);
    for order in sorted {
        let bytes = serde_json::to_vec(order)?;
        leaves.push_str(&sha256_hex(&bytes));
    }

    Ok(format!("0x{}", sha256_hex(leaves.as_bytes())))
}

/// Chaining hash carried as the next snapshot's `prev_hash`
pub fn hash_snapshot(snapshot: &OrderbookSnapshot) -> String {
    let preimage = format!(
        "{}-{}-{}-{}",
        snapshot.sequence_number,
        snapshot.market_id,
        snapshot.merkle_root,
        snapshot.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    format!("0x{}", sha256_hex(preimage.as_bytes()))
}
