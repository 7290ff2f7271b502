//! Dotted version comparison.
//!
//! Segments compare numerically, so `3.10` sorts after `3.9`. Missing and
//! non-numeric segments count as zero, making `3.1` equal to `3.1.0`.

use std::cmp::Ordering;

/// Compares two dotted version strings.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    let a: Vec<u64> = a.split('.').map(segment).collect();
    let b: Vec<u64> = b.split('.').map(segment).collect();

    let len = a.len().max(b.len());
    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

/// Returns true when `candidate` is at least `minimum`.
#[must_use]
pub fn at_least(candidate: &str, minimum: &str) -> bool {
    compare(candidate, minimum) != Ordering::Less
}

fn segment(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}
