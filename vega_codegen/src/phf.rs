//! A builder for PTHash-style perfect hash maps, rendered as Rust source.
//!
//! Lookup works with two tables: a key picks a bucket, the bucket's pilot
//! is XORed into the key, and the result indexes the slot table. The
//! builder's only job is to find, per bucket, a pilot under which all of
//! the bucket's keys land in free, distinct slots.

use std::cmp::Reverse;
use std::fmt;

use quickdiv::DivisorU64;

/// A finished perfect hash map over `u64` keys, ready to be rendered as a
/// `MiniPhf` constructor expression.
pub struct CodeWriter<V> {
    pilots: Vec<u32>,
    slots: Vec<Option<usize>>,
    entries: Vec<(u64, V)>,
}

/// Builds a perfect hash map over `entries`.
///
/// `c` scales the number of buckets (more buckets, faster pilot search,
/// bigger pilot table) and `alpha` is the target load factor of the slot
/// table.
pub fn build_phf_map<V>(entries: Vec<(u64, V)>, c: f64, alpha: f64) -> CodeWriter<V> {
    let n = entries.len();
    let bucket_count = (c * n as f64 / n.ilog2() as f64).ceil() as u64;
    // An odd slot count; keys are frequently even.
    let slot_count = ((n as f64 / alpha).ceil() as u64) | 1;

    let buckets_len = DivisorU64::new(bucket_count);
    let slots_len = DivisorU64::new(slot_count);

    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); bucket_count as usize];
    for (idx, (key, _)) in entries.iter().enumerate() {
        buckets[(*key % buckets_len) as usize].push(idx);
    }

    // Big buckets are placed while the slot table is still sparse.
    let mut bucket_order: Vec<usize> = (0..buckets.len()).collect();
    bucket_order.sort_unstable_by_key(|&b| Reverse(buckets[b].len()));

    let mut pilots = vec![0u32; buckets.len()];
    let mut slots: Vec<Option<usize>> = vec![None; slot_count as usize];

    for &b in &bucket_order {
        if buckets[b].is_empty() {
            continue;
        }

        let (pilot, placements) = find_pilot(&entries, &buckets[b], &slots, slots_len);
        for (entry, slot) in placements {
            slots[slot] = Some(entry);
        }
        pilots[b] = pilot;
    }

    CodeWriter {
        pilots,
        slots,
        entries,
    }
}

/// Tries mixed pilot values in sequence until the whole bucket places.
fn find_pilot<V>(
    entries: &[(u64, V)],
    bucket: &[usize],
    slots: &[Option<usize>],
    slots_len: DivisorU64,
) -> (u32, Vec<(usize, usize)>) {
    (0u64..)
        .find_map(|pilot| {
            let mixed = mix(pilot);
            place_bucket(entries, bucket, slots, slots_len, mixed).map(|p| (mixed, p))
        })
        .unwrap()
}

/// Assigns every key of the bucket to a slot under the given pilot, or
/// `None` on the first collision with an occupied slot or a bucket mate.
fn place_bucket<V>(
    entries: &[(u64, V)],
    bucket: &[usize],
    slots: &[Option<usize>],
    slots_len: DivisorU64,
    mixed: u32,
) -> Option<Vec<(usize, usize)>> {
    let mut placements: Vec<(usize, usize)> = Vec::with_capacity(bucket.len());

    for &idx in bucket {
        let slot = ((entries[idx].0 ^ mixed as u64) % slots_len) as usize;
        if slots[slot].is_some() || placements.iter().any(|&(_, taken)| taken == slot) {
            return None;
        }
        placements.push((idx, slot));
    }

    Some(placements)
}

/// Fibonacci mixing; the stored pilot is the mixed value, so lookup does
/// not repeat the multiplication.
fn mix(pilot: u64) -> u32 {
    pilot.wrapping_mul(0x9e37_79b9_7f4a_7c15) as u32
}

impl<V: fmt::Debug> fmt::Display for CodeWriter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "crate::MiniPhf::new(&[")?;
        for slot in &self.slots {
            match slot {
                Some(entry) => write!(f, "{:?},", self.entries[*entry].1)?,
                // Never hit by a valid key; any filler value works.
                None => write!(f, "0,")?,
            }
        }
        write!(f, "],&[")?;
        for pilot in &self.pilots {
            write!(f, "{},", pilot)?;
        }
        write!(f, "])")
    }
}
