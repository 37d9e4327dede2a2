//! Ticket Set Generation
//!
//! Builds purchased sets under the two allocation strategies:
//! - **Sequential**: one group, ten consecutive numbers
//! - **Scattered**: ten distinct groups, each terminal digit 0-9 exactly once,
//!   emitted in shuffled order
//!
//! All randomness comes from the caller's RNG so a seeded source reproduces
//! the same sets.

#[cfg(test)]
mod tests;

use crate::types::{Strategy, Ticket, NUMBERS_PER_GROUP, TICKETS_PER_SET, TOTAL_GROUPS};
use rand::seq::{index, SliceRandom};
use rand::Rng;
use tracing::debug;

/// Highest start number that still fits ten consecutive tickets
pub const MAX_SEQUENTIAL_START: u32 = NUMBERS_PER_GROUP - TICKETS_PER_SET as u32;

/// Generate one sequential set
pub fn sequential_set<R: Rng + ?Sized>(rng: &mut R) -> Vec<Ticket> {
    let group = rng.random_range(1..=TOTAL_GROUPS);
    let start = rng.random_range(0..=MAX_SEQUENTIAL_START);

    debug!(group, start, "Generated sequential set");

    (0..TICKETS_PER_SET as u32)
        .map(|offset| Ticket {
            group,
            number: start + offset,
        })
        .collect()
}

/// Generate one scattered set
pub fn scattered_set<R: Rng + ?Sized>(rng: &mut R) -> Vec<Ticket> {
    let groups = index::sample(rng, TOTAL_GROUPS as usize, TICKETS_PER_SET);

    // Slot i gets a number ending in digit i
    let mut tickets: Vec<Ticket> = groups
        .into_iter()
        .enumerate()
        .map(|(digit, idx)| Ticket {
            group: idx as u16 + 1,
            number: rng.random_range(0..NUMBERS_PER_GROUP / 10) * 10 + digit as u32,
        })
        .collect();

    tickets.shuffle(rng);

    debug!(?tickets, "Generated scattered set");

    tickets
}

/// Generate `sets` sets of the given strategy, concatenated in order
pub fn generate_sets<R: Rng + ?Sized>(rng: &mut R, strategy: Strategy, sets: usize) -> Vec<Ticket> {
    let mut tickets = Vec::with_capacity(sets * TICKETS_PER_SET);
    for _ in 0..sets {
        match strategy {
            Strategy::Sequential => tickets.extend(sequential_set(rng)),
            Strategy::Scattered => tickets.extend(scattered_set(rng)),
        }
    }
    tickets
}
