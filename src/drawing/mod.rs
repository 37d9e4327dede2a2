//! Drawing of the winning ticket and bonus digit

use crate::types::{Ticket, MAX_NUMBER, TOTAL_GROUPS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Result of one drawing. Read-only once made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawing {
    /// Grand prize ticket
    pub winning: Ticket,
    /// Terminal digit paid by the lowest tier, independent of `winning`
    pub bonus_digit: u8,
}

impl Drawing {
    pub fn new(winning: Ticket, bonus_digit: u8) -> Self {
        Self {
            winning,
            bonus_digit,
        }
    }
}

/// Draw a winning ticket uniformly over every group and number, then a bonus digit
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Drawing {
    let winning = Ticket {
        group: rng.random_range(1..=TOTAL_GROUPS),
        number: rng.random_range(0..=MAX_NUMBER),
    };
    let bonus_digit = rng.random_range(0..=9u8);

    info!(%winning, bonus_digit, "Drawing complete");

    Drawing::new(winning, bonus_digit)
}
