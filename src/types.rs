//! Core lottery types

use crate::error::{LotteryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of groups, numbered 1..=TOTAL_GROUPS
pub const TOTAL_GROUPS: u16 = 200;
/// Numbers per group, 0..NUMBERS_PER_GROUP
pub const NUMBERS_PER_GROUP: u32 = 100_000;
/// Highest valid ticket number
pub const MAX_NUMBER: u32 = NUMBERS_PER_GROUP - 1;
/// Tickets bundled in one purchased set
pub const TICKETS_PER_SET: usize = 10;

/// A single lottery ticket: group plus 5-digit number.
///
/// Fields are public so callers can build probe values; use [`Ticket::new`]
/// for a checked constructor and [`Ticket::is_valid`] before trusting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticket {
    pub group: u16,
    pub number: u32,
}

impl Ticket {
    pub fn new(group: u16, number: u32) -> Result<Self> {
        let ticket = Self { group, number };
        if !ticket.is_valid() {
            return Err(LotteryError::TicketOutOfRange { group, number });
        }
        Ok(ticket)
    }

    /// Group in 1..=200 and number in 0..=99999
    pub fn is_valid(&self) -> bool {
        (1..=TOTAL_GROUPS).contains(&self.group) && self.number <= MAX_NUMBER
    }

    /// Last `digits` digits of the number
    pub fn suffix(&self, digits: u32) -> u32 {
        self.number % 10u32.pow(digits)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}-{:05}", self.group, self.number)
    }
}

/// Ticket allocation strategy for a purchased set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One group, ten consecutive numbers
    Sequential,
    /// Ten distinct groups, one ticket per terminal digit
    Scattered,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "Sequential"),
            Strategy::Scattered => write!(f, "Scattered"),
        }
    }
}

/// Tickets bought in one purchase, kept per strategy in generation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub sequential: Vec<Ticket>,
    pub scattered: Vec<Ticket>,
}

impl Purchase {
    pub fn tickets(&self, strategy: Strategy) -> &[Ticket] {
        match strategy {
            Strategy::Sequential => &self.sequential,
            Strategy::Scattered => &self.scattered,
        }
    }

    pub fn sets(&self, strategy: Strategy) -> usize {
        self.tickets(strategy).len() / TICKETS_PER_SET
    }

    pub fn total_sets(&self) -> usize {
        self.sets(Strategy::Sequential) + self.sets(Strategy::Scattered)
    }

    pub fn is_empty(&self) -> bool {
        self.sequential.is_empty() && self.scattered.is_empty()
    }
}
