//! Prize Evaluation
//!
//! Classifies a ticket against a [`Drawing`] into exactly one [`PrizeTier`].
//! Rules are checked in precedence order and the first match wins, so a
//! ticket matching both the 2nd tier (group + last four digits) and the 3rd
//! tier (last four digits only) is reported as 2nd.
//!
//! | Tier | Condition | Payout |
//! |---|---|---|
//! | Grand | group and number equal | 700,000,000 |
//! | Grand-adjacent | group equal, number one below or above (no wraparound) | 150,000,000 |
//! | 2nd | group equal, last 4 digits equal | 10,000,000 |
//! | 3rd | last 4 digits equal | 1,000,000 |
//! | 4th | last 3 digits equal | 50,000 |
//! | 5th | last 2 digits equal | 10,000 |
//! | 6th | last digit equal | 3,000 |
//! | 7th | last digit equals the bonus digit | 300 |


use crate::drawing::Drawing;
use crate::types::{Ticket, MAX_NUMBER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prize rank, declared in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrizeTier {
    Grand,
    GrandAdjacent,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    None,
}

impl PrizeTier {
    /// Paying tiers in precedence order
    pub const WINNING: [PrizeTier; 8] = [
        PrizeTier::Grand,
        PrizeTier::GrandAdjacent,
        PrizeTier::Second,
        PrizeTier::Third,
        PrizeTier::Fourth,
        PrizeTier::Fifth,
        PrizeTier::Sixth,
        PrizeTier::Seventh,
    ];

    pub fn payout(&self) -> u64 {
        match self {
            PrizeTier::Grand => 700_000_000,
            PrizeTier::GrandAdjacent => 150_000_000,
            PrizeTier::Second => 10_000_000,
            PrizeTier::Third => 1_000_000,
            PrizeTier::Fourth => 50_000,
            PrizeTier::Fifth => 10_000,
            PrizeTier::Sixth => 3_000,
            PrizeTier::Seventh => 300,
            PrizeTier::None => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrizeTier::Grand => "Grand prize",
            PrizeTier::GrandAdjacent => "Grand-adjacent",
            PrizeTier::Second => "2nd",
            PrizeTier::Third => "3rd",
            PrizeTier::Fourth => "4th",
            PrizeTier::Fifth => "5th",
            PrizeTier::Sixth => "6th",
            PrizeTier::Seventh => "7th",
            PrizeTier::None => "None",
        }
    }

    pub fn is_winning(&self) -> bool {
        *self != PrizeTier::None
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type Rule = fn(&Ticket, &Drawing) -> bool;

/// Ordered rule list; evaluation stops at the first satisfied rule
const RULES: [(PrizeTier, Rule); 8] = [
    (PrizeTier::Grand, grand),
    (PrizeTier::GrandAdjacent, grand_adjacent),
    (PrizeTier::Second, second),
    (PrizeTier::Third, |t, d| t.suffix(4) == d.winning.suffix(4)),
    (PrizeTier::Fourth, |t, d| t.suffix(3) == d.winning.suffix(3)),
    (PrizeTier::Fifth, |t, d| t.suffix(2) == d.winning.suffix(2)),
    (PrizeTier::Sixth, |t, d| t.suffix(1) == d.winning.suffix(1)),
    (PrizeTier::Seventh, |t, d| t.suffix(1) == u32::from(d.bonus_digit)),
];

fn grand(ticket: &Ticket, drawing: &Drawing) -> bool {
    *ticket == drawing.winning
}

fn grand_adjacent(ticket: &Ticket, drawing: &Drawing) -> bool {
    ticket.group == drawing.winning.group && is_adjacent(ticket.number, drawing.winning.number)
}

fn second(ticket: &Ticket, drawing: &Drawing) -> bool {
    ticket.group == drawing.winning.group && ticket.suffix(4) == drawing.winning.suffix(4)
}

/// One below or one above the winning number, never wrapping past 0 or 99999
fn is_adjacent(number: u32, winning: u32) -> bool {
    let below = winning > 0 && number == winning - 1;
    let above = winning < MAX_NUMBER && number == winning + 1;
    below || above
}

/// Classify a ticket against a drawing.
///
/// Out-of-range tickets (or a corrupt drawing) never win.
pub fn evaluate(ticket: &Ticket, drawing: &Drawing) -> PrizeTier {
    if !ticket.is_valid() || !drawing.winning.is_valid() {
        return PrizeTier::None;
    }

    RULES
        .iter()
        .find(|(_, matches)| matches(ticket, drawing))
        .map(|(tier, _)| *tier)
        .unwrap_or(PrizeTier::None)
}

/// Classify against an optional drawing; no drawing means no prize
pub fn evaluate_opt(ticket: &Ticket, drawing: Option<&Drawing>) -> PrizeTier {
    drawing.map_or(PrizeTier::None, |d| evaluate(ticket, d))
}
