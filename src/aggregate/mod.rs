//! Result aggregation over a whole purchase

use crate::drawing::Drawing;
use crate::prize::{evaluate_opt, PrizeTier};
use crate::types::{Purchase, Strategy, Ticket, TICKETS_PER_SET};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Winning ticket count per paying tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts(BTreeMap<PrizeTier, u32>);

impl TierCounts {
    pub fn new() -> Self {
        Self(PrizeTier::WINNING.iter().map(|tier| (*tier, 0)).collect())
    }

    pub fn record(&mut self, tier: PrizeTier) {
        if tier.is_winning() {
            *self.0.entry(tier).or_insert(0) += 1;
        }
    }

    pub fn get(&self, tier: PrizeTier) -> u32 {
        self.0.get(&tier).copied().unwrap_or(0)
    }

    /// Tiers with at least one winner, in precedence order
    pub fn iter_won(&self) -> impl Iterator<Item = (PrizeTier, u32)> + '_ {
        self.0
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(tier, count)| (*tier, *count))
    }

    pub fn total_winners(&self) -> u32 {
        self.0.values().sum()
    }
}

impl Default for TierCounts {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one allocation strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub sets: u32,
    pub counts: TierCounts,
    pub payout: u64,
}

impl StrategyOutcome {
    fn tally(strategy: Strategy, tickets: &[Ticket], drawing: Option<&Drawing>) -> Self {
        let mut counts = TierCounts::new();
        let mut payout = 0u64;

        for ticket in tickets {
            let tier = evaluate_opt(ticket, drawing);
            counts.record(tier);
            payout += tier.payout();
        }

        Self {
            strategy,
            sets: (tickets.len() / TICKETS_PER_SET) as u32,
            counts,
            payout,
        }
    }
}

/// Aggregate result of one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub sequential: StrategyOutcome,
    pub scattered: StrategyOutcome,
    pub total_sets: u32,
    pub total_cost: u64,
    pub total_payout: u64,
    /// Payout minus cost, negative on a loss
    pub profit: i64,
}

impl SimulationResult {
    pub fn outcome(&self, strategy: Strategy) -> &StrategyOutcome {
        match strategy {
            Strategy::Sequential => &self.sequential,
            Strategy::Scattered => &self.scattered,
        }
    }
}

/// Evaluate every purchased ticket and total up cost, payout and profit.
///
/// With no drawing every ticket scores [`PrizeTier::None`].
pub fn evaluate_all(purchase: &Purchase, drawing: Option<&Drawing>, price_per_set: u64) -> SimulationResult {
    let sequential = StrategyOutcome::tally(Strategy::Sequential, &purchase.sequential, drawing);
    let scattered = StrategyOutcome::tally(Strategy::Scattered, &purchase.scattered, drawing);

    let total_sets = sequential.sets + scattered.sets;
    let total_cost = u64::from(total_sets) * price_per_set;
    let total_payout = sequential.payout + scattered.payout;
    let profit = total_payout as i64 - total_cost as i64;

    SimulationResult {
        sequential,
        scattered,
        total_sets,
        total_cost,
        total_payout,
        profit,
    }
}
