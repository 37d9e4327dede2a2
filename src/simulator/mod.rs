//! Lottery Simulator
//!
//! Owns the single RNG and the run state (purchased tickets, drawing) and
//! drives the three phases: purchase → draw → evaluate.
//!
//! ```rust,ignore
//! use lottery_sim::{config::SimulationConfig, simulator::Simulator};
//!
//! let mut sim = Simulator::with_seed(SimulationConfig::default(), 42);
//! let run = sim.run(20, 13)?;
//! println!("profit: {}", run.result.profit);
//! ```


use crate::aggregate::{self, SimulationResult};
use crate::config::SimulationConfig;
use crate::drawing::{self, Drawing};
use crate::error::ValidationError;
use crate::generator;
use crate::prize::{self, PrizeTier};
use crate::types::{Purchase, Strategy, Ticket};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Drawing plus evaluated result of a full run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub drawing: Drawing,
    pub result: SimulationResult,
}

pub struct Simulator {
    config: SimulationConfig,
    rng: StdRng,
    purchase: Purchase,
    drawing: Option<Drawing>,
}

impl Simulator {
    /// Seeded from `config.seed`, or OS entropy when unset
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimulationConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            purchase: Purchase::default(),
            drawing: None,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Check set counts against the configured limit without generating anything
    pub fn validate_purchase(&self, sequential: i64, scattered: i64) -> Result<(usize, usize), ValidationError> {
        for (strategy, count) in [(Strategy::Sequential, sequential), (Strategy::Scattered, scattered)] {
            if count < 0 {
                return Err(ValidationError::NegativeSetCount { strategy, count });
            }
        }

        let requested = sequential.saturating_add(scattered);
        if requested > i64::from(self.config.max_sets) {
            return Err(ValidationError::TooManySets {
                requested,
                max: self.config.max_sets,
            });
        }

        Ok((sequential as usize, scattered as usize))
    }

    /// Buy sets, replacing any previous purchase. Leaves state untouched on error.
    pub fn purchase(&mut self, sequential: i64, scattered: i64) -> Result<&Purchase, ValidationError> {
        let (sequential, scattered) = self.validate_purchase(sequential, scattered)?;

        let purchase = Purchase {
            sequential: generator::generate_sets(&mut self.rng, Strategy::Sequential, sequential),
            scattered: generator::generate_sets(&mut self.rng, Strategy::Scattered, scattered),
        };

        info!(sequential, scattered, "Purchased sets");

        self.purchase = purchase;
        Ok(&self.purchase)
    }

    pub fn purchased(&self) -> &Purchase {
        &self.purchase
    }

    /// Draw a new winning ticket, replacing any earlier drawing
    pub fn draw(&mut self) -> Drawing {
        let drawing = drawing::draw(&mut self.rng);
        self.drawing = Some(drawing);
        drawing
    }

    /// Install a fixed drawing
    pub fn set_drawing(&mut self, drawing: Drawing) {
        self.drawing = Some(drawing);
    }

    pub fn drawing(&self) -> Option<&Drawing> {
        self.drawing.as_ref()
    }

    /// Prize for one ticket; [`PrizeTier::None`] until a drawing exists
    pub fn check_prize(&self, ticket: &Ticket) -> PrizeTier {
        prize::evaluate_opt(ticket, self.drawing.as_ref())
    }

    pub fn evaluate_all(&self) -> SimulationResult {
        let result = aggregate::evaluate_all(&self.purchase, self.drawing.as_ref(), self.config.price_per_set);

        info!(
            total_sets = result.total_sets,
            total_cost = result.total_cost,
            total_payout = result.total_payout,
            profit = result.profit,
            "Evaluated purchase"
        );

        result
    }

    /// Purchase, draw and evaluate in one go
    pub fn run(&mut self, sequential: i64, scattered: i64) -> Result<SimulationRun, ValidationError> {
        self.purchase(sequential, scattered)?;
        let drawing = self.draw();
        let result = self.evaluate_all();
        Ok(SimulationRun { drawing, result })
    }
}
