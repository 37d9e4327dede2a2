//! Lottery Drawing Simulator
//!
//! Buys ticket sets under two allocation strategies, draws a winning
//! number and scores every ticket against a graduated prize table.
//!
//! ## Architecture
//!
//! ```text
//! Generator (sequential / scattered) → Purchase ─┐
//!                                                ├→ Prize Evaluator → Aggregator → SimulationResult
//!                     Drawing Engine → Drawing ──┘
//! ```

pub mod aggregate;
pub mod config;
pub mod drawing;
pub mod error;
pub mod generator;
pub mod prize;
pub mod simulator;
pub mod types;

pub use aggregate::{SimulationResult, StrategyOutcome, TierCounts};
pub use drawing::Drawing;
pub use error::{LotteryError, Result, ValidationError};
pub use prize::PrizeTier;
pub use simulator::{SimulationRun, Simulator};
pub use types::{Purchase, Strategy, Ticket};

#[cfg(test)]
mod config_tests;
