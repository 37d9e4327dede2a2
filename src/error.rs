//! Error types

use crate::types::Strategy;
use thiserror::Error;

/// Rejected purchase request. Nothing is generated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{strategy} set count must be zero or more, got {count}")]
    NegativeSetCount { strategy: Strategy, count: i64 },

    #[error("Total set count is limited to {max}, got {requested}")]
    TooManySets { requested: i64, max: u32 },
}

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Ticket out of range: group {group}, number {number}")]
    TicketOutOfRange { group: u16, number: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, LotteryError>;
