use thiserror::Error;

use super::Symbol;

/// Machine configuration is unusable. Raised before any round can run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("symbol {symbol} must have a positive count")]
    NonPositiveCount { symbol: Symbol },
    #[error("symbol {symbol} has no multiplier")]
    MissingMultiplier { symbol: Symbol },
    #[error("pool holds {total} symbols, fewer than the {rows} rows of a reel")]
    InsufficientSymbols { total: u64, rows: usize },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: usize },
    #[error("columns must be at least 2 (got {value})")]
    TooFewColumns { value: usize },
    #[error("max_lines ({max_lines}) exceeds rows ({rows})")]
    LinesExceedRows { max_lines: usize, rows: usize },
    #[error("min_bet ({min_bet}) exceeds max_bet ({max_bet})")]
    InvalidBetRange { min_bet: u64, max_bet: u64 },
}

/// A player-supplied number is out of range. Callers re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("deposit {amount} is below the minimum of {minimum}")]
    BelowMinimumDeposit { amount: u64, minimum: u64 },
    #[error("line count {lines} is outside 1..={max_lines}")]
    LinesOutOfRange { lines: usize, max_lines: usize },
    #[error("bet per line {amount} is outside {min_bet}..={max_bet}")]
    BetOutOfRange { amount: u64, min_bet: u64, max_bet: u64 },
}

/// The total wager exceeds the player's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("total bet {total_bet} exceeds balance {balance}")]
pub struct InsufficientFunds {
    pub total_bet: u64,
    pub balance: u64,
}

/// Any rejection of a proposed wager.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InsufficientFunds(#[from] InsufficientFunds),
}

/// Internal consistency was violated. Never expected with a validated
/// configuration; signals a defect rather than a retryable condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("reel {column} ran out of symbols after {drawn} of {rows} draws")]
    ColumnExhausted {
        column: usize,
        drawn: usize,
        rows: usize,
    },
    #[error("arrangement has no columns")]
    EmptyArrangement,
    #[error("column {column} has {len} rows, expected {rows}")]
    RaggedColumn {
        column: usize,
        len: usize,
        rows: usize,
    },
    #[error("line {lines} requested but the arrangement has {rows} rows")]
    LineOutOfBounds { lines: usize, rows: usize },
    #[error("winning symbol {symbol} has no multiplier")]
    UnknownSymbol { symbol: Symbol },
    #[error("arithmetic overflow computing {context}")]
    Overflow { context: &'static str },
}
