//! Wager validation.
//!
//! These checks are the only place player-supplied numbers enter the engine.
//! They classify a value as acceptable or not; re-prompting is left to the
//! caller.

use reelspin_types::slot::{BetError, InsufficientFunds, MachineConfig, ValidationError};

/// Reject deposits below `minimum`.
pub fn check_deposit(amount: u64, minimum: u64) -> Result<(), ValidationError> {
    if amount < minimum {
        return Err(ValidationError::BelowMinimumDeposit { amount, minimum });
    }
    Ok(())
}

/// Lines must be in `1..=max_lines`.
pub fn check_lines(lines: usize, max_lines: usize) -> Result<(), ValidationError> {
    if lines < 1 || lines > max_lines {
        return Err(ValidationError::LinesOutOfRange { lines, max_lines });
    }
    Ok(())
}

/// Per-line bet must be in `min_bet..=max_bet`.
pub fn check_bet_per_line(amount: u64, min_bet: u64, max_bet: u64) -> Result<(), ValidationError> {
    if amount < min_bet || amount > max_bet {
        return Err(ValidationError::BetOutOfRange {
            amount,
            min_bet,
            max_bet,
        });
    }
    Ok(())
}

/// Fails iff `lines * bet_per_line > balance`.
pub fn check_affordability(
    lines: usize,
    bet_per_line: u64,
    balance: u64,
) -> Result<(), InsufficientFunds> {
    match (lines as u64).checked_mul(bet_per_line) {
        Some(total_bet) if total_bet <= balance => Ok(()),
        Some(total_bet) => Err(InsufficientFunds { total_bet, balance }),
        // A product too large for u64 is larger than any balance.
        None => Err(InsufficientFunds {
            total_bet: u64::MAX,
            balance,
        }),
    }
}

/// An accepted wager. Only [BettingPolicy::bet_spec] creates one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BetSpec {
    lines: usize,
    bet_per_line: u64,
}

impl BetSpec {
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn bet_per_line(&self) -> u64 {
        self.bet_per_line
    }

    /// Stake taken from the balance for this wager.
    pub fn total_bet(&self) -> u64 {
        // Bounded by the balance checked at acceptance.
        self.lines as u64 * self.bet_per_line
    }
}

/// Wager limits of one machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BettingPolicy {
    min_deposit: u64,
    max_lines: usize,
    min_bet: u64,
    max_bet: u64,
}

impl BettingPolicy {
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            min_deposit: config.min_deposit(),
            max_lines: config.max_lines(),
            min_bet: config.min_bet(),
            max_bet: config.max_bet(),
        }
    }

    pub fn check_deposit(&self, amount: u64) -> Result<(), ValidationError> {
        check_deposit(amount, self.min_deposit)
    }

    pub fn check_lines(&self, lines: usize) -> Result<(), ValidationError> {
        check_lines(lines, self.max_lines)
    }

    pub fn check_bet_per_line(&self, amount: u64) -> Result<(), ValidationError> {
        check_bet_per_line(amount, self.min_bet, self.max_bet)
    }

    pub fn check_affordability(
        &self,
        lines: usize,
        bet_per_line: u64,
        balance: u64,
    ) -> Result<(), InsufficientFunds> {
        check_affordability(lines, bet_per_line, balance)
    }

    /// Validate lines, bet and affordability, in that order, and accept the
    /// wager.
    pub fn bet_spec(
        &self,
        lines: usize,
        bet_per_line: u64,
        balance: u64,
    ) -> Result<BetSpec, BetError> {
        self.check_lines(lines)?;
        self.check_bet_per_line(bet_per_line)?;
        self.check_affordability(lines, bet_per_line, balance)?;
        Ok(BetSpec {
            lines,
            bet_per_line,
        })
    }

    pub fn min_deposit(&self) -> u64 {
        self.min_deposit
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn min_bet(&self) -> u64 {
        self.min_bet
    }

    pub fn max_bet(&self) -> u64 {
        self.max_bet
    }
}
