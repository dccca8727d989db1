//! Return-to-player estimation by repeated play.
//!
//! Every round gets its own generator from [round_rng], so the estimate for a
//! given seed is identical whether rounds run sequentially or in parallel.

use super::{round_rng, BetSpec, SlotMachine};
use reelspin_types::slot::InvariantError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Aggregate of many simulated rounds at a fixed wager.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RtpReport {
    pub rounds: u64,
    pub wagered: u64,
    pub won: u64,
    pub winning_rounds: u64,
    /// Wins per payline; index 0 is line 1.
    pub line_hits: Vec<u64>,
}

impl RtpReport {
    fn empty(lines: usize) -> Self {
        Self {
            line_hits: vec![0; lines],
            ..Self::default()
        }
    }

    /// Total won divided by total wagered.
    pub fn rtp(&self) -> f64 {
        if self.wagered == 0 {
            return 0.0;
        }
        self.won as f64 / self.wagered as f64
    }

    /// Fraction of rounds with at least one winning line.
    pub fn hit_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.winning_rounds as f64 / self.rounds as f64
    }

    /// Combine two partial reports. Winning rounds and line hits are bounded
    /// by `rounds`, so only the three totals can overflow.
    fn merge(mut self, other: Self) -> Result<Self, InvariantError> {
        self.rounds = self
            .rounds
            .checked_add(other.rounds)
            .ok_or(InvariantError::Overflow { context: "rtp rounds" })?;
        self.wagered = self
            .wagered
            .checked_add(other.wagered)
            .ok_or(InvariantError::Overflow { context: "rtp wagered" })?;
        self.won = self
            .won
            .checked_add(other.won)
            .ok_or(InvariantError::Overflow { context: "rtp won" })?;
        self.winning_rounds += other.winning_rounds;
        for (hits, more) in self.line_hits.iter_mut().zip(other.line_hits) {
            *hits += more;
        }
        Ok(self)
    }
}

fn play(
    machine: &SlotMachine,
    bet: &BetSpec,
    seed: u64,
    round: u64,
) -> Result<RtpReport, InvariantError> {
    let mut rng = round_rng(seed, 0, round);
    let outcome = machine.play_round(bet, &mut rng)?;

    let mut report = RtpReport::empty(bet.lines());
    report.rounds = 1;
    report.wagered = outcome.total_bet;
    report.won = outcome.result.total_winnings;
    if outcome.result.is_win() {
        report.winning_rounds = 1;
    }
    for line in &outcome.result.winning_lines {
        report.line_hits[line - 1] += 1;
    }
    Ok(report)
}

/// Play `rounds` rounds of `bet` without a balance and report the totals.
pub fn simulate(
    machine: &SlotMachine,
    bet: &BetSpec,
    rounds: u64,
    seed: u64,
) -> Result<RtpReport, InvariantError> {
    run(machine, bet, rounds, seed)
}

#[cfg(feature = "parallel")]
fn run(
    machine: &SlotMachine,
    bet: &BetSpec,
    rounds: u64,
    seed: u64,
) -> Result<RtpReport, InvariantError> {
    (0..rounds)
        .into_par_iter()
        .map(|round| play(machine, bet, seed, round))
        .try_reduce(|| RtpReport::empty(bet.lines()), RtpReport::merge)
}

#[cfg(not(feature = "parallel"))]
fn run(
    machine: &SlotMachine,
    bet: &BetSpec,
    rounds: u64,
    seed: u64,
) -> Result<RtpReport, InvariantError> {
    (0..rounds).try_fold(RtpReport::empty(bet.lines()), |report, round| {
        report.merge(play(machine, bet, seed, round)?)
    })
}
