use rand::Rng;
use reelspin_execution::{round_rng, RoundOutcome, SlotMachine};
use reelspin_types::slot::{BetError, InvariantError, ValidationError};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("wager rejected: {0}")]
    Bet(#[from] BetError),
    #[error("machine fault: {0}")]
    Invariant(#[from] InvariantError),
}

impl SessionError {
    /// Whether the player can fix the wager and try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SessionError::Bet(_))
    }
}

/// One player's visit to a machine.
///
/// The session owns the balance. Rounds run one at a time, and a round is
/// only played once its wager passes the machine's [reelspin_execution::BettingPolicy]
/// against the current balance, so the balance never goes negative.
pub struct Session {
    machine: SlotMachine,
    id: u64,
    seed: u64,
    balance: u64,
    rounds: u64,
    total_wagered: u64,
    total_won: u64,
}

impl Session {
    /// Open a session with an initial deposit.
    pub fn open(
        machine: SlotMachine,
        id: u64,
        seed: u64,
        deposit: u64,
    ) -> Result<Self, ValidationError> {
        machine.policy().check_deposit(deposit)?;
        debug!(id, deposit, "session opened");
        Ok(Self {
            machine,
            id,
            seed,
            balance: deposit,
            rounds: 0,
            total_wagered: 0,
            total_won: 0,
        })
    }

    /// Play one round using the session's deterministic generator.
    pub fn spin(&mut self, lines: usize, bet_per_line: u64) -> Result<RoundOutcome, SessionError> {
        let mut rng = round_rng(self.seed, self.id, self.rounds);
        self.spin_with(lines, bet_per_line, &mut rng)
    }

    /// Play one round drawing from `rng`.
    pub fn spin_with<R: Rng + ?Sized>(
        &mut self,
        lines: usize,
        bet_per_line: u64,
        rng: &mut R,
    ) -> Result<RoundOutcome, SessionError> {
        let bet = self
            .machine
            .policy()
            .bet_spec(lines, bet_per_line, self.balance)
            .inspect_err(|err| warn!(balance = self.balance, %err, "wager rejected"))?;
        let outcome = self.machine.play_round(&bet, rng)?;

        let balance = self
            .balance
            .checked_add_signed(outcome.net)
            .ok_or(InvariantError::Overflow { context: "balance" })?;
        let total_wagered = self
            .total_wagered
            .checked_add(outcome.total_bet)
            .ok_or(InvariantError::Overflow {
                context: "total wagered",
            })?;
        let total_won = self
            .total_won
            .checked_add(outcome.result.total_winnings)
            .ok_or(InvariantError::Overflow {
                context: "total won",
            })?;

        // Commit only once every total is known to fit
        self.balance = balance;
        self.rounds += 1;
        self.total_wagered = total_wagered;
        self.total_won = total_won;
        Ok(outcome)
    }

    /// Whether `lines x bet_per_line` can still be staked.
    pub fn can_afford(&self, lines: usize, bet_per_line: u64) -> bool {
        self.machine
            .policy()
            .check_affordability(lines, bet_per_line, self.balance)
            .is_ok()
    }

    pub fn machine(&self) -> &SlotMachine {
        &self.machine
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn total_wagered(&self) -> u64 {
        self.total_wagered
    }

    pub fn total_won(&self) -> u64 {
        self.total_won
    }

    /// Observed return to player so far.
    pub fn rtp(&self) -> f64 {
        if self.total_wagered == 0 {
            return 0.0;
        }
        self.total_won as f64 / self.total_wagered as f64
    }
}
