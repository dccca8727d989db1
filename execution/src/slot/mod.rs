//! Slot machine execution.
//!
//! A round is played in two steps:
//! - [ReelEngine] spins every reel into an [Arrangement]
//! - [PayoutEvaluator] pays each wagered line whose reels all agree
//!
//! [BettingPolicy] decides whether a wager may be played at all.

pub mod betting;
pub mod payout;
pub mod reels;
pub mod rtp;

pub use betting::{BetSpec, BettingPolicy};
pub use payout::PayoutEvaluator;
pub use reels::ReelEngine;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use reelspin_types::slot::{Arrangement, InvariantError, MachineConfig, RoundResult};
use tracing::{debug, info};

/// Deterministic generator for one round.
///
/// The same `(seed, session, round)` triple always yields the same stream, so
/// any round of any session can be replayed.
pub fn round_rng(seed: u64, session: u64, round: u64) -> ChaCha20Rng {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&seed.to_be_bytes());
    key[8..16].copy_from_slice(&session.to_be_bytes());
    key[16..24].copy_from_slice(&round.to_be_bytes());
    ChaCha20Rng::from_seed(key)
}

/// Everything produced by one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub arrangement: Arrangement,
    pub result: RoundResult,
    /// Stake taken for the round.
    pub total_bet: u64,
    /// Balance change: winnings minus stake.
    pub net: i64,
}

/// A configured machine. Holds no per-round state.
#[derive(Clone, Debug)]
pub struct SlotMachine {
    config: MachineConfig,
    policy: BettingPolicy,
}

impl SlotMachine {
    pub fn new(config: MachineConfig) -> Self {
        let policy = BettingPolicy::new(&config);
        Self { config, policy }
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn policy(&self) -> &BettingPolicy {
        &self.policy
    }

    /// Spin all reels once.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Arrangement, InvariantError> {
        ReelEngine::generate(
            self.config.rows(),
            self.config.columns(),
            self.config.pool(),
            rng,
        )
    }

    /// Spin and settle an accepted wager.
    pub fn play_round<R: Rng + ?Sized>(
        &self,
        bet: &BetSpec,
        rng: &mut R,
    ) -> Result<RoundOutcome, InvariantError> {
        let arrangement = self.spin(rng)?;
        let result = PayoutEvaluator::evaluate(
            &arrangement,
            bet.lines(),
            bet.bet_per_line(),
            self.config.pool(),
        )?;
        let total_bet = bet.total_bet();
        let net = result.net(total_bet)?;

        debug!(
            lines = bet.lines(),
            bet_per_line = bet.bet_per_line(),
            total_bet,
            net,
            "round played"
        );
        if result.is_win() {
            info!(
                winnings = result.total_winnings,
                lines = ?result.winning_lines,
                "winning round"
            );
        }

        Ok(RoundOutcome {
            arrangement,
            result,
            total_bet,
            net,
        })
    }
}
