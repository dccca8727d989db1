pub mod slot;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use slot::{
    round_rng, BetSpec, BettingPolicy, PayoutEvaluator, ReelEngine, RoundOutcome, SlotMachine,
};
