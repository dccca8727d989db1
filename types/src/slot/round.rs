use serde::{Deserialize, Serialize};

use super::InvariantError;

/// Outcome of evaluating one arrangement against a wager.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Sum of `multiplier * bet_per_line` over every winning line.
    pub total_winnings: u64,
    /// 1-based payline numbers, ascending.
    pub winning_lines: Vec<usize>,
}

impl RoundResult {
    pub fn is_win(&self) -> bool {
        !self.winning_lines.is_empty()
    }

    /// Balance change once the stake is taken: `total_winnings - total_bet`.
    pub fn net(&self, total_bet: u64) -> Result<i64, InvariantError> {
        let winnings = i64::try_from(self.total_winnings)
            .map_err(|_| InvariantError::Overflow { context: "winnings" })?;
        let stake =
            i64::try_from(total_bet).map_err(|_| InvariantError::Overflow { context: "stake" })?;
        winnings
            .checked_sub(stake)
            .ok_or(InvariantError::Overflow { context: "net" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net() {
        let result = RoundResult {
            total_winnings: 300,
            winning_lines: vec![2],
        };
        assert!(result.is_win());
        assert_eq!(result.net(50), Ok(250));

        let loss = RoundResult::default();
        assert!(!loss.is_win());
        assert_eq!(loss.net(50), Ok(-50));
    }

    #[test]
    fn test_net_overflow() {
        let result = RoundResult {
            total_winnings: u64::MAX,
            winning_lines: vec![1],
        };
        assert_eq!(
            result.net(0),
            Err(InvariantError::Overflow { context: "winnings" })
        );
    }
}
