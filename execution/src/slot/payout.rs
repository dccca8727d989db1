//! Payline evaluation.
//!
//! Payline `n` is row `n - 1` read straight across every reel. A line wins
//! when all reels show the same symbol on that row, paying the symbol's
//! multiplier times the per-line bet.

use reelspin_types::slot::{Arrangement, InvariantError, RoundResult, Symbol, SymbolPool};

pub struct PayoutEvaluator;

impl PayoutEvaluator {
    /// Evaluate the first `lines` paylines of `arrangement`.
    pub fn evaluate(
        arrangement: &Arrangement,
        lines: usize,
        bet_per_line: u64,
        pool: &SymbolPool,
    ) -> Result<RoundResult, InvariantError> {
        if lines > arrangement.rows() {
            return Err(InvariantError::LineOutOfBounds {
                lines,
                rows: arrangement.rows(),
            });
        }

        let mut result = RoundResult::default();
        for line in 0..lines {
            let Some(symbol) = line_symbol(arrangement, line) else {
                continue;
            };
            let multiplier = pool
                .multiplier(symbol)
                .ok_or_else(|| InvariantError::UnknownSymbol {
                    symbol: symbol.clone(),
                })?;
            let payout = multiplier
                .checked_mul(bet_per_line)
                .ok_or(InvariantError::Overflow {
                    context: "line payout",
                })?;
            result.total_winnings = result
                .total_winnings
                .checked_add(payout)
                .ok_or(InvariantError::Overflow {
                    context: "total winnings",
                })?;
            result.winning_lines.push(line + 1);
        }
        Ok(result)
    }
}

/// The symbol shared by every reel on `row`, if they all agree.
pub fn line_symbol(arrangement: &Arrangement, row: usize) -> Option<&Symbol> {
    let mut symbols = arrangement.row(row);
    let first = symbols.next()?;
    symbols.all(|symbol| symbol == first).then_some(first)
}
