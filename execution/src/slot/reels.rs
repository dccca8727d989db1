//! Reel spinning.
//!
//! Each reel is stocked with a fresh copy of the pool's weighted multiset and
//! draws `rows` symbols from it without replacement. Reels never share a
//! population, so the same symbol may land on every reel of a row.

use rand::Rng;
use reelspin_types::slot::{Arrangement, InvariantError, Symbol, SymbolPool};

pub struct ReelEngine;

impl ReelEngine {
    /// Spin `columns` independent reels of `rows` positions each.
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        pool: &SymbolPool,
        rng: &mut R,
    ) -> Result<Arrangement, InvariantError> {
        let universe = pool.as_weighted_multiset();
        let mut reels = Vec::with_capacity(columns);
        for column in 0..columns {
            reels.push(spin_reel(column, rows, universe.clone(), rng)?);
        }
        Arrangement::from_columns(reels)
    }
}

/// Draw `rows` symbols uniformly from `remaining`, removing each one drawn.
fn spin_reel<R: Rng + ?Sized>(
    column: usize,
    rows: usize,
    mut remaining: Vec<Symbol>,
    rng: &mut R,
) -> Result<Vec<Symbol>, InvariantError> {
    let mut reel = Vec::with_capacity(rows);
    for drawn in 0..rows {
        if remaining.is_empty() {
            return Err(InvariantError::ColumnExhausted {
                column,
                drawn,
                rows,
            });
        }
        let idx = rng.gen_range(0..remaining.len());
        reel.push(remaining.swap_remove(idx));
    }
    Ok(reel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{create_pool, create_rng};
    use std::collections::HashMap;

    #[test]
    fn test_generate_shape() {
        let pool = create_pool(&[("A", 8, 100), ("B", 19, 60), ("C", 38, 28), ("D", 67, 4)]);
        let mut rng = create_rng(1);

        let arrangement = ReelEngine::generate(5, 4, &pool, &mut rng).unwrap();
        assert_eq!(arrangement.rows(), 5);
        assert_eq!(arrangement.column_count(), 4);
        for column in arrangement.columns() {
            assert_eq!(column.len(), 5);
        }
    }

    #[test]
    fn test_generate_respects_counts() {
        let pool = create_pool(&[("A", 1, 100), ("B", 2, 10), ("C", 3, 1)]);

        for seed in 0..200 {
            let mut rng = create_rng(seed);
            let arrangement = ReelEngine::generate(6, 3, &pool, &mut rng).unwrap();

            for column in arrangement.columns() {
                let mut seen: HashMap<&Symbol, u32> = HashMap::new();
                for symbol in column {
                    *seen.entry(symbol).or_default() += 1;
                }
                for (symbol, count) in seen {
                    let limit = pool.count(symbol).expect("symbol not in pool");
                    assert!(count <= limit, "{symbol} drawn {count} times (limit {limit})");
                }
            }
        }
    }

    #[test]
    fn test_full_reel_is_permutation() {
        // Drawing every symbol empties the reel: each column is a permutation.
        let pool = create_pool(&[("A", 2, 1), ("B", 1, 1), ("C", 1, 1)]);
        let mut expected = pool.as_weighted_multiset();
        expected.sort();

        for seed in 0..50 {
            let mut rng = create_rng(seed);
            let arrangement = ReelEngine::generate(4, 2, &pool, &mut rng).unwrap();
            for column in arrangement.columns() {
                let mut column = column.clone();
                column.sort();
                assert_eq!(column, expected);
            }
        }
    }

    #[test]
    fn test_columns_are_independent() {
        // With one A and one B per reel and a single row, matching rows occur
        // because every reel has its own population.
        let pool = create_pool(&[("A", 1, 100), ("B", 1, 1)]);
        let mut matches = 0;
        let mut mismatches = 0;
        for seed in 0..200 {
            let mut rng = create_rng(seed);
            let arrangement = ReelEngine::generate(1, 2, &pool, &mut rng).unwrap();
            if arrangement.symbol(0, 0) == arrangement.symbol(1, 0) {
                matches += 1;
            } else {
                mismatches += 1;
            }
        }
        assert!(matches > 0);
        assert!(mismatches > 0);
    }

    #[test]
    fn test_symbol_frequency_follows_counts() {
        // Single-row reels: each draw picks a symbol with probability
        // count / total.
        let pool = SymbolPool::classic();
        let total = pool.total_count() as f64;
        let mut rng = create_rng(2024);
        let mut seen: HashMap<Symbol, u32> = HashMap::new();
        let mut draws = 0u32;

        for _ in 0..4_000 {
            let arrangement = ReelEngine::generate(1, 5, &pool, &mut rng).unwrap();
            for symbol in arrangement.row(0) {
                *seen.entry(symbol.clone()).or_default() += 1;
                draws += 1;
            }
        }

        for symbol in pool.symbols() {
            let expected = pool.count(symbol).unwrap() as f64 / total;
            let observed = *seen.get(symbol).unwrap_or(&0) as f64 / draws as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "{symbol}: observed {observed:.4}, expected {expected:.4}"
            );
        }
    }

    #[test]
    fn test_second_draw_excludes_first() {
        // One A and three B per reel. Once A is drawn it cannot appear again
        // on that reel; after a B, A is one of the three remaining symbols.
        let pool = create_pool(&[("A", 1, 10), ("B", 3, 1)]);
        let a = Symbol::from("A");
        let mut rng = create_rng(77);
        let mut first_a = 0u32;
        let mut first_b = 0u32;
        let mut b_then_a = 0u32;

        for _ in 0..3_000 {
            let arrangement = ReelEngine::generate(2, 4, &pool, &mut rng).unwrap();
            for column in arrangement.columns() {
                if column[0] == a {
                    first_a += 1;
                    assert_ne!(column[1], a, "A drawn twice from a single A");
                } else {
                    first_b += 1;
                    if column[1] == a {
                        b_then_a += 1;
                    }
                }
            }
        }

        let first_share = first_a as f64 / (first_a + first_b) as f64;
        assert!((first_share - 0.25).abs() < 0.02, "P(A first) = {first_share:.4}");
        let conditional = b_then_a as f64 / first_b as f64;
        assert!(
            (conditional - 1.0 / 3.0).abs() < 0.03,
            "P(A second | B first) = {conditional:.4}"
        );
    }

    #[test]
    fn test_generate_deterministic() {
        let pool = create_pool(&[("A", 8, 100), ("B", 19, 60), ("C", 38, 28), ("D", 67, 4)]);

        let mut rng1 = create_rng(7);
        let mut rng2 = create_rng(7);
        let first = ReelEngine::generate(5, 5, &pool, &mut rng1).unwrap();
        let second = ReelEngine::generate(5, 5, &pool, &mut rng2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exhausted_reel() {
        // Unvalidated pool: three symbols cannot fill four rows.
        let pool = create_pool(&[("A", 2, 1), ("B", 1, 1)]);
        let mut rng = create_rng(3);

        let result = ReelEngine::generate(4, 2, &pool, &mut rng);
        assert_eq!(
            result,
            Err(InvariantError::ColumnExhausted {
                column: 0,
                drawn: 3,
                rows: 4
            })
        );
    }

    #[test]
    fn test_zero_columns() {
        let pool = create_pool(&[("A", 2, 1)]);
        let mut rng = create_rng(3);
        assert_eq!(
            ReelEngine::generate(1, 0, &pool, &mut rng),
            Err(InvariantError::EmptyArrangement)
        );
    }
}
