use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

use super::{ConfigError, CLASSIC_SYMBOLS};

/// Identifier printed on a reel position.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Symbol population of a single reel and the payout table for those symbols.
///
/// Every reel of a machine is stocked from the same pool. Counts and
/// multipliers are held separately so a table that counts a symbol without
/// paying it can be represented (and rejected by [SymbolPool::validate]).
///
/// Ordered maps keep the expanded multiset stable, so a seeded generator
/// always yields the same arrangement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPool {
    #[serde(default)]
    counts: BTreeMap<Symbol, u32>,
    #[serde(default)]
    multipliers: BTreeMap<Symbol, u64>,
}

impl SymbolPool {
    pub fn new(counts: BTreeMap<Symbol, u32>, multipliers: BTreeMap<Symbol, u64>) -> Self {
        Self {
            counts,
            multipliers,
        }
    }

    /// Build a pool from `(symbol, count, multiplier)` rows.
    pub fn from_table<S: Into<Symbol> + Clone>(table: &[(S, u32, u64)]) -> Self {
        let mut pool = Self::default();
        for (symbol, count, multiplier) in table {
            let symbol: Symbol = symbol.clone().into();
            pool.counts.insert(symbol.clone(), *count);
            pool.multipliers.insert(symbol, *multiplier);
        }
        pool
    }

    /// The stock four-symbol table.
    pub fn classic() -> Self {
        Self::from_table(&CLASSIC_SYMBOLS)
    }

    /// Check that a reel of `rows` positions can always be filled without
    /// replacement and that every drawable symbol can be paid.
    pub fn validate(&self, rows: usize) -> Result<(), ConfigError> {
        for (symbol, count) in &self.counts {
            if *count == 0 {
                return Err(ConfigError::NonPositiveCount {
                    symbol: symbol.clone(),
                });
            }
            if !self.multipliers.contains_key(symbol) {
                return Err(ConfigError::MissingMultiplier {
                    symbol: symbol.clone(),
                });
            }
        }

        let total = self.total_count();
        if total < rows as u64 {
            return Err(ConfigError::InsufficientSymbols { total, rows });
        }
        Ok(())
    }

    /// Expand each symbol into `count` repeated occurrences.
    ///
    /// This is the sampling universe for one column draw.
    pub fn as_weighted_multiset(&self) -> Vec<Symbol> {
        let capacity = self.total_count() as usize;
        let mut multiset = Vec::with_capacity(capacity);
        for (symbol, count) in &self.counts {
            multiset.extend(std::iter::repeat(symbol).take(*count as usize).cloned());
        }
        multiset
    }

    pub fn multiplier(&self, symbol: &Symbol) -> Option<u64> {
        self.multipliers.get(symbol).copied()
    }

    pub fn count(&self, symbol: &Symbol) -> Option<u32> {
        self.counts.get(symbol).copied()
    }

    /// Total occurrences across all symbols on one reel.
    pub fn total_count(&self) -> u64 {
        self.counts.values().map(|count| *count as u64).sum()
    }

    /// Drawable symbols in expansion order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.counts.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_pool_is_valid() {
        let pool = SymbolPool::classic();
        assert!(pool.validate(5).is_ok());
        assert_eq!(pool.total_count(), 8 + 19 + 38 + 67);
        assert_eq!(pool.multiplier(&"A".into()), Some(100));
        assert_eq!(pool.count(&"D".into()), Some(67));
    }

    #[test]
    fn test_weighted_multiset_expansion() {
        let pool = SymbolPool::from_table(&[("B", 2, 1), ("A", 3, 5)]);
        let multiset = pool.as_weighted_multiset();

        // Ordered by symbol, repeated by count
        let expected: Vec<Symbol> = ["A", "A", "A", "B", "B"]
            .into_iter()
            .map(Symbol::from)
            .collect();
        assert_eq!(multiset, expected);
    }

    #[test]
    fn test_validate_zero_count() {
        let pool = SymbolPool::from_table(&[("A", 0, 10), ("B", 5, 2)]);
        assert_eq!(
            pool.validate(1),
            Err(ConfigError::NonPositiveCount {
                symbol: "A".into()
            })
        );
    }

    #[test]
    fn test_validate_missing_multiplier() {
        let counts = BTreeMap::from([(Symbol::from("A"), 3), (Symbol::from("B"), 3)]);
        let multipliers = BTreeMap::from([(Symbol::from("A"), 10)]);
        let pool = SymbolPool::new(counts, multipliers);
        assert_eq!(
            pool.validate(3),
            Err(ConfigError::MissingMultiplier {
                symbol: "B".into()
            })
        );
    }

    #[test]
    fn test_validate_insufficient_symbols() {
        let pool = SymbolPool::from_table(&[("A", 1, 100), ("B", 1, 1)]);
        assert!(pool.validate(2).is_ok());
        assert_eq!(
            pool.validate(3),
            Err(ConfigError::InsufficientSymbols { total: 2, rows: 3 })
        );
    }

    #[test]
    fn test_empty_pool_fails_for_any_rows() {
        let pool = SymbolPool::default();
        assert!(pool.is_empty());
        assert!(pool.validate(1).is_err());
    }

    #[test]
    fn test_unused_multiplier_is_allowed() {
        // A paytable entry for a symbol that is never stocked is harmless.
        let counts = BTreeMap::from([(Symbol::from("A"), 4)]);
        let multipliers = BTreeMap::from([(Symbol::from("A"), 10), (Symbol::from("Z"), 1)]);
        let pool = SymbolPool::new(counts, multipliers);
        assert!(pool.validate(4).is_ok());
        assert_eq!(pool.symbols().count(), 1);
    }
}
