use crate::slot::{round_rng, SlotMachine};
use rand_chacha::ChaCha20Rng;
use reelspin_types::slot::{Arrangement, SlotConfig, Symbol, SymbolPool};

/// Creates a seeded generator for tests
pub fn create_rng(seed: u64) -> ChaCha20Rng {
    round_rng(seed, 0, 0)
}

/// Creates an unvalidated pool from `(symbol, count, multiplier)` rows
pub fn create_pool(table: &[(&str, u32, u64)]) -> SymbolPool {
    SymbolPool::from_table(table)
}

/// Creates an arrangement from columns of symbol names
pub fn create_arrangement(columns: &[&[&str]]) -> Arrangement {
    let columns = columns
        .iter()
        .map(|column| column.iter().map(|s| Symbol::from(*s)).collect::<Vec<_>>())
        .collect();
    Arrangement::from_columns(columns).expect("arrangement must be rectangular")
}

/// Creates a machine with stock bet limits and the given shape and symbols
pub fn create_machine(
    rows: usize,
    columns: usize,
    max_lines: usize,
    table: &[(&str, u32, u64)],
) -> SlotMachine {
    let config = SlotConfig {
        rows,
        columns,
        max_lines,
        symbols: create_pool(table),
        ..SlotConfig::default()
    }
    .validate()
    .expect("test machine config must be valid");
    SlotMachine::new(config)
}
