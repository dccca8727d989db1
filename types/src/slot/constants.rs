/// Rows on each reel (and the number of available paylines).
pub const ROWS: usize = 5;

/// Reels spun per round.
pub const COLUMNS: usize = 5;

/// Maximum paylines a player may wager on.
pub const MAX_LINES: usize = 5;

/// Minimum wager per line
pub const MIN_BET: u64 = 1;

/// Maximum wager per line
pub const MAX_BET: u64 = 1_000;

/// Smallest deposit accepted when opening a session
pub const MIN_DEPOSIT: u64 = 10;

/// Stock symbol table: (symbol, count per reel, multiplier).
///
/// Rarer symbols pay more.
pub const CLASSIC_SYMBOLS: [(&str, u32, u64); 4] = [
    ("A", 8, 100),
    ("B", 19, 60),
    ("C", 38, 28),
    ("D", 67, 4),
];
