use serde::{Deserialize, Serialize};

use super::{ConfigError, SymbolPool, COLUMNS, MAX_BET, MAX_LINES, MIN_BET, MIN_DEPOSIT, ROWS};

/// Machine settings as read from a configuration file.
///
/// Missing fields fall back to the stock machine. Call
/// [SlotConfig::validate] to obtain a [MachineConfig].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlotConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
    #[serde(default = "default_min_bet")]
    pub min_bet: u64,
    #[serde(default = "default_max_bet")]
    pub max_bet: u64,
    #[serde(default = "default_min_deposit")]
    pub min_deposit: u64,
    #[serde(default = "SymbolPool::classic")]
    pub symbols: SymbolPool,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            max_lines: MAX_LINES,
            min_bet: MIN_BET,
            max_bet: MAX_BET,
            min_deposit: MIN_DEPOSIT,
            symbols: SymbolPool::classic(),
        }
    }
}

fn default_rows() -> usize {
    ROWS
}

fn default_columns() -> usize {
    COLUMNS
}

fn default_max_lines() -> usize {
    MAX_LINES
}

fn default_min_bet() -> u64 {
    MIN_BET
}

fn default_max_bet() -> u64 {
    MAX_BET
}

fn default_min_deposit() -> u64 {
    MIN_DEPOSIT
}

/// Validated, read-only machine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineConfig {
    rows: usize,
    columns: usize,
    max_lines: usize,
    min_bet: u64,
    max_bet: u64,
    min_deposit: u64,
    pool: SymbolPool,
}

impl SlotConfig {
    pub fn validate(self) -> Result<MachineConfig, ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "rows",
                value: self.rows,
            });
        }
        if self.columns < 2 {
            return Err(ConfigError::TooFewColumns {
                value: self.columns,
            });
        }
        if self.max_lines == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "max_lines",
                value: self.max_lines,
            });
        }
        if self.max_lines > self.rows {
            return Err(ConfigError::LinesExceedRows {
                max_lines: self.max_lines,
                rows: self.rows,
            });
        }
        if self.min_bet > self.max_bet {
            return Err(ConfigError::InvalidBetRange {
                min_bet: self.min_bet,
                max_bet: self.max_bet,
            });
        }
        self.symbols.validate(self.rows)?;

        Ok(MachineConfig {
            rows: self.rows,
            columns: self.columns,
            max_lines: self.max_lines,
            min_bet: self.min_bet,
            max_bet: self.max_bet,
            min_deposit: self.min_deposit,
            pool: self.symbols,
        })
    }
}

impl MachineConfig {
    /// The stock 5x5 machine.
    pub fn classic() -> Result<Self, ConfigError> {
        SlotConfig::default().validate()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn min_bet(&self) -> u64 {
        self.min_bet
    }

    pub fn max_bet(&self) -> u64 {
        self.max_bet
    }

    pub fn min_deposit(&self) -> u64 {
        self.min_deposit
    }

    pub fn pool(&self) -> &SymbolPool {
        &self.pool
    }
}
