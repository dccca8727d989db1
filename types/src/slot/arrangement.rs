use serde::{Deserialize, Serialize};
use std::fmt;

use super::{InvariantError, Symbol};

/// Grid of symbols shown after one spin, stored column-major.
///
/// Every column holds exactly [Arrangement::rows] symbols. Row 0 is the top
/// row, and also payline 1.
///
/// Serialized as its bare list of columns; deserializing runs the same
/// checks as [Arrangement::from_columns].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Symbol>>", into = "Vec<Vec<Symbol>>")]
pub struct Arrangement {
    rows: usize,
    columns: Vec<Vec<Symbol>>,
}

impl Arrangement {
    /// Wrap raw reel columns, rejecting empty or ragged grids.
    pub fn from_columns(columns: Vec<Vec<Symbol>>) -> Result<Self, InvariantError> {
        let rows = match columns.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(InvariantError::EmptyArrangement),
        };
        for (column, symbols) in columns.iter().enumerate() {
            if symbols.len() != rows {
                return Err(InvariantError::RaggedColumn {
                    column,
                    len: symbols.len(),
                    rows,
                });
            }
        }
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Vec<Symbol>] {
        &self.columns
    }

    pub fn symbol(&self, column: usize, row: usize) -> Option<&Symbol> {
        self.columns.get(column).and_then(|symbols| symbols.get(row))
    }

    /// Symbols at `row`, left to right. Empty if `row` is out of range.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Symbol> + '_ {
        self.columns
            .iter()
            .filter_map(move |symbols| symbols.get(row))
    }

    pub fn into_columns(self) -> Vec<Vec<Symbol>> {
        self.columns
    }
}

impl TryFrom<Vec<Vec<Symbol>>> for Arrangement {
    type Error = InvariantError;

    fn try_from(columns: Vec<Vec<Symbol>>) -> Result<Self, Self::Error> {
        Self::from_columns(columns)
    }
}

impl From<Arrangement> for Vec<Vec<Symbol>> {
    fn from(arrangement: Arrangement) -> Self {
        arrangement.columns
    }
}

/// Renders one line per row with reels separated by ` | `.
impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for (i, symbol) in self.row(row).enumerate() {
                if i > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
