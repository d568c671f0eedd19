//! Expense identifier
//!
//! Expenses are numbered sequentially starting at 1, so the identifier is a
//! thin newtype over an unsigned integer rather than a UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The identifier given to the first expense of an empty collection
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Wrap a raw identifier
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Identifiers are valid only when they are at least 1
    pub const fn is_valid(&self) -> bool {
        self.0 >= 1
    }

    /// The identifier following this one
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
