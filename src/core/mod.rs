//! Core line classification types.
//!
//! Every input line lands in exactly one [`Category`]. The classifier in
//! [`classify`] returns a [`Classification`] that carries the parsed value for
//! the numeric categories so callers never parse twice.

pub mod classify;

pub use classify::classify;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Integer,
    Float,
    String,
}

impl Category {
    /// All categories in output order.
    pub const ALL: [Category; 3] = [Category::Integer, Category::Float, Category::String];

    /// Fixed output file name for this category, before any prefix.
    pub fn base_name(&self) -> &'static str {
        match self {
            Self::Integer => "integers.txt",
            Self::Float => "floats.txt",
            Self::String => "strings.txt",
        }
    }

    /// Classify `line` and return only its category.
    pub fn of(line: &str) -> crate::errors::Result<Self> {
        classify(line).map(|classification| classification.category())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Integer => "Integers",
            Self::Float => "Floats",
            Self::String => "Strings",
        };
        f.write_str(label)
    }
}

/// Outcome of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Whole line is an optionally negative run of decimal digits
    Integer(BigInt),
    /// Whole line is a decimal number, optionally with fraction and exponent
    Float(BigDecimal),
    /// Anything else
    Text,
}

impl Classification {
    pub fn category(&self) -> Category {
        match self {
            Self::Integer(_) => Category::Integer,
            Self::Float(_) => Category::Float,
            Self::Text => Category::String,
        }
    }
}
