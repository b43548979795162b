//! Single-pass running statistics per category.
//!
//! Each update costs O(1) extra state: counts, min/max and an exact sum. The
//! average is recomputed from the current sum and count after every update
//! (see [`round_half_up_div`]), so it never drifts.
//!
//! ```rust
//! use linesift::stats::Statistics;
//! use num_bigint::BigInt;
//!
//! let mut stats = Statistics::new();
//! stats.update_integer(&BigInt::from(45));
//! stats.update_integer(&BigInt::from(100500));
//! stats.update_string("Long");
//!
//! assert_eq!(stats.integers.count, 2);
//! assert_eq!(stats.integers.sum, BigInt::from(100545));
//! assert_eq!(stats.strings.max_length, Some(4));
//! ```

pub mod decimal;
pub mod report;

pub use decimal::round_half_up_div;
pub use report::{FullStats, StatsReport};

use crate::core::{Category, Classification};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;

/// Running statistics for the integer category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerStats {
    pub count: u64,
    pub min: Option<BigInt>,
    pub max: Option<BigInt>,
    pub sum: BigInt,
    pub average: BigDecimal,
}

impl Default for IntegerStats {
    fn default() -> Self {
        Self {
            count: 0,
            min: None,
            max: None,
            sum: BigInt::zero(),
            average: BigDecimal::zero(),
        }
    }
}

impl IntegerStats {
    pub fn update(&mut self, value: &BigInt) {
        self.count += 1;
        update_bounds(&mut self.min, &mut self.max, value);
        self.sum += value;
        self.recompute_average();
    }

    fn recompute_average(&mut self) {
        let sum = BigDecimal::new(self.sum.clone(), 0);
        self.average = round_half_up_div(&sum, self.count);
    }

    fn merge(&mut self, other: IntegerStats) {
        if other.count == 0 {
            return;
        }
        self.count += other.count;
        merge_bounds(&mut self.min, &mut self.max, other.min, other.max);
        self.sum += other.sum;
        self.recompute_average();
    }
}

/// Running statistics for the float category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatStats {
    pub count: u64,
    pub min: Option<BigDecimal>,
    pub max: Option<BigDecimal>,
    pub sum: BigDecimal,
    pub average: BigDecimal,
}

impl Default for FloatStats {
    fn default() -> Self {
        Self {
            count: 0,
            min: None,
            max: None,
            sum: BigDecimal::zero(),
            average: BigDecimal::zero(),
        }
    }
}

impl FloatStats {
    pub fn update(&mut self, value: &BigDecimal) {
        self.count += 1;
        update_bounds(&mut self.min, &mut self.max, value);
        self.sum = &self.sum + value;
        self.recompute_average();
    }

    fn recompute_average(&mut self) {
        self.average = round_half_up_div(&self.sum, self.count);
    }

    fn merge(&mut self, other: FloatStats) {
        if other.count == 0 {
            return;
        }
        self.count += other.count;
        merge_bounds(&mut self.min, &mut self.max, other.min, other.max);
        self.sum = &self.sum + &other.sum;
        self.recompute_average();
    }
}

/// Running statistics for the string category.
///
/// Lengths are counted in Unicode code points. `None` means no string has
/// been seen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringStats {
    pub count: u64,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl StringStats {
    pub fn update(&mut self, value: &str) {
        self.count += 1;
        let length = value.chars().count();
        update_bounds(&mut self.min_length, &mut self.max_length, &length);
    }

    fn merge(&mut self, other: StringStats) {
        self.count += other.count;
        merge_bounds(
            &mut self.min_length,
            &mut self.max_length,
            other.min_length,
            other.max_length,
        );
    }
}

/// Aggregate statistics for one processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub integers: IntegerStats,
    pub floats: FloatStats,
    pub strings: StringStats,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_integer(&mut self, value: &BigInt) {
        self.integers.update(value);
    }

    pub fn update_float(&mut self, value: &BigDecimal) {
        self.floats.update(value);
    }

    pub fn update_string(&mut self, value: &str) {
        self.strings.update(value);
    }

    /// Feed an already classified line to the matching accumulator.
    pub fn record(&mut self, classification: &Classification, line: &str) {
        match classification {
            Classification::Integer(value) => self.update_integer(value),
            Classification::Float(value) => self.update_float(value),
            Classification::Text => self.update_string(line),
        }
    }

    /// Number of lines recorded for `category`.
    pub fn count(&self, category: Category) -> u64 {
        match category {
            Category::Integer => self.integers.count,
            Category::Float => self.floats.count,
            Category::String => self.strings.count,
        }
    }

    /// Fold statistics accumulated independently (for example per source)
    /// into this instance. Averages are recomputed from the folded sums.
    pub fn merge(&mut self, other: Statistics) {
        self.integers.merge(other.integers);
        self.floats.merge(other.floats);
        self.strings.merge(other.strings);
    }
}

fn update_bounds<T: Ord + Clone>(min: &mut Option<T>, max: &mut Option<T>, value: &T) {
    if min.as_ref().is_none_or(|current| value < current) {
        *min = Some(value.clone());
    }
    if max.as_ref().is_none_or(|current| value > current) {
        *max = Some(value.clone());
    }
}

fn merge_bounds<T: Ord + Clone>(
    min: &mut Option<T>,
    max: &mut Option<T>,
    other_min: Option<T>,
    other_max: Option<T>,
) {
    if let Some(value) = other_min {
        update_bounds(min, &mut None, &value);
    }
    if let Some(value) = other_max {
        update_bounds(&mut None, max, &value);
    }
}
