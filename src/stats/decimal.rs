//! Exact decimal division for running averages.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Divide `dividend` by `divisor`, keeping the dividend's scale and rounding
/// half up (exact ties move away from zero, for negative quotients too).
///
/// The unscaled digits are divided as integers, so the result carries no
/// intermediate rounding. Division by zero yields zero.
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use linesift::stats::round_half_up_div;
/// use std::str::FromStr;
///
/// let avg = round_half_up_div(&BigDecimal::from_str("2.5").unwrap(), 2);
/// assert_eq!(avg, BigDecimal::from_str("1.3").unwrap());
/// ```
pub fn round_half_up_div(dividend: &BigDecimal, divisor: u64) -> BigDecimal {
    if divisor == 0 {
        return BigDecimal::zero();
    }

    let (unscaled, scale) = dividend.as_bigint_and_exponent();
    let divisor = BigInt::from(divisor);
    let (quotient, remainder) = unscaled.div_rem(&divisor);

    let quotient = if remainder.abs() * 2u32 >= divisor {
        quotient + unscaled.signum()
    } else {
        quotient
    };

    BigDecimal::new(quotient, scale)
}
