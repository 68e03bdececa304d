//! Exact batting ratios.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;

/// A non-negative ratio of two counts, kept in lowest terms.
///
/// Ratios never go through binary floating point: `1/3` stays `1/3`, so
/// `average * at_bats == hits` holds exactly. [`Rate::to_decimal`] gives the
/// 28-digit decimal expansion for reporting.
///
/// # Examples
///
/// ```rust
/// use softball_stats::Rate;
///
/// let obp = Rate::new(2, 3);
/// assert_eq!(obp * 3, Rate::from(2));
/// assert_eq!(obp.to_decimal().to_string(), "0.6666666666666666666666666667");
/// assert_eq!(obp.to_string(), ".667");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rate {
    numerator: u64,
    denominator: u64,
}

impl Rate {
    pub const ZERO: Rate = Rate {
        numerator: 0,
        denominator: 1,
    };

    /// Build `numerator / denominator`. A zero denominator yields zero.
    pub fn new(numerator: u64, denominator: u64) -> Self {
        Self::from_wide(u128::from(numerator), u128::from(denominator))
    }

    /// Build a ratio from terms that may exceed `u64` before reduction.
    ///
    /// Terms that still do not fit once reduced are halved together until
    /// they do; a whole number too large for `u64` saturates.
    pub(crate) fn from_wide(numerator: u128, denominator: u128) -> Self {
        if denominator == 0 || numerator == 0 {
            return Self::ZERO;
        }
        let divisor = gcd(numerator, denominator);
        let (mut numerator, mut denominator) = (numerator / divisor, denominator / divisor);

        let max = u128::from(u64::MAX);
        if numerator > max || denominator > max {
            while numerator > max || denominator > max {
                numerator >>= 1;
                denominator >>= 1;
            }
            if denominator == 0 {
                return Self {
                    numerator: u64::MAX,
                    denominator: 1,
                };
            }
            return Self::from_wide(numerator, denominator);
        }

        Self {
            numerator: numerator as u64,
            denominator: denominator as u64,
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Decimal expansion, rounded at the 28th significant digit.
    pub fn to_decimal(&self) -> Decimal {
        (Decimal::from(self.numerator) / Decimal::from(self.denominator)).normalize()
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Default for Rate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Rate {
    fn from(whole: u64) -> Self {
        Self::new(whole, 1)
    }
}

impl Mul<u64> for Rate {
    type Output = Rate;

    fn mul(self, rhs: u64) -> Rate {
        Rate::from_wide(
            u128::from(self.numerator) * u128::from(rhs),
            u128::from(self.denominator),
        )
    }
}

impl Ord for Rate {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.numerator) * u128::from(other.denominator);
        let rhs = u128::from(other.numerator) * u128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Box-score style: three places, no leading zero (`.333`, `1.000`).
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self
            .to_decimal()
            .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(3);
        let text = rounded.to_string();
        write!(f, "{}", text.strip_prefix('0').unwrap_or(&text))
    }
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal().to_string())
    }
}
