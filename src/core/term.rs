//! Parsed terms and sentinel-propagating arithmetic.
//!
//! A [`Term`] is the value a single input token parses to: either a signed
//! integer or the not-a-number sentinel. The sentinel participates in
//! addition and absorbs it, so one malformed token poisons the whole sum
//! instead of aborting the run.

use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A single parsed term from the input line.
///
/// Terms are produced by [`Term::parse`] and combined with `+` or
/// [`Iterator::sum`]. Addition propagates the sentinel: once either operand
/// is [`Term::NotANumber`], the result stays [`Term::NotANumber`].
///
/// # Examples
///
/// ```
/// use linesum_rs::core::Term;
///
/// let sum: Term = ["1", "2", "3"].iter().map(|t| Term::parse(t)).sum();
/// assert_eq!(sum, Term::Number(6));
///
/// let sum: Term = ["3", "x", "4"].iter().map(|t| Term::parse(t)).sum();
/// assert_eq!(sum, Term::NotANumber);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// A parsed integer value.
    Number(i64),

    /// Sentinel for a token with no leading numeric content.
    NotANumber,
}

impl Term {
    /// Parses a token leniently.
    ///
    /// Mirrors permissive base-10 integer parsing: leading whitespace is
    /// skipped, then an optional single `+` or `-` sign, then the longest
    /// run of ASCII digits. Anything after the digit run is ignored. A token
    /// with no digits at that position yields [`Term::NotANumber`].
    ///
    /// Digit runs beyond the `i64` range saturate at `i64::MIN`/`i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linesum_rs::core::Term;
    ///
    /// assert_eq!(Term::parse("42"), Term::Number(42));
    /// assert_eq!(Term::parse("-5"), Term::Number(-5));
    /// assert_eq!(Term::parse("12abc"), Term::Number(12));
    /// assert_eq!(Term::parse(""), Term::NotANumber);
    /// assert_eq!(Term::parse("x"), Term::NotANumber);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let bytes = token.trim_start().as_bytes();

        let (negative, mut pos) = match bytes.first() {
            Some(&b'-') => (true, 1),
            Some(&b'+') => (false, 1),
            _ => (false, 0),
        };

        // Accumulate negatively so i64::MIN parses without overflow.
        let mut value: i64 = 0;
        let mut digits = 0usize;
        while let Some(&b) = bytes.get(pos) {
            if !b.is_ascii_digit() {
                break;
            }
            value = value.saturating_mul(10).saturating_sub(i64::from(b - b'0'));
            digits += 1;
            pos += 1;
        }

        if digits == 0 {
            return Self::NotANumber;
        }

        if negative {
            Self::Number(value)
        } else {
            Self::Number(value.saturating_neg())
        }
    }

    /// Returns `true` if this term is the not-a-number sentinel.
    #[must_use]
    pub const fn is_nan(self) -> bool {
        matches!(self, Self::NotANumber)
    }

    /// Returns the integer value, or `None` for the sentinel.
    #[must_use]
    pub const fn as_i64(self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(n),
            Self::NotANumber => None,
        }
    }
}

impl Add for Term {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Number(a), Self::Number(b)) => Self::Number(a.wrapping_add(b)),
            _ => Self::NotANumber,
        }
    }
}

impl Sum for Term {
    /// Folds with addition starting from zero, so an empty sequence sums to
    /// `Number(0)` and any sentinel poisons the remainder of the fold.
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::Number(0), Add::add)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}

impl Serialize for Term {
    /// Serializes `Number` as a JSON number and the sentinel as the string
    /// `"NaN"`, since JSON has no not-a-number literal.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_i64(*n),
            Self::NotANumber => serializer.serialize_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0", Term::Number(0); "zero")]
    #[test_case("42", Term::Number(42); "plain digits")]
    #[test_case("-5", Term::Number(-5); "negative")]
    #[test_case("+7", Term::Number(7); "explicit plus")]
    #[test_case("12abc", Term::Number(12); "trailing garbage ignored")]
    #[test_case("3.9", Term::Number(3); "decimal point stops the run")]
    #[test_case("1e5", Term::Number(1); "exponent notation is garbage")]
    #[test_case("2\r", Term::Number(2); "trailing carriage return ignored")]
    #[test_case("\t8", Term::Number(8); "leading whitespace skipped")]
    #[test_case("", Term::NotANumber; "empty token")]
    #[test_case("x", Term::NotANumber; "non numeric")]
    #[test_case("-", Term::NotANumber; "bare sign")]
    #[test_case("+", Term::NotANumber; "bare plus")]
    #[test_case("--4", Term::NotANumber; "double sign")]
    #[test_case("abc123", Term::NotANumber; "digits not leading")]
    fn test_parse(token: &str, expected: Term) {
        assert_eq!(Term::parse(token), expected);
    }

    #[test]
    fn test_parse_saturates_at_i64_bounds() {
        assert_eq!(
            Term::parse("9223372036854775807"),
            Term::Number(i64::MAX)
        );
        assert_eq!(
            Term::parse("-9223372036854775808"),
            Term::Number(i64::MIN)
        );
        assert_eq!(
            Term::parse("99999999999999999999999"),
            Term::Number(i64::MAX)
        );
        assert_eq!(
            Term::parse("-99999999999999999999999"),
            Term::Number(i64::MIN)
        );
    }

    #[test]
    fn test_add_numbers() {
        assert_eq!(Term::Number(2) + Term::Number(3), Term::Number(5));
        assert_eq!(Term::Number(-5) + Term::Number(5), Term::Number(0));
    }

    #[test]
    fn test_add_propagates_sentinel() {
        assert_eq!(Term::Number(2) + Term::NotANumber, Term::NotANumber);
        assert_eq!(Term::NotANumber + Term::Number(2), Term::NotANumber);
        assert_eq!(Term::NotANumber + Term::NotANumber, Term::NotANumber);
    }

    #[test]
    fn test_sentinel_poisons_rest_of_fold() {
        let terms = [Term::Number(3), Term::NotANumber, Term::Number(4)];
        assert_eq!(terms.into_iter().sum::<Term>(), Term::NotANumber);
    }

    #[test]
    fn test_empty_sum_is_zero() {
        assert_eq!(std::iter::empty::<Term>().sum::<Term>(), Term::Number(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::Number(6).to_string(), "6");
        assert_eq!(Term::Number(-17).to_string(), "-17");
        assert_eq!(Term::NotANumber.to_string(), "NaN");
    }

    #[test]
    fn test_accessors() {
        assert!(Term::NotANumber.is_nan());
        assert!(!Term::Number(0).is_nan());
        assert_eq!(Term::Number(9).as_i64(), Some(9));
        assert_eq!(Term::NotANumber.as_i64(), None);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Term::Number(30)).unwrap();
        assert_eq!(json, "30");

        let json = serde_json::to_string(&Term::NotANumber).unwrap();
        assert_eq!(json, "\"NaN\"");
    }
}
