//! CLI command implementation.
//!
//! Contains the one pipeline this tool has: fully accumulated input in,
//! rendered two-line output out. Input acquisition lives in the binary so
//! this stays pure and testable.

use crate::cli::output::{OutputFormat, format_sum};
use crate::core::sum_first_line;

/// Executes the summation pipeline over fully accumulated input.
///
/// Takes the first line of `input`, splits it on single spaces, parses each
/// token leniently, sums with sentinel propagation, and renders the result
/// twice in the requested format.
///
/// # Examples
///
/// ```
/// use linesum_rs::cli::{OutputFormat, execute};
///
/// assert_eq!(execute("1 2 3\n", OutputFormat::Text), "6\n6\n");
/// ```
#[must_use]
pub fn execute(input: &str, format: OutputFormat) -> String {
    format_sum(sum_first_line(input), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1 2 3", "6\n6\n"; "simple sum")]
    #[test_case("-5 5", "0\n0\n"; "cancelling terms")]
    #[test_case("", "NaN\nNaN\n"; "empty input")]
    #[test_case("10 20\n999", "30\n30\n"; "second line ignored")]
    #[test_case("3 x 4", "NaN\nNaN\n"; "non numeric token")]
    #[test_case("7", "7\n7\n"; "single token")]
    #[test_case("1 2 3\n", "6\n6\n"; "trailing newline")]
    fn test_execute_text(input: &str, expected: &str) {
        assert_eq!(execute(input, OutputFormat::Text), expected);
    }

    #[test]
    fn test_execute_json() {
        assert_eq!(
            execute("10 20\n999", OutputFormat::Json),
            "{\"sum\":30}\n{\"sum\":30}\n"
        );
    }

    #[test]
    fn test_execute_is_stateless() {
        let first = execute("4 5 6", OutputFormat::Text);
        let second = execute("4 5 6", OutputFormat::Text);
        assert_eq!(first, second);
    }
}
