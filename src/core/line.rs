//! First-line extraction and tokenization.
//!
//! Only the first line of the accumulated input is semantically consumed;
//! everything after the first newline is read but ignored. Tokens are
//! separated by single space characters, so consecutive spaces produce
//! empty tokens (which parse to the sentinel).

use crate::core::term::Term;

/// Returns the first line of `input`.
///
/// The first line is the substring up to (excluding) the first `'\n'`, or
/// the entire input if no newline is present. An input that starts with a
/// newline has an empty first line. A `'\r'` preceding the newline is kept;
/// it lands on the final token and is absorbed by lenient parsing.
///
/// # Examples
///
/// ```
/// use linesum_rs::core::first_line;
///
/// assert_eq!(first_line("10 20\n999"), "10 20");
/// assert_eq!(first_line("no newline"), "no newline");
/// assert_eq!(first_line("\nsecond"), "");
/// ```
#[must_use]
pub fn first_line(input: &str) -> &str {
    match input.find('\n') {
        Some(pos) => &input[..pos],
        None => input,
    }
}

/// Splits a line into tokens on single space characters.
///
/// An empty line yields one empty token, never zero tokens.
pub fn tokenize(line: &str) -> std::str::Split<'_, char> {
    line.split(' ')
}

/// Sums the integers on the first line of `input`.
///
/// This is the whole pipeline: take the first line, split it on spaces,
/// parse each token leniently, and fold with addition from zero. Any token
/// without leading numeric content turns the result into
/// [`Term::NotANumber`].
///
/// # Examples
///
/// ```
/// use linesum_rs::core::{Term, sum_first_line};
///
/// assert_eq!(sum_first_line("1 2 3\n"), Term::Number(6));
/// assert_eq!(sum_first_line("10 20\n999"), Term::Number(30));
/// assert_eq!(sum_first_line(""), Term::NotANumber);
/// ```
#[must_use]
pub fn sum_first_line(input: &str) -> Term {
    tokenize(first_line(input)).map(Term::parse).sum()
}
