use std::str::FromStr;

use anyhow::Context;
use itertools::Itertools;
use nom::{
    character::complete::{digit1, one_of, space0},
    combinator::{opt, recognize},
    sequence::pair,
    IResult, Parser,
};
use nom_supreme::{error::ErrorTree, ParserExt};
use thiserror::Error;

/// How to treat lines that aren't a well-formed decimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Best-effort conversion in the manner of `strtol`: skip leading
    /// whitespace, read an optional sign and whatever digits follow, ignore
    /// the rest of the line, and produce 0 when there are no digits at all.
    /// Never fails.
    Lenient,

    /// Reject any line that isn't a complete signed decimal integer.
    Strict,
}

#[derive(Debug, Clone, Error)]
pub enum ParseModeError {
    #[error("{0:?} is not a parse mode; must be \"lenient\" or \"strict\"")]
    BadMode(String),
}

impl FromStr for ParseMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            mode => Err(ParseModeError::BadMode(mode.to_string())),
        }
    }
}

fn lenient_value(token: &str) -> i64 {
    let parsed: IResult<&str, i64, ErrorTree<&str>> =
        recognize(pair(opt(one_of("+-")), digit1))
            .parse_from_str()
            .preceded_by(space0)
            .parse(token);

    parsed.map(|(_, value)| value).unwrap_or(0)
}

/// Convert newline-delimited text into the sequence of integers it contains,
/// in order. Empty lines (including the one after a trailing newline) are
/// skipped.
pub fn parse_sequence(input: &str, mode: ParseMode) -> anyhow::Result<Vec<i64>> {
    let tokens = input.split('\n').filter(|token| !token.is_empty());

    match mode {
        ParseMode::Lenient => Ok(tokens.map(lenient_value).collect()),
        ParseMode::Strict => tokens
            .map(|token| token.parse())
            .try_collect()
            .context("failed to parse integer"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient() {
        let sequence = parse_sequence("1\n2\n3\n4\n5\n", ParseMode::Lenient).unwrap();
        assert_eq!(sequence, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_lenient_garbage_token() {
        let sequence = parse_sequence("3\nabc\n5\n", ParseMode::Lenient).unwrap();
        assert_eq!(sequence, [3, 0, 5]);
    }

    #[test]
    fn test_lenient_trailing_garbage() {
        let sequence = parse_sequence("12ab\n-7xyz\n+4\n", ParseMode::Lenient).unwrap();
        assert_eq!(sequence, [12, -7, 4]);
    }

    #[test]
    fn test_lenient_leading_whitespace() {
        let sequence = parse_sequence("  9\n\t-2\n", ParseMode::Lenient).unwrap();
        assert_eq!(sequence, [9, -2]);
    }

    #[test]
    fn test_lenient_bare_sign() {
        let sequence = parse_sequence("-\n+\n", ParseMode::Lenient).unwrap();
        assert_eq!(sequence, [0, 0]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let sequence = parse_sequence("1\n\n\n2\n", ParseMode::Lenient).unwrap();
        assert_eq!(sequence, [1, 2]);
    }

    #[test]
    fn test_empty_input() {
        let sequence = parse_sequence("", ParseMode::Lenient).unwrap();
        assert_eq!(sequence, []);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let input = "10\n-3\nwat\n7\n";
        assert_eq!(
            parse_sequence(input, ParseMode::Lenient).unwrap(),
            parse_sequence(input, ParseMode::Lenient).unwrap(),
        );
    }

    #[test]
    fn test_strict() {
        let sequence = parse_sequence("1\n-2\n3\n", ParseMode::Strict).unwrap();
        assert_eq!(sequence, [1, -2, 3]);
    }

    #[test]
    fn test_strict_rejects_garbage() {
        assert!(parse_sequence("3\nabc\n5\n", ParseMode::Strict).is_err());
    }

    #[test]
    fn test_strict_rejects_trailing_garbage() {
        assert!(parse_sequence("12ab\n", ParseMode::Strict).is_err());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("lenient".parse::<ParseMode>().unwrap(), ParseMode::Lenient);
        assert_eq!("strict".parse::<ParseMode>().unwrap(), ParseMode::Strict);
        assert!("permissive".parse::<ParseMode>().is_err());
    }
}
