//! Workload record parser using nom
//!
//! Record format (one per line):
//! ```text
//! get <key>
//! put <key> <value>
//! ```

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{i64 as integer, space1},
    combinator::{all_consuming, map},
    sequence::{preceded, tuple},
    IResult,
};

/// A single workload record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Look up a key
    Get(i64),
    /// Store a value under a key
    Put(i64, i64),
}

/// Reasons a record could not be turned into an [`Operation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// First word is not a known operation
    UnknownOperation(String),

    /// Known operation with bad arguments
    Malformed {
        /// The offending record
        record: String,
        /// What the parser expected
        reason: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownOperation(name) => write!(f, "unknown operation '{}'", name),
            ParseError::Malformed { record, reason } => {
                write!(f, "malformed record '{}': {}", record, reason)
            }
        }
    }
}

impl std::error::Error for ParseError {}

fn get_op(input: &str) -> IResult<&str, Operation> {
    map(preceded(tuple((tag("get"), space1)), integer), Operation::Get)(input)
}

fn put_op(input: &str) -> IResult<&str, Operation> {
    map(
        tuple((tag("put"), space1, integer, space1, integer)),
        |(_, _, key, _, value)| Operation::Put(key, value),
    )(input)
}

/// Parse one non-blank record, ignoring surrounding whitespace
pub fn parse_operation(line: &str) -> Result<Operation, ParseError> {
    let record = line.trim();
    let name = record.split_whitespace().next().unwrap_or_default();

    if name != "get" && name != "put" {
        return Err(ParseError::UnknownOperation(name.to_string()));
    }

    all_consuming(alt((get_op, put_op)))(record)
        .map(|(_, op)| op)
        .map_err(|err| {
            let reason = match err {
                nom::Err::Error(e) | nom::Err::Failure(e) => {
                    format!("{} at '{}'", e.code.description(), e.input)
                }
                nom::Err::Incomplete(_) => "incomplete record".to_string(),
            };
            ParseError::Malformed {
                record: record.to_string(),
                reason,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        assert_eq!(parse_operation("get 5"), Ok(Operation::Get(5)));
        assert_eq!(parse_operation("get -12"), Ok(Operation::Get(-12)));
    }

    #[test]
    fn test_parse_put() {
        assert_eq!(parse_operation("put 1 100"), Ok(Operation::Put(1, 100)));
        assert_eq!(parse_operation("put 3\t-7"), Ok(Operation::Put(3, -7)));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse_operation("  put 2 20 \r"), Ok(Operation::Put(2, 20)));
        assert_eq!(parse_operation("\tget  9"), Ok(Operation::Get(9)));
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(
            parse_operation("delete 4"),
            Err(ParseError::UnknownOperation("delete".to_string()))
        );
        assert!(matches!(
            parse_operation("GET 4"),
            Err(ParseError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_malformed_records() {
        for record in ["get", "get x", "put 1", "put 1 two", "get 1 2", "put 1 2 3"] {
            let err = parse_operation(record).unwrap_err();
            assert!(
                matches!(err, ParseError::Malformed { .. }),
                "{} parsed as {:?}",
                record,
                err
            );
        }
    }

    #[test]
    fn test_error_display() {
        let err = parse_operation("put 1").unwrap_err();
        assert!(err.to_string().starts_with("malformed record 'put 1'"));
    }
}
