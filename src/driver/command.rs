/*!
 * Command Parsing
 * Line-oriented request grammar
 */

use super::error::{CommandError, DriverError, DriverResult};
use crate::core::types::{Owner, Size};

pub const REQUEST_KEYWORD: &str = "REQUEST";
pub const RELEASE_KEYWORD: &str = "RELEASE";

/// One executable line of the request stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `REQUEST <owner> <size>`
    Request { owner: Owner, size: Size },
    /// `RELEASE <owner>`
    Release { owner: Owner },
}

impl Command {
    /// Parse a trimmed, non-blank line
    ///
    /// Keywords are case-sensitive; tokens are separated by any run of
    /// whitespace.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.first().copied() {
            Some(REQUEST_KEYWORD) => {
                let &[_, owner, size] = parts.as_slice() else {
                    return Err(CommandError::WrongArity {
                        keyword: REQUEST_KEYWORD,
                        line: line.to_string(),
                    });
                };
                let size = parse_size(size).ok_or_else(|| CommandError::InvalidSize {
                    line: line.to_string(),
                })?;
                Ok(Command::Request {
                    owner: owner.into(),
                    size,
                })
            }
            Some(RELEASE_KEYWORD) => {
                let &[_, owner] = parts.as_slice() else {
                    return Err(CommandError::WrongArity {
                        keyword: RELEASE_KEYWORD,
                        line: line.to_string(),
                    });
                };
                Ok(Command::Release {
                    owner: owner.into(),
                })
            }
            _ => Err(CommandError::UnknownCommand {
                line: line.to_string(),
            }),
        }
    }
}

/// Positive integer size, or `None`
fn parse_size(token: &str) -> Option<Size> {
    token.parse::<Size>().ok().filter(|&size| size > 0)
}

/// Parse the leading capacity line (a single non-negative integer)
pub fn parse_capacity(line: &str) -> DriverResult<Size> {
    line.trim()
        .parse::<Size>()
        .map_err(|_| DriverError::InvalidCapacity {
            line: line.trim_end_matches(['\r', '\n']).to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        assert_eq!(
            Command::parse("REQUEST A 30"),
            Ok(Command::Request {
                owner: "A".into(),
                size: 30
            })
        );
        assert_eq!(
            Command::parse("REQUEST   worker-1 \t 7"),
            Ok(Command::Request {
                owner: "worker-1".into(),
                size: 7
            })
        );
    }

    #[test]
    fn test_parse_release() {
        assert_eq!(
            Command::parse("RELEASE B"),
            Ok(Command::Release { owner: "B".into() })
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            Command::parse("REQUEST A").unwrap_err().to_string(),
            "Invalid REQUEST line: REQUEST A"
        );
        assert_eq!(
            Command::parse("RELEASE A B").unwrap_err().to_string(),
            "Invalid RELEASE line: RELEASE A B"
        );
    }

    #[test]
    fn test_invalid_sizes() {
        for line in ["REQUEST A 0", "REQUEST A -5", "REQUEST A ten", "REQUEST A 1.5"] {
            assert_eq!(
                Command::parse(line),
                Err(CommandError::InvalidSize {
                    line: line.to_string()
                }),
                "{line}"
            );
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(
            Command::parse("request A 10").unwrap_err().to_string(),
            "Unknown command: request A 10"
        );
        assert!(matches!(
            Command::parse("ALLOC A 10"),
            Err(CommandError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("100").unwrap(), 100);
        assert_eq!(parse_capacity("  0 \r\n").unwrap(), 0);
        assert!(matches!(
            parse_capacity("-1"),
            Err(DriverError::InvalidCapacity { .. })
        ));
        assert!(matches!(
            parse_capacity("lots"),
            Err(DriverError::InvalidCapacity { .. })
        ));
    }
}
