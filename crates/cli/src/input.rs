// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player input parsing.
use thiserror::Error;

/// Input parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A value is not a card index.
    #[error("invalid input {0:?}, enter numbers separated by spaces")]
    NotANumber(String),
}

/// Parses space separated hand indices, range checks are left to the session.
pub fn parse_indices(line: &str) -> Result<Vec<usize>, InputError> {
    line.split_whitespace()
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| InputError::NotANumber(s.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_indices() {
        assert_eq!(parse_indices("0 3 7"), Ok(vec![0, 3, 7]));
        assert_eq!(parse_indices("  4\t1  "), Ok(vec![4, 1]));
        assert_eq!(parse_indices(""), Ok(vec![]));
        assert_eq!(parse_indices("2 2"), Ok(vec![2, 2]));
    }

    #[test]
    fn parse_invalid_indices() {
        assert_eq!(
            parse_indices("1 x 3"),
            Err(InputError::NotANumber("x".to_string()))
        );
        assert_eq!(
            parse_indices("-1"),
            Err(InputError::NotANumber("-1".to_string()))
        );
        assert!(parse_indices("1,2").is_err());
    }
}
