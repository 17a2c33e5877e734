//! Parsing of free-form point text such as `"1.0,2.0 0.5,-1.2"`.

use crate::error::QueryError;

/// Result of parsing a query string: the valid points in input order and the
/// rejected tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedPoints {
    pub points: Vec<Vec<f64>>,
    pub rejected: Vec<QueryError>,
}

/// Parses one `x,y,...` token into exactly `dim` numbers.
pub fn parse_point(token: &str, dim: usize) -> Result<Vec<f64>, QueryError> {
    let parts: Vec<&str> = token.split(',').collect();
    if parts.len() != dim {
        return Err(QueryError::WrongArity {
            token: token.to_string(),
            expected: dim,
            found: parts.len(),
        });
    }
    parts
        .iter()
        .map(|p| {
            p.trim().parse::<f64>().map_err(|source| QueryError::InvalidNumber {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Splits `input` on whitespace and parses every token with [`parse_point`].
/// Malformed tokens are collected in `rejected`; they never abort the parse.
pub fn parse_points(input: &str, dim: usize) -> ParsedPoints {
    let mut parsed = ParsedPoints::default();
    for token in input.split_whitespace() {
        match parse_point(token, dim) {
            Ok(point) => parsed.points.push(point),
            Err(e) => parsed.rejected.push(e),
        }
    }
    parsed
}
