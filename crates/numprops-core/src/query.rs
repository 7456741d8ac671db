//! The three query modes and the request-line grammar.

use crate::error::QueryError;
use crate::predicates;
use crate::property::Property;
use crate::validator::validate_tokens;
use serde::Serialize;

/// One parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// A lone `0`: end the session.
    Exit,
    /// First token not numeric: show the supported-requests text.
    Help,
    /// A well-formed query, still subject to per-mode validation.
    Query(Query),
}

/// A classification query. Mode is picked by how many numeric and textual
/// tokens the request line carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Full report for a single number.
    Single(i64),
    /// Compact reports for `count` consecutive numbers from `start`.
    Range { start: i64, count: i64 },
    /// First `count` numbers at or above `start` matching every token.
    Search {
        start: i64,
        count: i64,
        tokens: Vec<String>,
    },
}

/// Full per-property breakdown of one number, in registry order.
#[derive(Debug, Clone, Serialize)]
pub struct NumberReport {
    pub number: u64,
    pub rows: Vec<PropertyRow>,
}

/// One row of a [`NumberReport`].
#[derive(Debug, Clone, Serialize)]
pub struct PropertyRow {
    pub property: Property,
    pub holds: bool,
}

/// A number together with the properties that hold for it, in registry
/// order. Always contains exactly one of even/odd and one of happy/sad.
#[derive(Debug, Clone, Serialize)]
pub struct NumberSummary {
    pub number: u64,
    pub properties: Vec<Property>,
}

/// Parse one raw request line.
///
/// Grammar: a number alone is a single-number query (`0` exits); a number
/// followed by a second number is a range; any further tokens turn the range
/// into a property search. A non-numeric first token asks for help. A
/// non-numeric second token is dropped along with everything after it, so
/// the line degrades to the one-number form (`0 whatever` still exits).
///
/// Negative numbers parse fine here; they are rejected by the query
/// functions, not by the grammar.
pub fn parse_request(line: &str) -> Request {
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return Request::Help;
    };
    let Ok(number) = first.parse::<i64>() else {
        return Request::Help;
    };

    if let Some(Ok(count)) = parts.next().map(str::parse::<i64>) {
        let tokens: Vec<String> = parts.map(str::to_string).collect();
        if tokens.is_empty() {
            return Request::Query(Query::Range {
                start: number,
                count,
            });
        }
        return Request::Query(Query::Search {
            start: number,
            count,
            tokens,
        });
    }

    if number == 0 {
        Request::Exit
    } else {
        Request::Query(Query::Single(number))
    }
}

/// Evaluate all twelve properties of `number`.
///
/// EVEN and HAPPY are each computed once; ODD and SAD are derived as their
/// complements.
pub fn describe(number: i64) -> Result<NumberReport, QueryError> {
    let n = natural(number)?;
    let even = predicates::even(n);
    let happy = predicates::happy(n);
    let rows = Property::ALL
        .iter()
        .map(|&property| {
            let holds = match property {
                Property::Even => even,
                Property::Odd => !even,
                Property::Happy => happy,
                Property::Sad => !happy,
                other => other.holds(n),
            };
            PropertyRow { property, holds }
        })
        .collect();
    Ok(NumberReport { number: n, rows })
}

/// Compact reports for `count` consecutive numbers starting at `start`.
pub fn describe_range(start: i64, count: i64) -> Result<Vec<NumberSummary>, QueryError> {
    let start = natural(start)?;
    let count = positive(count)?;
    Ok((0..count).map(|i| summarize(start + i)).collect())
}

/// Scan upward from `start` until `count` numbers match every token.
///
/// Tokens are validated first; a validation failure produces no report. The
/// scan itself has no upper bound beyond the match count: the validator has
/// already rejected the combinations known to be impossible, and anything
/// else is allowed to run as far out as it needs to.
pub fn search(
    start: i64,
    count: i64,
    raw_tokens: &[String],
) -> Result<Vec<NumberSummary>, QueryError> {
    let tokens = validate_tokens(raw_tokens)?;
    let start = natural(start)?;
    let count = positive(count)?;

    let mut found = Vec::with_capacity(count as usize);
    let mut n = start;
    while (found.len() as u64) < count {
        if tokens.iter().all(|t| t.matches(n)) {
            found.push(summarize(n));
        }
        n += 1;
    }
    Ok(found)
}

/// The properties of `n` that hold, in registry order.
pub fn summarize(n: u64) -> NumberSummary {
    NumberSummary {
        number: n,
        properties: Property::ALL
            .iter()
            .copied()
            .filter(|p| p.holds(n))
            .collect(),
    }
}

fn natural(number: i64) -> Result<u64, QueryError> {
    u64::try_from(number).map_err(|_| QueryError::InvalidStart)
}

fn positive(count: i64) -> Result<u64, QueryError> {
    if count <= 0 {
        return Err(QueryError::InvalidCount);
    }
    Ok(count as u64)
}
