//! Error types for query evaluation.

use crate::property::available_names;
use thiserror::Error;

/// Errors produced while answering a query.
///
/// All of these are recoverable: the driver prints the message on the normal
/// output channel and keeps reading requests. Display texts are the full
/// user-facing messages, so the driver never has to assemble them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The starting number was negative.
    #[error("The first parameter should be a natural number or zero.")]
    InvalidStart,

    /// The count was zero or negative.
    #[error("The second parameter should be a natural number.")]
    InvalidCount,

    /// One or more requested names are outside the registry. Carries the
    /// offending tokens as written (uppercased, negation prefix intact).
    #[error("{}", unknown_message(.0))]
    UnknownProperties(Vec<String>),

    /// The request pairs two properties no number can satisfy together.
    #[error("The request contains mutually exclusive properties: [{0}, {1}]\nThere are no numbers with these properties.")]
    ExclusiveProperties(String, String),
}

fn unknown_message(names: &[String]) -> String {
    let listed = names.join(", ");
    let head = if names.len() == 1 {
        format!("The property [{listed}] is wrong")
    } else {
        format!("The properties [{listed}] are wrong")
    };
    format!("{head}\nAvailable properties: [{}]", available_names())
}
