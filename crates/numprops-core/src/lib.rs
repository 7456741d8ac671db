//! Property classification engine for natural numbers.
//!
//! This library evaluates a fixed set of twelve named properties (parity,
//! digit patterns, number-theoretic categories) over non-negative integers
//! and answers three query shapes: a full single-number report, a bounded
//! range of compact reports, and an unbounded filtered search. It is pure:
//! parsed inputs in, structured results out. Text I/O belongs to the driver
//! binary.
//!
//! # Example
//!
//! ```
//! use numprops_core::{describe, search, Property};
//!
//! // Full report for one number.
//! let report = describe(7)?;
//! assert_eq!(report.rows.len(), 12);
//!
//! // First two odd perfect squares.
//! let hits = search(1, 2, &["odd".to_string(), "square".to_string()])?;
//! assert_eq!(hits[0].number, 1);
//! assert_eq!(hits[1].number, 9);
//! assert!(hits[1].properties.contains(&Property::Square));
//! # Ok::<(), numprops_core::QueryError>(())
//! ```

mod error;
pub mod predicates;
mod property;
mod query;
mod validator;

// Re-export public types
pub use error::QueryError;
pub use property::{available_names, Property, PropertyToken, EXCLUSIVE_PAIRS};
pub use query::{
    describe, describe_range, parse_request, search, summarize, NumberReport, NumberSummary,
    PropertyRow, Query, Request,
};

// Re-export the validator for advanced usage
pub use validator::validate_tokens;
