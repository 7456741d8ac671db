//! The closed property registry.
//!
//! Holds the fixed, ordered set of valid property names, the name-to-predicate
//! dispatch, and the table of mutually exclusive pairs. The registry is a set
//! of process-wide constants; nothing here is mutable after startup.

use crate::predicates;
use serde::Serialize;
use std::fmt;

/// A named property of a natural number.
///
/// Variant order is the canonical report order and the order used in the
/// "Available properties" listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Property {
    Even,
    Odd,
    Buzz,
    Duck,
    Palindromic,
    Gapful,
    Spy,
    Sunny,
    Square,
    Jumping,
    Happy,
    Sad,
}

impl Property {
    /// All properties in canonical order.
    pub const ALL: [Property; 12] = [
        Property::Even,
        Property::Odd,
        Property::Buzz,
        Property::Duck,
        Property::Palindromic,
        Property::Gapful,
        Property::Spy,
        Property::Sunny,
        Property::Square,
        Property::Jumping,
        Property::Happy,
        Property::Sad,
    ];

    /// Canonical uppercase name, as written in requests.
    pub fn name(&self) -> &'static str {
        match self {
            Property::Even => "EVEN",
            Property::Odd => "ODD",
            Property::Buzz => "BUZZ",
            Property::Duck => "DUCK",
            Property::Palindromic => "PALINDROMIC",
            Property::Gapful => "GAPFUL",
            Property::Spy => "SPY",
            Property::Sunny => "SUNNY",
            Property::Square => "SQUARE",
            Property::Jumping => "JUMPING",
            Property::Happy => "HAPPY",
            Property::Sad => "SAD",
        }
    }

    /// Lowercase label used in per-number report lines.
    pub fn label(&self) -> &'static str {
        match self {
            Property::Even => "even",
            Property::Odd => "odd",
            Property::Buzz => "buzz",
            Property::Duck => "duck",
            Property::Palindromic => "palindromic",
            Property::Gapful => "gapful",
            Property::Spy => "spy",
            Property::Sunny => "sunny",
            Property::Square => "square",
            Property::Jumping => "jumping",
            Property::Happy => "happy",
            Property::Sad => "sad",
        }
    }

    /// Resolve an uppercase bare name, without any negation prefix.
    pub fn from_name(name: &str) -> Option<Property> {
        Property::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Evaluate this property for `n`.
    pub fn holds(&self, n: u64) -> bool {
        match self {
            Property::Even => predicates::even(n),
            Property::Odd => predicates::odd(n),
            Property::Buzz => predicates::buzz(n),
            Property::Duck => predicates::duck(n),
            Property::Palindromic => predicates::palindromic(n),
            Property::Gapful => predicates::gapful(n),
            Property::Spy => predicates::spy(n),
            Property::Sunny => predicates::sunny(n),
            Property::Square => predicates::square(n),
            Property::Jumping => predicates::jumping(n),
            Property::Happy => predicates::happy(n),
            Property::Sad => predicates::sad(n),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unordered property pairs that no number satisfies together.
///
/// Checked by the validator in this order, so the first conflicting pair in
/// a request is reported deterministically. Adding a future exclusion is a
/// data change here, not a code change in the validator.
pub const EXCLUSIVE_PAIRS: [(Property, Property); 4] = [
    (Property::Even, Property::Odd),
    (Property::Duck, Property::Spy),
    (Property::Sunny, Property::Square),
    (Property::Happy, Property::Sad),
];

/// Comma-joined canonical name list for error listings.
pub fn available_names() -> String {
    Property::ALL
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One requested property, possibly negated.
///
/// A leading `-` on the raw token means the property must NOT hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyToken {
    pub property: Property,
    pub negated: bool,
}

impl PropertyToken {
    /// Parse an already-uppercased raw token. Returns `None` for names
    /// outside the registry.
    pub fn parse(raw: &str) -> Option<PropertyToken> {
        let (negated, name) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        Property::from_name(name).map(|property| PropertyToken { property, negated })
    }

    /// Whether `n` satisfies this token; negation inverts the predicate.
    pub fn matches(&self, n: u64) -> bool {
        self.property.holds(n) != self.negated
    }
}

impl fmt::Display for PropertyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "-{}", self.property.name())
        } else {
            f.write_str(self.property.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_names() {
        assert_eq!(Property::ALL.len(), 12);
        assert_eq!(Property::ALL[0], Property::Even);
        assert_eq!(Property::ALL[11], Property::Sad);
        assert_eq!(
            available_names(),
            "EVEN, ODD, BUZZ, DUCK, PALINDROMIC, GAPFUL, SPY, SUNNY, SQUARE, JUMPING, HAPPY, SAD"
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Property::from_name("EVEN"), Some(Property::Even));
        assert_eq!(Property::from_name("JUMPING"), Some(Property::Jumping));
        assert_eq!(Property::from_name("even"), None);
        assert_eq!(Property::from_name("PRIME"), None);
    }

    #[test]
    fn test_token_parse() {
        let token = PropertyToken::parse("SPY").unwrap();
        assert_eq!(token.property, Property::Spy);
        assert!(!token.negated);

        let token = PropertyToken::parse("-SPY").unwrap();
        assert_eq!(token.property, Property::Spy);
        assert!(token.negated);
        assert_eq!(token.to_string(), "-SPY");

        assert!(PropertyToken::parse("FOO").is_none());
        assert!(PropertyToken::parse("-FOO").is_none());
        assert!(PropertyToken::parse("-").is_none());
        assert!(PropertyToken::parse("").is_none());
    }

    #[test]
    fn test_token_matching() {
        let odd = PropertyToken::parse("ODD").unwrap();
        let not_odd = PropertyToken::parse("-ODD").unwrap();
        assert!(odd.matches(9));
        assert!(!odd.matches(8));
        assert!(not_odd.matches(8));
        assert!(!not_odd.matches(9));
    }

    #[test]
    fn test_dispatch_agrees_with_predicates() {
        for n in [0u64, 1, 7, 10, 100, 1124, 4225] {
            assert_eq!(Property::Even.holds(n), crate::predicates::even(n));
            assert_eq!(Property::Duck.holds(n), crate::predicates::duck(n));
            assert_eq!(Property::Happy.holds(n), crate::predicates::happy(n));
        }
    }

    #[test]
    fn test_serialize_uses_canonical_names() {
        let json = serde_json::to_string(&Property::Palindromic).unwrap();
        assert_eq!(json, "\"PALINDROMIC\"");
    }
}
