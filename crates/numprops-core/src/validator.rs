//! Request validation for property searches.
//!
//! Runs once per search query, before the matching loop. Plain single-number
//! and range queries carry no property filter, so they never come through
//! here.

use crate::error::QueryError;
use crate::property::{Property, PropertyToken, EXCLUSIVE_PAIRS};

/// Validate the raw property tokens of a search request.
///
/// Tokens are case-insensitive and are uppercased before any check. On
/// success the parsed tokens come back in request order with negation
/// preserved. Checks run in a fixed order: unknown names first, then each
/// token against its own negation, then the exclusive-pair table (plain
/// direction for every pair, then both-negated); the first conflict found
/// is the one reported.
pub fn validate_tokens(raw: &[String]) -> Result<Vec<PropertyToken>, QueryError> {
    let mut tokens = Vec::with_capacity(raw.len());
    let mut unknown = Vec::new();

    for token in raw {
        let normalized = token.to_uppercase();
        match PropertyToken::parse(&normalized) {
            Some(parsed) => tokens.push(parsed),
            None => unknown.push(normalized),
        }
    }

    if !unknown.is_empty() {
        return Err(QueryError::UnknownProperties(unknown));
    }

    // A property together with its own negation can never match.
    for token in &tokens {
        if !token.negated
            && tokens
                .iter()
                .any(|t| t.negated && t.property == token.property)
        {
            return Err(QueryError::ExclusiveProperties(
                token.property.name().to_string(),
                format!("-{}", token.property.name()),
            ));
        }
    }

    for negated in [false, true] {
        for (a, b) in EXCLUSIVE_PAIRS {
            if has_token(&tokens, a, negated) && has_token(&tokens, b, negated) {
                return Err(QueryError::ExclusiveProperties(
                    display(a, negated),
                    display(b, negated),
                ));
            }
        }
    }

    Ok(tokens)
}

fn has_token(tokens: &[PropertyToken], property: Property, negated: bool) -> bool {
    tokens
        .iter()
        .any(|t| t.property == property && t.negated == negated)
}

fn display(property: Property, negated: bool) -> String {
    if negated {
        format!("-{}", property.name())
    } else {
        property.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_valid_tokens_pass_in_order() {
        let tokens = validate_tokens(&raw(&["odd", "-Square", "JUMPING"])).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].property, Property::Odd);
        assert!(!tokens[0].negated);
        assert_eq!(tokens[1].property, Property::Square);
        assert!(tokens[1].negated);
        assert_eq!(tokens[2].property, Property::Jumping);
    }

    #[test]
    fn test_unknown_single() {
        let err = validate_tokens(&raw(&["foo"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownProperties(vec!["FOO".to_string()])
        );
    }

    #[test]
    fn test_unknown_collects_all_offenders() {
        let err = validate_tokens(&raw(&["even", "hot", "-cold"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownProperties(vec!["HOT".to_string(), "-COLD".to_string()])
        );
    }

    #[test]
    fn test_unknown_reported_before_conflicts() {
        // EVEN/ODD conflict is present too, but unknown names win.
        let err = validate_tokens(&raw(&["even", "odd", "foo"])).unwrap_err();
        assert!(matches!(err, QueryError::UnknownProperties(_)));
    }

    #[test]
    fn test_self_negation_conflict() {
        let err = validate_tokens(&raw(&["even", "-even"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::ExclusiveProperties("EVEN".to_string(), "-EVEN".to_string())
        );
        // Order in the request does not change the reported pair.
        let err = validate_tokens(&raw(&["-even", "even"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::ExclusiveProperties("EVEN".to_string(), "-EVEN".to_string())
        );
    }

    #[test]
    fn test_pair_table_conflicts() {
        let err = validate_tokens(&raw(&["even", "odd"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::ExclusiveProperties("EVEN".to_string(), "ODD".to_string())
        );

        let err = validate_tokens(&raw(&["spy", "duck"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::ExclusiveProperties("DUCK".to_string(), "SPY".to_string())
        );

        let err = validate_tokens(&raw(&["sunny", "square"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::ExclusiveProperties("SUNNY".to_string(), "SQUARE".to_string())
        );

        let err = validate_tokens(&raw(&["happy", "sad"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::ExclusiveProperties("HAPPY".to_string(), "SAD".to_string())
        );
    }

    #[test]
    fn test_negated_pair_conflicts() {
        let err = validate_tokens(&raw(&["-even", "-odd"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::ExclusiveProperties("-EVEN".to_string(), "-ODD".to_string())
        );
        let err = validate_tokens(&raw(&["-happy", "-sad"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::ExclusiveProperties("-HAPPY".to_string(), "-SAD".to_string())
        );
    }

    #[test]
    fn test_mixed_direction_pair_is_allowed() {
        // EVEN with -ODD is redundant but satisfiable.
        assert!(validate_tokens(&raw(&["even", "-odd"])).is_ok());
        assert!(validate_tokens(&raw(&["-duck", "spy"])).is_ok());
    }

    #[test]
    fn test_first_table_pair_wins() {
        // Both EVEN/ODD and HAPPY/SAD are present; the table order decides.
        let err = validate_tokens(&raw(&["happy", "sad", "even", "odd"])).unwrap_err();
        assert_eq!(
            err,
            QueryError::ExclusiveProperties("EVEN".to_string(), "ODD".to_string())
        );
    }

    #[test]
    fn test_empty_token_list_is_valid() {
        assert!(validate_tokens(&[]).unwrap().is_empty());
    }
}
