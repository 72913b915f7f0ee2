//! Tokenization of comma-separated target lists.

use super::TargetName;

/// One element of a target list, split at its first colon.
///
/// `firestore:rules` has base `firestore` and qualifier `rules`. Only the
/// base takes part in target matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetToken {
    pub base: String,
    pub qualifier: Option<String>,
}

impl TargetToken {
    /// Parse a single token. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let (base, qualifier) = match raw.split_once(':') {
            Some((base, qualifier)) => (base, Some(qualifier.to_string())),
            None => (raw, None),
        };
        Some(Self {
            base: base.to_string(),
            qualifier,
        })
    }

    /// The known target this token names, if any.
    pub fn target(&self) -> Option<TargetName> {
        TargetName::from_name(&self.base)
    }
}

/// Split a raw `--only`/`--except` value into tokens, dropping empty ones.
pub fn parse_target_list(raw: &str) -> Vec<TargetToken> {
    raw.split(',').filter_map(TargetToken::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_base_and_qualifier_at_first_colon() {
        let token = TargetToken::parse("hosting:site:extra").unwrap();
        assert_eq!(token.base, "hosting");
        assert_eq!(token.qualifier.as_deref(), Some("site:extra"));
    }

    #[test]
    fn unqualified_token_has_no_qualifier() {
        let token = TargetToken::parse(" database ").unwrap();
        assert_eq!(token.base, "database");
        assert!(token.qualifier.is_none());
    }

    #[test]
    fn list_drops_blank_entries() {
        let tokens = parse_target_list("functions,, ,firestore:rules,");
        let bases: Vec<&str> = tokens.iter().map(|t| t.base.as_str()).collect();
        assert_eq!(bases, vec!["functions", "firestore"]);
    }

    #[test]
    fn empty_list_has_no_tokens() {
        assert!(parse_target_list("").is_empty());
    }
}
