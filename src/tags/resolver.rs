//! Parsing of `name[:colour]` tag tokens.

use std::collections::HashSet;

/// A label reference parsed from a tag token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec {
    pub name: String,
    pub colour: Option<String>,
}

impl TagSpec {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            colour: None,
        }
    }

    pub fn coloured(name: &str, colour: &str) -> Self {
        Self {
            name: name.to_string(),
            colour: Some(colour.to_string()),
        }
    }
}

/// Parse a tag token against the colours the board accepts.
///
/// The token is split on its last `:`. The suffix only counts as a colour
/// when it is in `palette` and something precedes the colon; otherwise the
/// whole token is the label name. Returns `None` for a blank token.
pub fn resolve_tag(token: &str, palette: &[&str]) -> Option<TagSpec> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    match token.rsplit_once(':') {
        Some((name, colour)) if !name.is_empty() && palette.contains(&colour) => {
            Some(TagSpec::coloured(name, colour))
        }
        _ => Some(TagSpec::named(token)),
    }
}

/// Resolve every token, dropping blank ones.
///
/// Tokens resolving to a name already seen are dropped, so the first
/// occurrence of a name decides its colour.
pub fn resolve_tags<S: AsRef<str>>(tokens: &[S], palette: &[&str]) -> Vec<TagSpec> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter_map(|t| resolve_tag(t.as_ref(), palette))
        .filter(|tag| seen.insert(tag.name.clone()))
        .collect()
}
