// WHY: glossary terms and token spans must reduce to the same key shape
// Both sides pick the same token form and join with the same separator

use crate::error::{GlossaryError, Result};
use crate::token::{Token, Tokenizer};

/// Separator placed between token forms in a lookup key
pub const DEFAULT_JOINER: &str = " ";

/// Case-folding policy applied to both glossary terms and input tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Keys use each token's original-case form
    Sensitive,
    /// Keys use each token's lowercased form
    Insensitive,
}

impl CaseMode {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseMode::Sensitive
        } else {
            CaseMode::Insensitive
        }
    }
}

/// Select the token form used for keys under the given policy
pub fn token_form(token: &Token, mode: CaseMode) -> &str {
    match mode {
        CaseMode::Sensitive => &token.orth,
        CaseMode::Insensitive => &token.lower,
    }
}

/// Reduce a token sequence to the per-token strings the matcher works on
pub fn token_forms(tokens: &[Token], mode: CaseMode) -> Vec<&str> {
    tokens.iter().map(|t| token_form(t, mode)).collect()
}

/// Normalize a raw glossary term into its lookup key
pub fn normalize_term(
    term: &str,
    tokenizer: &dyn Tokenizer,
    mode: CaseMode,
    joiner: &str,
) -> Result<String> {
    let tokens = tokenizer
        .tokenize(term)
        .map_err(|source| GlossaryError::Tokenize {
            term: term.to_string(),
            source,
        })?;

    let mut key = String::with_capacity(term.len());
    let forms = token_forms(&tokens, mode);
    combine_ngram_into(&forms, joiner, &mut key);
    Ok(key)
}

/// Join span parts into a lookup key using the supplied buffer
/// A single-part span is copied unchanged
pub fn combine_ngram_into<S: AsRef<str>>(parts: &[S], joiner: &str, buffer: &mut String) {
    buffer.clear();
    if let [only] = parts {
        buffer.push_str(only.as_ref());
        return;
    }

    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            buffer.push_str(joiner);
        }
        buffer.push_str(part.as_ref());
    }
}

/// Allocating variant of [`combine_ngram_into`]
pub fn combine_ngram<S: AsRef<str>>(parts: &[S], joiner: &str) -> String {
    let mut key = String::new();
    combine_ngram_into(parts, joiner, &mut key);
    key
}
