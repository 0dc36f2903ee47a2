// WHY: explicit token contract decouples matching from any concrete tokenizer
// Tokens carry exactly the two surface forms the matcher needs

use thiserror::Error;

/// A single token with its original-case and lowercased forms
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Text as it appeared in the source
    pub orth: String,
    /// Case-folded text
    pub lower: String,
}

impl Token {
    /// Build a token, deriving the lowercased form with Unicode case folding
    pub fn new(orth: impl Into<String>) -> Self {
        let orth = orth.into();
        let lower = orth.to_lowercase();
        Self { orth, lower }
    }

    /// Build a token from forms produced by an external tokenizer
    pub fn with_forms(orth: impl Into<String>, lower: impl Into<String>) -> Self {
        Self {
            orth: orth.into(),
            lower: lower.into(),
        }
    }
}

/// Tokenizer failure reported back to the index builder
#[derive(Debug, Clone, Error)]
#[error("cannot tokenize {input:?}: {reason}")]
pub struct TokenizeError {
    pub input: String,
    pub reason: String,
}

impl TokenizeError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Splits text into tokens
///
/// Implementations must be shareable across threads: the extractor keeps one
/// and may be used from several callers at once.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError>;
}

/// Splits on Unicode whitespace; never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Infallible convenience for callers that hold the concrete type
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        text.split_whitespace().map(Token::new).collect()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        Ok(self.tokens(text))
    }
}
