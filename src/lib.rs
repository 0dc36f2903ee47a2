pub mod error;
pub mod extraction;
pub mod glossary;
pub mod reader;
pub mod token;

// Re-export main types for convenient access
pub use error::{GlossaryError, Result};
pub use extraction::{Extraction, Extractor, InputType, SpanContext, MATCH_CONFIDENCE};
pub use glossary::{CollisionPolicy, ExtractorConfig, GlossaryExtractor, GlossaryIndex};
pub use token::{Token, TokenizeError, Tokenizer, WhitespaceTokenizer};
