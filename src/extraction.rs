// WHY: record shape handed to downstream consumers plus the base extractor surface
// Serialized form is {"value", "context": {"start", "end"}, "confidence"}

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Confidence attached to every exact glossary match
pub const MATCH_CONFIDENCE: f64 = 1.0;

/// Token offsets of a matched span (0-based, end-exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanContext {
    pub start: usize,
    pub end: usize,
}

/// A single extraction result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    pub value: String,
    pub context: SpanContext,
    pub confidence: f64,
}

impl Extraction {
    /// Wrap a glossary hit over tokens `start..end`
    pub fn from_match(value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            value: value.into(),
            context: SpanContext { start, end },
            confidence: MATCH_CONFIDENCE,
        }
    }
}

/// Kind of input an extractor consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Text,
    Tokens,
}

/// Common surface shared by extractors in a pipeline
pub trait Extractor {
    type Input: ?Sized;

    /// Opaque identity supplied at construction
    fn name(&self) -> &str;

    fn category(&self) -> &str;

    fn input_type(&self) -> InputType;

    fn extract(&self, input: &Self::Input) -> Result<Vec<Extraction>>;
}
