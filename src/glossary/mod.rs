// WHY: Main glossary extractor interface tying index, span generation and matching together
// The index is compiled once and shared read-only across clones and threads

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

pub mod index;
pub mod matcher;
pub mod ngrams;
pub mod normalization;

// Re-export core types
pub use index::{CollisionPolicy, GlossaryIndex};
pub use matcher::{match_spans, Matches};
pub use ngrams::{ngram_count, Ngram, NgramSpans};
pub use normalization::{
    combine_ngram, combine_ngram_into, normalize_term, CaseMode, DEFAULT_JOINER,
};

use crate::error::Result;
use crate::extraction::{Extraction, Extractor, InputType};
use crate::token::{Token, Tokenizer};

/// Category reported by every glossary extractor
pub const GLOSSARY_CATEGORY: &str = "glossary";

/// Configuration for glossary matching
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Opaque extractor identity, passed through untouched
    pub name: String,
    /// Maximum span width in tokens; single tokens are always matched
    pub ngrams: usize,
    /// Match on original-case token text instead of lowercased text
    pub case_sensitive: bool,
    /// Separator between token forms in lookup keys
    pub joiner: String,
    /// Owner of a key shared by several glossary entries
    pub collision: CollisionPolicy,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            name: GLOSSARY_CATEGORY.to_string(),
            ngrams: 2,
            case_sensitive: false,
            joiner: DEFAULT_JOINER.to_string(),
            collision: CollisionPolicy::default(),
        }
    }
}

impl ExtractorConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_ngrams(mut self, ngrams: usize) -> Self {
        self.ngrams = ngrams;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_joiner(mut self, joiner: impl Into<String>) -> Self {
        self.joiner = joiner.into();
        self
    }

    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    pub fn case_mode(&self) -> CaseMode {
        CaseMode::from_case_sensitive(self.case_sensitive)
    }
}

/// Finds glossary terms in token sequences
#[derive(Debug, Clone)]
pub struct GlossaryExtractor {
    config: ExtractorConfig,
    index: Arc<GlossaryIndex>,
}

impl GlossaryExtractor {
    /// Compile the glossary and create an extractor
    /// Tokenizer failures on any term abort construction
    pub fn new<I, S>(
        glossary: I,
        config: ExtractorConfig,
        tokenizer: &dyn Tokenizer,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = GlossaryIndex::build(
            glossary,
            tokenizer,
            config.case_mode(),
            &config.joiner,
            config.collision,
        )?;
        debug!(
            "Created glossary extractor {:?}: {} keys, ngrams={}",
            config.name,
            index.len(),
            config.ngrams
        );
        Ok(Self {
            config,
            index: Arc::new(index),
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn index(&self) -> &GlossaryIndex {
        &self.index
    }

    /// Lazily match every span of width 1..=max(1, ngrams) against the glossary
    pub fn matches<'a>(
        &'a self,
        forms: &'a [&'a str],
    ) -> Matches<'a, NgramSpans<'a, &'a str>> {
        let spans = NgramSpans::new(forms, self.config.ngrams);
        match_spans(spans, &self.index, &self.config.joiner)
    }

    /// Match tokens, reporting failures to the caller
    pub fn try_extract(&self, tokens: &[Token]) -> Result<Vec<Extraction>> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let forms = normalization::token_forms(tokens, self.config.case_mode());
        let results = self.matches(&forms).collect::<Result<Vec<_>>>()?;

        debug!(
            "Extractor {:?}: {} matches over {} tokens",
            self.config.name,
            results.len(),
            tokens.len()
        );
        Ok(results)
    }

    /// Match tokens; failures are logged and yield an empty list
    pub fn extract(&self, tokens: &[Token]) -> Vec<Extraction> {
        match self.try_extract(tokens) {
            Ok(results) => results,
            Err(e) => {
                warn!("Glossary extraction failed for {:?}: {}", self.config.name, e);
                Vec::new()
            }
        }
    }
}

impl Extractor for GlossaryExtractor {
    type Input = [Token];

    fn name(&self) -> &str {
        &self.config.name
    }

    fn category(&self) -> &str {
        GLOSSARY_CATEGORY
    }

    fn input_type(&self) -> InputType {
        InputType::Tokens
    }

    fn extract(&self, input: &[Token]) -> Result<Vec<Extraction>> {
        self.try_extract(input)
    }
}
