// WHY: one error type for the library surface so callers can tell
// "no matches" apart from "matching failed"

use thiserror::Error;

use crate::token::TokenizeError;

/// Errors produced while building a glossary index or matching against it
#[derive(Debug, Error)]
pub enum GlossaryError {
    /// The tokenizer rejected a glossary term during index construction
    #[error("failed to tokenize glossary term {term:?}")]
    Tokenize {
        term: String,
        #[source]
        source: TokenizeError,
    },

    /// The underlying transducer refused the key set
    #[error("failed to build glossary index")]
    IndexBuild(#[from] fst::Error),

    /// A key resolved to a slot with no stored glossary value
    /// Builds never produce such slots; this guards the slot/value pairing
    #[error("index slot {slot} for key {key:?} has no glossary value")]
    CorruptIndex { key: String, slot: u64 },
}

pub type Result<T> = std::result::Result<T, GlossaryError>;
