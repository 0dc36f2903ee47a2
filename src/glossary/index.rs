// WHY: immutable FST-backed lookup from normalized key to original glossary term
// Built once at extractor construction and only read afterwards

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Map, Streamer};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::normalization::{normalize_term, CaseMode};
use crate::error::{GlossaryError, Result};
use crate::token::Tokenizer;

/// Which glossary entry owns a key when several normalize to the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The entry listed later in the glossary replaces earlier ones
    #[default]
    LastWins,
    /// The entry listed first is kept
    FirstWins,
}

/// Compiled glossary index
pub struct GlossaryIndex {
    /// Key bytes to slot in `values`
    map: Map<Vec<u8>>,
    /// Original glossary strings, addressed by slot
    values: Vec<String>,
}

impl GlossaryIndex {
    /// Compile glossary terms into an immutable FST at startup
    /// Fails only if the tokenizer fails on a term
    pub fn build<I, S>(
        glossary: I,
        tokenizer: &dyn Tokenizer,
        mode: CaseMode,
        joiner: &str,
        policy: CollisionPolicy,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keyed: BTreeMap<String, String> = BTreeMap::new();
        let mut seen = 0usize;

        for term in glossary {
            let term = term.as_ref();
            seen += 1;

            let key = normalize_term(term, tokenizer, mode, joiner)?;
            if key.is_empty() {
                warn!("Skipping glossary term with no tokens: {:?}", term);
                continue;
            }

            match keyed.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(term.to_string());
                }
                Entry::Occupied(mut slot) => {
                    debug!(
                        "Glossary key collision on {:?}: {:?} vs {:?} ({:?})",
                        slot.key(),
                        slot.get(),
                        term,
                        policy
                    );
                    if policy == CollisionPolicy::LastWins {
                        slot.insert(term.to_string());
                    }
                }
            }
        }

        // WHY: BTreeMap iteration yields keys in the byte order the FST builder requires
        let mut values = Vec::with_capacity(keyed.len());
        let mut pairs = Vec::with_capacity(keyed.len());
        for (slot, (key, value)) in keyed.into_iter().enumerate() {
            pairs.push((key, slot as u64));
            values.push(value);
        }
        let map = Map::from_iter(pairs)?;

        info!("Compiled glossary index: {} terms, {} keys", seen, map.len());

        Ok(Self { map, values })
    }

    /// Resolve a normalized key to its original glossary string
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map
            .get(key)
            .and_then(|slot| self.values.get(slot as usize))
            .map(String::as_str)
    }

    /// Same as [`get`](Self::get) but reports keys whose slot is missing
    /// `build` fills slots and values together, so `Err` means the pairing broke
    pub(crate) fn resolve(&self, key: &str) -> Result<Option<&str>> {
        match self.map.get(key) {
            None => Ok(None),
            Some(slot) => self
                .values
                .get(slot as usize)
                .map(|v| Some(v.as_str()))
                .ok_or_else(|| GlossaryError::CorruptIndex {
                    key: key.to_string(),
                    slot,
                }),
        }
    }

    /// Index whose only key points past the stored values
    #[cfg(test)]
    pub(crate) fn with_dangling_slot(key: &str) -> Result<Self> {
        let map = Map::from_iter([(key, 7u64)])?;
        Ok(Self {
            map,
            values: Vec::new(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All (key, value) pairs whose key starts with `prefix`, in key order
    /// Introspection only; matching never walks prefixes
    pub fn entries_with_prefix(&self, prefix: &str) -> Vec<(String, &str)> {
        let matcher = Str::new(prefix).starts_with();
        let mut stream = self.map.search(matcher).into_stream();
        let mut entries = Vec::new();

        while let Some((key, slot)) = stream.next() {
            if let Some(value) = self.values.get(slot as usize) {
                entries.push((String::from_utf8_lossy(key).into_owned(), value.as_str()));
            }
        }
        entries
    }
}

impl std::fmt::Debug for GlossaryIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlossaryIndex")
            .field("keys", &self.map.len())
            .finish()
    }
}
