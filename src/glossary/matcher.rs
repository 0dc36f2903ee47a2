// WHY: turns a span stream into extraction records by exact key lookup
// Every matching width/position is reported; nothing is ranked or suppressed

use super::index::GlossaryIndex;
use super::ngrams::Ngram;
use super::normalization::combine_ngram_into;
use crate::error::Result;
use crate::extraction::Extraction;

/// Lazy matcher over any n-gram iterator
pub struct Matches<'i, I> {
    spans: I,
    index: &'i GlossaryIndex,
    joiner: &'i str,
    /// Reused key buffer
    key: String,
}

impl<'i, I> Matches<'i, I> {
    pub fn new(spans: I, index: &'i GlossaryIndex, joiner: &'i str) -> Self {
        Self {
            spans,
            index,
            joiner,
            key: String::new(),
        }
    }
}

impl<'i, 'a, I, S> Iterator for Matches<'i, I>
where
    I: Iterator<Item = Ngram<'a, S>>,
    S: AsRef<str> + 'a,
{
    type Item = Result<Extraction>;

    fn next(&mut self) -> Option<Self::Item> {
        for ngram in self.spans.by_ref() {
            combine_ngram_into(ngram.parts, self.joiner, &mut self.key);
            match self.index.resolve(&self.key) {
                Ok(Some(value)) => {
                    return Some(Ok(Extraction::from_match(value, ngram.start, ngram.end)));
                }
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.spans.size_hint().1)
    }
}

/// Convenience constructor mirroring the iterator adapter style
pub fn match_spans<'i, I>(spans: I, index: &'i GlossaryIndex, joiner: &'i str) -> Matches<'i, I> {
    Matches::new(spans, index, joiner)
}
