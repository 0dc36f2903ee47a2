// WHY: sliding-window n-gram generation over a borrowed token slice
// Order is by width first (1..=N), then by start offset

use std::iter::FusedIterator;

/// A contiguous run of tokens with 0-based, end-exclusive offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ngram<'a, T> {
    pub parts: &'a [T],
    pub start: usize,
    pub end: usize,
}

impl<'a, T> Ngram<'a, T> {
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

/// Number of spans of width `1..=max_width` over `len` tokens
/// Width 1 is always covered, even when `max_width` is 0
pub fn ngram_count(len: usize, max_width: usize) -> usize {
    (1..=max_width.max(1).min(len)).map(|w| len - w + 1).sum()
}

/// Lazy iterator over every n-gram of width 1 up to a maximum width
///
/// Single tokens are always produced; a maximum width of 0 behaves like 1.
#[derive(Debug, Clone)]
pub struct NgramSpans<'a, T> {
    items: &'a [T],
    max_width: usize,
    width: usize,
    start: usize,
}

impl<'a, T> NgramSpans<'a, T> {
    pub fn new(items: &'a [T], max_width: usize) -> Self {
        Self {
            items,
            max_width: max_width.max(1),
            width: 1,
            start: 0,
        }
    }

    fn remaining(&self) -> usize {
        let len = self.items.len();
        let limit = self.max_width.min(len);
        if self.width > limit {
            return 0;
        }
        let in_current = len - self.width + 1 - self.start;
        let later: usize = (self.width + 1..=limit).map(|w| len - w + 1).sum();
        in_current + later
    }
}

impl<'a, T> Iterator for NgramSpans<'a, T> {
    type Item = Ngram<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.items.len();
        loop {
            // Widths beyond the sequence length produce nothing
            if self.width > self.max_width || self.width > len {
                return None;
            }
            let end = self.start + self.width;
            if end <= len {
                let ngram = Ngram {
                    parts: &self.items[self.start..end],
                    start: self.start,
                    end,
                };
                self.start += 1;
                return Some(ngram);
            }
            self.width += 1;
            self.start = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for NgramSpans<'a, T> {}

impl<'a, T> FusedIterator for NgramSpans<'a, T> {}
