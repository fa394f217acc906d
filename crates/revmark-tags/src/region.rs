//! Native comment region detection.
//!
//! A region is found by scanning for the grammar's literal comment
//! delimiters, with any rendered tags stripped from a line first so that a
//! tag's own delimiters never count as native comment syntax. There is no
//! tokenizer behind this: delimiters inside string literals are counted too.

use std::borrow::Cow;

use crate::document::SourceDocument;
use crate::grammar::TagGrammar;
use crate::matcher::TagMatcher;

/// Line span of one native multi-line comment, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentRegion {
    pub open: usize,
    pub close: usize,
}

impl CommentRegion {
    pub fn contains(&self, line: usize) -> bool {
        self.open <= line && line <= self.close
    }

    pub fn is_multi_line(&self) -> bool {
        self.open < self.close
    }
}

/// Finds native comment regions in a document.
#[derive(Debug, Clone, Copy)]
pub struct RegionScanner<'a> {
    grammar: &'a TagGrammar,
    tags: &'a TagMatcher,
}

impl<'a> RegionScanner<'a> {
    pub fn new(grammar: &'a TagGrammar, tags: &'a TagMatcher) -> Self {
        Self { grammar, tags }
    }

    /// Line text with all rendered tags removed.
    pub fn untagged<'l>(&self, line: &'l str) -> Cow<'l, str> {
        self.tags.strip(line)
    }

    /// The native comment enclosing `line`, if any.
    ///
    /// The last opening delimiter at or before `line` wins; the region closes
    /// at the first closing delimiter that follows that opener. Unterminated
    /// comments are not regions.
    pub fn enclosing(&self, doc: &SourceDocument, line: usize) -> Option<CommentRegion> {
        let open_delim = self.grammar.comment_open();

        let (open, after_open) = (0..=line.min(doc.len().checked_sub(1)?))
            .rev()
            .find_map(|i| {
                let text = self.untagged(doc.line(i)?);
                text.rfind(open_delim)
                    .map(|pos| (i, text[pos + open_delim.len()..].to_string()))
            })?;

        let close = if after_open.contains(self.grammar.comment_close()) {
            open
        } else {
            (open + 1..doc.len()).find(|&i| {
                doc.line(i)
                    .is_some_and(|text| self.untagged(text).contains(self.grammar.comment_close()))
            })?
        };

        let region = CommentRegion { open, close };
        region.contains(line).then_some(region)
    }
}
