//! The line engine: inserts and removes tags in a [`SourceDocument`].
//!
//! Every operation works on a complete in-memory document; reading and
//! writing the file is left to [`crate::FileTagger`].

mod insert;
mod listing;
mod remove;

pub use insert::TagPlacement;
pub use listing::{TagListing, TagOccurrence, TaggedRange};
pub use remove::Removal;

use crate::grammar::TagGrammar;
use crate::matcher::TagMatcher;
use crate::region::RegionScanner;
use crate::tag::{TagSpec, render_tag};

/// Tag operations bound to one grammar.
#[derive(Debug, Clone)]
pub struct TagEngine {
    grammar: TagGrammar,
    any: TagMatcher,
}

impl TagEngine {
    pub fn new(grammar: TagGrammar) -> Self {
        let any = TagMatcher::any(&grammar);
        Self { grammar, any }
    }

    pub fn grammar(&self) -> &TagGrammar {
        &self.grammar
    }

    /// Matcher for tags with any identifier.
    pub fn matcher(&self) -> &TagMatcher {
        &self.any
    }

    pub fn render(&self, spec: &TagSpec) -> String {
        render_tag(&self.grammar, spec)
    }

    /// Native comment detection for this grammar.
    pub fn scanner(&self) -> RegionScanner<'_> {
        RegionScanner::new(&self.grammar, &self.any)
    }
}
