//! Enumerating the tagged ranges of a document.

use std::collections::HashMap;

use serde::Serialize;

use super::TagEngine;
use crate::document::SourceDocument;
use crate::tag::TagRole;

/// A single tag found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagOccurrence {
    pub identifier: String,
    pub role: TagRole,
    /// 1-based line number.
    pub line: usize,
    pub cleanup: bool,
}

/// A start/end pair, or a single-line tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedRange {
    pub identifier: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// All tagged ranges of a document plus tags that could not be paired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagListing {
    pub ranges: Vec<TaggedRange>,
    pub dangling: Vec<TagOccurrence>,
}

impl TagListing {
    pub fn find(&self, identifier: &str) -> Option<&TaggedRange> {
        self.ranges.iter().find(|range| range.identifier == identifier)
    }
}

impl TagEngine {
    /// Every tag in document order.
    pub fn occurrences(&self, doc: &SourceDocument) -> Vec<TagOccurrence> {
        doc.lines()
            .iter()
            .enumerate()
            .flat_map(|(index, line)| {
                self.any.find_iter(line).map(move |tag| TagOccurrence {
                    identifier: tag.identifier.to_string(),
                    role: tag.role(),
                    line: index + 1,
                    cleanup: tag.cleanup,
                })
            })
            .collect()
    }

    /// Pair start tags with the next end tag of the same identifier.
    ///
    /// Nested ranges with the same identifier pair innermost first.
    pub fn find_tags(&self, doc: &SourceDocument) -> TagListing {
        let mut listing = TagListing::default();
        let mut open: HashMap<String, Vec<TagOccurrence>> = HashMap::new();

        for tag in self.occurrences(doc) {
            match tag.role {
                TagRole::SingleLine => listing.ranges.push(TaggedRange {
                    identifier: tag.identifier,
                    start_line: tag.line,
                    end_line: tag.line,
                }),
                TagRole::Start => open.entry(tag.identifier.clone()).or_default().push(tag),
                TagRole::End => match open.get_mut(&tag.identifier).and_then(Vec::pop) {
                    Some(start) => listing.ranges.push(TaggedRange {
                        identifier: tag.identifier,
                        start_line: start.line,
                        end_line: tag.line,
                    }),
                    None => {
                        tracing::debug!(identifier = %tag.identifier, line = tag.line, "end tag without start");
                        listing.dangling.push(tag);
                    }
                },
            }
        }

        listing.dangling.extend(open.into_values().flatten());
        listing.dangling.sort_by_key(|tag| tag.line);
        listing
            .ranges
            .sort_by(|a, b| (a.start_line, a.end_line).cmp(&(b.start_line, b.end_line)));
        listing
    }
}
