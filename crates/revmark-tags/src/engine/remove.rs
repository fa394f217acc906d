//! Tag removal.

use serde::Serialize;

use super::TagEngine;
use crate::document::SourceDocument;
use crate::error::Result;
use crate::matcher::TagMatcher;

/// Outcome of a removal pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Removal {
    pub tags_removed: usize,
    /// Lines dropped because a cleanup tag left them blank.
    pub lines_removed: usize,
}

impl Removal {
    pub fn is_empty(&self) -> bool {
        self.tags_removed == 0
    }
}

impl TagEngine {
    /// Remove every tag with exactly this identifier.
    pub fn remove_tags(&self, doc: &mut SourceDocument, identifier: &str) -> Result<Removal> {
        let matcher = TagMatcher::with_id(&self.grammar, identifier, false)?;
        tracing::debug!(identifier, "removing tags");
        Ok(remove_matching(doc, &matcher))
    }

    /// Remove every tag whose identifier matches a regex.
    pub fn remove_tags_matching(&self, doc: &mut SourceDocument, pattern: &str) -> Result<Removal> {
        let matcher = TagMatcher::with_id(&self.grammar, pattern, true)?;
        tracing::debug!(pattern, "removing tags by pattern");
        Ok(remove_matching(doc, &matcher))
    }

    /// Remove all tags regardless of identifier.
    pub fn clear_all_tags(&self, doc: &mut SourceDocument) -> Removal {
        tracing::debug!("clearing all tags");
        remove_matching(doc, &self.any)
    }
}

/// Strip matches from every line. A line that carried a cleanup tag and is
/// blank afterwards is dropped; otherwise it is kept even when blank.
fn remove_matching(doc: &mut SourceDocument, matcher: &TagMatcher) -> Removal {
    let mut removal = Removal::default();
    let mut line_no = 0;

    doc.retain_map(|line| {
        line_no += 1;
        let mut found = 0;
        let mut cleanup = false;
        for tag in matcher.find_iter(line) {
            found += 1;
            cleanup |= tag.cleanup;
        }
        if found == 0 {
            return Some(line.to_string());
        }

        removal.tags_removed += found;
        let stripped = matcher.strip(line);
        if cleanup && stripped.trim().is_empty() {
            tracing::debug!(line = line_no, "tag line removed");
            removal.lines_removed += 1;
            None
        } else {
            Some(stripped.into_owned())
        }
    });

    removal
}
