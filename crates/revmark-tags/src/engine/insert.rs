//! Tag insertion with native comment collision avoidance.

use serde::Serialize;

use super::TagEngine;
use crate::document::SourceDocument;
use crate::error::{Error, Result};
use crate::region::CommentRegion;
use crate::tag::TagSpec;

/// Where a tag pair ended up after insertion.
///
/// Line numbers are 1-based and refer to the rewritten document. The
/// `*_shifted` flags report that a boundary was moved beyond what the caller
/// asked for because it collided with a native comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagPlacement {
    pub requested_start: usize,
    pub requested_end: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub blank_line_inserted: bool,
    pub start_shifted: bool,
    pub end_shifted: bool,
}

impl TagPlacement {
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    /// Whether the caller should be told about a range expansion.
    pub fn is_significant(&self) -> bool {
        self.start_shifted || self.end_shifted
    }
}

impl TagEngine {
    /// Tag the 1-based inclusive line range `start_line..=end_line`.
    ///
    /// When a boundary falls inside a native multi-line comment the range is
    /// widened to the nearest position outside that comment, inserting a
    /// blank line when the tag would otherwise be glued to code. The range
    /// only ever shrinks by the bare closing line of a comment it starts on.
    pub fn add_tags(
        &self,
        doc: &mut SourceDocument,
        identifier: &str,
        start_line: usize,
        end_line: usize,
    ) -> Result<TagPlacement> {
        self.grammar.check_identifier(identifier)?;
        if start_line == 0 || end_line < start_line || end_line > doc.len() {
            return Err(Error::InvalidRange {
                start: start_line,
                end: end_line,
                line_count: doc.len(),
            });
        }
        tracing::debug!(identifier, start_line, end_line, "adding tags");

        let requested_start = start_line - 1;
        let mut start = requested_start;
        let mut end = end_line - 1;
        let mut start_inserted = false;
        let mut start_shifted = false;
        let mut end_shifted = false;

        // Both collisions are judged on the unmodified document
        let start_region = self.start_collision(doc, start);
        let end_close = self.end_collision(doc, end);

        if let Some(region) = start_region {
            match region.open.checked_sub(1) {
                Some(anchor) if doc.is_blank(anchor) => start = anchor,
                _ => {
                    doc.insert_blank(region.open);
                    start = region.open;
                    start_inserted = true;
                }
            }
            start_shifted = requested_start != region.open;
            tracing::debug!(
                open = region.open + 1,
                close = region.close + 1,
                new_start = start + 1,
                inserted = start_inserted,
                "start line collides with a native comment"
            );
        }

        let offset = usize::from(start_inserted);
        match end_close {
            Some(close) => {
                end = close + offset;
                end_shifted = true;
                tracing::debug!(new_end = end + 1, "end line collides with a native comment");
            }
            None => end += offset,
        }

        if self.start_on_comment_tail(doc, start) {
            doc.insert_blank(start + 1);
            start += 1;
            end += 1;
            start_inserted = true;
            start_shifted = true;
            tracing::debug!(new_start = start + 1, "start line closes a doc comment, moved below it");
        }

        if start == end {
            tracing::debug!("single-line tag");
            let tag = self.render(&TagSpec::single_line(identifier).with_cleanup(start_inserted));
            doc.append_to(start, &tag);
        } else {
            tracing::debug!("multi-line tags");
            let end_tag = self.render(&TagSpec::end(identifier));
            doc.append_to(end, &end_tag);
            let start_tag = self.render(&TagSpec::start(identifier).with_cleanup(start_inserted));
            doc.append_to(start, &start_tag);
        }

        let placement = TagPlacement {
            requested_start: start_line,
            requested_end: end_line,
            start_line: start + 1,
            end_line: end + 1,
            blank_line_inserted: start_inserted,
            start_shifted,
            end_shifted,
        };
        if placement.is_significant() {
            tracing::info!(
                identifier,
                requested = %format!("{start_line}-{end_line}"),
                placed = %format!("{}-{}", placement.start_line, placement.end_line),
                "tag range widened around a native comment"
            );
        }
        Ok(placement)
    }

    /// The comment a start tag on `line` would land in, widened backwards
    /// across comments that run into its opening line.
    ///
    /// A tag appended to the closing line of a comment is already outside
    /// of it, so that case is not a collision.
    fn start_collision(&self, doc: &SourceDocument, line: usize) -> Option<CommentRegion> {
        let scanner = self.scanner();
        let mut region = scanner.enclosing(doc, line)?;
        if region.close == line {
            return None;
        }
        while let Some(prev) = region
            .open
            .checked_sub(1)
            .and_then(|anchor| scanner.enclosing(doc, anchor))
        {
            if prev.close < region.open {
                break;
            }
            region.open = prev.open;
        }
        Some(region)
    }

    /// The closing line an end tag on `line` has to move to, following
    /// comments that reopen on a closing line.
    fn end_collision(&self, doc: &SourceDocument, line: usize) -> Option<usize> {
        let scanner = self.scanner();
        let region = scanner.enclosing(doc, line)?;
        if region.close == line {
            return None;
        }
        let mut close = region.close;
        while let Some(next) = scanner.enclosing(doc, close).filter(|r| r.close > close) {
            close = next.close;
        }
        Some(close)
    }

    /// Whether `line` is the bare closing line of a multi-line comment that
    /// follows non-blank content, so a start tag there would read as part
    /// of that comment.
    fn start_on_comment_tail(&self, doc: &SourceDocument, line: usize) -> bool {
        let scanner = self.scanner();
        let Some(region) = scanner.enclosing(doc, line) else {
            return false;
        };
        if !region.is_multi_line() || region.close != line {
            return false;
        }
        let preceded_by_content = region
            .open
            .checked_sub(1)
            .is_some_and(|before| !doc.is_blank(before));
        let close_delim = self.grammar.comment_close();
        let nothing_after_close = doc.line(line).is_some_and(|text| {
            let text = scanner.untagged(text);
            text.rfind(close_delim)
                .is_some_and(|pos| text[pos + close_delim.len()..].trim().is_empty())
        });
        preceded_by_content && nothing_after_close
    }
}
