//! Tag values and rendering.

use std::fmt;

use serde::Serialize;

use crate::grammar::{TAG_JOINER, TagGrammar};

/// Which boundary of a tagged range a tag marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagRole {
    /// First line of a multi-line range.
    Start,
    /// Last line of a multi-line range.
    End,
    /// A range covering exactly one line.
    SingleLine,
}

impl TagRole {
    /// Derive the role from the two marker positions of a matched tag.
    ///
    /// A tag with neither marker is malformed but harmless; it is treated
    /// as single-line so it still pairs with itself.
    pub fn from_markers(has_start: bool, has_end: bool) -> Self {
        match (has_start, has_end) {
            (true, false) => Self::Start,
            (false, true) => Self::End,
            _ => Self::SingleLine,
        }
    }

    pub fn has_start_marker(self) -> bool {
        matches!(self, Self::Start | Self::SingleLine)
    }

    pub fn has_end_marker(self) -> bool {
        matches!(self, Self::End | Self::SingleLine)
    }
}

impl fmt::Display for TagRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
            Self::SingleLine => "single-line",
        })
    }
}

/// Identity and flags of one tag to render or search for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagSpec {
    pub identifier: String,
    pub role: TagRole,
    /// Delete the host line on removal if nothing but whitespace remains.
    pub cleanup_on_removal: bool,
}

impl TagSpec {
    pub fn new(identifier: impl Into<String>, role: TagRole) -> Self {
        Self {
            identifier: identifier.into(),
            role,
            cleanup_on_removal: false,
        }
    }

    pub fn start(identifier: impl Into<String>) -> Self {
        Self::new(identifier, TagRole::Start)
    }

    pub fn end(identifier: impl Into<String>) -> Self {
        Self::new(identifier, TagRole::End)
    }

    pub fn single_line(identifier: impl Into<String>) -> Self {
        Self::new(identifier, TagRole::SingleLine)
    }

    pub fn with_cleanup(mut self, cleanup: bool) -> Self {
        self.cleanup_on_removal = cleanup;
        self
    }
}

/// Render a tag into the literal text appended to a source line.
///
/// # Example
/// ```
/// use revmark_tags::{TagGrammar, TagSpec, render_tag};
///
/// let grammar = TagGrammar::c_style();
/// assert_eq!(render_tag(&grammar, &TagSpec::start("r1")), "/*-?|r1|*/");
/// assert_eq!(render_tag(&grammar, &TagSpec::end("r1")), "/*-|r1|?*/");
/// assert_eq!(
///     render_tag(&grammar, &TagSpec::single_line("r1").with_cleanup(true)),
///     "/*-?|r1|?~*/"
/// );
/// ```
pub fn render_tag(grammar: &TagGrammar, spec: &TagSpec) -> String {
    let mut tag = String::with_capacity(
        grammar.comment_open().len() + grammar.comment_close().len() + spec.identifier.len() + 6,
    );
    tag.push_str(grammar.comment_open());
    tag.push(TAG_JOINER);
    if spec.role.has_start_marker() {
        tag.push(grammar.start_end_marker());
    }
    tag.push(grammar.key_separator());
    tag.push_str(&spec.identifier);
    tag.push(grammar.key_separator());
    if spec.role.has_end_marker() {
        tag.push(grammar.start_end_marker());
    }
    if spec.cleanup_on_removal {
        tag.push(grammar.cleanup_marker());
    }
    tag.push_str(grammar.comment_close());
    tag
}
