//! The literal alphabet tags are written in.
//!
//! A rendered tag looks like this for a C-style grammar with the default
//! markers:
//!
//! ```text
//! /*-?|TAGID|?*/
//! ```
//!
//! `/*` and `*/` are the native multi-line comment delimiters of the target
//! language, `?` marks a start and/or end tag, `|` separates the identifier,
//! and an optional `~` before the closing delimiter requests cleanup of the
//! host line on removal.

use crate::error::{Error, Result};

/// Literal joining the comment opener and the tag body.
pub const TAG_JOINER: char = '-';

/// Marker characters plus the native comment delimiters of one language.
///
/// Immutable once built; engines share it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGrammar {
    start_end_marker: char,
    key_separator: char,
    cleanup_marker: char,
    comment_open: String,
    comment_close: String,
}

impl TagGrammar {
    /// Build a grammar, rejecting ambiguous marker sets.
    pub fn new(
        start_end_marker: char,
        key_separator: char,
        cleanup_marker: char,
        comment_open: impl Into<String>,
        comment_close: impl Into<String>,
    ) -> Result<Self> {
        let grammar = Self {
            start_end_marker,
            key_separator,
            cleanup_marker,
            comment_open: comment_open.into(),
            comment_close: comment_close.into(),
        };
        grammar.validate()?;
        Ok(grammar)
    }

    /// Default markers with C-style `/*` `*/` comments.
    pub fn c_style() -> Self {
        Self {
            start_end_marker: '?',
            key_separator: '|',
            cleanup_marker: '~',
            comment_open: "/*".to_string(),
            comment_close: "*/".to_string(),
        }
    }

    fn validate(&self) -> Result<()> {
        let markers = [
            ("start/end marker", self.start_end_marker),
            ("key separator", self.key_separator),
            ("cleanup marker", self.cleanup_marker),
        ];

        for (i, (name, c)) in markers.iter().enumerate() {
            if c.is_whitespace() || c.is_control() {
                return Err(Error::grammar(format!("{name} must be a visible character")));
            }
            if *c == TAG_JOINER {
                return Err(Error::grammar(format!(
                    "{name} must not be '{TAG_JOINER}', which joins the comment opener and the tag"
                )));
            }
            if let Some((other, _)) = markers[i + 1..].iter().find(|(_, o)| o == c) {
                return Err(Error::grammar(format!(
                    "{name} and {other} must differ (both are '{c}')"
                )));
            }
        }

        if self.comment_open.trim().is_empty() || self.comment_close.trim().is_empty() {
            return Err(Error::grammar("comment delimiters must not be empty"));
        }
        if self.comment_open.contains(['\r', '\n']) || self.comment_close.contains(['\r', '\n']) {
            return Err(Error::grammar("comment delimiters must fit on one line"));
        }
        Ok(())
    }

    pub fn start_end_marker(&self) -> char {
        self.start_end_marker
    }

    pub fn key_separator(&self) -> char {
        self.key_separator
    }

    pub fn cleanup_marker(&self) -> char {
        self.cleanup_marker
    }

    pub fn comment_open(&self) -> &str {
        &self.comment_open
    }

    pub fn comment_close(&self) -> &str {
        &self.comment_close
    }

    /// Check that an identifier can be embedded without breaking the tag structure.
    pub fn check_identifier(&self, identifier: &str) -> Result<()> {
        let reason = if identifier.is_empty() {
            Some("identifier is empty".to_string())
        } else if let Some(c) = identifier.chars().find(|c| {
            [self.start_end_marker, self.key_separator, self.cleanup_marker].contains(c)
        }) {
            Some(format!("contains reserved marker character '{c}'"))
        } else if identifier.contains(['\r', '\n']) {
            Some("contains a line break".to_string())
        } else if let Some(delim) = [&self.comment_open, &self.comment_close]
            .into_iter()
            .find(|delim| identifier.contains(delim.as_str()))
        {
            Some(format!("contains the comment delimiter '{delim}'"))
        } else if self.comment_close == "-->" && identifier.contains("--") {
            // "--" is not allowed inside XML comments
            Some("contains '--', which breaks markup comments".to_string())
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidIdentifier {
                identifier: identifier.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

impl Default for TagGrammar {
    fn default() -> Self {
        Self::c_style()
    }
}
