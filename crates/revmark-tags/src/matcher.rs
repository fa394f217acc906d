//! Regex construction for recognizing rendered tags inside source lines.

use std::borrow::Cow;
use std::ops::Range;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::grammar::{TAG_JOINER, TagGrammar};
use crate::tag::TagRole;

/// A compiled tag pattern for one grammar.
///
/// The pattern exposes named groups `start`, `id`, `end` and `cleanup`.
/// Every grammar literal is escaped before interpolation, so a native
/// comment that lacks the full tag structure is never matched.
#[derive(Debug, Clone)]
pub struct TagMatcher {
    regex: Regex,
}

/// One tag found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch<'a> {
    pub identifier: &'a str,
    pub has_start_marker: bool,
    pub has_end_marker: bool,
    pub cleanup: bool,
    /// Byte range of the whole tag within the line.
    pub span: Range<usize>,
}

impl TagMatch<'_> {
    pub fn role(&self) -> TagRole {
        TagRole::from_markers(self.has_start_marker, self.has_end_marker)
    }
}

impl TagMatcher {
    /// Match tags with any identifier.
    pub fn any(grammar: &TagGrammar) -> Self {
        let separator = escape_char(grammar.key_separator());
        let id_pattern = format!(r"[^{separator}\r\n]+?");
        // Built only from escaped literals, so compilation cannot fail
        let regex = Regex::new(&build_pattern(grammar, &id_pattern))
            .expect("escaped tag pattern is valid");
        Self { regex }
    }

    /// Match tags with one specific identifier.
    ///
    /// With `id_is_pattern` unset the identifier is taken literally; otherwise
    /// it is embedded as a regex and may fail to compile.
    pub fn with_id(grammar: &TagGrammar, identifier: &str, id_is_pattern: bool) -> Result<Self> {
        let id_pattern = if id_is_pattern {
            format!("(?:{identifier})")
        } else {
            regex::escape(identifier)
        };
        let regex = Regex::new(&build_pattern(grammar, &id_pattern))?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Iterate over all tags in a line, left to right.
    pub fn find_iter<'a>(&'a self, line: &'a str) -> impl Iterator<Item = TagMatch<'a>> + 'a {
        self.regex.captures_iter(line).map(to_match)
    }

    /// Remove every matching tag from a line.
    pub fn strip<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(line, "")
    }
}

fn to_match<'a>(caps: Captures<'a>) -> TagMatch<'a> {
    let whole = caps.get(0).map_or(0..0, |m| m.range());
    TagMatch {
        identifier: caps.name("id").map_or("", |m| m.as_str()),
        has_start_marker: caps.name("start").is_some(),
        has_end_marker: caps.name("end").is_some(),
        cleanup: caps.name("cleanup").is_some(),
        span: whole,
    }
}

fn build_pattern(grammar: &TagGrammar, id_pattern: &str) -> String {
    let open = regex::escape(grammar.comment_open());
    let close = regex::escape(grammar.comment_close());
    let joiner = escape_char(TAG_JOINER);
    let marker = escape_char(grammar.start_end_marker());
    let separator = escape_char(grammar.key_separator());
    let cleanup = escape_char(grammar.cleanup_marker());

    format!(
        "{open}{joiner}?(?P<start>{marker})?{separator}(?P<id>{id_pattern}){separator}(?P<end>{marker})?(?P<cleanup>{cleanup})?{close}"
    )
}

fn escape_char(c: char) -> String {
    regex::escape(c.encode_utf8(&mut [0; 4]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{TagSpec, render_tag};

    fn grammar() -> TagGrammar {
        TagGrammar::c_style()
    }

    #[test]
    fn test_any_extracts_fields() {
        let line = format!(
            "        System.out.println(\"am\");{}",
            render_tag(&grammar(), &TagSpec::single_line("r3-c1").with_cleanup(true))
        );
        let matcher = TagMatcher::any(&grammar());

        let found: Vec<_> = matcher.find_iter(&line).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].identifier, "r3-c1");
        assert!(found[0].has_start_marker);
        assert!(found[0].has_end_marker);
        assert!(found[0].cleanup);
        assert_eq!(found[0].role(), TagRole::SingleLine);
        assert_eq!(&line[found[0].span.clone()], "/*-?|r3-c1|?~*/");
    }

    #[test]
    fn test_any_ignores_native_comments() {
        let matcher = TagMatcher::any(&grammar());
        assert!(!matcher.is_match("/* plain comment */"));
        assert!(!matcher.is_match("    /**"));
        assert!(!matcher.is_match("     */"));
        assert!(!matcher.is_match("/*-*/"));
    }

    #[test]
    fn test_any_accepts_missing_joiner() {
        let matcher = TagMatcher::any(&grammar());
        let found: Vec<_> = matcher.find_iter("x(); /*?|legacy|*/").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].identifier, "legacy");
        assert_eq!(found[0].role(), TagRole::Start);
    }

    #[test]
    fn test_any_finds_two_tags_on_one_line() {
        let matcher = TagMatcher::any(&grammar());
        let line = "call();/*-|a|?*//*-?|b|*/";
        let ids: Vec<_> = matcher.find_iter(line).map(|m| m.identifier).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_with_id_is_literal() {
        let matcher = TagMatcher::with_id(&grammar(), "a.b", false).unwrap();
        assert!(matcher.is_match("/*-?|a.b|?*/"));
        assert!(!matcher.is_match("/*-?|axb|?*/"));
    }

    #[test]
    fn test_with_id_pattern() {
        let matcher = TagMatcher::with_id(&grammar(), "r1-c[0-9]+", true).unwrap();
        assert!(matcher.is_match("/*-?|r1-c42|*/"));
        assert!(!matcher.is_match("/*-?|r2-c42|*/"));
    }

    #[test]
    fn test_with_id_invalid_pattern() {
        assert!(TagMatcher::with_id(&grammar(), "(", true).is_err());
    }

    #[test]
    fn test_metacharacter_markers_are_escaped() {
        let grammar = TagGrammar::new('^', '$', '+', "(*", "*)").unwrap();
        let tag = render_tag(&grammar, &TagSpec::end("x").with_cleanup(true));
        assert_eq!(tag, "(*-$x$^+*)");

        let matcher = TagMatcher::any(&grammar);
        let found: Vec<_> = matcher.find_iter(&tag).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].role(), TagRole::End);
        assert!(found[0].cleanup);
    }

    #[test]
    fn test_strip_removes_only_tags() {
        let matcher = TagMatcher::any(&grammar());
        let stripped = matcher.strip("int x; /* keep */ /*-?|id|?*/");
        assert_eq!(stripped, "int x; /* keep */ ");
    }
}
