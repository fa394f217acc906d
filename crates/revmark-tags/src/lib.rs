//! Review tags embedded in source files.
//!
//! A review tag marks a line range of a source file with an identifier. It
//! is written as a native multi-line comment appended to the first and last
//! line of the range, so the annotated file still compiles:
//!
//! ```text
//!         System.out.println("I");/*-?|r1|*/
//!         System.out.println("am");
//!         System.out.println("a");/*-|r1|?*/
//! ```
//!
//! The crate is layered bottom-up:
//!
//! - [`grammar`]: the marker characters and comment delimiters of a language
//! - [`tag`] / [`matcher`]: rendering tags and recognizing them in a line
//! - [`region`]: finding native comments a tag must not be placed inside
//! - [`engine`]: inserting, removing and listing tags in a [`SourceDocument`]
//! - [`tagger`]: the same operations as whole-file transactions
//! - [`settings`]: per-language grammars loaded from a config file

pub mod document;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod matcher;
pub mod region;
pub mod settings;
pub mod tag;
pub mod tagger;

pub use document::{LineEnding, SourceDocument};
pub use engine::{Removal, TagEngine, TagListing, TagOccurrence, TagPlacement, TaggedRange};
pub use error::{Error, Result};
pub use grammar::TagGrammar;
pub use matcher::{TagMatch, TagMatcher};
pub use region::{CommentRegion, RegionScanner};
pub use settings::{LanguageSettings, MarkerSettings, TagSettings};
pub use tag::{TagRole, TagSpec, render_tag};
pub use tagger::FileTagger;
