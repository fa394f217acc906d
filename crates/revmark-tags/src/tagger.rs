//! File-level tagging transactions.

use revmark_fs::{NormalizedPath, io};

use crate::document::SourceDocument;
use crate::engine::{Removal, TagEngine, TagListing, TagPlacement};
use crate::error::Result;
use crate::grammar::TagGrammar;
use crate::settings::TagSettings;

/// Applies tag operations to one file.
///
/// Each call reads the whole file, rewrites it in memory and writes it back
/// atomically. Callers must ensure no one else writes the file meanwhile.
#[derive(Debug, Clone)]
pub struct FileTagger {
    path: NormalizedPath,
    engine: TagEngine,
}

impl FileTagger {
    pub fn new(path: impl Into<NormalizedPath>, grammar: TagGrammar) -> Self {
        Self {
            path: path.into(),
            engine: TagEngine::new(grammar),
        }
    }

    /// Tagger whose grammar is chosen from the file extension.
    pub fn for_path(path: impl Into<NormalizedPath>, settings: &TagSettings) -> Result<Self> {
        let path = path.into();
        let grammar = settings.grammar_for_path(&path)?;
        Ok(Self::new(path, grammar))
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn engine(&self) -> &TagEngine {
        &self.engine
    }

    pub fn read_document(&self) -> Result<SourceDocument> {
        Ok(SourceDocument::parse(&io::read_text(&self.path)?))
    }

    pub fn write_document(&self, doc: &SourceDocument) -> Result<()> {
        tracing::debug!(path = %self.path, lines = doc.len(), "writing file back");
        io::write_text(&self.path, &doc.render())?;
        Ok(())
    }

    /// Tag lines `start_line..=end_line` (1-based) with `identifier`.
    pub fn add_tags(&self, identifier: &str, start_line: usize, end_line: usize) -> Result<TagPlacement> {
        let mut doc = self.read_document()?;
        let placement = self.engine.add_tags(&mut doc, identifier, start_line, end_line)?;
        self.write_document(&doc)?;
        Ok(placement)
    }

    pub fn remove_tags(&self, identifier: &str) -> Result<Removal> {
        let mut doc = self.read_document()?;
        let removal = self.engine.remove_tags(&mut doc, identifier)?;
        self.write_if_changed(&doc, removal)
    }

    pub fn remove_tags_matching(&self, pattern: &str) -> Result<Removal> {
        let mut doc = self.read_document()?;
        let removal = self.engine.remove_tags_matching(&mut doc, pattern)?;
        self.write_if_changed(&doc, removal)
    }

    pub fn clear_all_tags(&self) -> Result<Removal> {
        let mut doc = self.read_document()?;
        let removal = self.engine.clear_all_tags(&mut doc);
        self.write_if_changed(&doc, removal)
    }

    pub fn list_tags(&self) -> Result<TagListing> {
        Ok(self.engine.find_tags(&self.read_document()?))
    }

    fn write_if_changed(&self, doc: &SourceDocument, removal: Removal) -> Result<Removal> {
        if removal.is_empty() {
            tracing::debug!(path = %self.path, "no tags matched, file left untouched");
        } else {
            self.write_document(doc)?;
        }
        Ok(removal)
    }
}
