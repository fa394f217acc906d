//! Command context
//!
//! Resolves the working directory, the settings file and the grammar used
//! for a file, so commands can be run against any directory.

use std::path::{Path, PathBuf};

use revmark_fs::NormalizedPath;
use revmark_tags::{FileTagger, TagSettings};

use crate::error::Result;

/// Settings file looked up in the working directory
pub const CONFIG_FILE: &str = "revmark.toml";

#[derive(Debug, Clone)]
pub struct Context {
    cwd: PathBuf,
    config: Option<PathBuf>,
}

impl Context {
    pub fn new(cwd: impl Into<PathBuf>, config: Option<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            config,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }

    /// The settings file in effect: the explicit one, else `revmark.toml`
    /// when it exists.
    pub fn config_path(&self) -> Option<PathBuf> {
        match &self.config {
            Some(path) => Some(self.resolve(path)),
            None => {
                let local = self.cwd.join(CONFIG_FILE);
                local.is_file().then_some(local)
            }
        }
    }

    pub fn settings(&self) -> Result<TagSettings> {
        match self.config_path() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading settings");
                Ok(TagSettings::load(&NormalizedPath::new(path))?)
            }
            None => {
                tracing::debug!("no settings file, using built-in defaults");
                Ok(TagSettings::default())
            }
        }
    }

    /// Tagger for a file, with the grammar of `language` or of the file's extension.
    pub fn tagger(&self, file: &Path, language: Option<&str>) -> Result<FileTagger> {
        let settings = self.settings()?;
        let path = NormalizedPath::new(self.resolve(file));
        let tagger = match language {
            Some(name) => FileTagger::new(path, settings.grammar_for_language(name)?),
            None => FileTagger::for_path(path, &settings)?,
        };
        Ok(tagger)
    }
}
