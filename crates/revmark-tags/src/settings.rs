//! Tag grammar configuration.
//!
//! Settings come from a config file such as `revmark.toml`:
//!
//! ```toml
//! [markers]
//! start_end = "?"
//! key_separator = "|"
//! cleanup = "~"
//!
//! [languages.sql]
//! extensions = ["sql"]
//! comment_open = "/*"
//! comment_close = "*/"
//! ```
//!
//! Languages from the file are merged over the built-in set by name.

use std::collections::BTreeMap;

use revmark_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grammar::TagGrammar;

/// Marker characters shared by every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerSettings {
    pub start_end: char,
    pub key_separator: char,
    pub cleanup: char,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        let grammar = TagGrammar::c_style();
        Self {
            start_end: grammar.start_end_marker(),
            key_separator: grammar.key_separator(),
            cleanup: grammar.cleanup_marker(),
        }
    }
}

/// Native multi-line comment syntax of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageSettings {
    pub extensions: Vec<String>,
    pub comment_open: String,
    pub comment_close: String,
}

impl LanguageSettings {
    fn new(extensions: &[&str], comment_open: &str, comment_close: &str) -> Self {
        Self {
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
            comment_open: comment_open.to_string(),
            comment_close: comment_close.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSettings {
    pub markers: MarkerSettings,
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageSettings>,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            markers: MarkerSettings::default(),
            languages: builtin_languages(),
        }
    }
}

fn builtin_languages() -> BTreeMap<String, LanguageSettings> {
    let c_family = [
        "java", "c", "h", "cpp", "hpp", "cc", "cs", "js", "jsx", "ts", "tsx", "go", "rs", "kt",
        "scala", "swift", "css", "php",
    ];
    BTreeMap::from([
        ("c-family".to_string(), LanguageSettings::new(&c_family, "/*", "*/")),
        (
            "markup".to_string(),
            LanguageSettings::new(&["html", "htm", "xml", "xhtml", "svg", "vue"], "<!--", "-->"),
        ),
        ("ocaml".to_string(), LanguageSettings::new(&["ml", "mli"], "(*", "*)")),
        ("haskell".to_string(), LanguageSettings::new(&["hs"], "{-", "-}")),
        ("lua".to_string(), LanguageSettings::new(&["lua"], "--[[", "]]")),
    ])
}

impl TagSettings {
    /// Load settings from a config file, merged over the built-in languages.
    ///
    /// The `[markers]` table is required; a missing file or key fails.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_native(),
            });
        }
        let loaded: TagSettings = ConfigStore::new().load(path)?;
        let mut settings = Self {
            markers: loaded.markers,
            languages: builtin_languages(),
        };
        settings.languages.extend(loaded.languages);
        settings.validate()?;
        tracing::debug!(path = %path, languages = settings.languages.len(), "loaded tag settings");
        Ok(settings)
    }

    /// Write these settings to a config file.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        ConfigStore::new().save(path, self)?;
        Ok(())
    }

    /// Check that every configured language yields a valid grammar.
    pub fn validate(&self) -> Result<()> {
        for name in self.languages.keys() {
            self.grammar_for_language(name)?;
        }
        Ok(())
    }

    /// Grammar for a language by its configured name.
    pub fn grammar_for_language(&self, name: &str) -> Result<TagGrammar> {
        let language = self
            .languages
            .get(name)
            .ok_or_else(|| Error::UnsupportedLanguage {
                subject: format!("language '{name}'"),
            })?;
        self.grammar(language).map_err(|e| match e {
            Error::InvalidGrammar { message } => {
                Error::grammar(format!("language '{name}': {message}"))
            }
            other => other,
        })
    }

    /// Grammar for a file, chosen by its extension.
    pub fn grammar_for_path(&self, path: &NormalizedPath) -> Result<TagGrammar> {
        let name = path
            .extension()
            .and_then(|ext| self.language_for_extension(ext))
            .ok_or_else(|| Error::UnsupportedLanguage {
                subject: format!("file '{path}'"),
            })?;
        self.grammar_for_language(name)
    }

    /// Name of the language that claims an extension, compared case-insensitively.
    pub fn language_for_extension(&self, extension: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|(_, language)| {
                language
                    .extensions
                    .iter()
                    .any(|ext| ext.eq_ignore_ascii_case(extension))
            })
            .map(|(name, _)| name.as_str())
    }

    fn grammar(&self, language: &LanguageSettings) -> Result<TagGrammar> {
        TagGrammar::new(
            self.markers.start_end,
            self.markers.key_separator,
            self.markers.cleanup,
            language.comment_open.as_str(),
            language.comment_close.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case("src/Main.java", "/*", "*/")]
    #[case("web/index.HTML", "<!--", "-->")]
    #[case("lib/parser.ml", "(*", "*)")]
    #[case("init.lua", "--[[", "]]")]
    fn test_builtin_grammar_for_path(
        #[case] path: &str,
        #[case] open: &str,
        #[case] close: &str,
    ) {
        let grammar = TagSettings::default()
            .grammar_for_path(&NormalizedPath::new(path))
            .unwrap();
        assert_eq!(grammar.comment_open(), open);
        assert_eq!(grammar.comment_close(), close);
    }

    #[test]
    fn test_unknown_extension_is_config_error() {
        let err = TagSettings::default()
            .grammar_for_path(&NormalizedPath::new("script.py"))
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_merges_languages() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("revmark.toml");
        fs::write(
            &path,
            r##"
[markers]
start_end = "!"
key_separator = "#"
cleanup = "%"

[languages.sql]
extensions = ["sql"]
comment_open = "/*"
comment_close = "*/"
"##,
        )
        .unwrap();

        let settings = TagSettings::load(&NormalizedPath::new(&path)).unwrap();
        assert_eq!(settings.markers.key_separator, '#');
        assert!(settings.languages.contains_key("sql"));
        assert!(settings.languages.contains_key("c-family"));

        let grammar = settings
            .grammar_for_path(&NormalizedPath::new("q.sql"))
            .unwrap();
        assert_eq!(grammar.start_end_marker(), '!');
    }

    #[test]
    fn test_load_missing_markers_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("revmark.toml");
        fs::write(&path, "[markers]\nstart_end = \"?\"\n").unwrap();

        assert!(TagSettings::load(&NormalizedPath::new(&path)).is_err());
    }

    #[test]
    fn test_load_rejects_clashing_markers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("revmark.toml");
        fs::write(
            &path,
            "[markers]\nstart_end = \"?\"\nkey_separator = \"?\"\ncleanup = \"~\"\n",
        )
        .unwrap();

        let err = TagSettings::load(&NormalizedPath::new(&path)).unwrap_err();
        assert!(matches!(err, Error::InvalidGrammar { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TagSettings::load(&NormalizedPath::new("/no/such/revmark.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join("revmark.toml"));

        TagSettings::default().save(&path).unwrap();
        let loaded = TagSettings::load(&path).unwrap();

        assert_eq!(loaded, TagSettings::default());
    }
}
