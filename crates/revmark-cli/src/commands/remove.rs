//! Remove and clear command implementations

use std::path::Path;

use colored::Colorize;
use revmark_tags::{FileTagger, Removal, SourceDocument};

use super::print_preview;
use crate::context::Context;
use crate::error::Result;

/// Run the remove command
///
/// Removes the tags whose identifier equals `identifier`, or matches it as a
/// regular expression when `regex` is set.
pub fn run_remove(
    ctx: &Context,
    file: &Path,
    identifier: &str,
    regex: bool,
    language: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let tagger = ctx.tagger(file, language)?;
    println!(
        "{} Removing tags {} from {}",
        "=>".blue().bold(),
        identifier.cyan(),
        tagger.path()
    );

    let removal = if dry_run {
        preview(&tagger, |doc| {
            if regex {
                tagger.engine().remove_tags_matching(doc, identifier)
            } else {
                tagger.engine().remove_tags(doc, identifier)
            }
        })?
    } else if regex {
        tagger.remove_tags_matching(identifier)?
    } else {
        tagger.remove_tags(identifier)?
    };

    report(&removal);
    Ok(())
}

/// Run the clear command
///
/// Removes every tag from `file`.
pub fn run_clear(ctx: &Context, file: &Path, language: Option<&str>, dry_run: bool) -> Result<()> {
    let tagger = ctx.tagger(file, language)?;
    println!("{} Clearing all tags from {}", "=>".blue().bold(), tagger.path());

    let removal = if dry_run {
        preview(&tagger, |doc| Ok(tagger.engine().clear_all_tags(doc)))?
    } else {
        tagger.clear_all_tags()?
    };

    report(&removal);
    Ok(())
}

fn preview(
    tagger: &FileTagger,
    remove: impl FnOnce(&mut SourceDocument) -> revmark_tags::Result<Removal>,
) -> Result<Removal> {
    let mut doc = tagger.read_document()?;
    let removal = remove(&mut doc)?;
    print_preview(&doc);
    Ok(removal)
}

fn report(removal: &Removal) {
    if removal.is_empty() {
        println!("{} No matching tags found.", "WARN".yellow().bold());
        return;
    }
    println!(
        "{} Removed {} tag(s), deleted {} line(s).",
        "OK".green().bold(),
        removal.tags_removed,
        removal.lines_removed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TAGGED: &str = "/*-?|bug-1|~*/\n/* c */\nint a;/*-|bug-1|?*/\nint b;/*-?|note|?*/\n";

    fn setup() -> (TempDir, Context) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.c"), TAGGED).unwrap();
        let ctx = Context::new(temp.path(), None);
        (temp, ctx)
    }

    fn read(temp: &TempDir) -> String {
        fs::read_to_string(temp.path().join("a.c")).unwrap()
    }

    #[test]
    fn test_remove_literal_identifier() {
        let (temp, ctx) = setup();
        run_remove(&ctx, Path::new("a.c"), "bug-1", false, None, false).unwrap();
        assert_eq!(read(&temp), "/* c */\nint a;\nint b;/*-?|note|?*/\n");
    }

    #[test]
    fn test_remove_by_regex() {
        let (temp, ctx) = setup();
        run_remove(&ctx, Path::new("a.c"), "bug-[0-9]+|note", true, None, false).unwrap();
        assert_eq!(read(&temp), "/* c */\nint a;\nint b;\n");
    }

    #[test]
    fn test_clear_dry_run_keeps_file() {
        let (temp, ctx) = setup();
        run_clear(&ctx, Path::new("a.c"), None, true).unwrap();
        assert_eq!(read(&temp), TAGGED);
    }

    #[test]
    fn test_clear_removes_everything() {
        let (temp, ctx) = setup();
        run_clear(&ctx, Path::new("a.c"), None, false).unwrap();
        assert_eq!(read(&temp), "/* c */\nint a;\nint b;\n");
    }
}
