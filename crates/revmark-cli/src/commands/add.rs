//! Add command implementation

use std::path::Path;

use colored::Colorize;
use revmark_tags::TagPlacement;

use super::print_preview;
use crate::context::Context;
use crate::error::Result;

/// Run the add command
///
/// Tags lines `start..=end` of `file`, or only `start` when no end is given.
pub fn run_add(
    ctx: &Context,
    file: &Path,
    identifier: &str,
    start: usize,
    end: Option<usize>,
    language: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let tagger = ctx.tagger(file, language)?;
    let end = end.unwrap_or(start);

    println!(
        "{} Tagging {} lines {}-{} as {}",
        "=>".blue().bold(),
        tagger.path(),
        start,
        end,
        identifier.cyan()
    );

    let placement = if dry_run {
        let mut doc = tagger.read_document()?;
        let placement = tagger.engine().add_tags(&mut doc, identifier, start, end)?;
        print_preview(&doc);
        placement
    } else {
        tagger.add_tags(identifier, start, end)?
    };

    report(&placement);
    Ok(())
}

fn report(placement: &TagPlacement) {
    if placement.is_significant() {
        println!(
            "{} Range {}-{} collides with a native comment, tagged {}-{} instead.",
            "WARN".yellow().bold(),
            placement.requested_start,
            placement.requested_end,
            placement.start_line,
            placement.end_line
        );
    }
    if placement.blank_line_inserted {
        println!("   Inserted a blank line to hold the start tag.");
    }
    println!(
        "{} Tagged lines {}-{}.",
        "OK".green().bold(),
        placement.start_line,
        placement.end_line
    );
}
