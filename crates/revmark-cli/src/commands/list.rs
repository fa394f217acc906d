//! List command implementation

use std::path::Path;

use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Run the list command
///
/// Prints the tagged ranges of `file` and any tag that has no partner.
pub fn run_list(ctx: &Context, file: &Path, language: Option<&str>, json: bool) -> Result<()> {
    let tagger = ctx.tagger(file, language)?;
    let listing = tagger.list_tags()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{} {}", "Tags in".bold(), tagger.path());
    println!();

    if listing.ranges.is_empty() && listing.dangling.is_empty() {
        println!("No tags found.");
        return Ok(());
    }

    for range in &listing.ranges {
        let lines = if range.start_line == range.end_line {
            format!("line {}", range.start_line)
        } else {
            format!("lines {}-{}", range.start_line, range.end_line)
        };
        println!("  {:<20} {}", range.identifier.green(), lines);
    }

    for tag in &listing.dangling {
        println!(
            "{} unpaired {} tag '{}' on line {}",
            "WARN".yellow().bold(),
            tag.role,
            tag.identifier,
            tag.line
        );
    }

    Ok(())
}
