//! Languages command implementation

use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Run the languages command
pub fn run_languages(ctx: &Context, json: bool) -> Result<()> {
    let settings = ctx.settings()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    println!("{}", "Configured Languages".bold());
    println!();

    for (name, language) in &settings.languages {
        println!(
            "  {:<12} {} {}  ({})",
            name.green(),
            language.comment_open,
            language.comment_close,
            language.extensions.join(", ").dimmed()
        );
    }

    let markers = &settings.markers;
    println!();
    println!(
        "{} start/end '{}', separator '{}', cleanup '{}'",
        "Markers:".dimmed(),
        markers.start_end,
        markers.key_separator,
        markers.cleanup
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_languages_runs() {
        let temp = TempDir::new().unwrap();
        let ctx = Context::new(temp.path(), None);

        assert!(run_languages(&ctx, false).is_ok());
        assert!(run_languages(&ctx, true).is_ok());
    }
}
