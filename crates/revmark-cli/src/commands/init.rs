//! Init command implementation
//!
//! Writes the built-in settings to `revmark.toml` so they can be edited.

use colored::Colorize;
use revmark_fs::NormalizedPath;
use revmark_tags::TagSettings;

use crate::context::{CONFIG_FILE, Context};
use crate::error::{CliError, Result};

/// Run the init command
pub fn run_init(ctx: &Context, force: bool) -> Result<()> {
    let path = ctx.cwd().join(CONFIG_FILE);

    if path.exists() && !force {
        return Err(CliError::user(format!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    println!(
        "{} Writing default settings to {}",
        "=>".blue().bold(),
        path.display().to_string().cyan()
    );
    TagSettings::default().save(&NormalizedPath::new(&path))?;

    println!("{} Settings initialized!", "OK".green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let temp = TempDir::new().unwrap();
        let ctx = Context::new(temp.path(), None);

        run_init(&ctx, false).unwrap();

        let written = temp.path().join(CONFIG_FILE);
        let loaded = TagSettings::load(&NormalizedPath::new(&written)).unwrap();
        assert_eq!(loaded, TagSettings::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "# mine\n").unwrap();
        let ctx = Context::new(temp.path(), None);

        assert!(run_init(&ctx, false).is_err());
        assert_eq!(
            fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap(),
            "# mine\n"
        );

        run_init(&ctx, true).unwrap();
        assert!(ctx.settings().is_ok());
    }
}
