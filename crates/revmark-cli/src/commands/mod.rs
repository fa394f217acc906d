//! Command implementations for revmark-cli

pub mod add;
pub mod init;
pub mod languages;
pub mod list;
pub mod remove;

pub use add::run_add;
pub use init::run_init;
pub use languages::run_languages;
pub use list::run_list;
pub use remove::{run_clear, run_remove};

use colored::Colorize;
use revmark_tags::SourceDocument;

/// Print the document a dry run would have written.
fn print_preview(doc: &SourceDocument) {
    println!("{} Dry run, file not written:", "=>".blue().bold());
    let text = doc.render();
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
}
