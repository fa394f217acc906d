//! File I/O and configuration storage for revmark
//!
//! Every tagging operation is a whole-file transaction: the file is read
//! completely, rewritten in memory and written back in one piece. This crate
//! owns both ends of that transaction plus the config file loading that
//! supplies tag grammars.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
