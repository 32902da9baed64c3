//! Utility functions shared by the CLI.
//!
//! ## Modules
//!
//! - [`app_data`] - User configuration (`config.json` in the config directory)
//! - [`input`] - Reading texts from files
//! - [`progress`] - Progress bars (no-op without the `progress` feature)
//!
//! ```no_run
//! use sfx::utils::{load_text, AppConfig};
//! use std::path::Path;
//!
//! let config = AppConfig::load().unwrap();
//! let text = load_text(Path::new("genome.txt"), true).unwrap();
//! let tree = sfx::SuffixTree::build_with_config(&text, config.tree).unwrap();
//! ```

pub mod app_data;
pub mod input;
pub mod progress;

pub use app_data::*;
pub use input::*;
