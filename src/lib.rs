//! Repackage - rewrite Java package declarations and imports after a
//! package reorganization.
//!
//! This library provides the core functionality for repackage, including:
//! - Ordered, validated old-name to new-name mapping tables
//! - Configuration file parsing and discovery
//! - In-place rewriting of a source tree with per-file error containment
//!
//! # Example
//!
//! ```no_run
//! use repackage::config::{Overrides, load_settings};
//! use repackage::rewrite::{Rewriter, RunOptions, rewrite_tree};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let settings = load_settings(None, &Overrides::default(), &cwd).unwrap();
//! let rewriter = Rewriter::new(&settings.table, settings.mode).unwrap();
//!
//! let options = RunOptions {
//!     root: settings.root,
//!     extension: settings.extension,
//!     dry_run: true,
//! };
//!
//! let summary = rewrite_tree(&rewriter, &options, |outcome| {
//!     println!("{}", outcome.path().display());
//! })
//! .unwrap();
//! println!("{} of {} files would change", summary.updated_count(), summary.scanned);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod rewrite;

pub use error::{RepackageError, Result};
