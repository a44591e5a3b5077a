//! Source tree rewriting for repackage.
//!
//! This module handles:
//! - Compiling a mapping table into ordered substitutions
//! - Walking the source tree for candidate files
//! - In-place rewriting with per-file error containment
//! - Run summaries

pub mod report;
pub mod substitution;
pub mod tree;

pub use report::{FileFailure, FileOutcome, RunSummary};
pub use substitution::{MatchMode, Rewriter};
pub use tree::{RunOptions, candidate_files, rewrite_file, rewrite_tree};
