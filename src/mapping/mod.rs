//! Package mapping tables for repackage.
//!
//! This module handles:
//! - The ordered old-name to new-name mapping table
//! - Validation of qualified names
//! - The built-in nutriflow reorganization table

pub mod builtin;
pub mod table;

pub use builtin::{BUILTIN_MAPPINGS, builtin_table};
pub use table::{Mapping, MappingTable, is_qualified_name};
