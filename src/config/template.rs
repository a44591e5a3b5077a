use crate::mapping::builtin::{DEFAULT_EXTENSION, DEFAULT_ROOT};
use crate::mapping::builtin_table;
use std::fmt::Write;

/// Generate the `.repackage.toml` written by `--init`.
///
/// The template spells out the built-in defaults and mapping table so they
/// can be edited in place.
pub fn generate_init_template() -> String {
	let mut out = String::new();

	out.push_str("# repackage configuration\n");
	out.push_str("#\n");
	out.push_str("# Mappings are applied in order. Each entry rewrites\n");
	out.push_str("# `package <from>` and `import <from>` to use `<to>` instead.\n");
	out.push_str("# Later entries see the output of earlier ones.\n\n");

	out.push_str("# Source root, relative to this file.\n");
	let _ = writeln!(out, "root = \"{DEFAULT_ROOT}\"\n");
	out.push_str("# File extension to rewrite.\n");
	let _ = writeln!(out, "extension = \"{DEFAULT_EXTENSION}\"\n");
	out.push_str("# \"literal\" replaces text anywhere; \"qualified\" only touches\n");
	out.push_str("# package/import statements and whole names.\n");
	out.push_str("mode = \"literal\"\n");

	for mapping in &builtin_table() {
		let _ = write!(
			out,
			"\n[[mappings]]\nfrom = \"{}\"\nto = \"{}\"\n",
			mapping.from, mapping.to
		);
	}

	out
}
