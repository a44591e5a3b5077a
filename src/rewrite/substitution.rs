use crate::error::{RepackageError, Result};
use crate::mapping::MappingTable;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// How mapped names are located in a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
	/// Plain text replace of `package <old>` and `import <old>` anywhere.
	#[default]
	Literal,

	/// Only rewrite a `package`/`import` statement at the start of a line,
	/// and only when the old name ends at an identifier boundary.
	Qualified,
}

impl MatchMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			MatchMode::Literal => "literal",
			MatchMode::Qualified => "qualified",
		}
	}
}

impl fmt::Display for MatchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One compiled mapping entry.
#[derive(Debug)]
enum Substitution {
	Literal {
		package_from: String,
		package_to: String,
		import_from: String,
		import_to: String,
	},
	Qualified {
		pattern: Regex,
		to: String,
	},
}

impl Substitution {
	fn literal(from: &str, to: &str) -> Self {
		Substitution::Literal {
			package_from: format!("package {from}"),
			package_to: format!("package {to}"),
			import_from: format!("import {from}"),
			import_to: format!("import {to}"),
		}
	}

	fn qualified(from: &str, to: &str) -> Result<Self> {
		let source = format!(
			r"(?m)^([ \t]*)(package|import)([ \t]+static)?([ \t]+){}\b",
			regex::escape(from)
		);
		let pattern = Regex::new(&source).map_err(|source| RepackageError::InvalidPattern {
			name: from.to_string(),
			source,
		})?;

		Ok(Substitution::Qualified {
			pattern,
			to: to.to_string(),
		})
	}

	fn apply(&self, content: String) -> String {
		match self {
			Substitution::Literal {
				package_from,
				package_to,
				import_from,
				import_to,
			} => {
				let content = replace_all(content, package_from, package_to);
				replace_all(content, import_from, import_to)
			}
			Substitution::Qualified { pattern, to } => {
				let rewritten = pattern.replace_all(&content, |caps: &Captures| {
					format!(
						"{}{}{}{}{}",
						&caps[1],
						&caps[2],
						caps.get(3).map_or("", |m| m.as_str()),
						&caps[4],
						to
					)
				});
				match rewritten {
					Cow::Borrowed(_) => content,
					Cow::Owned(rewritten) => rewritten,
				}
			}
		}
	}
}

/// Replace every non-overlapping occurrence, left to right.
fn replace_all(content: String, from: &str, to: &str) -> String {
	if content.contains(from) {
		content.replace(from, to)
	} else {
		content
	}
}

/// The ordered set of substitutions built from a mapping table.
#[derive(Debug)]
pub struct Rewriter {
	substitutions: Vec<Substitution>,
	mode: MatchMode,
}

impl Rewriter {
	/// Compile every table entry for the given match mode.
	pub fn new(table: &MappingTable, mode: MatchMode) -> Result<Self> {
		let substitutions = table
			.iter()
			.map(|m| match mode {
				MatchMode::Literal => Ok(Substitution::literal(&m.from, &m.to)),
				MatchMode::Qualified => Substitution::qualified(&m.from, &m.to),
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Rewriter {
			substitutions,
			mode,
		})
	}

	pub fn mode(&self) -> MatchMode {
		self.mode
	}

	/// Apply every substitution in table order.
	///
	/// Each entry sees the output of the entries before it.
	pub fn rewrite(&self, content: &str) -> String {
		self.substitutions
			.iter()
			.fold(content.to_string(), |acc, sub| sub.apply(acc))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mapping::{Mapping, builtin_table};

	fn table(pairs: &[(&str, &str)]) -> MappingTable {
		MappingTable::new(pairs.iter().map(|(f, t)| Mapping::new(*f, *t)).collect()).unwrap()
	}

	fn builtin(mode: MatchMode) -> Rewriter {
		Rewriter::new(&builtin_table(), mode).unwrap()
	}

	#[test]
	fn test_package_declaration_rewritten() {
		let rewriter = builtin(MatchMode::Literal);
		let input = "package com.example.nutriflow.model.User;\n\npublic class User {}\n";
		assert_eq!(
			rewriter.rewrite(input),
			"package com.example.nutriflow.user.model.User;\n\npublic class User {}\n"
		);
	}

	#[test]
	fn test_recipe_and_offender_example() {
		let rewriter = builtin(MatchMode::Literal);
		let input = "package com.example.nutriflow.model.Recipe;\nimport com.example.nutriflow.model.dto.OffenderDto;\n";
		assert_eq!(
			rewriter.rewrite(input),
			"package com.example.nutriflow.recipe.model.Recipe;\nimport com.example.nutriflow.substitution.dto.OffenderDto;\n"
		);
	}

	#[test]
	fn test_unrelated_content_untouched() {
		let rewriter = builtin(MatchMode::Literal);
		let input = "package org.other;\n\nimport java.util.List;  \n\t\n";
		assert_eq!(rewriter.rewrite(input), input);
	}

	#[test]
	fn test_all_occurrences_replaced() {
		let rewriter = Rewriter::new(&table(&[("a.old", "a.new")]), MatchMode::Literal).unwrap();
		let input = "import a.old.X;\nimport a.old.Y;\nimport a.old.Z;\n";
		assert_eq!(
			rewriter.rewrite(input),
			"import a.new.X;\nimport a.new.Y;\nimport a.new.Z;\n"
		);
	}

	#[test]
	fn test_earlier_entry_feeds_later_entry() {
		let rewriter = builtin(MatchMode::Literal);
		let input = "import com.example.nutriflow.model.mealplan.MealPlanRequestDto;\n";
		assert_eq!(
			rewriter.rewrite(input),
			"import com.example.nutriflow.mealplan.dto.MealPlanRequestDto;\n"
		);
	}

	#[test]
	fn test_reversed_order_changes_result() {
		let forward = table(&[
			(
				"com.example.nutriflow.model.mealplan",
				"com.example.nutriflow.mealplan.model",
			),
			(
				"com.example.nutriflow.mealplan.model.MealPlanRequestDto",
				"com.example.nutriflow.mealplan.dto.MealPlanRequestDto",
			),
		]);
		let reversed = table(&[
			(
				"com.example.nutriflow.mealplan.model.MealPlanRequestDto",
				"com.example.nutriflow.mealplan.dto.MealPlanRequestDto",
			),
			(
				"com.example.nutriflow.model.mealplan",
				"com.example.nutriflow.mealplan.model",
			),
		]);
		let input = "import com.example.nutriflow.model.mealplan.MealPlanRequestDto;";

		let forward = Rewriter::new(&forward, MatchMode::Literal).unwrap();
		let reversed = Rewriter::new(&reversed, MatchMode::Literal).unwrap();

		assert_eq!(
			forward.rewrite(input),
			"import com.example.nutriflow.mealplan.dto.MealPlanRequestDto;"
		);
		assert_eq!(
			reversed.rewrite(input),
			"import com.example.nutriflow.mealplan.model.MealPlanRequestDto;"
		);
	}

	#[test]
	fn test_literal_rewrites_longer_identifier() {
		let rewriter = Rewriter::new(
			&table(&[("com.app.model.User", "com.app.user.User")]),
			MatchMode::Literal,
		)
		.unwrap();
		assert_eq!(
			rewriter.rewrite("import com.app.model.UserTarget;"),
			"import com.app.user.UserTarget;"
		);
	}

	#[test]
	fn test_literal_rewrites_inside_comments() {
		let rewriter = Rewriter::new(&table(&[("a.old", "a.new")]), MatchMode::Literal).unwrap();
		assert_eq!(
			rewriter.rewrite("// remember to import a.old.Thing later"),
			"// remember to import a.new.Thing later"
		);
	}

	#[test]
	fn test_literal_requires_single_space() {
		let rewriter = Rewriter::new(&table(&[("a.old", "a.new")]), MatchMode::Literal).unwrap();
		let input = "import  a.old.X;\nimport static a.old.Y.f;\n";
		assert_eq!(rewriter.rewrite(input), input);
	}

	#[test]
	fn test_builtin_literal_is_idempotent() {
		let rewriter = builtin(MatchMode::Literal);
		let input = "\
package com.example.nutriflow.service.repository;

import com.example.nutriflow.model.User;
import com.example.nutriflow.model.UserTarget;
import com.example.nutriflow.model.mealplan.WeeklyMealPlan;
import com.example.nutriflow.model.enums.SexType;
import com.example.nutriflow.service.UserService;
";
		let once = rewriter.rewrite(input);
		assert_ne!(once, input);
		assert_eq!(rewriter.rewrite(&once), once);
		assert!(once.starts_with("package com.example.nutriflow;\n"));
		assert!(once.contains("import com.example.nutriflow.mealplan.model.WeeklyMealPlan;"));
		assert!(once.contains("import com.example.nutriflow.shared.enums.SexType;"));
	}

	#[test]
	fn test_qualified_respects_identifier_boundary() {
		let rewriter = Rewriter::new(
			&table(&[("com.app.model.User", "com.app.user.User")]),
			MatchMode::Qualified,
		)
		.unwrap();
		let input = "import com.app.model.User;\nimport com.app.model.UserTarget;\n";
		assert_eq!(
			rewriter.rewrite(input),
			"import com.app.user.User;\nimport com.app.model.UserTarget;\n"
		);
	}

	#[test]
	fn test_qualified_matches_package_prefix() {
		let rewriter = Rewriter::new(
			&table(&[("com.app.model.mealplan", "com.app.mealplan.model")]),
			MatchMode::Qualified,
		)
		.unwrap();
		assert_eq!(
			rewriter.rewrite("import com.app.model.mealplan.Meal;\nimport com.app.model.mealplan.*;\n"),
			"import com.app.mealplan.model.Meal;\nimport com.app.mealplan.model.*;\n"
		);
	}

	#[test]
	fn test_qualified_preserves_whitespace_and_static() {
		let rewriter = Rewriter::new(&table(&[("a.old", "a.new")]), MatchMode::Qualified).unwrap();
		let input = "  import\ta.old.X;\nimport static  a.old.Y.f;\npackage a.old;\n";
		assert_eq!(
			rewriter.rewrite(input),
			"  import\ta.new.X;\nimport static  a.new.Y.f;\npackage a.new;\n"
		);
	}

	#[test]
	fn test_qualified_ignores_mid_line_mentions() {
		let rewriter = Rewriter::new(&table(&[("a.old", "a.new")]), MatchMode::Qualified).unwrap();
		let input = "// import a.old.X\nString s = \"import a.old.Y\";\n";
		assert_eq!(rewriter.rewrite(input), input);
	}

	#[test]
	fn test_qualified_replacement_is_not_expanded() {
		let rewriter =
			Rewriter::new(&table(&[("a.old", "a.$1.new")]), MatchMode::Qualified).unwrap();
		assert_eq!(rewriter.rewrite("import a.old.X;"), "import a.$1.new.X;");
	}

	#[test]
	fn test_builtin_qualified_is_idempotent() {
		let rewriter = builtin(MatchMode::Qualified);
		let input = "package com.example.nutriflow.model.mealplan;\n\nimport com.example.nutriflow.model.mealplan.MealPlanResponseDto;\n";
		let once = rewriter.rewrite(input);
		assert_eq!(
			once,
			"package com.example.nutriflow.mealplan.model;\n\nimport com.example.nutriflow.mealplan.dto.MealPlanResponseDto;\n"
		);
		assert_eq!(rewriter.rewrite(&once), once);
	}

	#[test]
	fn test_qualified_without_match_returns_input() {
		let rewriter = Rewriter::new(&table(&[("a.old", "a.new")]), MatchMode::Qualified).unwrap();
		let input = "package b.other;\r\nimport a.older.X;\n";
		assert_eq!(rewriter.rewrite(input), input);
	}

	#[test]
	fn test_match_mode_display() {
		assert_eq!(MatchMode::Literal.to_string(), "literal");
		assert_eq!(MatchMode::Qualified.to_string(), "qualified");
		assert_eq!(MatchMode::default(), MatchMode::Literal);
	}
}
