use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use repackage::RepackageError;
use repackage::config::{
	Overrides, Settings, SettingsSource, generate_init_template, init_config_path, load_settings,
};
use repackage::rewrite::{FileOutcome, MatchMode, Rewriter, RunOptions, RunSummary, rewrite_tree};

#[derive(Parser)]
#[command(name = "repackage")]
#[command(
	author,
	version,
	about = "Rewrite Java package declarations and imports after a package reorganization"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Source root to rewrite (defaults to the config value or nutriflow-service/src)
	#[arg(long, value_name = "DIR")]
	root: Option<PathBuf>,

	/// Config file to use instead of discovering .repackage.toml
	#[arg(long, value_name = "FILE", global = true)]
	config: Option<PathBuf>,

	/// How mapped names are matched
	#[arg(long, value_enum)]
	mode: Option<MatchMode>,

	/// File extension to rewrite
	#[arg(long, value_name = "EXT")]
	extension: Option<String>,

	/// Report what would change without writing any file
	#[arg(long)]
	dry_run: bool,

	/// Create a template .repackage.toml in the current directory
	#[arg(long, conflicts_with_all = ["root", "mode", "extension", "dry_run"])]
	init: bool,

	/// Overwrite existing .repackage.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Increase log detail (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Mapping table commands
	Mappings {
		#[command(subcommand)]
		action: MappingsAction,
	},
}

#[derive(Subcommand)]
enum MappingsAction {
	/// Display the effective mapping table and settings
	Show,
	/// Check the configuration and mapping table without rewriting anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	repackage::logging::init(cli.verbose);

	if cli.init {
		return handle_init(cli.force);
	}

	let overrides = Overrides {
		root: cli.root,
		extension: cli.extension,
		mode: cli.mode,
	};

	if let Some(command) = cli.command {
		return match command {
			Commands::Mappings { action } => match action {
				MappingsAction::Show => handle_mappings_show(cli.config.as_deref(), &overrides),
				MappingsAction::Validate => {
					handle_mappings_validate(cli.config.as_deref(), &overrides)
				}
			},
		};
	}

	handle_rewrite(cli.config.as_deref(), &overrides, cli.dry_run)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let config_path = init_config_path(&cwd);

	if config_path.exists() && !force {
		anyhow::bail!(".repackage.toml already exists. Use --force to overwrite.");
	}

	let template = generate_init_template();
	std::fs::write(&config_path, template)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created .repackage.toml");
	Ok(ExitCode::SUCCESS)
}

fn load(config: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	load_settings(config, overrides, &cwd).context("Failed to load configuration")
}

fn describe_source(source: &SettingsSource) -> String {
	match source {
		SettingsSource::Builtin => "built-in".to_string(),
		SettingsSource::File(path) => path.display().to_string(),
	}
}

fn handle_mappings_show(config: Option<&Path>, overrides: &Overrides) -> Result<ExitCode> {
	let settings = load(config, overrides)?;

	println!("# Source: {}", describe_source(&settings.source));
	println!("# root: {}", settings.root.display());
	println!("# extension: {}", settings.extension);
	println!("# mode: {}", settings.mode);
	println!("# mappings: {}", settings.table.len());
	println!();

	for (i, mapping) in settings.table.iter().enumerate() {
		println!("  {:>3}. {} -> {}", i + 1, mapping.from, mapping.to);
	}

	Ok(ExitCode::SUCCESS)
}

/// Load settings and compile the table, so every configuration problem
/// surfaces before any file is touched.
fn load_checked(config: Option<&Path>, overrides: &Overrides) -> Result<(Settings, Rewriter)> {
	let settings = load(config, overrides)?;
	let rewriter =
		Rewriter::new(&settings.table, settings.mode).context("Failed to compile mapping table")?;
	Ok((settings, rewriter))
}

fn handle_mappings_validate(config: Option<&Path>, overrides: &Overrides) -> Result<ExitCode> {
	match load_checked(config, overrides) {
		Ok((settings, _)) => {
			println!(
				"Mapping table is valid: {} mappings ({})",
				settings.table.len(),
				describe_source(&settings.source)
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {e:#}");
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_rewrite(config: Option<&Path>, overrides: &Overrides, dry_run: bool) -> Result<ExitCode> {
	let (settings, rewriter) = load_checked(config, overrides)?;

	let options = RunOptions {
		root: settings.root,
		extension: settings.extension,
		dry_run,
	};

	if dry_run {
		println!("🔄 Checking package declarations and imports (dry run)...");
	} else {
		println!("🔄 Updating package declarations and imports...");
	}

	let summary = rewrite_tree(&rewriter, &options, |outcome| report_outcome(outcome, dry_run))
		.with_context(|| format!("Cannot rewrite {}", options.root.display()))?;

	print_summary(&summary);

	// Per-file failures are reported above but do not change the exit status.
	Ok(ExitCode::SUCCESS)
}

fn report_outcome(outcome: &FileOutcome, dry_run: bool) {
	match outcome {
		FileOutcome::Unchanged { .. } => {}
		FileOutcome::Updated { path } => {
			let name = path
				.file_name()
				.map(|n| n.to_string_lossy().to_string())
				.unwrap_or_else(|| path.display().to_string());
			if dry_run {
				println!("✓ Would update: {}", name);
			} else {
				println!("✓ Updated: {}", name);
			}
		}
		FileOutcome::Failed { path, error } | FileOutcome::Unreachable { path, error } => {
			eprintln!("Error processing {}: {}", path.display(), cause(error));
		}
	}
}

/// The underlying cause of a per-file error; the path is already printed.
fn cause(error: &RepackageError) -> String {
	match std::error::Error::source(error) {
		Some(source) => source.to_string(),
		None => error.to_string(),
	}
}

fn print_summary(summary: &RunSummary) {
	println!();
	if summary.dry_run {
		println!("✅ Dry run complete!");
	} else {
		println!("✅ Complete!");
	}
	println!("   Total files scanned: {}", summary.scanned);
	if summary.dry_run {
		println!("   Files that would be updated: {}", summary.updated_count());
	} else {
		println!("   Files updated: {}", summary.updated_count());
	}
	if summary.failed_count() > 0 {
		println!("   Files failed: {}", summary.failed_count());
	}
	if summary.walk_error_count() > 0 {
		println!("   Directories skipped: {}", summary.walk_error_count());
	}
}
