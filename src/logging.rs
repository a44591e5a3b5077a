//! Diagnostic logging setup.
//!
//! Status lines and the run summary are printed directly by the binary.
//! `tracing` carries the extra detail, enabled with `-v` or `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a default filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "error",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time()
		.compact()
		.try_init();
}
