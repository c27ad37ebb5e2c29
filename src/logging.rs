//! Logger setup for the `blade-conf` binary.
//!
//! The library only talks to the `log` facade; this installs `env_logger`
//! behind it. `RUST_LOG` takes precedence over the verbosity flag.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Map the number of `-v` flags to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install the global logger. Calling it twice is harmless.
pub fn initialize(verbosity: u8) {
	let mut builder = Builder::from_env(Env::default().default_filter_or(level_for(verbosity).as_str()));
	builder.format_timestamp(None).format_target(false);
	let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_maps_to_increasing_levels() {
		assert_eq!(level_for(0), LevelFilter::Warn);
		assert_eq!(level_for(1), LevelFilter::Info);
		assert_eq!(level_for(2), LevelFilter::Debug);
		assert_eq!(level_for(9), LevelFilter::Trace);
	}

	#[test]
	fn initialize_twice_does_not_panic() {
		initialize(0);
		initialize(2);
	}
}
