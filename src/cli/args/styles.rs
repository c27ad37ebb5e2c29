use std::fmt::Write;

use blade_conf::app_dirs;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

/// Produce the full version banner including the settings directory and the
/// per-user configuration file.
pub(super) fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let user_file = match app_dirs::user_config_file() {
		Some(path) => path.display().to_string(),
		None => "unavailable (no home directory)".to_string(),
	};

	let mut details = env!("CARGO_PKG_VERSION").to_string();
	let _ = writeln!(details);
	let _ = writeln!(details, "settings directory: {config_dir}");
	let _ = writeln!(details, "user configuration: {user_file}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
