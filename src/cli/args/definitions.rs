use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `blade-conf` binary.
#[derive(Parser, Debug)]
#[command(
	name = "blade-conf",
	version,
	long_version = long_version(),
	about = "Inspect and validate Blade build configuration files",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "BLADE_CONF_FILE",
		action = ArgAction::Append,
		global = true,
		help = "Extra configuration file loaded after the workspace layers (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'r',
		long,
		value_name = "PATH",
		global = true,
		help = "Directory to search upwards for BLADE_ROOT (default: current directory)"
	)]
	pub(crate) root: Option<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-user-config",
		global = true,
		help = "Skip the per-user ~/.bladerc layer (default: disabled)"
	)]
	pub(crate) no_user_config: bool,
	#[arg(
		long,
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true",
		global = true,
		help = "Treat unknown config items as errors (default: warn and ignore)"
	)]
	pub(crate) strict: Option<bool>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		global = true,
		help = "Choose how results are printed (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(
		long = "no-settings",
		global = true,
		help = "Ignore settings.toml and .blade-conf.toml (default: disabled)"
	)]
	pub(crate) no_settings: bool,
	#[arg(
		long = "print-settings",
		global = true,
		help = "Print the effective tool settings before running (default: disabled)"
	)]
	pub(crate) print_settings: bool,
	#[arg(
		short = 'v',
		long,
		action = ArgAction::Count,
		global = true,
		help = "Increase log verbosity, repeat for more detail (default: warnings only)"
	)]
	pub(crate) verbose: u8,
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
}

impl CliArgs {
	/// The requested subcommand, `show` when none was given.
	pub(crate) fn subcommand_or_default(&self) -> Command {
		self.command.clone().unwrap_or_default()
	}
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// Print the effective configuration after all layers are applied.
	Show {
		/// Limit output to one section, by id (`cc`) or call name (`cc_config`).
		#[arg(short, long, value_name = "SECTION")]
		section: Option<String>,
	},
	/// Print the effective value of a single config item.
	Get {
		#[arg(value_name = "SECTION")]
		section: String,
		#[arg(value_name = "OPTION")]
		option: String,
	},
	/// Load every layer and report problems without printing the result.
	Check,
	/// List the known sections and their config items with defaults.
	Sections,
}

impl Default for Command {
	fn default() -> Self {
		Command::Show { section: None }
	}
}
