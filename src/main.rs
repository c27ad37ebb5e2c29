mod cli;
mod commands;
mod settings;

use anyhow::Result;
use cli::parse_cli;

fn main() -> Result<()> {
	let cli = parse_cli();
	blade_conf::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_settings {
		resolved.print_summary();
	}

	commands::run(cli.subcommand_or_default(), &resolved)
}
