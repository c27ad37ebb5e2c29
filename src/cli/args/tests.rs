use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches};

use super::{CliArgs, Command, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	let mut matches = CliArgs::command()
		.try_get_matches_from(args.iter().copied())
		.expect("parses");
	CliArgs::from_arg_matches_mut(&mut matches).expect("converts")
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_to_show_everything() {
	let parsed = parse(&["blade-conf"]);
	assert_eq!(parsed.subcommand_or_default(), Command::Show { section: None });
	assert_eq!(parsed.output, None);
	assert_eq!(parsed.strict, None);
	assert_eq!(parsed.verbose, 0);
}

#[test]
fn strict_flag_accepts_optional_value() {
	assert_eq!(parse(&["blade-conf", "--strict"]).strict, Some(true));
	assert_eq!(parse(&["blade-conf", "--strict=false"]).strict, Some(false));
	assert_eq!(parse(&["blade-conf", "--strict", "check"]).subcommand_or_default(), Command::Check);
}

#[test]
fn global_flags_follow_subcommands() {
	let parsed = parse(&[
		"blade-conf",
		"get",
		"cc",
		"optimize",
		"-o",
		"json",
		"-c",
		"extra.conf",
		"-c",
		"more.conf",
		"-vv",
	]);
	assert_eq!(
		parsed.subcommand_or_default(),
		Command::Get {
			section: "cc".into(),
			option: "optimize".into(),
		}
	);
	assert_eq!(parsed.output, Some(OutputFormat::Json));
	assert_eq!(
		parsed.config,
		vec![PathBuf::from("extra.conf"), PathBuf::from("more.conf")]
	);
	assert_eq!(parsed.verbose, 2);
}

#[test]
fn show_takes_a_section_filter() {
	let parsed = parse(&["blade-conf", "show", "--section", "link_config"]);
	assert_eq!(
		parsed.subcommand_or_default(),
		Command::Show {
			section: Some("link_config".into()),
		}
	);
}

#[test]
fn get_requires_both_arguments() {
	assert!(
		CliArgs::command()
			.try_get_matches_from(["blade-conf", "get", "cc"])
			.is_err()
	);
}
