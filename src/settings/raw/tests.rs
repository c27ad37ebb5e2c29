use std::fs;
use std::path::PathBuf;

use blade_conf::Strictness;
use clap::Parser;
use config::{Config, File, FileFormat};
use tempfile::tempdir;

use super::*;

fn raw(toml: &str) -> RawSettings {
	Config::builder()
		.add_source(File::from_str(toml, FileFormat::Toml))
		.build()
		.expect("builds")
		.try_deserialize()
		.expect("deserializes")
}

fn cli(args: &[&str]) -> CliArgs {
	CliArgs::parse_from(args.iter().copied())
}

#[test]
fn cli_flags_override_settings_values() {
	let mut settings = raw("[loader]\nstrict = false\nuser_config = true\n[output]\nformat = 'plain'\n");
	let args = cli(&["blade-conf", "--strict", "-n", "-o", "json"]);
	settings.apply_cli_overrides(&args);

	assert_eq!(settings.loader.strict, Some(true));
	assert_eq!(settings.loader.user_config, Some(false));
	assert_eq!(settings.output.format.as_deref(), Some("json"));
}

#[test]
fn cli_files_load_after_settings_files() {
	let args = cli(&["blade-conf", "-c", "mine.conf"]);
	let mut settings = raw("[loader]\nextra_files = ['team.conf']\n");
	settings.apply_cli_overrides(&args);
	let resolved = settings.resolve(&args).expect("resolves");

	assert_eq!(
		resolved.extra_files,
		vec![PathBuf::from("team.conf"), PathBuf::from("mine.conf")]
	);
	assert_eq!(
		resolved.sources.extra_files,
		vec![
			SettingSource::ConfigKey("loader.extra_files"),
			SettingSource::CliFlag("--config"),
		]
	);
}

#[test]
fn directory_given_to_config_is_blamed_on_the_flag() {
	let dir = tempdir().unwrap();
	let path = dir.path().display().to_string();
	let args = cli(&["blade-conf", "-c", &path]);
	let mut settings = raw("[loader]\nextra_files = ['team.conf']\n");
	settings.apply_cli_overrides(&args);

	let message = settings.resolve(&args).unwrap_err().to_string();
	assert!(message.contains("loader.extra_files"));
	assert!(message.contains("CLI flag `--config`"));
}

#[test]
fn strict_origin_follows_the_flag() {
	let args = cli(&["blade-conf", "--strict"]);
	let mut settings = raw("[loader]\nuser_config = false\n");
	settings.apply_cli_overrides(&args);
	let resolved = settings.resolve(&args).expect("resolves");

	assert_eq!(resolved.sources.strict, Some(SettingSource::CliFlag("--strict")));
	assert_eq!(
		resolved.sources.user_config,
		Some(SettingSource::ConfigKey("loader.user_config"))
	);
	assert_eq!(resolved.sources.format, None);
}

#[test]
fn invalid_format_names_its_settings_key() {
	let settings = raw("[output]\nformat = 'yaml'\n");
	let err = settings.resolve(&cli(&["blade-conf"])).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("output.format"));
	assert!(message.contains("settings key"));
	assert!(message.contains("value: yaml"));
}

#[test]
fn resolve_discovers_workspace_layers() {
	let dir = tempdir().unwrap();
	let nested = dir.path().join("common");
	fs::create_dir_all(&nested).unwrap();
	fs::write(dir.path().join("BLADE_ROOT"), "").unwrap();

	let root = nested.display().to_string();
	let args = cli(&["blade-conf", "--root", &root, "-n", "--strict", "-c", "extra.conf"]);
	let mut settings = RawSettings::default();
	settings.apply_cli_overrides(&args);
	let resolved = settings.resolve(&args).expect("resolves");

	assert_eq!(resolved.workspace_root.as_deref(), Some(dir.path()));
	assert_eq!(resolved.strictness, Strictness::Strict);
	let plan: Vec<_> = resolved
		.layers
		.iter()
		.map(|layer| (layer.path.clone(), layer.required))
		.collect();
	assert_eq!(
		plan,
		vec![
			(dir.path().join("BLADE_ROOT"), true),
			(dir.path().join("BLADE_ROOT.local"), false),
			(PathBuf::from("extra.conf"), true),
		]
	);
}

#[test]
fn missing_root_directory_is_rejected() {
	let dir = tempdir().unwrap();
	let missing = dir.path().join("gone").display().to_string();
	let args = cli(&["blade-conf", "--root", &missing]);
	let mut settings = RawSettings::default();
	settings.apply_cli_overrides(&args);

	let message = settings.resolve(&args).unwrap_err().to_string();
	assert!(message.contains("CLI flag `--root`"));
}
