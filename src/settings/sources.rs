use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use blade_conf::app_dirs;
use config::{Config, ConfigError, Environment, File, Map};
use log::debug;

use crate::cli::CliArgs;

/// Prefix of environment variables that override settings keys, e.g.
/// `BLADE_CONF__LOADER__STRICT=true`.
const ENV_PREFIX: &str = "BLADE_CONF";

/// Settings keys holding lists, split on commas when read from the environment.
const LIST_KEYS: [&str; 1] = ["loader.extra_files"];

/// Merge the settings files and `BLADE_CONF__*` variables. Files given with
/// `--config` are Blade configuration, not settings, and are planned later.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let files = if cli.no_settings {
		Vec::new()
	} else {
		default_settings_files()
	};
	merge(files, environment(None))
}

fn merge(files: Vec<PathBuf>, environment: Environment) -> Result<Config> {
	let mut builder = Config::builder();
	for path in files {
		debug!("consulting settings file {}", path.display());
		builder = builder.add_source(File::from(path).required(false));
	}

	builder.add_source(environment).build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("settings builder is frozen"),
		other => anyhow!("failed to read settings: {other}"),
	})
}

/// Environment source; `vars` replaces the process environment when given.
fn environment(vars: Option<Map<String, String>>) -> Environment {
	LIST_KEYS.into_iter().fold(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.source(vars),
		Environment::with_list_parse_key,
	)
}

/// Settings files consulted in order: the user-wide file, then the one in the
/// current directory.
pub(super) fn default_settings_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("settings.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".blade-conf.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	fn vars(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
		Some(
			pairs
				.iter()
				.map(|(key, value)| (key.to_string(), value.to_string()))
				.collect(),
		)
	}

	#[test]
	fn default_files_end_with_current_directory_settings() {
		let files = default_settings_files();
		assert!(files.last().is_some_and(|path| path.ends_with(".blade-conf.toml")));
	}

	#[test]
	fn environment_overrides_files_and_splits_extra_files() {
		let dir = tempdir().unwrap();
		let file = dir.path().join(".blade-conf.toml");
		fs::write(&file, "[loader]\nstrict = false\nroot = 'src'\n").unwrap();

		let config = merge(
			vec![file, dir.path().join("absent.toml")],
			environment(vars(&[
				("BLADE_CONF__LOADER__STRICT", "true"),
				("BLADE_CONF__LOADER__EXTRA_FILES", "team.conf,ci.conf"),
			])),
		)
		.expect("builds");

		assert!(config.get_bool("loader.strict").expect("strict"));
		assert_eq!(config.get_string("loader.root").expect("root"), "src");
		let files: Vec<String> = config.get("loader.extra_files").expect("extra files");
		assert_eq!(files, ["team.conf", "ci.conf"]);
	}

	#[test]
	fn malformed_settings_file_is_reported() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("settings.toml");
		fs::write(&file, "[loader\n").unwrap();

		let err = merge(vec![file], environment(vars(&[]))).unwrap_err();
		assert!(err.to_string().starts_with("failed to read settings:"));
	}
}
