use std::env;
use std::path::PathBuf;

use anyhow::{Context, Error, Result};
use blade_conf::loader::Layers;
use blade_conf::{Strictness, app_dirs};
use serde::Deserialize;

use crate::cli::{CliArgs, OutputFormat};

use super::resolved::{ResolvedSettings, SettingSource, SettingsError, SettingsSources};

/// Mirror of the settings file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
	loader: LoaderSection,
	output: OutputSection,
}

/// `[loader]`: which layers are read and how strictly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoaderSection {
	strict: Option<bool>,
	user_config: Option<bool>,
	root: Option<PathBuf>,
	extra_files: Option<Vec<PathBuf>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
	format: Option<String>,
}

impl RawSettings {
	/// Apply CLI overrides on top of the raw settings values. Extra files are
	/// merged during [`RawSettings::resolve`] so each keeps its origin.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.strict {
			self.loader.strict = Some(value);
		}
		if cli.no_user_config {
			self.loader.user_config = Some(false);
		}
		if let Some(root) = cli.root.clone() {
			self.loader.root = Some(root);
		}
		if let Some(format) = cli.output {
			self.output.format = Some(format.as_str().to_string());
		}
	}

	/// Convert the raw settings into [`ResolvedSettings`], discovering the
	/// workspace and building the layer plan.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedSettings> {
		let mut sources = SettingsSources {
			strict: detect_source(
				cli.strict.is_some(),
				self.loader.strict.is_some(),
				"BLADE_CONF__LOADER__STRICT",
				"--strict",
				"loader.strict",
			),
			user_config: detect_source(
				cli.no_user_config,
				self.loader.user_config.is_some(),
				"BLADE_CONF__LOADER__USER_CONFIG",
				"--no-user-config",
				"loader.user_config",
			),
			root: detect_source(
				cli.root.is_some(),
				self.loader.root.is_some(),
				"BLADE_CONF__LOADER__ROOT",
				"--root",
				"loader.root",
			),
			format: detect_source(
				cli.output.is_some(),
				self.output.format.is_some(),
				"BLADE_CONF__OUTPUT__FORMAT",
				"--output",
				"output.format",
			),
			extra_files: Vec::new(),
		};

		let format = match self.output.format.as_deref() {
			Some(value) => value.parse::<OutputFormat>().map_err(|reason| {
				SettingsError::invalid("output.format", value, sources.format_origin(), reason)
			})?,
			None => OutputFormat::default(),
		};

		// Files named in settings load before those given on the command line.
		let mut extra_files = self.loader.extra_files.unwrap_or_default();
		let settings_origin = detect_source(
			false,
			!extra_files.is_empty(),
			"BLADE_CONF__LOADER__EXTRA_FILES",
			"--config",
			"loader.extra_files",
		);
		sources
			.extra_files
			.extend(settings_origin.into_iter().cycle().take(extra_files.len()));
		for path in &cli.config {
			extra_files.push(path.clone());
			sources.extra_files.push(SettingSource::CliFlag("--config"));
		}

		let current_dir = env::current_dir().context("failed to determine working directory")?;
		let search_start = match self.loader.root {
			Some(path) if path.is_relative() => current_dir.join(path),
			Some(path) => path,
			None => current_dir,
		};

		let strictness = if self.loader.strict.unwrap_or(false) {
			Strictness::Strict
		} else {
			Strictness::Lenient
		};

		let settings = ResolvedSettings {
			workspace_root: None,
			layers: Layers::default(),
			search_start,
			strictness,
			user_config: self.loader.user_config.unwrap_or(true),
			extra_files,
			format,
			sources,
		};
		settings.validate().map_err(Error::new)?;

		Ok(settings.plan_layers(app_dirs::user_config_file()))
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
