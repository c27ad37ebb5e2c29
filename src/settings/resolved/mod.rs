use std::path::PathBuf;

use blade_conf::Strictness;
use blade_conf::loader::{Layers, find_workspace_root};

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::SettingsError;
pub(crate) use sources::{SettingSource, SettingsSources};

/// Tool settings after CLI overrides, with the configuration layers to load.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedSettings {
	/// Directory the workspace search started from.
	pub(crate) search_start: PathBuf,
	/// Nearest directory holding `BLADE_ROOT`, if any.
	pub(crate) workspace_root: Option<PathBuf>,
	pub(crate) layers: Layers,
	pub(crate) strictness: Strictness,
	pub(crate) user_config: bool,
	pub(crate) extra_files: Vec<PathBuf>,
	pub(crate) format: OutputFormat,
	pub(crate) sources: SettingsSources,
}

impl ResolvedSettings {
	pub(super) fn validate(&self) -> Result<(), SettingsError> {
		validation::validate(self)
	}

	/// Defaults for a workspace at `root`, with its layers planned.
	#[cfg(test)]
	pub(crate) fn for_workspace(root: &std::path::Path) -> Self {
		Self {
			search_start: root.to_path_buf(),
			workspace_root: None,
			layers: Layers::default(),
			strictness: Strictness::Lenient,
			user_config: false,
			extra_files: Vec::new(),
			format: OutputFormat::default(),
			sources: SettingsSources::default(),
		}
		.plan_layers(None)
	}

	/// Discover the workspace from `search_start` and plan the layers: the
	/// user file, the workspace files, then any extra files.
	pub(super) fn plan_layers(mut self, user_file: Option<PathBuf>) -> Self {
		let user_file = user_file.filter(|_| self.user_config);
		self.workspace_root = find_workspace_root(&self.search_start);
		self.layers = match &self.workspace_root {
			Some(root) => Layers::discover(root, user_file),
			None => {
				let mut layers = Layers::default();
				if let Some(path) = user_file {
					layers.push_optional(path);
				}
				layers
			}
		};
		for path in &self.extra_files {
			self.layers.push_required(path.clone());
		}
		self
	}

	/// Print a human readable summary of the effective settings.
	pub(crate) fn print_summary(&self) {
		println!("{}", summary::format_summary(self));
	}
}
