use std::fmt;

/// Where a settings value came from, for error messages and the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "settings key `{key}`"),
		}
	}
}

/// Origins of the resolved settings. `None` means the built-in default.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct SettingsSources {
	pub(crate) strict: Option<SettingSource>,
	pub(crate) user_config: Option<SettingSource>,
	pub(crate) root: Option<SettingSource>,
	pub(crate) format: Option<SettingSource>,
	/// One entry per extra file, in load order.
	pub(crate) extra_files: Vec<SettingSource>,
}

impl SettingsSources {
	pub(crate) fn root_origin(&self) -> SettingSource {
		self.root
			.clone()
			.unwrap_or(SettingSource::ConfigKey("loader.root"))
	}

	pub(crate) fn format_origin(&self) -> SettingSource {
		self.format
			.clone()
			.unwrap_or(SettingSource::ConfigKey("output.format"))
	}

	pub(crate) fn extra_file_origin(&self, index: usize) -> SettingSource {
		self.extra_files
			.get(index)
			.cloned()
			.unwrap_or(SettingSource::ConfigKey("loader.extra_files"))
	}
}

/// Render an origin for the settings summary.
pub(crate) fn describe(origin: Option<&SettingSource>) -> String {
	origin.map_or_else(|| "default".to_string(), ToString::to_string)
}
