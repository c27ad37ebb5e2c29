use super::{ResolvedSettings, SettingsError};

pub(super) fn validate(settings: &ResolvedSettings) -> Result<(), SettingsError> {
	if !settings.search_start.is_dir() {
		return Err(SettingsError::invalid(
			"loader.root",
			settings.search_start.display().to_string(),
			settings.sources.root_origin(),
			"must be an existing directory",
		));
	}

	if let Some((index, path)) = settings
		.extra_files
		.iter()
		.enumerate()
		.find(|(_, path)| path.as_os_str().is_empty() || path.is_dir())
	{
		return Err(SettingsError::invalid(
			"loader.extra_files",
			path.display().to_string(),
			settings.sources.extra_file_origin(index),
			"must name a configuration file",
		));
	}

	Ok(())
}
