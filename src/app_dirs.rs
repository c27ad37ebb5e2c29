//! Resolve the directories and per-user files `blade-conf` reads.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::{BaseDirs, ProjectDirs};

use crate::loader::USER_FILE;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "blade";
const APPLICATION: &str = "blade-conf";

const CONFIG_DIR_ENV: &str = "BLADE_CONF_CONFIG_DIR";
const USER_FILE_ENV: &str = "BLADE_CONF_BLADERC";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for blade-conf"))
}

/// Resolve an override path from an environment variable.
///
/// An empty string is treated the same as an unset value so that callers can
/// use shell defaults without worrying about trailing whitespace.
fn path_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the directory holding the tool's own `settings.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = path_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the per-user Blade configuration file, `~/.bladerc` by default.
pub fn user_config_file() -> Option<PathBuf> {
	if let Some(path) = path_from_env(USER_FILE_ENV) {
		return Some(path);
	}

	BaseDirs::new().map(|dirs| dirs.home_dir().join(USER_FILE))
}
