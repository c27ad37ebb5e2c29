//! Tool settings: how `blade-conf` itself behaves, as opposed to the build
//! configuration it inspects.
//!
//! Settings files and `BLADE_CONF__*` environment variables are merged by the
//! `config` crate, CLI flags are applied on top, and the result is resolved
//! into a [`ResolvedSettings`] holding the layer plan to load.

use anyhow::{Context, Result};
use log::debug;

use crate::cli::CliArgs;
use raw::RawSettings;

mod raw;
mod resolved;
mod sources;

pub(crate) use resolved::ResolvedSettings;

/// Read the settings sources, apply CLI flags and plan the layers to load.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedSettings> {
	let mut raw: RawSettings = sources::build_config(cli)?
		.try_deserialize()
		.context("settings do not match the expected shape")?;
	raw.apply_cli_overrides(cli);
	let settings = raw.resolve(cli)?;
	debug!(
		"planned {} layer(s) from {}",
		settings.layers.len(),
		settings.search_start.display()
	);
	Ok(settings)
}
