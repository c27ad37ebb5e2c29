use std::path::Path;

use anyhow::{Result, anyhow, bail};
use blade_conf::loader::{ROOT_FILE, is_not_found};
use blade_conf::{LoadReport, Loader, SectionKind};
use log::info;

use crate::cli::{Command, format_check, format_sections, format_show, format_value};
use crate::settings::ResolvedSettings;

/// Run a subcommand against the resolved settings and print its result.
pub(crate) fn run(command: Command, settings: &ResolvedSettings) -> Result<()> {
	let output = match command {
		Command::Sections => format_sections(settings.format)?,
		Command::Show { section } => {
			let kind = section.as_deref().map(parse_section).transpose()?;
			let report = load(settings)?;
			format_show(&report.registry, kind, settings.format)?
		}
		Command::Get { section, option } => {
			let kind = parse_section(&section)?;
			let report = load(settings)?;
			let value = report
				.registry
				.get(kind, &option)
				.ok_or_else(|| anyhow!("{kind}: unknown config item `{option}`"))?;
			format_value(value, settings.format)?
		}
		Command::Check => {
			let report = load(settings)?;
			format_check(&report, &loaded_layers(settings), settings.format)?
		}
	};
	println!("{output}");
	Ok(())
}

fn parse_section(name: &str) -> Result<SectionKind> {
	Ok(name.parse::<SectionKind>()?)
}

/// Load the planned layers. Without a workspace there must be at least one
/// explicitly named file to read.
fn load(settings: &ResolvedSettings) -> Result<LoadReport> {
	if settings.workspace_root.is_none() && settings.extra_files.is_empty() {
		bail!(
			"no {ROOT_FILE} found in {} or any parent directory; use --root or --config",
			settings.search_start.display()
		);
	}

	let report = Loader::with_strictness(settings.strictness)
		.load_plan(&settings.layers)
		.map_err(|err| {
			if is_not_found(&err) {
				anyhow::Error::new(err).context("a required configuration file is missing")
			} else {
				err.into()
			}
		})?;
	info!(
		"loaded {} layer(s) with {} warning(s)",
		loaded_layers(settings).len(),
		report.warnings.len()
	);
	Ok(report)
}

/// Layers that were actually read: required ones plus optional ones present.
fn loaded_layers(settings: &ResolvedSettings) -> Vec<&Path> {
	settings
		.layers
		.iter()
		.filter(|layer| layer.required || layer.path.exists())
		.map(|layer| layer.path.as_path())
		.collect()
}

#[cfg(test)]
mod tests {
	use std::fs;

	use blade_conf::Strictness;
	use blade_conf::loader::Layers;
	use tempfile::tempdir;

	use super::*;

	fn settings_for(root: &Path, strictness: Strictness) -> ResolvedSettings {
		ResolvedSettings {
			strictness,
			..ResolvedSettings::for_workspace(root)
		}
	}

	#[test]
	fn section_names_accept_ids_and_call_names() {
		assert_eq!(parse_section("cc").unwrap(), SectionKind::Cc);
		assert_eq!(parse_section("thrift_config").unwrap(), SectionKind::Thrift);
		let err = parse_section("rust").unwrap_err();
		assert_eq!(err.to_string(), "unknown config section `rust`");
	}

	#[test]
	fn load_applies_local_overrides() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join(ROOT_FILE), "link_config(link_jobs = 8)\n").unwrap();
		fs::write(dir.path().join("BLADE_ROOT.local"), "link_config(link_jobs = 2)\n").unwrap();

		let settings = settings_for(dir.path(), Strictness::Lenient);
		let report = load(&settings).expect("loads");
		assert_eq!(report.registry["link"].int("link_jobs"), Some(2));
		assert_eq!(loaded_layers(&settings).len(), 2);
	}

	#[test]
	fn strict_settings_fail_on_unknown_items() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join(ROOT_FILE), "cc_config(optimise = ['-O2'])\n").unwrap();

		assert!(load(&settings_for(dir.path(), Strictness::Lenient)).is_ok());
		let err = load(&settings_for(dir.path(), Strictness::Strict)).unwrap_err();
		assert!(err.to_string().contains("unknown config item `optimise`"));
	}

	#[test]
	fn loading_without_a_workspace_is_explained() {
		let dir = tempdir().unwrap();
		let settings = ResolvedSettings {
			workspace_root: None,
			layers: Layers::default(),
			..settings_for(dir.path(), Strictness::Lenient)
		};
		let err = load(&settings).unwrap_err();
		assert!(err.to_string().starts_with("no BLADE_ROOT found in"));
	}

	#[test]
	fn missing_extra_file_is_reported() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join(ROOT_FILE), "").unwrap();
		let mut settings = settings_for(dir.path(), Strictness::Lenient);
		let extra = dir.path().join("team.conf");
		settings.extra_files.push(extra.clone());
		settings.layers.push_required(extra);

		let err = load(&settings).unwrap_err();
		assert_eq!(err.to_string(), "a required configuration file is missing");
	}
}
