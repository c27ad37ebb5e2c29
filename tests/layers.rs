//! Loads the fixture workspace through the public library API.

use std::path::{Path, PathBuf};

use blade_conf::loader::{Layers, find_workspace_root};
use blade_conf::{Loader, SectionKind, Value};

fn workspace() -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/workspace")
}

#[test]
fn workspace_is_found_from_a_subdirectory() {
	assert_eq!(find_workspace_root(&workspace().join("common")), Some(workspace()));
}

#[test]
fn local_overrides_compose_with_the_workspace_file() {
	let report = Loader::new()
		.load_plan(&Layers::discover(&workspace(), None))
		.expect("fixture loads");
	let registry = &report.registry;

	assert!(report.warnings.is_empty());
	assert_eq!(
		registry.section(SectionKind::Cc).list("optimize"),
		Some(&["-O2".to_string(), "-g".to_string()][..])
	);
	assert_eq!(
		registry.section(SectionKind::Cc).list("warnings"),
		Some(
			&[
				"-Wall".to_string(),
				"-Wextra".to_string(),
				"-Wno-unused-parameter".to_string()
			][..]
		)
	);
	assert_eq!(registry.section(SectionKind::Link).int("link_jobs"), Some(4));
	assert_eq!(registry.section(SectionKind::Distcc).bool("enabled"), Some(false));
	assert_eq!(
		registry.lookup("java_config", "maven_central"),
		Some(&Value::from("https://repo1.maven.org/maven2"))
	);
}

#[test]
fn workspace_file_alone_keeps_its_own_values() {
	let registry = Loader::strict()
		.load(workspace().join("BLADE_ROOT"))
		.expect("fixture loads");
	assert_eq!(
		registry.section(SectionKind::Cc).list("optimize"),
		Some(&["-O2".to_string()][..])
	);
	assert_eq!(registry.section(SectionKind::Link).int("link_jobs"), Some(0));
}

#[test]
fn rendered_configuration_reloads_identically() {
	let loader = Loader::new();
	let registry = loader
		.load_layers([workspace().join("BLADE_ROOT"), workspace().join("BLADE_ROOT.local")])
		.expect("fixture loads");
	let reloaded = loader
		.load_str(&registry.to_source(), "rendered")
		.expect("rendered source loads");
	assert_eq!(reloaded, registry);
}
