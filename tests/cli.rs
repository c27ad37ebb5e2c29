//! Runs the `blade-conf` binary against the fixture workspace.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::tempdir;

fn workspace() -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/workspace")
}

fn blade_conf(args: &[&str]) -> Output {
	let settings_dir = tempdir().expect("tempdir");
	Command::new(env!("CARGO_BIN_EXE_blade-conf"))
		.args(["--no-settings", "--no-user-config"])
		.args(args)
		.env("BLADE_CONF_CONFIG_DIR", settings_dir.path())
		.env_remove("BLADE_CONF_FILE")
		.env_remove("RUST_LOG")
		.current_dir(workspace().join("common"))
		.output()
		.expect("binary runs")
}

fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn get_prints_the_effective_value() {
	let output = blade_conf(&["get", "cc", "optimize"]);
	assert!(output.status.success());
	assert_eq!(stdout(&output), "-O2\n-g\n");
}

#[test]
fn show_renders_a_single_section() {
	let output = blade_conf(&["show", "--section", "link_config"]);
	assert!(output.status.success());
	let text = stdout(&output);
	assert!(text.starts_with("link_config(\n"));
	assert!(text.contains("    link_jobs = 4,\n"));
}

#[test]
fn json_output_is_machine_readable() {
	let output = blade_conf(&["-o", "json", "show"]);
	assert!(output.status.success());
	let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
	assert_eq!(value["global"]["test_timeout"], 600);
	assert_eq!(value["distcc"]["enabled"], false);
}

#[test]
fn check_fails_on_unknown_items_when_strict() {
	let dir = tempdir().unwrap();
	let extra = dir.path().join("extra.conf");
	std::fs::write(&extra, "link_config(linker = 'gold')\n").unwrap();
	let extra = extra.display().to_string();

	let lenient = blade_conf(&["check", "-c", &extra]);
	assert!(lenient.status.success());
	assert!(stdout(&lenient).contains("3 layers loaded, 1 warning"));

	let strict = blade_conf(&["--strict", "check", "-c", &extra]);
	assert!(!strict.status.success());
	let stderr = String::from_utf8_lossy(&strict.stderr);
	assert!(stderr.contains("link: unknown config item `linker`"));
}

#[test]
fn unknown_sections_are_reported() {
	let output = blade_conf(&["get", "rust", "edition"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("unknown config section `rust`"));
}
