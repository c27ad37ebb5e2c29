use super::OptionSpec;

pub(super) const GLOBAL: &[OptionSpec] = &[
	OptionSpec::string("build_path_template", "build${bits}_${profile}"),
	OptionSpec::choice(
		"duplicated_source_action",
		&["warning", "error", "none"],
		"warning",
	),
	OptionSpec::choice("debug_info_level", &["no", "low", "mid", "high"], "mid"),
	OptionSpec::string("native_builder", "ninja"),
	// Seconds; 0 leaves tests unbounded.
	OptionSpec::int("test_timeout", 0),
	OptionSpec::list("test_related_envs", &[]),
	// Regular expressions, matched by the test runner against variable names.
	OptionSpec::list("test_ignored_envs", &[]),
	OptionSpec::flag("run_unrepaired_tests", false),
];

pub(super) const GO: &[OptionSpec] = &[
	OptionSpec::string("go", "go"),
	OptionSpec::string("go_home", ""),
	OptionSpec::flag("go_module_enabled", false),
	// Module root relative to the workspace; empty when modules are disabled.
	OptionSpec::string("go_module_relpath", ""),
];
