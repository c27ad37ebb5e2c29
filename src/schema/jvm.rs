use super::OptionSpec;

pub(super) const JAVA: &[OptionSpec] = &[
	OptionSpec::string("java_home", ""),
	OptionSpec::string("version", "1.8"),
	// Empty means "same as `version`".
	OptionSpec::string("source_version", ""),
	OptionSpec::string("target_version", ""),
	OptionSpec::string("source_encoding", ""),
	OptionSpec::list("warnings", &["-Werror", "-Xlint:all"]),
	OptionSpec::string("maven", "mvn"),
	OptionSpec::string("maven_central", ""),
];

pub(super) const JAVA_BINARY: &[OptionSpec] = &[OptionSpec::string("one_jar_boot_jar", "")];

pub(super) const JAVA_TEST: &[OptionSpec] = &[
	OptionSpec::list("junit_libs", &[]),
	OptionSpec::string("jacoco_home", ""),
];

pub(super) const SCALA: &[OptionSpec] = &[
	OptionSpec::string("scala_home", ""),
	OptionSpec::string("target_platform", ""),
	OptionSpec::string("source_encoding", ""),
	OptionSpec::list("warnings", &[]),
];
