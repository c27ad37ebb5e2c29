use super::OptionSpec;

pub(super) const CC: &[OptionSpec] = &[
	OptionSpec::list("extra_incs", &[]),
	OptionSpec::list("cppflags", &[]),
	OptionSpec::list("cflags", &[]),
	OptionSpec::list("cxxflags", &[]),
	OptionSpec::list("linkflags", &[]),
	OptionSpec::list("warnings", &[]),
	OptionSpec::list("c_warnings", &[]),
	OptionSpec::list("cxx_warnings", &[]),
	OptionSpec::list("optimize", &[]),
	OptionSpec::list("benchmark_libs", &[]),
	OptionSpec::list("benchmark_main_libs", &[]),
	OptionSpec::string("securecc", ""),
	OptionSpec::flag("header_inclusion_dependencies", false),
];

pub(super) const CC_TEST: &[OptionSpec] = &[
	OptionSpec::flag("dynamic_link", false),
	OptionSpec::string("heap_check", ""),
	OptionSpec::list("gperftools_libs", &[]),
	OptionSpec::list("gperftools_debug_libs", &[]),
	OptionSpec::list("gtest_libs", &[]),
	OptionSpec::list("gtest_main_libs", &[]),
	OptionSpec::string("pprof_path", ""),
];

pub(super) const CC_BINARY: &[OptionSpec] = &[
	OptionSpec::list("extra_libs", &[]),
	OptionSpec::list("run_lib_paths", &[]),
];

pub(super) const CC_LIBRARY: &[OptionSpec] = &[
	OptionSpec::flag("generate_dynamic", false),
	OptionSpec::list("arflags", &["rcs"]),
	OptionSpec::list("ranlibflags", &[]),
	OptionSpec::string("prebuilt_libpath_pattern", "lib${bits}"),
];

pub(super) const DISTCC: &[OptionSpec] = &[OptionSpec::flag("enabled", false)];

pub(super) const LINK: &[OptionSpec] = &[
	OptionSpec::flag("link_on_tmp", false),
	// 0 means "as many as the build's parallelism allows".
	OptionSpec::int("link_jobs", 0),
	OptionSpec::flag("enable_dccc", false),
];
