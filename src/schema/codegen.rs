use super::OptionSpec;

pub(super) const PROTO_LIBRARY: &[OptionSpec] = &[
	OptionSpec::string("protoc", "thirdparty/protobuf/bin/protoc"),
	OptionSpec::string("protoc_java", ""),
	OptionSpec::list("protobuf_libs", &[]),
	OptionSpec::string("protobuf_path", ""),
	OptionSpec::list("protobuf_incs", &[]),
	OptionSpec::list("protobuf_java_incs", &[]),
	OptionSpec::string("protobuf_php_path", ""),
	OptionSpec::string("protoc_php_plugin", ""),
	OptionSpec::string("protoc_go_plugin", ""),
	OptionSpec::string("protobuf_go_path", ""),
	OptionSpec::list("protoc_go_subplugins", &[]),
];

pub(super) const THRIFT: &[OptionSpec] = &[
	OptionSpec::string("thrift", "thrift"),
	OptionSpec::list("thrift_libs", &[]),
	OptionSpec::list("thrift_incs", &[]),
	OptionSpec::string("thrift_gen_params", "cpp:include_prefix,pure_enums"),
];

pub(super) const FBTHRIFT: &[OptionSpec] = &[
	OptionSpec::string("fbthrift1", "thrift1"),
	OptionSpec::string("fbthrift2", "thrift2"),
	OptionSpec::list("fbthrift_libs", &[]),
	OptionSpec::list("fbthrift_incs", &[]),
];
