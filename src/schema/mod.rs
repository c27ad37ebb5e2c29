//! The closed set of configuration sections and the options each accepts.
//!
//! Every section call in a configuration file maps onto one [`SectionKind`].
//! Option tables live in the submodules, grouped by the part of the build they
//! configure.

use std::fmt;
use std::str::FromStr;

use crate::value::Value;

mod cc;
mod codegen;
mod global;
mod jvm;

/// A known configuration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
	Global,
	Cc,
	CcTest,
	CcBinary,
	CcLibrary,
	Distcc,
	Link,
	ProtoLibrary,
	Thrift,
	Fbthrift,
	Java,
	JavaBinary,
	JavaTest,
	Scala,
	Go,
}

impl SectionKind {
	pub const ALL: [SectionKind; 15] = [
		SectionKind::Global,
		SectionKind::Cc,
		SectionKind::CcTest,
		SectionKind::CcBinary,
		SectionKind::CcLibrary,
		SectionKind::Distcc,
		SectionKind::Link,
		SectionKind::ProtoLibrary,
		SectionKind::Thrift,
		SectionKind::Fbthrift,
		SectionKind::Java,
		SectionKind::JavaBinary,
		SectionKind::JavaTest,
		SectionKind::Scala,
		SectionKind::Go,
	];

	/// Registry key of the section.
	pub fn id(self) -> &'static str {
		match self {
			SectionKind::Global => "global",
			SectionKind::Cc => "cc",
			SectionKind::CcTest => "cc_test",
			SectionKind::CcBinary => "cc_binary",
			SectionKind::CcLibrary => "cc_library",
			SectionKind::Distcc => "distcc",
			SectionKind::Link => "link",
			SectionKind::ProtoLibrary => "proto_library",
			SectionKind::Thrift => "thrift",
			SectionKind::Fbthrift => "fbthrift",
			SectionKind::Java => "java",
			SectionKind::JavaBinary => "java_binary",
			SectionKind::JavaTest => "java_test",
			SectionKind::Scala => "scala",
			SectionKind::Go => "go",
		}
	}

	/// The function name used to configure the section in a file.
	pub fn call_name(self) -> &'static str {
		match self {
			SectionKind::Global => "global_config",
			SectionKind::Cc => "cc_config",
			SectionKind::CcTest => "cc_test_config",
			SectionKind::CcBinary => "cc_binary_config",
			SectionKind::CcLibrary => "cc_library_config",
			SectionKind::Distcc => "distcc_config",
			SectionKind::Link => "link_config",
			SectionKind::ProtoLibrary => "proto_library_config",
			SectionKind::Thrift => "thrift_library_config",
			SectionKind::Fbthrift => "fbthrift_library_config",
			SectionKind::Java => "java_config",
			SectionKind::JavaBinary => "java_binary_config",
			SectionKind::JavaTest => "java_test_config",
			SectionKind::Scala => "scala_config",
			SectionKind::Go => "go_config",
		}
	}

	/// Older call names still accepted in files.
	pub fn aliases(self) -> &'static [&'static str] {
		match self {
			SectionKind::Thrift => &["thrift_config"],
			SectionKind::Fbthrift => &["fbthrift_config"],
			_ => &[],
		}
	}

	/// Resolve the name of a call in a configuration file.
	pub fn from_call_name(name: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.call_name() == name || kind.aliases().contains(&name))
	}

	pub fn description(self) -> &'static str {
		match self {
			SectionKind::Global => "global build settings",
			SectionKind::Cc => "C/C++ compiler flags and warnings",
			SectionKind::CcTest => "C/C++ test support libraries and environment",
			SectionKind::CcBinary => "C/C++ binary link settings",
			SectionKind::CcLibrary => "C/C++ library archive settings",
			SectionKind::Distcc => "distributed compilation",
			SectionKind::Link => "linker scheduling",
			SectionKind::ProtoLibrary => "protocol buffer code generator",
			SectionKind::Thrift => "Thrift code generator",
			SectionKind::Fbthrift => "fbthrift code generator",
			SectionKind::Java => "Java toolchain",
			SectionKind::JavaBinary => "Java binary packaging",
			SectionKind::JavaTest => "Java test support",
			SectionKind::Scala => "Scala toolchain",
			SectionKind::Go => "Go toolchain",
		}
	}

	pub fn options(self) -> &'static [OptionSpec] {
		match self {
			SectionKind::Global => global::GLOBAL,
			SectionKind::Cc => cc::CC,
			SectionKind::CcTest => cc::CC_TEST,
			SectionKind::CcBinary => cc::CC_BINARY,
			SectionKind::CcLibrary => cc::CC_LIBRARY,
			SectionKind::Distcc => cc::DISTCC,
			SectionKind::Link => cc::LINK,
			SectionKind::ProtoLibrary => codegen::PROTO_LIBRARY,
			SectionKind::Thrift => codegen::THRIFT,
			SectionKind::Fbthrift => codegen::FBTHRIFT,
			SectionKind::Java => jvm::JAVA,
			SectionKind::JavaBinary => jvm::JAVA_BINARY,
			SectionKind::JavaTest => jvm::JAVA_TEST,
			SectionKind::Scala => jvm::SCALA,
			SectionKind::Go => global::GO,
		}
	}

	pub fn option(self, name: &str) -> Option<&'static OptionSpec> {
		self.options().iter().find(|spec| spec.name == name)
	}
}

impl fmt::Display for SectionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Accepts either the registry key (`link`) or a call name (`link_config`).
impl FromStr for SectionKind {
	type Err = UnknownSection;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.id() == name)
			.or_else(|| Self::from_call_name(name))
			.ok_or_else(|| UnknownSection(name.to_string()))
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown config section `{0}`")]
pub struct UnknownSection(pub String);

/// The type an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
	Str,
	Bool,
	Int,
	List,
	/// A string restricted to the listed values.
	Choice(&'static [&'static str]),
}

impl OptionKind {
	pub fn describe(self) -> &'static str {
		match self {
			OptionKind::Str => "string",
			OptionKind::Bool => "boolean",
			OptionKind::Int => "integer",
			OptionKind::List => "list",
			OptionKind::Choice(_) => "choice",
		}
	}

	/// Whether `value` has the shape this kind stores. Choice membership is
	/// checked separately so the error can list the allowed values.
	pub fn accepts(self, value: &Value) -> bool {
		matches!(
			(self, value),
			(OptionKind::Str | OptionKind::Choice(_), Value::Str(_))
				| (OptionKind::Bool, Value::Bool(_))
				| (OptionKind::Int, Value::Int(_))
				| (OptionKind::List, Value::List(_))
		)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefaultValue {
	Str(&'static str),
	Bool(bool),
	Int(i64),
	List(&'static [&'static str]),
}

/// One recognised option of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
	pub name: &'static str,
	pub kind: OptionKind,
	default: DefaultValue,
}

impl OptionSpec {
	pub const fn string(name: &'static str, default: &'static str) -> Self {
		Self {
			name,
			kind: OptionKind::Str,
			default: DefaultValue::Str(default),
		}
	}

	pub const fn flag(name: &'static str, default: bool) -> Self {
		Self {
			name,
			kind: OptionKind::Bool,
			default: DefaultValue::Bool(default),
		}
	}

	pub const fn int(name: &'static str, default: i64) -> Self {
		Self {
			name,
			kind: OptionKind::Int,
			default: DefaultValue::Int(default),
		}
	}

	pub const fn list(name: &'static str, default: &'static [&'static str]) -> Self {
		Self {
			name,
			kind: OptionKind::List,
			default: DefaultValue::List(default),
		}
	}

	pub const fn choice(
		name: &'static str,
		allowed: &'static [&'static str],
		default: &'static str,
	) -> Self {
		Self {
			name,
			kind: OptionKind::Choice(allowed),
			default: DefaultValue::Str(default),
		}
	}

	pub fn default_value(&self) -> Value {
		match self.default {
			DefaultValue::Str(value) => Value::Str(value.to_string()),
			DefaultValue::Bool(value) => Value::Bool(value),
			DefaultValue::Int(value) => Value::Int(value),
			DefaultValue::List(values) => {
				Value::List(values.iter().map(|value| value.to_string()).collect())
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn ids_and_call_names_resolve() {
		for kind in SectionKind::ALL {
			assert_eq!(kind.id().parse::<SectionKind>(), Ok(kind));
			assert_eq!(kind.call_name().parse::<SectionKind>(), Ok(kind));
			assert_eq!(SectionKind::from_call_name(kind.call_name()), Some(kind));
		}
	}

	#[test]
	fn legacy_thrift_call_names_are_aliases() {
		assert_eq!(SectionKind::from_call_name("thrift_config"), Some(SectionKind::Thrift));
		assert_eq!(
			SectionKind::from_call_name("fbthrift_config"),
			Some(SectionKind::Fbthrift)
		);
		assert_eq!(SectionKind::from_call_name("thrift"), None);
	}

	#[test]
	fn unknown_names_are_rejected() {
		let err = "rust_config".parse::<SectionKind>().unwrap_err();
		assert_eq!(err.to_string(), "unknown config section `rust_config`");
	}

	#[test]
	fn option_names_are_unique_and_defaults_match_kinds() {
		for kind in SectionKind::ALL {
			let mut seen = HashSet::new();
			for spec in kind.options() {
				assert!(seen.insert(spec.name), "{kind}.{} declared twice", spec.name);
				assert!(
					spec.kind.accepts(&spec.default_value()),
					"{kind}.{} default does not match its kind",
					spec.name
				);
				if let OptionKind::Choice(allowed) = spec.kind {
					let default = spec.default_value();
					assert!(allowed.contains(&default.as_str().unwrap_or_default()));
				}
			}
		}
	}
}
