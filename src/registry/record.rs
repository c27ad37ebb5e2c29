use std::ops::Index;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::SchemaError;
use crate::schema::{OptionKind, OptionSpec, SectionKind};
use crate::value::Value;

/// The options of one section, in schema order.
///
/// Every option the schema declares is always present; unset options hold
/// their default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRecord {
	kind: SectionKind,
	values: IndexMap<&'static str, Value>,
}

impl SettingRecord {
	pub fn with_defaults(kind: SectionKind) -> Self {
		let values = kind
			.options()
			.iter()
			.map(|spec| (spec.name, spec.default_value()))
			.collect();
		Self { kind, values }
	}

	pub fn kind(&self) -> SectionKind {
		self.kind
	}

	pub fn get(&self, option: &str) -> Option<&Value> {
		self.values.get(option)
	}

	pub fn str(&self, option: &str) -> Option<&str> {
		self.get(option).and_then(Value::as_str)
	}

	pub fn list(&self, option: &str) -> Option<&[String]> {
		self.get(option).and_then(Value::as_list)
	}

	pub fn bool(&self, option: &str) -> Option<bool> {
		self.get(option).and_then(Value::as_bool)
	}

	pub fn int(&self, option: &str) -> Option<i64> {
		self.get(option).and_then(Value::as_int)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
		self.values.iter().map(|(name, value)| (*name, value))
	}

	/// Replace the value of `option`.
	pub(crate) fn set(&mut self, option: &str, value: Value) -> Result<(), SchemaError> {
		let spec = self.spec(option)?;
		check_value(self.kind, spec, &value)?;
		self.values.insert(spec.name, value);
		Ok(())
	}

	/// Concatenate `values` onto the list held by `option`.
	pub(crate) fn append(&mut self, option: &str, values: Vec<String>) -> Result<(), SchemaError> {
		let spec = self.spec(option)?;
		if spec.kind != OptionKind::List {
			return Err(SchemaError::NotAppendable {
				section: self.kind,
				option: spec.name,
				kind: spec.kind.describe(),
			});
		}
		match self.values.get_mut(spec.name) {
			Some(Value::List(existing)) => existing.extend(values),
			_ => {
				self.values.insert(spec.name, Value::List(values));
			}
		}
		Ok(())
	}

	fn spec(&self, option: &str) -> Result<&'static OptionSpec, SchemaError> {
		self.kind
			.option(option)
			.ok_or_else(|| SchemaError::UnknownOption {
				section: self.kind,
				option: option.to_string(),
			})
	}
}

/// Check that `value` is acceptable for `spec`, including choice membership.
pub(crate) fn check_value(
	section: SectionKind,
	spec: &OptionSpec,
	value: &Value,
) -> Result<(), SchemaError> {
	if !spec.kind.accepts(value) {
		return Err(SchemaError::TypeMismatch {
			section,
			option: spec.name,
			expected: spec.kind.describe(),
			found: value.type_name(),
		});
	}
	if let (OptionKind::Choice(allowed), Value::Str(choice)) = (spec.kind, value)
		&& !allowed.contains(&choice.as_str())
	{
		return Err(SchemaError::InvalidChoice {
			section,
			option: spec.name,
			value: choice.clone(),
			allowed,
		});
	}
	Ok(())
}

impl Index<&str> for SettingRecord {
	type Output = Value;

	/// Panics if the section has no such option.
	fn index(&self, option: &str) -> &Value {
		self.get(option)
			.unwrap_or_else(|| panic!("{}: unknown config item `{option}`", self.kind))
	}
}

impl Serialize for SettingRecord {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.values.len()))?;
		for (name, value) in &self.values {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}
