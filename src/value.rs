use std::fmt;

use serde::Serialize;

/// A configuration value as stored in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
	Str(String),
	List(Vec<String>),
	Bool(bool),
	Int(i64),
}

impl Value {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Str(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[String]> {
		match self {
			Value::List(values) => Some(values),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(value) => Some(*value),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(value) => Some(*value),
			_ => None,
		}
	}

	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Str(_) => "string",
			Value::List(_) => "list",
			Value::Bool(_) => "boolean",
			Value::Int(_) => "integer",
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Str(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Str(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<Vec<String>> for Value {
	fn from(values: Vec<String>) -> Self {
		Value::List(values)
	}
}

/// Renders values in configuration-file syntax, so the output can be read
/// back by the loader.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Str(value) => write_quoted(f, value),
			Value::List(values) => {
				f.write_str("[")?;
				for (index, value) in values.iter().enumerate() {
					if index > 0 {
						f.write_str(", ")?;
					}
					write_quoted(f, value)?;
				}
				f.write_str("]")
			}
			Value::Bool(true) => f.write_str("True"),
			Value::Bool(false) => f.write_str("False"),
			Value::Int(value) => write!(f, "{value}"),
		}
	}
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
	f.write_str("'")?;
	for c in value.chars() {
		match c {
			'\\' => f.write_str("\\\\")?,
			'\'' => f.write_str("\\'")?,
			'\n' => f.write_str("\\n")?,
			'\t' => f.write_str("\\t")?,
			'\r' => f.write_str("\\r")?,
			'\0' => f.write_str("\\0")?,
			c => write!(f, "{c}")?,
		}
	}
	f.write_str("'")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_uses_config_syntax() {
		assert_eq!(Value::Bool(false).to_string(), "False");
		assert_eq!(Value::Int(-4).to_string(), "-4");
		assert_eq!(
			Value::List(vec!["-O2".into(), "it's".into()]).to_string(),
			r"['-O2', 'it\'s']"
		);
		assert_eq!(Value::from(r"SSH_.*\.sock").to_string(), r"'SSH_.*\\.sock'");
	}

	#[test]
	fn serializes_without_tags() {
		let json = serde_json::to_string(&Value::List(vec!["a".into()])).expect("json");
		assert_eq!(json, r#"["a"]"#);
		let json = serde_json::to_string(&Value::Bool(true)).expect("json");
		assert_eq!(json, "true");
	}
}
