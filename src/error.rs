use std::fmt;
use std::io;
use std::path::PathBuf;

use blade_conf_syntax::{ParseError, Span};
use thiserror::Error;

use crate::schema::SectionKind;

/// Where in which configuration layer something was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
	pub origin: String,
	pub span: Span,
}

impl Location {
	pub fn new(origin: impl Into<String>, span: Span) -> Self {
		Self {
			origin: origin.into(),
			span,
		}
	}
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.origin, self.span)
	}
}

/// A value that does not fit the section schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
	#[error("{section}: unknown config item `{option}`")]
	UnknownOption { section: SectionKind, option: String },

	#[error("{section}.{option}: expected {expected}, found {found}")]
	TypeMismatch {
		section: SectionKind,
		option: &'static str,
		expected: &'static str,
		found: &'static str,
	},

	#[error("{section}.{option}: `{value}` is not one of: {}", .allowed.join(", "))]
	InvalidChoice {
		section: SectionKind,
		option: &'static str,
		value: String,
		allowed: &'static [&'static str],
	},

	#[error("{section}.{option}: only list options can be appended to, this one is a {kind}")]
	NotAppendable {
		section: SectionKind,
		option: &'static str,
		kind: &'static str,
	},
}

/// Errors raised while reading configuration layers.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("{origin}:{source}")]
	Syntax {
		origin: String,
		#[source]
		source: ParseError,
	},

	#[error("{at}: unknown config section `{name}`")]
	UnknownSection { at: Location, name: String },

	#[error("{at}: {source}")]
	Schema {
		at: Location,
		#[source]
		source: SchemaError,
	},

	#[error("{at}: {section}: {reason}")]
	InvalidArgument {
		at: Location,
		section: SectionKind,
		reason: String,
	},
}

impl LoadError {
	/// The file position of the error, when it points into a layer.
	pub fn location(&self) -> Option<Location> {
		match self {
			LoadError::Io { .. } => None,
			LoadError::Syntax { origin, source } => Some(Location::new(origin.clone(), source.span)),
			LoadError::UnknownSection { at, .. }
			| LoadError::Schema { at, .. }
			| LoadError::InvalidArgument { at, .. } => Some(at.clone()),
		}
	}
}
