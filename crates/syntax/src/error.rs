use thiserror::Error;

use crate::span::Span;

/// A syntax error or a construct outside the configuration subset of Python,
/// located at the offending token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{span}: {kind}")]
pub struct ParseError {
	pub kind: ParseErrorKind,
	pub span: Span,
}

impl ParseError {
	pub(crate) fn new(kind: ParseErrorKind, span: Span) -> Self {
		Self { kind, span }
	}
}

/// What went wrong while reading configuration source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
	/// Rejected by the Python parser; holds its message.
	#[error("{0}")]
	Syntax(String),

	#[error("brackets nested more than {limit} levels deep", limit = crate::scan::MAX_NESTING)]
	TooDeep,

	#[error("{0} is not supported in configuration files")]
	UnsupportedToken(String),

	#[error("integer literal `{0}` is out of range")]
	IntegerOverflow(String),

	#[error("{0} statements are not supported in configuration files")]
	UnsupportedStatement(&'static str),

	#[error("{0} is not supported in configuration values")]
	UnsupportedExpression(&'static str),
}
