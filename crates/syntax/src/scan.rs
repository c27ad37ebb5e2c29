//! Token-level gate run before the Python parser.
//!
//! Configuration files only need calls, literals and containers. Rejecting
//! everything else at the token level keeps the parsed tree shallow: nesting
//! can only grow through brackets, and those are capped at [`MAX_NESTING`].

use rustpython_parser::lexer::lex;
use rustpython_parser::{Mode, Tok};

use crate::error::{ParseError, ParseErrorKind};
use crate::span::LineIndex;

/// Deepest bracket nesting accepted in a configuration file.
pub const MAX_NESTING: usize = 64;

pub(crate) fn check_subset(source: &str, lines: &LineIndex<'_>) -> Result<(), ParseError> {
	let mut tokens = lex(source, Mode::Module).peekable();
	let mut depth = 0_usize;
	// Whether the previous significant token leaves room for a new value.
	let mut value_position = true;
	// Whether the previous significant token was a bare name.
	let mut after_name = false;

	while let Some(token) = tokens.next() {
		let (tok, range) = match token {
			Ok(token) => token,
			Err(err) => {
				return Err(ParseError::new(
					ParseErrorKind::Syntax(err.error.to_string()),
					lines.span(err.location),
				));
			}
		};
		let at = || lines.span(range.start());

		match &tok {
			Tok::Comment { .. } | Tok::NonLogicalNewline => continue,
			Tok::Lpar if !(value_position || after_name) => {
				return Err(unsupported("call on a call result", at()));
			}
			Tok::Lsqb | Tok::Lbrace if !value_position => {
				return Err(unsupported("subscript", at()));
			}
			Tok::Lpar | Tok::Lsqb | Tok::Lbrace => {
				depth += 1;
				if depth > MAX_NESTING {
					return Err(ParseError::new(ParseErrorKind::TooDeep, at()));
				}
			}
			Tok::Rpar | Tok::Rsqb | Tok::Rbrace => depth = depth.saturating_sub(1),
			Tok::Minus => {
				let negates_integer = matches!(tokens.peek(), Some(Ok((Tok::Int { .. }, _))));
				if !(value_position && negates_integer) {
					return Err(unsupported("'-' outside a negative integer", at()));
				}
			}
			Tok::Name { .. }
			| Tok::Int { .. }
			| Tok::String { .. }
			| Tok::True
			| Tok::False
			| Tok::None
			| Tok::Comma
			| Tok::Colon
			| Tok::Equal
			| Tok::Semi
			| Tok::Newline
			| Tok::Indent
			| Tok::Dedent
			| Tok::EndOfFile => {}
			other => return Err(unsupported(&other.to_string(), at())),
		}

		after_name = matches!(tok, Tok::Name { .. });
		value_position = matches!(
			tok,
			Tok::Lpar
				| Tok::Lsqb
				| Tok::Lbrace
				| Tok::Comma
				| Tok::Colon
				| Tok::Equal
				| Tok::Semi
				| Tok::Newline
				| Tok::Indent
				| Tok::Dedent
		);
	}
	Ok(())
}

fn unsupported(what: &str, at: crate::span::Span) -> ParseError {
	ParseError::new(ParseErrorKind::UnsupportedToken(what.to_string()), at)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::span::Span;

	fn check(source: &str) -> Result<(), ParseError> {
		check_subset(source, &LineIndex::new(source))
	}

	#[test]
	fn configuration_subset_passes() {
		check(
			"# comment\ncc_config(\n    optimize = ['-O2'],  # trailing\n    link_jobs = -4,\n    append = config_items(warnings = ('-Wall',)),\n    extra = {'k': [True, None]},\n)\n",
		)
		.expect("accepted");
	}

	#[test]
	fn nesting_beyond_the_limit_is_an_error() {
		let inside = format!("{}{}", "[".repeat(MAX_NESTING - 1), "]".repeat(MAX_NESTING - 1));
		check(&format!("cc_config(optimize = {inside})")).expect("at the limit");

		let deep = format!(
			"cc_config(optimize = {}{})",
			"[".repeat(200_000),
			"]".repeat(200_000)
		);
		let err = check(&deep).unwrap_err();
		assert_eq!(err.kind, ParseErrorKind::TooDeep);
		assert_eq!(err.span, Span::new(1, 21 + MAX_NESTING));
	}

	#[test]
	fn operator_chains_are_rejected() {
		let err = check("link_config(link_jobs = 1 + 2)").unwrap_err();
		assert!(matches!(err.kind, ParseErrorKind::UnsupportedToken(_)));
		assert_eq!(err.span, Span::new(1, 27));

		assert!(check(&format!("x(a = {}1)", "-".repeat(1_000))).is_err());
		assert!(check("x(a = 1 - 2)").is_err());
		assert!(check("x(a = b.c)").is_err());
	}

	#[test]
	fn chained_calls_and_subscripts_are_rejected() {
		assert!(check("f()()").is_err());
		assert!(check("x(a = b[0])").is_err());
		assert!(check("x(a = 'ab'[0])").is_err());
	}
}
