//! Parser for Blade configuration files.
//!
//! Configuration files (`blade.conf`, `BLADE_ROOT`, `~/.bladerc`) are Python
//! source restricted to a sequence of top-level calls with keyword arguments
//! whose values are literals, lists, tuples, dicts or nested calls. Parsing is
//! delegated to `rustpython-parser`; this crate gates the input to that subset
//! and converts the result into a small syntax tree. Evaluating it against a
//! schema is the job of the `blade-conf` crate.

pub mod ast;
mod error;
mod lower;
mod scan;
mod span;

use rustpython_parser::Parse;
use rustpython_parser::ast::Suite;

pub use ast::{Argument, Call, DocString, Expr, ExprKind, Keyword, Module, Statement};
pub use error::{ParseError, ParseErrorKind};
pub use scan::MAX_NESTING;
pub use span::Span;

use lower::Lowering;
use span::LineIndex;

/// Name handed to the Python parser; callers attach their own origin.
const SOURCE_PATH: &str = "<config>";

/// Parse configuration source text into a [`Module`].
pub fn parse(source: &str) -> Result<Module, ParseError> {
	let lines = LineIndex::new(source);
	scan::check_subset(source, &lines)?;
	let suite = Suite::parse(source, SOURCE_PATH).map_err(|err| {
		ParseError::new(
			ParseErrorKind::Syntax(err.error.to_string()),
			lines.span(err.offset),
		)
	})?;
	Lowering::new(&lines).module(&suite)
}
