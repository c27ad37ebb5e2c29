use std::fmt;

/// A 1-based line and column inside configuration source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
	pub line: usize,
	pub column: usize,
}

impl Span {
	pub const fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}
}

impl fmt::Display for Span {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}

/// Maps the parser's byte offsets to [`Span`]s. Columns count characters.
pub(crate) struct LineIndex<'a> {
	source: &'a str,
	starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
	pub(crate) fn new(source: &'a str) -> Self {
		let starts = std::iter::once(0)
			.chain(source.match_indices('\n').map(|(index, _)| index + 1))
			.collect();
		Self { source, starts }
	}

	pub(crate) fn span(&self, offset: impl Into<usize>) -> Span {
		let offset = offset.into().min(self.source.len());
		let line = match self.starts.binary_search(&offset) {
			Ok(line) => line,
			Err(next) => next - 1,
		};
		let start = self.starts[line];
		let column = self
			.source
			.get(start..offset)
			.map_or(offset - start, |text| text.chars().count());
		Span::new(line + 1, column + 1)
	}
}
