use crate::span::Span;

/// A parsed configuration file: top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
	pub statements: Vec<Statement>,
}

impl Module {
	/// Iterate over the executable section calls, skipping inert blocks.
	pub fn calls(&self) -> impl Iterator<Item = &Call> {
		self.statements.iter().filter_map(|statement| match statement {
			Statement::Call(call) => Some(call),
			Statement::Doc(_) => None,
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
	/// `name(key=value, ...)`
	Call(Call),
	/// A bare string literal. Used for documentation and commented-out
	/// example blocks; it has no effect when evaluated.
	Doc(DocString),
}

impl Statement {
	pub fn span(&self) -> Span {
		match self {
			Statement::Call(call) => call.span,
			Statement::Doc(doc) => doc.span,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocString {
	pub text: String,
	pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
	pub name: String,
	pub span: Span,
	pub args: Vec<Argument>,
}

impl Call {
	pub fn keyword_args(&self) -> impl Iterator<Item = (&Keyword, &Expr)> {
		self.args
			.iter()
			.filter_map(|arg| arg.keyword.as_ref().map(|keyword| (keyword, &arg.value)))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
	/// `None` for positional arguments.
	pub keyword: Option<Keyword>,
	pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
	pub name: String,
	pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
	pub kind: ExprKind,
	pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
	Str(String),
	Int(i64),
	Bool(bool),
	None,
	List(Vec<Expr>),
	Tuple(Vec<Expr>),
	Dict(Vec<(Expr, Expr)>),
	Call(Call),
	Name(String),
}

impl ExprKind {
	/// Short type name used in evaluation diagnostics.
	pub fn describe(&self) -> &'static str {
		match self {
			ExprKind::Str(_) => "string",
			ExprKind::Int(_) => "integer",
			ExprKind::Bool(_) => "boolean",
			ExprKind::None => "None",
			ExprKind::List(_) => "list",
			ExprKind::Tuple(_) => "tuple",
			ExprKind::Dict(_) => "dict",
			ExprKind::Call(_) => "call",
			ExprKind::Name(_) => "name",
		}
	}
}
