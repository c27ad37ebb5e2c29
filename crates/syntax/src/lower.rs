//! Conversion of the Python syntax tree into the configuration [`Module`].

use rustpython_parser::ast::{self, Constant, Ranged, UnaryOp};

use crate::ast::{Argument, Call, DocString, Expr, ExprKind, Keyword, Module, Statement};
use crate::error::{ParseError, ParseErrorKind};
use crate::span::LineIndex;

pub(crate) struct Lowering<'a> {
	lines: &'a LineIndex<'a>,
}

impl<'a> Lowering<'a> {
	pub(crate) fn new(lines: &'a LineIndex<'a>) -> Self {
		Self { lines }
	}

	pub(crate) fn module(&self, suite: &[ast::Stmt]) -> Result<Module, ParseError> {
		let statements = suite
			.iter()
			.map(|statement| self.statement(statement))
			.collect::<Result<_, _>>()?;
		Ok(Module { statements })
	}

	fn statement(&self, statement: &ast::Stmt) -> Result<Statement, ParseError> {
		let ast::Stmt::Expr(ast::StmtExpr { value, .. }) = statement else {
			let what = match statement {
				ast::Stmt::Assign(_) | ast::Stmt::AugAssign(_) => "assignment",
				ast::Stmt::AnnAssign(_) => "annotated assignment",
				_ => "compound",
			};
			return Err(self.error(ParseErrorKind::UnsupportedStatement(what), statement));
		};

		match value.as_ref() {
			ast::Expr::Call(call) => Ok(Statement::Call(self.call(call)?)),
			ast::Expr::Constant(ast::ExprConstant {
				value: Constant::Str(text),
				..
			}) => Ok(Statement::Doc(DocString {
				text: text.clone(),
				span: self.lines.span(value.start()),
			})),
			_ => Err(self.error(ParseErrorKind::UnsupportedStatement("bare value"), value.as_ref())),
		}
	}

	fn call(&self, call: &ast::ExprCall) -> Result<Call, ParseError> {
		let ast::Expr::Name(ast::ExprName { id, .. }) = call.func.as_ref() else {
			return Err(self.error(
				ParseErrorKind::UnsupportedExpression("calling anything but a name"),
				call.func.as_ref(),
			));
		};

		let mut args = Vec::with_capacity(call.args.len() + call.keywords.len());
		for value in &call.args {
			args.push(Argument {
				keyword: None,
				value: self.expr(value)?,
			});
		}
		for keyword in &call.keywords {
			let Some(name) = &keyword.arg else {
				return Err(self.error(
					ParseErrorKind::UnsupportedExpression("`**` argument unpacking"),
					keyword,
				));
			};
			args.push(Argument {
				keyword: Some(Keyword {
					name: name.as_str().to_string(),
					span: self.lines.span(keyword.start()),
				}),
				value: self.expr(&keyword.value)?,
			});
		}

		Ok(Call {
			name: id.as_str().to_string(),
			span: self.lines.span(call.start()),
			args,
		})
	}

	fn expr(&self, expr: &ast::Expr) -> Result<Expr, ParseError> {
		let kind = match expr {
			ast::Expr::Constant(constant) => match &constant.value {
				Constant::Str(text) => ExprKind::Str(text.clone()),
				Constant::Bool(flag) => ExprKind::Bool(*flag),
				Constant::None => ExprKind::None,
				Constant::Int(number) => self.integer(number.to_string(), expr)?,
				_ => {
					return Err(self.error(
						ParseErrorKind::UnsupportedExpression("this kind of literal"),
						expr,
					));
				}
			},
			ast::Expr::UnaryOp(ast::ExprUnaryOp {
				op: UnaryOp::USub,
				operand,
				..
			}) => match operand.as_ref() {
				ast::Expr::Constant(ast::ExprConstant {
					value: Constant::Int(number),
					..
				}) => self.integer(format!("-{number}"), expr)?,
				_ => {
					return Err(self.error(ParseErrorKind::UnsupportedExpression("negation"), expr));
				}
			},
			ast::Expr::List(list) => ExprKind::List(self.exprs(&list.elts)?),
			ast::Expr::Tuple(tuple) => ExprKind::Tuple(self.exprs(&tuple.elts)?),
			ast::Expr::Dict(dict) => {
				let mut entries = Vec::with_capacity(dict.values.len());
				for (key, value) in dict.keys.iter().zip(&dict.values) {
					let Some(key) = key else {
						return Err(self.error(
							ParseErrorKind::UnsupportedExpression("`**` dict unpacking"),
							value,
						));
					};
					entries.push((self.expr(key)?, self.expr(value)?));
				}
				ExprKind::Dict(entries)
			}
			ast::Expr::Call(call) => ExprKind::Call(self.call(call)?),
			ast::Expr::Name(name) => ExprKind::Name(name.id.as_str().to_string()),
			_ => {
				return Err(self.error(ParseErrorKind::UnsupportedExpression("this expression"), expr));
			}
		};
		Ok(Expr {
			kind,
			span: self.lines.span(expr.start()),
		})
	}

	fn exprs(&self, items: &[ast::Expr]) -> Result<Vec<Expr>, ParseError> {
		items.iter().map(|item| self.expr(item)).collect()
	}

	/// Parse the decimal text of an integer literal, sign included, so that
	/// `i64::MIN` is representable.
	fn integer(&self, text: String, at: &ast::Expr) -> Result<ExprKind, ParseError> {
		match text.parse::<i64>() {
			Ok(number) => Ok(ExprKind::Int(number)),
			Err(_) => Err(self.error(ParseErrorKind::IntegerOverflow(text), at)),
		}
	}

	fn error(&self, kind: ParseErrorKind, at: &impl Ranged) -> ParseError {
		ParseError::new(kind, self.lines.span(at.start()))
	}
}
