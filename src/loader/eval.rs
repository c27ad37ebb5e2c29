//! Evaluation of one section call against its schema.
//!
//! A call is turned into a [`SectionUpdate`] before anything touches the
//! registry, so a call that fails validation leaves no partial update behind.

use blade_conf_syntax::{Call, Expr, ExprKind, Span};
use log::warn;

use crate::error::{LoadError, Location, SchemaError};
use crate::registry::{Registry, check_value};
use crate::schema::{OptionKind, OptionSpec, SectionKind};
use crate::value::Value;

use super::{Strictness, Warning};

/// Keyword introducing the nested append record of a section call.
const APPEND_KEYWORD: &str = "append";
/// Constructor of the append record, `append=config_items(opt=[...])`.
const APPEND_RECORD: &str = "config_items";

struct Assignment {
	option: &'static str,
	value: Value,
	at: Location,
}

struct Append {
	option: &'static str,
	values: Vec<String>,
	at: Location,
}

/// The validated effect of one section call.
pub(super) struct SectionUpdate {
	kind: SectionKind,
	assignments: Vec<Assignment>,
	appends: Vec<Append>,
}

impl SectionUpdate {
	/// Apply plain assignments first, then the appends in source order.
	pub(super) fn apply(self, registry: &mut Registry) -> Result<(), LoadError> {
		for Assignment { option, value, at } in self.assignments {
			registry
				.set(self.kind, option, value)
				.map_err(|source| LoadError::Schema { at, source })?;
		}
		for Append { option, values, at } in self.appends {
			registry
				.append(self.kind, option, values)
				.map_err(|source| LoadError::Schema { at, source })?;
		}
		Ok(())
	}
}

/// Evaluation context for the calls of one layer.
pub(super) struct Evaluator<'a> {
	pub(super) origin: &'a str,
	pub(super) strictness: Strictness,
	pub(super) warnings: &'a mut Vec<Warning>,
}

impl Evaluator<'_> {
	pub(super) fn evaluate(&mut self, call: &Call) -> Result<SectionUpdate, LoadError> {
		let kind = SectionKind::from_call_name(&call.name).ok_or_else(|| {
			LoadError::UnknownSection {
				at: self.at(call.span),
				name: call.name.clone(),
			}
		})?;

		let mut update = SectionUpdate {
			kind,
			assignments: Vec::new(),
			appends: Vec::new(),
		};

		for arg in &call.args {
			let Some(keyword) = &arg.keyword else {
				return Err(self.invalid(
					kind,
					arg.value.span,
					"section calls accept keyword arguments only",
				));
			};

			if keyword.name == APPEND_KEYWORD {
				self.evaluate_append(kind, &arg.value, &mut update.appends)?;
				continue;
			}

			let Some(spec) = self.resolve(kind, &keyword.name, keyword.span)? else {
				continue;
			};
			let value = self.evaluate_value(kind, spec, &arg.value)?;
			update.assignments.push(Assignment {
				option: spec.name,
				value,
				at: self.at(arg.value.span),
			});
		}

		Ok(update)
	}

	fn evaluate_append(
		&mut self,
		kind: SectionKind,
		record: &Expr,
		appends: &mut Vec<Append>,
	) -> Result<(), LoadError> {
		let mut entries: Vec<(&str, Span, &Expr)> = Vec::new();
		match &record.kind {
			ExprKind::Call(call) if call.name == APPEND_RECORD => {
				for arg in &call.args {
					let Some(keyword) = &arg.keyword else {
						return Err(self.invalid(
							kind,
							arg.value.span,
							"config_items accepts keyword arguments only",
						));
					};
					entries.push((keyword.name.as_str(), keyword.span, &arg.value));
				}
			}
			ExprKind::Dict(pairs) => {
				for (key, value) in pairs {
					let ExprKind::Str(name) = &key.kind else {
						return Err(self.invalid(
							kind,
							key.span,
							format!("append keys must be strings, found {}", key.kind.describe()),
						));
					};
					entries.push((name.as_str(), key.span, value));
				}
			}
			other => {
				return Err(self.invalid(
					kind,
					record.span,
					format!(
						"append expects {APPEND_RECORD}(...) or a dict, found {}",
						other.describe()
					),
				));
			}
		}

		for (name, span, value) in entries {
			let Some(spec) = self.resolve(kind, name, span)? else {
				continue;
			};
			if spec.kind != OptionKind::List {
				return Err(LoadError::Schema {
					at: self.at(span),
					source: SchemaError::NotAppendable {
						section: kind,
						option: spec.name,
						kind: spec.kind.describe(),
					},
				});
			}
			let Value::List(values) = self.evaluate_value(kind, spec, value)? else {
				unreachable!("list options evaluate to lists");
			};
			appends.push(Append {
				option: spec.name,
				values,
				at: self.at(value.span),
			});
		}
		Ok(())
	}

	/// Find the schema entry for `option`. Unknown options are fatal in strict
	/// mode and reported as warnings otherwise.
	fn resolve(
		&mut self,
		kind: SectionKind,
		option: &str,
		span: Span,
	) -> Result<Option<&'static OptionSpec>, LoadError> {
		if let Some(spec) = kind.option(option) {
			return Ok(Some(spec));
		}

		let source = SchemaError::UnknownOption {
			section: kind,
			option: option.to_string(),
		};
		let at = self.at(span);
		match self.strictness {
			Strictness::Strict => Err(LoadError::Schema { at, source }),
			Strictness::Lenient => {
				warn!("{at}: {source}, ignored");
				self.warnings.push(Warning {
					at,
					message: source.to_string(),
				});
				Ok(None)
			}
		}
	}

	fn evaluate_value(
		&self,
		kind: SectionKind,
		spec: &OptionSpec,
		expr: &Expr,
	) -> Result<Value, LoadError> {
		let value = match (spec.kind, &expr.kind) {
			(OptionKind::Str | OptionKind::Choice(_), ExprKind::Str(text)) => Value::Str(text.clone()),
			(OptionKind::Bool, ExprKind::Bool(flag)) => Value::Bool(*flag),
			(OptionKind::Int, ExprKind::Int(number)) => Value::Int(*number),
			(OptionKind::List, ExprKind::List(items) | ExprKind::Tuple(items)) => {
				Value::List(self.string_items(kind, spec, items)?)
			}
			(_, found) => {
				return Err(LoadError::Schema {
					at: self.at(expr.span),
					source: SchemaError::TypeMismatch {
						section: kind,
						option: spec.name,
						expected: spec.kind.describe(),
						found: found.describe(),
					},
				});
			}
		};

		check_value(kind, spec, &value).map_err(|source| LoadError::Schema {
			at: self.at(expr.span),
			source,
		})?;
		Ok(value)
	}

	fn string_items(
		&self,
		kind: SectionKind,
		spec: &OptionSpec,
		items: &[Expr],
	) -> Result<Vec<String>, LoadError> {
		items
			.iter()
			.map(|item| match &item.kind {
				ExprKind::Str(text) => Ok(text.clone()),
				other => Err(self.invalid(
					kind,
					item.span,
					format!(
						"items of `{}` must be strings, found {}",
						spec.name,
						other.describe()
					),
				)),
			})
			.collect()
	}

	fn at(&self, span: Span) -> Location {
		Location::new(self.origin, span)
	}

	fn invalid(&self, section: SectionKind, span: Span, reason: impl Into<String>) -> LoadError {
		LoadError::InvalidArgument {
			at: self.at(span),
			section,
			reason: reason.into(),
		}
	}
}
