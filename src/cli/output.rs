use std::path::Path;

use anyhow::Result;
use blade_conf::{LoadReport, Registry, SectionKind, Value};
use serde_json::json;
use unicode_width::UnicodeWidthStr;

use super::OutputFormat;

/// Render the effective configuration, or a single section of it.
pub(crate) fn format_show(
	registry: &Registry,
	section: Option<SectionKind>,
	format: OutputFormat,
) -> Result<String> {
	let text = match (format, section) {
		(OutputFormat::Plain, Some(kind)) => registry.section_source(kind),
		(OutputFormat::Plain, None) => registry.to_source(),
		(OutputFormat::Json, Some(kind)) => serde_json::to_string_pretty(registry.section(kind))?,
		(OutputFormat::Json, None) => serde_json::to_string_pretty(registry)?,
	};
	Ok(text.trim_end().to_string())
}

/// Render one option value. Plain output prints strings bare and list items
/// one per line so the result can be fed to shell scripts.
pub(crate) fn format_value(value: &Value, format: OutputFormat) -> Result<String> {
	Ok(match (format, value) {
		(OutputFormat::Json, value) => serde_json::to_string_pretty(value)?,
		(OutputFormat::Plain, Value::Str(text)) => text.clone(),
		(OutputFormat::Plain, Value::List(items)) => items.join("\n"),
		(OutputFormat::Plain, other) => other.to_string(),
	})
}

/// Summarise a load: the layers that were read and any warnings raised.
pub(crate) fn format_check(
	report: &LoadReport,
	loaded: &[&Path],
	format: OutputFormat,
) -> Result<String> {
	match format {
		OutputFormat::Plain => {
			let mut lines: Vec<String> = report
				.warnings
				.iter()
				.map(|warning| format!("warning: {warning}"))
				.collect();
			lines.push(format!(
				"ok: {} {} loaded, {} {}",
				loaded.len(),
				plural(loaded.len(), "layer", "layers"),
				report.warnings.len(),
				plural(report.warnings.len(), "warning", "warnings"),
			));
			Ok(lines.join("\n"))
		}
		OutputFormat::Json => {
			let warnings: Vec<_> = report
				.warnings
				.iter()
				.map(|warning| {
					json!({
						"origin": warning.at.origin,
						"line": warning.at.span.line,
						"column": warning.at.span.column,
						"message": warning.message,
					})
				})
				.collect();
			let layers: Vec<_> = loaded.iter().map(|path| path.display().to_string()).collect();
			let payload = json!({
				"layers": layers,
				"warnings": warnings,
			});
			Ok(serde_json::to_string_pretty(&payload)?)
		}
	}
}

/// Describe every known section with its options, kinds and defaults.
pub(crate) fn format_sections(format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Plain => {
			let mut blocks = Vec::new();
			for kind in SectionKind::ALL {
				let mut block = format!("{}  {}", kind.call_name(), kind.description());
				let name_width = column_width(kind.options().iter().map(|spec| spec.name));
				let kind_width =
					column_width(kind.options().iter().map(|spec| spec.kind.describe()));
				for spec in kind.options() {
					block.push('\n');
					block.push_str("  ");
					block.push_str(&pad(spec.name, name_width));
					block.push_str("  ");
					block.push_str(&pad(spec.kind.describe(), kind_width));
					block.push_str("  ");
					block.push_str(&spec.default_value().to_string());
				}
				blocks.push(block);
			}
			Ok(blocks.join("\n\n"))
		}
		OutputFormat::Json => {
			let sections: Vec<_> = SectionKind::ALL
				.into_iter()
				.map(|kind| {
					let options: Vec<_> = kind
						.options()
						.iter()
						.map(|spec| {
							json!({
								"name": spec.name,
								"kind": spec.kind.describe(),
								"default": spec.default_value(),
							})
						})
						.collect();
					json!({
						"id": kind.id(),
						"call": kind.call_name(),
						"aliases": kind.aliases(),
						"description": kind.description(),
						"options": options,
					})
				})
				.collect();
			Ok(serde_json::to_string_pretty(&sections)?)
		}
	}
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
	cells.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn pad(text: &str, width: usize) -> String {
	let fill = width.saturating_sub(text.width());
	format!("{text}{}", " ".repeat(fill))
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
	if count == 1 { one } else { many }
}
