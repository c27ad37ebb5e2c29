use std::fmt::Write;

use blade_conf::Strictness;

use super::ResolvedSettings;
use super::sources::describe;

pub(super) fn format_summary(settings: &ResolvedSettings) -> String {
	let sources = &settings.sources;
	let mut out = String::from("Effective settings:\n");
	let _ = writeln!(
		out,
		"  Search start: {} ({})",
		settings.search_start.display(),
		describe(sources.root.as_ref())
	);
	match &settings.workspace_root {
		Some(root) => {
			let _ = writeln!(out, "  Workspace root: {}", root.display());
		}
		None => {
			let _ = writeln!(out, "  Workspace root: (none found)");
		}
	}
	let _ = writeln!(
		out,
		"  Strict: {} ({})",
		bool_to_word(settings.strictness == Strictness::Strict),
		describe(sources.strict.as_ref())
	);
	let _ = writeln!(
		out,
		"  User configuration: {} ({})",
		bool_to_word(settings.user_config),
		describe(sources.user_config.as_ref())
	);
	let _ = writeln!(
		out,
		"  Output format: {} ({})",
		settings.format.as_str(),
		describe(sources.format.as_ref())
	);
	let _ = write!(out, "  Layers:");
	if settings.layers.is_empty() {
		let _ = write!(out, " (none)");
	}
	let extra_start = settings.layers.len() - settings.extra_files.len().min(settings.layers.len());
	for (index, layer) in settings.layers.iter().enumerate() {
		let presence = if layer.required { "required" } else { "optional" };
		let _ = write!(out, "\n    {} ({presence}", layer.path.display());
		if let Some(extra) = index.checked_sub(extra_start) {
			let _ = write!(out, ", from {}", sources.extra_file_origin(extra));
		}
		out.push(')');
	}
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
