//! Reading configuration layers into a [`Registry`].
//!
//! Layers are evaluated in order onto one registry: later layers override
//! earlier assignments while `append=` records extend whatever the earlier
//! layers left behind.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use blade_conf_syntax::Statement;
use log::{debug, info};

use crate::error::{LoadError, Location};
use crate::registry::Registry;

mod eval;
mod sources;

pub use sources::{LOCAL_FILE, Layer, Layers, ROOT_FILE, USER_FILE, find_workspace_root};

use eval::Evaluator;

/// How unknown option names inside a known section are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
	/// Report a warning and ignore the option.
	#[default]
	Lenient,
	/// Fail the load.
	Strict,
}

/// A non-fatal problem found while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
	pub at: Location,
	pub message: String,
}

impl fmt::Display for Warning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.at, self.message)
	}
}

/// The loaded registry together with any warnings raised on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
	pub registry: Registry,
	pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
	strictness: Strictness,
}

impl Loader {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn strict() -> Self {
		Self::with_strictness(Strictness::Strict)
	}

	pub fn with_strictness(strictness: Strictness) -> Self {
		Self { strictness }
	}

	pub fn strictness(&self) -> Strictness {
		self.strictness
	}

	/// Load a single file on top of the schema defaults.
	pub fn load(&self, path: impl AsRef<Path>) -> Result<Registry, LoadError> {
		self.load_report(path).map(|report| report.registry)
	}

	pub fn load_report(&self, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
		let mut report = LoadReport::default();
		self.apply_file(&mut report, path.as_ref())?;
		Ok(report)
	}

	/// Load in-memory source. `origin` names the source in diagnostics.
	pub fn load_str(&self, source: &str, origin: &str) -> Result<Registry, LoadError> {
		let mut report = LoadReport::default();
		self.apply_source(&mut report, source, origin)?;
		Ok(report.registry)
	}

	/// Load every path in order onto one registry. All paths must exist.
	pub fn load_layers<I, P>(&self, paths: I) -> Result<Registry, LoadError>
	where
		I: IntoIterator<Item = P>,
		P: AsRef<Path>,
	{
		let mut report = LoadReport::default();
		for path in paths {
			self.apply_file(&mut report, path.as_ref())?;
		}
		Ok(report.registry)
	}

	/// Load a discovered layer plan, skipping optional layers that are absent.
	pub fn load_plan(&self, layers: &Layers) -> Result<LoadReport, LoadError> {
		let mut report = LoadReport::default();
		for layer in layers.iter() {
			if !layer.required && !layer.path.exists() {
				debug!("optional layer {} not present, skipping", layer.path.display());
				continue;
			}
			self.apply_file(&mut report, &layer.path)?;
		}
		Ok(report)
	}

	/// Evaluate the file at `path` onto `report`.
	pub fn apply_file(&self, report: &mut LoadReport, path: &Path) -> Result<(), LoadError> {
		let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		self.apply_source(report, &source, &path.display().to_string())?;
		info!("loaded configuration layer {}", path.display());
		Ok(())
	}

	/// Evaluate configuration source onto `report`, one section call at a time
	/// in source order.
	pub fn apply_source(
		&self,
		report: &mut LoadReport,
		source: &str,
		origin: &str,
	) -> Result<(), LoadError> {
		let module = blade_conf_syntax::parse(source).map_err(|source| LoadError::Syntax {
			origin: origin.to_string(),
			source,
		})?;

		let mut evaluator = Evaluator {
			origin,
			strictness: self.strictness,
			warnings: &mut report.warnings,
		};
		for statement in &module.statements {
			match statement {
				Statement::Doc(doc) => {
					debug!("{origin}:{}: skipping documentation block", doc.span);
				}
				Statement::Call(call) => {
					evaluator.evaluate(call)?.apply(&mut report.registry)?;
				}
			}
		}
		Ok(())
	}
}

/// Whether `err` is a missing-file error, as opposed to a malformed layer.
pub fn is_not_found(err: &LoadError) -> bool {
	matches!(err, LoadError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
}
