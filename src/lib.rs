//! Loader for Blade build configuration files.
//!
//! A configuration file is a sequence of section calls such as
//! `cc_config(...)` or `link_config(...)`. [`Loader`] evaluates them against
//! the fixed [`schema`] and produces a [`Registry`] keyed by section, with
//! defaults filled in for everything a file leaves unset.
//!
//! ```no_run
//! use blade_conf::{Loader, SectionKind};
//!
//! let registry = Loader::new().load("BLADE_ROOT")?;
//! let jobs = registry.section(SectionKind::Link).int("link_jobs");
//! # Ok::<(), blade_conf::LoadError>(())
//! ```

pub mod app_dirs;
mod error;
pub mod loader;
pub mod logging;
mod registry;
pub mod schema;
mod value;

pub use blade_conf_syntax as syntax;
pub use error::{LoadError, Location, SchemaError};
pub use loader::{LoadReport, Loader, Strictness, Warning};
pub use registry::{Registry, SettingRecord};
pub use schema::{OptionKind, OptionSpec, SectionKind};
pub use value::Value;
