//! In-memory result of loading configuration layers.

use std::fmt::Write;
use std::ops::Index;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::SchemaError;
use crate::schema::SectionKind;
use crate::value::Value;

mod record;

pub(crate) use record::check_value;
pub use record::SettingRecord;

/// Mapping from section to its settings. Every known section is present,
/// pre-populated with schema defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
	sections: IndexMap<SectionKind, SettingRecord>,
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl Registry {
	/// A registry holding only defaults, equal to loading an empty file.
	pub fn new() -> Self {
		let sections = SectionKind::ALL
			.into_iter()
			.map(|kind| (kind, SettingRecord::with_defaults(kind)))
			.collect();
		Self { sections }
	}

	pub fn section(&self, kind: SectionKind) -> &SettingRecord {
		&self.sections[&kind]
	}

	pub fn sections(&self) -> impl Iterator<Item = &SettingRecord> {
		self.sections.values()
	}

	pub fn get(&self, kind: SectionKind, option: &str) -> Option<&Value> {
		self.section(kind).get(option)
	}

	/// Look an option up by section id or call name, e.g. `("link", "link_jobs")`
	/// or `("link_config", "link_jobs")`.
	pub fn lookup(&self, section: &str, option: &str) -> Option<&Value> {
		let kind = section.parse::<SectionKind>().ok()?;
		self.get(kind, option)
	}

	/// Replace an option's value; the last assignment wins.
	pub fn set(
		&mut self,
		kind: SectionKind,
		option: &str,
		value: impl Into<Value>,
	) -> Result<(), SchemaError> {
		self.record_mut(kind).set(option, value.into())
	}

	/// Append `values` to a list option, keeping existing entries first.
	/// Duplicates are kept.
	pub fn append<I, S>(&mut self, kind: SectionKind, option: &str, values: I) -> Result<(), SchemaError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let values = values.into_iter().map(Into::into).collect();
		self.record_mut(kind).append(option, values)
	}

	fn record_mut(&mut self, kind: SectionKind) -> &mut SettingRecord {
		self.sections
			.entry(kind)
			.or_insert_with(|| SettingRecord::with_defaults(kind))
	}

	/// Render the registry as configuration source.
	///
	/// Loading the returned text yields a registry equal to `self`.
	pub fn to_source(&self) -> String {
		self.render(self.sections())
	}

	/// Render a single section as configuration source.
	pub fn section_source(&self, kind: SectionKind) -> String {
		self.render(std::iter::once(self.section(kind)))
	}

	fn render<'a>(&self, records: impl Iterator<Item = &'a SettingRecord>) -> String {
		let mut out = String::new();
		for (index, record) in records.enumerate() {
			if index > 0 {
				out.push('\n');
			}
			let _ = writeln!(out, "{}(", record.kind().call_name());
			for (name, value) in record.iter() {
				let _ = writeln!(out, "    {name} = {value},");
			}
			out.push_str(")\n");
		}
		out
	}
}

impl Index<&str> for Registry {
	type Output = SettingRecord;

	/// Index by section id or call name. Panics on unknown sections.
	fn index(&self, section: &str) -> &SettingRecord {
		match section.parse::<SectionKind>() {
			Ok(kind) => self.section(kind),
			Err(err) => panic!("{err}"),
		}
	}
}

impl Serialize for Registry {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.sections.len()))?;
		for (kind, record) in &self.sections {
			map.serialize_entry(kind.id(), record)?;
		}
		map.end()
	}
}
