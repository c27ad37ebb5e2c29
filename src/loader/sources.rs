use std::path::{Path, PathBuf};

/// Marks the workspace root and holds the workspace configuration.
pub const ROOT_FILE: &str = "BLADE_ROOT";
/// Personal overrides next to [`ROOT_FILE`], usually kept out of version control.
pub const LOCAL_FILE: &str = "BLADE_ROOT.local";
/// Per-user configuration in the home directory.
pub const USER_FILE: &str = ".bladerc";

/// One configuration file in the load sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
	pub path: PathBuf,
	/// Required layers fail the load when missing; optional ones are skipped.
	pub required: bool,
}

/// Ordered configuration layers, lowest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layers {
	layers: Vec<Layer>,
}

impl Layers {
	/// The standard sequence for a workspace: the user's `~/.bladerc` (when
	/// given), then `BLADE_ROOT`, then `BLADE_ROOT.local`.
	pub fn discover(workspace_root: &Path, user_file: Option<PathBuf>) -> Self {
		let mut layers = Self::default();
		if let Some(path) = user_file {
			layers.push_optional(path);
		}
		layers.push_required(workspace_root.join(ROOT_FILE));
		layers.push_optional(workspace_root.join(LOCAL_FILE));
		layers
	}

	pub fn push_required(&mut self, path: impl Into<PathBuf>) {
		self.layers.push(Layer {
			path: path.into(),
			required: true,
		});
	}

	pub fn push_optional(&mut self, path: impl Into<PathBuf>) {
		self.layers.push(Layer {
			path: path.into(),
			required: false,
		});
	}

	pub fn iter(&self) -> impl Iterator<Item = &Layer> {
		self.layers.iter()
	}

	pub fn len(&self) -> usize {
		self.layers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.layers.is_empty()
	}
}

/// Walk up from `start` to the nearest directory containing [`ROOT_FILE`].
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
	start
		.ancestors()
		.find(|dir| dir.join(ROOT_FILE).is_file())
		.map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn workspace_root_is_found_from_a_subdirectory() {
		let dir = tempdir().unwrap();
		let nested = dir.path().join("common/base");
		fs::create_dir_all(&nested).unwrap();
		fs::write(dir.path().join(ROOT_FILE), "").unwrap();

		assert_eq!(find_workspace_root(&nested), Some(dir.path().to_path_buf()));
	}

	#[test]
	fn no_workspace_root_without_marker() {
		let dir = tempdir().unwrap();
		assert_eq!(find_workspace_root(dir.path()), None);
	}

	#[test]
	fn discovered_layers_follow_precedence_order() {
		let root = Path::new("/work");
		let layers = Layers::discover(root, Some(PathBuf::from("/home/dev/.bladerc")));
		let summary: Vec<_> = layers
			.iter()
			.map(|layer| (layer.path.clone(), layer.required))
			.collect();
		assert_eq!(
			summary,
			vec![
				(PathBuf::from("/home/dev/.bladerc"), false),
				(PathBuf::from("/work/BLADE_ROOT"), true),
				(PathBuf::from("/work/BLADE_ROOT.local"), false),
			]
		);
	}
}
