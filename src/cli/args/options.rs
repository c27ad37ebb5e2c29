use std::str::FromStr;

use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// Configuration syntax or plain text.
	#[default]
	Plain,
	Json,
}

impl OutputFormat {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			OutputFormat::Plain => "plain",
			OutputFormat::Json => "json",
		}
	}
}

impl FromStr for OutputFormat {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"plain" => Ok(OutputFormat::Plain),
			"json" => Ok(OutputFormat::Json),
			_ => Err("expected `plain` or `json`".to_string()),
		}
	}
}
