mod args;
mod output;

pub(crate) use args::{CliArgs, Command, OutputFormat, parse_cli};
pub(crate) use output::{format_check, format_sections, format_show, format_value};
