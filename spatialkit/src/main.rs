mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Convert a geometry between WKT, WKB and GeoJSON
	Convert(tools::convert::Subcommand),

	/// Validate a geometry and show what it consists of
	Probe(tools::probe::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	match &cli.command {
		Commands::Convert(arguments) => tools::convert::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(&cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["spatialkit"]).unwrap_err().to_string();
		assert!(err.starts_with("Validated geometry values with WKT, WKB and GeoJSON codecs."));
		assert!(err.contains("\nUsage: spatialkit [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["spatialkit", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("spatialkit "));
	}

	#[test]
	fn convert_subcommand() {
		let err = run_command(vec!["spatialkit", "convert"]).unwrap_err().to_string();
		assert!(err.starts_with("Convert a geometry between WKT, WKB and GeoJSON"));
	}

	#[test]
	fn probe_subcommand() {
		let err = run_command(vec!["spatialkit", "probe"]).unwrap_err().to_string();
		assert!(err.starts_with("Validate a geometry and show what it consists of"));
	}
}
