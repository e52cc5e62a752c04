mod invocation;
mod logger;

use self::invocation::{Invocation, InvocationError};
use self::logger::Logger;
use blueprint::blueprint::check::check;
use blueprint::blueprint::read;
use blueprint::generate::{write, Format, RenderSettings};
use log::{debug, error};
use std::process::exit;
use structopt::StructOpt;

/// Generate a build.ninja file or a Makefile from a Blueprint.bp file.
#[derive(StructOpt)]
#[structopt(name = "blueprint")]
struct Options {
	/// Either `<input-file> <output-format> <output-file>`, or
	/// `<output-format> <directory>` to read `<directory>/Blueprint.bp` and
	/// write `build.ninja` or `Makefile` in the current directory.
	/// Formats: Ninja, Makefile.
	args: Vec<String>,

	/// The compiler to invoke in the generated build file.
	#[structopt(long = "compiler", default_value = "g++")]
	compiler: String,

	/// Look for duplicate targets, unknown dependencies and dependency
	/// cycles, and fail if there are any.
	#[structopt(long)]
	check: bool,

	/// Enable debug messages.
	#[structopt(long)]
	debug: bool,
}

fn main() {
	log::set_logger(&Logger).unwrap();
	log::set_max_level(log::LevelFilter::Warn);

	let opt = Options::from_args();

	if opt.debug {
		log::set_max_level(log::LevelFilter::Debug);
		debug!("Debug messages enabled.");
	}

	let invocation = Invocation::from_args(&opt.args).unwrap_or_else(|e| {
		match e {
			InvocationError::Usage => {
				error!("Usage: blueprint <input-file> <output-format> <output-file>");
				error!("   or: blueprint <output-format> <directory>");
			}
			InvocationError::UnsupportedFormat(e) => {
				error!("{}", e);
				error!("Supported formats are {}", Format::supported());
			}
		}
		exit(1);
	});

	let config = read(&invocation.input).unwrap_or_else(|e| {
		error!("{}", e);
		exit(1);
	});

	debug!(
		"Read {} targets from {:?} (standard {})",
		config.targets.len(),
		invocation.input,
		config.language_standard
	);

	if opt.check {
		let problems = check(&config, &invocation.input);
		for problem in &problems {
			error!("{}", problem);
		}
		if !problems.is_empty() {
			exit(1);
		}
	}

	let settings = RenderSettings {
		path_prefix: invocation.path_prefix.to_string(),
		compiler: opt.compiler,
	};

	debug!(
		"Writing {} to {:?} with path prefix {:?}",
		invocation.format, invocation.output, settings.path_prefix
	);

	write(&config, invocation.format, &settings, &invocation.output).unwrap_or_else(|e| {
		error!("{}", e);
		exit(1);
	});

	println!(
		"Build file generated successfully: {}",
		invocation.output.display()
	);
}
