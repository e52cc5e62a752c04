//! Writing `Makefile`s.
//!
//! Every target becomes a goal which depends on its sources and on its
//! dependencies. The dependencies are also passed to the compiler, as they
//! are written in the blueprint.

use super::RenderSettings;
use crate::blueprint::{BuildConfig, BuildTarget};
use std::io::{Error, Write};

/// Write `config` as a `Makefile`, with an `all` goal building every target.
pub fn write_to(
	config: &BuildConfig,
	settings: &RenderSettings,
	out: &mut dyn Write,
) -> Result<(), Error> {
	write!(out, "all:")?;
	for target in &config.targets {
		write!(out, " {}", target.name)?;
	}
	writeln!(out)?;
	writeln!(out)?;

	let n = config.targets.len();
	for (i, target) in config.targets.iter().enumerate() {
		write!(out, "{}:", target.name)?;
		write_inputs(target, settings, out)?;
		writeln!(out)?;

		write!(
			out,
			"\t@echo \"Building {} [{}/{}]\" && {} -std={} -o {}",
			target.name,
			i + 1,
			n,
			settings.compiler,
			config.language_standard,
			target.name
		)?;
		write_inputs(target, settings, out)?;
		writeln!(out)?;
		writeln!(out)?;
	}

	Ok(())
}

// The sources (with prefix), followed by the dependencies (without), each
// preceded by a space.
fn write_inputs(
	target: &BuildTarget,
	settings: &RenderSettings,
	out: &mut dyn Write,
) -> Result<(), Error> {
	for source in &target.sources {
		write!(out, " {}", settings.source(source))?;
	}
	for dependency in &target.dependencies {
		write!(out, " {}", dependency)?;
	}
	Ok(())
}
