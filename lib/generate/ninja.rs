//! Writing `build.ninja` files.
//!
//! All targets share a single `cpp` rule. Dependencies between targets are
//! not written; only `Makefile`s use them.

use super::RenderSettings;
use crate::blueprint::BuildConfig;
use std::io::{Error, Write};

/// The version written as `ninja_required_version`.
pub const REQUIRED_VERSION: &str = "1.10";

/// Write `config` as a `build.ninja` file.
pub fn write_to(
	config: &BuildConfig,
	settings: &RenderSettings,
	out: &mut dyn Write,
) -> Result<(), Error> {
	writeln!(out, "ninja_required_version = {}", REQUIRED_VERSION)?;
	writeln!(out)?;

	writeln!(out, "rule cpp")?;
	writeln!(
		out,
		"  command = {} -std={} -o $out $in",
		settings.compiler, config.language_standard
	)?;
	writeln!(out)?;

	for target in &config.targets {
		write!(out, "build {}: cpp", target.name)?;
		for source in &target.sources {
			write!(out, " {}", settings.source(source))?;
		}
		writeln!(out)?;
		writeln!(out, "  description = Building {}", target.name)?;
		writeln!(out)?;
	}

	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::blueprint::read_from;

	fn render(source: &str, settings: &RenderSettings) -> String {
		let config = read_from(source.as_bytes());
		let mut out = Vec::new();
		write_to(&config, settings, &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn single_target() {
		let out = render(
			"TARGET app SRC main.cpp SRC util.cpp DEP libcore\n",
			&RenderSettings::new(),
		);
		assert_eq!(
			out,
			"ninja_required_version = 1.10\n\
			 \n\
			 rule cpp\n\
			 \x20 command = g++ -std=c++14 -o $out $in\n\
			 \n\
			 build app: cpp main.cpp util.cpp\n\
			 \x20 description = Building app\n\
			 \n"
		);
		assert!(!out.contains("libcore"));
	}

	#[test]
	fn order_standard_and_prefix() {
		let settings = RenderSettings {
			path_prefix: "../".to_string(),
			compiler: "clang++".to_string(),
		};
		let out = render(
			"CPP_VERSION c++11\nTARGET b SRC z.cpp SRC a.cpp\nTARGET a\nCPP_VERSION c++20\n",
			&settings,
		);
		let lines: Vec<&str> = out.lines().collect();
		assert_eq!(lines[3], "  command = clang++ -std=c++20 -o $out $in");
		assert_eq!(lines[5], "build b: cpp ../z.cpp ../a.cpp");
		assert_eq!(lines[6], "  description = Building b");
		assert_eq!(lines[8], "build a: cpp");
		assert_eq!(lines[9], "  description = Building a");
		assert_eq!(lines.len(), 11);
	}

	#[test]
	fn no_targets() {
		assert_eq!(
			render("", &RenderSettings::new()),
			"ninja_required_version = 1.10\n\nrule cpp\n  command = g++ -std=c++14 -o $out $in\n\n"
		);
	}
}
