//! Rendering a [`BuildConfig`] as a `build.ninja` file or a `Makefile`.
//!
//! > [`BuildConfig`] → [`write()`] → `build.ninja` or `Makefile`

pub mod makefile;
pub mod ninja;

use crate::blueprint::BuildConfig;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// The kind of build file to generate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Format {
	/// A `build.ninja` file.
	Ninja,
	/// A `Makefile` for (GNU) make.
	Makefile,
}

/// The error when asking for a [`Format`] that doesn't exist.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnsupportedFormat(pub String);

/// How the rendered build file should invoke the compiler.
#[derive(Clone, Debug)]
pub struct RenderSettings {
	/// Prepended to every source path, but not to dependencies.
	///
	/// Empty when the build file is written next to the sources, and `../`
	/// when it's written in a build directory inside the project.
	pub path_prefix: String,
	/// The compiler command, e.g. `g++`.
	pub compiler: String,
}

impl Format {
	/// All supported formats.
	pub const ALL: &'static [Format] = &[Format::Ninja, Format::Makefile];

	/// The name of the format, as given on the command line.
	pub fn name(self) -> &'static str {
		match self {
			Format::Ninja => "Ninja",
			Format::Makefile => "Makefile",
		}
	}

	/// The conventional file name of a build file in this format.
	pub fn default_file_name(self) -> &'static str {
		match self {
			Format::Ninja => "build.ninja",
			Format::Makefile => "Makefile",
		}
	}

	/// The names of all formats, separated by commas: `Ninja, Makefile`.
	pub fn supported() -> String {
		let names: Vec<&str> = Format::ALL.iter().map(|f| f.name()).collect();
		names.join(", ")
	}
}

impl FromStr for Format {
	type Err = UnsupportedFormat;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Format::ALL
			.iter()
			.copied()
			.find(|f| f.name() == s)
			.ok_or_else(|| UnsupportedFormat(s.to_string()))
	}
}

impl fmt::Display for Format {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl fmt::Display for UnsupportedFormat {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Unsupported output format: {}", self.0)
	}
}

impl Error for UnsupportedFormat {}

impl RenderSettings {
	/// No path prefix, and `g++` as the compiler.
	pub fn new() -> Self {
		RenderSettings {
			path_prefix: String::new(),
			compiler: "g++".to_string(),
		}
	}

	/// The source path as it should appear in the build file.
	fn source<'a>(&'a self, path: &'a str) -> impl fmt::Display + 'a {
		Prefixed(&self.path_prefix, path)
	}
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self::new()
	}
}

struct Prefixed<'a>(&'a str, &'a str);

impl<'a> fmt::Display for Prefixed<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{}", self.0, self.1)
	}
}

/// Render `config` in the given format.
pub fn write_to(
	config: &BuildConfig,
	format: Format,
	settings: &RenderSettings,
	out: &mut dyn Write,
) -> Result<(), std::io::Error> {
	match format {
		Format::Ninja => ninja::write_to(config, settings, out),
		Format::Makefile => makefile::write_to(config, settings, out),
	}
}

/// Render `config` in the given format to a file.
///
/// The file is created, or truncated if it already exists.
pub fn write(
	config: &BuildConfig,
	format: Format,
	settings: &RenderSettings,
	file_name: impl AsRef<Path>,
) -> Result<(), std::io::Error> {
	let file_name = file_name.as_ref();
	let error = |e: std::io::Error| {
		std::io::Error::new(
			e.kind(),
			format!("Unable to write {:?}: {}", file_name, e),
		)
	};
	let mut file = BufWriter::new(File::create(file_name).map_err(error)?);
	write_to(config, format, settings, &mut file).map_err(error)?;
	file.flush().map_err(error)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::blueprint::read_from;

	#[test]
	fn format_names() {
		assert_eq!("Ninja".parse::<Format>(), Ok(Format::Ninja));
		assert_eq!("Makefile".parse::<Format>(), Ok(Format::Makefile));
		assert_eq!(
			"ninja".parse::<Format>(),
			Err(UnsupportedFormat("ninja".to_string()))
		);
		assert_eq!(Format::Ninja.default_file_name(), "build.ninja");
		assert_eq!(Format::Makefile.default_file_name(), "Makefile");
	}

	#[test]
	fn unsupported_format() {
		let e = "Xcode".parse::<Format>().unwrap_err();
		assert_eq!(e.to_string(), "Unsupported output format: Xcode");
		assert_eq!(Format::supported(), "Ninja, Makefile");
	}

	#[test]
	fn deterministic() {
		let source = b"CPP_VERSION c++17\nTARGET b SRC b.cpp\nTARGET a SRC a.cpp DEP b\n";
		let config = read_from(source);
		for &format in Format::ALL {
			let mut first = Vec::new();
			let mut second = Vec::new();
			write_to(&config, format, &RenderSettings::new(), &mut first).unwrap();
			write_to(&config, format, &RenderSettings::new(), &mut second).unwrap();
			assert_eq!(first, second);
		}
	}

	#[test]
	fn write_file() -> Result<(), std::io::Error> {
		let file_name = std::env::temp_dir().join("blueprint-test-build.ninja");
		let config = read_from(b"TARGET app SRC main.cpp\n");
		write(&config, Format::Ninja, &RenderSettings::new(), &file_name)?;
		let written = std::fs::read_to_string(&file_name)?;
		std::fs::remove_file(&file_name)?;
		assert!(written.starts_with("ninja_required_version = 1.10\n"));
		assert!(written.contains("build app: cpp main.cpp\n"));
		Ok(())
	}

	#[test]
	fn unwritable_file() {
		let file_name = std::env::temp_dir()
			.join("blueprint-test-no-such-dir")
			.join("Makefile");
		let e = write(
			&BuildConfig::new(),
			Format::Makefile,
			&RenderSettings::new(),
			&file_name,
		)
		.unwrap_err();
		assert!(e.to_string().starts_with("Unable to write"));
	}
}
