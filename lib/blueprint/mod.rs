//! Everything related to the `Blueprint.bp` file format.
//!
//! > `Blueprint.bp` file → [`read()`] → [`BuildConfig`]
//!
//! A blueprint is read line by line. Only the first token of a line decides
//! what the line means:
//!
//! - `CPP_VERSION <std>` sets the language standard. The last one wins.
//! - `TARGET <name> [SRC <path>] [DEP <name>] ...` declares a target, with
//!   all of its sources and dependencies on that same line.
//!
//! Everything else is ignored, as are unknown tokens on a `TARGET` line.

mod eat;
mod read;

pub mod check;
pub mod error;

pub use self::read::read;
pub use self::read::read_from;

use std::num::NonZeroU32;

/// The language standard used when there is no `CPP_VERSION` line.
pub const DEFAULT_LANGUAGE_STANDARD: &str = "c++14";

/// The result of reading a `Blueprint.bp` file: what to build, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
	/// The value passed to the compiler's `-std=`.
	pub language_standard: String,
	/// All the targets, in the order they were declared.
	pub targets: Vec<BuildTarget>,
}

/// A named thing to build from a list of sources.
///
/// The direct result of a single `TARGET` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
	/// The name of the target, which is also the name of the output.
	///
	/// Not necessarily unique, and empty if the `TARGET` line had no name.
	pub name: String,
	/// The source files, in the order of the `SRC` tokens.
	pub sources: Vec<String>,
	/// The dependencies, in the order of the `DEP` tokens.
	///
	/// These are not checked to refer to other targets.
	pub dependencies: Vec<String>,
	/// The line on which the target was declared, if known.
	pub line: Option<NonZeroU32>,
}

impl BuildConfig {
	/// Create an empty configuration with the default language standard.
	pub fn new() -> Self {
		BuildConfig {
			language_standard: DEFAULT_LANGUAGE_STANDARD.to_string(),
			targets: Vec::new(),
		}
	}
}

impl Default for BuildConfig {
	fn default() -> Self {
		Self::new()
	}
}

impl BuildTarget {
	/// Create a target without any sources or dependencies.
	pub fn new(name: impl Into<String>) -> Self {
		BuildTarget {
			name: name.into(),
			sources: Vec::new(),
			dependencies: Vec::new(),
			line: None,
		}
	}
}
