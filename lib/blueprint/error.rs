//! Errors that can occur while reading or checking `Blueprint.bp` files.

use std::error::Error;
use std::fmt;

/// An error while reading a `Blueprint.bp` file.
///
/// Syntax problems are not errors: unknown lines and tokens are skipped, and
/// invalid UTF-8 is replaced.
#[derive(Debug)]
pub enum ReadError {
	/// A problem while trying to open or read a file.
	IoError {
		file_name: std::path::PathBuf,
		error: std::io::Error,
	},
}

impl fmt::Display for ReadError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ReadError::IoError { file_name, error } => {
				write!(f, "Unable to open file {:?}: {}", file_name, error)
			}
		}
	}
}

impl Error for ReadError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			ReadError::IoError { error, .. } => Some(error),
		}
	}
}

/// A problem found by [`check()`][super::check::check].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckError {
	/// A target with this name was already declared.
	DuplicateTarget(String),
	/// A `DEP` refers to a target which doesn't exist.
	UnknownDependency { target: String, dependency: String },
	/// Targets depend on each other in a cycle.
	///
	/// Starts and ends with the same target: `a -> b -> a` is `["a", "b", "a"]`.
	DependencyCycle(Vec<String>),
}

impl fmt::Display for CheckError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			CheckError::DuplicateTarget(n) => write!(f, "Duplicate target: {}", n),
			CheckError::UnknownDependency { target, dependency } => {
				write!(f, "Target {} depends on unknown target {}", target, dependency)
			}
			CheckError::DependencyCycle(cycle) => {
				write!(f, "Dependency cycle: {}", cycle.join(" -> "))
			}
		}
	}
}

impl Error for CheckError {}
