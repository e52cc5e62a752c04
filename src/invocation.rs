use blueprint::generate::{Format, UnsupportedFormat};
use std::path::PathBuf;

/// The file read from the project directory.
pub const BLUEPRINT_FILE_NAME: &str = "Blueprint.bp";

/// Build files generated for a project directory are written in a build
/// directory inside that project, so sources are one level up.
pub const PROJECT_PATH_PREFIX: &str = "../";

/// What to read, and what to write where.
#[derive(Debug, PartialEq)]
pub struct Invocation {
	pub input: PathBuf,
	pub format: Format,
	pub output: PathBuf,
	pub path_prefix: &'static str,
}

#[derive(Debug, PartialEq)]
pub enum InvocationError {
	/// Wrong number of arguments.
	Usage,
	UnsupportedFormat(UnsupportedFormat),
}

impl From<UnsupportedFormat> for InvocationError {
	fn from(src: UnsupportedFormat) -> Self {
		InvocationError::UnsupportedFormat(src)
	}
}

impl Invocation {
	/// Interpret the positional arguments, which are either
	/// `<input-file> <format> <output-file>`, or `<format> <directory>`.
	pub fn from_args(args: &[String]) -> Result<Self, InvocationError> {
		match args {
			[input, format, output] => Ok(Invocation {
				input: input.into(),
				format: format.parse()?,
				output: output.into(),
				path_prefix: "",
			}),
			[format, directory] => {
				let format: Format = format.parse()?;
				Ok(Invocation {
					input: PathBuf::from(directory).join(BLUEPRINT_FILE_NAME),
					format,
					output: format.default_file_name().into(),
					path_prefix: PROJECT_PATH_PREFIX,
				})
			}
			_ => Err(InvocationError::Usage),
		}
	}
}
