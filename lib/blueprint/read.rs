use super::eat::eat_token;
use super::error::ReadError;
use super::{BuildConfig, BuildTarget};
use crate::error::{AddLocationToResult, ErrorWithLocation, Location};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::num::NonZeroU32;
use std::path::Path;

fn read_bytes(file_name: &Path) -> Result<Vec<u8>, ReadError> {
	let mut bytes = Vec::new();
	File::open(file_name)
		.and_then(|f| BufReader::new(f).read_to_end(&mut bytes))
		.map_err(|error| ReadError::IoError {
			file_name: file_name.to_owned(),
			error,
		})?;
	Ok(bytes)
}

/// Read and parse a `Blueprint.bp` file.
///
/// Only fails if the file can't be read. Lines and tokens that aren't
/// understood are skipped, and bytes that aren't valid UTF-8 are replaced by
/// `U+FFFD`.
///
/// A `SRC` or `DEP` at the very end of a line adds nothing: no empty path or
/// name is added for it.
pub fn read(file_name: &Path) -> Result<BuildConfig, ErrorWithLocation<ReadError>> {
	let source = read_bytes(file_name).err_at(Location::UNKNOWN)?;
	Ok(read_from(&source))
}

/// [`read()`], but with the source given directly instead of read from a file.
pub fn read_from(source: &[u8]) -> BuildConfig {
	lines(source)
		.zip(1u32..)
		.fold(BuildConfig::new(), |config, (line, n)| {
			read_line(config, &String::from_utf8_lossy(line), NonZeroU32::new(n))
		})
}

// Splits on '\n'. A trailing '\r' is left in, and eaten as whitespace later.
fn lines(source: &[u8]) -> impl Iterator<Item = &[u8]> {
	let mut rest = source;
	std::iter::from_fn(move || {
		if rest.is_empty() {
			return None;
		}
		let end = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
		let line = &rest[..end];
		rest = &rest[(end + 1).min(rest.len())..];
		Some(line)
	})
}

fn read_line(mut config: BuildConfig, mut line: &str, n: Option<NonZeroU32>) -> BuildConfig {
	match eat_token(&mut line) {
		Some("CPP_VERSION") => {
			if let Some(standard) = eat_token(&mut line) {
				config.language_standard = standard.to_string();
			}
		}
		Some("TARGET") => {
			let mut target = BuildTarget::new(eat_token(&mut line).unwrap_or(""));
			target.line = n;
			while let Some(token) = eat_token(&mut line) {
				let list = match token {
					"SRC" => &mut target.sources,
					"DEP" => &mut target.dependencies,
					_ => {
						debug!(
							"Line {}: Ignoring unknown token {:?}",
							n.map_or(0, NonZeroU32::get),
							token
						);
						continue;
					}
				};
				// A keyword at the end of the line adds nothing.
				if let Some(value) = eat_token(&mut line) {
					list.push(value.to_string());
				}
			}
			config.targets.push(target);
		}
		_ => (),
	}
	config
}
