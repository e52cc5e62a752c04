//! This library crate contains all the re-usable parts of `blueprint`, a
//! generator of `build.ninja` files and `Makefile`s from a small build
//! description.
//!
//! # File formats
//!
//! - **`Blueprint.bp` files** (input)
//!
//!   The [`blueprint`] module reads build descriptions, which look like this:
//!
//!   ```text
//!   CPP_VERSION c++17
//!   TARGET core SRC core.cpp
//!   TARGET app SRC main.cpp SRC util.cpp DEP core
//!   ```
//!
//!   > `Blueprint.bp` file → [`read()`][blueprint::read()] → [`BuildConfig`][blueprint::BuildConfig]
//!
//! - **`build.ninja` files and `Makefile`s** (output)
//!
//!   The [`generate`] module renders a [`BuildConfig`][blueprint::BuildConfig]
//!   in one of the supported [`Format`][generate::Format]s.
//!
//! # Checking
//!
//! Generation never validates the build description. The
//! [`check`][blueprint::check::check] function can be used to look for
//! duplicate targets, unknown dependencies and dependency cycles.

pub mod blueprint;
pub mod error;
pub mod generate;
