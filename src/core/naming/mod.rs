//! Filename resolution
//!
//! Leaf component with no host dependencies: sanitizes sequence names,
//! renders token patterns into filenames, and scans output folders for the
//! next free version number.
//!
//! # Modules
//!
//! - [`sanitize`] - filename-invalid character replacement
//! - [`pattern`] - `{V...}`/`{DATE}`/`{TIME}`/`{SEQ}` token rendering
//! - [`resolver`] - `_V<digits>` directory scan
//!
//! # Example
//!
//! ```no_run
//! use encoda::core::naming::{pattern, resolver, sanitize};
//! use std::path::Path;
//!
//! # fn example() -> encoda::domain::Result<()> {
//! let base = sanitize::clean_sequence_name("My:Seq");
//! let version = resolver::resolve_next_version(Path::new("/exports"), &base)?;
//! let filename = pattern::render_pattern("{SEQ}_V{VV}", version, &base);
//! # Ok(())
//! # }
//! ```

pub mod pattern;
pub mod resolver;
pub mod sanitize;

pub use pattern::{render_pattern, render_pattern_at};
pub use resolver::resolve_next_version;
pub use sanitize::clean_sequence_name;
