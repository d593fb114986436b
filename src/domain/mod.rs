//! Domain models and types for Encoda.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`SequenceName`], [`JobId`])
//! - **Export models** ([`ExportTarget`], [`VersionResolution`])
//! - **Error types** ([`EncodaError`], [`HostError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Encoda uses the newtype pattern for identifiers to keep raw host strings
//! out of path construction:
//!
//! ```rust
//! use encoda::domain::SequenceName;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let name = SequenceName::new("My:Seq/Test")?;
//! assert_eq!(name.clean(), "My_Seq_Test");
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, EncodaError>`]:
//!
//! ```rust
//! use encoda::domain::{EncodaError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = encoda::config::load_config("encoda.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod target;

// Re-export commonly used types for convenience
pub use errors::{EncodaError, HostError};
pub use ids::{JobId, SequenceName};
pub use result::Result;
pub use target::{ExportTarget, VersionResolution};
