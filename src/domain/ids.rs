//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for host identifiers. Each type
//! ensures type safety and provides validation for format compliance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sequence name newtype wrapper
///
/// Represents the display name of a timeline sequence as reported by the
/// host. Display names may contain characters that are invalid in
/// filenames; use [`SequenceName::clean`] before building paths.
///
/// # Examples
///
/// ```
/// use encoda::domain::ids::SequenceName;
/// use std::str::FromStr;
///
/// let name = SequenceName::from_str("My:Seq/Test").unwrap();
/// assert_eq!(name.as_str(), "My:Seq/Test");
/// assert_eq!(name.clean(), "My_Seq_Test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceName(String);

impl SequenceName {
    /// Creates a new SequenceName from a string
    ///
    /// # Arguments
    ///
    /// * `name` - The sequence display name
    ///
    /// # Returns
    ///
    /// Returns `Ok(SequenceName)` if the name is non-empty, `Err` otherwise
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Sequence name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the display name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name with filename-invalid characters replaced by `_`
    pub fn clean(&self) -> String {
        crate::core::naming::sanitize::clean_sequence_name(&self.0)
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SequenceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SequenceName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SequenceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encode job identifier newtype wrapper
///
/// Returned by the host when a sequence is queued on the encoder. The format
/// is host-defined and treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(String);

impl JobId {
    /// Creates a new JobId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Job ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the job ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_name_valid() {
        let name = SequenceName::new("Edit v2").unwrap();
        assert_eq!(name.as_str(), "Edit v2");
        assert_eq!(name.to_string(), "Edit v2");
    }

    #[test]
    fn test_sequence_name_empty_rejected() {
        assert!(SequenceName::new("").is_err());
        assert!(SequenceName::new("   ").is_err());
    }

    #[test]
    fn test_sequence_name_clean() {
        let name = SequenceName::new("My:Seq/Test").unwrap();
        assert_eq!(name.clean(), "My_Seq_Test");
    }

    #[test]
    fn test_sequence_name_from_str() {
        let name = SequenceName::from_str("Main Timeline").unwrap();
        assert_eq!(name.as_str(), "Main Timeline");
    }

    #[test]
    fn test_job_id_valid() {
        let id = JobId::new("job-42").unwrap();
        assert_eq!(id.as_str(), "job-42");
    }

    #[test]
    fn test_job_id_empty_rejected() {
        assert!(JobId::new("").is_err());
    }

    #[test]
    fn test_sequence_name_serde_roundtrip() {
        let name = SequenceName::new("Edit").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        let back: SequenceName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, back);
    }
}
