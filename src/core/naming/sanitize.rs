//! Sequence name sanitization
//!
//! Host sequence names are display strings and may contain characters that
//! are invalid in filenames on at least one supported OS. Every path the
//! exporter builds goes through [`clean_sequence_name`] first.

/// Characters that are invalid in filenames on Windows; the superset is
/// applied on every OS so exports stay portable across machines.
const INVALID_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace filename-invalid characters with `_`
///
/// # Examples
///
/// ```
/// use encoda::core::naming::sanitize::clean_sequence_name;
///
/// assert_eq!(clean_sequence_name("My:Seq/Test"), "My_Seq_Test");
/// assert_eq!(clean_sequence_name("Final Cut"), "Final Cut");
/// ```
pub fn clean_sequence_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if INVALID_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}
