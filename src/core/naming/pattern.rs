//! Filename token-pattern rendering
//!
//! A naming pattern is a string template with `{...}` placeholders resolved
//! at export time:
//!
//! | Token | Replacement |
//! |---|---|
//! | `{V}`, `{VV}`, `{VVV}`, ... | version, zero-padded to the run length of `V` characters |
//! | `{DATE}` | current local date, `YYYY-MM-DD` |
//! | `{TIME}` | current local time, `HH-MM` (24-hour) |
//! | `{SEQ}` | sanitized sequence name |
//!
//! Token letters are matched case-insensitively; braces are literal.
//! Unrecognized tokens are left verbatim. Rendering is a pure function of
//! (pattern, version, sequence name, clock) — [`render_pattern_at`] takes an
//! explicit timestamp so tests can freeze the clock.

use chrono::{Local, NaiveDateTime};
use regex::{NoExpand, Regex};

/// Render a naming pattern against the current local time
///
/// # Examples
///
/// ```
/// use encoda::core::naming::pattern::render_pattern;
///
/// assert_eq!(render_pattern("{SEQ}_V{VV}", 3, "Edit"), "Edit_V03");
/// ```
pub fn render_pattern(pattern: &str, version: u32, sequence_name: &str) -> String {
    render_pattern_at(pattern, version, sequence_name, Local::now().naive_local())
}

/// Render a naming pattern against an explicit timestamp
///
/// Deterministic given fixed arguments. Padding widens but never truncates:
/// `{V}` with version 100 renders as `100`.
pub fn render_pattern_at(
    pattern: &str,
    version: u32,
    sequence_name: &str,
    now: NaiveDateTime,
) -> String {
    let version_re = Regex::new(r"\{[Vv]+\}").expect("version token regex is valid");
    let date_re = Regex::new(r"(?i)\{DATE\}").expect("date token regex is valid");
    let time_re = Regex::new(r"(?i)\{TIME\}").expect("time token regex is valid");
    let seq_re = Regex::new(r"(?i)\{SEQ\}").expect("seq token regex is valid");

    // Each version token pads independently to its own run length.
    let rendered = version_re.replace_all(pattern, |caps: &regex::Captures<'_>| {
        let width = caps[0].len() - 2;
        format!("{version:0width$}")
    });

    let rendered = date_re.replace_all(&rendered, now.format("%Y-%m-%d").to_string().as_str());
    let rendered = time_re.replace_all(&rendered, now.format("%H-%M").to_string().as_str());

    // The sequence name is substituted last and literally, so a name that
    // happens to contain `{V}` or `$1` is not expanded further.
    seq_re
        .replace_all(&rendered, NoExpand(sequence_name))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test_case("{SEQ}_V{V}", 3, "Edit", "Edit_V3"; "single v no padding")]
    #[test_case("{SEQ}_V{VV}", 3, "Edit", "Edit_V03"; "double v pads to two")]
    #[test_case("{SEQ}_V{VVV}", 3, "Edit", "Edit_V003"; "triple v pads to three")]
    #[test_case("{V}", 100, "X", "100"; "padding never truncates")]
    #[test_case("{v}", 7, "X", "7"; "lowercase v token")]
    #[test_case("{Vv}", 7, "X", "07"; "mixed case v token")]
    #[test_case("{VV}_{VVV}", 4, "X", "04_004"; "multiple version tokens pad independently")]
    fn test_version_token(pattern: &str, version: u32, seq: &str, expected: &str) {
        assert_eq!(render_pattern_at(pattern, version, seq, fixed_now()), expected);
    }

    #[test]
    fn test_date_and_time_tokens() {
        assert_eq!(
            render_pattern_at("{SEQ}_{DATE}_{TIME}", 1, "Edit", fixed_now()),
            "Edit_2024-03-07_09-05"
        );
    }

    #[test]
    fn test_tokens_case_insensitive() {
        assert_eq!(
            render_pattern_at("{seq}_{date}_{time}", 1, "Edit", fixed_now()),
            "Edit_2024-03-07_09-05"
        );
    }

    #[test]
    fn test_unrecognized_tokens_left_verbatim() {
        assert_eq!(
            render_pattern_at("{SEQ}_{CAMERA}_{V}", 2, "Edit", fixed_now()),
            "Edit_{CAMERA}_2"
        );
    }

    #[test]
    fn test_rendering_is_idempotent_with_fixed_clock() {
        let a = render_pattern_at("{SEQ}_V{VV}_{DATE}_{TIME}", 9, "Edit", fixed_now());
        let b = render_pattern_at("{SEQ}_V{VV}_{DATE}_{TIME}", 9, "Edit", fixed_now());
        assert_eq!(a, b);
    }

    #[test]
    fn test_sequence_name_substituted_literally() {
        // A name containing token syntax must not be expanded again.
        assert_eq!(
            render_pattern_at("{SEQ}_V{V}", 2, "Promo {DATE}", fixed_now()),
            "Promo {DATE}_V2"
        );
    }

    #[test]
    fn test_sequence_name_with_dollar_sign() {
        assert_eq!(
            render_pattern_at("{SEQ}_V{V}", 1, "Q4 $ales", fixed_now()),
            "Q4 $ales_V1"
        );
    }

    #[test]
    fn test_pattern_without_tokens() {
        assert_eq!(render_pattern_at("master", 5, "Edit", fixed_now()), "master");
    }

    #[test]
    fn test_default_pattern_shape() {
        assert_eq!(
            render_pattern_at("{SEQ}_V{V}", 12, "Edit", fixed_now()),
            "Edit_V12"
        );
    }
}
