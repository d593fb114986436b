//! Container extension inference
//!
//! The queue-based export path lets the encoder pick the container from the
//! preset, but the in-process render call does not, so the output path must
//! already carry an extension. It is inferred by keyword-matching the
//! preset's filename, falling back on whether the sequence has video at
//! all.

use std::path::Path;

/// Keyword table checked in order against the lowercased preset filename.
/// First hit wins; more specific container keywords sit above the generic
/// codec ones.
const PRESET_KEYWORDS: [(&str, &str); 16] = [
    ("prores", "mov"),
    ("dnxh", "mov"),
    ("cineform", "mov"),
    ("quicktime", "mov"),
    ("youtube", "mp4"),
    ("vimeo", "mp4"),
    ("twitter", "mp4"),
    ("h.264", "mp4"),
    ("h264", "mp4"),
    ("h.265", "mp4"),
    ("h265", "mp4"),
    ("hevc", "mp4"),
    ("match source", "mp4"),
    ("mp3", "mp3"),
    ("aac", "m4a"),
    ("wav", "wav"),
];

/// Infer the container extension (without dot) for an export
///
/// # Examples
///
/// ```
/// use encoda::core::export::extension::infer_extension;
/// use std::path::Path;
///
/// assert_eq!(infer_extension(Path::new("/p/ProRes 422 HQ.epr"), true), "mov");
/// assert_eq!(infer_extension(Path::new("/p/YouTube 1080p.epr"), true), "mp4");
/// assert_eq!(infer_extension(Path::new("/p/Podcast.epr"), false), "wav");
/// ```
pub fn infer_extension(preset_path: &Path, has_video: bool) -> String {
    let file_name = preset_path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    for (keyword, ext) in PRESET_KEYWORDS {
        if file_name.contains(keyword) {
            return ext.to_string();
        }
    }

    if has_video {
        "mp4".to_string()
    } else {
        "wav".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("ProRes 422 HQ.epr", true, "mov"; "prores yields mov")]
    #[test_case("GoPro CineForm.epr", true, "mov"; "cineform yields mov")]
    #[test_case("YouTube 1080p Full HD.epr", true, "mp4"; "youtube yields mp4")]
    #[test_case("H.264 High Bitrate.epr", true, "mp4"; "h264 yields mp4")]
    #[test_case("HEVC 4K.epr", true, "mp4"; "hevc yields mp4")]
    #[test_case("MP3 192kbps.epr", false, "mp3"; "mp3 preset")]
    #[test_case("AAC Podcast Master.epr", false, "m4a"; "aac preset")]
    #[test_case("WAV 48kHz 16bit.epr", false, "wav"; "wav preset")]
    #[test_case("Delivery Master.epr", true, "mp4"; "no keyword with video falls back to mp4")]
    #[test_case("Delivery Master.epr", false, "wav"; "no keyword without video falls back to wav")]
    fn test_infer_extension(file: &str, has_video: bool, expected: &str) {
        let path = Path::new("/presets").join(file);
        assert_eq!(infer_extension(&path, has_video), expected);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(infer_extension(Path::new("/p/PRORES.epr"), true), "mov");
        assert_eq!(infer_extension(Path::new("/p/youtube.epr"), true), "mp4");
    }

    #[test]
    fn test_empty_path_uses_fallback() {
        assert_eq!(infer_extension(Path::new(""), true), "mp4");
        assert_eq!(infer_extension(Path::new(""), false), "wav");
    }
}
