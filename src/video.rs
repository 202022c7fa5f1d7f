//! Video Link Parsing
//!
//! Pure helpers for recognizing YouTube links in stored song URLs and
//! building embed/thumbnail URLs from the extracted id.

/// URL shapes that carry a video id directly after them
const ID_PREFIXES: &[&str] = &["youtube.com/watch?v=", "youtu.be/"];

/// Length of a YouTube video id
const ID_LEN: usize = 11;

/// Extract the 11-character video id from a watch or short-link URL.
///
/// Returns `None` for anything that is not one of the two recognized
/// shapes, including ids shorter than 11 characters. Characters past the
/// 11th do not invalidate the match; the id is the first 11.
pub fn video_id(url: &str) -> Option<&str> {
    let trimmed = url.trim();
    let mut best: Option<(usize, &str)> = None;
    for prefix in ID_PREFIXES {
        let mut search_from = 0;
        while let Some(rel) = trimmed[search_from..].find(prefix) {
            let at = search_from + rel;
            let rest = &trimmed[at + prefix.len()..];
            if let Some(id) = take_id(rest) {
                if best.map_or(true, |(pos, _)| at < pos) {
                    best = Some((at, id));
                }
                break;
            }
            search_from = at + prefix.len();
        }
    }
    best.map(|(_, id)| id)
}

/// First 11 characters if they are all id-class characters
fn take_id(rest: &str) -> Option<&str> {
    let bytes = rest.as_bytes();
    if bytes.len() < ID_LEN {
        return None;
    }
    // id-class bytes are ASCII, so the slice below lands on a char boundary
    if bytes[..ID_LEN]
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        Some(&rest[..ID_LEN])
    } else {
        None
    }
}

/// Autoplaying embed URL for the inline modal player
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}?autoplay=1")
}

/// Thumbnail image URL for the current-favorite card
pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_watch_and_short_links() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_trailing_params() {
        assert_eq!(
            video_id("  https://youtu.be/dQw4w9WgXcQ  "),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn rejects_non_matching_urls() {
        assert_eq!(video_id(""), None);
        assert_eq!(video_id("https://example.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(video_id("https://vimeo.com/12345678901"), None);
        // id too short
        assert_eq!(video_id("https://youtu.be/short"), None);
        assert_eq!(video_id("https://www.youtube.com/watch?v="), None);
    }

    #[test]
    fn id_stops_at_eleven_characters() {
        // a 12th id-class character does not extend the id
        assert_eq!(
            video_id("https://youtu.be/dQw4w9WgXcQZ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn builds_embed_and_thumbnail_urls() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"
        );
        assert_eq!(
            thumbnail_url("dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }
}
