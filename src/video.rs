/// Video ID extraction from YouTube watch URLs
use url::Url;

use crate::error::PopupError;

/// Query parameter carrying the video ID on a watch page
const VIDEO_PARAM: &str = "v";

/// Extract the video ID from a tab URL
///
/// Algorithm:
/// 1. Parse the URL (a malformed URL is an error)
/// 2. Take the first `v` query parameter, form-decoded
/// 3. An empty value counts as missing
///
/// Examples:
/// - https://www.youtube.com/watch?v=ABC123 → Some("ABC123")
/// - https://www.youtube.com/watch?list=PL1&v=ABC123 → Some("ABC123")
/// - https://www.youtube.com/feed/subscriptions → None
/// - https://youtu.be/ABC123 → None (no `v` parameter)
pub fn extract_video_id(url: &str) -> Result<Option<String>, PopupError> {
    let parsed = Url::parse(url)?;

    let video_id = parsed
        .query_pairs()
        .find(|(key, _)| *key == VIDEO_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty());

    Ok(video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id_watch_url() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=ABC123").unwrap(),
            Some("ABC123".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap(),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_param_not_first() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PL123&index=2&v=XYZ").unwrap(),
            Some("XYZ".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_first_of_duplicates() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=first&v=second").unwrap(),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_decodes_value() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=a%2Db+c").unwrap(),
            Some("a-b c".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_missing() {
        assert_eq!(extract_video_id("https://www.youtube.com/").unwrap(), None);
        assert_eq!(extract_video_id("https://youtu.be/ABC123").unwrap(), None);
        assert_eq!(extract_video_id("https://www.google.com/search?q=rust").unwrap(), None);
        assert_eq!(extract_video_id("chrome://extensions/").unwrap(), None);
    }

    #[test]
    fn test_extract_video_id_empty_value() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=").unwrap(), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v").unwrap(), None);
    }

    #[test]
    fn test_extract_video_id_malformed_url() {
        assert!(matches!(extract_video_id(""), Err(PopupError::InvalidUrl(_))));
        assert!(matches!(extract_video_id("not-a-url"), Err(PopupError::InvalidUrl(_))));
    }
}
