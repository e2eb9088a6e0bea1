//! Per-item extraction and normalization
//!
//! Turns one loosely structured [`RawItem`] into zero, one, or two output
//! records. Every field access tolerates absence: a missing field can only
//! suppress record emission, never fail the item.

use crate::config::RemoteConfig;
use crate::types::{PdfRecord, RawItem, SOURCE_LABEL, UNKNOWN_FIELD, VideoRecord};

/// Title substituted when the remote item has none.
pub const DEFAULT_TITLE: &str = "No Title";

/// Query-parameter marker carrying the embedded lesson token.
const TOKEN_MARKER: &str = "uid=";

/// Records produced from one raw item
#[derive(Debug, Default)]
pub struct NormalizedItem {
    /// Video record, when a direct URL could be reconstructed
    pub video: Option<VideoRecord>,
    /// PDF record, when a non-empty annotated PDF URL was present
    pub pdf: Option<PdfRecord>,
}

/// Normalize one raw collection item
///
/// Rules, in order:
/// 1. Title defaults to "No Title".
/// 2. An absent or null live-class record skips the item entirely.
/// 3. Teacher is the trimmed concatenation of first and last name, each
///    defaulting to empty.
/// 4. A video is emitted only when the playback URL contains the `uid=`
///    marker; the token runs to the next `&` or end of string and is
///    substituted into the media-host template.
/// 5. A PDF is emitted only when `slides_pdf.with_annotation` is a
///    non-empty string.
#[must_use]
pub fn normalize_item(item: &RawItem, remote: &RemoteConfig) -> NormalizedItem {
    let Some(value) = &item.value else {
        return NormalizedItem::default();
    };
    let Some(live_class) = &value.live_class else {
        // Non-lecture entries carry no live class; nothing to extract
        return NormalizedItem::default();
    };

    let title = value
        .title
        .clone()
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let thumbnail = value.thumbnail_url.clone();
    let teacher = teacher_name(live_class.author.as_ref());
    let date = live_class.live_at.clone().unwrap_or_default();

    let video = live_class
        .video_url
        .as_deref()
        .and_then(extract_lesson_token)
        .map(|token| VideoRecord {
            title: title.clone(),
            url: remote.media_url(token),
            thumbnail: thumbnail.clone(),
            duration: UNKNOWN_FIELD.to_string(),
            source: SOURCE_LABEL.to_string(),
            teacher: teacher.clone(),
            date: date.clone(),
        });

    let pdf = live_class
        .slides_pdf
        .as_ref()
        .and_then(|slides| slides.with_annotation.as_deref())
        .filter(|url| !url.is_empty())
        .map(|url| PdfRecord {
            title,
            url: url.to_string(),
            thumbnail,
            size: UNKNOWN_FIELD.to_string(),
            pages: UNKNOWN_FIELD.to_string(),
            source: SOURCE_LABEL.to_string(),
            teacher,
            date,
        });

    NormalizedItem { video, pdf }
}

/// Teacher display name from optional author name parts.
fn teacher_name(author: Option<&crate::types::Author>) -> String {
    let (first, last) = match author {
        Some(author) => (
            author.first_name.as_deref().unwrap_or(""),
            author.last_name.as_deref().unwrap_or(""),
        ),
        None => ("", ""),
    };
    format!("{} {}", first, last).trim().to_string()
}

/// Extract the lesson token embedded in a playback URL
///
/// The token is everything between the first `uid=` and the next `&`, or
/// the end of the string. Returns `None` when the marker is absent, which
/// suppresses the video record for that item.
fn extract_lesson_token(video_url: &str) -> Option<&str> {
    let start = video_url.find(TOKEN_MARKER)? + TOKEN_MARKER.len();
    let rest = &video_url[start..];
    match rest.find('&') {
        Some(end) => Some(&rest[..end]),
        None => Some(rest),
    }
}
