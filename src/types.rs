//! Core wire types for content-hub
//!
//! Two families of types live here:
//! - The records returned to API callers ([`VideoRecord`], [`PdfRecord`],
//!   [`AggregateResult`])
//! - The raw remote collection schema ([`ItemsPage`], [`RawItem`], ...),
//!   modeled with every nested field optional because the remote service
//!   omits fields freely

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Placeholder used for fields the remote service does not report
/// (duration, size, pages).
pub const UNKNOWN_FIELD: &str = "N/A";

/// Source label attached to every emitted record.
pub const SOURCE_LABEL: &str = "Unacademy";

/// A playable lecture video with its reconstructed direct URL
///
/// Produced only when the remote playback URL carried a recognizable
/// embedded lesson token (see [`crate::normalize`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VideoRecord {
    /// Lecture title ("No Title" when the remote item has none)
    pub title: String,
    /// Direct media-host URL for the raw video
    pub url: String,
    /// Thumbnail URL, when the remote item provides one
    pub thumbnail: Option<String>,
    /// Video duration; the listing endpoint does not report it
    pub duration: String,
    /// Source label identifying the remote service
    pub source: String,
    /// Teacher display name (may be empty)
    pub teacher: String,
    /// Scheduled date string as reported by the remote service (may be empty)
    pub date: String,
}

/// A slide-PDF attached to a lecture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PdfRecord {
    /// Lecture title ("No Title" when the remote item has none)
    pub title: String,
    /// Annotated slide-PDF URL as supplied by the remote service
    pub url: String,
    /// Thumbnail URL, when the remote item provides one
    pub thumbnail: Option<String>,
    /// File size; the listing endpoint does not report it
    pub size: String,
    /// Page count; the listing endpoint does not report it
    pub pages: String,
    /// Source label identifying the remote service
    pub source: String,
    /// Teacher display name (may be empty)
    pub teacher: String,
    /// Scheduled date string as reported by the remote service (may be empty)
    pub date: String,
}

/// Combined output of one aggregation request
///
/// Records appear in uid order, then page order, then item order.
/// No deduplication is performed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AggregateResult {
    /// All videos extracted across every requested collection
    pub videos: Vec<VideoRecord>,
    /// All slide-PDFs extracted across every requested collection
    pub pdfs: Vec<PdfRecord>,
}

impl AggregateResult {
    /// Append another result, preserving its internal order.
    pub fn merge(&mut self, other: AggregateResult) {
        self.videos.extend(other.videos);
        self.pdfs.extend(other.pdfs);
    }

    /// Total number of records of both kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len() + self.pdfs.len()
    }

    /// True when no records were aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty() && self.pdfs.is_empty()
    }
}

// ============================================================================
// Raw remote schema
// ============================================================================
//
// The remote listing endpoint returns loosely structured JSON. Every field
// below is optional so that deserialization never fails on a missing or null
// field; normalization decides what each absence means.

/// One page of the remote listing endpoint: `{"results": [...], "next": url|null}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemsPage {
    /// Items on this page
    #[serde(default)]
    pub results: Vec<RawItem>,
    /// Absolute URL of the next page; `None` ends pagination
    #[serde(default)]
    pub next: Option<String>,
}

/// One entry of a remote collection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    /// The item payload; the listing wraps each entry in a `value` object
    #[serde(default)]
    pub value: Option<ItemValue>,
}

/// Payload of a collection entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemValue {
    /// Lecture title
    #[serde(default)]
    pub title: Option<String>,
    /// Thumbnail URL
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Nested live-class record; `null` for non-lecture entries
    #[serde(default)]
    pub live_class: Option<LiveClass>,
}

/// Scheduling, authorship and media links of one lecture
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveClass {
    /// Lecture author
    #[serde(default)]
    pub author: Option<Author>,
    /// Scheduled time as an opaque date string
    #[serde(default)]
    pub live_at: Option<String>,
    /// Playback URL carrying the embedded lesson token as a `uid=` query
    /// parameter
    #[serde(default)]
    pub video_url: Option<String>,
    /// Slide-PDF reference
    #[serde(default)]
    pub slides_pdf: Option<SlidesPdf>,
}

/// Lecture author name parts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    /// Author first name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Author last name
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Slide-PDF variants attached to a lecture
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlidesPdf {
    /// URL of the annotated PDF; empty string means no usable PDF
    #[serde(default)]
    pub with_annotation: Option<String>,
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_page_tolerates_missing_fields() {
        let page: ItemsPage = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
        assert!(page.next.is_none());
    }

    #[test]
    fn items_page_tolerates_null_next() {
        let page: ItemsPage = serde_json::from_str(r#"{"results": [], "next": null}"#).unwrap();
        assert!(page.next.is_none());
    }

    #[test]
    fn raw_item_tolerates_null_live_class() {
        let item: RawItem =
            serde_json::from_str(r#"{"value": {"title": "t", "live_class": null}}"#).unwrap();
        let value = item.value.unwrap();
        assert_eq!(value.title.as_deref(), Some("t"));
        assert!(value.live_class.is_none());
    }

    #[test]
    fn raw_item_ignores_unknown_fields() {
        let item: RawItem = serde_json::from_str(
            r#"{"value": {"title": "t", "rank": 3, "extra": {"x": 1}}, "type": "item"}"#,
        )
        .unwrap();
        assert_eq!(item.value.unwrap().title.as_deref(), Some("t"));
    }

    #[test]
    fn aggregate_result_serializes_both_sequences() {
        let result = AggregateResult::default();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"videos": [], "pdfs": []}));
    }

    #[test]
    fn aggregate_result_merge_preserves_order() {
        let video = |title: &str| VideoRecord {
            title: title.to_string(),
            url: String::new(),
            thumbnail: None,
            duration: UNKNOWN_FIELD.to_string(),
            source: SOURCE_LABEL.to_string(),
            teacher: String::new(),
            date: String::new(),
        };

        let mut a = AggregateResult {
            videos: vec![video("first")],
            pdfs: vec![],
        };
        a.merge(AggregateResult {
            videos: vec![video("second"), video("third")],
            pdfs: vec![],
        });

        let titles: Vec<&str> = a.videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
        assert_eq!(a.len(), 3);
        assert!(!a.is_empty());
    }
}
