//! Story item as served by the upstream item endpoint.

use serde::{Deserialize, Serialize};

/// A Hacker News item.
///
/// Only `id`, `title` and `url` drive any logic here; the remaining fields
/// are carried through untouched so clients see what upstream sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kids: Vec<u64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

impl Story {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: None,
            by: None,
            score: None,
            time: None,
            descendants: None,
            kids: Vec::new(),
            item_type: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Stories without a non-empty URL are excluded from every listing.
    pub fn has_link(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Case-insensitive substring match against the title.
    ///
    /// `needle` is expected to be lowercased already so batch callers pay
    /// for that once.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upstream_item() {
        let raw = r#"{
            "by": "dhouston",
            "descendants": 71,
            "id": 8863,
            "kids": [8952, 9224],
            "score": 111,
            "time": 1175714200,
            "title": "My YC app: Dropbox - Throw away your USB drive",
            "type": "story",
            "url": "http://www.getdropbox.com/u/2/screencast.html"
        }"#;
        let story: Story = serde_json::from_str(raw).unwrap();
        assert_eq!(story.id, 8863);
        assert_eq!(story.by.as_deref(), Some("dhouston"));
        assert_eq!(story.kids, vec![8952, 9224]);
        assert_eq!(story.item_type.as_deref(), Some("story"));
        assert!(story.has_link());
    }

    #[test]
    fn test_missing_and_empty_url_are_unlinked() {
        let ask: Story = serde_json::from_str(r#"{"id": 1, "title": "Ask HN: anything"}"#).unwrap();
        assert!(ask.url.is_none());
        assert!(!ask.has_link());

        let empty = Story::new(2, "Empty").with_url("");
        assert!(!empty.has_link());
    }

    #[test]
    fn test_title_match_ignores_case() {
        let story = Story::new(1, "Hello World").with_url("http://a");
        assert!(story.title_contains("hello"));
        assert!(story.title_contains("o w"));
        assert!(!story.title_contains("goodbye"));
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let story = Story::new(3, "Minimal").with_url("http://c");
        let json = serde_json::to_value(&story).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "title": "Minimal", "url": "http://c"})
        );
    }
}
