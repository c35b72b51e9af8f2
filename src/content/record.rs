//! JSON wire form of a post

use serde::{Deserialize, Serialize};

use super::{Post, PostStatus};
use crate::helpers::date::{date_from_timestamp_string, timestamp_string_from_date};

/// A post as exchanged over JSON, with the date encoded as a
/// string-encoded millisecond timestamp.
///
/// Conversion to [`Post`] parses the timestamp; a garbage timestamp
/// yields a post with no date rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostRecord {
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Milliseconds since the Unix epoch, as a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    pub is_page: bool,
}

impl From<Post> for PostRecord {
    fn from(post: Post) -> Self {
        Self {
            key: post.key,
            title: post.title,
            author: post.author,
            date: post.date.as_ref().map(timestamp_string_from_date),
            body: post.body,
            excerpt: post.excerpt,
            image_url: post.image_url,
            category: post.category,
            tags: post.tags,
            status: post.status,
            is_page: post.is_page,
        }
    }
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Self {
            key: record.key,
            title: record.title,
            author: record.author,
            date: record.date.as_deref().and_then(date_from_timestamp_string),
            body: record.body,
            excerpt: record.excerpt,
            image_url: record.image_url,
            category: record.category,
            tags: record.tags,
            status: record.status,
            is_page: record.is_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_record_date_round_trips_through_timestamp_string() {
        let post = Post {
            date: Some(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()),
            ..Post::new("post-1", "Blog post 1")
        };

        let record = PostRecord::from(post.clone());
        assert_eq!(record.date.as_deref(), Some("946684800000"));

        let back = Post::from(record);
        assert_eq!(back.date, post.date);
    }

    #[test]
    fn test_garbage_timestamp_becomes_no_date() {
        let record = PostRecord {
            key: "post-1".to_string(),
            title: "Blog post 1".to_string(),
            date: Some("not-a-timestamp".to_string()),
            ..PostRecord::default()
        };
        let post = Post::from(record);
        assert_eq!(post.date, None);
    }

    #[test]
    fn test_record_deserializes_camel_case_json() {
        let record: PostRecord = serde_json::from_str(
            r#"{"key":"post-1","title":"Blog post 1","imageUrl":"cover.png","isPage":false}"#,
        )
        .unwrap();
        assert_eq!(record.image_url.as_deref(), Some("cover.png"));
        assert!(!record.is_page);
    }
}
