//! Frontend Models
//!
//! Data structures matching remote table rows. Everything here is read-only
//! from this crate's perspective; rows are created and edited elsewhere.

use serde::{Deserialize, Serialize};

/// A blog or journal entry row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub created_at: Option<String>,
}

impl Post {
    /// Display title, substituting the placeholder for missing/blank titles
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Untitled",
        }
    }
}

/// A favorite-song row. The most recently created row is the current
/// favorite; the rest form the playlist history. That is positional,
/// there is no is-current flag in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteSong {
    pub song_name: Option<String>,
    pub author: Option<String>,
    pub link: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<String>,
}

impl FavoriteSong {
    pub fn display_name(&self) -> &str {
        match self.song_name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => "Untitled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_title_falls_back_to_untitled() {
        let post = Post {
            id: "1".into(),
            title: None,
            body: None,
            created_at: None,
        };
        assert_eq!(post.display_title(), "Untitled");

        let post = Post {
            title: Some(String::new()),
            ..post
        };
        assert_eq!(post.display_title(), "Untitled");

        let post = Post {
            title: Some("Hello".into()),
            ..post
        };
        assert_eq!(post.display_title(), "Hello");
    }

    #[test]
    fn song_rows_deserialize_with_missing_fields() {
        let song: FavoriteSong =
            serde_json::from_str(r#"{"song_name":"Karma Police"}"#).unwrap();
        assert_eq!(song.display_name(), "Karma Police");
        assert!(song.link.is_none());
        assert!(song.created_at.is_none());
    }
}
