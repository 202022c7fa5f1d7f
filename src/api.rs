//! Remote Content Source
//!
//! Thin PostgREST client for the hosted table store. Kept separate from the
//! view components so rendering logic never touches the network directly:
//! the surface is read-many (ordered) and read-one-by-key, nothing else.
//! No retries, no caching; every page load fetches fresh.

use std::fmt;

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::SiteConfig;

/// Column projections, one per collection
pub const POST_COLUMNS: &str = "id,title,created_at,body";
pub const SONG_COLUMNS: &str = "song_name,author,link,note,created_at";

/// Collection (table) names in the remote store
pub const BLOG_TABLE: &str = "Blogs";
pub const JOURNAL_TABLE: &str = "Journal";
pub const SONG_TABLE: &str = "FavoriteSong";

/// Characters left intact by `encodeURIComponent`
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use inside a query string
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_SET).to_string()
}

/// A failed read against the remote store. Always user-presentable; the
/// components render `message` into their error placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    message: String,
}

impl ApiError {
    fn new(message: impl Into<String>) -> ApiError {
        ApiError {
            message: message.into(),
        }
    }

    /// The error's message, or the caller's generic fallback when a
    /// non-conforming response produced an empty one
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.is_empty() {
            fallback
        } else {
            &self.message
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Error body PostgREST returns on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Handle on one Supabase project's REST endpoint
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    anon_key: String,
}

impl Client {
    /// Build a client from resolved site configuration
    pub fn from_config(config: &SiteConfig) -> Result<Client, ApiError> {
        match (&config.supabase_url, &config.supabase_anon_key) {
            (Some(url), Some(key)) => Ok(Client {
                base_url: url.trim_end_matches('/').to_string(),
                anon_key: key.clone(),
            }),
            _ => Err(ApiError::new("Content store is not configured.")),
        }
    }

    /// Fetch all rows of `table`, newest first
    pub async fn list<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(table, &list_query(columns));
        self.fetch_rows(&url).await
    }

    /// Fetch at most one row of `table` by primary key. A missing row is a
    /// normal outcome, not an error.
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        id: &str,
    ) -> Result<Option<T>, ApiError> {
        let url = self.endpoint(table, &by_id_query(columns, id));
        let rows: Vec<T> = self.fetch_rows(&url).await?;
        Ok(rows.into_iter().next())
    }

    fn endpoint(&self, table: &str, query: &str) -> String {
        format!("{}/rest/v1/{}?{}", self.base_url, table, query)
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ApiError> {
        let response = Request::get(url)
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::new(e.to_string()))?;

        if !response.ok() {
            return Err(response_error(response).await);
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ApiError::new(e.to_string()))
    }
}

/// Pull the PostgREST error message out of a failed response, falling back
/// to the HTTP status when the body is not the expected shape.
async fn response_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let message = match response.text().await {
        Ok(body) => error_message_from_body(&body),
        Err(_) => None,
    };
    ApiError::new(message.unwrap_or_else(|| format!("Request failed with status {status}")))
}

fn error_message_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|m| !m.is_empty())
}

fn list_query(columns: &str) -> String {
    format!("select={columns}&order=created_at.desc")
}

fn by_id_query(columns: &str, id: &str) -> String {
    format!("select={columns}&id=eq.{}&limit=1", encode_component(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_orders_by_creation_descending() {
        assert_eq!(
            list_query(POST_COLUMNS),
            "select=id,title,created_at,body&order=created_at.desc"
        );
    }

    #[test]
    fn by_id_query_filters_on_primary_key() {
        assert_eq!(
            by_id_query(POST_COLUMNS, "42"),
            "select=id,title,created_at,body&id=eq.42&limit=1"
        );
    }

    #[test]
    fn ids_are_percent_encoded_into_the_filter() {
        assert_eq!(
            by_id_query(POST_COLUMNS, "a b&c"),
            "select=id,title,created_at,body&id=eq.a%20b%26c&limit=1"
        );
    }

    #[test]
    fn encode_component_matches_encode_uri_component() {
        assert_eq!(encode_component("abc-123_~.!*'()"), "abc-123_~.!*'()");
        assert_eq!(encode_component("a/b?c=d"), "a%2Fb%3Fc%3Dd");
    }

    #[test]
    fn message_or_falls_back_only_when_empty() {
        assert_eq!(
            ApiError::new("boom").message_or("Could not load posts."),
            "boom"
        );
        assert_eq!(
            ApiError::new("").message_or("Could not load posts."),
            "Could not load posts."
        );
    }

    #[test]
    fn error_body_message_is_extracted() {
        assert_eq!(
            error_message_from_body(r#"{"message":"relation does not exist"}"#),
            Some("relation does not exist".to_string())
        );
        assert_eq!(error_message_from_body(r#"{"message":""}"#), None);
        assert_eq!(error_message_from_body("not json"), None);
    }

    #[test]
    fn client_requires_url_and_key() {
        let config = SiteConfig {
            supabase_url: Some("https://xyz.supabase.co/".into()),
            supabase_anon_key: Some("anon".into()),
            contact_endpoint: None,
        };
        let client = Client::from_config(&config).unwrap();
        assert_eq!(
            client.endpoint(BLOG_TABLE, "select=id"),
            "https://xyz.supabase.co/rest/v1/Blogs?select=id"
        );

        assert!(Client::from_config(&SiteConfig::default()).is_err());
    }
}
