//! Site Configuration
//!
//! Endpoints for the content store and the contact form. Resolved once at
//! startup from, in order: a `window.__PORTFOLIO_CONFIG__` object, `<meta
//! name="portfolio:...">` tags, then compile-time defaults. Missing values
//! are not fatal; fetches against an unconfigured store surface as normal
//! error placeholders.

use serde::Deserialize;
use wasm_bindgen::JsCast;

/// Global object a hosting page may set to override configuration
const WINDOW_CONFIG_KEY: &str = "__PORTFOLIO_CONFIG__";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the Supabase project, e.g. "https://xyz.supabase.co"
    #[serde(default)]
    pub supabase_url: Option<String>,
    /// Anonymous (public) API key for the project
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
    /// Target URL for contact form posts
    #[serde(default)]
    pub contact_endpoint: Option<String>,
}

impl SiteConfig {
    /// Fill any missing field from a lower-priority source
    fn or(self, fallback: SiteConfig) -> SiteConfig {
        SiteConfig {
            supabase_url: self.supabase_url.or(fallback.supabase_url),
            supabase_anon_key: self.supabase_anon_key.or(fallback.supabase_anon_key),
            contact_endpoint: self.contact_endpoint.or(fallback.contact_endpoint),
        }
    }
}

/// Resolve configuration from all sources
pub fn load() -> SiteConfig {
    from_window()
        .unwrap_or_default()
        .or(from_meta_tags())
        .or(compile_time_defaults())
}

fn compile_time_defaults() -> SiteConfig {
    SiteConfig {
        supabase_url: option_env!("PORTFOLIO_SUPABASE_URL").map(str::to_string),
        supabase_anon_key: option_env!("PORTFOLIO_SUPABASE_ANON_KEY").map(str::to_string),
        contact_endpoint: option_env!("PORTFOLIO_CONTACT_ENDPOINT").map(str::to_string),
    }
}

fn from_window() -> Option<SiteConfig> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &WINDOW_CONFIG_KEY.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    serde_wasm_bindgen::from_value(value).ok()
}

fn from_meta_tags() -> SiteConfig {
    SiteConfig {
        supabase_url: meta_content("portfolio:supabase-url"),
        supabase_anon_key: meta_content("portfolio:supabase-anon-key"),
        contact_endpoint: meta_content("portfolio:contact-endpoint"),
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name='{name}']");
    let element = document.query_selector(&selector).ok().flatten()?;
    let meta = element.dyn_ref::<web_sys::HtmlMetaElement>()?;
    let content = meta.content();
    (!content.is_empty()).then_some(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_priority_source_wins_per_field() {
        let window = SiteConfig {
            supabase_url: Some("https://win.supabase.co".into()),
            ..Default::default()
        };
        let meta = SiteConfig {
            supabase_url: Some("https://meta.supabase.co".into()),
            supabase_anon_key: Some("meta-key".into()),
            contact_endpoint: None,
        };
        let defaults = SiteConfig {
            contact_endpoint: Some("https://forms.example/contact".into()),
            ..Default::default()
        };

        let merged = window.or(meta).or(defaults);
        assert_eq!(merged.supabase_url.as_deref(), Some("https://win.supabase.co"));
        assert_eq!(merged.supabase_anon_key.as_deref(), Some("meta-key"));
        assert_eq!(
            merged.contact_endpoint.as_deref(),
            Some("https://forms.example/contact")
        );
    }
}
