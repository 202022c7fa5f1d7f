//! Theme Handling
//!
//! Light/dark preference: pure state transitions plus a thin adapter that
//! applies the choice to the document root and persists it.

/// localStorage key holding the literal "light" or "dark"
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Attribute on the root element that stylesheets key off
const THEME_ATTR: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage/attribute literal for this theme
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_saved(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A saved preference wins; otherwise follow the system color scheme.
pub fn resolve_initial(saved: Option<&str>, prefers_dark: bool) -> Theme {
    match saved.and_then(Theme::from_saved) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Read the persisted preference and system hint, returning the theme to
/// start with. Storage access failures count as "nothing saved".
pub fn load_initial() -> Theme {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return Theme::default(),
    };
    let saved = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false);
    resolve_initial(saved.as_deref(), prefers_dark)
}

/// Set the root attribute the stylesheets react to
pub fn apply(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute(THEME_ATTR, theme.as_str());
    }
}

/// Persist the preference under the fixed storage key
pub fn persist(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_value_wins_over_system_preference() {
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn system_preference_used_when_nothing_saved() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
        // unrecognized saved values fall through to the system hint
        assert_eq!(resolve_initial(Some("solarized"), true), Theme::Dark);
    }

    #[test]
    fn double_toggle_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_eq!(
                Theme::from_saved(theme.toggled().toggled().as_str()),
                Some(theme)
            );
        }
    }
}
