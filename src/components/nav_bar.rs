//! Navigation Bar Component
//!
//! Top navigation with active-link highlighting, the mobile hamburger menu
//! and the theme toggle button.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::store::{
    store_close_nav, store_toggle_nav, store_toggle_theme, use_ui_store, UiStateStoreFields,
};
use crate::theme::Theme;

/// Route/label pairs in display order
const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/blog", "Blog"),
    ("/journal", "Journal"),
    ("/music", "Music"),
    ("/contact", "Contact"),
];

/// Whether `href` should be highlighted for the current path. Section links
/// stay active on their detail pages; home only matches exactly.
fn is_active(current_path: &str, href: &str) -> bool {
    if href == "/" {
        return current_path == "/" || current_path.is_empty();
    }
    current_path == href || current_path.starts_with(&format!("{href}/"))
}

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_ui_store();
    // Memo is Copy, so each link closure can capture it
    let pathname = use_location().pathname;

    view! {
        <header class=move || {
            if store.nav_open().get() { "navbar open" } else { "navbar" }
        }>
            <a class="nav-brand" href="/" on:click=move |_| store_close_nav(&store)>
                "Portfolio"
            </a>

            <button
                class="nav-toggle"
                aria-label="Menu"
                aria-expanded=move || if store.nav_open().get() { "true" } else { "false" }
                on:click=move |_| store_toggle_nav(&store)
            >
                "☰"
            </button>

            <nav class="nav-links">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        let active = move || is_active(&pathname.get(), href);
                        view! {
                            <a
                                href=*href
                                class=move || if active() { "active" } else { "" }
                                aria-current=move || active().then_some("page")
                                on:click=move |_| store_close_nav(&store)
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <button
                class="theme-toggle"
                title="Toggle theme"
                on:click=move |_| store_toggle_theme(&store)
            >
                {move || match store.theme().get() {
                    Theme::Dark => "☀",
                    Theme::Light => "☾",
                }}
            </button>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_link_matches_only_the_root() {
        assert!(is_active("/", "/"));
        assert!(is_active("", "/"));
        assert!(!is_active("/blog", "/"));
    }

    #[test]
    fn section_links_match_their_detail_pages() {
        assert!(is_active("/blog", "/blog"));
        assert!(is_active("/blog/post", "/blog"));
        assert!(!is_active("/blogging", "/blog"));
        assert!(!is_active("/journal", "/blog"));
    }
}
