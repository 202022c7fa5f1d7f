//! UI Components
//!
//! Reusable Leptos components.

use leptos::prelude::*;

mod contact_form;
mod effects;
mod music;
mod nav_bar;
mod post_detail;
mod post_list;

pub use contact_form::ContactForm;
pub use effects::{Bubbles, Stars};
pub use music::MusicView;
pub use nav_bar::NavBar;
pub use post_detail::PostDetail;
pub use post_list::PostList;

/// Render plain text with newlines converted to break elements. The text
/// itself goes through the view tree, so it is escaped like any other text.
pub(crate) fn text_with_breaks(text: &str) -> impl IntoView {
    let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let last = lines.len().saturating_sub(1);
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                {line}
                {(i < last).then(|| view! { <br/> })}
            }
        })
        .collect_view()
}
