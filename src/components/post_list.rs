//! Post List Component
//!
//! Summary-card list shared by the blog and journal pages: one fetch on
//! mount, then loading/empty/error placeholders or one card per row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Client};
use crate::config::SiteConfig;
use crate::format::{excerpt, format_date_short};
use crate::models::Post;

/// Longest excerpt shown on a card, in characters
const EXCERPT_LEN: usize = 115;

/// Generic fallback when an error carries no message of its own
const LOAD_ERROR_FALLBACK: &str = "Could not load posts.";

/// Lifecycle of the single fetch this component performs
#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready(Vec<Post>),
    Failed(String),
}

/// Card list for one content collection, newest first
#[component]
pub fn PostList(
    /// Remote table to read
    table: &'static str,
    /// Placeholder when the collection has no rows yet
    empty_text: &'static str,
    /// Route of the matching detail page, e.g. "/blog/post"
    detail_path: &'static str,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (state, set_state) = signal(LoadState::Loading);

    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            let loaded = match Client::from_config(&config) {
                Ok(client) => client.list::<Post>(table, api::POST_COLUMNS).await,
                Err(e) => Err(e),
            };
            match loaded {
                Ok(posts) => {
                    web_sys::console::log_1(
                        &format!("[{table}] loaded {} posts", posts.len()).into(),
                    );
                    set_state.set(LoadState::Ready(posts));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[{table}] load failed: {e}").into());
                    set_state.set(LoadState::Failed(e.message_or(LOAD_ERROR_FALLBACK).to_string()));
                }
            }
        });
    });

    view! {
        <div class="post-list">
            {move || match state.get() {
                LoadState::Loading => view! {
                    <p class="post-placeholder loading">"Loading posts…"</p>
                }
                .into_any(),
                LoadState::Failed(msg) => view! {
                    <p class="post-placeholder error" role="alert">{msg}</p>
                }
                .into_any(),
                LoadState::Ready(posts) if posts.is_empty() => view! {
                    <p class="post-placeholder">{empty_text}</p>
                }
                .into_any(),
                LoadState::Ready(posts) => view! {
                    <For
                        each=move || posts.clone()
                        key=|post| post.id.clone()
                        children=move |post| view! { <PostCard post=post detail_path=detail_path /> }
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

/// One summary card: escaped title, short date, truncated excerpt, link
#[component]
fn PostCard(post: Post, detail_path: &'static str) -> impl IntoView {
    let href = format!("{detail_path}?id={}", api::encode_component(&post.id));
    let date_str = format_date_short(post.created_at.as_deref());
    let raw_date = post.created_at.clone().unwrap_or_default();
    let excerpt_str = excerpt(post.body.as_deref(), EXCERPT_LEN);
    let title = post.display_title().to_string();

    view! {
        <article class="post-card">
            <h3 class="post-card-title">
                <a href=href.clone()>{title}</a>
            </h3>
            {(!date_str.is_empty()).then(|| view! {
                <time class="post-card-date" datetime=raw_date>{date_str}</time>
            })}
            {(!excerpt_str.is_empty()).then(|| view! {
                <p class="post-card-excerpt">{excerpt_str}</p>
            })}
            <a href=href class="post-card-link">"Read more"</a>
        </article>
    }
}
