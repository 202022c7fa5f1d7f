//! Post Detail Component
//!
//! Full view of a single post, looked up by the `id` query parameter.
//! A missing parameter or a missing row are both the not-found state;
//! only a failed fetch is an error.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::api::{self, Client};
use crate::components::text_with_breaks;
use crate::config::SiteConfig;
use crate::format::format_date_long;
use crate::models::Post;

const NOT_FOUND_TEXT: &str = "Post not found.";
const LOAD_ERROR_FALLBACK: &str = "Could not load post.";

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    NotFound,
    Ready(Post),
    Failed(String),
}

/// Detail view for one content collection
#[component]
pub fn PostDetail(
    /// Remote table to read
    table: &'static str,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let query = use_query_map();
    let (state, set_state) = signal(LoadState::Loading);

    Effect::new(move |_| {
        // No id in the query string: not found, and no fetch is issued.
        let Some(id) = query.with_untracked(|q| q.get("id")) else {
            set_state.set(LoadState::NotFound);
            return;
        };
        let config = config.clone();
        spawn_local(async move {
            let loaded = match Client::from_config(&config) {
                Ok(client) => {
                    client
                        .get_by_id::<Post>(table, api::POST_COLUMNS, &id)
                        .await
                }
                Err(e) => Err(e),
            };
            match loaded {
                Ok(Some(post)) => set_state.set(LoadState::Ready(post)),
                Ok(None) => set_state.set(LoadState::NotFound),
                Err(e) => {
                    web_sys::console::error_1(&format!("[{table}] load failed: {e}").into());
                    set_state.set(LoadState::Failed(e.message_or(LOAD_ERROR_FALLBACK).to_string()));
                }
            }
        });
    });

    view! {
        <div class="post-detail">
            {move || match state.get() {
                LoadState::Loading => view! {
                    <p class="post-placeholder loading">"Loading…"</p>
                }
                .into_any(),
                LoadState::NotFound => view! {
                    <p class="post-placeholder" role="alert">{NOT_FOUND_TEXT}</p>
                }
                .into_any(),
                LoadState::Failed(msg) => view! {
                    <p class="post-placeholder error" role="alert">{msg}</p>
                }
                .into_any(),
                LoadState::Ready(post) => view! { <PostArticle post=post /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PostArticle(post: Post) -> impl IntoView {
    let title = post.display_title().to_string();
    let date_str = format_date_long(post.created_at.as_deref());
    let raw_date = post.created_at.clone().unwrap_or_default();
    let body = post.body.clone().unwrap_or_default();

    view! {
        <article class="post-article">
            <h1 class="post-article-title">{title}</h1>
            {(!date_str.is_empty()).then(|| view! {
                <time class="post-article-date" datetime=raw_date>{date_str}</time>
            })}
            <div class="post-article-body">{text_with_breaks(&body)}</div>
        </article>
    }
}
