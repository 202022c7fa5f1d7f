//! Portfolio Frontend App
//!
//! Router, page chrome and the per-page views. Each page wires exactly one
//! renderer against one collection.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api;
use crate::components::{Bubbles, ContactForm, MusicView, NavBar, PostDetail, PostList, Stars};
use crate::config;
use crate::store::UiState;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // Resolve and apply the theme before first paint of the views
    let initial_theme = theme::load_initial();
    theme::apply(initial_theme);

    provide_context(Store::new(UiState {
        theme: initial_theme,
        nav_open: false,
    }));
    provide_context(config::load());

    view! {
        <Router>
            <NavBar />
            <main class="page">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/blog/post") view=BlogPostPage />
                    <Route path=path!("/journal") view=JournalPage />
                    <Route path=path!("/journal/post") view=JournalPostPage />
                    <Route path=path!("/music") view=MusicPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <footer class="site-footer">
                <p>"© 2026 · built with Rust and Leptos"</p>
            </footer>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="page-home">
            <Bubbles />
            <Stars />
            <section class="hero">
                <h1>"Hi, I'm glad you're here."</h1>
                <p>"I write a monthly blog, keep a journal, and always have a song on repeat."</p>
            </section>
        </div>
    }
}

#[component]
fn BlogPage() -> impl IntoView {
    view! {
        <section class="page-blog">
            <h1>"Blog"</h1>
            <PostList
                table=api::BLOG_TABLE
                empty_text="Monthly blog coming soon."
                detail_path="/blog/post"
            />
        </section>
    }
}

#[component]
fn BlogPostPage() -> impl IntoView {
    view! {
        <section class="page-blog-post">
            <PostDetail table=api::BLOG_TABLE />
        </section>
    }
}

#[component]
fn JournalPage() -> impl IntoView {
    view! {
        <section class="page-journal">
            <h1>"Journal"</h1>
            <PostList
                table=api::JOURNAL_TABLE
                empty_text="Journal entries coming soon."
                detail_path="/journal/post"
            />
        </section>
    }
}

#[component]
fn JournalPostPage() -> impl IntoView {
    view! {
        <section class="page-journal-post">
            <PostDetail table=api::JOURNAL_TABLE />
        </section>
    }
}

#[component]
fn MusicPage() -> impl IntoView {
    view! {
        <section class="page-music">
            <h1>"Music"</h1>
            <MusicView />
        </section>
    }
}

#[component]
fn ContactPage() -> impl IntoView {
    view! {
        <section class="page-contact">
            <h1>"Contact"</h1>
            <ContactForm />
        </section>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page-not-found">
            <p role="alert">"Page not found."</p>
        </section>
    }
}
