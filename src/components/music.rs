//! Music Page Components
//!
//! Current favorite song, playlist history and the inline modal player.
//! Row 0 of the newest-first fetch is the current favorite; there is no
//! is-current flag in the table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Client};
use crate::components::text_with_breaks;
use crate::config::SiteConfig;
use crate::format::{excerpt, format_date_short};
use crate::models::FavoriteSong;
use crate::video;

/// Longest playlist note shown on a card, in characters
const NOTE_LEN: usize = 80;

const LOAD_ERROR_FALLBACK: &str = "Could not load music.";

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready(Vec<FavoriteSong>),
    Failed(String),
}

/// First row is the current favorite, the rest is history
fn split_current(rows: Vec<FavoriteSong>) -> (Option<FavoriteSong>, Vec<FavoriteSong>) {
    let mut rows = rows.into_iter();
    let current = rows.next();
    (current, rows.collect())
}

#[component]
pub fn MusicView() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (state, set_state) = signal(LoadState::Loading);
    let (playing, set_playing) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            let loaded = match Client::from_config(&config) {
                Ok(client) => {
                    client
                        .list::<FavoriteSong>(api::SONG_TABLE, api::SONG_COLUMNS)
                        .await
                }
                Err(e) => Err(e),
            };
            match loaded {
                Ok(songs) => {
                    web_sys::console::log_1(
                        &format!("[{}] loaded {} songs", api::SONG_TABLE, songs.len()).into(),
                    );
                    set_state.set(LoadState::Ready(songs));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[{}] load failed: {e}", api::SONG_TABLE).into(),
                    );
                    set_state.set(LoadState::Failed(
                        e.message_or(LOAD_ERROR_FALLBACK).to_string(),
                    ));
                }
            }
        });
    });

    // A recognized video link plays in the modal; anything else opens in a
    // new browsing context.
    let on_play = Callback::new(move |link: String| match video::video_id(&link) {
        Some(id) => set_playing.set(Some(id.to_string())),
        None => open_external(&link),
    });

    // Scroll lock follows the modal; release it if the page unmounts while
    // the modal is open.
    Effect::new(move |_| {
        set_body_scroll_locked(playing.get().is_some());
    });
    on_cleanup(|| set_body_scroll_locked(false));

    view! {
        <section class="music">
            {move || match state.get() {
                LoadState::Loading => view! {
                    <p class="music-placeholder loading">"Loading…"</p>
                }
                .into_any(),
                LoadState::Failed(msg) => view! {
                    <p class="music-placeholder error" role="alert">{msg}</p>
                }
                .into_any(),
                LoadState::Ready(songs) => {
                    let (current, playlist) = split_current(songs);
                    view! {
                        <CurrentSong song=current on_play=on_play />
                        <Playlist songs=playlist on_play=on_play />
                    }
                    .into_any()
                }
            }}
            <PlayerModal playing=playing set_playing=set_playing />
        </section>
    }
}

/// Large card for the current favorite
#[component]
fn CurrentSong(
    song: Option<FavoriteSong>,
    #[prop(into)] on_play: Callback<String>,
) -> impl IntoView {
    let Some(song) = song else {
        return view! {
            <div class="music-current">
                <p class="music-empty">"No favorite song set."</p>
            </div>
        }
        .into_any();
    };

    let name = song.display_name().to_string();
    let author = song.author.clone().filter(|a| !a.is_empty());
    let note = song.note.clone().filter(|n| !n.is_empty());
    let link = song.link.clone().filter(|l| !l.is_empty());
    let thumb = link
        .as_deref()
        .and_then(video::video_id)
        .map(video::thumbnail_url);

    view! {
        <div class="music-current">
            {thumb.map(|url| view! {
                <div class="music-thumb-wrap">
                    <img class="music-thumb" src=url alt="" />
                </div>
            })}
            {link.map(|link| view! {
                <div class="music-actions">
                    <button
                        type="button"
                        class="music-play-btn"
                        aria-label="Play"
                        on:click=move |_| on_play.run(link.clone())
                    >
                        "▶ Play"
                    </button>
                </div>
            })}
            <p class="music-song-name">{name}</p>
            {author.map(|a| view! { <p class="music-author">{a}</p> })}
            {note.map(|n| view! { <p class="music-note">{text_with_breaks(&n)}</p> })}
        </div>
    }
    .into_any()
}

/// Reverse-chronological history of earlier favorites
#[component]
fn Playlist(
    songs: Vec<FavoriteSong>,
    #[prop(into)] on_play: Callback<String>,
) -> impl IntoView {
    if songs.is_empty() {
        return view! {
            <div class="music-playlist">
                <p class="music-playlist-empty">"No previous favorites yet."</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="music-playlist">
            {songs
                .into_iter()
                .map(|song| view! { <PlaylistCard song=song on_play=on_play /> })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn PlaylistCard(song: FavoriteSong, #[prop(into)] on_play: Callback<String>) -> impl IntoView {
    let name = song.display_name().to_string();
    let author = song.author.clone().filter(|a| !a.is_empty());
    let date_str = format_date_short(song.created_at.as_deref());
    let raw_date = song.created_at.clone().unwrap_or_default();
    let note = excerpt(song.note.as_deref(), NOTE_LEN);
    let link = song.link.clone().filter(|l| !l.is_empty());
    let play_label = format!("Play {name}");

    view! {
        <article class="music-card">
            <div class="music-card-info">
                <p class="music-card-name">{name}</p>
                {author.map(|a| view! { <p class="music-card-author">{a}</p> })}
                {(!date_str.is_empty()).then(|| view! {
                    <time class="music-card-date" datetime=raw_date>{date_str}</time>
                })}
                {(!note.is_empty()).then(|| view! { <p class="music-card-note">{note}</p> })}
            </div>
            {link.map(|link| view! {
                <button
                    type="button"
                    class="music-play-btn music-play-btn-sm"
                    aria-label=play_label
                    on:click=move |_| on_play.run(link.clone())
                >
                    "▶"
                </button>
            })}
        </article>
    }
}

/// Inline modal with the embedded autoplaying player. Rendering nothing
/// when closed is what guarantees no player markup survives a close.
#[component]
fn PlayerModal(
    playing: ReadSignal<Option<String>>,
    set_playing: WriteSignal<Option<String>>,
) -> impl IntoView {
    let close = move || set_playing.set(None);
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    // Focus the modal when it opens so Escape lands on it
    Effect::new(move |_| {
        if playing.get().is_some() {
            if let Some(el) = modal_ref.get() {
                let _ = el.focus();
            }
        }
    });

    view! {
        {move || playing.get().map(|id| {
            let embed = video::embed_url(&id);
            view! {
                <div
                    class="music-modal open"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    node_ref=modal_ref
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            close();
                        }
                    }
                >
                    <div class="music-modal-backdrop" on:click=move |_| close()></div>
                    <div class="music-modal-dialog">
                        <button
                            type="button"
                            class="music-modal-close"
                            aria-label="Close"
                            on:click=move |_| close()
                        >
                            "×"
                        </button>
                        <div class="music-modal-player">
                            <iframe
                                src=embed
                                title="YouTube video"
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                allowfullscreen="true"
                            ></iframe>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}

fn open_external(link: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(link, "_blank", "noopener,noreferrer");
    }
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(name: &str) -> FavoriteSong {
        FavoriteSong {
            song_name: Some(name.to_string()),
            author: None,
            link: None,
            note: None,
            created_at: None,
        }
    }

    #[test]
    fn first_row_is_current_rest_is_history() {
        let (current, rest) = split_current(vec![song("a"), song("b"), song("c")]);
        assert_eq!(current.unwrap().display_name(), "a");
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0].display_name(), "b");
    }

    #[test]
    fn empty_fetch_has_no_current_favorite() {
        let (current, rest) = split_current(Vec::new());
        assert!(current.is_none());
        assert!(rest.is_empty());
    }
}
