//! Decorative Effects
//!
//! Falling stars and rising bubbles for the home page. Purely visual; all
//! randomness comes from `js_sys::Math::random`, all timing from
//! gloo-timers.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// One star spawns per interval
const STAR_INTERVAL_MS: u32 = 350;
/// Stars despawn after the fall animation has finished
const STAR_LIFETIME_MS: u32 = 6_000;
/// Fixed bubble population
const BUBBLE_COUNT: usize = 28;

#[derive(Clone, PartialEq)]
struct Star {
    id: u32,
    left_px: f64,
    font_px: f64,
}

impl Star {
    fn style(&self) -> String {
        format!("left: {}px; font-size: {}px;", self.left_px, self.font_px)
    }
}

fn random() -> f64 {
    js_sys::Math::random()
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Whether the spawner loop may keep running. The flag's owner is the
/// component; after unmount the arena slot is disposed, so a plain read
/// would panic inside the detached task. `None` means disposed, i.e. stop.
fn still_mounted(alive: StoredValue<bool>) -> bool {
    alive.try_get_value().unwrap_or(false)
}

/// Continuously spawns falling stars while mounted
#[component]
pub fn Stars() -> impl IntoView {
    let (stars, set_stars) = signal(Vec::<Star>::new());
    let alive = StoredValue::new(true);
    on_cleanup(move || {
        let _ = alive.try_set_value(false);
    });

    spawn_local(async move {
        let mut next_id: u32 = 0;
        loop {
            TimeoutFuture::new(STAR_INTERVAL_MS).await;
            if !still_mounted(alive) {
                break;
            }
            let id = next_id;
            next_id = next_id.wrapping_add(1);
            set_stars.update(|stars| {
                stars.push(Star {
                    id,
                    left_px: random() * viewport_width(),
                    font_px: 12.0 + random() * 15.0,
                });
            });
            spawn_local(async move {
                TimeoutFuture::new(STAR_LIFETIME_MS).await;
                // the despawn timer can outlive the page
                let _ = set_stars.try_update(|stars| stars.retain(|s| s.id != id));
            });
        }
    });

    view! {
        <div class="stars">
            <For
                each=move || stars.get()
                key=|star| star.id
                children=move |star| {
                    let style = star.style();
                    view! { <div class="star" style=style></div> }
                }
            />
        </div>
    }
}

/// Fixed set of drifting bubbles, randomized once at mount
#[component]
pub fn Bubbles() -> impl IntoView {
    let bubbles: Vec<String> = (0..BUBBLE_COUNT)
        .map(|_| {
            let size = 20.0 + random() * 60.0;
            format!(
                "width: {size}px; height: {size}px; left: {}%; animation-delay: {}s; animation-duration: {}s;",
                random() * 100.0,
                random() * 8.0,
                8.0 + random() * 8.0,
            )
        })
        .collect();

    view! {
        <div id="bubbles-container" class="bubbles-container">
            {bubbles
                .into_iter()
                .map(|style| view! { <div class="bubble" style=style></div> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn star_loop_stops_after_owner_disposal() {
        let owner = Owner::new();
        let alive = owner.with(|| StoredValue::new(true));
        assert!(still_mounted(alive));

        // what unmounting the component does to the flag's arena slot
        owner.cleanup();
        drop(owner);

        // must report unmounted, not panic, on the loop's next tick
        assert!(!still_mounted(alive));
    }
}
