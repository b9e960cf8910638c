use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use whodat::catalog::{fetch_random_item, CatalogApi};
use whodat::config::CatalogConfig;
use whodat::prng::Prng;
use whodat::reveal::RevealFlow;

use super::console;
use super::http::BrowserHttp;
use super::shell::ErrorBanner;
use crate::ui_model::{reveal_caption, sprite_alt, sprite_class};

#[component]
pub(super) fn RevealPage(catalog: CatalogConfig) -> impl IntoView {
    let flow = RwSignal::new(RevealFlow::new());
    let api = StoredValue::new(CatalogApi::from(&catalog));

    // Every click starts a new generation; whatever finishes for an older one
    // is dropped by `finish_fetch`.
    let randomize = move || {
        let mut ticket = None;
        flow.update(|f| ticket = Some(f.begin_fetch()));
        let Some(ticket) = ticket else {
            return;
        };
        let api = api.get_value();

        spawn_local(async move {
            let mut rng = Prng::from_unit_f64(js_sys::Math::random());
            let result = fetch_random_item(&BrowserHttp, &api, &mut rng).await;
            match &result {
                Ok(item) => console::info(&format!("fetched #{} {}", item.id, item.name)),
                Err(e) => console::warn(&format!("catalog fetch failed: {e}")),
            }

            // The page may be gone by now; a disposed signal just drops the result.
            let applied = flow
                .try_update(|f| f.finish_fetch(ticket, result))
                .unwrap_or(false);
            if !applied {
                console::info(&format!(
                    "dropped response for request #{}",
                    ticket.generation()
                ));
            }
        });
    };

    let item = Memo::new(move |_| flow.with(|f| f.item().cloned()));
    let revealed = Memo::new(move |_| flow.with(|f| f.is_revealed()));
    let loading = Memo::new(move |_| flow.with(|f| f.is_loading()));
    let error = Memo::new(move |_| flow.with(|f| f.error().map(|e| e.to_string())));
    let caption = Memo::new(move |_| flow.with(reveal_caption));
    let alt = Memo::new(move |_| flow.with(sprite_alt));

    randomize();

    view! {
        <section class="reveal-page">
            <h2 class="reveal-caption">{move || caption.get()}</h2>

            <div class="reveal-frame">
                <Show
                    when=move || item.get().is_some()
                    fallback=move || {
                        view! {
                            <div class="reveal-placeholder">
                                {move || if loading.get() { "Fetching a Pokémon…" } else { "" }}
                            </div>
                        }
                    }
                >
                    <img
                        class=move || sprite_class(revealed.get())
                        src=move || item.get().map(|i| i.image_url.clone()).unwrap_or_default()
                        alt=move || alt.get()
                        width="300"
                        height="300"
                    />
                </Show>
            </div>

            <ErrorBanner message=error on_retry=Callback::new(move |_| randomize()) />

            <div class="reveal-actions">
                <button
                    class="btn primary"
                    disabled=move || item.get().is_none() || revealed.get()
                    on:click=move |_| {
                        flow.update(|f| {
                            f.reveal();
                        })
                    }
                >
                    "Reveal Pokémon"
                </button>
                <button class="btn secondary" on:click=move |_| randomize()>
                    "Randomize Pokémon"
                </button>
            </div>
        </section>
    }
}
