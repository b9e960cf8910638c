use leptos::prelude::*;

use crate::ui_model::Page;

#[component]
pub(super) fn Topbar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="brand">"whodat"</h1>
            <nav class="app-nav">
                {Page::all()
                    .iter()
                    .map(|&p| {
                        view! {
                            <button
                                class=move || if page.get() == p { "nav-tab active" } else { "nav-tab" }
                                on:click=move |_| set_page.set(p)
                            >
                                <span class="nav-ico">{p.icon()}</span>
                                " "
                                {p.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

/// Fetch failure with a retry hook. Hidden while `message` is `None`.
#[component]
pub(super) fn ErrorBanner(message: Memo<Option<String>>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <div class="error-banner-head">
                    <div class="error-banner-title">"Could not load a Pokémon"</div>
                    <button class="btn sm" on:click=move |_| on_retry.run(())>
                        "Try again"
                    </button>
                </div>
                <div class="error-banner-body">{move || message.get().unwrap_or_default()}</div>
            </div>
        </Show>
    }
}
