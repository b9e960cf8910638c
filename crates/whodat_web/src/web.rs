use leptos::prelude::*;
use whodat::config::AppConfig;

use crate::ui_model::Page;

mod calculator_page;
mod charts;
mod console;
mod http;
mod reveal_page;
mod shell;

use calculator_page::CalculatorPage;
use reveal_page::RevealPage;
use shell::Topbar;

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

/// Catalog root baked in at build time, e.g.
/// `WHODAT_CATALOG_URL=http://localhost:8080/api/v2 trunk build`.
fn app_config() -> AppConfig {
    AppConfig::default().with_base_url_override(option_env!("WHODAT_CATALOG_URL"))
}

#[component]
fn App() -> impl IntoView {
    let config = app_config();
    console::info(&format!("catalog at {}", config.catalog.base_url));

    let (page, set_page) = signal(Page::default());

    view! {
        <div class="app">
            <Topbar page=page set_page=set_page />
            <main class="app-main">
                {move || match page.get() {
                    Page::Reveal => {
                        view! { <RevealPage catalog=config.catalog.clone() /> }.into_any()
                    }
                    Page::Calculator => view! { <CalculatorPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
