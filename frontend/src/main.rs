//! Browser UI for the content repurposer: discover papers, generate blog
//! drafts from them, and copy or download the results.

mod api;
mod browser;
mod components;
mod config;
mod pages;
mod store;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <pages::dashboard::DashboardPage />
    }
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("content repurposer starting against {}", config::API_BASE);

    yew::Renderer::<App>::new().render();
}
