use repurposer_shared::i18n::current::toolbar as t;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub fetch_busy: bool,
    pub search_busy: bool,
    pub on_fetch: Callback<()>,
    /// Receives the raw input; blank queries are filtered downstream.
    pub on_search: Callback<String>,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let search_query = use_state(String::new);

    let on_input = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_query.set(input.value());
        })
    };

    let fetch_click = {
        let on_fetch = props.on_fetch.clone();
        Callback::from(move |_: MouseEvent| on_fetch.emit(()))
    };

    let search_click = {
        let on_search = props.on_search.clone();
        let search_query = search_query.clone();
        Callback::from(move |_: MouseEvent| on_search.emit((*search_query).clone()))
    };

    // Enter键搜索
    let on_search_keypress = {
        let on_search = props.on_search.clone();
        let search_query = search_query.clone();
        let search_busy = props.search_busy;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !search_busy {
                on_search.emit((*search_query).clone());
            }
        })
    };

    html! {
        <div class="toolbar">
            <button
                id="fetchBtn"
                type="button"
                class="btn btn-primary"
                onclick={fetch_click}
                disabled={props.fetch_busy}
            >
                { loading_label(props.fetch_busy, t::FETCH_BUTTON, t::FETCH_LOADING) }
            </button>
            <div class="search-box">
                <input
                    id="searchInput"
                    type="text"
                    placeholder={t::SEARCH_PLACEHOLDER}
                    value={(*search_query).clone()}
                    oninput={on_input}
                    onkeypress={on_search_keypress}
                />
                <button
                    id="searchBtn"
                    type="button"
                    class="btn btn-secondary"
                    onclick={search_click}
                    disabled={props.search_busy}
                >
                    { loading_label(props.search_busy, t::SEARCH_BUTTON, t::SEARCH_LOADING) }
                </button>
            </div>
        </div>
    }
}

fn loading_label(busy: bool, idle: &'static str, loading: &'static str) -> Html {
    html! {
        <>
            <span class="btn-text" style={if busy { "display: none;" } else { "display: inline;" }}>
                { idle }
            </span>
            <span class="btn-loading" style={if busy { "display: inline;" } else { "display: none;" }}>
                { loading }
            </span>
        </>
    }
}
