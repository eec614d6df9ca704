use std::rc::Rc;

use repurposer_shared::{
    i18n::current::{common, toast as toast_t},
    markup::{self, Intent},
    view,
    workflow::{self, Dispatch},
    Action, ContentApi, Control, Tab, ToastKind,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    browser,
    components::{
        draft_modal::DraftModal, raw_html::RawHtml, tab_bar::TabBar, toast::ToastStack,
        toolbar::Toolbar,
    },
    store::{Store, StoreDispatcher},
};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_reducer(Store::default);
    let api = use_state(crate::api::client);

    {
        let api: Rc<dyn ContentApi> = (*api).clone();
        let ui = StoreDispatcher::from(state.dispatcher());
        use_effect_with((), move |_| {
            spawn_local(async move {
                workflow::initial_load(&*api, &ui).await;
            });
            || ()
        });
    }

    let on_fetch = {
        let api: Rc<dyn ContentApi> = (*api).clone();
        let ui = StoreDispatcher::from(state.dispatcher());
        let busy = state.is_busy(Control::Fetch);
        Callback::from(move |_| {
            if busy {
                return;
            }
            let api = api.clone();
            let ui = ui.clone();
            spawn_local(async move {
                workflow::fetch_new(&*api, &ui).await;
            });
        })
    };

    let on_search = {
        let api: Rc<dyn ContentApi> = (*api).clone();
        let ui = StoreDispatcher::from(state.dispatcher());
        let busy = state.is_busy(Control::Search);
        Callback::from(move |query: String| {
            if busy || workflow::normalize_query(&query).is_none() {
                return;
            }
            let api = api.clone();
            let ui = ui.clone();
            spawn_local(async move {
                workflow::search(&*api, &ui, &query).await;
            });
        })
    };

    let on_switch_tab = {
        let ui = StoreDispatcher::from(state.dispatcher());
        Callback::from(move |tab: Tab| ui.dispatch(Action::SwitchTab(tab)))
    };

    let on_intent = {
        let api: Rc<dyn ContentApi> = (*api).clone();
        let ui = StoreDispatcher::from(state.dispatcher());
        let generating = state.is_busy(Control::Generate);
        let viewing = state.is_busy(Control::ViewDraft);
        Callback::from(move |intent: Intent| match intent {
            Intent::SelectArticle(id) => ui.dispatch(Action::SelectArticle(id)),
            Intent::Generate(article_id) => {
                if generating {
                    return;
                }
                let api = api.clone();
                let ui = ui.clone();
                spawn_local(async move {
                    workflow::generate_draft(&*api, &ui, &article_id).await;
                });
            },
            Intent::ViewDraft(draft_id) => {
                if viewing {
                    return;
                }
                let api = api.clone();
                let ui = ui.clone();
                spawn_local(async move {
                    workflow::view_draft(&*api, &ui, draft_id).await;
                });
            },
        })
    };

    let on_close_modal = {
        let ui = StoreDispatcher::from(state.dispatcher());
        Callback::from(move |_| ui.dispatch(Action::CloseModal))
    };

    let current_content = state.current_draft().map(|draft| draft.content.clone());

    let on_copy = {
        let ui = StoreDispatcher::from(state.dispatcher());
        let content = current_content.clone();
        Callback::from(move |_| {
            let Some(text) = content.clone() else {
                return;
            };
            let ui = ui.clone();
            spawn_local(async move {
                if browser::write_clipboard(&text).await {
                    ui.dispatch(Action::Notify(ToastKind::Success, toast_t::COPIED.to_string()));
                } else {
                    tracing::warn!("clipboard write rejected");
                    ui.dispatch(Action::Notify(
                        ToastKind::Error,
                        toast_t::COPY_FAILED.to_string(),
                    ));
                }
            });
        })
    };

    let on_download = {
        let content = current_content;
        Callback::from(move |_| {
            let Some(text) = content.as_deref() else {
                return;
            };
            if let Err(err) = browser::download_draft(text) {
                tracing::error!("draft download failed: {err:?}");
            }
        })
    };

    let on_dismiss_toast = {
        let ui = StoreDispatcher::from(state.dispatcher());
        Callback::from(move |id: u64| ui.dispatch(Action::DismissToast(id)))
    };

    let active_tab = state.active_tab();
    let panel_classes = |tab: Tab| classes!("tab-content", (tab == active_tab).then_some("active"));

    let article_list_html = markup::article_list(&view::article_list(&state));
    let preview_html = markup::preview(&view::preview(&state));
    let draft_list_html = markup::draft_list(&view::draft_list(&state));

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{ common::BRAND_NAME }</h1>
                <Toolbar
                    fetch_busy={state.is_busy(Control::Fetch)}
                    search_busy={state.is_busy(Control::Search)}
                    on_fetch={on_fetch}
                    on_search={on_search}
                />
            </header>

            <TabBar active={active_tab} on_switch={on_switch_tab} />

            <main>
                <section id={Tab::Articles.panel_id()} class={panel_classes(Tab::Articles)}>
                    <div class="articles-layout">
                        <RawHtml
                            id="articlesList"
                            class={classes!("articles-list")}
                            html={AttrValue::from(article_list_html)}
                            on_intent={on_intent.clone()}
                        />
                        <RawHtml
                            id="articlePreview"
                            class={classes!("article-preview")}
                            html={AttrValue::from(preview_html)}
                            on_intent={on_intent.clone()}
                        />
                    </div>
                </section>
                <section id={Tab::Drafts.panel_id()} class={panel_classes(Tab::Drafts)}>
                    <RawHtml
                        id="draftsList"
                        class={classes!("drafts-list")}
                        html={AttrValue::from(draft_list_html)}
                        on_intent={on_intent}
                    />
                </section>
            </main>

            if let Some(modal) = view::draft_modal(&state) {
                <DraftModal
                    view={modal}
                    on_close={on_close_modal}
                    on_copy={on_copy}
                    on_download={on_download}
                />
            }

            <ToastStack toasts={state.toasts().to_vec()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
