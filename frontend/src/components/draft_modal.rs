use repurposer_shared::{i18n::current::modal as t, view::DraftModalView};
use web_sys::Node;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DraftModalProps {
    pub view: DraftModalView,
    pub on_close: Callback<()>,
    pub on_copy: Callback<()>,
    pub on_download: Callback<()>,
}

/// Modal showing the raw draft text. Closes on the close button or on a
/// click that lands on the backdrop itself.
#[function_component(DraftModal)]
pub fn draft_modal(props: &DraftModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let backdrop_ref = backdrop_ref.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target_dyn_into::<Node>() else {
                return;
            };
            if let Some(backdrop) = backdrop_ref.get() {
                if backdrop.is_same_node(Some(&target)) {
                    on_close.emit(());
                }
            }
        })
    };

    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let copy_click = {
        let on_copy = props.on_copy.clone();
        Callback::from(move |_: MouseEvent| on_copy.emit(()))
    };
    let download_click = {
        let on_download = props.on_download.clone();
        Callback::from(move |_: MouseEvent| on_download.emit(()))
    };

    html! {
        <div
            ref={backdrop_ref}
            id="draftModal"
            class="modal"
            style="display: flex;"
            onclick={on_backdrop_click}
        >
            <div class="modal-content" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <div>
                        <h2>{ t::TITLE }</h2>
                        <p class="modal-source">{ props.view.title.clone() }</p>
                        if !props.view.details.is_empty() {
                            <p class="modal-details">{ props.view.details.join(" · ") }</p>
                        }
                    </div>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label={t::CLOSE_ARIA}
                        onclick={close_click}
                    >
                        {"×"}
                    </button>
                </div>
                <pre id="draftContent" class="draft-content">{ props.view.content.clone() }</pre>
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" onclick={copy_click}>
                        { t::COPY_BUTTON }
                    </button>
                    <button type="button" class="btn btn-primary" onclick={download_click}>
                        { t::DOWNLOAD_BUTTON }
                    </button>
                </div>
            </div>
        </div>
    }
}
