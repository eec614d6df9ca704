use repurposer_shared::markup::Intent;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RawHtmlProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Fired for clicks landing inside an element that carries
    /// `data-action` / `data-id`.
    #[prop_or_default]
    pub on_intent: Option<Callback<Intent>>,
}

/// Render markup produced by `repurposer_shared::markup` into a host element
/// without letting Yew diff its children. Clicks are delegated to the host
/// and decoded from the nearest `data-action` ancestor.
#[function_component(RawHtml)]
pub fn raw_html(props: &RawHtmlProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        let html = props.html.clone();
        use_effect_with(html.clone(), move |next_html| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(next_html.as_str());
            }
            || ()
        });
    }

    let onclick = props.on_intent.clone().map(|on_intent| {
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target_dyn_into::<Element>() else {
                return;
            };
            let Ok(Some(actionable)) = target.closest("[data-action]") else {
                return;
            };
            let action = actionable.get_attribute("data-action").unwrap_or_default();
            let id = actionable.get_attribute("data-id").unwrap_or_default();
            if let Some(intent) = Intent::from_data(&action, &id) {
                on_intent.emit(intent);
            }
        })
    });

    html! {
        <div ref={host_ref} id={props.id.clone()} class={props.class.clone()} {onclick} />
    }
}
