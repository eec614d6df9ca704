use repurposer_shared::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_switch: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class="tabs" role="tablist">
            { for Tab::ALL.iter().copied().map(|tab| {
                let on_switch = props.on_switch.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_switch.emit(tab));
                let is_active = tab == props.active;
                html! {
                    <button
                        type="button"
                        role="tab"
                        class={classes!("tab", is_active.then_some("active"))}
                        data-tab={tab.panel_id()}
                        aria-selected={is_active.to_string()}
                        aria-controls={tab.panel_id()}
                        {onclick}
                    >
                        { tab.label() }
                    </button>
                }
            }) }
        </nav>
    }
}
