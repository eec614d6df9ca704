// Reusable components live here.

pub mod draft_modal;
pub mod raw_html;
pub mod tab_bar;
pub mod toast;
pub mod toolbar;
