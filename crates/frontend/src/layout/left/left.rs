use crate::layout::global_context::{AppGlobalContext, ToggleTarget};
use crate::layout::left::sidebar::Sidebar;
use leptos::prelude::*;

#[component]
pub fn Left() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toggle = StoredValue::new(ctx.sidebar_toggle());
    let class = move || {
        let open = ctx.sidebar_open.get();
        toggle.with_value(|t| format!("sidebar {}", t.class_for(ToggleTarget::Sidebar, open)))
    };

    view! {
        <nav id="sidebar" data-zone="left" class=class>
            <Sidebar />
        </nav>
    }
}
