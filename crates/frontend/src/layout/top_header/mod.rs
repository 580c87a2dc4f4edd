//! Top bar with the menu icon that opens and closes the sidebar.

use crate::layout::global_context::{AppGlobalContext, ToggleTarget};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toggle = StoredValue::new(ctx.sidebar_toggle());

    let icon_class = move || {
        let open = ctx.sidebar_open.get();
        toggle.with_value(|t| format!("top-header__icon-btn {}", t.class_for(ToggleTarget::Icon, open)))
    };

    view! {
        <div class="top-header">
            <button
                id="menu-icon"
                type="button"
                class=icon_class
                on:click=move |_| ctx.toggle_sidebar()
                title=move || if ctx.sidebar_open.get() { "メニューを閉じる" } else { "メニューを開く" }
                aria-expanded=move || ctx.sidebar_open.get().to_string()
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">"販売管理ダッシュボード"</span>
            </div>
        </div>
    }
}
