pub mod global_context;
pub mod left;
pub mod top_header;

use crate::shared::components::back_to_top::BackToTop;
use global_context::{AppGlobalContext, ToggleTarget};
use leptos::prelude::*;
use top_header::TopHeader;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (menu icon, title)            |
/// +------------------------------------------+
/// |  Sidebar  |  main-content                |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toggle = StoredValue::new(ctx.sidebar_toggle());
    let content_class = move || {
        let open = ctx.sidebar_open.get();
        toggle.with_value(|t| format!("main-content {}", t.class_for(ToggleTarget::Content, open)))
    };

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left />

                <main id="main-content" class=content_class>
                    {center()}
                </main>
            </div>

            <BackToTop />
        </div>
    }
}
