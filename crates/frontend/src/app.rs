use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_page_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Config and sidebar state for the whole page
    provide_context(AppGlobalContext::new(load_page_config()));

    view! {
        <AppRoutes />
    }
}
