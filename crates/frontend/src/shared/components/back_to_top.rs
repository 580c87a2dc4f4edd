use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

pub fn should_show(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Floating button that appears after scrolling down the page.
#[component]
pub fn BackToTop() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let threshold = ctx.config.with_value(|c| c.back_to_top_threshold);
    let (visible, set_visible) = signal(false);

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };

        let handler = Closure::wrap(Box::new(move || {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            set_visible.set(should_show(scroll_y, threshold));
        }) as Box<dyn FnMut()>);

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
        {
            log::warn!("Cannot listen to scroll: {:?}", err);
        }
        // Lives as long as the page
        handler.forget();
    });

    view! {
        <button
            id="back-to-top"
            type="button"
            class="back-to-top"
            class:back-to-top--visible=move || visible.get()
            title="トップへ戻る"
            on:click=move |_| scroll_to_top()
        >
            {icon("arrow-up")}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!should_show(0.0, 300.0));
        assert!(!should_show(300.0, 300.0));
        assert!(should_show(300.5, 300.0));
    }
}
