pub mod carousel;

use crate::layout::global_context::AppGlobalContext;
use carousel::Carousel;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (slides, autoplay_ms, pause_on_hover) =
        ctx.config.with_value(|c| (c.slides.clone(), c.autoplay_ms, c.pause_on_hover));

    view! {
        <div class="home-page">
            <Carousel slides=slides autoplay_ms=autoplay_ms pause_on_hover=pause_on_hover />
        </div>
    }
}
