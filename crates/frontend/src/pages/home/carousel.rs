use crate::shared::icons::icon;
use contracts::shared::page_config::Slide;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Index of the visible slide, wrapping in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to slide `n` modulo the slide count. No-op without slides.
    pub fn go_to(&mut self, n: isize) {
        if self.len == 0 {
            return;
        }
        self.index = n.rem_euclid(self.len as isize) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.index as isize - 1);
    }
}

/// Image carousel with autoplay.
///
/// Manual navigation restarts the autoplay period. With `pause_on_hover`
/// autoplay is stopped while the pointer is over the carousel.
#[component]
pub fn Carousel(slides: Vec<Slide>, autoplay_ms: u32, pause_on_hover: bool) -> impl IntoView {
    let state = RwSignal::new(CarouselState::new(slides.len()));
    // Dropping the Interval cancels it
    let timer = StoredValue::new_local(None::<Interval>);
    let hovering = StoredValue::new(false);

    let start = move || {
        if state.with_untracked(|s| s.is_empty()) {
            return;
        }
        let interval = Interval::new(autoplay_ms, move || state.update(|s| s.next()));
        timer.set_value(Some(interval));
    };
    let stop = move || timer.set_value(None);

    let navigate = move |forward: bool| {
        stop();
        state.update(|s| if forward { s.next() } else { s.prev() });
        if !(pause_on_hover && hovering.get_value()) {
            start();
        }
    };

    Effect::new(move |_| start());
    on_cleanup(move || stop());

    view! {
        <div
            class="carousel"
            on:mouseenter=move |_| {
                hovering.set_value(true);
                if pause_on_hover {
                    stop();
                }
            }
            on:mouseleave=move |_| {
                hovering.set_value(false);
                if pause_on_hover {
                    start();
                }
            }
        >
            <div class="carousel-inner">
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(i, slide)| view! {
                        <div class="carousel-item" class:active=move || state.get().index() == i>
                            <img src=slide.src alt=slide.alt />
                        </div>
                    })
                    .collect_view()}
            </div>
            <button id="prevButton" type="button" class="carousel-control prev" on:click=move |_| navigate(false)>
                {icon("chevron-left")}
            </button>
            <button id="nextButton" type="button" class="carousel-control next" on:click=move |_| navigate(true)>
                {icon("chevron-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_from_first_wraps_to_last() {
        let mut state = CarouselState::new(3);
        state.prev();
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut state = CarouselState::new(3);
        state.next();
        state.next();
        state.next();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut state = CarouselState::new(4);
        let steps = [true, false, false, false, false, false, true, true, true, true, true, false];
        for forward in steps {
            if forward {
                state.next();
            } else {
                state.prev();
            }
            assert!(state.index() < state.len());
        }
        state.go_to(-9);
        assert_eq!(state.index(), 3);
        state.go_to(10);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_no_slides_is_guarded() {
        let mut state = CarouselState::new(0);
        state.next();
        state.prev();
        state.go_to(5);
        assert_eq!(state.index(), 0);
        assert!(state.is_empty());
    }
}
