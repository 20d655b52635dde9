//! Scroll progress - how far down the page the reader is

use dioxus::prelude::*;

use crate::dom;
use crate::primitives::bounded::bounded_f32;
use crate::tilt::{Spring, SpringState};

const POLL_MS: u32 = 50;

/// Raw scroll geometry of the document
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    /// Visible height of the root element, scrollbars excluded
    pub viewport_height: f32,
}

bounded_f32!(ScrollProgress, 0.0, 1.0);

impl ScrollProgress {
    /// A document that fits in the viewport never scrolls: progress 0.
    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        let scrollable = metrics.scroll_height - metrics.viewport_height;
        if !(scrollable > 0.0) {
            return Self::default();
        }
        Self::clamped(metrics.scroll_top / scrollable)
    }

    pub fn to_css(&self) -> String {
        format!("transform: scaleX({:.4});", self.0)
    }
}

/// Thin bar pinned to the top of the page, filling as the reader scrolls.
#[component]
pub fn ScrollProgressBar() -> Element {
    let mut shown = use_signal(ScrollProgress::default);

    use_hook(|| {
        spawn(async move {
            let spring = Spring::responsive().with_settle_epsilon(1e-4);
            let dt = POLL_MS as f32 / 1000.0;
            let mut state = SpringState::at_rest(0.0);
            loop {
                gloo_timers::future::TimeoutFuture::new(POLL_MS).await;
                let target = match dom::scroll_metrics() {
                    Ok(metrics) => ScrollProgress::from_metrics(metrics),
                    Err(err) => {
                        tracing::trace!(%err, "scroll metrics unavailable");
                        continue;
                    }
                };
                state = spring.step(state, target.value(), dt);
                let next = ScrollProgress::clamped(state.value);
                if *shown.peek() != next {
                    shown.set(next);
                }
            }
        });
    });

    let bar = shown.read().to_css();

    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; height: 3px; z-index: 60; background: linear-gradient(90deg, #2563eb, #9333ea); transform-origin: 0 50%; {bar}",
        }
    }
}
