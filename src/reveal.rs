//! Staggered reveal - content fades up as it scrolls into view

use dioxus::prelude::*;

use crate::dom;
use crate::primitives::{Entrance, Rect};
use crate::variant::Variant;

const POLL_MS: u32 = 100;

/// Distance in pixels an element must travel past the viewport edge before
/// it counts as visible
const VIEW_MARGIN: f32 = 48.0;

/// Per-index animation delay for a sequence of reveals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub initial_delay_ms: u32,
    pub step_ms: u32,
    pub max_delay_ms: u32,
}

impl Stagger {
    pub const DEFAULT: Self = Self { initial_delay_ms: 0, step_ms: 120, max_delay_ms: 720 };

    pub fn delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.initial_delay_ms
            .saturating_add(self.step_ms.saturating_mul(index))
            .min(self.max_delay_ms.max(self.initial_delay_ms))
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Whether `rect` has scrolled far enough into a viewport of the given height.
pub fn enters_view(rect: Rect, viewport_height: f32, margin: f32) -> bool {
    rect.y < viewport_height - margin && rect.bottom() > margin
}

/// Wraps content that should fade up the first time it becomes visible.
///
/// Under [`Variant::Static`] the children render immediately with no
/// animation.
#[component]
pub fn Reveal(
    #[props(default)] index: usize,
    #[props(default)] stagger: Stagger,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let variant = use_context::<Variant>();
    let id = use_hook(|| dom::next_id("reveal"));
    let mut revealed = use_signal(|| !variant.reveals());

    let watch_id = id.clone();
    use_hook(move || {
        if !variant.reveals() {
            return;
        }
        spawn(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(POLL_MS).await;
                let visible = dom::element_rect(&watch_id).and_then(|rect| {
                    let viewport_height = dom::viewport_height()?;
                    Ok(enters_view(rect, viewport_height, VIEW_MARGIN))
                });
                match visible {
                    Ok(true) => {
                        revealed.set(true);
                        break;
                    }
                    Ok(false) => {}
                    Err(err) => tracing::trace!(%err, "reveal target not measurable yet"),
                }
            }
        });
    });

    let entrance = if !variant.reveals() {
        Entrance::Visible
    } else if revealed() {
        Entrance::RevealUp { delay_ms: stagger.delay_ms(index) }
    } else {
        Entrance::Hidden
    };
    let entrance_css = entrance.to_css();

    rsx! {
        div {
            id: "{id}",
            style: "{style} {entrance_css}",
            {children}
        }
    }
}
