//! TiltSurface - wraps content and tilts it toward the pointer

use dioxus::prelude::*;

use super::{PointerOffset, Spring, TiltAngles, TiltConfig, TiltMotion};
use crate::dom;
use crate::primitives::Point;

const FRAME_MS: u32 = 16;

/// Tilts its children in 3D toward the mouse while hovered.
///
/// The bounding rect is re-queried on every move, so the surface follows
/// layout changes without caching geometry. The rendered angles trail the
/// target through a spring; a frame task runs only while the spring is
/// moving and is restarted by the next pointer event.
///
/// With `enabled: false` the children render in a plain div with no
/// listeners attached.
#[component]
pub fn TiltSurface(
    config: TiltConfig,
    #[props(default = true)] enabled: bool,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let id = use_hook(|| dom::next_id("tilt"));
    let mut offset = use_signal(|| PointerOffset::ZERO);
    let mut shown = use_signal(|| TiltAngles::FLAT);
    let mut animating = use_signal(|| false);

    if !enabled {
        return rsx! {
            div { style: "{style}", {children} }
        };
    }

    // Runs frames until the rendered angles reach the current target.
    let mut animate = move || {
        if *animating.peek() {
            return;
        }
        animating.set(true);
        spawn(async move {
            let dt = FRAME_MS as f32 / 1000.0;
            let mut motion = TiltMotion::from_rest(*shown.peek(), Spring::responsive());
            loop {
                gloo_timers::future::TimeoutFuture::new(FRAME_MS).await;
                let target = TiltAngles::from_offset(*offset.peek(), &config);
                let next = motion.step(target, dt);
                if *shown.peek() != next {
                    shown.set(next);
                }
                if motion.is_settled_at(target) {
                    break;
                }
            }
            animating.set(false);
        });
    };

    let tilt_css = {
        let angles = shown.read();
        if angles.is_flat() {
            String::new()
        } else {
            format!(
                "transform: {}; transform-style: preserve-3d; will-change: transform;",
                angles.to_css(config.perspective)
            )
        }
    };
    let region_id = id.clone();

    rsx! {
        div {
            id: "{id}",
            style: "{style} {tilt_css}",
            onmousemove: move |e: Event<MouseData>| {
                let coords = e.client_coordinates();
                let pointer = Point::new(coords.x as f32, coords.y as f32);
                let region = match dom::element_rect(&region_id) {
                    Ok(rect) => Some(rect),
                    Err(err) => {
                        tracing::trace!(%err, "tilt region unavailable, keeping last offset");
                        None
                    }
                };
                let previous = *offset.peek();
                let next = previous.update(pointer, region, &config);
                if next != previous {
                    offset.set(next);
                    animate();
                }
            },
            onmouseleave: move |_| {
                if !offset.peek().is_zero() {
                    offset.set(PointerOffset::leave());
                    animate();
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::core::{Mutation, VirtualDom};

    use super::*;

    fn listeners(app: fn() -> Element) -> Vec<String> {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_to_vec()
            .edits
            .into_iter()
            .filter_map(|m| match m {
                Mutation::NewEventListener { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    fn enabled_card() -> Element {
        rsx! {
            TiltSurface { config: TiltConfig::CARD, div { "card" } }
        }
    }

    fn disabled_card() -> Element {
        rsx! {
            TiltSurface { config: TiltConfig::CARD, enabled: false, div { "card" } }
        }
    }

    #[test]
    fn enabled_surface_tracks_the_pointer() {
        let names = listeners(enabled_card);
        assert!(names.iter().any(|n| n == "mousemove"), "{names:?}");
        assert!(names.iter().any(|n| n == "mouseleave"), "{names:?}");
    }

    #[test]
    fn disabled_surface_attaches_no_listeners() {
        assert!(listeners(disabled_card).is_empty());
    }
}
