//! The portfolio page and its per-variant routes

mod common;
mod contact;
mod footer;
mod hero;
mod navbar;
mod sections;

use dioxus::prelude::*;

use crate::content::{PAGE, Section};
use crate::primitives::Entrance;
use crate::scroll::ScrollProgressBar;
use crate::variant::Variant;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use sections::{About, Projects, Skills};

/// Full page. Every section reads the variant from context.
#[component]
pub fn Portfolio(variant: Variant) -> Element {
    use_context_provider(|| variant);
    use_hook(|| tracing::debug!(?variant, "rendering portfolio"));

    let stylesheet = Entrance::stylesheet();

    rsx! {
        style { "{stylesheet}" }

        div {
            style: "min-height: 100vh; background: linear-gradient(135deg, #eff6ff, #ffffff 50%, #faf5ff); color: #111827; font-family: system-ui, -apple-system, sans-serif;",

            if variant.shows_scroll_progress() {
                ScrollProgressBar {}
            }
            Navbar {}
            for (i, section) in PAGE.into_iter().enumerate() {
                Fragment { key: "{i}", {render_section(section)} }
            }
            Footer {}
        }
    }
}

fn render_section(section: Section) -> Element {
    match section {
        Section::Hero => rsx! { Hero {} },
        Section::About => rsx! { About {} },
        Section::Projects => rsx! { Projects {} },
        Section::Skills => rsx! { Skills {} },
        Section::Contact => rsx! { Contact {} },
    }
}

#[component]
pub fn InteractiveSite() -> Element {
    rsx! { Portfolio { variant: Variant::Interactive } }
}

#[component]
pub fn AnimatedSite() -> Element {
    rsx! { Portfolio { variant: Variant::Animated } }
}

#[component]
pub fn StaticSite() -> Element {
    rsx! { Portfolio { variant: Variant::Static } }
}
