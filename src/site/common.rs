use dioxus::prelude::*;

use crate::content::SectionCopy;
use crate::reveal::Reveal;

pub const CONTAINER: &str = "max-width: 1152px; margin: 0 auto; padding: 0 16px;";
pub const SECTION: &str = "padding: 80px 0;";

#[component]
pub fn Pill(children: Element) -> Element {
    rsx! {
        span {
            style: "display: inline-flex; align-items: center; padding: 4px 12px; border-radius: 999px; font-size: 12px; font-weight: 500; background: rgba(255,255,255,0.6); color: #374151; box-shadow: 0 0 0 1px rgba(0,0,0,0.05);",
            {children}
        }
    }
}

/// Eyebrow, title and subtitle at the top of a section
#[component]
pub fn SectionHeading(copy: SectionCopy) -> Element {
    rsx! {
        Reveal {
            style: "max-width: 768px; margin: 0 auto 40px auto; text-align: center;",
            if !copy.eyebrow.is_empty() {
                div {
                    style: "font-size: 12px; text-transform: uppercase; letter-spacing: 0.1em; color: #2563eb; font-weight: 600; margin-bottom: 8px;",
                    {copy.eyebrow}
                }
            }
            h2 {
                style: "font-size: 30px; font-weight: 700; color: #111827; margin: 0 0 12px 0;",
                {copy.title}
            }
            if !copy.subtitle.is_empty() {
                p {
                    style: "color: #4b5563; line-height: 1.6; margin: 0;",
                    {copy.subtitle}
                }
            }
        }
    }
}
