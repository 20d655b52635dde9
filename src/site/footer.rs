use dioxus::prelude::*;

use crate::content::{BRAND, FOOTER_TAGLINE};
use crate::dom;

#[component]
pub fn Footer() -> Element {
    let year = use_hook(dom::current_year);

    rsx! {
        footer {
            style: "padding: 40px 0; text-align: center; font-size: 14px; color: #6b7280;",
            "\u{a9} {year} {BRAND} \u{2014} {FOOTER_TAGLINE}"
        }
    }
}
