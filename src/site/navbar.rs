use dioxus::prelude::*;

use crate::content::{BRAND, BRAND_TARGET, CONTACT_CTA, CONTACT_TARGET, NAV_LINKS};
use crate::variant::Variant;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        header {
            style: "position: fixed; top: 0; left: 0; right: 0; z-index: 50; backdrop-filter: blur(8px); background: rgba(255,255,255,0.6); border-bottom: 1px solid rgba(0,0,0,0.05);",
            div {
                style: "max-width: 1152px; margin: 0 auto; padding: 12px 16px; display: flex; align-items: center; justify-content: space-between; gap: 16px;",

                a {
                    href: BRAND_TARGET.anchor(),
                    style: "font-weight: 700; font-size: 18px; letter-spacing: -0.02em; color: #111827; text-decoration: none;",
                    {BRAND}
                }

                nav {
                    class: "nav-links",
                    for (i, link) in NAV_LINKS.iter().enumerate() {
                        a {
                            key: "{i}",
                            class: "nav-link",
                            href: link.target.anchor(),
                            {link.label}
                        }
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 12px;",

                    // Variant switcher
                    div {
                        style: "display: flex; gap: 2px; padding: 2px; border-radius: 999px; background: rgba(255,255,255,0.8); box-shadow: 0 0 0 1px rgba(0,0,0,0.05);",
                        for (i, variant) in Variant::ALL.into_iter().enumerate() {
                            Link {
                                key: "{i}",
                                to: variant.route(),
                                class: "variant-link",
                                active_class: "active",
                                {variant.label()}
                            }
                        }
                    }

                    a {
                        href: CONTACT_TARGET.anchor(),
                        class: "btn-primary",
                        style: "font-size: 14px; font-weight: 500; padding: 6px 12px; border-radius: 6px; background: #2563eb; color: white; text-decoration: none;",
                        {CONTACT_CTA}
                    }
                }
            }
        }
    }
}
