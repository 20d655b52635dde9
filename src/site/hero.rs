use dioxus::prelude::*;

use super::common::CONTAINER;
use crate::content::{CONTACT_TARGET, HERO, PRIMARY_CTA_TARGET, Section};
use crate::reveal::Reveal;
use crate::tilt::{TiltConfig, TiltSurface};
use crate::variant::Variant;

#[component]
pub fn Hero() -> Element {
    let variant = use_context::<Variant>();

    rsx! {
        section {
            id: Section::Hero.id(),
            style: "position: relative; padding-top: 120px;",
            div {
                style: CONTAINER,
                div {
                    class: "hero-grid",

                    // Copy
                    Reveal {
                        index: 0,
                        div {
                            style: "display: inline-flex; align-items: center; gap: 8px; padding: 4px 12px; border-radius: 999px; background: #dbeafe; color: #1d4ed8; font-size: 12px; font-weight: 500; box-shadow: 0 0 0 1px rgba(147,197,253,0.5);",
                            {HERO.badge}
                        }
                        h1 {
                            style: "font-size: 44px; font-weight: 800; letter-spacing: -0.02em; line-height: 1.15; margin: 16px 0 0 0;",
                            {HERO.headline}
                        }
                        p {
                            style: "margin: 16px 0 0 0; color: #4b5563; line-height: 1.6;",
                            {HERO.intro}
                        }
                        div {
                            style: "margin-top: 24px; display: flex; align-items: center; gap: 12px;",
                            a {
                                href: PRIMARY_CTA_TARGET.anchor(),
                                class: "btn-dark",
                                style: "padding: 8px 16px; border-radius: 6px; background: #111827; color: white; font-size: 14px; font-weight: 500; text-decoration: none;",
                                {HERO.primary_cta}
                            }
                            a {
                                href: CONTACT_TARGET.anchor(),
                                class: "btn-light",
                                style: "padding: 8px 16px; border-radius: 6px; background: white; color: #111827; font-size: 14px; font-weight: 500; text-decoration: none; box-shadow: 0 0 0 1px rgba(0,0,0,0.1);",
                                {HERO.secondary_cta}
                            }
                        }
                    }

                    // Avatar card
                    Reveal {
                        index: 1,
                        TiltSurface {
                            config: TiltConfig::HERO,
                            enabled: variant.tilts(),
                            style: "border-radius: 16px;",
                            div {
                                style: "aspect-ratio: 1 / 1; border-radius: 16px; background: linear-gradient(135deg, #c7d2fe, #ffffff 50%, #e9d5ff); box-shadow: 0 0 0 1px rgba(0,0,0,0.05); display: flex; align-items: center; justify-content: center;",
                                div {
                                    style: "text-align: center; padding: 32px;",
                                    div {
                                        style: "margin: 0 auto; width: 96px; height: 96px; border-radius: 50%; background: rgba(255,255,255,0.7); box-shadow: 0 0 0 1px rgba(0,0,0,0.05); display: flex; align-items: center; justify-content: center; font-size: 24px; font-weight: 700; color: #1d4ed8;",
                                        {HERO.initials}
                                    }
                                    div { style: "margin-top: 16px; font-weight: 600;", {HERO.name} }
                                    div { style: "font-size: 14px; color: #4b5563;", {HERO.role} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
