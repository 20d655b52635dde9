use dioxus::prelude::*;

use super::common::{CONTAINER, SECTION, SectionHeading};
use crate::content::{self, CONTACT_NOTE, CONTACT_SUBMIT};
use crate::reveal::Reveal;

const FIELD: &str = "width: 100%; box-sizing: border-box; border-radius: 6px; border: 1px solid rgba(0,0,0,0.1); padding: 8px 12px; font-size: 14px; font-family: inherit;";

/// Contact form. Submission is left to the visitor's mail client.
#[component]
pub fn Contact() -> Element {
    let copy = content::CONTACT_SECTION;
    let action = content::mailto_action();

    rsx! {
        section {
            id: copy.id,
            style: "{SECTION} background: rgba(255,255,255,0.7);",
            div {
                style: CONTAINER,
                SectionHeading { copy: copy }
                Reveal {
                    style: "max-width: 576px; margin: 0 auto;",
                    div {
                        style: "border-radius: 12px; background: rgba(255,255,255,0.8); box-shadow: 0 0 0 1px rgba(0,0,0,0.05); padding: 20px;",
                        form {
                            action: action,
                            method: "post",
                            style: "display: grid; gap: 16px;",
                            input { class: "field", style: FIELD, r#type: "text", name: "name", placeholder: "Nama", required: true }
                            input { class: "field", style: FIELD, r#type: "email", name: "email", placeholder: "Email", required: true }
                            textarea { class: "field", style: FIELD, name: "message", rows: "4", placeholder: "Pesan", required: true }
                            button {
                                r#type: "submit",
                                class: "btn-primary",
                                style: "display: inline-flex; justify-content: center; align-items: center; padding: 8px 16px; border: none; border-radius: 6px; background: #2563eb; color: white; font-size: 14px; font-weight: 500; cursor: pointer;",
                                {CONTACT_SUBMIT}
                            }
                        }
                        p {
                            style: "font-size: 12px; color: #6b7280; margin: 12px 0 0 0;",
                            {CONTACT_NOTE}
                        }
                    }
                }
            }
        }
    }
}
