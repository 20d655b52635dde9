//! About, projects and skills sections

use dioxus::prelude::*;

use super::common::{CONTAINER, Pill, SECTION, SectionHeading};
use crate::content::{self, Project};
use crate::reveal::{Reveal, Stagger};
use crate::tilt::{TiltConfig, TiltSurface};
use crate::variant::Variant;

/// Skills pop in faster than cards
const SKILL_STAGGER: Stagger = Stagger { initial_delay_ms: 0, step_ms: 60, max_delay_ms: 480 };

#[component]
pub fn About() -> Element {
    let copy = content::ABOUT;

    rsx! {
        section {
            id: copy.id,
            style: SECTION,
            div {
                style: CONTAINER,
                SectionHeading { copy: copy }
                Reveal {
                    style: "max-width: 768px; margin: 0 auto; text-align: center; color: #374151; line-height: 1.6;",
                    {content::ABOUT_BODY}
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let copy = content::PROJECTS_SECTION;

    rsx! {
        section {
            id: copy.id,
            style: "{SECTION} background: rgba(255,255,255,0.6);",
            div {
                style: CONTAINER,
                SectionHeading { copy: copy }
                div {
                    class: "project-grid",
                    for (index, project) in content::PROJECTS.iter().enumerate() {
                        Reveal {
                            key: "{index}",
                            index: index,
                            ProjectCard { project: *project }
                        }
                    }
                }
            }
        }
    }
}

/// Card linking out to a project, tilting when the variant allows it
#[component]
fn ProjectCard(project: Project) -> Element {
    let variant = use_context::<Variant>();

    let preview = match project.image {
        Some(src) => rsx! {
            img {
                src: src,
                alt: project.title,
                style: "width: 100%; height: 100%; object-fit: cover;",
            }
        },
        None => rsx! {
            div { style: "color: #9ca3af; font-size: 14px;", "Preview" }
        },
    };

    rsx! {
        TiltSurface {
            config: TiltConfig::CARD,
            enabled: variant.tilts(),
            style: "border-radius: 12px; height: 100%;",
            a {
                href: project.link,
                target: "_blank",
                rel: "noreferrer",
                class: "project-card",
                style: "display: block; height: 100%; overflow: hidden; border-radius: 12px; background: rgba(255,255,255,0.7); box-shadow: 0 0 0 1px rgba(0,0,0,0.05), 0 1px 2px rgba(0,0,0,0.05); text-decoration: none;",

                div {
                    style: "aspect-ratio: 16 / 9; width: 100%; background: linear-gradient(135deg, #f1f5f9, #f8fafc); display: flex; align-items: center; justify-content: center;",
                    {preview}
                }
                div {
                    style: "padding: 16px;",
                    h3 {
                        class: "project-title",
                        style: "font-weight: 600; color: #111827; margin: 0 0 4px 0; transition: color 0.2s;",
                        {project.title}
                    }
                    p {
                        style: "font-size: 14px; color: #4b5563; margin: 0 0 12px 0; line-height: 1.6;",
                        {project.description}
                    }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 8px;",
                        for tag in project.tags.iter() {
                            Pill { key: "{tag}", {*tag} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    let copy = content::SKILLS_SECTION;

    rsx! {
        section {
            id: copy.id,
            style: SECTION,
            div {
                style: CONTAINER,
                SectionHeading { copy: copy }
                div {
                    style: "display: flex; flex-wrap: wrap; align-items: center; justify-content: center; gap: 12px;",
                    for (index, skill) in content::SKILLS.iter().enumerate() {
                        Reveal {
                            key: "{index}",
                            index: index,
                            stagger: SKILL_STAGGER,
                            style: "display: inline-block;",
                            Pill { {*skill} }
                        }
                    }
                }
            }
        }
    }
}
