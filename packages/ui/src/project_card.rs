use catalog::{OutboundLink, ProjectSummary};
use dioxus::prelude::*;

use crate::icons::{FaArrowUpRightFromSquare, FaCalendar, FaUser};
use crate::Icon;

/// Inline style clamping a description to `lines` lines with an ellipsis.
/// Callers pass [`catalog::ModalConfig::clamp_lines`], which is never zero.
pub fn line_clamp_style(lines: u8) -> String {
    format!("-webkit-line-clamp: {lines}; line-clamp: {lines};")
}

/// One entry of the project grid.
#[component]
pub fn ProjectCard(project: ProjectSummary, link_label: String, description_lines: u8) -> Element {
    let link = OutboundLink::for_url(&project.link);

    rsx! {
        div {
            class: "project-card",
            "data-project-id": "{project.id}",

            div {
                class: "project-card-media",
                img {
                    class: "project-card-image",
                    src: "{project.image}",
                    alt: "{project.title}",
                }
            }

            div {
                class: "project-card-content",
                h4 { class: "project-card-title", "{project.title}" }
                p {
                    class: "project-card-description",
                    style: line_clamp_style(description_lines),
                    "{project.description}"
                }

                div {
                    class: "project-card-meta",
                    span {
                        class: "project-card-meta-item",
                        Icon { icon: FaUser, width: 12, height: 12 }
                        "{project.role}"
                    }
                    span {
                        class: "project-card-meta-item",
                        Icon { icon: FaCalendar, width: 12, height: 12 }
                        "{project.date}"
                    }
                }

                a {
                    class: "project-card-link",
                    href: "{link.href}",
                    target: link.target,
                    rel: link.rel,
                    span { "{link_label}" }
                    Icon { icon: FaArrowUpRightFromSquare, width: 16, height: 16 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clamp_style() {
        assert_eq!(line_clamp_style(3), "-webkit-line-clamp: 3; line-clamp: 3;");
        assert_eq!(line_clamp_style(1), "-webkit-line-clamp: 1; line-clamp: 1;");
    }
}
