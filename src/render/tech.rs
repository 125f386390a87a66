//! Technology stack section.

use crate::content::{TechItem, TechStack};

use super::{escape, join_map};

/// Display metadata for one tech-stack category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Categories in display order. Bundle keys outside this list are not shown.
pub const TECH_CATEGORIES: &[TechCategory] = &[
    TechCategory {
        id: "frontend",
        title: "Frontend",
        icon: "fas fa-laptop-code",
    },
    TechCategory {
        id: "backend",
        title: "Backend",
        icon: "fas fa-server",
    },
    TechCategory {
        id: "design",
        title: "Design",
        icon: "fas fa-paint-brush",
    },
    TechCategory {
        id: "infrastructure",
        title: "DevOps & Infrastructure",
        icon: "fas fa-cloud",
    },
];

const DIVIDER: &str = r#"<div class="category-divider"><div class="divider-line"></div><div class="divider-icon"><i class="fas fa-ellipsis-h"></i></div><div class="divider-line"></div></div>"#;

pub fn render_tech_stack(stack: &TechStack) -> String {
    let mut body = String::new();
    for (position, category) in TECH_CATEGORIES.iter().enumerate() {
        let Some(items) = stack.get(category.id) else {
            continue;
        };
        body.push_str(&render_category(category, items));
        // The divider trails every rendered category except the last in display order.
        if position + 1 < TECH_CATEGORIES.len() {
            body.push_str(DIVIDER);
        }
    }
    format!(
        r#"<div class="grid"><div class="col-12"><h2 class="section-title">Our Technology Stack</h2><p class="section-subtitle">Integrated tools for end-to-end development</p></div><div class="tech-stack-container">{body}</div></div>"#
    )
}

fn render_category(category: &TechCategory, items: &[TechItem]) -> String {
    let cards = join_map(items, |tech| {
        format!(
            r#"<div class="tech-card"><div class="tech-card-icon"><i class="{}"></i></div><div class="tech-card-name">{}</div></div>"#,
            escape(&tech.icon),
            escape(&tech.name),
        )
    });
    format!(
        r#"<div class="tech-category-wrapper"><div class="tech-category-header"><div class="category-title-container"><i class="{}"></i><h3>{}</h3></div></div><div class="tech-items-container">{cards}</div></div>"#,
        category.icon,
        escape(category.title),
    )
}
