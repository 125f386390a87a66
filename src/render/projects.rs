//! Project cards, filter dropdown, and project detail modal.

use crate::content::{KeyTechnology, Project};
use crate::projects::{ProjectTagIndex, ALL_FILTER};

use super::{escape, join_map, DEFAULT_AVATAR};

const DEFAULT_PROJECT_TYPE: &str = "Custom project";
const DEFAULT_GOALS: &str = "To deliver a high-quality solution meeting client requirements";
const FALLBACK_TECH_ICON: &str = "fas fa-check-circle";

/// Icon class for a named technology.
pub fn tech_icon(name: &str) -> &'static str {
    match name {
        "Flutter" => "fab fa-flutter",
        "Dart" => "fab fa-dart",
        "WebSockets" => "fas fa-plug",
        "Data Visualization" => "fas fa-chart-line",
        "Ethereum" => "fab fa-ethereum",
        "Solidity" => "fas fa-code",
        "Node.js" => "fab fa-node-js",
        "React" => "fab fa-react",
        _ => FALLBACK_TECH_ICON,
    }
}

/// Filter dropdown with `filter` marked active.
pub fn render_filter(index: &ProjectTagIndex, filter: &str) -> String {
    let options = index.filter_options();
    let items = join_map(&options, |option| {
        let class = if option.value == filter {
            "filter-option active"
        } else {
            "filter-option"
        };
        format!(
            r#"<li><a class="{class}" data-filter="{}">{}</a></li>"#,
            escape(&option.value),
            escape(&option.label),
        )
    });
    let label = index
        .active_label(filter)
        .or_else(|| index.active_label(ALL_FILTER))
        .unwrap_or_default();
    format!(
        r#"<div class="projects-filter"><button id="filterToggle" class="filter-toggle"><span id="filterLabel">{}</span></button><ul id="projectsFilter">{items}</ul></div>"#,
        escape(&label)
    )
}

/// One project card; `visible` drives its inline display style.
pub fn render_project_card(project: &Project, visible: bool) -> String {
    let tags = if project.categories.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="project-tags">{}</div>"#,
            join_map(&project.categories, |tag| format!(
                r#"<span class="tag">{}</span>"#,
                escape(tag)
            ))
        )
    };
    let display = if visible { "block" } else { "none" };
    format!(
        r#"<div class="col-4" data-tags="{tag_line}" style="display: {display};"><div class="card project-card"><div class="card-header"><i class="{icon}"></i> {title}</div><div class="card-body"><p class="project-description">{description}</p>{tags}<div style="margin-top: auto;"><button class="btn btn-primary card-btn" data-project="{title}"><i class="fas fa-info-circle"></i> View Details</button></div></div></div></div>"#,
        tag_line = escape(&project.tag_line()),
        icon = escape(&project.icon),
        title = escape(&project.title),
        description = escape(&project.description),
    )
}

/// Project grid with each card's visibility under `filter`.
pub fn render_project_grid(index: &ProjectTagIndex, filter: &str) -> String {
    let visibility = index.visibility(filter);
    let cards: String = index
        .records()
        .iter()
        .zip(visibility)
        .map(|(project, visible)| render_project_card(project, visible))
        .collect();
    format!(
        r#"<div class="projects-grid">{cards}</div><button class="btn btn-outline show-more-btn"><i class="fas fa-chevron-down"></i> Show More Projects</button>"#
    )
}

/// Filter dropdown followed by the grid.
pub fn render_projects_section(index: &ProjectTagIndex, filter: &str) -> String {
    format!(
        "{}{}",
        render_filter(index, filter),
        render_project_grid(index, filter)
    )
}

fn render_technology(tech: &KeyTechnology) -> String {
    let value = tech
        .value
        .as_deref()
        .map(|value| format!(r#"<span class="tech-value">{}</span>"#, escape(value)))
        .unwrap_or_default();
    format!(
        r#"<div class="tech-pill"><i class="{}" style="color: var(--color-primary);"></i><span>{} : </span>{value}</div>"#,
        tech_icon(&tech.name),
        escape(&tech.name),
    )
}

fn section(title: &str, body: &str) -> String {
    format!(r#"<div class="project-section"><h4>{title}</h4>{body}</div>"#)
}

pub fn render_project_modal(project: &Project) -> String {
    let mut html = format!(
        r#"<div class="project-header"><h2>{}</h2><p class="project-type">{}</p></div>"#,
        escape(&project.title),
        escape(project.project_type.as_deref().unwrap_or(DEFAULT_PROJECT_TYPE)),
    );
    html.push_str(&section(
        "Project Overview",
        &format!("<p>{}</p>", escape(&project.description)),
    ));
    html.push_str(&section(
        "Project Goals",
        &format!(
            "<p>{}</p>",
            escape(project.goals.as_deref().unwrap_or(DEFAULT_GOALS))
        ),
    ));

    if let Some(achievements) = project.achievements.as_deref().filter(|a| !a.is_empty()) {
        let items = join_map(achievements, |item| {
            format!(
                r#"<li><i class="fas fa-check-circle" style="color: var(--color-primary);"></i> {}</li>"#,
                escape(item)
            )
        });
        html.push_str(&section(
            "Key Achievements",
            &format!(r#"<ul class="styled-list">{items}</ul>"#),
        ));
    }

    if let Some(stats) = project.stats.as_deref().filter(|s| !s.is_empty()) {
        let cards = join_map(stats, |stat| {
            format!(
                r#"<div class="modern-stat-card"><div class="modern-stat-value">{}</div><div class="modern-stat-label">{}</div></div>"#,
                escape(&stat.value.to_string()),
                escape(&stat.label),
            )
        });
        let metrics = section(
            "Key Metrics",
            &format!(r#"<div class="modern-stats-grid">{cards}</div>"#),
        );
        html.push_str(&section("Project Metrics", &metrics));
    }

    if let Some(techs) = project.key_technologies.as_deref().filter(|t| !t.is_empty()) {
        html.push_str(&section(
            "Key Technologies",
            &format!(
                r#"<div class="project-technologies">{}</div>"#,
                join_map(techs, render_technology)
            ),
        ));
    }

    if let Some(members) = project.team_members.as_deref().filter(|m| !m.is_empty()) {
        let rows = join_map(members, |member| {
            format!(
                r#"<div class="team-member"><div class="member-avatar"><img src="{}" alt="{name}"></div><div class="member-info"><span class="member-role">- {}:</span><span class="member-name">{name}</span></div></div>"#,
                escape(member.avatar.as_deref().unwrap_or(DEFAULT_AVATAR)),
                escape(&member.role),
                name = escape(&member.name),
            )
        });
        html.push_str(&section(
            "Some of the key contributors to this project:",
            &format!(r#"<div class="project-team">{rows}</div>"#),
        ));
    }

    if let Some(links) = project.links.as_deref().filter(|l| !l.is_empty()) {
        let anchors = join_map(links, |link| {
            let style = if link.icon.contains("github") {
                "btn-outline"
            } else {
                "btn-primary"
            };
            format!(
                r#"<a href="{}" class="btn {style}" target="_blank" rel="noopener noreferrer"><i class="{}"></i> {}</a>"#,
                escape(&link.url),
                escape(&link.icon),
                escape(&link.title),
            )
        });
        html.push_str(&section(
            "Project Links",
            &format!(r#"<div class="project-links">{anchors}</div>"#),
        ));
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::project_fixture as project;
    use crate::content::{ProjectLink, Stat};


    #[test]
    fn tech_icon_falls_back() {
        assert_eq!(tech_icon("React"), "fab fa-react");
        assert_eq!(tech_icon("COBOL"), "fas fa-check-circle");
    }

    #[test]
    fn grid_hides_non_matching_cards() {
        let index = ProjectTagIndex::build(vec![
            project("Atlas", &["Web"]),
            project("Beacon", &["blockchain"]),
        ]);
        let html = render_project_grid(&index, "blockchain");
        assert!(html.contains(r#"data-tags="Web" style="display: none;""#));
        assert!(html.contains(r#"data-tags="blockchain" style="display: block;""#));
    }

    #[test]
    fn filter_marks_active_option_and_label() {
        let index = ProjectTagIndex::build(vec![project("Atlas", &["web"])]);
        let html = render_filter(&index, "web");
        assert!(html.contains(r#"<a class="filter-option active" data-filter="web">Web</a>"#));
        assert!(html.contains(r#"<span id="filterLabel">Web</span>"#));

        // Partial filters still show cards but keep the "all" label.
        let partial = render_filter(&index, "we");
        assert!(partial.contains(r#"<span id="filterLabel">All Projects</span>"#));
    }

    #[test]
    fn modal_uses_defaults_and_link_styles() {
        let mut p = project("Atlas", &["Web"]);
        p.stats = Some(vec![Stat {
            value: "99%".into(),
            label: "Uptime".into(),
        }]);
        p.links = Some(vec![
            ProjectLink {
                url: "https://github.com/x".into(),
                icon: "fab fa-github".into(),
                title: "Source".into(),
            },
            ProjectLink {
                url: "https://x.dev".into(),
                icon: "fas fa-globe".into(),
                title: "Live".into(),
            },
        ]);
        let html = render_project_modal(&p);
        assert!(html.contains("Custom project"));
        assert!(html.contains(DEFAULT_GOALS));
        assert!(html.contains(
            r#"<div class="project-section"><h4>Project Metrics</h4><div class="project-section"><h4>Key Metrics</h4><div class="modern-stats-grid">"#
        ));
        assert!(html.contains(r#"class="btn btn-outline""#));
        assert!(html.contains(r#"class="btn btn-primary""#));
        assert!(!html.contains("Key Achievements"));
        assert!(!html.contains("Key Technologies"));
    }
}
