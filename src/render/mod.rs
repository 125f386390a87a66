//! HTML fragment and stylesheet rendering.
//!
//! Every renderer here is a pure function from content (or a palette) to a
//! string. Writing fragments into a page, toggling classes, and binding events
//! belong to whatever hosts the output.

use std::fmt;
use std::str::FromStr;

use crate::content::ContentBundle;
use crate::projects::ProjectTagIndex;

pub mod about;
pub mod contact;
pub mod css;
pub mod footer;
pub mod projects;
pub mod team;
pub mod tech;

/// Avatar used when a person has none.
pub const DEFAULT_AVATAR: &str = "assets/default-avatar.jpg";

/// Page section produced from the content bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    About,
    Team,
    Projects,
    TechStack,
    Footer,
    Contact,
}

impl Section {
    /// Stable key, also the output file stem.
    pub fn key(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Team => "team",
            Self::Projects => "projects",
            Self::TechStack => "tech",
            Self::Footer => "footer",
            Self::Contact => "contact",
        }
    }

    /// Sections in page order.
    pub fn all() -> &'static [Section] {
        &[
            Self::About,
            Self::Team,
            Self::Projects,
            Self::TechStack,
            Self::Footer,
            Self::Contact,
        ]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = match s.trim().to_ascii_lowercase().as_str() {
            "techstack" | "tech-stack" => "tech".to_string(),
            other => other.to_string(),
        };
        Self::all()
            .iter()
            .copied()
            .find(|section| section.key() == normalized)
            .ok_or_else(|| {
                let names = Self::all()
                    .iter()
                    .map(|section| section.key())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("unknown section `{s}`. Available sections: {names}")
            })
    }
}

/// Render one section, or `None` when the bundle lacks its data.
pub fn render_section(bundle: &ContentBundle, section: Section) -> Option<String> {
    match section {
        Section::About => bundle.about.as_ref().map(about::render_about),
        Section::Team => bundle.team.as_deref().map(team::render_team),
        Section::Projects => bundle.projects.as_ref().map(|records| {
            let index = ProjectTagIndex::build(records.clone());
            projects::render_projects_section(&index, crate::projects::ALL_FILTER)
        }),
        Section::TechStack => bundle.tech_stack.as_ref().map(tech::render_tech_stack),
        Section::Footer => bundle.footer.as_ref().map(footer::render_footer),
        Section::Contact => contact::render_contact(bundle),
    }
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Concatenate `render` over `items`.
pub(crate) fn join_map<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    items.iter().map(render).collect::<Vec<_>>().join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">R&D</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&lt;/a&gt;"
        );
        assert_eq!(escape("plain • text"), "plain • text");
    }

    #[test]
    fn section_parses_keys() {
        assert_eq!("Team".parse::<Section>(), Ok(Section::Team));
        assert_eq!("techStack".parse::<Section>(), Ok(Section::TechStack));
        assert_eq!("tech".parse::<Section>(), Ok(Section::TechStack));
        let err = "blog".parse::<Section>().expect_err("unknown");
        assert!(err.contains("Available sections"));
    }

    #[test]
    fn missing_sections_render_nothing() {
        let bundle = ContentBundle::default();
        for section in Section::all() {
            assert_eq!(render_section(&bundle, *section), None, "{section}");
        }
    }
}
