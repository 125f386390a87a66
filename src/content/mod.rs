//! Content bundle data model.
//!
//! Mirrors the JSON document served at the data-source path. Every top-level
//! section is optional: a bundle missing `team` simply leaves the team section
//! unrendered.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

mod loader;

pub use loader::{load_bundle, parse_bundle, DataSource};

/// Whole site content document.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentBundle {
    pub about: Option<About>,
    pub team: Option<Vec<TeamMember>>,
    pub projects: Option<Vec<Project>>,
    pub footer: Option<Footer>,
    pub tech_stack: Option<TechStack>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<AboutCard>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutCard {
    pub icon: String,
    pub title: String,
    pub content: Option<String>,
    pub items: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
    /// Bullet-separated (`•`) specialty list.
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<Skill>>,
    pub experience: Option<Vec<String>>,
    pub contribution: Option<String>,
    pub education: Option<String>,
    pub links: Option<Vec<IconLink>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage.
    pub level: ScalarText,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct IconLink {
    pub url: String,
    pub icon: String,
}

/// One project record.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Filter tags, case-sensitive as authored.
    pub categories: Vec<String>,
    pub project_type: Option<String>,
    pub goals: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub stats: Option<Vec<Stat>>,
    pub key_technologies: Option<Vec<KeyTechnology>>,
    pub team_members: Option<Vec<ProjectContributor>>,
    pub links: Option<Vec<ProjectLink>>,
}

impl Project {
    /// Categories joined by single spaces, as carried on the card's `data-tags`.
    pub fn tag_line(&self) -> String {
        self.categories.join(" ")
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Stat {
    pub value: ScalarText,
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct KeyTechnology {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProjectContributor {
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProjectLink {
    pub url: String,
    pub icon: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Footer {
    pub social_links: Vec<SocialLink>,
    pub quick_links: Vec<TextLink>,
    pub contact_info: Vec<ContactInfo>,
    pub legal_links: Vec<TextLink>,
    pub copyright: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SocialLink {
    pub url: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TextLink {
    pub url: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ContactInfo {
    pub icon: String,
    pub text: String,
    pub url: Option<String>,
}

/// Technologies keyed by category id (`frontend`, `backend`, ...).
pub type TechStack = BTreeMap<String, Vec<TechItem>>;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TechItem {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Contact {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

/// A JSON string or number, shown exactly as authored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ScalarText {
    Text(String),
    Number(serde_json::Number),
}

impl Default for ScalarText {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for ScalarText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for ScalarText {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<u64> for ScalarText {
    fn from(number: u64) -> Self {
        Self::Number(number.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_sections_are_optional() {
        let bundle: ContentBundle = serde_json::from_str("{}").expect("empty bundle");
        assert_eq!(bundle, ContentBundle::default());
    }

    #[test]
    fn camel_case_fields_deserialize() {
        let json = r#"{
            "projects": [{
                "title": "Atlas",
                "description": "Maps",
                "icon": "fas fa-map",
                "categories": ["Web", "Mobile"],
                "projectType": "SaaS",
                "keyTechnologies": [{"name": "React"}],
                "teamMembers": [{"name": "Sam", "role": "Lead"}]
            }],
            "techStack": {"frontend": [{"name": "React", "icon": "fab fa-react"}]},
            "footer": {"contactInfo": [{"icon": "fas fa-at", "text": "hi@tarvix.dev"}]}
        }"#;
        let bundle: ContentBundle = serde_json::from_str(json).expect("bundle");
        let projects = bundle.projects.expect("projects");
        assert_eq!(projects[0].project_type.as_deref(), Some("SaaS"));
        assert_eq!(projects[0].tag_line(), "Web Mobile");
        assert_eq!(projects[0].key_technologies.as_ref().map(Vec::len), Some(1));
        assert_eq!(bundle.tech_stack.expect("tech")["frontend"][0].name, "React");
        assert_eq!(bundle.footer.expect("footer").contact_info[0].url, None);
    }

    #[test]
    fn numeric_stats_and_levels_keep_authored_form() {
        let json = r#"{
            "team": [{"name": "Sam", "skills": [{"name": "Rust", "level": 87.5}, {"name": "Go", "level": "60"}]}],
            "projects": [{"title": "Atlas", "stats": [{"value": 120, "label": "Clients"}, {"value": "99%", "label": "Uptime"}]}]
        }"#;
        let bundle: ContentBundle = serde_json::from_str(json).expect("bundle");
        let skills = bundle.team.expect("team")[0].skills.clone().expect("skills");
        assert_eq!(skills[0].level.to_string(), "87.5");
        assert_eq!(skills[1].level.to_string(), "60");
        let stats = bundle.projects.expect("projects")[0].stats.clone().expect("stats");
        assert_eq!(stats[0].value.to_string(), "120");
        assert_eq!(stats[1].value, ScalarText::from("99%"));
    }
}
