//! Project category index and filter queries.
//!
//! Filtering keeps the site's historical matching rule: a filter value matches
//! when it occurs anywhere inside the record's space-joined tag line, so `eb`
//! matches `Web`. This is almost certainly an accident of the original
//! string-contains check. It is reproduced for compatibility and should not be
//! extended; [`TagMatch::Exact`] is available for callers that want tag
//! equality instead.

use std::collections::{BTreeMap, BTreeSet};

use crate::content::Project;

/// Pseudo-tag matching every record.
pub const ALL_FILTER: &str = "all";
/// Label of the pseudo-tag option.
pub const ALL_LABEL: &str = "All Projects";

/// Rule used to test a filter value against a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagMatch {
    /// Case-sensitive substring of the space-joined tag line (site behavior).
    #[default]
    LegacySubstring,
    /// Case-sensitive equality with one of the record's tags.
    Exact,
}

/// One entry in the filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Value carried on the option (`data-filter`).
    pub value: String,
    pub label: String,
}

/// Category index over a loaded project list.
#[derive(Debug, Clone, Default)]
pub struct ProjectTagIndex {
    records: Vec<Project>,
    tag_lines: Vec<String>,
    by_tag: BTreeMap<String, BTreeSet<usize>>,
    categories: Vec<String>,
    matching: TagMatch,
}

impl ProjectTagIndex {
    /// Build an index using the legacy substring rule.
    pub fn build(records: Vec<Project>) -> Self {
        Self::build_with(records, TagMatch::LegacySubstring)
    }

    pub fn build_with(records: Vec<Project>, matching: TagMatch) -> Self {
        let mut by_tag: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();
        let mut categories = Vec::new();
        for (idx, record) in records.iter().enumerate() {
            for tag in &record.categories {
                let ids = by_tag.entry(tag.clone()).or_default();
                if ids.is_empty() {
                    categories.push(tag.clone());
                }
                ids.insert(idx);
            }
        }
        let tag_lines = records.iter().map(Project::tag_line).collect();
        tracing::debug!(
            records = records.len(),
            categories = categories.len(),
            "project tag index built"
        );
        Self {
            records,
            tag_lines,
            by_tag,
            categories,
            matching,
        }
    }

    pub fn records(&self) -> &[Project] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories. Order carries no contract.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether the record at `idx` passes `filter`.
    pub fn matches(&self, idx: usize, filter: &str) -> bool {
        if filter == ALL_FILTER {
            return idx < self.records.len();
        }
        match self.matching {
            TagMatch::LegacySubstring => self
                .tag_lines
                .get(idx)
                .is_some_and(|line| line.contains(filter)),
            TagMatch::Exact => self
                .by_tag
                .get(filter)
                .is_some_and(|ids| ids.contains(&idx)),
        }
    }

    /// Records passing `filter`, in input order.
    pub fn query(&self, filter: &str) -> Vec<&Project> {
        self.records
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.matches(*idx, filter))
            .map(|(_, record)| record)
            .collect()
    }

    /// Per-record visibility for `filter`, in input order.
    pub fn visibility(&self, filter: &str) -> Vec<bool> {
        (0..self.records.len())
            .map(|idx| self.matches(idx, filter))
            .collect()
    }

    /// Dropdown options: the `all` pseudo-tag first, then each category.
    pub fn filter_options(&self) -> Vec<FilterOption> {
        std::iter::once(FilterOption {
            value: ALL_FILTER.to_string(),
            label: ALL_LABEL.to_string(),
        })
        .chain(self.categories.iter().map(|category| FilterOption {
            value: category.clone(),
            label: capitalize_first(category),
        }))
        .collect()
    }

    /// Label of the option carrying exactly `filter`, if any.
    pub fn active_label(&self, filter: &str) -> Option<String> {
        self.filter_options()
            .into_iter()
            .find(|option| option.value == filter)
            .map(|option| option.label)
    }
}

/// Upper-case the first character, leaving the rest as authored.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::project_fixture as project;


    fn sample() -> ProjectTagIndex {
        ProjectTagIndex::build(vec![
            project("atlas", &["Web", "Mobile"]),
            project("beacon", &["blockchain"]),
            project("cirrus", &["Web", "cloud"]),
        ])
    }

    fn titles(records: Vec<&Project>) -> Vec<&str> {
        records.into_iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn all_returns_every_record_in_order() {
        assert_eq!(titles(sample().query("all")), vec!["atlas", "beacon", "cirrus"]);
    }

    #[test]
    fn exact_tag_matches_in_input_order() {
        assert_eq!(titles(sample().query("Web")), vec!["atlas", "cirrus"]);
    }

    #[test]
    fn substring_quirk_matches_partial_tags() {
        assert_eq!(titles(sample().query("eb")), vec!["atlas", "cirrus"]);
        // The joined tag line lets a filter straddle two tags.
        assert_eq!(titles(sample().query("b Mob")), vec!["atlas"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(sample().query("mobile").is_empty());
        assert_eq!(titles(sample().query("Mob")), vec!["atlas"]);
    }

    #[test]
    fn exact_mode_requires_tag_equality() {
        let index = ProjectTagIndex::build_with(
            vec![project("atlas", &["Web", "Mobile"])],
            TagMatch::Exact,
        );
        assert!(index.query("eb").is_empty());
        assert_eq!(index.query("Web").len(), 1);
    }

    #[test]
    fn empty_index_answers_empty() {
        let index = ProjectTagIndex::build(Vec::new());
        assert!(index.query("all").is_empty());
        assert!(index.query("Web").is_empty());
        assert!(index.categories().is_empty());
    }

    #[test]
    fn categories_are_distinct() {
        let index = sample();
        let mut cats = index.categories().to_vec();
        cats.sort();
        assert_eq!(cats, vec!["Mobile", "Web", "blockchain", "cloud"]);
    }

    #[test]
    fn filter_options_lead_with_all_and_capitalize() {
        let options = sample().filter_options();
        assert_eq!(options[0].value, "all");
        assert_eq!(options[0].label, "All Projects");
        let chain = options
            .iter()
            .find(|o| o.value == "blockchain")
            .expect("blockchain option");
        assert_eq!(chain.label, "Blockchain");
        assert_eq!(options.len(), 5);
    }

    #[test]
    fn active_label_requires_exact_option_value() {
        let index = sample();
        assert_eq!(index.active_label("cloud").as_deref(), Some("Cloud"));
        assert_eq!(index.active_label("all").as_deref(), Some("All Projects"));
        assert_eq!(index.active_label("eb"), None);
    }

    #[test]
    fn visibility_tracks_query() {
        assert_eq!(sample().visibility("cloud"), vec![false, false, true]);
    }
}
