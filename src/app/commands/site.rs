//! `render`, `projects` and `categories` command helpers.

use std::path::{Path, PathBuf};

use tarvix::appearance::Appearance;
use tarvix::content::{ContentBundle, Project};
use tarvix::error::SiteError;
use tarvix::projects::{ProjectTagIndex, ALL_LABEL};
use tarvix::render::css::render_root_block;
use tarvix::render::projects::render_project_modal;
use tarvix::render::team::render_team_modal;
use tarvix::render::{render_section, Section};

use crate::app::CommandContext;

/// File name of the stylesheet written next to the section fragments.
pub(crate) const PALETTE_FILE: &str = "palette.css";
/// Subdirectory holding one detail-modal fragment per team member and project.
pub(crate) const MODAL_DIR: &str = "modals";

/// Render one section to stdout, or every section into a directory.
pub(crate) async fn handle_render_command(
    ctx: &CommandContext<'_>,
    section: Option<Section>,
    out: Option<&str>,
) -> Result<(), SiteError> {
    let bundle = ctx.load_bundle().await?;
    if let Some(section) = section {
        let html =
            render_section(&bundle, section).ok_or(SiteError::MissingSection(section.key()))?;
        println!("{html}");
        return Ok(());
    }

    let dir = PathBuf::from(out.unwrap_or(&ctx.config.site.output_dir));
    let store = ctx.preference_store()?;
    let appearance = Appearance::resolve(&store, ctx.config.display.color_scheme)?;
    let written = write_site(&dir, &bundle, &appearance)?;

    let renderer = ctx.renderer;
    renderer.section(&format!("rendered {} files", written.len()));
    renderer.field("out", &dir.display().to_string());
    for path in &written {
        renderer.detail(&path.display().to_string());
    }
    for skipped in Section::all()
        .iter()
        .filter(|section| render_section(&bundle, **section).is_none())
    {
        renderer.warn(&format!("no content for `{skipped}`; section left unrendered"));
    }
    Ok(())
}

/// Write `<section>.html` for every section with content, the detail modals
/// under `modals/`, and the palette.
pub(crate) fn write_site(
    dir: &Path,
    bundle: &ContentBundle,
    appearance: &Appearance,
) -> Result<Vec<PathBuf>, SiteError> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for section in Section::all() {
        let Some(html) = render_section(bundle, *section) else {
            tracing::debug!(%section, "section skipped");
            continue;
        };
        let path = dir.join(format!("{}.html", section.key()));
        std::fs::write(&path, html)?;
        written.push(path);
    }
    written.extend(write_modals(&dir.join(MODAL_DIR), bundle)?);
    let css_path = dir.join(PALETTE_FILE);
    std::fs::write(&css_path, render_root_block(&appearance.palette()))?;
    written.push(css_path);
    tracing::info!(dir = %dir.display(), files = written.len(), "site rendered");
    Ok(written)
}

/// `team-<slug>.html` per member and `project-<slug>.html` per project.
fn write_modals(dir: &Path, bundle: &ContentBundle) -> Result<Vec<PathBuf>, SiteError> {
    let mut fragments = Vec::new();
    for member in bundle.team.as_deref().unwrap_or_default() {
        fragments.push((format!("team-{}", slug(&member.name)), render_team_modal(member)));
    }
    for project in bundle.projects.as_deref().unwrap_or_default() {
        fragments.push((
            format!("project-{}", slug(&project.title)),
            render_project_modal(project),
        ));
    }
    if fragments.is_empty() {
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(fragments.len());
    for (name, html) in fragments {
        let path = dir.join(format!("{name}.html"));
        if written.contains(&path) {
            tracing::warn!(path = %path.display(), "duplicate modal name; later entry wins");
        }
        std::fs::write(&path, html)?;
        written.push(path);
    }
    Ok(written)
}

/// Lowercase ASCII alphanumerics joined by single dashes.
pub(crate) fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "item".to_string()
    } else {
        trimmed.to_string()
    }
}

/// List projects passing `filter`, one per line.
pub(crate) async fn handle_projects_command(
    ctx: &CommandContext<'_>,
    filter: &str,
) -> Result<(), SiteError> {
    let index = project_index(ctx).await?;
    let matched = index.query(filter);
    let label = index
        .active_label(filter)
        .unwrap_or_else(|| ALL_LABEL.to_string());
    ctx.renderer
        .section(&format!("{label}: {} of {}", matched.len(), index.len()));
    for line in project_lines(&matched) {
        println!("{line}");
    }
    Ok(())
}

/// List filter options as `value<TAB>label`.
pub(crate) async fn handle_categories_command(ctx: &CommandContext<'_>) -> Result<(), SiteError> {
    let index = project_index(ctx).await?;
    for option in index.filter_options() {
        println!("{}\t{}", option.value, option.label);
    }
    Ok(())
}

async fn project_index(ctx: &CommandContext<'_>) -> Result<ProjectTagIndex, SiteError> {
    let bundle = ctx.load_bundle().await?;
    let records = bundle
        .projects
        .ok_or(SiteError::MissingSection(Section::Projects.key()))?;
    Ok(ProjectTagIndex::build(records))
}

fn project_lines(projects: &[&Project]) -> Vec<String> {
    projects
        .iter()
        .map(|project| format!("{}\t{}", project.title, project.tag_line()))
        .collect()
}
