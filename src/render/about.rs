//! About section.

use crate::content::{About, AboutCard};

use super::{escape, join_map};

/// Brand name highlighted after the about title.
pub const BRAND: &str = "Tarvix";

pub fn render_about(about: &About) -> String {
    let header = format!(
        r#"<div class="about-header"><h2 class="section-title">{} <span class="gradient-text">{BRAND}</span></h2><p class="section-subtitle">{}</p></div>"#,
        escape(&about.title),
        escape(&about.subtitle),
    );
    let cards = join_map(&about.cards, render_card);
    format!(
        r#"<div class="grid"><div class="col-12">{header}<div class="about-grid">{cards}</div></div></div>"#
    )
}

fn render_card(card: &AboutCard) -> String {
    let content = card
        .content
        .as_deref()
        .map(|text| format!("<p>{}</p>", escape(text)))
        .unwrap_or_default();
    let items = card
        .items
        .as_deref()
        .map(|items| {
            format!(
                r#"<ul class="styled-list">{}</ul>"#,
                join_map(items, |item| format!("<li>{}</li>", escape(item)))
            )
        })
        .unwrap_or_default();
    let tags = card
        .tags
        .as_deref()
        .map(|tags| {
            format!(
                r#"<div class="tech-tags" style="margin-top: var(--spacing-l);">{}</div>"#,
                join_map(tags, |tag| format!(r#"<span class="tag">{}</span>"#, escape(tag)))
            )
        })
        .unwrap_or_default();
    format!(
        r#"<div class="about-card"><div class="card-icon"><i class="fas {}" style="--fa-animation-duration: 2s;"></i></div><h3>{}</h3>{content}{items}{tags}</div>"#,
        escape(&card.icon),
        escape(&card.title),
    )
}
