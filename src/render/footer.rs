//! Site footer.

use crate::content::Footer;

use super::{escape, join_map};

/// Footer fragments, one per footer slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterFragments {
    pub social: String,
    pub links: String,
    pub legal: String,
    pub copyright: String,
}

pub fn footer_fragments(footer: &Footer) -> FooterFragments {
    let social = join_map(&footer.social_links, |link| {
        format!(
            r#"<a href="{}" class="social-link" aria-label="{}"><i class="{}"></i></a>"#,
            escape(&link.url),
            escape(&link.label),
            escape(&link.icon),
        )
    });
    let quick = join_map(&footer.quick_links, |link| {
        format!(
            r#"<li><a href="{}">{}</a></li>"#,
            escape(&link.url),
            escape(&link.text)
        )
    });
    let contact = join_map(&footer.contact_info, |info| {
        format!(
            r#"<li><a href="{}"><i class="{}"></i> {}</a></li>"#,
            escape(info.url.as_deref().unwrap_or("#")),
            escape(&info.icon),
            escape(&info.text),
        )
    });
    let links = format!(
        r#"<div class="footer-links-group"><h4 class="footer-links-title">Quick Links</h4><ul class="footer-links">{quick}</ul></div><div class="footer-links-group"><h4 class="footer-links-title">Contact</h4><ul class="footer-links">{contact}</ul></div>"#
    );
    let legal = join_map(&footer.legal_links, |link| {
        format!(
            r#"<a href="{}" class="legal-link">{}</a>"#,
            escape(&link.url),
            escape(&link.text)
        )
    });
    FooterFragments {
        social,
        links,
        legal,
        copyright: escape(&footer.copyright),
    }
}

/// Whole footer as one fragment.
pub fn render_footer(footer: &Footer) -> String {
    let parts = footer_fragments(footer);
    format!(
        r#"<div id="footerSocial">{}</div><div id="footerLinks">{}</div><div id="footerLegal">{}</div><p id="footerCopyright">{}</p>"#,
        parts.social, parts.links, parts.legal, parts.copyright
    )
}
