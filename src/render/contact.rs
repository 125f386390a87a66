//! Contact section header and info list.

use crate::content::ContentBundle;

use super::{escape, join_map};

/// Contact header plus contact-info items.
///
/// Needs both the `contact` section and the footer's contact info; with either
/// missing nothing is rendered.
pub fn render_contact(bundle: &ContentBundle) -> Option<String> {
    let contact = bundle.contact.as_ref()?;
    let info = &bundle.footer.as_ref()?.contact_info;

    let title = contact
        .title
        .as_deref()
        .map(|t| format!(r#"<h2 id="contactTitle" class="section-title">{}</h2>"#, escape(t)))
        .unwrap_or_default();
    let subtitle = contact
        .subtitle
        .as_deref()
        .map(|s| format!(r#"<p id="contactSubtitle" class="section-subtitle">{}</p>"#, escape(s)))
        .unwrap_or_default();
    let items = join_map(info, |item| {
        format!(
            r#"<div class="contact-info-item"><i class="{}"></i><span>{}</span></div>"#,
            escape(&item.icon),
            escape(&item.text),
        )
    });
    Some(format!(
        r#"{title}{subtitle}<div id="contactInfoContent">{items}</div>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Contact, ContactInfo, Footer};

    #[test]
    fn requires_footer_contact_info() {
        let mut bundle = ContentBundle {
            contact: Some(Contact {
                title: Some("Get in touch".into()),
                subtitle: None,
            }),
            ..ContentBundle::default()
        };
        assert_eq!(render_contact(&bundle), None);

        bundle.footer = Some(Footer {
            contact_info: vec![ContactInfo {
                icon: "fas fa-envelope".into(),
                text: "hello@tarvix.dev".into(),
                url: Some("mailto:hello@tarvix.dev".into()),
            }],
            ..Footer::default()
        });
        let html = render_contact(&bundle).expect("rendered");
        assert!(html.contains("Get in touch"));
        assert!(!html.contains("contactSubtitle"));
        assert!(html.contains("<span>hello@tarvix.dev</span>"));
    }
}
