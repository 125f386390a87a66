//! `contact` and `nav` command helpers.

use tarvix::error::SiteError;
use tarvix::form::ContactForm;
use tarvix::nav::{active_sections, scroll_target, SectionBox, Viewport};

use crate::app::CommandContext;

/// Validate and submit the contact form; rejected fields fail the command.
pub(crate) fn handle_contact_command(
    ctx: &CommandContext<'_>,
    name: String,
    email: String,
    message: String,
) -> Result<(), SiteError> {
    let form = ContactForm {
        name,
        email,
        message,
    };
    let submission = form.submit()?;
    ctx.renderer.section("contact");
    println!("{}", submission.message);
    Ok(())
}

/// Print each section's scroll target, marking active ones with `*`.
pub(crate) fn handle_nav_command(
    scroll: u32,
    viewport: u32,
    document: u32,
    sections: &[SectionBox],
) -> Result<(), SiteError> {
    let view = Viewport {
        scroll,
        height: viewport,
        document_height: document,
    };
    for line in nav_lines(sections, view) {
        println!("{line}");
    }
    Ok(())
}

fn nav_lines(sections: &[SectionBox], view: Viewport) -> Vec<String> {
    let active = active_sections(sections, view);
    sections
        .iter()
        .map(|section| {
            let marker = if active.contains(&section.id.as_str()) {
                "*"
            } else {
                " "
            };
            format!("{marker} {}\t{}", section.id, scroll_target(section))
        })
        .collect()
}
