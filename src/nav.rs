//! Section navigation math: scroll targets and scroll-spy.

/// Height reserved for the fixed header when scrolling to a section.
pub const HEADER_OFFSET: u32 = 60;
/// Lead distance before a section top at which it becomes active.
pub const ACTIVATION_OFFSET: i64 = 100;
/// Distance from the document end treated as "at the bottom".
pub const BOTTOM_THRESHOLD: i64 = 50;
/// Section forced active once the page is scrolled to the bottom.
pub const BOTTOM_SECTION: &str = "contact";

/// Layout of one page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBox {
    pub id: String,
    pub top: u32,
    pub height: u32,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Viewport state at one scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll: u32,
    pub height: u32,
    pub document_height: u32,
}

impl Viewport {
    fn at_bottom(self) -> bool {
        i64::from(self.scroll) + i64::from(self.height)
            >= i64::from(self.document_height) - BOTTOM_THRESHOLD
    }
}

/// Scroll position that brings `section` just under the header.
pub fn scroll_target(section: &SectionBox) -> u32 {
    section.top.saturating_sub(HEADER_OFFSET)
}

/// Ids of the sections whose nav items should be marked active, in page order.
///
/// Overlapping section boxes can yield more than one id, as can the bottom
/// rule marking `contact` while another section is in range.
pub fn active_sections<'a>(sections: &'a [SectionBox], view: Viewport) -> Vec<&'a str> {
    let scroll = i64::from(view.scroll);
    let at_bottom = view.at_bottom();
    sections
        .iter()
        .filter(|section| {
            let top = i64::from(section.top) - ACTIVATION_OFFSET;
            let bottom = top + i64::from(section.height);
            (scroll >= top && scroll < bottom) || (section.id == BOTTOM_SECTION && at_bottom)
        })
        .map(|section| section.id.as_str())
        .collect()
}

/// Parse an `id:top:height` triple.
pub fn parse_section_box(text: &str) -> Result<SectionBox, String> {
    let mut parts = text.split(':');
    let (Some(id), Some(top), Some(height), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("invalid section `{text}` (expected id:top:height)"));
    };
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("invalid section `{text}`: empty id"));
    }
    let parse = |value: &str, what: &str| {
        value
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid section `{text}`: bad {what} `{value}`"))
    };
    Ok(SectionBox::new(id, parse(top, "top")?, parse(height, "height")?))
}
