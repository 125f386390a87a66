//! Team cards and the team-member detail modal.

use crate::content::TeamMember;

use super::{escape, join_map, DEFAULT_AVATAR};

/// Non-blank bio lines shown on a card.
pub const BIO_PREVIEW_LINES: usize = 3;

pub fn render_team(members: &[TeamMember]) -> String {
    join_map(members, render_team_card)
}

/// Specialty chips: split on `•`, trimmed, blanks dropped.
pub fn specialty_items(specialty: Option<&str>) -> Vec<String> {
    specialty
        .map(|text| {
            text.split('•')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// First non-blank bio lines, each followed by `<br>`.
pub fn bio_preview(bio: Option<&str>) -> String {
    bio.unwrap_or_default()
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .take(BIO_PREVIEW_LINES)
        .map(|line| format!("{}<br>", escape(line)))
        .collect()
}

/// Full bio markup: blank-line paragraphs, line breaks, and decorated markers.
pub fn format_bio(bio: Option<&str>) -> String {
    let Some(bio) = bio else {
        return String::new();
    };
    escape(bio)
        .replace("\n\n", r#"</p><p class="bio-paragraph">"#)
        .replace('\n', "<br>")
        .replace('✅', r#"<span class="bio-check">✅</span>"#)
        .replace('🔹', r#"<span class="bio-bullet">🔹</span>"#)
}

fn avatar(member_avatar: Option<&str>) -> String {
    escape(member_avatar.unwrap_or(DEFAULT_AVATAR))
}

pub fn render_team_card(member: &TeamMember) -> String {
    let specialty = specialty_items(member.specialty.as_deref());
    let specialty_html = if specialty.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="team-specialty">{}</div>"#,
            join_map(&specialty, |item| format!("<span>{}</span>", escape(item)))
        )
    };
    format!(
        r#"<div class="team-card"><div class="team-avatar"><img src="{avatar}" alt="{name}" loading="lazy"></div><h3 class="team-name">{name}</h3><p class="team-role">{role}</p>{specialty_html}<div class="team-bio-preview">{bio}</div><div class="team-view-btn"><button class="btn btn-primary" data-member="{name}"><i class="fas fa-arrow-right"></i> View Details</button></div></div>"#,
        avatar = avatar(member.avatar.as_deref()),
        name = escape(&member.name),
        role = escape(&member.role),
        bio = bio_preview(member.bio.as_deref()),
    )
}

pub fn render_team_modal(member: &TeamMember) -> String {
    let experience = member
        .experience
        .as_deref()
        .filter(|items| !items.is_empty())
        .map(|items| {
            format!(
                r#"<div class="member-experience"><h4>Key Experience</h4><ul>{}</ul></div>"#,
                join_map(items, |item| format!(
                    r#"<li><i class="fas fa-check-circle"></i> {}</li>"#,
                    escape(item)
                ))
            )
        })
        .unwrap_or_default();
    let skills = member
        .skills
        .as_deref()
        .filter(|skills| !skills.is_empty())
        .map(|skills| {
            format!(
                r#"<div class="member-skills"><h4>Technical Skills</h4>{}</div>"#,
                join_map(skills, |skill| format!(
                    r#"<div class="skill-item"><span class="skill-name">{}</span><div class="skill-bar"><div class="skill-level" style="width: {level}%"></div></div><span class="skill-percent">{level}%</span></div>"#,
                    escape(&skill.name),
                    level = escape(&skill.level.to_string()),
                ))
            )
        })
        .unwrap_or_default();
    let contribution = member
        .contribution
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(|text| {
            format!(
                r#"<div class="member-contribution"><h4>Contribution to Tarvix</h4><p>{}</p></div>"#,
                escape(text)
            )
        })
        .unwrap_or_default();
    let education = member
        .education
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(|text| {
            format!(
                r#"<div class="member-education"><h4>Education</h4><p><i class="fas fa-graduation-cap"></i> {}</p></div>"#,
                escape(text)
            )
        })
        .unwrap_or_default();
    let links = member
        .links
        .as_deref()
        .filter(|links| !links.is_empty())
        .map(|links| {
            format!(
                r#"<div class="team-member-footer"><div class="member-social-links">{}</div></div>"#,
                join_map(links, |link| format!(
                    r#"<a href="{}" class="team-social-link" target="_blank" rel="noopener noreferrer"><i class="{}"></i></a>"#,
                    escape(&link.url),
                    escape(&link.icon),
                ))
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="team-member-header"><div class="member-avatar"><img src="{avatar}" alt="{name}" loading="lazy"></div><div class="member-basic-info"><h3>{name}</h3><p class="member-role">{role}</p><p class="member-specialty">{specialty}</p></div></div><div class="team-member-body"><div class="member-bio"><h4>Biography</h4><div class="bio-content"><p class="bio-paragraph">{bio}</p></div></div>{experience}{skills}{contribution}{education}</div>{links}"#,
        avatar = avatar(member.avatar.as_deref()),
        name = escape(&member.name),
        role = escape(&member.role),
        specialty = escape(member.specialty.as_deref().unwrap_or_default()),
        bio = format_bio(member.bio.as_deref()),
    )
}
