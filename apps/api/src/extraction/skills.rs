use std::collections::BTreeSet;

use crate::catalog::ReferenceCatalog;
use crate::extraction::text::locate_section;
use crate::models::resume::capitalize;

pub const SKILL_HEADERS: &[&str] = &[
    "skills",
    "technical skills",
    "expertise",
    "competencies",
    "proficiencies",
    "technologies",
];

const SKILL_SECTION_CAP: usize = 500;

/// Union of two passes: catalog skills found inside the labeled skills section
/// (split on separators), and catalog skills found anywhere in the document.
/// Returned title-cased, sorted and deduplicated.
pub fn extract_skills(text: &str, catalog: &ReferenceCatalog) -> Vec<String> {
    let mut found: BTreeSet<String> = BTreeSet::new();

    if let Some(section) = locate_section(text, SKILL_HEADERS, SKILL_SECTION_CAP) {
        let tokens: Vec<String> = section
            .split(|c: char| matches!(c, ',' | '•' | '|' | '/' | '\n'))
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        for skill in catalog.skills() {
            if tokens.iter().any(|t| t.contains(skill.as_str())) {
                found.insert(title_case(skill));
            }
        }
    }

    let lower = text.to_lowercase();
    for skill in catalog.skills() {
        if lower.contains(skill.as_str()) {
            found.insert(title_case(skill));
        }
    }

    found.into_iter().collect()
}

fn title_case(skill: &str) -> String {
    skill
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
