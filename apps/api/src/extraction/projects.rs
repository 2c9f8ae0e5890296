use crate::extraction::text::{is_bulleted, locate_section, strip_bullet};
use crate::models::resume::ProjectEntry;

pub const PROJECT_HEADERS: &[&str] = &[
    "projects",
    "key projects",
    "professional projects",
    "portfolio",
    "project work",
];

const PROJECT_SECTION_CAP: usize = 800;
const MAX_TITLE_CHARS: usize = 100;
const MAX_DESCRIPTION_LINES: usize = 3;

/// Within the projects section, a short non-bulleted line opens a new project;
/// bullets and long continuation lines describe the current one.
pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
    let Some(section) = locate_section(text, PROJECT_HEADERS, PROJECT_SECTION_CAP) else {
        return Vec::new();
    };

    let mut projects = Vec::new();
    let mut current: Option<ProjectEntry> = None;

    for line in section.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if !is_bulleted(line) && line.chars().count() < MAX_TITLE_CHARS {
            if let Some(done) = current.take() {
                projects.push(done);
            }
            current = Some(ProjectEntry {
                title: line.to_string(),
                description: Vec::new(),
            });
        } else if let Some(project) = current.as_mut() {
            let described = strip_bullet(line);
            if !described.is_empty() {
                project.description.push(described.to_string());
            }
        }
    }
    projects.extend(current);

    for project in &mut projects {
        project.description.truncate(MAX_DESCRIPTION_LINES);
    }
    projects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_and_descriptions() {
        let text = "Jane Doe\nProjects\n\
            Resume Parser\n\
            • Extracts fields from PDFs\n\
            • Fuzzy search over records\n\
            Chess Engine\n\
            - Alpha-beta search\n\
            EDUCATION\n\
            University of Somewhere";
        let projects = extract_projects(text);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Resume Parser");
        assert_eq!(
            projects[0].description,
            vec!["Extracts fields from PDFs", "Fuzzy search over records"]
        );
        assert_eq!(projects[1].title, "Chess Engine");
        assert_eq!(projects[1].description, vec!["Alpha-beta search"]);
    }

    #[test]
    fn test_description_capped_at_three_lines() {
        let text = "Key Projects:\nOrbit Sim\n• one\n• two\n• three\n• four\n• five";
        let projects = extract_projects(text);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].description, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_long_line_continues_description() {
        let long = "A".to_string() + &"b".repeat(120);
        let text = format!("Portfolio\nWeather App\n{long}\n");
        let projects = extract_projects(&text);
        assert_eq!(projects[0].description, vec![long]);
    }

    #[test]
    fn test_bullets_before_any_title_are_dropped() {
        let text = "Projects\n• orphan bullet\nLedger\n• double entry";
        let projects = extract_projects(text);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Ledger");
    }

    #[test]
    fn test_no_section() {
        assert!(extract_projects("Experience\nEngineer").is_empty());
    }
}
