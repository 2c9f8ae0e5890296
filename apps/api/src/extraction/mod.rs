// Field Extractors: independent heuristics over one resume's raw text.
// Each is a pure function of (text, catalog); none keeps state between calls.

pub mod contact;
pub mod education;
pub mod experience;
pub mod name;
pub mod projects;
pub mod rules;
pub mod skills;
pub mod text;

pub use contact::extract_contact;
pub use education::extract_education;
pub use experience::extract_jobs;
pub use name::extract_name;
pub use projects::extract_projects;
pub use skills::extract_skills;
