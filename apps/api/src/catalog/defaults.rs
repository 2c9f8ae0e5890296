//! Built-in reference lists: written out as the initial CSV sources on first
//! run, plus the short keyword lists used when override files are absent.

use std::path::Path;

use tracing::info;

use super::{CatalogError, DEGREES_FILE, JOB_TITLES_FILE, SKILLS_FILE};

pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "sql",
    "ai",
    "machine learning",
    "c++",
    "excel",
    "communication",
    "leadership",
    "accounting",
    "ca",
    "chartered accountant",
    "finance",
    "data analysis",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "degree", "mba", "b.com", "bca", "mca", "ca",
];

const DEFAULT_SKILLS: &[&str] = &[
    // Languages
    "Python", "Java", "C++", "C#", "JavaScript", "TypeScript", "PHP", "Ruby", "Go", "Swift",
    "Kotlin", "Scala", "MATLAB", "Perl", "Rust", "Objective-C", "VBA", "Shell Scripting",
    "PowerShell", "Bash", "HTML", "CSS", "SQL", "NoSQL", "Dart", "Lua", "Groovy", "Haskell",
    // Frameworks
    "React", "Angular", "Vue.js", "Django", "Flask", "Spring", "ASP.NET", "Express.js",
    "Node.js", "jQuery", "TensorFlow", "PyTorch", "Keras", "Scikit-learn", "Pandas", "NumPy",
    "Matplotlib", "Bootstrap", "Tailwind CSS", "Laravel", "Ruby on Rails", "FastAPI", "Redux",
    "Next.js", "Svelte", "Flutter",
    // Databases
    "MySQL", "PostgreSQL", "MongoDB", "SQLite", "Oracle", "Redis", "Cassandra", "DynamoDB",
    "Elasticsearch", "Firebase", "MariaDB", "Neo4j", "Snowflake",
    // Cloud
    "AWS", "Azure", "Google Cloud Platform", "Heroku", "DigitalOcean", "AWS Lambda",
    "Amazon S3", "EC2", "Azure Functions", "Google App Engine",
    // Tooling
    "Docker", "Kubernetes", "Jenkins", "Git", "GitHub", "GitLab", "Bitbucket", "CircleCI",
    "Ansible", "Terraform", "Puppet", "Chef", "Vagrant", "Jira", "Confluence",
];

const DEFAULT_JOB_TITLES: &[&str] = &[
    "Software Engineer", "Senior Software Engineer", "Software Developer",
    "Full Stack Developer", "Frontend Developer", "Backend Developer", "Mobile Developer",
    "iOS Developer", "Android Developer", "Web Developer", "DevOps Engineer",
    "Site Reliability Engineer", "Platform Engineer", "QA Engineer",
    "Test Automation Engineer", "Systems Architect", "Solutions Architect",
    "Technical Architect", "Cloud Architect", "Software Architect", "Data Scientist",
    "Data Analyst", "Business Intelligence Analyst", "Business Analyst", "Data Engineer",
    "Machine Learning Engineer", "AI Research Scientist", "Quantitative Analyst",
    "Big Data Engineer", "Project Manager", "Product Manager", "Program Manager",
    "Scrum Master", "Agile Coach", "Engineering Manager", "Technical Lead", "Team Lead",
    "CTO", "CIO",
];

const DEFAULT_DEGREES: &[&str] = &[
    "Bachelor of Science (BS)", "Bachelor of Arts (BA)", "Bachelor of Engineering (BE)",
    "Bachelor of Technology (BTech)", "Bachelor of Computer Science",
    "Bachelor of Computer Applications (BCA)", "Master of Science (MS)",
    "Master of Arts (MA)", "Master of Engineering (ME)", "Master of Technology (MTech)",
    "Master of Computer Applications (MCA)", "Master of Business Administration (MBA)",
    "Doctor of Philosophy (PhD)", "Doctor of Engineering (DEng)", "Doctor of Science (DSc)",
    "Associate of Science (AS)", "Associate of Arts (AA)", "Diploma in Computer Science",
];

/// Writes the default reference CSVs into `dir` when none of the three exist.
/// Returns whether anything was written. A partially populated directory is
/// left alone; missing categories there load as empty.
pub fn bootstrap_defaults(dir: &Path) -> Result<bool, CatalogError> {
    let sources = [
        (SKILLS_FILE, "Skill", DEFAULT_SKILLS),
        (JOB_TITLES_FILE, "Title", DEFAULT_JOB_TITLES),
        (DEGREES_FILE, "Degree", DEFAULT_DEGREES),
    ];
    if sources.iter().any(|(file, _, _)| dir.join(file).exists()) {
        return Ok(false);
    }

    std::fs::create_dir_all(dir).map_err(|source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for (file, column, values) in sources {
        let path = dir.join(file);
        let csv_err = |source| CatalogError::Csv {
            path: path.clone(),
            source,
        };
        let mut writer = csv::Writer::from_path(&path).map_err(csv_err)?;
        writer.write_record([column]).map_err(csv_err)?;
        for value in values {
            writer.write_record([value]).map_err(csv_err)?;
        }
        writer.flush().map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
    }
    info!("Wrote default reference sources to {}", dir.display());
    Ok(true)
}
