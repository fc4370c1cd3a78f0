//! Learning roadmap tables and the plain-text export.

use std::fmt::Write as _;

use chrono::Local;
use heck::ToKebabCase;
use serde::Serialize;

use crate::career::TargetRole;

/// A single learning recommendation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Recommendation {
    pub skill: &'static str,
    pub resource: &'static str,
    pub link: &'static str,
    pub duration: &'static str,
}

/// A role's learning path, split into three horizons of three items each.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Roadmap {
    pub short_term: [Recommendation; 3],
    pub medium_term: [Recommendation; 3],
    pub long_term: [Recommendation; 3],
}

/// The first item of each horizon, shown as the "next steps" digest.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NextSteps {
    pub this_week: Recommendation,
    pub this_month: Recommendation,
    pub this_quarter: Recommendation,
}

impl Roadmap {
    pub fn next_steps(&self) -> NextSteps {
        let [this_week, ..] = self.short_term;
        let [this_month, ..] = self.medium_term;
        let [this_quarter, ..] = self.long_term;

        NextSteps {
            this_week,
            this_month,
            this_quarter,
        }
    }
}

impl TargetRole {
    /// The curated roadmap for this role. Only three roles have their own
    /// tables; everything else gets the Data Scientist track.
    pub fn roadmap(self) -> &'static Roadmap {
        match self {
            Self::WebDeveloper => &WEB_DEVELOPER,
            Self::AiEngineer => &AI_ENGINEER,
            _ => &DATA_SCIENTIST,
        }
    }
}

const fn rec(
    skill: &'static str,
    resource: &'static str,
    link: &'static str,
    duration: &'static str,
) -> Recommendation {
    Recommendation {
        skill,
        resource,
        link,
        duration,
    }
}

static DATA_SCIENTIST: Roadmap = Roadmap {
    short_term: [
        rec(
            "Pandas Data Manipulation",
            "Coursera",
            "https://coursera.org",
            "1 week",
        ),
        rec("SQL Fundamentals", "W3Schools", "https://w3schools.com", "2 weeks"),
        rec(
            "Data Visualization with Matplotlib",
            "YouTube",
            "https://youtube.com",
            "1 week",
        ),
    ],
    medium_term: [
        rec(
            "Machine Learning with Scikit-learn",
            "edX",
            "https://edx.org",
            "1 month",
        ),
        rec(
            "Statistics for Data Science",
            "Khan Academy",
            "https://khanacademy.org",
            "2 months",
        ),
        rec(
            "Advanced Python Programming",
            "Codecademy",
            "https://codecademy.com",
            "1.5 months",
        ),
    ],
    long_term: [
        rec(
            "AWS Certified Data Analytics",
            "AWS Training",
            "https://aws.amazon.com",
            "6 months",
        ),
        rec(
            "Deep Learning Specialization",
            "Coursera",
            "https://coursera.org",
            "4 months",
        ),
        rec(
            "Complete a Kaggle Competition",
            "Kaggle",
            "https://kaggle.com",
            "3 months",
        ),
    ],
};

static WEB_DEVELOPER: Roadmap = Roadmap {
    short_term: [
        rec(
            "ES6+ JavaScript Features",
            "MDN Web Docs",
            "https://developer.mozilla.org",
            "1 week",
        ),
        rec("CSS Flexbox & Grid", "CSS-Tricks", "https://css-tricks.com", "1 week"),
        rec(
            "Git Version Control",
            "GitHub Learning Lab",
            "https://github.com",
            "2 weeks",
        ),
    ],
    medium_term: [
        rec(
            "React.js Fundamentals",
            "React Official Tutorial",
            "https://react.dev",
            "1 month",
        ),
        rec(
            "Node.js & Express.js",
            "freeCodeCamp",
            "https://freecodecamp.org",
            "2 months",
        ),
        rec(
            "RESTful API Development",
            "Postman Learning Center",
            "https://learning.postman.com",
            "1 month",
        ),
    ],
    long_term: [
        rec(
            "AWS Cloud Practitioner Certification",
            "AWS",
            "https://aws.amazon.com",
            "3 months",
        ),
        rec("Full-Stack Portfolio Project", "Self-directed", "#", "4 months"),
        rec(
            "Docker & Containerization",
            "Docker Documentation",
            "https://docs.docker.com",
            "2 months",
        ),
    ],
};

static AI_ENGINEER: Roadmap = Roadmap {
    short_term: [
        rec("Python for AI", "Python.org", "https://python.org", "2 weeks"),
        rec(
            "NumPy & Linear Algebra",
            "NumPy Documentation",
            "https://numpy.org",
            "1 week",
        ),
        rec(
            "Introduction to Neural Networks",
            "YouTube - 3Blue1Brown",
            "https://youtube.com",
            "1 week",
        ),
    ],
    medium_term: [
        rec(
            "TensorFlow 2.0",
            "TensorFlow Documentation",
            "https://tensorflow.org",
            "2 months",
        ),
        rec(
            "Computer Vision with OpenCV",
            "OpenCV Tutorials",
            "https://opencv.org",
            "1.5 months",
        ),
        rec(
            "Natural Language Processing",
            "spaCy Documentation",
            "https://spacy.io",
            "2 months",
        ),
    ],
    long_term: [
        rec(
            "TensorFlow Developer Certification",
            "Google",
            "https://tensorflow.org/certificate",
            "4 months",
        ),
        rec("MLOps with Kubernetes", "Kubeflow", "https://kubeflow.org", "3 months"),
        rec("Build an AI Product End-to-End", "Self-directed", "#", "6 months"),
    ],
};

/// Default file name for the text export, e.g. `data-scientist-career-roadmap.txt`.
pub fn export_file_name(role: TargetRole) -> String {
    format!("{}-career-roadmap.txt", role.to_string().to_kebab_case())
}

/// Render the roadmap as the downloadable plain-text report.
pub fn render_text(role: TargetRole, roadmap: &Roadmap) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Career Roadmap");
    let _ = writeln!(out, "Personalized learning path for {role}");
    let _ = writeln!(out, "Generated on: {}", Local::now().format("%Y-%m-%d"));
    let _ = writeln!(out);
    let _ = writeln!(out, "========================================");
    let _ = writeln!(out);

    render_section(&mut out, "SHORT-TERM GOALS (1-2 weeks)", &roadmap.short_term);
    render_section(&mut out, "MEDIUM-TERM GOALS (1-3 months)", &roadmap.medium_term);
    render_section(&mut out, "LONG-TERM GOALS", &roadmap.long_term);

    let next = roadmap.next_steps();
    let _ = writeln!(out, "NEXT STEPS");
    let _ = writeln!(out, "==========");
    let _ = writeln!(out, "This Week: {}", next.this_week.skill);
    let _ = writeln!(out, "This Month: {}", next.this_month.skill);
    let _ = writeln!(out, "This Quarter: {}", next.this_quarter.skill);
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated by SkillBridge");

    out
}

fn render_section(out: &mut String, title: &str, items: &[Recommendation]) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));
    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, item.skill);
        let _ = writeln!(out, "   Resource: {}", item.resource);
        let _ = writeln!(out, "   Duration: {}", item.duration);
        let _ = writeln!(out, "   Link: {}", item.link);
        let _ = writeln!(out);
    }
    let _ = writeln!(out);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_roles_without_a_table_fall_back_to_data_scientist() {
        let fallback = TargetRole::ProductManager.roadmap();

        assert_eq!(
            fallback.short_term.map(|r| r.skill),
            TargetRole::DataScientist.roadmap().short_term.map(|r| r.skill)
        );
    }

    #[test]
    fn test_next_steps_take_the_first_item_of_each_horizon() {
        let next = TargetRole::WebDeveloper.roadmap().next_steps();

        assert_eq!(next.this_week.skill, "ES6+ JavaScript Features");
        assert_eq!(next.this_month.skill, "React.js Fundamentals");
        assert_eq!(next.this_quarter.skill, "AWS Cloud Practitioner Certification");
    }

    #[test]
    fn test_export_file_name_is_kebab_cased() {
        assert_eq!(
            export_file_name(TargetRole::DataScientist),
            "data-scientist-career-roadmap.txt"
        );
        assert_eq!(
            export_file_name(TargetRole::MachineLearningEngineer),
            "machine-learning-engineer-career-roadmap.txt"
        );
    }

    #[test]
    fn test_render_contains_all_sections_and_items() {
        let role = TargetRole::AiEngineer;
        let report = render_text(role, role.roadmap());

        assert!(report.contains("Personalized learning path for AI Engineer"));
        assert!(report.contains("SHORT-TERM GOALS (1-2 weeks)"));
        assert!(report.contains("MEDIUM-TERM GOALS (1-3 months)"));
        assert!(report.contains("LONG-TERM GOALS"));
        assert!(report.contains("1. Python for AI"));
        assert!(report.contains("This Week: Python for AI"));
        assert!(report.contains("Generated by SkillBridge"));
    }
}
