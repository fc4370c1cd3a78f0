use clap::ValueEnum;
use serde::Serialize;
use strum::{Display, EnumIter};

/// The fixed set of job titles a user can target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, ValueEnum, Serialize,
)]
pub enum TargetRole {
    #[strum(serialize = "Data Scientist")]
    DataScientist,
    #[strum(serialize = "AI Engineer")]
    AiEngineer,
    #[strum(serialize = "Web Developer")]
    WebDeveloper,
    #[strum(serialize = "Machine Learning Engineer")]
    MachineLearningEngineer,
    #[strum(serialize = "Full Stack Developer")]
    FullStackDeveloper,
    #[strum(serialize = "DevOps Engineer")]
    DevOpsEngineer,
    #[strum(serialize = "Product Manager")]
    ProductManager,
    #[strum(serialize = "UX Designer")]
    UxDesigner,
}

impl TargetRole {
    /// The skills the role is considered to require. Static product data;
    /// every role has a list so the analysis is defined for any selection.
    pub fn required_skills(self) -> &'static [&'static str] {
        match self {
            Self::DataScientist => &[
                "Python",
                "SQL",
                "Machine Learning",
                "Statistics",
                "Pandas",
                "Numpy",
                "Scikit-learn",
                "Tableau",
                "R",
            ],
            Self::AiEngineer => &[
                "Python",
                "TensorFlow",
                "PyTorch",
                "Machine Learning",
                "Deep Learning",
                "Neural Networks",
                "Computer Vision",
                "NLP",
            ],
            Self::WebDeveloper => &[
                "JavaScript",
                "HTML/CSS",
                "React",
                "Node.js",
                "Git",
                "REST APIs",
                "MongoDB",
                "Express.js",
            ],
            Self::MachineLearningEngineer => &[
                "Python",
                "TensorFlow",
                "PyTorch",
                "MLOps",
                "Docker",
                "Kubernetes",
                "AWS",
                "Model Deployment",
            ],
            Self::FullStackDeveloper => &[
                "JavaScript",
                "React",
                "Node.js",
                "SQL",
                "MongoDB",
                "HTML/CSS",
                "Git",
                "REST APIs",
                "Docker",
            ],
            Self::DevOpsEngineer => &[
                "Linux",
                "Docker",
                "Kubernetes",
                "CI/CD",
                "Terraform",
                "AWS",
                "Monitoring",
                "Bash",
            ],
            Self::ProductManager => &[
                "Roadmapping",
                "User Research",
                "Agile",
                "SQL",
                "Analytics",
                "Stakeholder Management",
                "A/B Testing",
            ],
            Self::UxDesigner => &[
                "Figma",
                "Wireframing",
                "Prototyping",
                "User Research",
                "Usability Testing",
                "Design Systems",
                "Accessibility",
            ],
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_role_has_requirements() {
        for role in TargetRole::iter() {
            assert!(
                !role.required_skills().is_empty(),
                "{role} has no requirement list"
            );
        }
    }

    #[test]
    fn test_display_uses_human_titles() {
        assert_eq!(TargetRole::DataScientist.to_string(), "Data Scientist");
        assert_eq!(TargetRole::UxDesigner.to_string(), "UX Designer");
    }

    #[test]
    fn test_catalog_has_eight_roles() {
        assert_eq!(TargetRole::iter().count(), 8);
    }
}
