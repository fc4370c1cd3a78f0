//! Gap analysis between the user's skill set and a target role.
//!
//! Matching is a single-pass, case-insensitive, bidirectional substring test:
//! a required skill counts as covered when any user skill contains it or is
//! contained by it. No weighting, no fuzziness beyond that.

use serde::Serialize;

use crate::{career::TargetRole, profile::SkillSet};

/// One row of the static category comparison shown alongside the gap report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryLevel {
    pub category: &'static str,
    pub current: u8,
    pub required: u8,
}

/// Mocked per-category levels. Product data, not computed from the profile.
pub const CATEGORY_LEVELS: [CategoryLevel; 5] = [
    CategoryLevel {
        category: "Programming",
        current: 85,
        required: 90,
    },
    CategoryLevel {
        category: "Frameworks",
        current: 70,
        required: 85,
    },
    CategoryLevel {
        category: "Databases",
        current: 60,
        required: 80,
    },
    CategoryLevel {
        category: "Tools",
        current: 75,
        required: 75,
    },
    CategoryLevel {
        category: "Soft Skills",
        current: 80,
        required: 70,
    },
];

/// Result of comparing a skill set against a role's requirement list.
#[derive(Debug, Clone, Serialize)]
pub struct GapAnalysis {
    pub role: TargetRole,
    pub required: Vec<&'static str>,
    pub matched: Vec<&'static str>,
    pub missing: Vec<&'static str>,
    /// Matched ÷ required as a rounded percentage. 0 when nothing is required.
    pub readiness: f32,
}

/// Compare the user's skills against the requirement list for `role`.
pub fn analyze(skills: &SkillSet, role: TargetRole) -> GapAnalysis {
    let user: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for &required in role.required_skills() {
        if covers(&user, required) {
            matched.push(required);
        } else {
            missing.push(required);
        }
    }

    let readiness = percentage(matched.len(), role.required_skills().len());

    GapAnalysis {
        role,
        required: role.required_skills().to_vec(),
        matched,
        missing,
        readiness,
    }
}

fn covers(user: &[String], required: &str) -> bool {
    let required = required.to_lowercase();
    user.iter()
        .any(|skill| skill.contains(&required) || required.contains(skill.as_str()))
}

// Skill lists are short enough that the f32 mantissa holds their lengths
// exactly.
#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }

    (part as f32 / total as f32 * 100.0).round()
}

#[cfg(test)]
mod test {
    use super::*;

    fn skills(names: &[&str]) -> SkillSet {
        let mut set = SkillSet::default();
        for name in names {
            set.add(name);
        }
        set
    }

    #[test]
    fn test_exact_match() {
        let analysis = analyze(&skills(&["Python", "SQL"]), TargetRole::DataScientist);

        assert!(analysis.matched.contains(&"Python"));
        assert!(analysis.matched.contains(&"SQL"));
        assert!(analysis.missing.contains(&"Tableau"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let analysis = analyze(&skills(&["python", "TENSORFLOW"]), TargetRole::AiEngineer);

        assert!(analysis.matched.contains(&"Python"));
        assert!(analysis.matched.contains(&"TensorFlow"));
    }

    #[test]
    fn test_substring_matches_both_directions() {
        // "Machine Learning" (required) is contained in the user's longer
        // phrasing, and the short user entry "node" is contained in the
        // required "Node.js".
        let analysis = analyze(
            &skills(&["Machine Learning Ops", "node"]),
            TargetRole::WebDeveloper,
        );

        assert!(analysis.matched.contains(&"Node.js"));
    }

    #[test]
    fn test_no_skills_means_everything_missing() {
        let analysis = analyze(&SkillSet::default(), TargetRole::DataScientist);

        assert!(analysis.matched.is_empty());
        assert_eq!(analysis.missing.len(), analysis.required.len());
        assert_eq!(analysis.readiness, 0.0);
    }

    #[test]
    fn test_readiness_is_rounded_percentage() {
        // Data Scientist requires 9 skills; Python + SQL match 2 of them.
        // "Machine Learning" also catches "machine learning" as a substring.
        let analysis = analyze(
            &skills(&["Python", "SQL", "machine learning"]),
            TargetRole::DataScientist,
        );

        assert_eq!(analysis.matched.len(), 3);
        assert_eq!(analysis.readiness, 33.0);
    }

    #[test]
    fn test_full_coverage_scores_100() {
        let analysis = analyze(
            &skills(&[
                "Figma",
                "Wireframing",
                "Prototyping",
                "User Research",
                "Usability Testing",
                "Design Systems",
                "Accessibility",
            ]),
            TargetRole::UxDesigner,
        );

        assert!(analysis.missing.is_empty());
        assert_eq!(analysis.readiness, 100.0);
    }

    #[test]
    fn test_matched_preserves_requirement_order() {
        let analysis = analyze(&skills(&["SQL", "Python"]), TargetRole::DataScientist);

        // Requirement order, not insertion order.
        assert_eq!(analysis.matched, ["Python", "SQL"]);
    }

    #[test]
    fn test_readiness_serializes_for_json_output() {
        let analysis = analyze(&skills(&["Python"]), TargetRole::DataScientist);
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(
            json.get("role").and_then(|role| role.as_str()),
            Some("DataScientist")
        );
        assert_eq!(
            json.get("readiness").and_then(|score| score.as_f64()),
            Some(11.0)
        );
    }
}
