//! The session profile: everything the user has entered so far.
//!
//! A [`Profile`] is created empty when the application starts, mutated by
//! whichever screen is active, and dropped when the session ends. Nothing in
//! it is persisted.

use derive_more::{Deref, IntoIterator};

use crate::career::TargetRole;

/// How the user chose to provide their skills on the landing screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UploadMethod {
    Resume,
    #[default]
    Manual,
}

/// Insertion-ordered, deduplicated list of skill names.
///
/// Dereferences to a slice of names, so callers can iterate and count without
/// going through accessors.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deref, IntoIterator)]
pub struct SkillSet(#[deref] #[into_iterator(ref)] Vec<String>);

impl SkillSet {
    /// Add a skill name. Input is trimmed; an empty or already-present name is
    /// a no-op. Returns whether the set changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.0.iter().any(|s| s == name) {
            return false;
        }

        self.0.push(name.to_owned());
        true
    }

    /// Remove a skill by exact name.
    pub fn remove(&mut self, name: &str) {
        self.0.retain(|s| s != name);
    }

    /// Replace the whole set, e.g. with the list extracted from a resume.
    /// The replacement goes through [`SkillSet::add`], so it is deduplicated
    /// and trimmed the same way manual entry is.
    pub fn replace(&mut self, names: impl IntoIterator<Item = String>) {
        self.0.clear();
        for name in names {
            self.add(&name);
        }
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// In-memory record of the user's session.
#[derive(Debug, Default, Clone)]
pub struct Profile {
    pub skills: SkillSet,
    pub target_role: Option<TargetRole>,
    pub upload_method: UploadMethod,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The analysis screens require both a non-empty skill list and a chosen
    /// role. The continue buttons stay disabled until this holds.
    pub fn ready_for_analysis(&self) -> bool {
        !self.skills.is_empty() && self.target_role.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_add() {
        let mut skills = SkillSet::default();

        assert!(skills.add("Python"));
        assert!(skills.add("SQL"));

        assert_eq!(skills.names(), ["Python", "SQL"]);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut skills = SkillSet::default();

        skills.add("Python");
        assert!(!skills.add("Python"));

        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_add_trims_input() {
        let mut skills = SkillSet::default();

        skills.add("  Python  ");
        assert!(!skills.add("Python"));

        assert_eq!(skills.names(), ["Python"]);
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut skills = SkillSet::default();

        assert!(!skills.add("   "));
        assert!(skills.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut skills = SkillSet::default();

        skills.add("Python");
        skills.add("SQL");
        skills.remove("Python");

        assert_eq!(skills.names(), ["SQL"]);
    }

    #[test]
    fn test_replace_deduplicates() {
        let mut skills = SkillSet::default();

        skills.add("Rust");
        skills.replace(vec![
            "Python".to_owned(),
            "Python".to_owned(),
            "SQL".to_owned(),
        ]);

        assert_eq!(skills.names(), ["Python", "SQL"]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut skills = SkillSet::default();

        skills.add("C");
        skills.add("A");
        skills.add("B");

        assert_eq!(skills.names(), ["C", "A", "B"]);
    }

    #[test]
    fn test_ready_for_analysis() {
        let mut profile = Profile::new();
        assert!(!profile.ready_for_analysis());

        profile.skills.add("Python");
        assert!(!profile.ready_for_analysis());

        profile.target_role = Some(TargetRole::DataScientist);
        assert!(profile.ready_for_analysis());
    }
}
