//! Static gamification data backing the progress screen: level, badges,
//! leaderboard, and milestones. None of this is computed; it is seed data the
//! screen renders as-is.

use serde::Serialize;

/// An achievement badge, earned or still locked.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Badge {
    pub name: &'static str,
    pub icon: &'static str,
    pub earned: bool,
    pub earned_on: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u8,
    pub name: &'static str,
    pub xp: u16,
    pub level: u8,
    pub avatar: &'static str,
    pub is_user: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Milestone {
    pub title: &'static str,
    pub progress: u8,
    pub completed: bool,
}

/// The learner's overall progress snapshot.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LearnerProgress {
    pub level: u8,
    pub xp: u16,
    pub xp_to_next: u16,
    pub completed_skills: u8,
    pub total_skills: u8,
    pub streak_days: u8,
    pub badges: [Badge; 6],
}

impl LearnerProgress {
    pub fn current() -> &'static Self {
        &CURRENT
    }

    /// Completed ÷ total skills as a rounded percentage.
    pub fn job_readiness(&self) -> f32 {
        if self.total_skills == 0 {
            return 0.0;
        }

        (f32::from(self.completed_skills) / f32::from(self.total_skills) * 100.0).round()
    }

    /// How far into the current level the learner is, as a percentage.
    pub fn level_progress(&self) -> f32 {
        let total = f32::from(self.xp) + f32::from(self.xp_to_next);
        if total == 0.0 {
            return 0.0;
        }

        (f32::from(self.xp) / total * 100.0).round()
    }
}

const fn badge(
    name: &'static str,
    icon: &'static str,
    earned_on: Option<&'static str>,
) -> Badge {
    Badge {
        name,
        icon,
        earned: earned_on.is_some(),
        earned_on,
    }
}

static CURRENT: LearnerProgress = LearnerProgress {
    level: 3,
    xp: 1250,
    xp_to_next: 500,
    completed_skills: 8,
    total_skills: 12,
    streak_days: 7,
    badges: [
        badge("Python Beginner", "🐍", Some("2024-09-15")),
        badge("SQL Explorer", "📊", Some("2024-09-18")),
        badge("Git Master", "🔧", None),
        badge("Problem Solver", "🧩", Some("2024-09-12")),
        badge("Fast Learner", "⚡", None),
        badge("Consistency King", "👑", None),
    ],
};

pub const LEADERBOARD: [LeaderboardEntry; 5] = [
    LeaderboardEntry {
        rank: 1,
        name: "Sarah Chen",
        xp: 2850,
        level: 5,
        avatar: "👩‍💻",
        is_user: false,
    },
    LeaderboardEntry {
        rank: 2,
        name: "Alex Johnson",
        xp: 2340,
        level: 4,
        avatar: "👨‍💼",
        is_user: false,
    },
    LeaderboardEntry {
        rank: 3,
        name: "You",
        xp: 1250,
        level: 3,
        avatar: "😊",
        is_user: true,
    },
    LeaderboardEntry {
        rank: 4,
        name: "Michael Rodriguez",
        xp: 980,
        level: 3,
        avatar: "👨‍🔬",
        is_user: false,
    },
    LeaderboardEntry {
        rank: 5,
        name: "Emily Davis",
        xp: 750,
        level: 2,
        avatar: "👩‍🎓",
        is_user: false,
    },
];

pub const MILESTONES: [Milestone; 4] = [
    Milestone {
        title: "Complete Python Fundamentals",
        progress: 100,
        completed: true,
    },
    Milestone {
        title: "Build First Project",
        progress: 60,
        completed: false,
    },
    Milestone {
        title: "SQL Mastery",
        progress: 80,
        completed: false,
    },
    Milestone {
        title: "Get First Certification",
        progress: 30,
        completed: false,
    },
];

/// Callout shown under the milestones: what to tackle next and its reward.
pub const NEXT_BADGE_HINT: &str = "Next: Complete React Fundamentals";
pub const NEXT_BADGE_REWARD: &str = "+200 XP when completed";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_job_readiness() {
        assert_eq!(LearnerProgress::current().job_readiness(), 67.0);
    }

    #[test]
    fn test_level_progress() {
        // 1250 of 1750 XP into level 3.
        assert_eq!(LearnerProgress::current().level_progress(), 71.0);
    }

    #[test]
    fn test_earned_badges_have_dates() {
        for badge in &LearnerProgress::current().badges {
            assert_eq!(badge.earned, badge.earned_on.is_some());
        }
    }

    #[test]
    fn test_leaderboard_has_exactly_one_user_row() {
        let user_rows = LEADERBOARD.iter().filter(|entry| entry.is_user).count();
        assert_eq!(user_rows, 1);
    }

    #[test]
    fn test_leaderboard_is_sorted_by_xp() {
        for pair in LEADERBOARD.windows(2) {
            if let [higher, lower] = pair {
                assert!(higher.xp >= lower.xp);
                assert!(higher.rank < lower.rank);
            }
        }
    }
}
