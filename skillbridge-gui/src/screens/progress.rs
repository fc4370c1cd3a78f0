use iced::{
    Element,
    Length::Fill,
    widget::{Column, button, column, container, progress_bar, row, scrollable, space, text},
};
use skillbridge_lib::{
    Profile,
    career::progress::{
        Badge, LEADERBOARD, LearnerProgress, MILESTONES, NEXT_BADGE_HINT, NEXT_BADGE_REWARD,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    ContinueLearningPressed,
    BackPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    Recommendations,
    Back,
}

#[derive(Debug, Default)]
pub struct Progress;

impl Progress {
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ContinueLearningPressed => Action::Recommendations,
            Message::BackPressed => Action::Back,
        }
    }

    pub fn view<'a>(&'a self, profile: &'a Profile) -> Element<'a, Message> {
        let snapshot = LearnerProgress::current();

        let subtitle = match profile.target_role {
            Some(role) => format!("Track your journey to becoming a {role}"),
            None => "Track your learning journey".to_owned(),
        };

        let header = row![
            column![text("Progress Tracker").size(32), text(subtitle)].spacing(8),
            space::horizontal(),
            button("Back to Dashboard")
                .style(button::subtle)
                .on_press(Message::BackPressed),
        ];

        let stats_card = container(
            row![
                stat(
                    format!("{:.0}%", snapshot.job_readiness()),
                    "Job Ready",
                    Some(snapshot.job_readiness()),
                ),
                stat(
                    format!("Level {}", snapshot.level),
                    "XP",
                    Some(snapshot.level_progress()),
                ),
                stat(
                    format!("{}/{}", snapshot.completed_skills, snapshot.total_skills),
                    "Skills Mastered",
                    None,
                ),
                stat(format!("{}", snapshot.streak_days), "Day Streak", None),
            ]
            .spacing(20),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let badge_rows = snapshot.badges.chunks(2).map(|pair| {
            row(pair.iter().map(badge_box)).spacing(8).into()
        });
        let badges_card = container(
            column![
                text("Achievement Badges").size(20),
                Column::with_children(badge_rows).spacing(8),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let leaderboard_rows = LEADERBOARD.iter().map(|entry| {
            let name = if entry.is_user {
                text(entry.name).style(text::primary)
            } else {
                text(entry.name)
            };

            row![
                text(format!("#{}", entry.rank)),
                text(entry.avatar),
                column![name, text(format!("Level {}", entry.level)).size(12)].spacing(2),
                space::horizontal(),
                text(format!("{} XP", entry.xp)),
            ]
            .spacing(12)
            .into()
        });
        let leaderboard_card = container(
            column![
                text("Leaderboard").size(20),
                Column::with_children(leaderboard_rows).spacing(8),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let milestone_rows = MILESTONES.iter().map(|milestone| {
            let marker = if milestone.completed { "✓" } else { "•" };

            column![
                row![
                    text(marker),
                    text(milestone.title),
                    space::horizontal(),
                    text(format!("{}%", milestone.progress)).size(12),
                ]
                .spacing(8),
                progress_bar(0.0..=100.0, f32::from(milestone.progress)),
            ]
            .spacing(4)
            .into()
        });
        let milestones_card = container(
            column![
                text("Learning Milestones").size(20),
                Column::with_children(milestone_rows).spacing(12),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let motivation_card = container(
            column![
                text("Keep Going!").size(20),
                text("You're making great progress! Complete 3 more skills to reach 80% job readiness."),
                row![
                    text(NEXT_BADGE_HINT).size(12),
                    text(NEXT_BADGE_REWARD).size(12).style(text::success),
                ]
                .spacing(16),
                button("Continue Learning").on_press(Message::ContinueLearningPressed),
            ]
            .spacing(12)
            .align_x(iced::Center),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        scrollable(
            column![
                header,
                stats_card,
                row![badges_card, leaderboard_card].spacing(20),
                milestones_card,
                motivation_card,
            ]
            .spacing(24)
            .padding(24),
        )
        .into()
    }
}

fn stat<'a>(value: String, label: &'a str, bar: Option<f32>) -> Element<'a, Message> {
    let mut content = column![text(value).size(28), text(label).size(12)]
        .spacing(4)
        .align_x(iced::Center)
        .width(Fill);

    if let Some(value) = bar {
        content = content.push(progress_bar(0.0..=100.0, value));
    }

    content.into()
}

fn badge_box<'a>(badge: &'a Badge) -> Element<'a, Message> {
    let status = match badge.earned_on {
        Some(date) => text(format!("Earned {date}")).size(12).style(text::success),
        None => text("Locked").size(12),
    };

    container(
        column![text(badge.icon).size(24), text(badge.name).size(12), status]
            .spacing(4)
            .align_x(iced::Center),
    )
    .padding(12)
    .width(Fill)
    .style(container::rounded_box)
    .into()
}
