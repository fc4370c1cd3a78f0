use iced::{
    Element,
    Length::Fill,
    widget::{Column, button, column, container, progress_bar, row, rule, scrollable, space, text},
};
use skillbridge_lib::{Profile, analyze, career::analysis::CATEGORY_LEVELS};

#[derive(Debug, Clone)]
pub enum Message {
    RecommendationsPressed,
    BackPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    Recommendations,
    Back,
}

#[derive(Debug, Default)]
pub struct SkillsGap;

impl SkillsGap {
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::RecommendationsPressed => Action::Recommendations,
            Message::BackPressed => Action::Back,
        }
    }

    pub fn view<'a>(&'a self, profile: &'a Profile) -> Element<'a, Message> {
        // The dashboard keeps the analyze button disabled until a role is
        // chosen, so this screen is only reachable with one set.
        let Some(role) = profile.target_role else {
            return text("Select a target role first").into();
        };

        let analysis = analyze(&profile.skills, role);

        let header = column![
            text("Skills Gap Analysis").size(32),
            text(format!("Analyzing your skills for {role}")),
        ]
        .spacing(8)
        .align_x(iced::Center);

        let readiness_card = container(
            column![
                text(format!("{:.0}%", analysis.readiness)).size(40),
                text(format!("You are {:.0}% ready for {role}", analysis.readiness)),
                progress_bar(0.0..=100.0, analysis.readiness),
                text(format!(
                    "Based on {} matching skills out of {} required",
                    analysis.matched.len(),
                    analysis.required.len()
                ))
                .size(12),
            ]
            .spacing(8)
            .align_x(iced::Center),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let categories = CATEGORY_LEVELS.iter().map(|level| {
            column![
                text(level.category).size(12),
                row![
                    text("current").size(10),
                    progress_bar(0.0..=100.0, f32::from(level.current)),
                    text("required").size(10),
                    progress_bar(0.0..=100.0, f32::from(level.required)),
                ]
                .spacing(8),
            ]
            .spacing(4)
            .into()
        });

        let overview_card = container(
            column![
                text("Skills Overview").size(20),
                Column::with_children(categories).spacing(8),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let matched = analysis
            .matched
            .iter()
            .map(|skill| text(format!("+ {skill}")).style(text::success).into());
        let matched_card = container(
            column![
                text(format!("Skills You Have ({})", analysis.matched.len())).size(18),
                rule::horizontal(1),
                if analysis.matched.is_empty() {
                    Element::from(text("No matching skills found."))
                } else {
                    Column::with_children(matched).spacing(2).into()
                },
            ]
            .spacing(8),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let missing = analysis
            .missing
            .iter()
            .map(|skill| text(format!("- {skill}")).style(text::danger).into());
        let missing_card = container(
            column![
                text(format!("Skills to Develop ({})", analysis.missing.len())).size(18),
                rule::horizontal(1),
                if analysis.missing.is_empty() {
                    Element::from(text("All skills covered!").style(text::success))
                } else {
                    Column::with_children(missing).spacing(2).into()
                },
            ]
            .spacing(8),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        scrollable(
            column![
                header,
                readiness_card,
                overview_card,
                row![matched_card, missing_card].spacing(20),
                row![
                    button("Back")
                        .style(button::subtle)
                        .on_press(Message::BackPressed),
                    space::horizontal(),
                    button("Get Personalized Recommendations")
                        .on_press(Message::RecommendationsPressed),
                ],
            ]
            .spacing(24)
            .padding(24),
        )
        .into()
    }
}
