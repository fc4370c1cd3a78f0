use iced::{
    Element,
    Length::Fill,
    widget::{Column, button, column, combo_box, container, row, rule, scrollable, space, text},
};
use skillbridge_lib::{Profile, TargetRole, UploadMethod};
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub enum Message {
    RoleSelected(TargetRole),
    AnalyzePressed,
    ViewProgressPressed,
    BackPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    SelectRole(TargetRole),
    Analyze,
    ShowProgress,
    Back,
}

pub struct Dashboard {
    role_state: combo_box::State<TargetRole>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            role_state: combo_box::State::new(TargetRole::iter().collect()),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::RoleSelected(role) => Action::SelectRole(role),
            Message::AnalyzePressed => Action::Analyze,
            Message::ViewProgressPressed => Action::ShowProgress,
            Message::BackPressed => Action::Back,
        }
    }

    pub fn view<'a>(&'a self, profile: &'a Profile) -> Element<'a, Message> {
        let header = column![
            text("Skills Dashboard").size(32),
            text("Review your skills and select your target role"),
        ]
        .spacing(8)
        .align_x(iced::Center);

        let source = match profile.upload_method {
            UploadMethod::Resume => "resume",
            UploadMethod::Manual => "manual input",
        };

        let skill_rows = profile
            .skills
            .iter()
            .map(|skill| text(skill.as_str()).into());

        let skills_card = container(
            column![
                text("Your Current Skills").size(20),
                scrollable(Column::with_children(skill_rows).spacing(4)).height(200),
                rule::horizontal(1),
                text(format!("{} skills identified", profile.skills.len())),
                text(format!("Skills extracted from your {source}")).size(12),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let selection_note: Element<'a, Message> = match profile.target_role {
            Some(role) => column![
                text(format!("Selected: {role}")),
                text("We'll analyze your skills against this role's requirements").size(12),
            ]
            .spacing(4)
            .into(),
            None => text("Choose your target role...").into(),
        };

        // First four roles double as one-click shortcuts
        let popular = TargetRole::iter().take(4).map(|role| {
            let style = if profile.target_role == Some(role) {
                button::primary
            } else {
                button::subtle
            };

            button(text(role.to_string()).size(12))
                .style(style)
                .on_press(Message::RoleSelected(role))
                .into()
        });

        let role_card = container(
            column![
                text("Select Target Role").size(20),
                combo_box(
                    &self.role_state,
                    "Choose your target role...",
                    profile.target_role.as_ref(),
                    Message::RoleSelected,
                ),
                selection_note,
                rule::horizontal(1),
                text("Popular Roles"),
                Column::with_children(popular).spacing(4),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        column![
            header,
            row![skills_card, role_card].spacing(20),
            row![
                button("Back")
                    .style(button::subtle)
                    .on_press(Message::BackPressed),
                space::horizontal(),
                button("View Progress")
                    .style(button::secondary)
                    .on_press(Message::ViewProgressPressed),
                // Both a skill list and a role are required before analysis
                button("Analyze Skills Gap")
                    .on_press_maybe(profile.ready_for_analysis().then_some(Message::AnalyzePressed)),
            ]
            .spacing(12),
        ]
        .spacing(24)
        .padding(24)
        .into()
    }
}
