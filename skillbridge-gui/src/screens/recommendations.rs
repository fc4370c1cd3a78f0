use iced::{
    Element,
    Length::Fill,
    widget::{Column, button, column, container, row, rule, scrollable, space, text},
};
use skillbridge_lib::{Profile, career::roadmap::Recommendation};

#[derive(Debug, Clone)]
pub enum Message {
    SavePressed,
    Saved(Result<Option<String>, String>),
    BackPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    /// Ask the parent to run the save dialog and write the export; the parent
    /// owns the profile and therefore knows the role.
    Export,
    Back,
}

#[derive(Debug, Default)]
pub struct Recommendations {
    exporting: bool,
    notice: Option<String>,
}

impl Recommendations {
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::SavePressed => {
                self.exporting = true;
                self.notice = None;
                Action::Export
            }
            Message::Saved(result) => {
                self.exporting = false;
                self.notice = match result {
                    // None means the user canceled the save dialog
                    Ok(None) => None,
                    Ok(Some(path)) => Some(format!("Roadmap saved to {path}")),
                    Err(err) => Some(format!("Could not save roadmap: {err}")),
                };
                Action::None
            }
            Message::BackPressed => Action::Back,
        }
    }

    pub fn view<'a>(&'a self, profile: &'a Profile) -> Element<'a, Message> {
        let Some(role) = profile.target_role else {
            return text("Select a target role first").into();
        };

        let plan = role.roadmap();

        let header = column![
            text("Career Roadmap").size(32),
            text(format!("Personalized learning path for {role}")),
        ]
        .spacing(8)
        .align_x(iced::Center);

        let horizons = row![
            timeline_card("Short-Term (1-2 weeks)", &plan.short_term),
            timeline_card("Medium-Term (1-3 months)", &plan.medium_term),
            timeline_card("Long-Term Goals", &plan.long_term),
        ]
        .spacing(20);

        let next = plan.next_steps();
        let next_steps_card = container(
            column![
                text("Your Next Steps").size(20),
                row![
                    column![
                        text("This Week").size(12),
                        text(next.this_week.skill),
                    ]
                    .spacing(4)
                    .width(Fill),
                    column![
                        text("This Month").size(12),
                        text(next.this_month.skill),
                    ]
                    .spacing(4)
                    .width(Fill),
                    column![
                        text("This Quarter").size(12),
                        text(next.this_quarter.skill),
                    ]
                    .spacing(4)
                    .width(Fill),
                ]
                .spacing(20),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let notice: Element<'a, Message> = match &self.notice {
            Some(notice) => text(notice.as_str()).into(),
            None => space::horizontal().into(),
        };

        scrollable(
            column![
                header,
                horizons,
                next_steps_card,
                row![
                    button("Back")
                        .style(button::subtle)
                        .on_press(Message::BackPressed),
                    notice,
                    space::horizontal(),
                    button(text(if self.exporting {
                        "Saving..."
                    } else {
                        "Download Roadmap"
                    }))
                    .on_press_maybe((!self.exporting).then_some(Message::SavePressed)),
                ]
                .spacing(12),
            ]
            .spacing(24)
            .padding(24),
        )
        .into()
    }
}

fn item<'a>(rec: &'a Recommendation) -> Element<'a, Message> {
    container(
        column![
            row![text(rec.skill), space::horizontal(), text(rec.duration).size(12)],
            row![
                text(rec.resource).size(12),
                space::horizontal(),
                text(rec.link).size(12),
            ],
        ]
        .spacing(4),
    )
    .padding(8)
    .width(Fill)
    .style(container::rounded_box)
    .into()
}

fn timeline_card<'a>(title: &'a str, items: &'a [Recommendation]) -> Element<'a, Message> {
    let rows = items.iter().map(item);

    container(
        column![
            text(title).size(18),
            rule::horizontal(1),
            Column::with_children(rows).spacing(8),
        ]
        .spacing(8),
    )
    .padding(20)
    .width(Fill)
    .style(container::rounded_box)
    .into()
}
