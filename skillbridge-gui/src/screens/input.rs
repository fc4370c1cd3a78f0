use std::path::PathBuf;

use iced::{
    Element,
    Length::Fill,
    Task,
    widget::{Column, button, column, container, row, scrollable, space, text, text_input},
};
use rfd::AsyncFileDialog;
use skillbridge_lib::{ExtractorClient, Profile, extract};

#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    AddPressed,
    RemoveSkill(String),
    BrowsePressed,
    FilePicked(Option<PathBuf>),
    SkillsExtracted(Result<Vec<String>, String>),
    BackPressed,
    NextPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Run(Task<Message>),
    AddSkill(String),
    RemoveSkill(String),
    ReplaceSkills(Vec<String>),
    Back,
    Next,
}

pub struct Input {
    client: ExtractorClient,
    draft: String,
    alert: Option<String>,
    uploading: bool,
}

impl Input {
    pub fn new(client: ExtractorClient) -> Self {
        Self {
            client,
            draft: String::new(),
            alert: None,
            uploading: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::DraftChanged(draft) => {
                self.draft = draft;
                Action::None
            }
            Message::AddPressed => {
                let name = self.draft.trim().to_owned();
                if name.is_empty() {
                    return Action::None;
                }

                self.draft.clear();
                Action::AddSkill(name)
            }
            Message::RemoveSkill(name) => Action::RemoveSkill(name),
            Message::BrowsePressed => Action::Run(Task::perform(
                async {
                    AsyncFileDialog::new()
                        .add_filter("Resume", &["pdf", "doc", "docx", "txt"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FilePicked,
            )),
            Message::FilePicked(None) => Action::None,
            Message::FilePicked(Some(path)) => {
                self.uploading = true;
                self.alert = None;

                let client = self.client.clone();
                Action::Run(Task::perform(
                    async move {
                        client.extract_skills(&path).await.map_err(|err| match err {
                            extract::Error::NoSkills => "No skills found in resume".to_owned(),
                            _ => "Failed to upload resume. Make sure the extraction service is running."
                                .to_owned(),
                        })
                    },
                    Message::SkillsExtracted,
                ))
            }
            Message::SkillsExtracted(result) => {
                self.uploading = false;
                match result {
                    Ok(skills) => Action::ReplaceSkills(skills),
                    Err(alert) => {
                        self.alert = Some(alert);
                        Action::None
                    }
                }
            }
            Message::BackPressed => Action::Back,
            Message::NextPressed => Action::Next,
        }
    }

    pub fn view<'a>(&'a self, profile: &'a Profile) -> Element<'a, Message> {
        let header = column![
            text("Input Your Skills").size(32),
            text("Choose how you'd like to provide your skills information"),
        ]
        .spacing(8)
        .align_x(iced::Center);

        let upload_card = container(
            column![
                text("Option A: Upload Resume").size(20),
                text("Supports PDF and plain-text files"),
                button(text(if self.uploading {
                    "Uploading..."
                } else {
                    "Browse Files"
                }))
                .on_press_maybe((!self.uploading).then_some(Message::BrowsePressed)),
                match &self.alert {
                    Some(alert) => Element::from(text(alert.as_str()).style(text::danger)),
                    None => space::vertical().into(),
                },
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let skill_rows = profile.skills.iter().map(|skill| {
            row![
                text(skill.clone()),
                space::horizontal(),
                button(text("Remove").size(12))
                    .style(button::subtle)
                    .on_press(Message::RemoveSkill(skill.clone())),
            ]
            .into()
        });

        let manual_card = container(
            column![
                text("Option B: Enter Skills Manually").size(20),
                row![
                    text_input("e.g., Python, SQL, React...", &self.draft)
                        .on_input(Message::DraftChanged)
                        .on_submit(Message::AddPressed),
                    button("Add").on_press(Message::AddPressed),
                ]
                .spacing(8),
                text(format!("Your skills ({}):", profile.skills.len())),
                scrollable(Column::with_children(skill_rows).spacing(4)).height(160),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        column![
            header,
            row![upload_card, manual_card].spacing(20),
            row![
                button("Back")
                    .style(button::subtle)
                    .on_press(Message::BackPressed),
                space::horizontal(),
                // Can't continue with an empty skill list
                button("Next")
                    .on_press_maybe((!profile.skills.is_empty()).then_some(Message::NextPressed)),
            ],
        ]
        .spacing(24)
        .padding(24)
        .into()
    }
}
