use iced::{
    Element,
    widget::{button, center, column, row, text},
};
use skillbridge_lib::UploadMethod;

#[derive(Debug, Clone)]
pub enum Message {
    UploadResumePressed,
    EnterManuallyPressed,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    Start(UploadMethod),
}

#[derive(Debug, Default)]
pub struct Landing;

impl Landing {
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::UploadResumePressed => Action::Start(UploadMethod::Resume),
            Message::EnterManuallyPressed => Action::Start(UploadMethod::Manual),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        center(
            column![
                text("Skills Gap Analyzer & Career Path Recommender").size(40),
                text("Bridge the gap between where you are and where you want to be.").size(20),
                row![
                    button(text("Upload Resume").size(18))
                        .padding(16)
                        .on_press(Message::UploadResumePressed),
                    button(text("Enter Skills Manually").size(18))
                        .padding(16)
                        .style(button::secondary)
                        .on_press(Message::EnterManuallyPressed),
                ]
                .spacing(24),
            ]
            .spacing(24)
            .align_x(iced::Center),
        )
        .into()
    }
}
