use iced::{Element, Task, Theme, application};
use rfd::AsyncFileDialog;
use skillbridge_lib::{CoreConfig, ExtractorClient, Profile, career::roadmap};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    config::GuiConfig,
    screens::{
        dashboard::{self, Dashboard},
        input::{self, Input},
        landing::{self, Landing},
        progress::{self, Progress},
        recommendations::{self, Recommendations},
        skills_gap::{self, SkillsGap},
    },
};

pub mod config;
pub mod screens;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Landing(landing::Message),
    Input(input::Message),
    Dashboard(dashboard::Message),
    SkillsGap(skills_gap::Message),
    Recommendations(recommendations::Message),
    Progress(progress::Message),
}

/// Which screen is currently rendered. The screens themselves live as fields
/// on [`App`] so their widget state survives navigation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Screen {
    #[default]
    Landing,
    Input,
    Dashboard,
    SkillsGap,
    Recommendations,
    Progress,
}

struct App {
    title: String,
    theme: Theme,
    profile: Profile,
    screen: Screen,
    // Screens
    landing: Landing,
    input: Input,
    dashboard: Dashboard,
    skills_gap: SkillsGap,
    recommendations: Recommendations,
    progress: Progress,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let theme = GuiConfig::load().theme();
        let client = ExtractorClient::new(CoreConfig::load().extractor_url);

        (
            Self {
                title: "SkillBridge".into(),
                theme,
                profile: Profile::new(),
                screen: Screen::default(),
                landing: Landing,
                input: Input::new(client),
                dashboard: Dashboard::new(),
                skills_gap: SkillsGap,
                recommendations: Recommendations::default(),
                progress: Progress,
            },
            Task::none(),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Landing(msg) => match self.landing.update(msg) {
                landing::Action::Start(method) => {
                    self.profile.upload_method = method;
                    self.screen = Screen::Input;
                    Task::none()
                }
            },
            Message::Input(msg) => match self.input.update(msg) {
                input::Action::None => Task::none(),
                input::Action::Run(task) => task.map(Message::Input),
                input::Action::AddSkill(name) => {
                    // Duplicate adds are a no-op inside the skill set
                    self.profile.skills.add(&name);
                    Task::none()
                }
                input::Action::RemoveSkill(name) => {
                    self.profile.skills.remove(&name);
                    Task::none()
                }
                input::Action::ReplaceSkills(skills) => {
                    self.profile.skills.replace(skills);
                    Task::none()
                }
                input::Action::Back => self.navigate(Screen::Landing),
                input::Action::Next => self.navigate(Screen::Dashboard),
            },
            Message::Dashboard(msg) => match self.dashboard.update(msg) {
                dashboard::Action::SelectRole(role) => {
                    self.profile.target_role = Some(role);
                    Task::none()
                }
                dashboard::Action::Analyze => {
                    if self.profile.ready_for_analysis() {
                        self.screen = Screen::SkillsGap;
                    }
                    Task::none()
                }
                dashboard::Action::ShowProgress => self.navigate(Screen::Progress),
                dashboard::Action::Back => self.navigate(Screen::Input),
            },
            Message::SkillsGap(msg) => match self.skills_gap.update(msg) {
                skills_gap::Action::Recommendations => self.navigate(Screen::Recommendations),
                skills_gap::Action::Back => self.navigate(Screen::Dashboard),
            },
            Message::Recommendations(msg) => match self.recommendations.update(msg) {
                recommendations::Action::None => Task::none(),
                recommendations::Action::Export => self.export_roadmap(),
                recommendations::Action::Back => self.navigate(Screen::Dashboard),
            },
            Message::Progress(msg) => match self.progress.update(msg) {
                progress::Action::Recommendations => self.navigate(Screen::Recommendations),
                progress::Action::Back => self.navigate(Screen::Dashboard),
            },
        }
    }

    // Render the current screen and pass its messages back to update()
    pub fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Landing => self.landing.view().map(Message::Landing),
            Screen::Input => self.input.view(&self.profile).map(Message::Input),
            Screen::Dashboard => self.dashboard.view(&self.profile).map(Message::Dashboard),
            Screen::SkillsGap => self.skills_gap.view(&self.profile).map(Message::SkillsGap),
            Screen::Recommendations => self
                .recommendations
                .view(&self.profile)
                .map(Message::Recommendations),
            Screen::Progress => self.progress.view(&self.profile).map(Message::Progress),
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn navigate(&mut self, screen: Screen) -> Task<Message> {
        self.screen = screen;
        Task::none()
    }

    /// Run the save dialog and write the plain-text roadmap for the chosen
    /// role. Lives here rather than in the screen because the profile does.
    fn export_roadmap(&self) -> Task<Message> {
        let Some(role) = self.profile.target_role else {
            return Task::none();
        };

        let contents = roadmap::render_text(role, role.roadmap());
        let file_name = roadmap::export_file_name(role);

        Task::perform(
            async move {
                let Some(handle) = AsyncFileDialog::new()
                    .set_file_name(file_name)
                    .save_file()
                    .await
                else {
                    return Ok(None);
                };

                let path = handle.path().to_path_buf();
                tokio::fs::write(&path, contents)
                    .await
                    .map(|()| Some(path.display().to_string()))
                    .map_err(|err| err.to_string())
            },
            |result| Message::Recommendations(recommendations::Message::Saved(result)),
        )
    }
}
