use std::{path::PathBuf, sync::Arc};

use iced::{
    Color, Element,
    Length::{self, Fill},
    Task, Theme, application,
    widget::{
        button, center, column, container, mouse_area, opaque, row, space, stack, text,
        text_input,
    },
};
use parking_lot::RwLock;
use partbin_lib::{
    Inventory, PartFields,
    import::{self, FileContents},
    inventory::SaveOutcome,
};
use rfd::AsyncFileDialog;
use tokio::task::spawn_blocking;
use tracing::{Level, debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        notices::{self, Notices},
        part_dialog,
        parts_table::{self, PartsTable},
        settings::{self, Settings},
    },
    config::{Cfg, GuiConfig},
    icons::icon,
};

pub mod components;
pub mod config;
pub mod icons;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    SearchInput(String),
    AddPressed,
    ImportPressed,
    DeleteSelectedPressed,
    DeleteAllPressed,
    ShowSettings,
    FilePicked(Option<PathBuf>),
    FileLoaded(Result<FileContents, String>),
    FileParsed {
        name: String,
        result: Result<Vec<PartFields>, String>,
    },
    // Components
    PartsTable(parts_table::Message),
    PartDialog(part_dialog::Message),
    Settings(settings::Message),
    Notices(notices::Message),
}

struct App {
    title: String,
    cfg: Cfg,
    inventory: Inventory,
    show_settings: bool,
    // Components
    parts_table: PartsTable,
    settings: Settings,
    notices: Notices,
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

        let cfg = Arc::new(RwLock::new(GuiConfig::load()));

        (
            Self {
                title: "Spare Parts Management".into(),
                cfg: cfg.clone(),
                inventory: Inventory::new(),
                show_settings: false,
                parts_table: PartsTable::new(cfg.clone()),
                settings: Settings::new(cfg),
                notices: Notices::new(),
            },
            Task::none(),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchInput(term) => {
                self.inventory.set_search(term);
                Task::none()
            }
            Message::AddPressed => {
                self.inventory.add();
                Task::none()
            }
            Message::DeleteSelectedPressed => {
                self.inventory.store_mut().remove_selected();
                Task::none()
            }
            Message::DeleteAllPressed => {
                self.inventory.store_mut().clear();
                Task::none()
            }
            Message::ShowSettings => {
                self.show_settings = true;
                Task::none()
            }
            Message::ImportPressed => Task::perform(pick_spreadsheet(), Message::FilePicked),
            // Nothing picked, nothing to do
            Message::FilePicked(None) => Task::none(),
            Message::FilePicked(Some(path)) => Task::perform(
                async move { import::read_file(&path).await.map_err(|e| e.to_string()) },
                Message::FileLoaded,
            ),
            Message::FileLoaded(Ok(contents)) => {
                debug!("Loaded {contents:?}");
                let name = contents.name.clone();

                Task::perform(
                    async move {
                        match spawn_blocking(move || import::read_parts(&contents.bytes)).await {
                            Ok(result) => result.map_err(|e| e.to_string()),
                            Err(e) => Err(e.to_string()),
                        }
                    },
                    move |result| Message::FileParsed {
                        name: name.clone(),
                        result,
                    },
                )
            }
            Message::FileLoaded(Err(e)) => {
                warn!("Import failed: {e}");
                self.notices.error(e);
                Task::none()
            }
            Message::FileParsed { name, result } => {
                match result {
                    Ok(rows) => {
                        let count = self.inventory.append_imported(rows).len();
                        self.notices.info(format!("Imported {count} parts from {name}"));
                    }
                    Err(e) => {
                        warn!("Import of {name} failed: {e}");
                        self.notices.error(format!("Couldn't import {name}: {e}"));
                    }
                }
                Task::none()
            }
            // Redirect messages to relevant child components
            Message::PartsTable(msg) => {
                self.parts_table.update(&mut self.inventory, msg);
                Task::none()
            }
            Message::PartDialog(msg) => {
                match part_dialog::update(&mut self.inventory, msg) {
                    part_dialog::Action::Saved(SaveOutcome::Missing(id)) => {
                        self.notices
                            .error(format!("Part {id} was deleted before it could be saved"));
                    }
                    part_dialog::Action::Saved(outcome) => debug!("Part form saved: {outcome:?}"),
                    part_dialog::Action::None | part_dialog::Action::Cancelled => {}
                }
                Task::none()
            }
            Message::Settings(msg) => {
                match self.settings.update(msg) {
                    settings::Action::Save => {
                        if let Err(e) = self.cfg.read().save() {
                            warn!("Failed to save GUI config: {e}");
                        }
                    }
                    settings::Action::Close => self.show_settings = false,
                }
                Task::none()
            }
            Message::Notices(msg) => {
                self.notices.update(msg);
                Task::none()
            }
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let selected = self.inventory.store().selected_count();

        let content = column![
            text(&self.title).size(24),
            // Action bar
            row![
                text_input("Search spare parts...", self.inventory.search())
                    .on_input(Message::SearchInput)
                    .width(Length::Fixed(256.0)),
                button(row![icon("plus"), text("Add Part")].spacing(6))
                    .on_press(Message::AddPressed),
                button(row![icon("spreadsheet"), text("Import Spreadsheet")].spacing(6))
                    .style(button::secondary)
                    .on_press(Message::ImportPressed),
                (selected > 0).then(|| {
                    button(
                        row![
                            icon("delete"),
                            text(format!("Delete Selected ({selected})"))
                        ]
                        .spacing(6),
                    )
                    .style(button::danger)
                    .on_press(Message::DeleteSelectedPressed)
                }),
                button(row![icon("delete"), text("Delete All")].spacing(6))
                    .style(button::danger)
                    .on_press(Message::DeleteAllPressed),
                space::horizontal(),
                button(icon("settings"))
                    .style(button::text)
                    .on_press(Message::ShowSettings),
            ]
            .spacing(12),
            self.notices.view().map(Message::Notices),
            // Parts table
            self.parts_table
                .view(&self.inventory)
                .map(Message::PartsTable),
        ]
        .spacing(16)
        .padding(16)
        .height(Fill);

        if self.inventory.editor().is_open() {
            modal(
                content,
                part_dialog::view(self.inventory.editor()).map(Message::PartDialog),
                Some(Message::PartDialog(part_dialog::Message::CancelPressed)),
            )
        } else if self.show_settings {
            modal(
                content,
                self.settings.view().map(Message::Settings),
                Some(Message::Settings(settings::Message::ClosePressed)),
            )
        } else {
            content.into()
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.cfg.read().theme()
    }
}

/// Ask the user for a spreadsheet. `None` if the dialog was dismissed.
async fn pick_spreadsheet() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .add_filter("Spreadsheet", SPREADSHEET_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_click_outside: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mouse_area = mouse_area(center(opaque(content)).style(|_theme| {
        container::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }
    }));

    stack![
        base.into(),
        opaque(if let Some(msg) = on_click_outside {
            mouse_area.on_press(msg)
        } else {
            mouse_area
        })
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
