use derive_more::Deref;
use iced::{
    Element, Length,
    widget::{Column, button, container, row, space, text},
};

use crate::icons::icon;

#[derive(Debug, Clone)]
pub enum Message {
    Dismissed(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    id: u64,
    pub level: Level,
    pub text: String,
}

/// Dismissible messages shown above the parts table, newest last.
#[derive(Debug, Default, Deref)]
pub struct Notices {
    #[deref]
    items: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Level::Info, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Level::Error, text.into());
    }

    fn push(&mut self, level: Level, text: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, level, text });
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismissed(id) => self.items.retain(|n| n.id != id),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        Column::with_children(self.items.iter().map(notice_row))
            .spacing(4)
            .into()
    }
}

fn notice_row(notice: &Notice) -> Element<'_, Message> {
    let style = match notice.level {
        Level::Info => text::success,
        Level::Error => text::danger,
    };

    container(
        row![
            text(&notice.text).style(style),
            space::horizontal(),
            button(icon("close"))
                .style(button::text)
                .on_press(Message::Dismissed(notice.id)),
        ]
        .padding(8),
    )
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
