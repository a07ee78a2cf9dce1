use iced::{
    Element,
    widget::{Column, button, checkbox, column, container, pick_list, row, space, text},
};
use partbin_lib::Field;
use strum::{IntoEnumIterator, VariantArray};

use crate::config::{Cfg, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    ThemeSelected(Theme),
    ColumnToggled(Field, bool),
    ClosePressed,
}

pub enum Action {
    /// The config changed and should be written to disk
    Save,
    Close,
}

pub struct Settings {
    cfg: Cfg,
}

impl Settings {
    pub fn new(cfg: Cfg) -> Self {
        Self { cfg }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ThemeSelected(theme) => {
                self.cfg.write().theme = theme;
                Action::Save
            }
            Message::ColumnToggled(field, visible) => {
                self.cfg.write().table.set_visible(field, visible);
                Action::Save
            }
            Message::ClosePressed => Action::Close,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cfg = self.cfg.read();

        let columns = Column::with_children(Field::iter().map(|field| {
            checkbox(cfg.table.is_visible(field))
                .label(field.label())
                .on_toggle(move |visible| Message::ColumnToggled(field, visible))
                .into()
        }))
        .spacing(6);

        container(
            column![
                text("Settings").size(20),
                row![
                    text("Theme: "),
                    pick_list(Theme::VARIANTS, Some(cfg.theme), Message::ThemeSelected),
                ]
                .spacing(8),
                text("Visible columns"),
                columns,
                space::vertical(),
                row![
                    space::horizontal(),
                    button("Close").on_press(Message::ClosePressed)
                ],
            ]
            .spacing(12),
        )
        .padding(20)
        .width(360)
        .height(480)
        .style(container::rounded_box)
        .into()
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use parking_lot::RwLock;
    use partbin_lib::Field;

    use super::{Action, Message, Settings};
    use crate::config::GuiConfig;

    #[test]
    fn test_close() {
        let mut settings = Settings::new(Arc::new(RwLock::new(GuiConfig::default())));

        assert!(matches!(
            settings.update(Message::ClosePressed),
            Action::Close
        ));
    }

    #[test]
    fn test_column_toggle_updates_shared_config() {
        let cfg = Arc::new(RwLock::new(GuiConfig::default()));
        let mut settings = Settings::new(cfg.clone());

        let action = settings.update(Message::ColumnToggled(Field::IgtPartNumber, false));

        assert!(matches!(action, Action::Save));
        assert!(!cfg.read().table.is_visible(Field::IgtPartNumber));
    }
}
