use iced::{
    Element, Length,
    widget::{button, checkbox, column, container, row, scrollable, table, text},
};
use partbin_lib::{Field, Inventory, RecordId, SparePart};

use crate::{config::Cfg, icons::icon};

#[derive(Debug, Clone)]
pub enum Message {
    RowToggled(RecordId),
    AllToggled,
    EditPressed(RecordId),
    DeletePressed(RecordId),
}

/// One table row: the record plus whether its checkbox is ticked.
#[derive(Debug, Clone)]
struct PartRow {
    part: SparePart,
    selected: bool,
}

pub struct PartsTable {
    cfg: Cfg,
}

impl PartsTable {
    pub fn new(cfg: Cfg) -> Self {
        Self { cfg }
    }

    pub fn update(&mut self, inventory: &mut Inventory, message: Message) {
        match message {
            Message::RowToggled(id) => inventory.store_mut().toggle_select(id),
            Message::AllToggled => inventory.store_mut().toggle_select_all(),
            Message::EditPressed(id) => {
                inventory.edit(id);
            }
            Message::DeletePressed(id) => {
                inventory.store_mut().remove(id);
            }
        }
    }

    pub fn view<'a>(&'a self, inventory: &'a Inventory) -> Element<'a, Message> {
        let store = inventory.store();

        if store.is_empty() {
            return container(text("No spare parts yet. Add one or import a spreadsheet."))
                .padding(20)
                .into();
        }

        let rows: Vec<PartRow> = inventory
            .visible()
            .map(|part| PartRow {
                part: part.clone(),
                selected: store.is_selected(part.id()),
            })
            .collect();

        let mut columns = vec![table::column(
            checkbox(store.all_selected()).on_toggle(|_| Message::AllToggled),
            |row: PartRow| {
                let id = row.part.id();
                checkbox(row.selected).on_toggle(move |_| Message::RowToggled(id))
            },
        )];

        let visible = self.cfg.read().table.visible_columns.clone();
        columns.extend(visible.into_iter().map(field_column));

        columns.push(table::column(text("Actions"), |row: PartRow| {
            let id = row.part.id();
            row![
                button(icon("edit"))
                    .style(button::text)
                    .on_press(Message::EditPressed(id)),
                button(icon("delete"))
                    .style(button::text)
                    .on_press(Message::DeletePressed(id)),
            ]
            .spacing(4)
        }));

        column![scrollable(table(columns, rows).width(Length::Fill))].into()
    }
}

fn field_column<'a, 'b>(field: Field) -> table::Column<'a, 'b, PartRow, Message> {
    table::column(text(field.label()), move |row: PartRow| {
        text(row.part.fields().get(field).to_owned())
    })
}
