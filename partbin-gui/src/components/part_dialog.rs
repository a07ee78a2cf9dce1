use iced::{
    Element, Length,
    widget::{Column, Row, button, column, container, row, space, text, text_input},
};
use partbin_lib::{
    Field, Inventory,
    inventory::{Editor, EditorMode, SaveOutcome},
};
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub enum Message {
    FieldInput(Field, String),
    CancelPressed,
    SavePressed,
}

#[derive(Debug)]
pub enum Action {
    None,
    Saved(SaveOutcome),
    Cancelled,
}

/// Forward form events into the inventory's edit workflow.
pub fn update(inventory: &mut Inventory, message: Message) -> Action {
    match message {
        Message::FieldInput(field, value) => {
            inventory.set_field(field, value);
            Action::None
        }
        Message::CancelPressed => {
            inventory.dismiss();
            Action::Cancelled
        }
        Message::SavePressed => Action::Saved(inventory.save()),
    }
}

pub fn view(editor: &Editor) -> Element<'_, Message> {
    let (title, confirm) = match editor.mode() {
        EditorMode::Editing(_) => ("Edit Spare Part", "Save Changes"),
        _ => ("Add New Spare Part", "Save Part"),
    };

    let fields: Vec<Field> = Field::iter().collect();
    let inputs = Column::with_children(fields.chunks(2).map(|pair| {
        Row::with_children(pair.iter().map(|field| input(editor, *field)))
            .spacing(12)
            .into()
    }))
    .spacing(12);

    container(
        column![
            text(title).size(20),
            inputs,
            space::vertical(),
            row![
                space::horizontal(),
                button("Cancel")
                    .style(button::secondary)
                    .on_press(Message::CancelPressed),
                button(confirm).on_press(Message::SavePressed),
            ]
            .spacing(8),
        ]
        .spacing(16),
    )
    .padding(20)
    .width(560)
    .height(420)
    .style(container::rounded_box)
    .into()
}

fn input(editor: &Editor, field: Field) -> Element<'_, Message> {
    column![
        text(field.label()).size(12),
        text_input(field.label(), editor.draft().get(field))
            .on_input(move |value| Message::FieldInput(field, value)),
    ]
    .spacing(4)
    .width(Length::FillPortion(1))
    .into()
}
