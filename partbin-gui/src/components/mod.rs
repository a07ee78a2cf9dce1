pub mod notices;
pub mod part_dialog;
pub mod parts_table;
pub mod settings;
