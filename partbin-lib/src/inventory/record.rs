use derive_more::{Display, From};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Identifies a single [`SparePart`] for as long as it lives in a store.
///
/// Ids are handed out by [`RecordStore`](super::RecordStore) from a counter that only ever
/// grows, so two records never share one, even across a `clear`.
#[derive(
    Debug, Display, From, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RecordId(pub(crate) u64);

/// The eight text columns of an inventory line, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Field {
    Equipment,
    ItemDescription,
    OemPartNumber,
    Oem,
    Qty,
    IgtPartNumber,
    Location,
    SubLocation,
}

impl Field {
    /// Human friendly label used by form inputs and table headers
    pub fn label(&self) -> &'static str {
        match self {
            Field::Equipment => "Equipment",
            Field::ItemDescription => "Item Description",
            Field::OemPartNumber => "OEM Part Number",
            Field::Oem => "OEM",
            Field::Qty => "Quantity",
            Field::IgtPartNumber => "IGT Part Number",
            Field::Location => "Location",
            Field::SubLocation => "Sub Location",
        }
    }

    /// The exact spreadsheet header this field is imported from.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Equipment => "Equipment",
            Field::ItemDescription => "Item Description",
            Field::OemPartNumber => "OEM Part Number",
            Field::Oem => "OEM",
            Field::Qty => "QTY",
            Field::IgtPartNumber => "IGT Part Number",
            Field::Location => "Location",
            Field::SubLocation => "Sub Location",
        }
    }
}

/// Every editable value of a spare part. Nothing here is validated; quantity included.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartFields {
    pub equipment: String,
    pub item_description: String,
    pub oem_part_number: String,
    pub oem: String,
    pub qty: String,
    pub igt_part_number: String,
    pub location: String,
    pub sub_location: String,
}

impl PartFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Equipment => &self.equipment,
            Field::ItemDescription => &self.item_description,
            Field::OemPartNumber => &self.oem_part_number,
            Field::Oem => &self.oem,
            Field::Qty => &self.qty,
            Field::IgtPartNumber => &self.igt_part_number,
            Field::Location => &self.location,
            Field::SubLocation => &self.sub_location,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Equipment => &mut self.equipment,
            Field::ItemDescription => &mut self.item_description,
            Field::OemPartNumber => &mut self.oem_part_number,
            Field::Oem => &mut self.oem,
            Field::Qty => &mut self.qty,
            Field::IgtPartNumber => &mut self.igt_part_number,
            Field::Location => &mut self.location,
            Field::SubLocation => &mut self.sub_location,
        };

        *slot = value.into();
    }

    /// Builder style variant of [`PartFields::set`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterate over `(field, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::iter().map(move |field| (field, self.get(field)))
    }
}

/// Represents one line of the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct SparePart {
    #[getset(get_copy = "pub")]
    id: RecordId,
    #[getset(get = "pub")]
    fields: PartFields,
}

impl SparePart {
    pub(crate) fn new(id: RecordId, fields: PartFields) -> Self {
        Self { id, fields }
    }

    /// Replace everything but the id.
    pub(crate) fn replace_fields(&mut self, fields: PartFields) {
        self.fields = fields;
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::{Field, PartFields};

    #[test]
    fn test_set_and_get_every_field() {
        let mut fields = PartFields::default();

        for field in Field::iter() {
            fields.set(field, field.label());
        }

        for (field, value) in fields.iter() {
            assert_eq!(value, field.label());
        }
    }

    #[test]
    fn test_default_is_empty() {
        assert!(PartFields::default().iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_quantity_header_differs_from_label() {
        assert_eq!(Field::Qty.header(), "QTY");
        assert_eq!(Field::Qty.label(), "Quantity");
    }
}
