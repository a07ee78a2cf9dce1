use crate::inventory::record::SparePart;

/// Records where any text field contains `term`, ignoring case. An empty term matches all.
///
/// The identifier is not searched; it is an internal handle, not something a user types.
pub fn filter<'a>(
    records: &'a [SparePart],
    term: &'a str,
) -> impl Iterator<Item = &'a SparePart> + 'a {
    let needle = term.to_lowercase();

    records
        .iter()
        .filter(move |record| matches(record, &needle))
}

fn matches(record: &SparePart, needle: &str) -> bool {
    needle.is_empty()
        || record
            .fields()
            .iter()
            .any(|(_, value)| value.to_lowercase().contains(needle))
}

#[cfg(test)]
mod test {
    use crate::inventory::{
        record::{Field, PartFields, RecordId},
        store::RecordStore,
    };

    use super::filter;

    fn store() -> RecordStore {
        let mut store = RecordStore::new();
        store.add(
            PartFields::default()
                .with(Field::Equipment, "Boiler Feed Pump")
                .with(Field::Oem, "KSB"),
        );
        store.add(
            PartFields::default()
                .with(Field::Equipment, "Gate Valve")
                .with(Field::Location, "Warehouse B"),
        );
        store.add(
            PartFields::default()
                .with(Field::ItemDescription, "Mechanical seal")
                .with(Field::SubLocation, "Shelf 3, pump bin"),
        );
        store
    }

    fn ids<'a>(records: impl Iterator<Item = &'a crate::SparePart>) -> Vec<RecordId> {
        records.map(|r| r.id()).collect()
    }

    #[test]
    fn test_empty_term_matches_all_in_order() {
        let store = store();

        let all = ids(store.records().iter());
        assert_eq!(ids(filter(store.records(), "")), all);
    }

    #[test]
    fn test_case_insensitive_across_fields() {
        let store = store();
        let records = store.records();

        let pump = ids(filter(records, "PUMP"));
        assert_eq!(pump.len(), 2);
        assert_eq!(pump.first(), records.first().map(|r| r.id()).as_ref());
        assert_eq!(pump.last(), records.last().map(|r| r.id()).as_ref());

        assert_eq!(ids(filter(records, "warehouse b")).len(), 1);
        assert_eq!(ids(filter(records, "ksb")).len(), 1);
    }

    #[test]
    fn test_no_match() {
        let store = store();
        assert_eq!(filter(store.records(), "impeller").count(), 0);
    }

    #[test]
    fn test_id_is_not_searched() {
        let mut store = RecordStore::new();
        let id = store.add(PartFields::default().with(Field::Equipment, "Fan"));

        assert_eq!(filter(store.records(), &id.to_string()).count(), 0);
    }
}
