use crate::commands::{CmdMessage, CmdResult, ListedRecord};
use crate::country::CountryResolver;
use crate::error::Result;
use crate::fields::{parse_code, parse_cost, parse_product, parse_quantity};
use crate::model::Record;
use crate::session::Ledger;
use crate::store::LedgerStore;

/// Raw entries for a new item, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ItemInput {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: String,
    pub quantity: String,
}

/// Validates every field, appends the record at the end and rewrites the file.
///
/// Nothing is appended when any field is rejected.
pub fn run<S: LedgerStore, R: CountryResolver + ?Sized>(
    ledger: &mut Ledger<S>,
    resolver: &R,
    input: &ItemInput,
) -> Result<CmdResult> {
    let record = Record {
        country: resolver.resolve(&input.country)?,
        code: parse_code(&input.code)?,
        product: parse_product(&input.product)?,
        cost: parse_cost(&input.cost)?,
        quantity: parse_quantity(&input.quantity)?,
    };

    let row = ledger.push(record.clone());
    tracing::info!(row = row.row_number(), code = %record.code, "captured new item");
    ledger.persist()?;

    let mut result = CmdResult::default().with_affected_records(vec![ListedRecord {
        row,
        record,
    }]);
    result.add_message(CmdMessage::success(format!(
        "New inventory item has been added to '{}'.",
        ledger.store().location().display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::SanitizingResolver;
    use crate::error::{FieldError, LedgerError};
    use crate::model::Cost;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn input(code: &str, cost: &str, quantity: &str) -> ItemInput {
        ItemInput {
            country: "japan".into(),
            code: code.into(),
            product: "trail   RUNNER".into(),
            cost: cost.into(),
            quantity: quantity.into(),
        }
    }

    #[test]
    fn appends_normalised_record_and_persists() {
        let mut ledger = Ledger::open(StoreFixture::new().with_quantities(&[3]).store()).unwrap();
        let result = run(&mut ledger, &SanitizingResolver, &input("sku00042", "19.99", "4")).unwrap();

        let added = &result.affected_records[0];
        assert_eq!(added.row.row_number(), 2);
        assert_eq!(added.record.country, "Japan");
        assert_eq!(added.record.code.as_str(), "SKU00042");
        assert_eq!(added.record.product, "Trail Runner");
        assert_eq!(added.record.cost.to_string(), "19.99");
        assert_eq!(ledger.records().len(), 2);

        let text = ledger.store().contents().unwrap();
        assert!(text.ends_with("Japan,SKU00042,Trail Runner,19.99,4\n"));
    }

    #[test]
    fn integer_cost_stays_integer() {
        let mut ledger = Ledger::open(StoreFixture::new().store()).unwrap();
        run(&mut ledger, &SanitizingResolver, &input("SKU00001", "20", "1")).unwrap();
        assert_eq!(ledger.records()[0].cost, Cost::Whole(20));
    }

    #[test]
    fn rejected_field_leaves_ledger_untouched() {
        let mut ledger = Ledger::open(StoreFixture::new().with_quantities(&[3]).store()).unwrap();
        let before = ledger.store().contents().unwrap().to_string();

        let err = run(&mut ledger, &SanitizingResolver, &input("SKU42", "10", "1")).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(FieldError::BadCode(_))
        ));
        let err = run(&mut ledger, &SanitizingResolver, &input("SKU00042", "-10", "1")).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(FieldError::BadCost(_))));
        let err = run(&mut ledger, &SanitizingResolver, &input("SKU00042", "10", "1.5")).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(FieldError::BadQuantity(_))
        ));

        assert_eq!(ledger.records().len(), 1);
        assert_eq!(ledger.store().contents().unwrap(), before);
    }

    #[test]
    fn persist_failure_keeps_the_in_memory_record() {
        let store = InMemoryStore::with_contents(&StoreFixture::new().text()).failing_writes();
        let mut ledger = Ledger::open(store).unwrap();
        let err = run(&mut ledger, &SanitizingResolver, &input("SKU00001", "5", "1")).unwrap_err();
        assert!(matches!(err, LedgerError::Persist { .. }));
        assert_eq!(ledger.records().len(), 1);
    }
}
