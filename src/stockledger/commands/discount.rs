use crate::commands::{listed, CmdMessage, CmdResult};
use crate::error::{FieldError, LedgerError, Result};
use crate::fields::parse_cost;
use crate::model::DISCOUNT_MARKER;
use crate::select::{highest_quantity, RowId};
use crate::session::Ledger;
use crate::store::LedgerStore;
use std::cmp::Ordering;

/// Lists the items tied for the highest quantity.
pub fn candidates<S: LedgerStore>(ledger: &Ledger<S>) -> Result<CmdResult> {
    let rows = highest_quantity(ledger.records());
    Ok(CmdResult::default().with_listed_records(listed(ledger, &rows)))
}

/// Puts `row` on sale at `price`, which must be lower than its current cost.
/// The row must be one of the highest-quantity items. The discount marker is
/// added to the product name only if it is not already there.
///
/// The product length limit applies to entered names, not to the marker: a
/// name at the limit grows past it once put on sale.
pub fn run<S: LedgerStore>(ledger: &mut Ledger<S>, row: RowId, price: &str) -> Result<CmdResult> {
    let price = parse_cost(price)?;
    if !highest_quantity(ledger.records()).contains(&row) {
        return Err(LedgerError::NotSelectable(row.row_number()));
    }

    let record = ledger.record_mut(row)?;
    if price.cmp_value(&record.cost) != Ordering::Less {
        return Err(FieldError::PriceNotLower {
            current: record.cost.to_string(),
            new: price.to_string(),
        }
        .into());
    }

    record.cost = price;
    if !record.is_discounted() {
        record.product.push_str(DISCOUNT_MARKER);
    }
    let code = record.code.clone();
    tracing::info!(row = row.row_number(), %code, cost = %price, "discounted item");

    ledger.persist()?;

    let mut result = CmdResult::default().with_affected_records(listed(ledger, &[row]));
    result.add_message(CmdMessage::success(format!(
        "Price for {} (row {}) is now {}.",
        code, row, price
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::MAX_PRODUCT_LEN;
    use crate::model::Cost;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn ledger() -> Ledger<InMemoryStore> {
        let store = StoreFixture::new()
            .with_row("France", "SKU00001", "Court Classic", "30", 4)
            .with_row("Italy", "SKU00002", "Running Shoe", "50", 9)
            .store();
        Ledger::open(store).unwrap()
    }

    #[test]
    fn candidates_are_the_highest_set() {
        let result = candidates(&ledger()).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].row, RowId(1));
    }

    #[test]
    fn lower_price_is_applied_and_marked() {
        let mut ledger = ledger();
        run(&mut ledger, RowId(1), "40").unwrap();
        let record = &ledger.records()[1];
        assert_eq!(record.cost, Cost::Whole(40));
        assert_eq!(record.product, "Running Shoe (ON SALE)");
        assert!(ledger
            .store()
            .contents()
            .unwrap()
            .contains("Italy,SKU00002,Running Shoe (ON SALE),40,9\n"));
    }

    #[test]
    fn marker_is_added_only_once() {
        let mut ledger = ledger();
        run(&mut ledger, RowId(1), "40").unwrap();
        run(&mut ledger, RowId(1), "35").unwrap();
        assert_eq!(ledger.records()[1].product, "Running Shoe (ON SALE)");
        assert_eq!(ledger.records()[1].product.matches("(ON SALE)").count(), 1);
    }

    #[test]
    fn same_price_twice_keeps_a_single_marker() {
        let mut ledger = ledger();
        run(&mut ledger, RowId(1), "40").unwrap();
        let second = run(&mut ledger, RowId(1), "40");
        assert!(matches!(
            second,
            Err(LedgerError::Validation(FieldError::PriceNotLower { .. }))
        ));
        assert_eq!(ledger.records()[1].product, "Running Shoe (ON SALE)");
    }

    #[test]
    fn higher_or_equal_price_changes_nothing() {
        let mut ledger = ledger();
        let before = ledger.store().contents().unwrap().to_string();
        for price in ["60", "50", "50.00"] {
            let err = run(&mut ledger, RowId(1), price).unwrap_err();
            assert!(matches!(
                err,
                LedgerError::Validation(FieldError::PriceNotLower { .. })
            ));
        }
        assert_eq!(ledger.records()[1].cost, Cost::Whole(50));
        assert_eq!(ledger.records()[1].product, "Running Shoe");
        assert_eq!(ledger.store().contents().unwrap(), before);
    }

    #[test]
    fn decimal_discount_below_whole_price() {
        let mut ledger = ledger();
        run(&mut ledger, RowId(1), "49.99").unwrap();
        assert_eq!(ledger.records()[1].cost.to_string(), "49.99");
    }

    #[test]
    fn marker_may_extend_a_name_past_the_entry_limit() {
        let long_name = "A".repeat(MAX_PRODUCT_LEN);
        let store = StoreFixture::new()
            .with_row("Italy", "SKU00002", &long_name, "50", 9)
            .store();
        let mut ledger = Ledger::open(store).unwrap();

        run(&mut ledger, RowId(0), "40").unwrap();
        let product = &ledger.records()[0].product;
        assert_eq!(product.len(), MAX_PRODUCT_LEN + DISCOUNT_MARKER.len());
        assert!(product.ends_with(DISCOUNT_MARKER));

        let saved = InMemoryStore::with_contents(ledger.store().contents().unwrap());
        let reopened = Ledger::open(saved).unwrap();
        assert_eq!(&reopened.records()[0].product, product);
    }

    #[test]
    fn row_outside_highest_set_is_refused() {
        let mut ledger = ledger();
        let err = run(&mut ledger, RowId(0), "10").unwrap_err();
        assert!(matches!(err, LedgerError::NotSelectable(1)));
    }
}
