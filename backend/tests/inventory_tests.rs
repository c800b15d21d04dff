//! Inventory and dashboard stats tests
//!
//! Pure-logic coverage of per-pair stock tracking and the low-stock KPI.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use shared::models::{apply_movement, OrderType};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Count inventory rows strictly below the threshold, as the stats query does
fn low_stock_count(quantities: &[Decimal], threshold: Decimal) -> usize {
    quantities.iter().filter(|q| **q < threshold).count()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// The default threshold is 10 and the comparison is strict
    #[test]
    fn test_low_stock_boundary() {
        let threshold = dec("10");
        assert_eq!(low_stock_count(&[dec("9.999")], threshold), 1);
        assert_eq!(low_stock_count(&[dec("10")], threshold), 0);
        assert_eq!(low_stock_count(&[dec("10.001")], threshold), 0);
    }

    #[test]
    fn test_low_stock_counts_each_row_once() {
        let quantities = [dec("3"), dec("12"), dec("0"), dec("-2"), dec("10")];
        assert_eq!(low_stock_count(&quantities, dec("10")), 3);
    }

    /// Movements on one (product, warehouse) pair never touch another
    #[test]
    fn test_pairs_are_independent() {
        let mut inventory: HashMap<(u32, u32), Decimal> = HashMap::new();

        // IN 5 of product 1 at warehouse 1
        let q = apply_movement(None, OrderType::In, dec("5")).unwrap();
        inventory.insert((1, 1), q);

        // IN 7 of the same product at warehouse 2
        let q = apply_movement(None, OrderType::In, dec("7")).unwrap();
        inventory.insert((1, 2), q);

        assert_eq!(inventory.get(&(1, 1)), Some(&dec("5")));
        assert_eq!(inventory.get(&(1, 2)), Some(&dec("7")));
    }

    /// Inventory rows are never deleted, even at zero quantity
    #[test]
    fn test_drained_pair_keeps_its_row() {
        let after_in = apply_movement(None, OrderType::In, dec("6"));
        let after_out = apply_movement(after_in, OrderType::Out, dec("6"));
        assert_eq!(after_out, Some(Decimal::ZERO));
    }

    /// The point-lookup payload carries the pair, the quantity, and an
    /// optional bin location
    #[test]
    fn test_inventory_record_wire_shape() {
        use chrono::Utc;
        use shared::models::{InventoryRecord, Location};
        use uuid::Uuid;

        let warehouse_id = Uuid::new_v4();
        let location = Location {
            id: Uuid::new_v4(),
            warehouse_id,
            code: "A-01-03".to_string(),
        };
        let record = InventoryRecord {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            warehouse_id,
            location_id: Some(location.id),
            quantity: dec("42.5"),
            updated_at: Utc::now(),
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(json["quantity"], "42.5");
        assert_eq!(json["warehouse_id"], warehouse_id.to_string());
        assert_eq!(json["location_id"], location.id.to_string());

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&location).unwrap()).unwrap();
        assert_eq!(json["code"], "A-01-03");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn quantity_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=100_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    fn order_type_strategy() -> impl Strategy<Value = OrderType> {
        prop_oneof![Just(OrderType::In), Just(OrderType::Out)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Interleaved movements across several pairs leave every pair with
        /// exactly its own ledger total
        #[test]
        fn prop_per_pair_isolation(
            movements in prop::collection::vec(
                (0u32..4, order_type_strategy(), quantity_strategy()),
                1..40
            )
        ) {
            let mut inventory: HashMap<u32, Decimal> = HashMap::new();
            let mut ledgers: HashMap<u32, Decimal> = HashMap::new();

            for (pair, order_type, qty) in &movements {
                let current = inventory.get(pair).copied();
                if let Some(new_qty) = apply_movement(current, *order_type, *qty) {
                    inventory.insert(*pair, new_qty);
                    *ledgers.entry(*pair).or_insert(Decimal::ZERO) +=
                        order_type.signed(*qty);
                }
            }

            prop_assert_eq!(inventory.len(), ledgers.len());
            for (pair, total) in &ledgers {
                prop_assert_eq!(inventory.get(pair), Some(total));
            }
        }

        /// The low-stock count never exceeds the number of rows and matches
        /// a direct filter
        #[test]
        fn prop_low_stock_count_bounds(
            quantities in prop::collection::vec(
                (-10_000i64..=10_000i64).prop_map(|n| Decimal::new(n, 2)),
                0..30
            ),
            threshold in (0i64..=2_000i64).prop_map(Decimal::from)
        ) {
            let count = low_stock_count(&quantities, threshold);
            prop_assert!(count <= quantities.len());

            let expected = quantities.iter().filter(|q| **q < threshold).count();
            prop_assert_eq!(count, expected);
        }

        /// Raising the threshold never lowers the low-stock count
        #[test]
        fn prop_low_stock_monotone_in_threshold(
            quantities in prop::collection::vec(
                (-10_000i64..=10_000i64).prop_map(|n| Decimal::new(n, 2)),
                0..30
            ),
            threshold in (0i64..=1_000i64).prop_map(Decimal::from),
            bump in (0i64..=1_000i64).prop_map(Decimal::from)
        ) {
            let low = low_stock_count(&quantities, threshold);
            let high = low_stock_count(&quantities, threshold + bump);
            prop_assert!(high >= low);
        }
    }
}
