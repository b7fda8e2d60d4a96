//! Property-based tests for voucher balance rules.

use kassa_shared::types::AccountId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::VoucherRow;
use super::validation::{is_balanced, total_credit, total_debit, validate_for_submission};

/// Strategy to generate a positive amount from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a non-zero perturbation (positive or negative cents).
fn epsilon() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        (1i64..1_000_000i64).prop_map(|cents| Decimal::new(-cents, 2)),
    ]
}

/// Builds a balanced voucher: each debit is mirrored by one credit row.
fn balanced_rows(amounts: &[Decimal]) -> Vec<VoucherRow> {
    amounts
        .iter()
        .enumerate()
        .flat_map(|(i, &amount)| {
            let i = i64::try_from(i).unwrap();
            [
                VoucherRow::debit(AccountId::new(1000 + i), amount),
                VoucherRow::credit(AccountId::new(3000 + i), amount),
            ]
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Balanced rows with positive amounts are always postable.
    #[test]
    fn prop_balanced_rows_accepted(
        amounts in prop::collection::vec(positive_amount(), 1..8),
    ) {
        let rows = balanced_rows(&amounts);
        let expected: Decimal = amounts.iter().copied().sum();

        prop_assert!(is_balanced(&rows));
        let totals = validate_for_submission(&rows);
        prop_assert!(totals.is_ok(), "Balanced voucher rejected: {:?}", totals);
        let totals = totals.unwrap();
        prop_assert_eq!(totals.debit, expected);
        prop_assert_eq!(totals.credit, expected);
    }

    /// Perturbing any single debit breaks the balance.
    #[test]
    fn prop_single_perturbation_unbalances(
        amounts in prop::collection::vec(positive_amount(), 1..8),
        index in any::<prop::sample::Index>(),
        eps in epsilon(),
    ) {
        let mut rows = balanced_rows(&amounts);
        let debit_rows = rows.len() / 2;
        let target = index.index(debit_rows) * 2;
        rows[target].debit += eps;

        prop_assert!(!is_balanced(&rows));
        prop_assert_eq!(total_debit(&rows) - total_credit(&rows), eps);
    }

    /// Unbalanced vouchers never pass submission, regardless of sign.
    #[test]
    fn prop_unbalanced_rejected(
        debit in positive_amount(),
        credit in positive_amount(),
    ) {
        prop_assume!(debit != credit);
        let rows = vec![
            VoucherRow::debit(AccountId::new(1930), debit),
            VoucherRow::credit(AccountId::new(3001), credit),
        ];

        let result = validate_for_submission(&rows);
        prop_assert!(
            matches!(result, Err(LedgerError::Unbalanced { .. })),
            "Expected unbalanced, got: {:?}",
            result
        );
    }

    /// Any negative amount is rejected before balance is checked.
    #[test]
    fn prop_negative_amount_rejected(amount in positive_amount()) {
        let rows = vec![
            VoucherRow::debit(AccountId::new(1930), -amount),
            VoucherRow::credit(AccountId::new(3001), -amount),
        ];
        prop_assert_eq!(validate_for_submission(&rows), Err(LedgerError::NegativeAmount));
    }
}
