//! Net worth: total assets minus total debts.

pub mod types;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

pub use types::{Asset, AssetType, Debt, DebtType};

/// Snapshot of a household's balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetWorthSummary {
    /// Sum of asset values.
    pub total_assets: Decimal,
    /// Sum of debt balances.
    pub total_debts: Decimal,
    /// `total_assets - total_debts`.
    pub net_worth: Decimal,
    /// Debt balance per category.
    pub debts_by_type: BTreeMap<DebtType, Decimal>,
    /// Interest for the coming year across all debts.
    pub annual_interest: Decimal,
}

impl NetWorthSummary {
    /// Totals the given assets and debts.
    #[must_use]
    pub fn calculate(assets: &[Asset], debts: &[Debt]) -> Self {
        let total_assets: Decimal = assets.iter().map(|a| a.value).sum();
        let total_debts: Decimal = debts.iter().map(|d| d.balance).sum();
        let annual_interest: Decimal = debts.iter().map(Debt::annual_interest).sum();

        let mut debts_by_type = BTreeMap::new();
        for debt in debts {
            *debts_by_type.entry(debt.debt_type).or_insert(Decimal::ZERO) += debt.balance;
        }

        Self {
            total_assets,
            total_debts,
            net_worth: total_assets - total_debts,
            debts_by_type,
            annual_interest,
        }
    }

    /// Debt-to-asset ratio, or `None` without assets.
    #[must_use]
    pub fn debt_ratio(&self) -> Option<Decimal> {
        self.total_debts.checked_div(self.total_assets)
    }
}
