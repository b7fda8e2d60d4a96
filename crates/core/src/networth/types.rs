//! Asset and debt records for personal finance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// Bank balances and cash.
    Cash,
    /// Savings accounts.
    Savings,
    /// Funds, shares, ISK accounts.
    Investment,
    /// Private or occupational pension.
    Pension,
    /// Homes and land.
    RealEstate,
    /// Cars and other vehicles.
    Vehicle,
    /// Anything else.
    Other,
}

/// Debt categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    /// Home loan.
    Mortgage,
    /// Student loan.
    StudentLoan,
    /// Car loan or lease.
    CarLoan,
    /// Credit card balance.
    CreditCard,
    /// Unsecured personal loan.
    PersonalLoan,
    /// Anything else.
    Other,
}

impl DebtType {
    /// Returns true for debts backed by an asset.
    #[must_use]
    pub const fn is_secured(self) -> bool {
        matches!(self, Self::Mortgage | Self::CarLoan)
    }
}

/// Something owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Display name.
    pub name: String,
    /// Category.
    pub asset_type: AssetType,
    /// Current market value.
    pub value: Decimal,
}

/// Something owed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// Display name.
    pub name: String,
    /// Category.
    pub debt_type: DebtType,
    /// Outstanding balance.
    pub balance: Decimal,
    /// Annual interest rate in percent.
    #[serde(default)]
    pub interest_rate: Decimal,
}

impl Debt {
    /// Interest for one year on the current balance, before amortization.
    #[must_use]
    pub fn annual_interest(&self) -> Decimal {
        self.balance * self.interest_rate / Decimal::ONE_HUNDRED
    }
}
