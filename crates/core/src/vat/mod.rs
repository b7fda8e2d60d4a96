//! VAT (moms) calculation.
//!
//! Rounding strategy:
//! - VAT is computed per line, then rounded to 2 decimal places
//! - Banker's rounding (round half to even)
//! - Period totals are sums of already rounded lines

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

const VAT_DECIMAL_PLACES: u32 = 2;

/// VAT rate classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatRate {
    /// 25 %, most goods and services.
    Standard,
    /// 12 %, food and hotel stays.
    Reduced,
    /// 6 %, books, passenger transport, culture.
    Low,
    /// 0 %, exempt or reverse-charged.
    Exempt,
}

impl VatRate {
    /// Rate in percent.
    #[must_use]
    pub fn percentage(self) -> Decimal {
        match self {
            Self::Standard => Decimal::from(25),
            Self::Reduced => Decimal::from(12),
            Self::Low => Decimal::from(6),
            Self::Exempt => Decimal::ZERO,
        }
    }
}

/// Whether VAT was collected or paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatDirection {
    /// Output VAT, charged on sales.
    Output,
    /// Input VAT, paid on purchases and deductible.
    Input,
}

fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(VAT_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// VAT to add on top of a net amount.
#[must_use]
pub fn vat_on_net(net: Decimal, rate: VatRate) -> Decimal {
    round(net * rate.percentage() / Decimal::ONE_HUNDRED)
}

/// VAT contained in a gross (VAT-inclusive) amount.
#[must_use]
pub fn vat_in_gross(gross: Decimal, rate: VatRate) -> Decimal {
    let pct = rate.percentage();
    round(gross * pct / (Decimal::ONE_HUNDRED + pct))
}

/// One taxable line of a VAT period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatLine {
    /// Sale or purchase.
    pub direction: VatDirection,
    /// Amount excluding VAT.
    pub net: Decimal,
    /// Applicable rate.
    pub rate: VatRate,
}

impl VatLine {
    /// VAT on this line.
    #[must_use]
    pub fn vat(&self) -> Decimal {
        vat_on_net(self.net, self.rate)
    }
}

/// VAT totals for a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VatSummary {
    /// VAT collected on sales.
    pub output_vat: Decimal,
    /// VAT paid on purchases.
    pub input_vat: Decimal,
    /// Output minus input; negative means a refund is due.
    pub net_payable: Decimal,
}

impl VatSummary {
    /// Sums the lines of a period.
    #[must_use]
    pub fn from_lines(lines: &[VatLine]) -> Self {
        let (output_vat, input_vat) =
            lines
                .iter()
                .fold((Decimal::ZERO, Decimal::ZERO), |(out, inp), line| {
                    match line.direction {
                        VatDirection::Output => (out + line.vat(), inp),
                        VatDirection::Input => (out, inp + line.vat()),
                    }
                });

        Self {
            output_vat,
            input_vat,
            net_payable: output_vat - input_vat,
        }
    }

    /// Returns true if more VAT was paid than collected.
    #[must_use]
    pub fn is_refund(&self) -> bool {
        self.net_payable < Decimal::ZERO
    }
}
