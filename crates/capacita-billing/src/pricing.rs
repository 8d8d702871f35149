//! Monthly and annual subscription pricing.
//!
//! Amounts are `f64` in the plan currency and are never rounded during
//! calculation; [`round_currency`] and [`format_brl`] are for display.

use serde::{Deserialize, Serialize};

use capacita_core::config::BillingConfig;
use capacita_core::constants::{DEFAULT_ANNUAL_DISCOUNT_PERCENT, MONTHS_PER_YEAR};

/// Discount applied to annual billing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualDiscount {
    pub enabled: bool,
    /// Whole percent, 0..=100.
    pub percent: u32,
}

impl AnnualDiscount {
    pub const NONE: Self = Self {
        enabled: false,
        percent: 0,
    };

    /// Percentages above 100 are capped at 100.
    pub fn new(enabled: bool, percent: u32) -> Self {
        Self {
            enabled,
            percent: percent.min(100),
        }
    }

    pub fn from_config(config: &BillingConfig) -> Self {
        Self::new(
            config.effective_annual_discount_enabled(),
            config.effective_annual_discount_percent(),
        )
    }

    /// The percent actually applied: 0 when disabled.
    pub fn applied_percent(&self) -> u32 {
        if self.enabled {
            self.percent.min(100)
        } else {
            0
        }
    }

    fn multiplier(&self) -> f64 {
        1.0 - f64::from(self.applied_percent()) / 100.0
    }
}

impl Default for AnnualDiscount {
    fn default() -> Self {
        Self::new(true, DEFAULT_ANNUAL_DISCOUNT_PERCENT)
    }
}

/// `base + add_on_unit × add_on_count`.
pub fn monthly_total(base: f64, add_on_unit: f64, add_on_count: u32) -> f64 {
    base + add_on_unit * f64::from(add_on_count)
}

/// Twelve months, less the discount when it is enabled.
pub fn annual_total(monthly: f64, discount: AnnualDiscount) -> f64 {
    monthly * MONTHS_PER_YEAR * discount.multiplier()
}

/// What the annual discount saves over paying monthly for a year.
pub fn savings(monthly: f64, discount: AnnualDiscount) -> f64 {
    (monthly * MONTHS_PER_YEAR - annual_total(monthly, discount)).max(0.0)
}

/// A full price breakdown for one plan configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanQuote {
    pub monthly: f64,
    pub annual_undiscounted: f64,
    pub annual: f64,
    pub savings: f64,
    pub discount_percent: u32,
}

impl PlanQuote {
    pub fn calculate(
        base: f64,
        add_on_unit: f64,
        add_on_count: u32,
        discount: AnnualDiscount,
    ) -> Self {
        let monthly = monthly_total(base, add_on_unit, add_on_count);
        Self {
            monthly,
            annual_undiscounted: monthly * MONTHS_PER_YEAR,
            annual: annual_total(monthly, discount),
            savings: savings(monthly, discount),
            discount_percent: discount.applied_percent(),
        }
    }

    /// Every amount rounded to cents.
    pub fn rounded(&self) -> Self {
        Self {
            monthly: round_currency(self.monthly),
            annual_undiscounted: round_currency(self.annual_undiscounted),
            annual: round_currency(self.annual),
            savings: round_currency(self.savings),
            discount_percent: self.discount_percent,
        }
    }
}

/// Round to two decimal places.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Brazilian real formatting: `R$ 1.428,00`.
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let units = (cents / 100).to_string();
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

/// Format for display in `currency`. Only BRL has locale-specific grouping;
/// other codes use `CODE 1234.56`.
pub fn format_currency(value: f64, currency: &str) -> String {
    if currency.eq_ignore_ascii_case("BRL") {
        format_brl(value)
    } else {
        format!("{} {:.2}", currency.to_ascii_uppercase(), round_currency(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brl_grouping() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(5.5), "R$ 5,50");
        assert_eq!(format_brl(1428.0), "R$ 1.428,00");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(-10.0), "-R$ 10,00");
    }

    #[test]
    fn other_currencies() {
        assert_eq!(format_currency(12.3, "usd"), "USD 12.30");
        assert_eq!(format_currency(12.0, "brl"), "R$ 12,00");
    }

    #[test]
    fn discount_percent_is_capped() {
        assert_eq!(AnnualDiscount::new(true, 250).percent, 100);
        assert_eq!(AnnualDiscount::NONE.applied_percent(), 0);
    }
}
