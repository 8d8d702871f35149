//! Billing bindings: price quotes, plan catalog, currency display.

use napi_derive::napi;
use serde::{Deserialize, Serialize};

use capacita_billing::{format_currency, AnnualDiscount, PlanQuote, PlanRepository};
use capacita_core::constants::DEFAULT_CURRENCY;

use crate::conversions::document_types::to_json;
use crate::conversions::error_codes::{self, invalid_argument};
use crate::runtime;

/// A price breakdown returned to TypeScript. Amounts are rounded to cents.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsPlanQuote {
    pub monthly: f64,
    pub annual_undiscounted: f64,
    pub annual: f64,
    pub savings: f64,
    pub discount_percent: u32,
}

impl From<PlanQuote> for JsPlanQuote {
    fn from(quote: PlanQuote) -> Self {
        let quote = quote.rounded();
        Self {
            monthly: quote.monthly,
            annual_undiscounted: quote.annual_undiscounted,
            annual: quote.annual,
            savings: quote.savings,
            discount_percent: quote.discount_percent,
        }
    }
}

fn check_amount(name: &str, value: f64) -> napi::Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid_argument(name, format!("must be a non-negative amount, got {value}")))
    }
}

/// Quote arbitrary prices. The discount defaults to the configured one (or
/// 15 % before initialization); either part can be overridden.
#[napi]
pub fn capacita_calculate_quote(
    base_price: f64,
    add_on_unit_price: f64,
    add_on_count: u32,
    discount_enabled: Option<bool>,
    discount_percent: Option<u32>,
) -> napi::Result<JsPlanQuote> {
    let base_price = check_amount("basePrice", base_price)?;
    let add_on_unit_price = check_amount("addOnUnitPrice", add_on_unit_price)?;
    if let Some(percent) = discount_percent {
        if percent > 100 {
            return Err(invalid_argument(
                "discountPercent",
                format!("must be between 0 and 100, got {percent}"),
            ));
        }
    }

    let configured = runtime::get()
        .map(|rt| rt.discount())
        .unwrap_or_default();
    let discount = AnnualDiscount::new(
        discount_enabled.unwrap_or(configured.enabled),
        discount_percent.unwrap_or(configured.percent),
    );
    Ok(PlanQuote::calculate(base_price, add_on_unit_price, add_on_count, discount).into())
}

/// Quote a catalog plan with the configured annual discount. Add-on units
/// are ignored for plans without an add-on pack and capped at its maximum.
#[napi]
pub fn capacita_plan_quote(
    plan_id: String,
    add_on_units: Option<u32>,
) -> napi::Result<JsPlanQuote> {
    let rt = runtime::get()?;
    let plan = rt
        .catalog
        .get_by_id(&plan_id)
        .map_err(error_codes::to_napi_error)?;
    Ok(plan.quote(add_on_units.unwrap_or(0), rt.discount()).into())
}

#[napi]
pub fn capacita_plans_list(active_only: Option<bool>) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    if active_only.unwrap_or(false) {
        let plans = rt.catalog.list_active().map_err(error_codes::to_napi_error)?;
        to_json(&plans)
    } else {
        let plans = rt.catalog.list().map_err(error_codes::to_napi_error)?;
        to_json(&*plans)
    }
}

#[napi]
pub fn capacita_plan_get(plan_id: String) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    let plan = rt
        .catalog
        .get_by_id(&plan_id)
        .map_err(error_codes::to_napi_error)?;
    to_json(&plan)
}

/// Reload plans from the source, bypassing the cache. Returns the count.
#[napi]
pub fn capacita_plans_refresh() -> napi::Result<u32> {
    let rt = runtime::get()?;
    let count = rt.catalog.refresh().map_err(error_codes::to_napi_error)?;
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}

/// Format an amount for display, in the configured currency by default.
#[napi]
pub fn capacita_format_currency(value: f64, currency: Option<String>) -> String {
    let currency = currency.unwrap_or_else(|| {
        runtime::get()
            .map(|rt| rt.config.billing.effective_currency().to_string())
            .unwrap_or_else(|_| DEFAULT_CURRENCY.to_string())
    });
    format_currency(value, &currency)
}
