//! Billing and plan catalog configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BillingConfig {
    /// Whether annual subscriptions get a discount. Default: true.
    pub annual_discount_enabled: Option<bool>,
    /// Annual discount percentage, 0-100. Default: 15.
    pub annual_discount_percent: Option<u32>,
    /// Plan catalog cache TTL in seconds. Default: 300.
    pub catalog_ttl_seconds: Option<u64>,
    /// ISO currency code used for display. Default: "BRL".
    pub currency: Option<String>,
}

impl BillingConfig {
    pub fn effective_annual_discount_enabled(&self) -> bool {
        self.annual_discount_enabled.unwrap_or(true)
    }

    pub fn effective_annual_discount_percent(&self) -> u32 {
        self.annual_discount_percent
            .unwrap_or(constants::DEFAULT_ANNUAL_DISCOUNT_PERCENT)
    }

    pub fn effective_catalog_ttl_seconds(&self) -> u64 {
        self.catalog_ttl_seconds
            .unwrap_or(constants::DEFAULT_CATALOG_TTL_SECONDS)
    }

    pub fn effective_currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(constants::DEFAULT_CURRENCY)
    }
}
