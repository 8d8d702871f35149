//! Subscription plans as configured by the portal masters.

use serde::{Deserialize, Serialize};

use capacita_core::errors::CatalogError;

use crate::pricing::{AnnualDiscount, PlanQuote};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Basic,
    Professional,
    Enterprise,
}

/// A purchasable unit extending a plan, e.g. ten extra employee seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnPack {
    pub unit_price: f64,
    pub employees_per_unit: u32,
    /// Most units a company may buy; unlimited when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_units: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tier: PlanTier,
    pub monthly_price: f64,
    /// Employees included in the base price; unlimited when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_employees: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_on: Option<AddOnPack>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Plan {
    /// Add-on units that will actually be billed: none for plans without an
    /// add-on pack, capped at `max_units` otherwise.
    pub fn billable_add_on_units(&self, requested: u32) -> u32 {
        match &self.add_on {
            None => 0,
            Some(pack) => pack.max_units.map_or(requested, |max| requested.min(max)),
        }
    }

    pub fn quote(&self, add_on_units: u32, discount: AnnualDiscount) -> PlanQuote {
        let units = self.billable_add_on_units(add_on_units);
        let unit_price = self.add_on.as_ref().map_or(0.0, |pack| pack.unit_price);
        PlanQuote::calculate(self.monthly_price, unit_price, units, discount)
    }

    /// Employee seats with `add_on_units` purchased. `None` means unlimited.
    pub fn employee_capacity(&self, add_on_units: u32) -> Option<u32> {
        let base = self.max_employees?;
        let extra = self.add_on.as_ref().map_or(0, |pack| {
            pack.employees_per_unit
                .saturating_mul(self.billable_add_on_units(add_on_units))
        });
        Some(base.saturating_add(extra))
    }

    /// Reject plans a pricing screen could not display.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |message: String| Err(CatalogError::InvalidData { message });

        if self.id.trim().is_empty() {
            return invalid(format!("plan '{}' has an empty id", self.name));
        }
        if !is_valid_price(self.monthly_price) {
            return invalid(format!(
                "plan {} has invalid monthly price {}",
                self.id, self.monthly_price
            ));
        }
        if let Some(pack) = &self.add_on {
            if !is_valid_price(pack.unit_price) {
                return invalid(format!(
                    "plan {} has invalid add-on price {}",
                    self.id, pack.unit_price
                ));
            }
            if pack.employees_per_unit == 0 {
                return invalid(format!("plan {} add-on adds no employees", self.id));
            }
        }
        Ok(())
    }
}

fn is_valid_price(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(add_on: Option<AddOnPack>) -> Plan {
        Plan {
            id: "pro".into(),
            name: "Profissional".into(),
            description: String::new(),
            tier: PlanTier::Professional,
            monthly_price: 100.0,
            max_employees: Some(50),
            add_on,
            features: Vec::new(),
            active: true,
        }
    }

    #[test]
    fn add_on_count_ignored_without_pack() {
        assert_eq!(plan(None).billable_add_on_units(5), 0);
        assert_eq!(plan(None).quote(5, AnnualDiscount::NONE).monthly, 100.0);
    }

    #[test]
    fn add_on_count_is_capped() {
        let p = plan(Some(AddOnPack {
            unit_price: 20.0,
            employees_per_unit: 10,
            max_units: Some(3),
        }));
        assert_eq!(p.billable_add_on_units(10), 3);
        assert_eq!(p.employee_capacity(10), Some(80));
    }

    #[test]
    fn negative_price_is_invalid() {
        let mut p = plan(None);
        p.monthly_price = -1.0;
        assert!(matches!(p.validate(), Err(CatalogError::InvalidData { .. })));
    }
}
