use capacita_core::errors::CatalogError;

use super::PlanSource;
use crate::plan::{AddOnPack, Plan, PlanTier};

/// A fixed, in-memory plan list.
#[derive(Debug, Clone, Default)]
pub struct StaticPlanSource {
    plans: Vec<Plan>,
}

impl StaticPlanSource {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// The plans offered when no catalog file is configured.
    pub fn builtin() -> Self {
        let plan = |id: &str, name: &str, tier, price, max_employees, add_on, features: &[&str]| {
            Plan {
                id: id.to_string(),
                name: name.to_string(),
                description: String::new(),
                tier,
                monthly_price: price,
                max_employees,
                add_on,
                features: features.iter().map(|f| f.to_string()).collect(),
                active: true,
            }
        };
        let seats = |unit_price| {
            Some(AddOnPack {
                unit_price,
                employees_per_unit: 10,
                max_units: None,
            })
        };

        Self::new(vec![
            plan("free", "Gratuito", PlanTier::Free, 0.0, Some(5), None, &["trainings"]),
            plan(
                "basic",
                "Básico",
                PlanTier::Basic,
                99.0,
                Some(25),
                seats(29.0),
                &["trainings", "certificates"],
            ),
            plan(
                "professional",
                "Profissional",
                PlanTier::Professional,
                249.0,
                Some(100),
                seats(24.0),
                &["trainings", "certificates", "reports", "calendar"],
            ),
            plan(
                "enterprise",
                "Empresarial",
                PlanTier::Enterprise,
                599.0,
                None,
                None,
                &["trainings", "certificates", "reports", "calendar", "ai-rewrite"],
            ),
        ])
    }
}

impl PlanSource for StaticPlanSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_plans(&self) -> Result<Vec<Plan>, CatalogError> {
        Ok(self.plans.clone())
    }
}
