//! # capacita-billing
//!
//! Subscription pricing for the Capacita portal: the pure monthly/annual
//! calculator, the plan model with its add-on policy, and a plan catalog
//! that caches whatever plan source backs it.

pub mod catalog;
pub mod plan;
pub mod pricing;
pub mod sources;

pub use catalog::{PlanCatalog, PlanRepository};
pub use plan::{AddOnPack, Plan, PlanTier};
pub use pricing::{
    annual_total, format_brl, format_currency, monthly_total, round_currency, savings,
    AnnualDiscount, PlanQuote,
};
pub use sources::{JsonPlanSource, PlanSource, StaticPlanSource};
