//! Where plans come from.
//!
//! In production the plan list lives in the backend service; the catalog only
//! sees it through [`PlanSource`].

mod json_source;
mod static_source;

pub use json_source::JsonPlanSource;
pub use static_source::StaticPlanSource;

use capacita_core::errors::CatalogError;

use crate::plan::Plan;

/// A backing store of plans. Called on every cache miss.
pub trait PlanSource: Send + Sync {
    /// Short name for logs and error messages.
    fn name(&self) -> &str;

    fn fetch_plans(&self) -> Result<Vec<Plan>, CatalogError>;
}

impl<S: PlanSource + ?Sized> PlanSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch_plans(&self) -> Result<Vec<Plan>, CatalogError> {
        (**self).fetch_plans()
    }
}
