//! Plan catalog: a read-through cache over a [`PlanSource`].
//!
//! The whole plan list is one cache entry with a TTL. Reads within the TTL
//! never touch the source; [`PlanRepository::refresh`] is the explicit way
//! to pick up edits made by a master before the TTL runs out.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use capacita_core::config::BillingConfig;
use capacita_core::errors::CatalogError;

use crate::plan::Plan;
use crate::sources::PlanSource;

/// Read access to the plan list.
pub trait PlanRepository: Send + Sync {
    fn list(&self) -> Result<Arc<[Plan]>, CatalogError>;

    fn get_by_id(&self, id: &str) -> Result<Plan, CatalogError>;

    /// Drop cached plans and reload from the source. Returns the plan count.
    fn refresh(&self) -> Result<usize, CatalogError>;
}

pub struct PlanCatalog<S: PlanSource> {
    source: S,
    cache: Cache<(), Arc<[Plan]>>,
}

impl<S: PlanSource> PlanCatalog<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        let cache = Cache::builder().time_to_live(ttl).build();
        Self { source, cache }
    }

    pub fn from_config(source: S, config: &BillingConfig) -> Self {
        Self::new(
            source,
            Duration::from_secs(config.effective_catalog_ttl_seconds()),
        )
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Plans open for new subscriptions, in catalog order.
    pub fn list_active(&self) -> Result<Vec<Plan>, CatalogError> {
        Ok(self.list()?.iter().filter(|p| p.active).cloned().collect())
    }

    /// Whether a plan list is currently cached.
    pub fn is_cached(&self) -> bool {
        self.cache.contains_key(&())
    }

    fn load(&self) -> Result<Arc<[Plan]>, CatalogError> {
        self.cache
            .try_get_with((), || self.fetch())
            .map_err(|e: Arc<CatalogError>| (*e).clone())
    }

    fn fetch(&self) -> Result<Arc<[Plan]>, CatalogError> {
        let plans = self.source.fetch_plans().inspect_err(|e| {
            tracing::warn!(source = self.source.name(), error = %e, "plan source failed");
        })?;

        validate_plans(&plans)?;

        tracing::info!(
            source = self.source.name(),
            plans = plans.len(),
            "plan catalog loaded"
        );
        Ok(plans.into())
    }
}

fn validate_plans(plans: &[Plan]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(plans.len());
    for plan in plans {
        plan.validate()?;
        if !seen.insert(plan.id.as_str()) {
            return Err(CatalogError::InvalidData {
                message: format!("duplicate plan id {}", plan.id),
            });
        }
    }
    Ok(())
}

impl<S: PlanSource> PlanRepository for PlanCatalog<S> {
    fn list(&self) -> Result<Arc<[Plan]>, CatalogError> {
        self.load()
    }

    fn get_by_id(&self, id: &str) -> Result<Plan, CatalogError> {
        self.load()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::PlanNotFound { id: id.to_string() })
    }

    fn refresh(&self) -> Result<usize, CatalogError> {
        self.cache.invalidate_all();
        let plans = self.load()?;
        tracing::info!(plans = plans.len(), "plan catalog refreshed");
        Ok(plans.len())
    }
}
