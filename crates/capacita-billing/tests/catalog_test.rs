//! Plan catalog caching, refresh, and sources.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use capacita_billing::{
    AddOnPack, AnnualDiscount, JsonPlanSource, Plan, PlanCatalog, PlanRepository, PlanSource,
    PlanTier, StaticPlanSource,
};
use capacita_core::config::BillingConfig;
use capacita_core::errors::{CapacitaErrorCode, CatalogError};

/// Counts fetches and serves whatever plans it currently holds.
struct CountingSource {
    plans: Mutex<Vec<Plan>>,
    calls: AtomicUsize,
}

impl CountingSource {
    fn new(plans: Vec<Plan>) -> Self {
        Self {
            plans: Mutex::new(plans),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PlanSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn fetch_plans(&self) -> Result<Vec<Plan>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.plans.lock().unwrap().clone())
    }
}

struct FailingSource;

impl PlanSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn fetch_plans(&self) -> Result<Vec<Plan>, CatalogError> {
        Err(CatalogError::SourceUnavailable {
            source_name: "failing".into(),
            message: "backend offline".into(),
        })
    }
}

fn plan(id: &str, price: f64, active: bool) -> Plan {
    Plan {
        id: id.into(),
        name: id.to_uppercase(),
        description: String::new(),
        tier: PlanTier::Basic,
        monthly_price: price,
        max_employees: Some(10),
        add_on: Some(AddOnPack {
            unit_price: 20.0,
            employees_per_unit: 5,
            max_units: Some(4),
        }),
        features: vec!["trainings".into()],
        active,
    }
}

fn catalog(source: CountingSource) -> PlanCatalog<CountingSource> {
    PlanCatalog::new(source, Duration::from_secs(300))
}

#[test]
fn second_list_is_served_from_cache() {
    let catalog = catalog(CountingSource::new(vec![plan("basic", 100.0, true)]));
    assert_eq!(catalog.list().unwrap().len(), 1);
    assert_eq!(catalog.list().unwrap().len(), 1);
    catalog.get_by_id("basic").unwrap();
    assert_eq!(catalog.source().calls(), 1);
    assert!(catalog.is_cached());
}

#[test]
fn refresh_refetches() {
    let catalog = catalog(CountingSource::new(vec![plan("basic", 100.0, true)]));
    catalog.list().unwrap();

    catalog
        .source()
        .plans
        .lock()
        .unwrap()
        .push(plan("pro", 200.0, true));
    // still the cached list
    assert_eq!(catalog.list().unwrap().len(), 1);

    assert_eq!(catalog.refresh().unwrap(), 2);
    assert_eq!(catalog.list().unwrap().len(), 2);
    assert_eq!(catalog.source().calls(), 2);
}

#[test]
fn unknown_plan_is_not_found() {
    let catalog = catalog(CountingSource::new(vec![plan("basic", 100.0, true)]));
    let err = catalog.get_by_id("gold").unwrap_err();
    assert!(matches!(err, CatalogError::PlanNotFound { ref id } if id == "gold"));
    assert_eq!(err.error_code(), "PLAN_NOT_FOUND");
}

#[test]
fn list_active_filters_inactive() {
    let catalog = catalog(CountingSource::new(vec![
        plan("basic", 100.0, true),
        plan("legacy", 50.0, false),
    ]));
    let active = catalog.list_active().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "basic");
}

#[test]
fn invalid_plans_are_rejected_and_not_cached() {
    let catalog = catalog(CountingSource::new(vec![
        plan("basic", 100.0, true),
        plan("basic", 120.0, true),
    ]));
    assert!(matches!(catalog.list(), Err(CatalogError::InvalidData { .. })));
    assert!(catalog.list().is_err());
    assert_eq!(catalog.source().calls(), 2);
}

#[test]
fn source_failure_surfaces() {
    let catalog = PlanCatalog::new(FailingSource, Duration::from_secs(60));
    let err = catalog.list().unwrap_err();
    assert!(matches!(err, CatalogError::SourceUnavailable { .. }));
    assert_eq!(err.error_code(), "CATALOG_ERROR");
}

#[test]
fn catalog_quote_uses_add_on_policy() {
    let catalog = PlanCatalog::from_config(
        StaticPlanSource::new(vec![plan("basic", 100.0, true)]),
        &BillingConfig::default(),
    );
    let quote = catalog
        .get_by_id("basic")
        .unwrap()
        .quote(10, AnnualDiscount::from_config(&BillingConfig::default()));
    // capped at four units
    assert!((quote.monthly - 180.0).abs() < 1e-9);
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = PlanCatalog::new(StaticPlanSource::builtin(), Duration::from_secs(60));
    let plans = catalog.list().unwrap();
    assert_eq!(plans.len(), 4);
    assert!(plans.iter().any(|p| p.tier == PlanTier::Enterprise));
}

#[test]
fn boxed_sources_work() {
    let source: Box<dyn PlanSource> = Box::new(StaticPlanSource::builtin());
    let catalog = PlanCatalog::new(source, Duration::from_secs(60));
    assert_eq!(catalog.get_by_id("free").unwrap().monthly_price, 0.0);
}

#[test]
fn json_source_reads_camel_case_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "basic", "name": "Básico", "tier": "basic", "monthlyPrice": 99.0,
              "maxEmployees": 25,
              "addOn": {{"unitPrice": 29.0, "employeesPerUnit": 10}},
              "features": ["trainings"]}},
            {{"id": "old", "name": "Antigo", "monthlyPrice": 10.0, "active": false}}
        ]"#
    )
    .unwrap();

    let source = JsonPlanSource::new(file.path());
    let plans = source.fetch_plans().unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].add_on.as_ref().unwrap().max_units, None);
    assert!(plans[0].active);
    assert_eq!(plans[1].tier, PlanTier::Free);
    assert!(!plans[1].active);
}

#[test]
fn json_source_errors() {
    let missing = JsonPlanSource::new("/nonexistent/capacita/plans.json");
    assert!(matches!(
        missing.fetch_plans(),
        Err(CatalogError::SourceUnavailable { .. })
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();
    let broken = JsonPlanSource::new(file.path());
    assert!(matches!(
        broken.fetch_plans(),
        Err(CatalogError::InvalidData { .. })
    ));
}

#[test]
fn plans_are_shared_not_copied() {
    let catalog = catalog(CountingSource::new(vec![plan("basic", 100.0, true)]));
    let a = catalog.list().unwrap();
    let b = catalog.list().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}
