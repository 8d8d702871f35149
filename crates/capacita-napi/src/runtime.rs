//! CapacitaRuntime: singleton via `OnceLock`, lock-free after initialization.
//!
//! Holds the resolved configuration and the components built from it: the
//! text converter, the preview renderer and the plan catalog. Content and
//! pricing are otherwise stateless, so nothing here needs a `Mutex`.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use capacita_billing::{AnnualDiscount, JsonPlanSource, PlanCatalog, PlanSource, StaticPlanSource};
use capacita_content::{MarkdownRenderer, TextConverter};
use capacita_core::config::CapacitaConfig;

use crate::conversions::error_codes;

/// Global singleton.
static RUNTIME: OnceLock<Arc<CapacitaRuntime>> = OnceLock::new();

pub struct CapacitaRuntime {
    pub config: CapacitaConfig,
    pub converter: TextConverter,
    pub renderer: MarkdownRenderer,
    pub catalog: PlanCatalog<Box<dyn PlanSource>>,
}

/// Options for initializing the runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. Takes precedence over `project_root`.
    pub config_toml: Option<String>,
    /// Directory holding `capacita.toml`; enables layered config resolution.
    pub project_root: Option<PathBuf>,
    /// JSON plan catalog. If None, the built-in plans are served.
    pub plans_path: Option<PathBuf>,
}

impl CapacitaRuntime {
    fn new(opts: RuntimeOptions) -> napi::Result<Self> {
        let config = match (&opts.config_toml, &opts.project_root) {
            (Some(toml_str), _) => {
                CapacitaConfig::from_toml(toml_str).map_err(error_codes::to_napi_error)?
            }
            (None, Some(root)) => {
                CapacitaConfig::load(root, None).map_err(error_codes::to_napi_error)?
            }
            (None, None) => CapacitaConfig::default(),
        };

        let source: Box<dyn PlanSource> = match opts.plans_path {
            Some(path) => Box::new(JsonPlanSource::new(path)),
            None => Box::new(StaticPlanSource::builtin()),
        };
        tracing::info!(source = source.name(), "capacita runtime starting");

        Ok(Self {
            converter: TextConverter::from_config(&config.content),
            renderer: MarkdownRenderer::from_config(&config.preview),
            catalog: PlanCatalog::from_config(source, &config.billing),
            config,
        })
    }

    /// Annual discount as configured.
    pub fn discount(&self) -> AnnualDiscount {
        AnnualDiscount::from_config(&self.config.billing)
    }
}

/// Initialize the global runtime. Fails if already initialized.
pub fn initialize(opts: RuntimeOptions) -> napi::Result<()> {
    capacita_core::tracing::init_tracing();

    if RUNTIME.get().is_some() {
        return Err(error_codes::already_initialized());
    }
    let runtime = CapacitaRuntime::new(opts)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| error_codes::already_initialized())
}

/// Get the global runtime. Errors if not yet initialized.
pub fn get() -> napi::Result<Arc<CapacitaRuntime>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(error_codes::runtime_not_initialized)
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
