use crate::catalog::Catalog;
use crate::orders::PricingPolicy;
use shared::AppResult;

/// Default fixed service charge per order
pub const DEFAULT_SERVICE_CHARGE: u64 = 40;
/// Default tax rate in percent
pub const DEFAULT_TAX_RATE_PERCENT: u32 = 18;
/// Default lifetime of a confirmation notice
pub const DEFAULT_NOTICE_DISPLAY_MS: u64 = 3000;
/// Default upper bound for a single cart line
pub const DEFAULT_MAX_ITEM_QUANTITY: u32 = 9999;

/// Session configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file in the
/// working directory is honoured):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DYNR_SERVICE_CHARGE | 40 | fixed service charge |
/// | DYNR_TAX_RATE_PERCENT | 18 | tax rate (%) |
/// | DYNR_NOTICE_DISPLAY_MS | 3000 | confirmation banner lifetime |
/// | DYNR_MAX_ITEM_QUANTITY | 9999 | max quantity per cart line |
/// | DYNR_CATALOG_PATH | - | dataset file, embedded fixture when unset |
/// | DYNR_LOG_LEVEL | info | log level |
/// | DYNR_LOG_JSON | false | JSON log output |
///
/// # Example
///
/// ```ignore
/// DYNR_TAX_RATE_PERCENT=5 DYNR_CATALOG_PATH=./catalog.json my-shell
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub service_charge: u64,
    pub tax_rate_percent: u32,
    pub notice_display_ms: u64,
    pub max_item_quantity: u32,
    /// Dataset fixture on disk; `None` uses the embedded demo dataset
    pub catalog_path: Option<String>,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_charge: DEFAULT_SERVICE_CHARGE,
            tax_rate_percent: DEFAULT_TAX_RATE_PERCENT,
            notice_display_ms: DEFAULT_NOTICE_DISPLAY_MS,
            max_item_quantity: DEFAULT_MAX_ITEM_QUANTITY,
            catalog_path: None,
            log_level: "info".into(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    ///
    /// Used by tests to avoid touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            service_charge: lookup("DYNR_SERVICE_CHARGE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.service_charge),
            tax_rate_percent: lookup("DYNR_TAX_RATE_PERCENT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.tax_rate_percent),
            notice_display_ms: lookup("DYNR_NOTICE_DISPLAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.notice_display_ms),
            max_item_quantity: lookup("DYNR_MAX_ITEM_QUANTITY")
                .and_then(|v| v.parse().ok())
                .filter(|max: &u32| *max > 0)
                .unwrap_or(defaults.max_item_quantity),
            catalog_path: lookup("DYNR_CATALOG_PATH").filter(|p| !p.trim().is_empty()),
            log_level: lookup("DYNR_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: lookup("DYNR_LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
        }
    }

    /// Pricing constants for cart summaries
    pub fn pricing(&self) -> PricingPolicy {
        PricingPolicy::new(self.service_charge, self.tax_rate_percent)
    }

    /// Load the configured dataset, or the embedded one
    pub fn load_catalog(&self) -> AppResult<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_file(path),
            None => Catalog::builtin(),
        }
    }
}
