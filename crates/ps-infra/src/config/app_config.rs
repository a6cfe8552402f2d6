use serde::{Deserialize, Serialize};

use ps_core::order::PriceSchedule;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Deployment configuration: who may sign in, how orders are numbered and
/// what printing costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    /// Institutional email suffix allowed to sign in.
    #[serde(default = "default_allowed_email_domain")]
    pub allowed_email_domain: String,

    /// Letter prefix for order numbers.
    #[serde(default = "default_order_prefix")]
    pub order_prefix: String,

    #[serde(default)]
    pub price_schedule: PriceSchedule,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            allowed_email_domain: default_allowed_email_domain(),
            order_prefix: default_order_prefix(),
            price_schedule: PriceSchedule::default(),
        }
    }
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn default_allowed_email_domain() -> String {
    "@sakec.ac.in".to_string()
}

fn default_order_prefix() -> String {
    "PS".to_string()
}
