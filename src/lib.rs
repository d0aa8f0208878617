pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::registry::{BillingPlan, Registry, UNKNOWN_MARKER};
pub use core::resolver::{is_unknown, resolve, resolve_value, Customer, CustomerRef, UnknownCustomer};
pub use domain::model::{CustomerRecord, PaymentHistory, PaymentRecord, Site};
pub use utils::error::{BillingError, Result};
