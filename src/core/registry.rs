use crate::utils::error::BillingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw marker denoting "no customer on file" wherever a customer
/// reference crosses the boundary from the data-loading layer.
pub const UNKNOWN_MARKER: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPlan {
    Basic,
    Premium,
}

impl BillingPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPlan::Basic => "basic",
            BillingPlan::Premium => "premium",
        }
    }
}

impl fmt::Display for BillingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingPlan {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(BillingPlan::Basic),
            "premium" => Ok(BillingPlan::Premium),
            other => Err(BillingError::invalid_argument(other)),
        }
    }
}

/// Read-only configuration for special-case resolution: the recognized
/// plan identifiers, the marker denoting an unknown customer, and the
/// plan assigned to the stand-in. Lookup only, no failure modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registry;

impl Registry {
    pub const PLANS: [BillingPlan; 2] = [BillingPlan::Basic, BillingPlan::Premium];

    pub fn plans(&self) -> &'static [BillingPlan] {
        &Self::PLANS
    }

    pub fn marker(&self) -> &'static str {
        UNKNOWN_MARKER
    }

    pub fn default_plan(&self) -> BillingPlan {
        BillingPlan::Basic
    }

    pub fn is_marker(&self, raw: &str) -> bool {
        raw == UNKNOWN_MARKER
    }
}
