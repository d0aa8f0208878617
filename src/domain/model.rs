use crate::core::registry::BillingPlan;
use crate::core::resolver::{resolve, Customer, CustomerRef};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub year: i32,
    pub month: u32,
    pub amount: f64,
}

/// Payment history of a resolved customer. `Null` is the history
/// carried by the unknown-customer stand-in: no records, never
/// delinquent. The delinquency metric arrives with the records; it is
/// not computed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentHistory {
    #[serde(rename_all = "camelCase")]
    Recorded {
        #[serde(default)]
        payments: Vec<PaymentRecord>,
        #[serde(default)]
        weeks_delinquent_in_last_year: u32,
    },
    Null,
}

impl PaymentHistory {
    pub fn null() -> Self {
        PaymentHistory::Null
    }

    pub fn recorded(payments: Vec<PaymentRecord>, weeks_delinquent_in_last_year: u32) -> Self {
        PaymentHistory::Recorded {
            payments,
            weeks_delinquent_in_last_year,
        }
    }

    pub fn weeks_delinquent_in_last_year(&self) -> u32 {
        match self {
            PaymentHistory::Recorded {
                weeks_delinquent_in_last_year,
                ..
            } => *weeks_delinquent_in_last_year,
            PaymentHistory::Null => 0,
        }
    }

    pub fn payments(&self) -> &[PaymentRecord] {
        match self {
            PaymentHistory::Recorded { payments, .. } => payments,
            PaymentHistory::Null => &[],
        }
    }
}

impl Default for PaymentHistory {
    fn default() -> Self {
        PaymentHistory::Null
    }
}

/// A real customer on file. `billing_plan` writes are plain overwrites
/// with no validation against the plan registry. Not safe for
/// concurrent mutation; callers own exclusive access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub name: String,
    #[serde(default = "CustomerRecord::default_plan")]
    pub billing_plan: BillingPlan,
    #[serde(default)]
    pub payment_history: PaymentHistory,
}

impl CustomerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            billing_plan: BillingPlan::Basic,
            payment_history: PaymentHistory::Null,
        }
    }

    pub fn with_billing_plan(mut self, plan: BillingPlan) -> Self {
        self.billing_plan = plan;
        self
    }

    pub fn with_payment_history(mut self, payment_history: PaymentHistory) -> Self {
        self.payment_history = payment_history;
        self
    }

    fn default_plan() -> BillingPlan {
        BillingPlan::Basic
    }
}

#[derive(Debug, Deserialize)]
struct SiteWire {
    customer: CustomerRef,
}

/// A site and its occupant. Resolution happens once, at construction:
/// the accessor always yields the uniform-capability value, never the
/// raw marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SiteWire")]
pub struct Site {
    customer: Customer,
}

impl Site {
    pub fn new(customer: CustomerRef) -> Self {
        Self {
            customer: resolve(customer),
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn customer_mut(&mut self) -> &mut Customer {
        &mut self.customer
    }

    /// Loads a JSON array of sites, resolving every customer on the way
    /// in.
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Site>> {
        let raw = fs::read_to_string(path)?;
        let sites: Vec<Site> = serde_json::from_str(&raw)?;
        Ok(sites)
    }
}

impl From<SiteWire> for Site {
    fn from(wire: SiteWire) -> Self {
        Site::new(wire.customer)
    }
}
