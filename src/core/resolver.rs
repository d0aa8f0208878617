use crate::core::registry::{BillingPlan, Registry};
use crate::domain::model::{CustomerRecord, PaymentHistory};
use crate::utils::error::{BillingError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Name reported for the unknown-customer stand-in.
pub const OCCUPANT: &str = "occupant";

/// Boundary sum type for a raw customer reference. The string sentinel
/// is converted here and never leaks further in.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerRef {
    Known(CustomerRecord),
    Unknown,
}

impl CustomerRef {
    /// Classifies a wire-level value into a customer reference. Accepts
    /// the marker string, a customer record object, or an
    /// already-resolved object carrying an `isUnknown` flag. Anything
    /// else is an `InvalidArgument`.
    pub fn from_value(value: &Value) -> Result<CustomerRef> {
        match value {
            Value::String(s) if Registry.is_marker(s) => Ok(CustomerRef::Unknown),
            Value::Object(map) => match map.get("isUnknown") {
                Some(Value::Bool(true)) => Ok(CustomerRef::Unknown),
                Some(Value::Bool(false)) | None => {
                    let record: CustomerRecord = serde_json::from_value(value.clone())?;
                    Ok(CustomerRef::Known(record))
                }
                Some(other) => Err(BillingError::invalid_argument(render(other))),
            },
            other => Err(BillingError::invalid_argument(render(other))),
        }
    }
}

impl From<Customer> for CustomerRef {
    fn from(resolved: Customer) -> Self {
        match resolved {
            Customer::Known(record) => CustomerRef::Known(record),
            Customer::Unknown(_) => CustomerRef::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for CustomerRef {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        CustomerRef::from_value(&value).map_err(D::Error::custom)
    }
}

/// The stand-in substituted for "no customer on file". Shares the real
/// customer's capability surface; immutable, so freely shareable. Plan
/// writes are absorbed and reads keep returning the registry default.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownCustomer {
    payment_history: PaymentHistory,
}

impl UnknownCustomer {
    pub fn new() -> Self {
        Self {
            payment_history: PaymentHistory::null(),
        }
    }

    pub fn name(&self) -> &'static str {
        OCCUPANT
    }

    pub fn billing_plan(&self) -> BillingPlan {
        Registry.default_plan()
    }

    pub fn payment_history(&self) -> &PaymentHistory {
        &self.payment_history
    }
}

impl Default for UnknownCustomer {
    fn default() -> Self {
        Self::new()
    }
}

/// A resolved customer: one closed variant pair instead of ad-hoc
/// probing at every call site. Every value exposes the same capability
/// set, so callers never branch on which variant they hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Customer {
    Known(CustomerRecord),
    Unknown(UnknownCustomer),
}

impl Customer {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Customer::Unknown(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Customer::Known(record) => &record.name,
            Customer::Unknown(stand_in) => stand_in.name(),
        }
    }

    pub fn billing_plan(&self) -> BillingPlan {
        match self {
            Customer::Known(record) => record.billing_plan,
            Customer::Unknown(stand_in) => stand_in.billing_plan(),
        }
    }

    /// Plain overwrite on a real customer. On the stand-in the write is
    /// accepted and discarded, so callers may assign uniformly without
    /// a branch.
    pub fn set_billing_plan(&mut self, plan: BillingPlan) {
        match self {
            Customer::Known(record) => record.billing_plan = plan,
            Customer::Unknown(_) => {
                tracing::debug!(plan = plan.as_str(), "plan write absorbed by unknown customer");
            }
        }
    }

    pub fn payment_history(&self) -> &PaymentHistory {
        match self {
            Customer::Known(record) => &record.payment_history,
            Customer::Unknown(stand_in) => stand_in.payment_history(),
        }
    }

    pub fn weeks_delinquent_in_last_year(&self) -> u32 {
        self.payment_history().weeks_delinquent_in_last_year()
    }
}

// Serializes to the uniform capability surface: the same shape whether
// the value is real or the stand-in.
impl Serialize for Customer {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct HistorySurface {
            weeks_delinquent_in_last_year: u32,
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Surface<'a> {
            name: &'a str,
            billing_plan: BillingPlan,
            payment_history: HistorySurface,
            is_unknown: bool,
        }

        Surface {
            name: self.name(),
            billing_plan: self.billing_plan(),
            payment_history: HistorySurface {
                weeks_delinquent_in_last_year: self.weeks_delinquent_in_last_year(),
            },
            is_unknown: self.is_unknown(),
        }
        .serialize(serializer)
    }
}

/// Converts a customer reference into the resolved polymorphic value.
/// The marker becomes a freshly constructed stand-in with its own null
/// payment history; a real record passes through unchanged so plan
/// mutation reaches the original data.
pub fn resolve(raw: CustomerRef) -> Customer {
    match raw {
        CustomerRef::Known(record) => Customer::Known(record),
        CustomerRef::Unknown => Customer::Unknown(UnknownCustomer::new()),
    }
}

/// Wire-level resolution over the three accepted shapes: marker string,
/// record object, or already-resolved value (classification preserved).
pub fn resolve_value(raw: &Value) -> Result<Customer> {
    Ok(resolve(CustomerRef::from_value(raw)?))
}

/// Strict classification of a wire-level value. The marker is unknown;
/// an object exposing a boolean `isUnknown` reports its flag. Anything
/// else fails rather than being silently treated as known.
pub fn is_unknown(raw: &Value) -> Result<bool> {
    match raw {
        Value::String(s) if Registry.is_marker(s) => Ok(true),
        Value::Object(map) => match map.get("isUnknown") {
            Some(Value::Bool(flag)) => Ok(*flag),
            _ => Err(BillingError::invalid_argument(render(raw))),
        },
        other => Err(BillingError::invalid_argument(render(other))),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
