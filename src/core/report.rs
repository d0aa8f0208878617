use crate::core::registry::BillingPlan;
use crate::domain::model::Site;
use serde::Serialize;

/// Occupant name for a site, `"occupant"` when no customer is on file.
pub fn customer_name(site: &Site) -> &str {
    site.customer().name()
}

/// Display variant used by listings: flags the stand-in explicitly.
/// The one read that still consults the discriminator, through
/// `is_unknown()` rather than probing the value's shape.
pub fn display_name(site: &Site) -> String {
    let customer = site.customer();
    if customer.is_unknown() {
        format!("unknown {}", customer.name())
    } else {
        customer.name().to_string()
    }
}

pub fn billing_plan(site: &Site) -> BillingPlan {
    site.customer().billing_plan()
}

pub fn weeks_delinquent_in_last_year(site: &Site) -> u32 {
    site.customer().weeks_delinquent_in_last_year()
}

/// Assigns a plan across every site uniformly. Unknown customers absorb
/// the write; no branching here.
pub fn assign_plan_to_all(sites: &mut [Site], plan: BillingPlan) {
    for site in sites.iter_mut() {
        site.customer_mut().set_billing_plan(plan);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteSummary {
    pub total: usize,
    pub unknown: usize,
    pub delinquent: usize,
}

/// Tallies a site list through the uniform surface.
pub fn summarize(sites: &[Site]) -> SiteSummary {
    let mut summary = SiteSummary {
        total: sites.len(),
        ..SiteSummary::default()
    };

    for site in sites {
        let customer = site.customer();
        if customer.is_unknown() {
            summary.unknown += 1;
        }
        if customer.weeks_delinquent_in_last_year() > 0 {
            summary.delinquent += 1;
        }
        tracing::debug!(
            name = customer.name(),
            plan = customer.billing_plan().as_str(),
            weeks_delinquent = customer.weeks_delinquent_in_last_year(),
            "site tallied"
        );
    }

    tracing::info!(
        total = summary.total,
        unknown = summary.unknown,
        delinquent = summary.delinquent,
        "site summary complete"
    );
    summary
}
