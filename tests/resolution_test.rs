use serde_json::json;
use site_billing::core::report;
use site_billing::{
    is_unknown, resolve, resolve_value, BillingError, BillingPlan, CustomerRecord, CustomerRef,
    PaymentHistory, Site,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_end_to_end_resolution_from_json_file() {
    let mut input = NamedTempFile::new().unwrap();
    let sites_json = json!([
        {"customer": {"name": "John Doe", "billingPlan": "premium",
                      "paymentHistory": {"weeksDelinquentInLastYear": 10}}},
        {"customer": {"name": "Jane Doe"}},
        {"customer": "unknown"}
    ]);
    write!(input, "{sites_json}").unwrap();

    let sites = Site::load_all(input.path()).unwrap();
    assert_eq!(sites.len(), 3);

    assert_eq!(report::customer_name(&sites[0]), "John Doe");
    assert_eq!(report::billing_plan(&sites[0]), BillingPlan::Premium);
    assert_eq!(report::weeks_delinquent_in_last_year(&sites[0]), 10);

    assert_eq!(report::customer_name(&sites[1]), "Jane Doe");
    assert_eq!(report::billing_plan(&sites[1]), BillingPlan::Basic);
    assert_eq!(report::weeks_delinquent_in_last_year(&sites[1]), 0);

    assert_eq!(report::customer_name(&sites[2]), "occupant");
    assert_eq!(report::display_name(&sites[2]), "unknown occupant");
    assert_eq!(report::weeks_delinquent_in_last_year(&sites[2]), 0);

    let summary = report::summarize(&sites);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.unknown, 1);
    assert_eq!(summary.delinquent, 1);
}

#[test]
fn test_load_all_rejects_malformed_customer_reference() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, r#"[{{"customer": "vacant"}}]"#).unwrap();

    let result = Site::load_all(input.path());
    assert!(matches!(
        result,
        Err(BillingError::SerializationError(_))
    ));
}

#[test]
fn test_uniform_plan_assignment_across_mixed_sites() {
    let mut sites = vec![
        Site::new(CustomerRef::Known(CustomerRecord::new("John Doe"))),
        Site::new(CustomerRef::Unknown),
    ];

    report::assign_plan_to_all(&mut sites, BillingPlan::Premium);

    // The real customer keeps the write, the stand-in absorbs it.
    assert_eq!(sites[0].customer().billing_plan(), BillingPlan::Premium);
    assert_eq!(sites[1].customer().billing_plan(), BillingPlan::Basic);
}

#[test]
fn test_resolution_is_idempotent_over_the_wire() {
    let shapes = [
        json!("unknown"),
        json!({"name": "John Doe", "billingPlan": "premium"}),
    ];

    for shape in shapes {
        let once = resolve_value(&shape).unwrap();
        let twice = resolve_value(&serde_json::to_value(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(
            is_unknown(&serde_json::to_value(&once).unwrap()).unwrap(),
            once.is_unknown()
        );
    }
}

#[test]
fn test_strict_classification_surfaces_the_bad_value() {
    let err = is_unknown(&json!({"name": "John Doe"})).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"investigate bad value: <{"name":"John Doe"}>"#
    );
}

#[test]
fn test_resolved_surface_round_trips_through_a_site() {
    let site = Site::new(CustomerRef::Known(
        CustomerRecord::new("John Doe")
            .with_payment_history(PaymentHistory::recorded(vec![], 4)),
    ));

    let wire = serde_json::to_value(&site).unwrap();
    assert_eq!(wire["customer"]["isUnknown"], json!(false));
    assert_eq!(
        wire["customer"]["paymentHistory"]["weeksDelinquentInLastYear"],
        json!(4)
    );

    let reloaded: Site = serde_json::from_value(wire).unwrap();
    assert_eq!(reloaded.customer().name(), "John Doe");
    assert!(!reloaded.customer().is_unknown());
}

#[test]
fn test_stand_in_carries_its_own_null_history() {
    let customer = resolve(CustomerRef::Unknown);
    assert_eq!(customer.payment_history().weeks_delinquent_in_last_year(), 0);
    assert!(customer.payment_history().payments().is_empty());
}
