use crate::engine::catalog::{CatalogError, ProviderCatalog};
use crate::engine::domain::{InventoryDepth, Jurisdiction, StateCode};
use crate::engine::export::write_metric_table;
use crate::engine::scoring::transform_all;

fn record(id: &str, state: &str, price: &str, score: f64, extra: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "name": "{id} College",
            "state": "{state}",
            "type": "Private RTO",
            "price": {price},
            "mdpa_score": {score},
            "status": "active",
            "rto_code": "91234",
            {extra}
            "audit": {{
                "groups": {{
                    "regulatory": {{ "label": "Regulatory", "score": 70 }},
                    "intent": {{ "label": "Intent", "score": 60 }},
                    "ux": {{ "label": "UX", "score": 80 }},
                    "performance": {{ "label": "Performance", "score": 65 }},
                    "accessibility": {{ "label": "Accessibility", "score": 55 }},
                    "commercial": {{ "label": "Commercial", "score": 80 }},
                    "authority": {{ "label": "Authority", "score": 75 }}
                }},
                "overall_score": {score},
                "last_audit": "2025-09-14"
            }}
        }}"#
    )
}

fn catalog_json(records: &[String]) -> String {
    format!("[{}]", records.join(","))
}

#[test]
fn parses_source_field_names() {
    let raw = catalog_json(&[
        record("sydney", "NSW", "1850", 72.4, ""),
        record(
            "everywhere",
            "National",
            "null",
            81.0,
            r#""operational_pattern": "Registry Disclosure Pending","#,
        ),
    ]);

    let catalog = ProviderCatalog::from_json_str(&raw).expect("catalog parses");

    assert_eq!(catalog.len(), 2);
    let sydney = catalog.find("sydney").expect("sydney present");
    assert_eq!(sydney.jurisdiction, Jurisdiction::State(StateCode::Nsw));
    assert_eq!(sydney.organisation_type, "Private RTO");
    assert_eq!(sydney.price, Some(1850.0));
    assert_eq!(sydney.primary_score, 72.4);
    assert_eq!(sydney.audit.groups.ux.score, 80.0);

    let everywhere = catalog.find("everywhere").expect("national present");
    assert_eq!(everywhere.price, None);
    assert!(everywhere.jurisdiction.is_everywhere());
}

#[test]
fn parses_sustainability_records() {
    let raw = catalog_json(&[record("audited", "QLD", "2100", 64.0, "").replace(
        r#""last_audit": "2025-09-14""#,
        r#""last_audit": "2025-09-14",
           "sustainability": {
               "attrition_risk": 0.82,
               "failure_rate": 0.41,
               "inventory_depth": "D+",
               "wcag_barrier_count": 27,
               "w3c_compliant": false
           }"#,
    )]);

    let catalog = ProviderCatalog::from_json_str(&raw).expect("catalog parses");
    let record = catalog
        .find("audited")
        .and_then(|provider| provider.audit.sustainability.as_ref())
        .expect("sustainability present");

    assert_eq!(record.inventory_depth, InventoryDepth::DPlus);
    assert_eq!(record.wcag_barrier_count, 27);
    assert!(!record.compliant);
}

#[test]
fn partition_and_market_come_from_the_same_snapshot() {
    let raw = catalog_json(&[
        record("melbourne", "VIC", "2000", 70.0, ""),
        record("geelong", "VIC", "1500", 80.0, ""),
        record("online", "Multi", "1800", 90.0, ""),
    ]);
    let catalog = ProviderCatalog::from_json_str(&raw).expect("catalog parses");

    let buckets = catalog.partition();
    let market = catalog.market(StateCode::Vic);

    assert_eq!(buckets.providers(StateCode::Vic).len(), 3);
    assert_eq!(buckets.providers(StateCode::Nt).len(), 1);
    assert_eq!(market.provider_count, 3);
    assert_eq!(market.median_price, 1800.0);
    assert_eq!(market.mean_score, 80);
}

#[test]
fn rejects_non_positive_price() {
    let raw = catalog_json(&[record("free", "SA", "0", 70.0, "")]);

    let err = ProviderCatalog::from_json_str(&raw).expect_err("zero price rejected");

    assert!(matches!(err, CatalogError::InvalidProvider { ref id, .. } if id == "free"));
    assert!(err.to_string().contains("price"));
}

#[test]
fn rejects_out_of_range_scores() {
    let raw = catalog_json(&[record("inflated", "SA", "1500", 120.0, "")]);

    let err = ProviderCatalog::from_json_str(&raw).expect_err("score rejected");

    assert!(err.to_string().contains("mdpa_score"));
}

#[test]
fn rejects_unknown_state_codes() {
    let raw = catalog_json(&[record("overseas", "NZ", "1500", 70.0, "")]);

    let err = ProviderCatalog::from_json_str(&raw).expect_err("state rejected");

    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ProviderCatalog::from_path("/nonexistent/providers.json")
        .expect_err("missing file");

    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn export_writes_one_row_per_provider() {
    let raw = catalog_json(&[
        record("sydney", "NSW", "null", 72.4, ""),
        record("parramatta", "NSW", "1850", 66.0, ""),
    ]);
    let catalog = ProviderCatalog::from_json_str(&raw).expect("catalog parses");
    let providers = transform_all(catalog.providers());

    let mut out = Vec::new();
    write_metric_table(&mut out, &providers).expect("csv written");
    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "id,name,primary_score,price,ASQA Registration,Scope Match,Page Speed,Mobile Usability,Course Completeness,Price Transparency,Google Reviews,Review Volume,Review Recency"
    );
    assert_eq!(
        lines[1],
        "sydney,sydney College,72.4,,Pass,Pass,80,70,3,4,4.5,155,4"
    );
    assert_eq!(
        lines[2],
        "parramatta,parramatta College,66,1850,Pass,Pass,80,70,3,4,4.5,142,4"
    );
    assert_eq!(lines.len(), 3);
}
