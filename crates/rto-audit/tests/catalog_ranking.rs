//! End-to-end behavior from a catalog file on disk through partitioning,
//! ranking, verdicts and export, using only the public API.

mod common {
    use rto_audit::engine::ProviderCatalog;
    use std::path::PathBuf;

    pub(super) fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("providers.json")
    }

    pub(super) fn catalog() -> ProviderCatalog {
        ProviderCatalog::from_path(fixture_path()).expect("fixture catalog loads")
    }
}

use common::catalog;
use rto_audit::engine::export::write_metric_table;
use rto_audit::engine::{
    rank_providers, summarize_comparison, sustainability_verdict, ComparisonSession,
    IntentStrategy, Scenario, StateCode, VerdictStatus,
};

fn ranked_ids(strategy: Option<IntentStrategy>) -> Vec<String> {
    let catalog = catalog();
    let buckets = catalog.partition();
    rank_providers(buckets.providers(StateCode::Vic), strategy)
        .into_iter()
        .map(|provider| provider.id.clone())
        .collect()
}

#[test]
fn national_providers_join_every_bucket() {
    let catalog = catalog();
    let buckets = catalog.partition();

    let vic: Vec<&str> = buckets
        .providers(StateCode::Vic)
        .iter()
        .map(|provider| provider.id.as_str())
        .collect();
    assert_eq!(
        vic,
        [
            "vic-undisclosed",
            "vic-premium",
            "vic-budget-high",
            "vic-budget-low",
            "everywhere-online-vic"
        ]
    );
    for state in StateCode::ordered() {
        assert!(
            buckets
                .find(state, &format!("everywhere-online-{}", state.code().to_ascii_lowercase()))
                .is_some(),
            "national copy missing from {state}"
        );
    }
}

#[test]
fn each_strategy_orders_the_bucket() {
    assert_eq!(
        ranked_ids(Some(IntentStrategy::Compliance)),
        [
            "vic-undisclosed",
            "vic-premium",
            "vic-budget-high",
            "vic-budget-low",
            "everywhere-online-vic"
        ]
    );
    assert_eq!(
        ranked_ids(Some(IntentStrategy::Value)),
        [
            "vic-budget-high",
            "vic-budget-low",
            "everywhere-online-vic",
            "vic-premium",
            "vic-undisclosed"
        ]
    );
    assert_eq!(
        ranked_ids(Some(IntentStrategy::Authority)),
        [
            "vic-undisclosed",
            "vic-premium",
            "vic-budget-high",
            "vic-budget-low",
            "everywhere-online-vic"
        ]
    );
    assert_eq!(
        ranked_ids(Some(IntentStrategy::StudentFirst)),
        [
            "vic-undisclosed",
            "everywhere-online-vic",
            "vic-premium",
            "vic-budget-high",
            "vic-budget-low"
        ]
    );
}

#[test]
fn market_counts_the_national_provider() {
    let market = catalog().market(StateCode::Vic);

    assert_eq!(market.provider_count, 5);
    assert_eq!(market.median_price, 1800.0);
    assert_eq!(market.mean_score, 77);
}

#[test]
fn verdicts_follow_the_state_market() {
    let catalog = catalog();
    let market = catalog.market(StateCode::Vic);

    let premium = catalog.find("vic-premium").expect("premium provider");
    let verdict = sustainability_verdict(premium, &market);
    assert_eq!(verdict.status, VerdictStatus::Critical);
    assert_eq!(verdict.attrition_label, "81% Continuity Variance");
    assert!(verdict
        .insight
        .contains("At $2000, this pricing reflects a 11% premium against the market median"));

    let high = catalog.find("vic-budget-high").expect("budget provider");
    let verdict = sustainability_verdict(high, &market);
    assert_eq!(verdict.status, VerdictStatus::Caution);
    assert!(verdict
        .insight
        .ends_with("performance is above the state maturity baseline of 77."));

    let undisclosed = catalog.find("vic-undisclosed").expect("undisclosed provider");
    assert_eq!(
        sustainability_verdict(undisclosed, &market).attrition_label,
        "Data Pending"
    );
}

#[test]
fn budget_scenario_then_comparison() {
    let catalog = catalog();
    let buckets = catalog.partition();
    let mut session = ComparisonSession::new(&buckets, StateCode::Nsw);
    assert_eq!(session.slate().ids(), ["everywhere-online-nsw", "none", "none"]);

    let scenario = Scenario::find("budget-vic").expect("budget scenario");
    session.select_scenario(scenario);

    assert_eq!(
        session.slate().ids(),
        ["vic-budget-high", "vic-budget-low", "everywhere-online-vic"]
    );
    let compared = session.compared_providers();
    let summary = summarize_comparison(&compared);
    assert_eq!(summary.overall_winner.as_deref(), Some("vic-budget-high"));
    let asqa = summary
        .winners
        .iter()
        .find(|winner| winner.label == "ASQA Registration")
        .expect("registration winner");
    assert_eq!(asqa.provider_id.as_deref(), Some("vic-budget-high"));
}

#[test]
fn export_writes_the_state_table() {
    let catalog = catalog();
    let buckets = catalog.partition();

    let mut out = Vec::new();
    write_metric_table(&mut out, buckets.providers(StateCode::Vic)).expect("csv written");
    let text = String::from_utf8(out).expect("utf8");

    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 6);
    assert!(rows[0].starts_with("id,name,primary_score,price,ASQA Registration"));
    assert!(rows[1].starts_with("vic-undisclosed,Undisclosed Fees College,90,,Pass,Pass,85,"));
    assert!(rows[5].starts_with("everywhere-online-vic,Everywhere Online,60,1800,Fail,Fail,"));
}
