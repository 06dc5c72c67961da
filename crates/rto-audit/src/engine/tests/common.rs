use crate::engine::domain::{
    AuditData, AuditGroups, CategoryGroup, InventoryDepth, Jurisdiction, Provider,
    SustainabilityRecord,
};
use crate::engine::scoring::{transform_provider, TransformedProvider};

pub(super) fn group(score: f64) -> CategoryGroup {
    CategoryGroup {
        label: String::new(),
        score,
        metrics: Vec::new(),
    }
}

pub(super) fn provider(id: &str, jurisdiction: &str, primary_score: f64) -> Provider {
    Provider {
        id: id.to_string(),
        name: format!("{id} Training"),
        website: Some(format!("https://{id}.example.com.au")),
        website_secondary: None,
        jurisdiction: Jurisdiction::parse(jurisdiction).expect("valid jurisdiction"),
        organisation_type: "Private RTO".to_string(),
        price: None,
        primary_score,
        status: "active".to_string(),
        phone: None,
        email: None,
        rto_code: "90001".to_string(),
        operational_pattern: None,
        network_id: None,
        contact_name: None,
        address: None,
        audit: AuditData {
            groups: AuditGroups {
                regulatory: group(70.0),
                intent: group(70.0),
                ux: group(70.0),
                performance: group(70.0),
                accessibility: group(70.0),
                commercial: group(70.0),
                authority: group(70.0),
            },
            overall_score: primary_score,
            last_audit: "2025-10-01".to_string(),
            sustainability: None,
        },
    }
}

pub(super) fn priced(mut provider: Provider, price: Option<f64>) -> Provider {
    provider.price = price;
    provider
}

/// Override the group scores the transformer reads.
pub(super) struct GroupScores {
    pub regulatory: f64,
    pub ux: f64,
    pub intent: f64,
    pub authority: f64,
    pub commercial: f64,
}

pub(super) fn scored(mut provider: Provider, scores: GroupScores) -> Provider {
    let groups = &mut provider.audit.groups;
    groups.regulatory.score = scores.regulatory;
    groups.ux.score = scores.ux;
    groups.intent.score = scores.intent;
    groups.authority.score = scores.authority;
    groups.commercial.score = scores.commercial;
    provider
}

pub(super) fn sustainability(
    attrition_risk: f64,
    failure_rate: f64,
    inventory_depth: InventoryDepth,
    wcag_barrier_count: u32,
) -> SustainabilityRecord {
    SustainabilityRecord {
        attrition_risk,
        failure_rate,
        inventory_depth,
        wcag_barrier_count,
        compliant: false,
    }
}

pub(super) fn with_sustainability(mut provider: Provider, record: SustainabilityRecord) -> Provider {
    provider.audit.sustainability = Some(record);
    provider
}

pub(super) fn transformed(providers: &[Provider]) -> Vec<TransformedProvider> {
    providers.iter().map(transform_provider).collect()
}

pub(super) fn ids(providers: &[&TransformedProvider]) -> Vec<String> {
    providers.iter().map(|provider| provider.id.clone()).collect()
}

/// Three providers whose orderings differ under every strategy.
///
/// | id      | status   | regulatory | price | score | authority | ux+intent |
/// |---------|----------|------------|-------|-------|-----------|-----------|
/// | alpha   | active   | 70         | 2500  | 80    | 60        | 140       |
/// | bravo   | inactive | 95         | 1200  | 65    | 90        | 120       |
/// | charlie | active   | 85         | -     | 75    | 75        | 175       |
pub(super) fn strategy_fixture() -> Vec<TransformedProvider> {
    let alpha = scored(
        priced(provider("alpha", "NSW", 80.0), Some(2500.0)),
        GroupScores {
            regulatory: 70.0,
            ux: 70.0,
            intent: 70.0,
            authority: 60.0,
            commercial: 70.0,
        },
    );
    let mut bravo = scored(
        priced(provider("bravo", "NSW", 65.0), Some(1200.0)),
        GroupScores {
            regulatory: 95.0,
            ux: 60.0,
            intent: 60.0,
            authority: 90.0,
            commercial: 70.0,
        },
    );
    bravo.status = "inactive".to_string();
    let charlie = scored(
        provider("charlie", "NSW", 75.0),
        GroupScores {
            regulatory: 85.0,
            ux: 90.0,
            intent: 85.0,
            authority: 75.0,
            commercial: 70.0,
        },
    );

    transformed(&[alpha, bravo, charlie])
}

/// Four VIC providers priced `[none, 2000, 1500, 1500]`.
pub(super) fn budget_vic_fixture() -> Vec<Provider> {
    vec![
        provider("vic-undisclosed", "VIC", 90.0),
        priced(provider("vic-premium", "VIC", 85.0), Some(2000.0)),
        priced(provider("vic-budget-low", "VIC", 70.0), Some(1500.0)),
        priced(provider("vic-budget-high", "VIC", 78.0), Some(1500.0)),
    ]
}
