use super::IntentStrategy;
use crate::engine::domain::StateCode;
use serde::Serialize;

/// A named state plus strategy, applied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub state: StateCode,
    pub strategy: IntentStrategy,
}

static SCENARIOS: [Scenario; 3] = [
    Scenario {
        id: "quality-nsw",
        title: "Authority First",
        description: "Focus on NSW top-tier providers with institutional authority.",
        state: StateCode::Nsw,
        strategy: IntentStrategy::Authority,
    },
    Scenario {
        id: "budget-vic",
        title: "Budget Optimiser",
        description: "Fastest path to Victoria qualifications at the best price.",
        state: StateCode::Vic,
        strategy: IntentStrategy::Value,
    },
    Scenario {
        id: "compliance-qld",
        title: "Safety First",
        description: "QLD providers with strictly audited compliance markers.",
        state: StateCode::Qld,
        strategy: IntentStrategy::Compliance,
    },
];

impl Scenario {
    pub fn all() -> &'static [Scenario] {
        &SCENARIOS
    }

    pub fn find(id: &str) -> Option<&'static Scenario> {
        let id = id.trim();
        SCENARIOS.iter().find(|scenario| scenario.id == id)
    }
}
