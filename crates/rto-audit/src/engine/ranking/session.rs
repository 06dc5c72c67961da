use super::{top_slate, IntentStrategy, Scenario, Slate, DEFAULT_ANALYSIS};
use crate::engine::domain::StateCode;
use crate::engine::partition::StateBuckets;
use crate::engine::scoring::TransformedProvider;
use serde::Serialize;

/// The visitor's current comparison: active state, slate, and whichever
/// strategy or scenario produced it.
#[derive(Debug, Clone)]
pub struct ComparisonSession<'a> {
    buckets: &'a StateBuckets,
    state: StateCode,
    slate: Slate,
    strategy: Option<IntentStrategy>,
    scenario: Option<&'static Scenario>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub state: StateCode,
    pub slate: Slate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<IntentStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<&'static str>,
    pub analysis: &'static str,
}

impl<'a> ComparisonSession<'a> {
    /// Opens on `state` with its three highest-scoring providers.
    pub fn new(buckets: &'a StateBuckets, state: StateCode) -> Self {
        let mut session = Self {
            buckets,
            state,
            slate: Slate::empty(),
            strategy: None,
            scenario: None,
        };
        session.select_state(state);
        session
    }

    pub fn state(&self) -> StateCode {
        self.state
    }

    pub fn slate(&self) -> &Slate {
        &self.slate
    }

    pub fn strategy(&self) -> Option<IntentStrategy> {
        self.strategy
    }

    pub fn scenario(&self) -> Option<&'static Scenario> {
        self.scenario
    }

    pub fn providers(&self) -> &'a [TransformedProvider] {
        self.buckets.providers(self.state)
    }

    pub fn select_state(&mut self, state: StateCode) {
        self.state = state;
        // Buckets are already in primary-score order.
        self.slate = top_slate(self.buckets.providers(state), None);
        self.strategy = None;
        self.scenario = None;
    }

    /// Manually fill one slot. Returns false for an out-of-range slot.
    pub fn select_provider(&mut self, slot: usize, provider_id: Option<String>) -> bool {
        if !self.slate.set(slot, provider_id) {
            return false;
        }
        self.strategy = None;
        self.scenario = None;
        true
    }

    pub fn select_strategy(&mut self, strategy: IntentStrategy) {
        self.slate = top_slate(self.providers(), Some(strategy));
        self.strategy = Some(strategy);
        self.scenario = None;
    }

    /// Switch state and apply the scenario's strategy in one step.
    pub fn select_scenario(&mut self, scenario: &'static Scenario) {
        let slate = top_slate(self.buckets.providers(scenario.state), Some(scenario.strategy));

        self.state = scenario.state;
        self.slate = slate;
        self.strategy = Some(scenario.strategy);
        self.scenario = Some(scenario);
    }

    /// Unknown identifiers leave the session untouched.
    pub fn select_scenario_by_id(&mut self, scenario_id: &str) -> Option<&'static Scenario> {
        let scenario = Scenario::find(scenario_id)?;
        self.select_scenario(scenario);
        Some(scenario)
    }

    /// Slotted providers resolved against the active state, in slot order.
    pub fn compared_providers(&self) -> Vec<&'a TransformedProvider> {
        let buckets = self.buckets;
        let state = self.state;
        self.slate
            .provider_ids()
            .filter_map(|id| buckets.find(state, id))
            .collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let profile = self.strategy.map(IntentStrategy::profile);
        SessionSnapshot {
            state: self.state,
            slate: self.slate.clone(),
            strategy: self.strategy,
            scenario: self.scenario.map(|scenario| scenario.id),
            advice: profile.map(|profile| profile.advice),
            analysis: profile
                .map(|profile| profile.analysis)
                .unwrap_or(DEFAULT_ANALYSIS),
        }
    }
}
