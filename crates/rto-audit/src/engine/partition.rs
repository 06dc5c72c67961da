use super::domain::{Jurisdiction, StateCode};
use super::scoring::TransformedProvider;
use std::collections::BTreeMap;

/// Providers grouped per state, each bucket sorted by primary score.
#[derive(Debug, Clone, Default)]
pub struct StateBuckets {
    buckets: BTreeMap<StateCode, Vec<TransformedProvider>>,
}

impl StateBuckets {
    pub fn providers(&self, state: StateCode) -> &[TransformedProvider] {
        self.buckets
            .get(&state)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn find(&self, state: StateCode, id: &str) -> Option<&TransformedProvider> {
        self.providers(state)
            .iter()
            .find(|provider| provider.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateCode, &[TransformedProvider])> {
        self.buckets
            .iter()
            .map(|(state, providers)| (*state, providers.as_slice()))
    }
}

pub fn partition_by_state(providers: &[TransformedProvider]) -> StateBuckets {
    let mut buckets: BTreeMap<StateCode, Vec<TransformedProvider>> = StateCode::ordered()
        .into_iter()
        .map(|state| (state, Vec::new()))
        .collect();

    for provider in providers {
        match provider.jurisdiction {
            Jurisdiction::State(state) => {
                if let Some(bucket) = buckets.get_mut(&state) {
                    bucket.push(provider.clone());
                }
            }
            Jurisdiction::Multi | Jurisdiction::National => {
                for (state, bucket) in buckets.iter_mut() {
                    let copy = provider.localized_for(*state);
                    let already_listed = bucket
                        .iter()
                        .any(|existing| existing.id == provider.source_id || existing.id == copy.id);
                    if !already_listed {
                        bucket.push(copy);
                    }
                }
            }
        }
    }

    for bucket in buckets.values_mut() {
        // Stable: equal scores keep discovery order.
        bucket.sort_by(|a, b| b.score.total_cmp(&a.score));
    }

    StateBuckets { buckets }
}
